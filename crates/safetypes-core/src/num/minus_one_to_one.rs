//! MinusOneToOne - the closed interval [-1, 1]

use std::ops::Neg;

use super::Number;

/// A value in the closed interval `[-1, 1]`.
///
/// Only available for numbers that can be negated, since the lower bound
/// is `-1`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MinusOneToOne<V> {
    value: V,
}

impl<V> MinusOneToOne<V>
where
    V: Number + Neg<Output = V>,
{
    /// Wraps `value` if it lies in `[-1, 1]`.
    #[inline]
    pub fn new(value: V) -> Option<Self> {
        let one = V::one();
        if value >= -one && value <= one {
            Some(MinusOneToOne { value })
        } else {
            None
        }
    }

    /// The lower bound, minus one.
    #[inline]
    pub fn min() -> Self {
        MinusOneToOne { value: -V::one() }
    }

    /// The upper bound, one.
    #[inline]
    pub fn max() -> Self {
        MinusOneToOne { value: V::one() }
    }
}

impl_domain!(MinusOneToOne, "-1 <= value <= 1", [Number + Neg<Output = V>]);
for_each_signed_number!(impl_raw_interop!(MinusOneToOne, "-1 <= value <= 1"));
