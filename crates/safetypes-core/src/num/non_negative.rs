//! NonNegative - values greater than or equal to zero

use super::{Number, Positive, ZeroToOne};

/// A value greater than or equal to zero.
///
/// Every [`Positive`] and every [`ZeroToOne`] widens into a `NonNegative`
/// without a check.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NonNegative<V> {
    value: V,
}

impl<V: Number> NonNegative<V> {
    /// Wraps `value` if it is not below zero.
    #[inline]
    pub fn new(value: V) -> Option<Self> {
        if value >= V::zero() {
            Some(NonNegative { value })
        } else {
            None
        }
    }
}

impl<V: Copy> From<Positive<V>> for NonNegative<V> {
    #[inline]
    fn from(positive: Positive<V>) -> Self {
        NonNegative {
            value: positive.value(),
        }
    }
}

impl<V: Copy> From<ZeroToOne<V>> for NonNegative<V> {
    #[inline]
    fn from(unit: ZeroToOne<V>) -> Self {
        NonNegative { value: unit.value() }
    }
}

impl_domain!(NonNegative, "value >= 0", [Number]);
for_each_number!(impl_raw_interop!(NonNegative, "value >= 0"));
