//! NonZero - any value except zero

use super::{Negative, Number, Positive};

/// A value different from zero.
///
/// Unlike `std::num::NonZeroI32` and friends this is generic over any
/// [`Number`], floats included. No arithmetic is defined on it: the sign
/// of the operands is unknown, so no narrower result domain exists.
///
/// # Examples
///
/// ```
/// use safetypes_core::{Negative, NonZero};
///
/// let widened: NonZero<i64> = Negative::new(-7).unwrap().into();
/// assert_eq!(widened, -7);
/// assert!(NonZero::new(0.0).is_none());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NonZero<V> {
    value: V,
}

impl<V: Number> NonZero<V> {
    /// Wraps `value` if it is not zero.
    ///
    /// NaN is rejected like in every other domain: it is neither below nor
    /// above zero.
    #[inline]
    pub fn new(value: V) -> Option<Self> {
        let zero = V::zero();
        if value < zero || value > zero {
            Some(NonZero { value })
        } else {
            None
        }
    }
}

impl<V: Copy> From<Positive<V>> for NonZero<V> {
    #[inline]
    fn from(positive: Positive<V>) -> Self {
        NonZero {
            value: positive.value(),
        }
    }
}

impl<V: Copy> From<Negative<V>> for NonZero<V> {
    #[inline]
    fn from(negative: Negative<V>) -> Self {
        NonZero {
            value: negative.value(),
        }
    }
}

impl_domain!(NonZero, "value != 0", [Number]);
for_each_number!(impl_raw_interop!(NonZero, "value != 0"));
