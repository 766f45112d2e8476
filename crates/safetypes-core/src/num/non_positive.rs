//! NonPositive - values less than or equal to zero

use super::{Negative, Number};

/// A value less than or equal to zero.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NonPositive<V> {
    value: V,
}

impl<V: Number> NonPositive<V> {
    /// Wraps `value` if it is not above zero.
    #[inline]
    pub fn new(value: V) -> Option<Self> {
        if value <= V::zero() {
            Some(NonPositive { value })
        } else {
            None
        }
    }
}

impl<V: Copy> From<Negative<V>> for NonPositive<V> {
    #[inline]
    fn from(negative: Negative<V>) -> Self {
        NonPositive {
            value: negative.value(),
        }
    }
}

impl_domain!(NonPositive, "value <= 0", [Number]);
for_each_number!(impl_raw_interop!(NonPositive, "value <= 0"));
