//! ZeroToOne - the closed unit interval

use super::Number;

/// A value in the closed interval `[0, 1]`.
///
/// Closed under multiplication: the product of two values in `[0, 1]`
/// stays in `[0, 1]`.
///
/// # Examples
///
/// ```
/// use safetypes_core::ZeroToOne;
///
/// assert!(ZeroToOne::new(1.1).is_none());
/// assert_eq!(ZeroToOne::new(0.5).unwrap().value(), 0.5);
/// assert_eq!(ZeroToOne::<f64>::max(), 1.0);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ZeroToOne<V> {
    value: V,
}

impl<V: Number> ZeroToOne<V> {
    /// Wraps `value` if it lies in `[0, 1]`.
    #[inline]
    pub fn new(value: V) -> Option<Self> {
        if value >= V::zero() && value <= V::one() {
            Some(ZeroToOne { value })
        } else {
            None
        }
    }

    /// The lower bound, zero.
    #[inline]
    pub fn min() -> Self {
        ZeroToOne { value: V::zero() }
    }

    /// The upper bound, one.
    #[inline]
    pub fn max() -> Self {
        ZeroToOne { value: V::one() }
    }
}

impl_domain!(ZeroToOne, "0 <= value <= 1", [Number]);
for_each_number!(impl_raw_interop!(ZeroToOne, "0 <= value <= 1"));
