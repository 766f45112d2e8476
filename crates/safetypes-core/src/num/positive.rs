//! Positive - values strictly greater than zero

use super::Number;

/// A value strictly greater than zero.
///
/// Multiplying two positives gives a [`Positive`] for integers and a
/// [`NonNegative`](super::NonNegative) otherwise, since a floating-point
/// product can underflow to zero.
///
/// # Examples
///
/// ```
/// use safetypes_core::{NonNegative, Positive};
///
/// let three = Positive::new(3).unwrap();
/// let four = Positive::new(4).unwrap();
/// assert_eq!(three * four, Positive::new(12).unwrap());
///
/// let half = Positive::new(0.5).unwrap();
/// assert_eq!(half * half, NonNegative::new(0.25).unwrap());
///
/// assert!(Positive::new(0).is_none());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Positive<V> {
    value: V,
}

impl<V: Number> Positive<V> {
    /// Wraps `value` if it is greater than zero.
    #[inline]
    pub fn new(value: V) -> Option<Self> {
        if value > V::zero() {
            Some(Positive { value })
        } else {
            None
        }
    }
}

impl_domain!(Positive, "value > 0", [Number]);
for_each_number!(impl_raw_interop!(Positive, "value > 0"));
