//! Negative - values strictly less than zero

use super::Number;

/// A value strictly less than zero.
///
/// # Examples
///
/// ```
/// use safetypes_core::{Negative, Positive};
///
/// let product = Negative::new(-2).unwrap() * Negative::new(-3).unwrap();
/// assert_eq!(product, Positive::new(6).unwrap());
/// assert!(Negative::new(0.0).is_none());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Negative<V> {
    value: V,
}

impl<V: Number> Negative<V> {
    /// Wraps `value` if it is less than zero.
    #[inline]
    pub fn new(value: V) -> Option<Self> {
        if value < V::zero() {
            Some(Negative { value })
        } else {
            None
        }
    }
}

impl_domain!(Negative, "value < 0", [Number]);
for_each_number!(impl_raw_interop!(Negative, "value < 0"));
