//! Collections with a guaranteed minimum number of elements.
//!
//! [`MinVec`] carries its minimum as a const parameter; [`NonEmptyArray`]
//! and [`MultiElementsArray`] are the two instantiations in use.
//! [`NonEmptyString`] layers a text view over `NonEmptyArray<Grapheme>`.
//!
//! Mutations that would break the minimum are rejected (`None`) or clamped,
//! never partially applied.

mod grapheme;
mod iter;
mod min_vec;
mod non_empty_string;
mod traits;

#[cfg(test)]
mod tests;

pub use grapheme::Grapheme;
pub use iter::{IntoIter, Iter, IterMut};
pub use min_vec::{MinVec, MultiElementsArray, NonEmptyArray};
pub use non_empty_string::NonEmptyString;
pub use traits::GuardedSequence;

/// Builds a [`NonEmptyArray`] from one or more elements.
///
/// ```
/// use safetypes_core::non_empty_array;
///
/// let items = non_empty_array![1, 2, 3];
/// assert_eq!(items.len(), 3);
/// ```
#[macro_export]
macro_rules! non_empty_array {
    ($head:expr $(, $tail:expr)* $(,)?) => {
        $crate::NonEmptyArray::new($head, ::std::vec![$($tail),*])
    };
}

/// Builds a [`MultiElementsArray`] from two or more elements.
///
/// ```
/// use safetypes_core::multi_elements_array;
///
/// let pair = multi_elements_array!['a', 'b'];
/// assert_eq!(pair.second(), &'b');
/// ```
#[macro_export]
macro_rules! multi_elements_array {
    ($first:expr, $second:expr $(, $tail:expr)* $(,)?) => {
        $crate::MultiElementsArray::new($first, $second, ::std::vec![$($tail),*])
    };
}
