//! Proptest strategies for raw collection inputs.

use proptest::collection::vec;
use proptest::prelude::*;

/// Vectors of small integers with a length in `min..=max`.
pub fn int_vec(min: usize, max: usize) -> impl Strategy<Value = Vec<i32>> {
    vec(-1_000i32..1_000, min..=max)
}

/// Arbitrary text, possibly empty, including non-ASCII characters.
pub fn text() -> impl Strategy<Value = String> {
    "\\PC{0,16}"
}

/// Text with at least one character.
pub fn non_empty_text() -> impl Strategy<Value = String> {
    "\\PC{1,16}"
}

/// Finite floats in `[-range, range]`.
pub fn finite_f64(range: f64) -> impl Strategy<Value = f64> {
    -range..=range
}
