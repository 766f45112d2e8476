//! Tests for minimum-length collections.

mod test_mutations;
mod test_properties;
mod test_string;

use super::*;
use crate::non_empty_array;

fn one_two_three() -> NonEmptyArray<i32> {
    non_empty_array![1, 2, 3]
}
