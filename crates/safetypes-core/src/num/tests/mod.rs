//! Tests for numeric domains.

mod test_closure;

use super::*;

fn pos(value: i64) -> Positive<i64> {
    Positive::new(value).unwrap()
}

fn neg(value: i64) -> Negative<i64> {
    Negative::new(value).unwrap()
}

fn non_neg(value: i64) -> NonNegative<i64> {
    NonNegative::new(value).unwrap()
}

fn non_pos(value: i64) -> NonPositive<i64> {
    NonPositive::new(value).unwrap()
}
