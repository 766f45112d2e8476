//! Boundary values for domain predicate tests.
//!
//! Each table lists a value together with the sign class it belongs to, so
//! a test can walk the table and check every predicate against it.

/// Where a value sits relative to zero and the unit bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Class {
    pub negative: bool,
    pub zero: bool,
    pub positive: bool,
    /// Inside `[0, 1]`.
    pub unit: bool,
    /// Inside `[-1, 1]`.
    pub signed_unit: bool,
}

impl Class {
    const fn of(negative: bool, zero: bool, unit: bool, signed_unit: bool) -> Self {
        Self {
            negative,
            zero,
            positive: !negative && !zero,
            unit,
            signed_unit,
        }
    }
}

/// Signed integer boundaries.
pub const SIGNED: [(i64, Class); 7] = [
    (i64::MIN, Class::of(true, false, false, false)),
    (-2, Class::of(true, false, false, false)),
    (-1, Class::of(true, false, false, true)),
    (0, Class::of(false, true, true, true)),
    (1, Class::of(false, false, true, true)),
    (2, Class::of(false, false, false, false)),
    (i64::MAX, Class::of(false, false, false, false)),
];

/// Floating point boundaries, infinities included.
pub const FLOATS: [(f64, Class); 11] = [
    (f64::NEG_INFINITY, Class::of(true, false, false, false)),
    (-1.5, Class::of(true, false, false, false)),
    (-1.0, Class::of(true, false, false, true)),
    (-0.5, Class::of(true, false, false, true)),
    (-0.0, Class::of(false, true, true, true)),
    (0.0, Class::of(false, true, true, true)),
    (f64::MIN_POSITIVE, Class::of(false, false, true, true)),
    (0.5, Class::of(false, false, true, true)),
    (1.0, Class::of(false, false, true, true)),
    (1.5, Class::of(false, false, false, false)),
    (f64::INFINITY, Class::of(false, false, false, false)),
];
