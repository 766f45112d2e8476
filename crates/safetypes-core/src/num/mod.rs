//! Constrained numeric domains.
//!
//! Each domain wraps a single value of a [`Number`] and guarantees one
//! predicate for as long as the value exists:
//!
//! | Type              | Predicate           |
//! |-------------------|---------------------|
//! | [`Positive`]      | `value > 0`         |
//! | [`Negative`]      | `value < 0`         |
//! | [`NonNegative`]   | `value >= 0`        |
//! | [`NonPositive`]   | `value <= 0`        |
//! | [`NonZero`]       | `value != 0`        |
//! | [`ZeroToOne`]     | `0 <= value <= 1`   |
//! | [`MinusOneToOne`] | `-1 <= value <= 1`  |
//!
//! Arithmetic between domains always yields a new instance of the domain
//! implied by the operand signs; see the operator impls on each type.

#[macro_use]
mod macros;

mod closure;
mod minus_one_to_one;
mod negative;
mod non_negative;
mod non_positive;
mod non_zero;
mod positive;
mod zero_to_one;

#[cfg(test)]
mod tests;

use num_traits::Num;

pub use minus_one_to_one::MinusOneToOne;
pub use negative::Negative;
pub use non_negative::NonNegative;
pub use non_positive::NonPositive;
pub use non_zero::NonZero;
pub use positive::Positive;
pub use zero_to_one::ZeroToOne;

/// An ordered numeric primitive with a zero, a one and the four operations.
///
/// Implemented for every built-in integer and floating-point type, and for
/// `rust_decimal::Decimal` when the `decimal` feature is enabled.
pub trait Number: Num + PartialOrd + Copy {}

impl<T> Number for T where T: Num + PartialOrd + Copy {}
