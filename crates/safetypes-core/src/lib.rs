//! SafeTypes Core - value types that keep their invariants
//!
//! This crate provides two families of wrapper types:
//! - Numeric domains (`Positive`, `Negative`, `NonNegative`, `NonPositive`,
//!   `NonZero`, `ZeroToOne`, `MinusOneToOne`) whose arithmetic operators
//!   return the narrowest domain the operand signs allow
//! - Minimum-length collections (`NonEmptyArray`, `MultiElementsArray`,
//!   `NonEmptyString`) whose mutations can never drop below the minimum
//!
//! Construction is always fallible and returns `None` (or an error from the
//! `TryFrom` conversions); once built, a value cannot leave its domain.

pub mod collections;
pub mod error;
mod invariant;
pub mod num;

pub use collections::{Grapheme, GuardedSequence, MinVec, MultiElementsArray, NonEmptyArray, NonEmptyString};
pub use error::{CardinalityError, DomainError};
pub use num::{MinusOneToOne, Negative, NonNegative, NonPositive, NonZero, Number, Positive, ZeroToOne};
