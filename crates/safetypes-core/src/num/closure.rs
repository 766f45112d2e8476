//! Sign-closure arithmetic between numeric domains.
//!
//! The result domain of every operator is fixed by the operand domains and
//! written down once, in the tables at the bottom of this file. At runtime the
//! raw result is routed back through the result domain's constructor; a
//! rejection is an invariant violation and panics.
//!
//! | lhs           | op  | rhs           | general       | integers      |
//! |---------------|-----|---------------|---------------|---------------|
//! | Positive      | `*` | Positive      | NonNegative   | Positive      |
//! | Positive      | `*` | Negative      | NonPositive   | Negative      |
//! | Negative      | `*` | Negative      | NonNegative   | Positive      |
//! | Negative      | `*` | Positive      | NonPositive   | Negative      |
//! | NonNegative   | `*` | NonNegative   | NonNegative   | NonNegative   |
//! | NonNegative   | `*` | Negative      | NonPositive   | NonPositive   |
//! | Negative      | `*` | NonNegative   | NonPositive   | NonPositive   |
//! | NonNegative   | `*` | NonPositive   | NonPositive   | NonPositive   |
//! | NonPositive   | `*` | NonPositive   | NonNegative   | NonNegative   |
//! | NonPositive   | `*` | NonNegative   | NonPositive   | NonPositive   |
//! | NonPositive   | `*` | Negative      | NonNegative   | NonNegative   |
//! | Negative      | `*` | NonPositive   | NonNegative   | NonNegative   |
//! | NonPositive   | `*` | Positive      | NonPositive   | NonPositive   |
//! | ZeroToOne     | `*` | ZeroToOne     | ZeroToOne     | ZeroToOne     |
//! | MinusOneToOne | `*` | MinusOneToOne | MinusOneToOne | MinusOneToOne |
//! | Positive      | `/` | Positive      | NonNegative   | NonNegative   |
//! | Positive      | `/` | Negative      | NonPositive   | NonPositive   |
//! | Negative      | `/` | Positive      | NonPositive   | NonPositive   |
//! | Negative      | `/` | Negative      | NonNegative   | NonNegative   |
//! | Positive      | `+` | Positive      | Positive      | Positive      |
//! | Negative      | `+` | Negative      | Negative      | Negative      |
//! | NonNegative   | `+` | NonNegative   | NonNegative   | NonNegative   |
//! | NonPositive   | `+` | NonPositive   | NonPositive   | NonPositive   |
//! | Positive      | `%` | Positive      |               | NonNegative   |
//!
//! "General" covers `f32`, `f64` and `Decimal`. Unsigned integers only get
//! the rows that do not involve a negative operand.

use std::ops::{Add, AddAssign, Div, Mul, MulAssign, Rem};

use super::{MinusOneToOne, Negative, NonNegative, NonPositive, Positive, ZeroToOne};
use crate::invariant::hold;

/// Implements one binary operator row: `Lhs<T> op Rhs<T> -> Out<T>`.
macro_rules! closure_row {
    ($t:ty: $lhs:ident $op:ident :: $method:ident $rhs:ident => $out:ident) => {
        impl $op<$rhs<$t>> for $lhs<$t> {
            type Output = $out<$t>;

            #[inline]
            fn $method(self, rhs: $rhs<$t>) -> $out<$t> {
                hold(
                    $out::new($op::$method(self.value(), rhs.value())),
                    concat!(
                        stringify!($lhs),
                        " ",
                        stringify!($method),
                        " ",
                        stringify!($rhs)
                    ),
                    stringify!($out),
                )
            }
        }
    };
}

/// Implements a compound assignment in terms of an existing closed operator.
macro_rules! closure_assign {
    ($t:ty: $ty:ident $op:ident :: $method:ident via $bin:ident :: $bin_method:ident) => {
        impl $op for $ty<$t> {
            #[inline]
            fn $method(&mut self, rhs: $ty<$t>) {
                *self = $bin::$bin_method(*self, rhs);
            }
        }
    };
}

macro_rules! sign_closure {
    // Rows where no operand can be negative; valid for every number.
    (@non_negative $t:ty) => {
        closure_row!($t: NonNegative Mul::mul NonNegative => NonNegative);
        closure_row!($t: ZeroToOne Mul::mul ZeroToOne => ZeroToOne);
        closure_row!($t: Positive Div::div Positive => NonNegative);
        closure_row!($t: Positive Add::add Positive => Positive);
        closure_row!($t: NonNegative Add::add NonNegative => NonNegative);

        closure_assign!($t: ZeroToOne MulAssign::mul_assign via Mul::mul);
        closure_assign!($t: Positive AddAssign::add_assign via Add::add);
        closure_assign!($t: NonNegative AddAssign::add_assign via Add::add);
    };

    // Rows with a negative or non-positive operand.
    (@signed $t:ty) => {
        closure_row!($t: NonNegative Mul::mul Negative => NonPositive);
        closure_row!($t: Negative Mul::mul NonNegative => NonPositive);
        closure_row!($t: NonNegative Mul::mul NonPositive => NonPositive);
        closure_row!($t: NonPositive Mul::mul NonPositive => NonNegative);
        closure_row!($t: NonPositive Mul::mul NonNegative => NonPositive);
        closure_row!($t: NonPositive Mul::mul Negative => NonNegative);
        closure_row!($t: Negative Mul::mul NonPositive => NonNegative);
        closure_row!($t: NonPositive Mul::mul Positive => NonPositive);
        closure_row!($t: MinusOneToOne Mul::mul MinusOneToOne => MinusOneToOne);
        closure_row!($t: Positive Div::div Negative => NonPositive);
        closure_row!($t: Negative Div::div Positive => NonPositive);
        closure_row!($t: Negative Div::div Negative => NonNegative);
        closure_row!($t: Negative Add::add Negative => Negative);
        closure_row!($t: NonPositive Add::add NonPositive => NonPositive);

        closure_assign!($t: MinusOneToOne MulAssign::mul_assign via Mul::mul);
        closure_assign!($t: Negative AddAssign::add_assign via Add::add);
        closure_assign!($t: NonPositive AddAssign::add_assign via Add::add);
    };

    // A product of non-zero integers is at least 1 in magnitude, so strict
    // signs survive multiplication.
    (@strict_product $t:ty) => {
        closure_row!($t: Positive Mul::mul Positive => Positive);
        closure_row!($t: Positive Rem::rem Positive => NonNegative);

        closure_assign!($t: Positive MulAssign::mul_assign via Mul::mul);

        impl Positive<$t> {
            /// Returns true if the value is an exact multiple of `divisor`.
            ///
            /// A positive value is never a multiple of zero.
            #[inline]
            pub fn is_multiple_of(&self, divisor: $t) -> bool {
                divisor != 0 && !matches!(self.value().checked_rem(divisor), Some(r) if r != 0)
            }
        }
    };

    (@strict_signed_product $t:ty) => {
        closure_row!($t: Positive Mul::mul Negative => Negative);
        closure_row!($t: Negative Mul::mul Negative => Positive);
        closure_row!($t: Negative Mul::mul Positive => Negative);

        impl Negative<$t> {
            /// Returns true if the value is an exact multiple of `divisor`.
            ///
            /// A negative value is never a multiple of zero.
            #[inline]
            pub fn is_multiple_of(&self, divisor: $t) -> bool {
                // `MIN % -1` overflows; every integer is a multiple of -1.
                divisor != 0 && !matches!(self.value().checked_rem(divisor), Some(r) if r != 0)
            }
        }
    };

    // Floating point and decimal products may round towards zero, so the
    // result is widened to the non-strict domain.
    (@widened_product $t:ty) => {
        closure_row!($t: Positive Mul::mul Positive => NonNegative);
        closure_row!($t: Positive Mul::mul Negative => NonPositive);
        closure_row!($t: Negative Mul::mul Negative => NonNegative);
        closure_row!($t: Negative Mul::mul Positive => NonPositive);
    };

    (signed_integers: $($t:ty),+) => {
        $(
            sign_closure!(@non_negative $t);
            sign_closure!(@signed $t);
            sign_closure!(@strict_product $t);
            sign_closure!(@strict_signed_product $t);
        )+
    };

    (unsigned_integers: $($t:ty),+) => {
        $(
            sign_closure!(@non_negative $t);
            sign_closure!(@strict_product $t);
        )+
    };

    (general: $($t:ty),+) => {
        $(
            sign_closure!(@non_negative $t);
            sign_closure!(@signed $t);
            sign_closure!(@widened_product $t);
        )+
    };
}

sign_closure!(signed_integers: i8, i16, i32, i64, i128, isize);
sign_closure!(unsigned_integers: u8, u16, u32, u64, u128, usize);
sign_closure!(general: f32, f64);
#[cfg(feature = "decimal")]
sign_closure!(general: rust_decimal::Decimal);
