//! Tests for sign-closure arithmetic.

use super::*;

#[test]
fn test_integer_products_stay_strict() {
    assert_eq!(pos(3) * pos(4), pos(12));
    assert_eq!(pos(3) * neg(-4), neg(-12));
    assert_eq!(neg(-3) * neg(-4), pos(12));
    assert_eq!(neg(-3) * pos(4), neg(-12));
}

#[test]
fn test_float_products_widen() {
    let three = Positive::new(3.0_f64).unwrap();
    let four = Positive::new(4.0_f64).unwrap();
    let product: NonNegative<f64> = three * four;
    assert_eq!(product.value(), 12.0);

    let minus_two = Negative::new(-2.0_f64).unwrap();
    let product: NonPositive<f64> = three * minus_two;
    assert_eq!(product.value(), -6.0);
    let product: NonNegative<f64> = minus_two * minus_two;
    assert_eq!(product.value(), 4.0);
}

#[test]
fn test_float_underflow_lands_in_widened_domain() {
    let tiny = Positive::new(f64::MIN_POSITIVE).unwrap();
    let product = tiny * tiny;
    assert_eq!(product.value(), 0.0);
}

#[test]
fn test_non_strict_products() {
    assert_eq!(non_neg(0) * non_neg(5), non_neg(0));
    assert_eq!(non_neg(2) * neg(-3), non_pos(-6));
    assert_eq!(neg(-3) * non_neg(2), non_pos(-6));
    assert_eq!(non_neg(2) * non_pos(-3), non_pos(-6));
    assert_eq!(non_pos(-2) * non_pos(-3), non_neg(6));
    assert_eq!(non_pos(-2) * non_neg(3), non_pos(-6));
    assert_eq!(non_pos(0) * neg(-3), non_neg(0));
    assert_eq!(neg(-2) * non_pos(-3), non_neg(6));
    assert_eq!(non_pos(-2) * pos(3), non_pos(-6));
}

#[test]
fn test_bounded_products() {
    let half = ZeroToOne::new(0.5_f64).unwrap();
    assert_eq!((half * half).value(), 0.25);

    let minus_half = MinusOneToOne::new(-0.5_f64).unwrap();
    let third = MinusOneToOne::new(0.25_f64).unwrap();
    assert_eq!((minus_half * third).value(), -0.125);
    assert_eq!(MinusOneToOne::<i8>::min() * MinusOneToOne::<i8>::min(), MinusOneToOne::<i8>::max());
}

#[test]
fn test_division() {
    assert_eq!(neg(-10) / pos(2), non_pos(-5));
    assert_eq!(pos(10) / pos(3), non_neg(3));
    assert_eq!(pos(1) / pos(2), non_neg(0));
    assert_eq!(pos(10) / neg(-2), non_pos(-5));
    assert_eq!(neg(-10) / neg(-2), non_neg(5));

    let quotient = Positive::new(1.0_f64).unwrap() / Positive::new(4.0_f64).unwrap();
    assert_eq!(quotient.value(), 0.25);
}

#[test]
fn test_addition() {
    assert_eq!(pos(2) + pos(3), pos(5));
    assert_eq!(neg(-2) + neg(-3), neg(-5));
    assert_eq!(non_neg(0) + non_neg(3), non_neg(3));
    assert_eq!(non_pos(0) + non_pos(-3), non_pos(-3));
}

#[test]
fn test_remainder() {
    assert_eq!(pos(7) % pos(3), non_neg(1));
    assert_eq!(pos(9) % pos(3), non_neg(0));
    assert_eq!(Positive::new(10u32).unwrap() % Positive::new(4u32).unwrap(), 2);
}

#[test]
fn test_compound_assignment() {
    let mut total = pos(1);
    total += pos(2);
    total *= pos(4);
    assert_eq!(total, pos(12));

    let mut debt = neg(-1);
    debt += neg(-4);
    assert_eq!(debt, neg(-5));

    let mut chance = ZeroToOne::new(0.5_f64).unwrap();
    chance *= ZeroToOne::new(0.5_f64).unwrap();
    assert_eq!(chance.value(), 0.25);

    let mut correlation = MinusOneToOne::new(-1_i32).unwrap();
    correlation *= MinusOneToOne::new(-1_i32).unwrap();
    assert_eq!(correlation.value(), 1);
}

#[test]
fn test_is_multiple_of() {
    assert!(pos(12).is_multiple_of(4));
    assert!(pos(12).is_multiple_of(-4));
    assert!(!pos(12).is_multiple_of(5));
    assert!(!pos(12).is_multiple_of(0));
    assert!(neg(-9).is_multiple_of(3));
    assert!(!neg(-9).is_multiple_of(0));
    assert!(Negative::new(i64::MIN).unwrap().is_multiple_of(-1));
    assert!(Positive::new(8u8).unwrap().is_multiple_of(2));
}

#[test]
#[should_panic]
fn test_integer_overflow_is_fatal() {
    let big = Positive::new(i8::MAX).unwrap();
    let _ = big + big;
}

#[test]
#[should_panic(expected = "invariant violated")]
fn test_zero_times_infinity_is_fatal() {
    let zero = NonNegative::new(0.0_f64).unwrap();
    let infinity = NonNegative::new(f64::INFINITY).unwrap();
    let _ = zero * infinity;
}

#[test]
#[should_panic(expected = "invariant violated")]
fn test_infinity_over_infinity_is_fatal() {
    let infinity = Positive::new(f64::INFINITY).unwrap();
    let _ = infinity / infinity;
}
