use filament::datatype::Value;
use filament::error::FilamentError;
use filament::prelude::{
    add, cube, div, even, exponent, mul, negate, odd, predecessor, square, sub, successor,
};
use filament::unit::{Accumulator, Op, Unit};

fn one(value: impl Into<Value>) -> Accumulator {
    Accumulator::One(value.into())
}

fn run(mut unit: Unit, op: Op) -> Accumulator {
    unit.chain(op).expect("chain ok").terminate()
}

#[test]
fn successor_and_predecessor() {
    assert_eq!(run(Unit::of(5), successor()), one(6));
    assert_eq!(run(Unit::of(5), predecessor()), one(4));
    assert_eq!(run(Unit::of(1.5), successor()), one(2.5));
    // booleans are whole numbers
    assert_eq!(run(Unit::of(true), successor()), one(2));
}

#[test]
fn binary_arithmetic_over_tuples() {
    assert_eq!(run(Unit::new([2, 3]).unwrap(), add()), one(5));
    assert_eq!(run(Unit::new([7, 3]).unwrap(), sub()), one(4));
    assert_eq!(run(Unit::new([6, 7]).unwrap(), mul()), one(42));
    assert_eq!(run(Unit::new([7, 2]).unwrap(), div()), one(3.5));
    // division always lands on a float, even when it would divide evenly
    assert_eq!(run(Unit::new([8, 2]).unwrap(), div()), one(4.0));
}

#[test]
fn division_by_zero_is_always_an_error() {
    let err = Unit::new([1, 0]).unwrap().chain(div()).unwrap_err();
    assert!(matches!(err, FilamentError::DivideByZero));
    let err = Unit::new([Value::Float(1.0), Value::Float(0.0)])
        .unwrap()
        .chain(div())
        .unwrap_err();
    assert!(matches!(err, FilamentError::DivideByZero));
}

#[test]
fn powers() {
    assert_eq!(run(Unit::of(3), exponent(4)), one(81));
    assert_eq!(run(Unit::of(3), square()), one(9));
    assert_eq!(run(Unit::of(3), cube()), one(27));
    // a negative exponent widens to float
    assert_eq!(run(Unit::of(2), exponent(-1)), one(0.5));
    assert_eq!(run(Unit::of(5), negate()), one(-5));
}

#[test]
fn parity() {
    assert_eq!(run(Unit::of(3), odd()), one(true));
    assert_eq!(run(Unit::of(3), even()), one(false));
    assert_eq!(run(Unit::of(4), even()), one(true));
    // a float that represents a whole number has a parity
    assert_eq!(run(Unit::of(4.0), even()), one(true));
    // one that does not, has not
    let err = Unit::of(2.5).chain(odd()).unwrap_err();
    assert!(matches!(err, FilamentError::TypeclassViolation { .. }));
}

#[test]
fn every_numeric_only_op_rejects_strings() {
    let unary = [successor(), predecessor(), negate(), square(), cube(), exponent(2), odd(), even()];
    for op in unary {
        let name = op.name();
        let err = Unit::of("five").chain(op).unwrap_err();
        assert!(
            matches!(err, FilamentError::TypeclassViolation { .. }),
            "{name}() should reject a string, got {err}"
        );
    }
    let binary = [add(), sub(), mul(), div()];
    for op in binary {
        let name = op.name();
        let err = Unit::new(["three", "four"]).unwrap().chain(op).unwrap_err();
        assert!(
            matches!(err, FilamentError::TypeclassViolation { .. }),
            "{name}() should reject strings, got {err}"
        );
    }
}

#[test]
fn integer_overflow_is_an_error_not_a_wrap() {
    let err = Unit::of(i64::MAX).chain(successor()).unwrap_err();
    assert!(matches!(err, FilamentError::Overflow { op: "successor" }));
    let err = Unit::new([i64::MAX, 2]).unwrap().chain(mul()).unwrap_err();
    assert!(matches!(err, FilamentError::Overflow { op: "mul" }));
}

#[test]
fn mixed_integer_float_arithmetic_widens() {
    assert_eq!(run(Unit::new([Value::Int(2), Value::Float(0.5)]).unwrap(), add()), one(2.5));
    assert_eq!(run(Unit::new([Value::Float(2.5), Value::Int(2)]).unwrap(), mul()), one(5.0));
}
