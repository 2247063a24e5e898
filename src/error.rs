
use thiserror::Error;

use crate::typeclass::Typeclass;

#[derive(Error, Debug)]
pub enum FilamentError {
    #[error("Arity error: {0}")]
    Arity(String),
    #[error("Arity mismatch: {op}() takes {expected} argument(s) but the unit holds {got}")]
    ArityMismatch { op: &'static str, expected: usize, got: usize },
    #[error("Typeclass violation: {op}() - {value} is not of type {class}")]
    TypeclassViolation { op: &'static str, value: String, class: Typeclass },
    #[error("Unknown typeclass: {0}")]
    UnknownTypeclass(String),
    #[error("Division by zero")]
    DivideByZero,
    #[error("Index error: {0}")]
    Index(String),
    #[error("Execution error: {0}")]
    Execution(String),
    #[error("Arithmetic overflow in {op}()")]
    Overflow { op: &'static str },
}

pub type Result<T> = std::result::Result<T, FilamentError>;
