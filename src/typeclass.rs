// the registry is built once and shared read-only for the process lifetime
use lazy_static::lazy_static;
// we will use a fast hashing algo for the registry maps
use seahash::SeaHasher;

use std::collections::HashMap;
use std::fmt;
use std::hash::BuildHasherDefault;
use std::slice;

use crate::datatype::{Shape, Value};
use crate::error::{FilamentError, Result};
use crate::unit::{Accumulator, Op};

pub type ClassHasher = BuildHasherDefault<SeaHasher>;

/// The fixed set of typeclasses. Each names a set of admissible shapes;
/// membership is structural and a value may belong to several classes at
/// once (an integer is both Num and Ord).
///
/// * `Int`    - values that represent whole numbers (integers, booleans)
/// * `Num`    - numbers used in math
/// * `Real`   - non-imaginary numbers
/// * `Ord`    - values that can be ordered
/// * `Enum`   - values with positions (lists, texts)
/// * `Fold`   - values that can gain or lose shape
/// * `String` - texts only
/// * `Func`   - callables only; no value shape qualifies, ops live outside
///              the value domain
/// * `Any`    - literally any value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Typeclass {
    Int,
    Num,
    Real,
    Ord,
    Enum,
    Fold,
    String,
    Func,
    Any,
}

impl Typeclass {
    pub const ALL: [Typeclass; 9] = [
        Typeclass::Int,
        Typeclass::Num,
        Typeclass::Real,
        Typeclass::Ord,
        Typeclass::Enum,
        Typeclass::Fold,
        Typeclass::String,
        Typeclass::Func,
        Typeclass::Any,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Typeclass::Int => "Int",
            Typeclass::Num => "Num",
            Typeclass::Real => "Real",
            Typeclass::Ord => "Ord",
            Typeclass::Enum => "Enum",
            Typeclass::Fold => "Fold",
            Typeclass::String => "String",
            Typeclass::Func => "Func",
            Typeclass::Any => "Any",
        }
    }
}

impl fmt::Display for Typeclass {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

lazy_static! {
    static ref TYPECLASSES: HashMap<Typeclass, &'static [Shape], ClassHasher> = {
        let mut classes: HashMap<Typeclass, &'static [Shape], ClassHasher> = HashMap::default();
        classes.insert(Typeclass::Int, &[Shape::Int, Shape::Bool][..]);
        classes.insert(Typeclass::Num, &[Shape::Int, Shape::Float, Shape::Bool][..]);
        classes.insert(Typeclass::Real, &[Shape::Int, Shape::Float, Shape::Bool][..]);
        classes.insert(
            Typeclass::Ord,
            &[Shape::Int, Shape::Float, Shape::Bool, Shape::Text, Shape::List][..],
        );
        classes.insert(Typeclass::Enum, &[Shape::List, Shape::Text][..]);
        classes.insert(
            Typeclass::Fold,
            &[Shape::Int, Shape::Float, Shape::Bool, Shape::Text, Shape::List][..],
        );
        classes.insert(Typeclass::String, &[Shape::Text][..]);
        classes.insert(Typeclass::Func, &[][..]);
        classes.insert(
            Typeclass::Any,
            &[Shape::Int, Shape::Float, Shape::Bool, Shape::Text, Shape::List][..],
        );
        classes
    };
    static ref CLASS_NAMES: HashMap<&'static str, Typeclass, ClassHasher> = {
        let mut names: HashMap<&'static str, Typeclass, ClassHasher> = HashMap::default();
        for class in Typeclass::ALL {
            names.insert(class.name(), class);
        }
        names
    };
}

/// The shapes registered for a typeclass.
pub fn shapes(class: Typeclass) -> &'static [Shape] {
    TYPECLASSES.get(&class).copied().unwrap_or(&[])
}

/// Check values against a typeclass. This is deliberately an any-of check:
/// it holds as soon as ONE of the given values has a shape in the class,
/// which is how heterogeneous argument lists are validated against a single
/// required class. It is not an all-of check.
pub fn is_type(class: Typeclass, values: &[Value]) -> bool {
    let admitted = shapes(class);
    values.iter().any(|value| admitted.contains(&value.shape()))
}

/// Wrapper for is_type so you can avoid writing "not is_type".
pub fn isnt_type(class: Typeclass, values: &[Value]) -> bool {
    !is_type(class, values)
}

/// Resolve a class by name. The runtime fallback for callers that carry
/// class names as data rather than as `Typeclass` values.
pub fn lookup(name: &str) -> Result<Typeclass> {
    CLASS_NAMES
        .get(name)
        .copied()
        .ok_or_else(|| FilamentError::UnknownTypeclass(name.to_string()))
}

/// Name-based membership test, any-of semantics as in [`is_type`].
pub fn membership(name: &str, values: &[Value]) -> Result<bool> {
    Ok(is_type(lookup(name)?, values))
}

pub fn non_membership(name: &str, values: &[Value]) -> Result<bool> {
    membership(name, values).map(|member| !member)
}

/// A curried membership test, chainable through a unit.
pub fn type_of(class: Typeclass) -> Op {
    Op::unary("type_of", move |value| {
        Ok(Accumulator::One(Value::Bool(is_type(class, slice::from_ref(value)))))
    })
}

/// Inverse of [`type_of`] for unit operations.
pub fn type_not(class: Typeclass) -> Op {
    Op::unary("type_not", move |value| {
        Ok(Accumulator::One(Value::Bool(isnt_type(class, slice::from_ref(value)))))
    })
}

/// Retrofit typeclass checking onto an op: each positional argument is
/// validated against the corresponding class before the op runs. Classes
/// beyond the argument count are ignored, as are arguments beyond the
/// class count.
pub fn type_check(checks: &'static [Typeclass], op: Op) -> Op {
    op.checked(checks)
}

pub(crate) fn validate(op: &'static str, checks: &[Typeclass], args: &[Value]) -> Result<()> {
    for (class, value) in checks.iter().zip(args) {
        if isnt_type(*class, slice::from_ref(value)) {
            return Err(FilamentError::TypeclassViolation {
                op,
                value: value.to_string(),
                class: *class,
            });
        }
    }
    Ok(())
}
