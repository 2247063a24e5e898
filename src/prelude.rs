//! The combinator library, in the spirit of GHC's Prelude.
//!
//! Every public function here hands back an [`Op`] ready to be chained onto
//! a [`crate::unit::Unit`]. Parameterless combinators are called for their
//! op (`successor()`); curried combinators take their configuration first
//! and close over it (`exponent(4)`, `take(5)`, `select(odd())`).
//!
//! Two conventions run through the whole collection:
//!
//! * Shape normalization: combinators that work on sequences treat a
//!   non-list value as a one-element sequence for the duration of the
//!   operation. `length` counts 1 for any non-enumerable value.
//! * Ops that have no sensible result for an ill-shaped input
//!   (`take`/`drop`/`tail` on a non-sequence, `fold` on an empty sequence)
//!   yield the no-value sentinel instead of an error, and the chain carries
//!   that sentinel through untouched.

use std::cmp::Ordering;
use std::slice;

use crate::datatype::{Number, Value};
use crate::error::{FilamentError, Result};
use crate::typeclass::{isnt_type, Typeclass};
use crate::unit::{Accumulator, Arity, Op};

// ------------- shared argument readers -------------

fn number(op: &'static str, value: &Value) -> Result<Number> {
    value.as_number().ok_or_else(|| FilamentError::TypeclassViolation {
        op,
        value: value.to_string(),
        class: Typeclass::Num,
    })
}

fn whole(op: &'static str, value: &Value) -> Result<i64> {
    match value.as_number() {
        Some(Number::Int(i)) => Ok(i),
        _ => Err(FilamentError::TypeclassViolation {
            op,
            value: value.to_string(),
            class: Typeclass::Int,
        }),
    }
}

fn text_arg<'v>(op: &'static str, value: &'v Value) -> Result<&'v str> {
    value.as_text().ok_or_else(|| FilamentError::TypeclassViolation {
        op,
        value: value.to_string(),
        class: Typeclass::String,
    })
}

// map, select and the comparison filters see a non-list as a one-element
// sequence; a text is a single element to them
fn singleton_or_items(value: &Value) -> Vec<Value> {
    match value {
        Value::List(items) => items.clone(),
        other => vec![other.clone()],
    }
}

// fold and zip_with iterate anything enumerable: lists by element, texts
// by character, everything else as a singleton
fn enumerated(value: &Value) -> Vec<Value> {
    match value {
        Value::List(items) => items.clone(),
        Value::Text(text) => text.chars().map(|c| Value::Text(c.to_string())).collect(),
        other => vec![other.clone()],
    }
}

// ------------- identity and io -------------

/// The mathematical identity; gives back whatever the unit holds, however
/// many values that is.
pub fn ident() -> Op {
    Op::new("ident", Arity::Variadic, |args| {
        Ok(match args {
            [single] => Accumulator::One(single.clone()),
            many => Accumulator::Many(many.to_vec()),
        })
    })
}

/// The print-like terminal action: one synchronous write to stdout, and the
/// unit is left holding nothing.
pub fn puts() -> Op {
    Op::unary("puts", |value| {
        println!("{}", value);
        Ok(Accumulator::Nothing)
    })
}

/// Count of elements for enumerable values, character count for texts, and
/// 1 for everything else - a scalar is its own one-element sequence.
pub fn length() -> Op {
    Op::unary("length", |value| {
        let count = match value {
            Value::List(items) => items.len(),
            Value::Text(text) => text.chars().count(),
            _ => 1,
        };
        Ok(Accumulator::One(Value::Int(count as i64)))
    })
}

// ------------- arithmetic -------------

fn step(name: &'static str, delta: i64) -> Op {
    Op::unary(name, move |value| {
        let n = number(name, value)?;
        let out = n
            .checked_add(Number::Int(delta))
            .ok_or(FilamentError::Overflow { op: name })?;
        Ok(Accumulator::One(out.value()))
    })
}

/// Successor of a numeric value.
pub fn successor() -> Op {
    step("successor", 1)
}

pub fn predecessor() -> Op {
    step("predecessor", -1)
}

fn arithmetic(name: &'static str, run: fn(Number, Number) -> Option<Number>) -> Op {
    Op::binary(name, move |left, right| {
        let l = number(name, left)?;
        let r = number(name, right)?;
        let out = run(l, r).ok_or(FilamentError::Overflow { op: name })?;
        Ok(Accumulator::One(out.value()))
    })
}

/// Binary addition over a two-value unit.
pub fn add() -> Op {
    arithmetic("add", Number::checked_add)
}

pub fn sub() -> Op {
    arithmetic("sub", Number::checked_sub)
}

pub fn mul() -> Op {
    arithmetic("mul", Number::checked_mul)
}

/// Binary division over a two-value unit. A zero divisor is an error in its
/// own right, never a silent infinity, and the quotient is always a float.
pub fn div() -> Op {
    Op::binary("div", |left, right| {
        let l = number("div", left)?;
        let r = number("div", right)?;
        if r.is_zero() {
            return Err(FilamentError::DivideByZero);
        }
        Ok(Accumulator::One(Value::Float(l.as_f64() / r.as_f64())))
    })
}

/// Negate a numeric value.
pub fn negate() -> Op {
    Op::unary("negate", |value| {
        let out = match number("negate", value)? {
            Number::Int(i) => i.checked_neg().map(Number::Int),
            Number::Float(f) => Some(Number::Float(-f)),
        }
        .ok_or(FilamentError::Overflow { op: "negate" })?;
        Ok(Accumulator::One(out.value()))
    })
}

fn power(name: &'static str, exp: Number) -> Op {
    Op::unary(name, move |base| {
        let b = number(name, base)?;
        let out = b
            .checked_pow(exp)
            .ok_or(FilamentError::Overflow { op: name })?;
        Ok(Accumulator::One(out.value()))
    })
}

/// Curried exponentiation: `exponent(e)` raises the chained base to `e`.
pub fn exponent(exp: impl Into<Value>) -> Op {
    let exp = exp.into();
    Op::unary("exponent", move |base| {
        let e = number("exponent", &exp)?;
        let b = number("exponent", base)?;
        let out = b
            .checked_pow(e)
            .ok_or(FilamentError::Overflow { op: "exponent" })?;
        Ok(Accumulator::One(out.value()))
    })
}

pub fn square() -> Op {
    power("square", Number::Int(2))
}

pub fn cube() -> Op {
    power("cube", Number::Int(3))
}

// parity is decided bitwise and therefore only defined for values that
// represent whole numbers exactly
fn parity(name: &'static str, remainder: i64) -> Op {
    Op::unary(name, move |value| {
        if isnt_type(Typeclass::Real, slice::from_ref(value)) {
            return Err(FilamentError::TypeclassViolation {
                op: name,
                value: value.to_string(),
                class: Typeclass::Real,
            });
        }
        let bits = match number(name, value)? {
            Number::Int(i) => i,
            Number::Float(f) if f.fract() == 0.0 => f as i64,
            Number::Float(_) => {
                return Err(FilamentError::TypeclassViolation {
                    op: name,
                    value: value.to_string(),
                    class: Typeclass::Int,
                });
            }
        };
        Ok(Accumulator::One(Value::Bool(bits & 1 == remainder)))
    })
}

/// Whether a real number is odd.
pub fn odd() -> Op {
    parity("odd", 1)
}

pub fn even() -> Op {
    parity("even", 0)
}

// ------------- sequences -------------

/// The ordered sequence `[0, 1, .., n-1]` from a whole-number unit. Note
/// the exclusive upper bound, unlike [`range_to`].
pub fn span() -> Op {
    Op::unary("span", |value| {
        let end = whole("span", value)?;
        Ok(Accumulator::One(Value::List((0..end).map(Value::Int).collect())))
    })
}

/// Curried inclusive range: `range_to(end)` chained onto `begin` yields
/// `[begin, .., end]`, both bounds included.
pub fn range_to(end: i64) -> Op {
    Op::unary("range_to", move |value| {
        let begin = whole("range_to", value)?;
        Ok(Accumulator::One(Value::List(
            (begin..=end).map(Value::Int).collect(),
        )))
    })
}

/// First `amount` elements of a list. A non-list has no front to take, so
/// the result is no value at all.
pub fn take(amount: i64) -> Op {
    let wanted = usize::try_from(amount).unwrap_or(0);
    Op::unary("take", move |value| match value {
        Value::List(items) => Ok(Accumulator::One(Value::List(
            items.iter().take(wanted).cloned().collect(),
        ))),
        _ => Ok(Accumulator::Nothing),
    })
}

/// Everything after the first `amount` elements of a list; no value for a
/// non-list.
pub fn drop(amount: i64) -> Op {
    let skipped = usize::try_from(amount).unwrap_or(0);
    Op::unary("drop", move |value| match value {
        Value::List(items) => Ok(Accumulator::One(Value::List(
            items.iter().skip(skipped).cloned().collect(),
        ))),
        _ => Ok(Accumulator::Nothing),
    })
}

/// First element of an enumerable value; a non-enumerable value is its own
/// head. An empty sequence has none, which is an error.
pub fn head() -> Op {
    Op::unary("head", |value| match value {
        Value::List(items) => items
            .first()
            .map(|first| Accumulator::One(first.clone()))
            .ok_or_else(|| FilamentError::Index("head() - empty sequence".to_string())),
        Value::Text(text) => text
            .chars()
            .next()
            .map(|c| Accumulator::One(Value::Text(c.to_string())))
            .ok_or_else(|| FilamentError::Index("head() - empty sequence".to_string())),
        other => Ok(Accumulator::One(other.clone())),
    })
}

/// Everything after the head of an enumerable value, possibly empty; a
/// non-enumerable value has no tail, so the result is no value.
pub fn tail() -> Op {
    Op::unary("tail", |value| match value {
        Value::List(items) => Ok(Accumulator::One(Value::List(
            items.iter().skip(1).cloned().collect(),
        ))),
        Value::Text(text) => {
            let mut chars = text.chars();
            chars.next();
            Ok(Accumulator::One(Value::Text(chars.as_str().to_string())))
        }
        _ => Ok(Accumulator::Nothing),
    })
}

/// Map an op across a (possibly singleton-coerced) sequence. The op operand
/// itself is not typeclass-checked; each element application must produce a
/// value.
pub fn map_over(op: Op) -> Op {
    Op::unary("map_over", move |value| {
        let mut mapped = Vec::new();
        for item in singleton_or_items(value) {
            match op.apply(slice::from_ref(&item))? {
                Accumulator::One(out) => mapped.push(out),
                _ => {
                    return Err(FilamentError::Execution(format!(
                        "map_over() - {}() produced no value",
                        op.name()
                    )));
                }
            }
        }
        Ok(Accumulator::One(Value::List(mapped)))
    })
}

/// Keep the elements of a (possibly singleton-coerced) sequence for which
/// the predicate op yields true. The predicate must produce booleans.
pub fn select(predicate: Op) -> Op {
    Op::unary("select", move |value| {
        let mut kept = Vec::new();
        for item in singleton_or_items(value) {
            match predicate.apply(slice::from_ref(&item))? {
                Accumulator::One(Value::Bool(true)) => kept.push(item),
                Accumulator::One(Value::Bool(false)) => (),
                _ => {
                    return Err(FilamentError::Execution(format!(
                        "select() - {}() is not a boolean predicate",
                        predicate.name()
                    )));
                }
            }
        }
        Ok(Accumulator::One(Value::List(kept)))
    })
}

/// Multiply every element of a (possibly singleton-coerced) sequence by a
/// numeric factor.
pub fn scale(factor: impl Into<Value>) -> Op {
    let factor = factor.into();
    Op::unary("scale", move |value| {
        let by = number("scale", &factor)?;
        let mut scaled = Vec::new();
        for item in singleton_or_items(value) {
            let n = number("scale", &item)?;
            let out = n
                .checked_mul(by)
                .ok_or(FilamentError::Overflow { op: "scale" })?;
            scaled.push(out.value());
        }
        Ok(Accumulator::One(Value::List(scaled)))
    })
}

// ------------- comparison filters -------------

// every comparison shorthand funnels through this one filter, parameterized
// by the predicate that decides which elements survive
fn compare_filter(
    name: &'static str,
    against: Value,
    keep: impl Fn(&Value, &Value) -> Result<bool> + 'static,
) -> Op {
    Op::unary(name, move |value| {
        let mut kept = Vec::new();
        for item in singleton_or_items(value) {
            if keep(&item, &against)? {
                kept.push(item);
            }
        }
        Ok(Accumulator::One(Value::List(kept)))
    })
}

fn ordering(name: &'static str, left: &Value, right: &Value) -> Result<Ordering> {
    left.compare(right).ok_or_else(|| {
        FilamentError::Execution(format!(
            "{}() - ordering comparison not allowed between {} and {}",
            name,
            left.data_type(),
            right.data_type()
        ))
    })
}

/// Keep all elements strictly less than `y`.
pub fn less_than(y: impl Into<Value>) -> Op {
    compare_filter("less_than", y.into(), |item, y| {
        Ok(ordering("less_than", item, y)?.is_lt())
    })
}

pub fn less_equal(y: impl Into<Value>) -> Op {
    compare_filter("less_equal", y.into(), |item, y| {
        Ok(ordering("less_equal", item, y)?.is_le())
    })
}

pub fn greater_than(y: impl Into<Value>) -> Op {
    compare_filter("greater_than", y.into(), |item, y| {
        Ok(ordering("greater_than", item, y)?.is_gt())
    })
}

pub fn greater_equal(y: impl Into<Value>) -> Op {
    compare_filter("greater_equal", y.into(), |item, y| {
        Ok(ordering("greater_equal", item, y)?.is_ge())
    })
}

/// Keep all elements equal to `y`; equality never fails across shapes, it
/// is simply false, and 10 equals 10.0.
pub fn equal_to(y: impl Into<Value>) -> Op {
    compare_filter("equal_to", y.into(), |item, y| Ok(item.loose_eq(y)))
}

pub fn not_equal_to(y: impl Into<Value>) -> Op {
    compare_filter("not_equal_to", y.into(), |item, y| Ok(!item.loose_eq(y)))
}

// ------------- folds -------------

/// Left fold with the first element as the seed: `acc = op(acc, next)`
/// across the rest. An empty sequence folds to no value rather than an
/// error; there is deliberately no caller-supplied seed.
pub fn fold(op: Op) -> Op {
    Op::unary("fold", move |value| {
        let mut items = enumerated(value).into_iter();
        let Some(mut accumulated) = items.next() else {
            return Ok(Accumulator::Nothing);
        };
        for item in items {
            accumulated = match op.apply(&[accumulated, item])? {
                Accumulator::One(out) => out,
                _ => {
                    return Err(FilamentError::Execution(format!(
                        "fold() - {}() produced no value",
                        op.name()
                    )));
                }
            };
        }
        Ok(Accumulator::One(accumulated))
    })
}

// the binary operator behind concat: texts and lists join, numbers add
fn append() -> Op {
    Op::binary("append", |left, right| {
        let joined = match (left, right) {
            (Value::Text(a), Value::Text(b)) => Value::Text(format!("{}{}", a, b)),
            (Value::List(a), Value::List(b)) => {
                let mut items = a.clone();
                items.extend(b.iter().cloned());
                Value::List(items)
            }
            (a, b) => {
                let l = number("append", a)?;
                let r = number("append", b)?;
                l.checked_add(r)
                    .map(Number::value)
                    .ok_or(FilamentError::Overflow { op: "append" })?
            }
        };
        Ok(Accumulator::One(joined))
    })
}

/// Join a sequence of sequences into one: a fold with the append operator,
/// so it works uniformly for lists of texts and lists of lists.
pub fn concat() -> Op {
    let folded = fold(append());
    Op::unary("concat", move |value| folded.apply(slice::from_ref(value)))
}

/// Curried positional pairing: the (possibly singleton-coerced) input is
/// zipped against `other`, stopping at the shorter side. Pairs come out as
/// two-element lists.
pub fn zip_with(other: impl Into<Value>) -> Op {
    let zipper = other.into();
    Op::unary("zip_with", move |value| {
        let pairs = enumerated(value)
            .into_iter()
            .zip(enumerated(&zipper))
            .map(|(a, b)| Value::List(vec![a, b]))
            .collect();
        Ok(Accumulator::One(Value::List(pairs)))
    })
}

// ------------- strings -------------

// since a text is not a list, these carry the extra string-only ops

fn named_split(name: &'static str, separator: String) -> Op {
    Op::unary(name, move |value| {
        let data = text_arg(name, value)?;
        let parts = data
            .split(separator.as_str())
            .map(|part| Value::Text(part.to_string()))
            .collect();
        Ok(Accumulator::One(Value::List(parts)))
    })
}

fn named_join(name: &'static str, separator: String) -> Op {
    Op::unary(name, move |value| {
        if isnt_type(Typeclass::Enum, slice::from_ref(value)) {
            return Err(FilamentError::TypeclassViolation {
                op: name,
                value: value.to_string(),
                class: Typeclass::Enum,
            });
        }
        let mut parts = Vec::new();
        for item in enumerated(value) {
            parts.push(text_arg(name, &item)?.to_string());
        }
        Ok(Accumulator::One(Value::Text(parts.join(&separator))))
    })
}

/// Split a text into the pieces between occurrences of `separator`.
pub fn split(separator: impl Into<String>) -> Op {
    named_split("split", separator.into())
}

/// Join a sequence of texts with `separator` between them.
pub fn join(separator: impl Into<String>) -> Op {
    named_join("join", separator.into())
}

/// Break a text into its lines; [`split`] with a fixed newline separator.
pub fn lines() -> Op {
    named_split("lines", "\n".to_string())
}

pub fn unlines() -> Op {
    named_join("unlines", "\n".to_string())
}

pub fn words() -> Op {
    named_split("words", " ".to_string())
}

pub fn unwords() -> Op {
    named_join("unwords", " ".to_string())
}
