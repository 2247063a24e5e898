// used when ordering values inside the comparison combinators
use std::cmp::Ordering;
// used to print out readable forms of a value
use std::fmt;

/// The structural fingerprint of a [`Value`]. Typeclass membership is decided
/// by shape alone, never by where a value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    Int,
    Float,
    Bool,
    Text,
    List,
}

/// The closed set of concrete values a unit can carry. Functions are not
/// values; they travel through the engine as ops instead.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Int(i64),
    Float(f64),
    Bool(bool),
    Text(String),
    List(Vec<Value>),
}

impl Value {
    pub fn shape(&self) -> Shape {
        match self {
            Value::Int(_) => Shape::Int,
            Value::Float(_) => Shape::Float,
            Value::Bool(_) => Shape::Bool,
            Value::Text(_) => Shape::Text,
            Value::List(_) => Shape::List,
        }
    }

    pub fn data_type(&self) -> &'static str {
        match self.shape() {
            Shape::Int => "Int",
            Shape::Float => "Float",
            Shape::Bool => "Bool",
            Shape::Text => "Text",
            Shape::List => "List",
        }
    }

    /// Numeric reading of a value. Booleans count as whole numbers.
    pub fn as_number(&self) -> Option<Number> {
        match self {
            Value::Int(i) => Some(Number::Int(*i)),
            Value::Float(f) => Some(Number::Float(*f)),
            Value::Bool(b) => Some(Number::Int(i64::from(*b))),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    /// Ordering across values, where one exists: numbers order numerically
    /// (mixed integer/float included), texts lexicographically, lists
    /// elementwise. Anything else is incomparable.
    pub fn compare(&self, other: &Value) -> Option<Ordering> {
        match (self, other) {
            (Value::Text(a), Value::Text(b)) => Some(a.cmp(b)),
            (Value::List(a), Value::List(b)) => {
                for (x, y) in a.iter().zip(b.iter()) {
                    match x.compare(y)? {
                        Ordering::Equal => continue,
                        unequal => return Some(unequal),
                    }
                }
                Some(a.len().cmp(&b.len()))
            }
            (a, b) => {
                let (a, b) = (a.as_number()?, b.as_number()?);
                match (a, b) {
                    (Number::Int(x), Number::Int(y)) => Some(x.cmp(&y)),
                    (x, y) => x.as_f64().partial_cmp(&y.as_f64()),
                }
            }
        }
    }

    /// Equality as the equal_to filter sees it: numerically across the
    /// integer/float divide (10 equals 10.0), strictly everywhere else.
    pub fn loose_eq(&self, other: &Value) -> bool {
        match (self.as_number(), other.as_number()) {
            (Some(Number::Int(x)), Some(Number::Int(y))) => x == y,
            (Some(a), Some(b)) => a.as_f64() == b.as_f64(),
            _ => self == other,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Value::Int(i) => write!(f, "{}", i),
            Value::Float(x) => write!(f, "{}", x),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Text(text) => write!(f, "{}", text),
            Value::List(items) => {
                write!(f, "[")?;
                for (position, item) in items.iter().enumerate() {
                    if position > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
        }
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}
impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Int(i64::from(i))
    }
}
impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}
impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}
impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}
impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}
impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::List(items.into_iter().map(Into::into).collect())
    }
}

// ------------- Numbers --------------

/// Internal numeric carrier. Integer arithmetic is overflow-checked; a `None`
/// out of any of the checked operations means the result does not fit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    pub fn value(self) -> Value {
        match self {
            Number::Int(i) => Value::Int(i),
            Number::Float(f) => Value::Float(f),
        }
    }

    pub fn as_f64(self) -> f64 {
        match self {
            Number::Int(i) => i as f64,
            Number::Float(f) => f,
        }
    }

    pub fn is_zero(self) -> bool {
        match self {
            Number::Int(i) => i == 0,
            Number::Float(f) => f == 0.0,
        }
    }

    pub fn checked_add(self, other: Number) -> Option<Number> {
        match (self, other) {
            (Number::Int(a), Number::Int(b)) => a.checked_add(b).map(Number::Int),
            (a, b) => Some(Number::Float(a.as_f64() + b.as_f64())),
        }
    }

    pub fn checked_sub(self, other: Number) -> Option<Number> {
        match (self, other) {
            (Number::Int(a), Number::Int(b)) => a.checked_sub(b).map(Number::Int),
            (a, b) => Some(Number::Float(a.as_f64() - b.as_f64())),
        }
    }

    pub fn checked_mul(self, other: Number) -> Option<Number> {
        match (self, other) {
            (Number::Int(a), Number::Int(b)) => a.checked_mul(b).map(Number::Int),
            (a, b) => Some(Number::Float(a.as_f64() * b.as_f64())),
        }
    }

    /// Exponentiation stays integral for a whole base and a non-negative
    /// whole exponent, and widens to float everywhere else.
    pub fn checked_pow(self, exp: Number) -> Option<Number> {
        match (self, exp) {
            (Number::Int(base), Number::Int(e)) if e >= 0 => {
                let e = u32::try_from(e).ok()?;
                base.checked_pow(e).map(Number::Int)
            }
            (base, e) => Some(Number::Float(base.as_f64().powf(e.as_f64()))),
        }
    }
}
