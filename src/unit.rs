use std::fmt;
use std::slice;

use tracing::debug;

use crate::datatype::Value;
use crate::error::{FilamentError, Result};
use crate::typeclass::{self, Typeclass};

// ------------- Accumulator -------------

/// What a unit currently holds. `Many` is the fixed-arity tuple form that
/// multi-value construction produces; `Nothing` is the explicit no-value
/// sentinel, distinct from every error.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Accumulator {
    #[default]
    Nothing,
    One(Value),
    Many(Vec<Value>),
}

impl Accumulator {
    pub fn one(value: impl Into<Value>) -> Self {
        Accumulator::One(value.into())
    }

    pub fn is_nothing(&self) -> bool {
        matches!(self, Accumulator::Nothing)
    }

    pub fn as_one(&self) -> Option<&Value> {
        match self {
            Accumulator::One(value) => Some(value),
            _ => None,
        }
    }

    pub fn into_one(self) -> Option<Value> {
        match self {
            Accumulator::One(value) => Some(value),
            _ => None,
        }
    }
}

impl From<Value> for Accumulator {
    fn from(value: Value) -> Self {
        Accumulator::One(value)
    }
}

impl fmt::Display for Accumulator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Accumulator::Nothing => write!(f, "nothing"),
            Accumulator::One(value) => write!(f, "{}", value),
            Accumulator::Many(values) => {
                write!(f, "(")?;
                for (position, value) in values.iter().enumerate() {
                    if position > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", value)?;
                }
                write!(f, ")")
            }
        }
    }
}

// ------------- Op -------------

/// How many arguments an op accepts when the unit spreads its accumulator
/// into the call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    Exact(usize),
    Variadic,
}

type RunFn = Box<dyn Fn(&[Value]) -> Result<Accumulator>>;

/// A named callable that a unit can chain over. Prelude combinators and
/// user-supplied functions both take this form; curried combinators are
/// ordinary functions that close over their configuration and hand back
/// an `Op`.
pub struct Op {
    name: &'static str,
    arity: Arity,
    checks: &'static [Typeclass],
    run: RunFn,
}

impl Op {
    pub fn new(
        name: &'static str,
        arity: Arity,
        run: impl Fn(&[Value]) -> Result<Accumulator> + 'static,
    ) -> Self {
        Self {
            name,
            arity,
            checks: &[],
            run: Box::new(run),
        }
    }

    pub fn unary(name: &'static str, run: impl Fn(&Value) -> Result<Accumulator> + 'static) -> Self {
        Self::new(name, Arity::Exact(1), move |args| run(&args[0]))
    }

    pub fn binary(
        name: &'static str,
        run: impl Fn(&Value, &Value) -> Result<Accumulator> + 'static,
    ) -> Self {
        Self::new(name, Arity::Exact(2), move |args| run(&args[0], &args[1]))
    }

    /// Attach positional typeclass requirements, validated on every
    /// application before the op runs. See `typeclass::type_check`.
    pub fn checked(mut self, checks: &'static [Typeclass]) -> Self {
        self.checks = checks;
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn arity(&self) -> Arity {
        self.arity
    }

    /// Apply the op to already-spread arguments: the arity gate first, then
    /// any positional typeclass checks, then the computation itself.
    pub fn apply(&self, args: &[Value]) -> Result<Accumulator> {
        if let Arity::Exact(expected) = self.arity {
            if expected != args.len() {
                return Err(FilamentError::ArityMismatch {
                    op: self.name,
                    expected,
                    got: args.len(),
                });
            }
        }
        typeclass::validate(self.name, self.checks, args)?;
        (self.run)(args)
    }
}

impl fmt::Debug for Op {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Op")
            .field("name", &self.name)
            .field("arity", &self.arity)
            .finish()
    }
}

// ------------- Unit -------------

/// The container. Holds one accumulator and applies ops to it in the order
/// they are chained; the same container identity is reused throughout, so a
/// pipeline is a straight line of mutations ending in `terminate` or
/// `discard`. Not thread-safe by design: `chain` takes `&mut self`, which
/// makes unserialized sharing a compile error rather than a data race.
#[derive(Debug, Clone, PartialEq)]
pub struct Unit {
    acc: Accumulator,
}

impl Unit {
    /// Construct from one or more initial values: exactly one value makes a
    /// scalar accumulator, several make a tuple. Zero values is an error.
    pub fn new<I, T>(values: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<Value>,
    {
        let mut values: Vec<Value> = values.into_iter().map(Into::into).collect();
        match values.len() {
            0 => Err(FilamentError::Arity(
                "at least one initial value is required".to_string(),
            )),
            1 => Ok(Self {
                acc: Accumulator::One(values.swap_remove(0)),
            }),
            _ => Ok(Self {
                acc: Accumulator::Many(values),
            }),
        }
    }

    /// The common single-value construction, infallible.
    pub fn of(value: impl Into<Value>) -> Self {
        Self {
            acc: Accumulator::One(value.into()),
        }
    }

    /// Apply an op to the accumulator and keep the result. A tuple
    /// accumulator is spread positionally into the call; a scalar is passed
    /// as the sole argument; a `Nothing` accumulator short-circuits the step
    /// entirely - the op is never invoked and the sentinel passes through.
    pub fn chain(&mut self, op: Op) -> Result<&mut Self> {
        let next = match &self.acc {
            Accumulator::Nothing => {
                debug!(op = op.name(), "chain step skipped, unit holds nothing");
                return Ok(self);
            }
            Accumulator::One(value) => op.apply(slice::from_ref(value))?,
            Accumulator::Many(values) => op.apply(values)?,
        };
        debug!(op = op.name(), "chained");
        self.acc = next;
        Ok(self)
    }

    /// End the pipeline and read the raw accumulator. Idempotent: the
    /// accumulator is not cleared, repeated calls yield the same state.
    pub fn terminate(&self) -> Accumulator {
        self.acc.clone()
    }

    /// End the pipeline without a result, whatever the accumulator holds.
    pub fn discard(self) {}
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.acc)
    }
}
