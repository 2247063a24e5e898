//! Filament – a lightweight experimental implementation of chained
//! functional pipelines.
//!
//! Filament centers on the *unit* concept: a container holding one
//! accumulated value (or a fixed-arity tuple of values) that arbitrary
//! operations are applied to in left-to-right chained order, where:
//! * A [`datatype::Value`] is one of a closed set of concrete value shapes
//!   (integer, float, boolean, text, list).
//! * A [`typeclass::Typeclass`] names a fixed set of shapes sharing a
//!   capability (numeric, orderable, enumerable, ...); the registry is
//!   built once and read-only afterwards.
//! * An [`unit::Op`] is a named callable with a declared arity, optionally
//!   carrying positional typeclass requirements.
//! * A [`unit::Unit`] owns its accumulator exclusively and is mutated in
//!   place by every chain step, so a pipeline is one straight line from
//!   construction to `terminate` (or `discard`).
//!
//! The [`prelude`] module supplies the stock of curried combinators
//! (arithmetic, sequences, comparison filters, folds, string operations)
//! that chains are usually built from; user code can chain its own ops
//! alongside them under the same arity rules.
//!
//! ## Modules
//! * [`datatype`] – The value model: [`datatype::Value`],
//!   [`datatype::Shape`] and the checked numeric carrier.
//! * [`typeclass`] – The immutable typeclass registry, membership tests and
//!   the `type_check` retrofit wrapper.
//! * [`unit`] – The container and the op type it chains over.
//! * [`prelude`] – The combinator library.
//! * [`error`] – The crate error enum and `Result` alias.
//!
//! ## No value is not an error
//! Some combinators have nothing sensible to produce for an ill-shaped
//! input (`take` on a scalar, `fold` of an empty sequence). They yield an
//! explicit no-value accumulator state rather than failing, and every
//! later chain step passes that state through without invoking its op.
//! Typeclass and arity violations, in contrast, fail fast at the offending
//! chain call and are never silently coerced.
//!
//! ## Quick Start
//! ```
//! use filament::datatype::Value;
//! use filament::prelude::{length, odd, select, span};
//! use filament::unit::{Accumulator, Unit};
//!
//! let mut unit = Unit::of(100);
//! let count = unit
//!     .chain(span()).unwrap()
//!     .chain(select(odd())).unwrap()
//!     .chain(length()).unwrap()
//!     .terminate();
//! assert_eq!(count, Accumulator::One(Value::Int(50)));
//! ```
//!
//! ## Status & Roadmap
//! This is exploratory code; the combinator surface is still evolving.
//! Expect additions around seeded folds and richer pairing types while the
//! public surface is being refined.

pub mod datatype;
pub mod error;
pub mod prelude;
pub mod typeclass;
pub mod unit;
