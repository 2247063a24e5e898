use filament::datatype::Value;
use filament::error::FilamentError;
use filament::prelude::{
    add, concat, drop, equal_to, fold, greater_equal, greater_than, head, length, less_equal,
    less_than, map_over, mul, not_equal_to, odd, range_to, scale, select, span, successor, tail,
    take, zip_with,
};
use filament::unit::{Accumulator, Op, Unit};

fn one(value: impl Into<Value>) -> Accumulator {
    Accumulator::One(value.into())
}

fn ints(values: impl IntoIterator<Item = i64>) -> Accumulator {
    Accumulator::One(Value::List(values.into_iter().map(Value::Int).collect()))
}

fn run(mut unit: Unit, ops: impl IntoIterator<Item = Op>) -> Accumulator {
    for op in ops {
        unit.chain(op).expect("chain ok");
    }
    unit.terminate()
}

#[test]
fn length_is_invariant_under_the_coercion_rule() {
    assert_eq!(run(Unit::of(10), [length()]), one(1));
    assert_eq!(run(Unit::of("Hey"), [length()]), one(3));
    assert_eq!(run(Unit::of(10), [span(), length()]), one(10));
}

#[test]
fn span_is_exclusive_and_range_to_is_inclusive() {
    assert_eq!(run(Unit::of(5), [span()]), ints(0..5));
    assert_eq!(run(Unit::of(0), [span()]), ints([]));
    // a negative count spans nothing
    assert_eq!(run(Unit::of(-3), [span()]), ints([]));
    assert_eq!(run(Unit::of(1), [range_to(10)]), ints(1..=10));
    assert_eq!(run(Unit::of(10), [range_to(10)]), ints([10]));
    let err = Unit::of(2.5).chain(span()).unwrap_err();
    assert!(matches!(err, FilamentError::TypeclassViolation { .. }));
}

#[test]
fn head_and_tail() {
    assert_eq!(run(Unit::of(10), [span(), head()]), one(0));
    assert_eq!(run(Unit::of(10), [span(), tail()]), ints(1..10));
    // a non-sequence is its own head but has no tail
    assert_eq!(run(Unit::of(42), [head()]), one(42));
    assert!(run(Unit::of(42), [tail()]).is_nothing());
    // texts enumerate by character
    assert_eq!(run(Unit::of("Hey"), [head()]), one("H"));
    assert_eq!(run(Unit::of("Hey"), [tail()]), one("ey"));
    // the tail of a one-element sequence is empty, the head of an empty one
    // is an error
    assert_eq!(run(Unit::of(1), [span(), tail()]), ints([]));
    let err = Unit::of(0).chain(span()).unwrap().chain(head()).unwrap_err();
    assert!(matches!(err, FilamentError::Index(_)));
}

#[test]
fn take_and_drop() {
    assert_eq!(run(Unit::of(10), [span(), take(5)]), ints(0..5));
    assert_eq!(run(Unit::of(10), [span(), drop(5)]), ints(5..10));
    assert_eq!(run(Unit::of(10), [span(), take(0)]), ints([]));
    assert_eq!(run(Unit::of(3), [span(), take(99)]), ints(0..3));
    // neither is defined for a non-sequence; no value, not an error
    assert!(run(Unit::of(5), [take(3)]).is_nothing());
    assert!(run(Unit::of(5), [drop(3)]).is_nothing());
    assert!(run(Unit::of("Hey"), [take(2)]).is_nothing());
}

#[test]
fn map_and_select() {
    assert_eq!(run(Unit::of(10), [span(), map_over(successor())]), ints(1..=10));
    assert_eq!(run(Unit::of(100), [span(), select(odd()), length()]), one(50));
    // a scalar is mapped as a one-element sequence
    assert_eq!(run(Unit::of(5), [map_over(successor())]), ints([6]));
    assert_eq!(run(Unit::of(5), [select(odd())]), ints([5]));
    assert_eq!(run(Unit::of(4), [select(odd())]), ints([]));
}

#[test]
fn select_insists_on_a_boolean_predicate() {
    let err = Unit::of(10)
        .chain(span())
        .unwrap()
        .chain(select(successor()))
        .unwrap_err();
    assert!(matches!(err, FilamentError::Execution(_)));
    assert!(format!("{}", err).contains("boolean predicate"));
}

#[test]
fn comparison_filters_on_a_span() {
    assert_eq!(run(Unit::of(10), [span(), less_equal(5)]), ints(0..=5));
    assert_eq!(run(Unit::of(10), [span(), less_than(3)]), ints(0..3));
    assert_eq!(run(Unit::of(10), [span(), greater_than(4)]), ints(5..10));
    assert_eq!(run(Unit::of(10), [span(), greater_equal(2)]), ints(2..10));
    assert_eq!(run(Unit::of(10), [span(), equal_to(7)]), ints([7]));
    assert_eq!(
        run(Unit::of(10), [span(), not_equal_to(8)]),
        ints([0, 1, 2, 3, 4, 5, 6, 7, 9])
    );
}

#[test]
fn comparisons_order_numerically_across_integer_and_float() {
    assert_eq!(run(Unit::of(10), [span(), less_than(2.5)]), ints(0..3));
    assert_eq!(run(Unit::of(10), [span(), equal_to(7.0)]), ints([7]));
}

#[test]
fn ordering_across_incompatible_shapes_is_an_error() {
    let err = Unit::of(10)
        .chain(span())
        .unwrap()
        .chain(less_than("five"))
        .unwrap_err();
    assert!(matches!(err, FilamentError::Execution(_)));
    assert!(format!("{}", err).contains("ordering comparison not allowed"));
    // equality is simply false across shapes
    assert_eq!(run(Unit::of(10), [span(), equal_to("five")]), ints([]));
}

#[test]
fn fold_seeds_with_the_first_element() {
    assert_eq!(run(Unit::of(1), [range_to(10), fold(add())]), one(55));
    assert_eq!(run(Unit::of(1), [range_to(10), fold(mul())]), one(3628800));
    // a scalar folds to itself, an empty sequence folds to no value
    assert_eq!(run(Unit::of(5), [fold(add())]), one(5));
    assert!(run(Unit::of(0), [span(), fold(add())]).is_nothing());
}

#[test]
fn concat_joins_texts_and_lists_alike() {
    assert_eq!(run(Unit::of(vec!["Hello ", "world"]), [concat()]), one("Hello world"));
    let nested = Value::List(vec![
        Value::List(vec![Value::Int(1), Value::Int(2)]),
        Value::List(vec![Value::Int(3), Value::Int(4)]),
    ]);
    assert_eq!(run(Unit::of(nested), [concat()]), ints([1, 2, 3, 4]));
    assert!(run(Unit::of(Value::List(vec![])), [concat()]).is_nothing());
}

#[test]
fn zip_with_stops_at_the_shorter_side() {
    let pairs = run(Unit::of(3), [span(), zip_with(vec!["a", "b"])]);
    assert_eq!(
        pairs,
        one(Value::List(vec![
            Value::List(vec![Value::Int(0), Value::Text("a".into())]),
            Value::List(vec![Value::Int(1), Value::Text("b".into())]),
        ]))
    );
    // a scalar zips as a one-element sequence
    let pairs = run(Unit::of(7), [zip_with(vec![1, 2, 3])]);
    assert_eq!(
        pairs,
        one(Value::List(vec![Value::List(vec![Value::Int(7), Value::Int(1)])]))
    );
}

#[test]
fn scale_multiplies_elementwise() {
    assert_eq!(run(Unit::of(4), [span(), scale(3)]), ints([0, 3, 6, 9]));
    assert_eq!(run(Unit::of(5), [scale(2)]), ints([10]));
    let err = Unit::of(vec!["x"]).chain(scale(2)).unwrap_err();
    assert!(matches!(err, FilamentError::TypeclassViolation { .. }));
}
