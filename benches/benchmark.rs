use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};

use filament::prelude::{add, fold, length, odd, range_to, select, span};
use filament::unit::Unit;

fn span_select_length(n: i64) -> filament::unit::Accumulator {
    let mut unit = Unit::of(n);
    unit.chain(span())
        .unwrap()
        .chain(select(odd()))
        .unwrap()
        .chain(length())
        .unwrap()
        .terminate()
}

fn sum_to(n: i64) -> filament::unit::Accumulator {
    let mut unit = Unit::of(1);
    unit.chain(range_to(n))
        .unwrap()
        .chain(fold(add()))
        .unwrap()
        .terminate()
}

pub fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("select odd 1k", |b| b.iter(|| span_select_length(black_box(1_000))));
    c.bench_function("select odd 10k", |b| b.iter(|| span_select_length(black_box(10_000))));
    c.bench_function("select odd 100k", |b| b.iter(|| span_select_length(black_box(100_000))));
    c.bench_function("fold add 1k", |b| b.iter(|| sum_to(black_box(1_000))));
    c.bench_function("fold add 10k", |b| b.iter(|| sum_to(black_box(10_000))));
    c.bench_function("fold add 100k", |b| b.iter(|| sum_to(black_box(100_000))));
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
