//! Combination-search benchmark
//!
//! The full sweep is tiny (23 bodies, a few thousand operator
//! applications); a reduced criterion configuration keeps runs short.

use std::time::Duration;

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use gravmatch_search::app::searcher::search_combinations;
use gravmatch_search::constants::{DEFAULT_ACCURACY, SOLAR_SYSTEM_TABLE};
use gravmatch_search::domain::body::parse_bodies;
use gravmatch_search::domain::operator::Operator;

fn ci_criterion() -> Criterion {
    Criterion::default()
        .sample_size(30)
        .measurement_time(Duration::from_secs(5))
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    group.bench_function("embedded_table", |b| {
        b.iter(|| parse_bodies(black_box(SOLAR_SYSTEM_TABLE)))
    });

    group.finish();
}

fn bench_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("sweep");

    let bodies = parse_bodies(SOLAR_SYSTEM_TABLE).unwrap();

    group.bench_function("all_operators", |b| {
        b.iter(|| search_combinations(black_box(&bodies), DEFAULT_ACCURACY, &Operator::ALL))
    });

    group.bench_function("default_operators", |b| {
        b.iter(|| search_combinations(black_box(&bodies), DEFAULT_ACCURACY, &Operator::DEFAULT))
    });

    group.finish();
}

criterion_group! {
    name = benches;
    config = ci_criterion();
    targets = bench_parse, bench_sweep
}
criterion_main!(benches);
