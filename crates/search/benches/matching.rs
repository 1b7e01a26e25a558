//! Benchmarks for canonicalization and matching.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use foldmatch_search::{ComparisonHarness, MatchEngine, QueryTerm, StoredValue, Strategy};

const WORDS: &[&str] = &[
    "José", "Maçã de Arroz", "ºC", "m³/día", "Wh/(m³•mca)", "Crème Brûlée", "Ñandú", "µS/cm",
];

fn create_stored_values(count: usize) -> Vec<StoredValue> {
    (0..count)
        .map(|i| StoredValue::new(format!("{} {}", WORDS[i % WORDS.len()], i)))
        .collect()
}

fn bench_canonicalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("canonicalize");

    for strategy in Strategy::all() {
        group.bench_function(strategy.kind().name(), |b| {
            b.iter(|| strategy.canonicalize(black_box("Crème Brûlée à la Maçã")))
        });
    }

    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");
    let query = QueryTerm::new("CREME BRULEE 5");

    for size in [10, 100, 1000, 10000].iter() {
        let stored = create_stored_values(*size);

        for strategy in Strategy::all() {
            let engine = MatchEngine::new(strategy);
            group.bench_with_input(
                BenchmarkId::new(engine.strategy().kind().name(), size),
                size,
                |b, _| b.iter(|| engine.search(black_box(&stored), black_box(&query))),
            );
        }
    }

    group.finish();
}

fn bench_harness(c: &mut Criterion) {
    let harness = ComparisonHarness::builtin();
    c.bench_function("harness_builtin", |b| b.iter(|| harness.run()));
}

criterion_group!(benches, bench_canonicalize, bench_search, bench_harness);
criterion_main!(benches);
