//! Benchmarks for individual metrics and candidate matching.
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use fuzzycompare::{
    best_match, jaro_winkler_similarity, levenshtein_distance, ratcliff_obershelp_similarity,
    similarity_score, ComparisonOptions,
};

/// Word pairs of increasing length
const PAIRS: &[(&str, &str)] = &[
    ("beauties", "beautiful"),
    ("algorithm", "altruistic"),
    (
        "the quick brown fox jumps over the lazy dog",
        "the quick brown cat jumped over a lazy dog",
    ),
];

fn bench_metrics(c: &mut Criterion) {
    let mut group = c.benchmark_group("metrics");
    for &(a, b) in PAIRS {
        group.bench_with_input(BenchmarkId::new("levenshtein", a.len()), &(a, b), |bench, &(a, b)| {
            bench.iter(|| levenshtein_distance(black_box(a), black_box(b)))
        });
        group.bench_with_input(BenchmarkId::new("jaro_winkler", a.len()), &(a, b), |bench, &(a, b)| {
            bench.iter(|| jaro_winkler_similarity(black_box(a), black_box(b)))
        });
        group.bench_with_input(
            BenchmarkId::new("ratcliff_obershelp", a.len()),
            &(a, b),
            |bench, &(a, b)| bench.iter(|| ratcliff_obershelp_similarity(black_box(a), black_box(b))),
        );
        group.bench_with_input(BenchmarkId::new("score_all", a.len()), &(a, b), |bench, &(a, b)| {
            let options = ComparisonOptions::all();
            bench.iter(|| similarity_score(black_box(a), black_box(b), &options))
        });
    }
    group.finish();
}

fn bench_best_match(c: &mut Criterion) {
    let mut group = c.benchmark_group("best_match");
    let options = ComparisonOptions::default();
    for size in [10usize, 100, 1_000] {
        let candidates: Vec<String> = (0..size).map(|i| format!("candidate-{i:05}")).collect();
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &candidates, |bench, candidates| {
            bench.iter(|| best_match(black_box("candidate-00421"), Some(candidates.as_slice()), &options))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_metrics, bench_best_match);
criterion_main!(benches);
