//! Criterion benchmarks for exhaustive tour search.
//!
//! Uses seeded random complete graphs so every candidate is finite and the
//! improvement path is exercised.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use u_tours::graph::WeightedGraph;
use u_tours::tour::{SearchConfig, TourMode, TourSearch};

fn random_complete(n: usize, seed: u64) -> WeightedGraph {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut graph = WeightedGraph::new();
    for i in 0..n {
        for j in (i + 1)..n {
            let w = rng.random_range(1.0..100.0);
            graph
                .add_edge(&format!("n{i}"), &format!("n{j}"), w)
                .expect("valid edge");
        }
    }
    graph
}

fn bench_simple(c: &mut Criterion) {
    let mut group = c.benchmark_group("simple_tours");
    group.sample_size(10);

    for &n in &[6usize, 8, 9] {
        let graph = random_complete(n, 42);
        let config = SearchConfig::default();
        group.bench_with_input(BenchmarkId::from_parameter(n), &graph, |b, g| {
            b.iter(|| {
                let result = TourSearch::run(black_box(g), TourMode::Simple, &config);
                black_box(result)
            })
        });
    }
    group.finish();
}

fn bench_one_repeat(c: &mut Criterion) {
    let mut group = c.benchmark_group("one_repeat_tours");
    group.sample_size(10);

    for &n in &[5usize, 6, 7] {
        let graph = random_complete(n, 42);
        let config = SearchConfig::default();
        group.bench_with_input(BenchmarkId::from_parameter(n), &graph, |b, g| {
            b.iter(|| {
                let result = TourSearch::run(black_box(g), TourMode::OneRepeat, &config);
                black_box(result)
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_simple, bench_one_repeat);
criterion_main!(benches);
