//! Criterion benchmarks for the TSP solvers.
//!
//! Uses seeded random graphs so every run measures the same instances.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;
use u_tsp::ga::{GaConfig, GaRunner, Selection};
use u_tsp::{brute_force, DpSolver, Graph};

fn graph(n: usize) -> Graph {
    Graph::random(n, &mut StdRng::seed_from_u64(n as u64)).expect("non-empty graph")
}

// ===========================================================================
// Exact solvers
// ===========================================================================

fn bench_dp(c: &mut Criterion) {
    let mut group = c.benchmark_group("dp");
    for n in [8, 12, 16] {
        let g = graph(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &g, |b, g| {
            b.iter(|| {
                let solver = DpSolver::new(black_box(g), 0).unwrap();
                black_box(solver.cost())
            });
        });
    }
    group.finish();
}

fn bench_brute_force(c: &mut Criterion) {
    let mut group = c.benchmark_group("brute_force");
    for n in [6, 8, 9] {
        let g = graph(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &g, |b, g| {
            b.iter(|| black_box(brute_force::solve(black_box(g), 0).unwrap().cost));
        });
    }
    group.finish();
}

// ===========================================================================
// Genetic algorithm
// ===========================================================================

fn bench_ga(c: &mut Criterion) {
    let mut group = c.benchmark_group("ga");
    group.sample_size(10);
    let g = graph(20);
    for (name, selection) in [
        ("tournament", Selection::Tournament(20)),
        ("roulette", Selection::Roulette),
    ] {
        let config = GaConfig::default()
            .with_population_size(500)
            .with_reproduction_size(50)
            .with_max_generations(50)
            .with_selection(selection)
            .with_seed(42);
        group.bench_function(name, |b| {
            b.iter(|| {
                let runner = GaRunner::new(&g, 0, config.clone()).unwrap();
                black_box(runner.optimize().unwrap().best_fitness)
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_dp, bench_brute_force, bench_ga);
criterion_main!(benches);
