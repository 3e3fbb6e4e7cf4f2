//! Criterion benchmarks for u-genalg.
//!
//! Measures the alias table (build and draw), order crossover, and whole
//! GA runs on the two built-in problems.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use u_genalg::alias::AliasTable;
use u_genalg::ga::operators::order_crossover;
use u_genalg::ga::{GaConfig, GaRunner, NoopObserver, Problem, Selection};
use u_genalg::problems::{City, StringMatch, Tsp};
use u_genalg::random::create_rng;

fn ring(n: usize) -> Tsp {
    let cities = (0..n)
        .map(|i| {
            let t = i as f64 / n as f64 * std::f64::consts::TAU;
            City::new(format!("c{i}"), t.cos() * 100.0, t.sin() * 100.0)
        })
        .collect();
    Tsp::new(cities).expect("ring cities are valid")
}

// ===========================================================================
// Alias table
// ===========================================================================

fn bench_alias(c: &mut Criterion) {
    let mut group = c.benchmark_group("alias");

    for &n in &[100usize, 1_000, 10_000] {
        let weights: Vec<f64> = (0..n).map(|i| (i % 17) as f64 + 0.5).collect();
        group.bench_with_input(BenchmarkId::new("build", n), &weights, |b, w| {
            b.iter(|| black_box(AliasTable::new(black_box(w))))
        });

        let table = AliasTable::new(&weights).expect("positive weights");
        let mut rng = create_rng(42);
        group.bench_with_input(BenchmarkId::new("draw", n), &table, |b, t| {
            b.iter(|| black_box(t.draw(&mut rng)))
        });
    }
    group.finish();
}

// ===========================================================================
// Order crossover
// ===========================================================================

fn bench_order_crossover(c: &mut Criterion) {
    let mut group = c.benchmark_group("order_crossover");

    for &n in &[10usize, 100, 1_000] {
        let tsp = ring(n);
        let mut rng = create_rng(42);
        let p1 = tsp.random_dna(&mut rng);
        let p2 = tsp.random_dna(&mut rng);
        group.bench_with_input(BenchmarkId::from_parameter(n), &(p1, p2), |b, (p1, p2)| {
            b.iter(|| black_box(order_crossover(black_box(p1), black_box(p2), 1, &mut rng)))
        });
    }
    group.finish();
}

// ===========================================================================
// Whole runs
// ===========================================================================

fn bench_ga_phrase(c: &mut Criterion) {
    let mut group = c.benchmark_group("ga_phrase");
    group.sample_size(10);

    let problem = StringMatch::new(
        "to be or not to be that is the question",
        "abcdefghijklmnopqrstuvwxyz ",
    )
    .expect("valid phrase");

    for selection in [Selection::TopK, Selection::FitnessWeighted] {
        let config = GaConfig::default()
            .with_population_size(500)
            .with_max_generations(50)
            .with_mutation_rate(0.01)
            .with_selection(selection)
            .with_seed(42);
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{selection:?}")),
            &config,
            |b, c| {
                b.iter(|| {
                    let result = GaRunner::run(black_box(&problem), black_box(c), &mut NoopObserver);
                    black_box(result)
                })
            },
        );
    }
    group.finish();
}

fn bench_ga_tsp(c: &mut Criterion) {
    let mut group = c.benchmark_group("ga_tsp");
    group.sample_size(10);

    for (cities, pop, gen) in [(10usize, 100usize, 50usize), (30, 200, 50), (100, 200, 20)] {
        let tsp = ring(cities);
        let config = GaConfig::default()
            .with_population_size(pop)
            .with_max_generations(gen)
            .with_mutation_rate(0.3)
            .with_seed(42);
        group.bench_with_input(
            BenchmarkId::new(format!("n{cities}_p{pop}_g{gen}"), cities),
            &(tsp, config),
            |b, (t, c)| {
                b.iter(|| {
                    let result = GaRunner::run(black_box(t), black_box(c), &mut NoopObserver);
                    black_box(result)
                })
            },
        );
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_alias,
    bench_order_crossover,
    bench_ga_phrase,
    bench_ga_tsp
);
criterion_main!(benches);
