//! Criterion benchmarks for the combopt optimizers.
//!
//! Instances are generated from fixed seeds so every sample runs the same
//! amount of work.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::Rng;

use combopt::ga::{solve_tsp, GaConfig};
use combopt::random::create_rng;
use combopt::sa::{optimize_route, SaConfig};
use combopt::search::{solve, Board};
use combopt::{CostMatrix, Location, Locations};

fn random_points(n: usize, seed: u64) -> Vec<Location> {
    let mut rng = create_rng(seed);
    (0..n)
        .map(|_| Location::new(rng.random_range(0.0..100.0), rng.random_range(0.0..100.0)))
        .collect()
}

// ===========================================================================
// Benchmarks
// ===========================================================================

fn bench_bfs_puzzle(c: &mut Criterion) {
    let mut group = c.benchmark_group("bfs_puzzle");
    group.sample_size(10);

    // Optimal lengths 4, 8 and 31, the longest any board needs.
    for board in ["012453786", "413726580", "867254301"] {
        let start = Board::parse(board).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(board), &start, |b, s| {
            b.iter(|| solve(black_box(s)).unwrap());
        });
    }

    group.finish();
}

fn bench_ga_tsp(c: &mut Criterion) {
    let mut group = c.benchmark_group("ga_tsp");
    group.sample_size(10);

    for (n, pop, gen) in [(10usize, 50usize, 100usize), (25, 100, 100), (50, 100, 50)] {
        let points = random_points(n, 7);
        let config = GaConfig {
            population_size: pop,
            elite_size: pop / 5,
            generations: gen,
            seed: Some(42),
            ..GaConfig::default()
        };
        group.bench_with_input(
            BenchmarkId::new(format!("n{n}_p{pop}_g{gen}"), n),
            &(points, config),
            |b, (p, c)| {
                b.iter(|| solve_tsp(black_box(p.clone()), c).unwrap());
            },
        );
    }

    group.finish();
}

fn bench_sa_routing(c: &mut Criterion) {
    let mut group = c.benchmark_group("sa_routing");
    group.sample_size(10);

    for n in [10usize, 50, 100] {
        let matrix = CostMatrix::euclidean(&Locations::new(random_points(n + 1, 11)).unwrap());
        let mut route: Vec<usize> = (0..=n).collect();
        route.push(0);
        let config = SaConfig::default().with_seed(42).with_log_interval(0);
        group.bench_with_input(
            BenchmarkId::from_parameter(n),
            &(matrix, route, config),
            |b, (m, r, c)| {
                b.iter(|| optimize_route(m.clone(), black_box(r.clone()), c).unwrap());
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_bfs_puzzle, bench_ga_tsp, bench_sa_routing);
criterion_main!(benches);
