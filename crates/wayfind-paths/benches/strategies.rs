//! Criterion benches for every strategy on one random planar graph.
//!
//! The graph, coordinates and endpoints come from a fixed seed so runs are
//! comparable. Weights are 1.1 times the Euclidean arc length, which keeps
//! the Euclidean heuristic consistent.

use criterion::{Criterion, criterion_group, criterion_main};
use rand::SeedableRng;
use rand::rngs::StdRng;
use wayfind_core::generate::{euclidean_weights, random_coordinates, random_graph, random_node};
use wayfind_core::EuclideanHeuristic;
use wayfind_paths::{AStar, BidirectionalSearch, Pathfinder, Thunderbolt, ThunderboltConfig, WalkPolicy};

fn bench_strategies(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let graph = random_graph(5_000, 17_500, &mut rng);
    let coords = random_coordinates(&graph, 1000.0, 1000.0, &mut rng);
    let weights = euclidean_weights(&graph, &coords, 1.1);
    let h = EuclideanHeuristic::new(&coords);
    let pairs: Vec<_> = (0..16)
        .filter_map(|_| Some((random_node(&graph, &mut rng)?, random_node(&graph, &mut rng)?)))
        .collect();

    let seeded = |policy| ThunderboltConfig {
        policy,
        seed: Some(1),
        ..ThunderboltConfig::default()
    };
    let strategies: Vec<Box<dyn Pathfinder + '_>> = vec![
        Box::new(AStar::dijkstra(&graph, &weights)),
        Box::new(AStar::new(&graph, &weights, &h)),
        Box::new(BidirectionalSearch::dijkstra(&graph, &weights)),
        Box::new(BidirectionalSearch::nba_star(&graph, &weights, &h)),
        Box::new(Thunderbolt::with_config(&graph, &h, seeded(WalkPolicy::Probabilistic))),
        Box::new(Thunderbolt::with_config(&graph, &h, seeded(WalkPolicy::Greedy))),
    ];

    let mut group = c.benchmark_group("search");
    for s in &strategies {
        group.bench_function(s.name(), |b| {
            b.iter(|| {
                for &(source, target) in &pairs {
                    let _ = std::hint::black_box(s.search(source, target));
                }
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_strategies);
criterion_main!(benches);
