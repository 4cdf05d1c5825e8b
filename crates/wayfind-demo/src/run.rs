//! Build a random instance, run every strategy on it and collect timings.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use rand::SeedableRng;
use rand::rngs::StdRng;
use thiserror::Error;
use wayfind_core::generate::{euclidean_weights, random_coordinates, random_graph, random_node};
use wayfind_core::{ArcWeights, Coordinates, DirectedGraph, EuclideanHeuristic, NodeId};
use wayfind_paths::{
    AStar, BidirectionalSearch, Path, PathError, Pathfinder, Thunderbolt, ThunderboltConfig,
    WalkPolicy,
};

use crate::cli::Args;

/// Relative tolerance when comparing optimal path lengths.
const LENGTH_TOLERANCE: f64 = 1e-9;

#[derive(Debug, Error)]
pub enum DemoError {
    #[error("the graph has no nodes")]
    EmptyGraph,
    #[error(transparent)]
    Search(#[from] PathError),
}

/// A generated instance.
pub struct Instance {
    pub seed: u64,
    pub graph: DirectedGraph,
    pub coords: Coordinates,
    pub weights: ArcWeights,
    pub source: NodeId,
    pub target: NodeId,
}

impl Instance {
    pub fn generate(args: &Args) -> Result<Self, DemoError> {
        let seed = args.seed.unwrap_or_else(time_seed);
        let mut rng = StdRng::seed_from_u64(seed);

        let graph = random_graph(args.nodes, args.arcs, &mut rng);
        let coords = random_coordinates(&graph, args.width, args.height, &mut rng);
        let weights = euclidean_weights(&graph, &coords, args.weight_factor);

        let source = match args.source {
            Some(id) => NodeId(id),
            None => random_node(&graph, &mut rng).ok_or(DemoError::EmptyGraph)?,
        };
        let target = match args.target {
            Some(id) => NodeId(id),
            None => random_node(&graph, &mut rng).ok_or(DemoError::EmptyGraph)?,
        };

        Ok(Self {
            seed,
            graph,
            coords,
            weights,
            source,
            target,
        })
    }
}

fn time_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default()
}

/// Outcome of one strategy.
pub struct Outcome {
    pub name: &'static str,
    pub optimal: bool,
    pub elapsed: Duration,
    pub path: Option<Path>,
    pub cost: Option<f64>,
}

/// Outcomes of every strategy on one instance.
pub struct Report {
    pub outcomes: Vec<Outcome>,
}

impl Report {
    /// Whether all optimal strategies agree on reachability and length.
    pub fn optimal_agree(&self) -> bool {
        let mut costs = self.outcomes.iter().filter(|o| o.optimal).map(|o| o.cost);
        let Some(first) = costs.next() else {
            return true;
        };
        costs.all(|c| match (first, c) {
            (Some(a), Some(b)) => (a - b).abs() <= LENGTH_TOLERANCE * a.max(1.0),
            (None, None) => true,
            _ => false,
        })
    }

    /// Length of the shortest path, if one exists.
    pub fn optimal_cost(&self) -> Option<f64> {
        self.outcomes.iter().find(|o| o.optimal).and_then(|o| o.cost)
    }
}

pub fn run(args: &Args, instance: &Instance) -> Result<Report, DemoError> {
    let Instance {
        graph,
        coords,
        weights,
        source,
        target,
        ..
    } = instance;
    let h = EuclideanHeuristic::new(coords);
    let walker_config = |policy| ThunderboltConfig {
        policy,
        slack_factor: args.slack,
        seed: args.walk_seed,
    };

    let optimal: Vec<Box<dyn Pathfinder + '_>> = vec![
        Box::new(AStar::new(graph, weights, &h)),
        Box::new(AStar::dijkstra(graph, weights)),
        Box::new(BidirectionalSearch::dijkstra(graph, weights)),
        Box::new(BidirectionalSearch::nba_star(graph, weights, &h)),
    ];
    let walkers: Vec<Box<dyn Pathfinder + '_>> = vec![
        Box::new(Thunderbolt::with_config(graph, &h, walker_config(WalkPolicy::Probabilistic))),
        Box::new(Thunderbolt::with_config(graph, &h, walker_config(WalkPolicy::Greedy))),
    ];
    let runs = optimal
        .iter()
        .map(|f| (f, true))
        .chain(walkers.iter().map(|f| (f, false)));

    let mut outcomes = Vec::with_capacity(optimal.len() + walkers.len());
    for (finder, is_optimal) in runs {
        let start = Instant::now();
        let path = finder.search(*source, *target)?;
        let elapsed = start.elapsed();
        let cost = path.as_ref().map(|p| p.cost(weights)).transpose()?;
        log::info!("{} finished in {:?}", finder.name(), elapsed);
        outcomes.push(Outcome {
            name: finder.name(),
            optimal: is_optimal,
            elapsed,
            path,
            cost,
        });
    }
    Ok(Report { outcomes })
}

pub fn print(instance: &Instance, report: &Report, print_paths: bool) {
    println!("Seed = {}", instance.seed);
    println!("Source: {}", instance.source);
    println!("Target: {}", instance.target);
    println!();

    for o in &report.outcomes {
        println!("{} in {} milliseconds.", o.name, o.elapsed.as_millis());
        match (&o.path, o.cost) {
            (Some(path), Some(cost)) => {
                println!("  {} nodes, length {:.3}", path.node_count(), cost);
                if print_paths {
                    for node in path.nodes() {
                        println!("  {node}");
                    }
                }
            }
            _ => println!("  no path"),
        }
    }
    println!();

    let agree = report.optimal_agree();
    println!("Algorithms agree: {agree}");
    if !agree {
        return;
    }
    let Some(optimal) = report.optimal_cost() else {
        return;
    };
    println!("Optimal path length: {optimal:.3}");
    for o in report.outcomes.iter().filter(|o| !o.optimal) {
        match o.cost {
            Some(cost) if optimal > 0.0 => {
                println!("{} path length: {:.3} (ratio {:.3})", o.name, cost, cost / optimal)
            }
            Some(cost) => println!("{} path length: {cost:.3}", o.name),
            None => println!("{} did not find a path.", o.name),
        }
    }
}
