//! Pathfinding strategies for directed graphs with non-negative arc weights.
//!
//! Every strategy implements [`Pathfinder`] and is interchangeable with the
//! others:
//!
//! - **Dijkstra** ([`Dijkstra`], [`AStar::dijkstra`])
//! - **A\*** ([`AStar`])
//! - **Bidirectional Dijkstra** ([`BidirectionalDijkstra`],
//!   [`BidirectionalSearch::dijkstra`])
//! - **NBA\*** heuristic bidirectional search ([`BidirectionalSearch::nba_star`])
//! - **Thunderbolt** randomized or greedy walk with backtracking
//!   ([`Thunderbolt`]), fast but not optimal
//!
//! A strategy borrows its collaborators and allocates its scratch state per
//! call, so the same instance can be reused for any number of searches.
//! `Ok(None)` means the target is unreachable; errors are reserved for
//! precondition violations and interrupted searches.
//!
//! # Trait hierarchy
//!
//! | Trait | Required for |
//! |---|---|
//! | [`GraphView`] | A*, Dijkstra, Thunderbolt |
//! | [`BidirectionalGraphView`] : [`GraphView`] | Bidirectional Dijkstra, NBA* |
//! | [`WeightFunction`] | all optimal strategies |
//! | [`HeuristicFunction`] | A*, NBA*, Thunderbolt |

mod astar;
mod bidirectional;
mod dijkstra;
mod error;
mod frontier;
mod path;
mod sampler;
mod search;
mod thunderbolt;
mod traits;

#[cfg(test)]
mod fixtures;

pub use astar::AStar;
pub use bidirectional::{BidirectionalDijkstra, BidirectionalSearch, NbaStar};
pub use dijkstra::Dijkstra;
pub use error::PathError;
pub use frontier::PriorityEntry;
pub use path::{EmptyPath, ParentMap, Path, reconstruct_path};
pub use sampler::WeightedSampler;
pub use search::{Pathfinder, SearchResult};
pub use thunderbolt::{DEFAULT_SLACK_FACTOR, Thunderbolt, ThunderboltConfig, WalkPolicy};
pub use traits::{BidirectionalGraphView, GraphView, HeuristicFunction, WeightFunction, ZeroHeuristic};
pub use wayfind_core::NodeId;
