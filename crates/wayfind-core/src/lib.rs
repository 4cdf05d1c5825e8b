//! **wayfind-core** — graph storage and geometry shared by the wayfind crates.
//!
//! This crate holds the concrete collaborators the pathfinders run on: a
//! directed graph with forward and backward adjacency, an arc weight table,
//! planar node coordinates with a Euclidean heuristic, and random generators
//! for all of them. The search algorithms live in `wayfind-paths` and see
//! these types only through its traits.

pub mod generate;
pub mod geom;
pub mod graph;
pub mod node;

pub use geom::{Coordinates, EuclideanHeuristic, Point2};
pub use graph::{AdjacencyList, ArcWeights, DirectedGraph};
pub use node::NodeId;
