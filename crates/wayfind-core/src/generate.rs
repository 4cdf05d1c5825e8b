//! Random graph, coordinate and weight generation.
//!
//! These build the synthetic inputs used by the demo driver and the
//! benchmarks: a graph with uniformly random arcs, uniformly random planar
//! positions, and weights derived from the distance between endpoints.

use rand::Rng;

use crate::geom::{Coordinates, Point2};
use crate::graph::{ArcWeights, DirectedGraph};
use crate::node::NodeId;

/// Build a graph with nodes `0..nodes` and `arcs` uniformly drawn arcs.
///
/// Duplicate draws collapse, so the result may hold fewer than `arcs` arcs.
pub fn random_graph(nodes: u32, arcs: usize, rng: &mut impl Rng) -> DirectedGraph {
    let mut graph = DirectedGraph::new();
    for id in 0..nodes {
        graph.add_node(NodeId(id));
    }
    if nodes == 0 {
        return graph;
    }
    for _ in 0..arcs {
        let tail = NodeId(rng.random_range(0..nodes));
        let head = NodeId(rng.random_range(0..nodes));
        graph.add_arc(tail, head);
    }
    graph
}

/// Place every node of `graph` uniformly in `[0, width) x [0, height)`.
pub fn random_coordinates(
    graph: &DirectedGraph,
    width: f64,
    height: f64,
    rng: &mut impl Rng,
) -> Coordinates {
    let mut coords = Coordinates::new();
    for node in graph.nodes() {
        let x = width * rng.random::<f64>();
        let y = height * rng.random::<f64>();
        coords.put(node, Point2::new(x, y));
    }
    coords
}

/// Weigh every arc by `factor` times the distance between its endpoints.
///
/// With `factor >= 1.0` the Euclidean heuristic over the same coordinates
/// is consistent. Arcs with an unplaced endpoint are left without a weight.
pub fn euclidean_weights(graph: &DirectedGraph, coords: &Coordinates, factor: f64) -> ArcWeights {
    let mut weights = ArcWeights::new();
    for tail in graph.nodes() {
        for head in graph.children(tail) {
            if let Some(d) = coords.distance(tail, head) {
                weights.put(tail, head, factor * d);
            }
        }
    }
    weights
}

/// Pick a uniformly random node of `graph`, or `None` if it is empty.
pub fn random_node(graph: &DirectedGraph, rng: &mut impl Rng) -> Option<NodeId> {
    let count = graph.node_count();
    if count == 0 {
        return None;
    }
    graph.nodes().nth(rng.random_range(0..count))
}
