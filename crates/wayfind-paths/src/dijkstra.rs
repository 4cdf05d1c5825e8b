use crate::astar::AStar;
use crate::traits::{GraphView, WeightFunction, ZeroHeuristic};

/// Dijkstra's algorithm: A* with the constant-zero heuristic.
pub type Dijkstra<'a, G, W> = AStar<'a, G, W, ZeroHeuristic>;

const ZERO: ZeroHeuristic = ZeroHeuristic;

impl<'a, G, W> AStar<'a, G, W, ZeroHeuristic>
where
    G: GraphView,
    W: WeightFunction,
{
    /// Bind a Dijkstra search to its collaborators.
    pub fn dijkstra(graph: &'a G, weights: &'a W) -> Self {
        Self {
            graph,
            weights,
            heuristic: &ZERO,
            name: "Dijkstra",
        }
    }
}
