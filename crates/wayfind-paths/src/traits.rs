use wayfind_core::{ArcWeights, DirectedGraph, EuclideanHeuristic, NodeId};

/// Minimal graph interface: node existence and forward adjacency.
pub trait GraphView {
    /// Whether `node` belongs to the graph.
    fn contains(&self, node: NodeId) -> bool;

    /// Append the successors of `node` into `buf`. The caller clears `buf`
    /// before calling. Appends nothing for a node that is not in the graph.
    fn successors(&self, node: NodeId, buf: &mut Vec<NodeId>);
}

/// Graph that can also enumerate incoming arcs; needed by the
/// bidirectional searches.
pub trait BidirectionalGraphView: GraphView {
    /// Append the predecessors of `node` into `buf`. Same conventions as
    /// [`GraphView::successors`].
    fn predecessors(&self, node: NodeId, buf: &mut Vec<NodeId>);
}

/// Arc cost lookup.
pub trait WeightFunction {
    /// Cost of the arc `tail -> head`, `None` if the arc has no weight.
    ///
    /// Must be defined and non-negative for every arc the graph reports.
    /// Negative weights are not detected in release builds and silently
    /// break optimality.
    fn weight(&self, tail: NodeId, head: NodeId) -> Option<f64>;
}

/// Lower bound on the distance between two nodes.
pub trait HeuristicFunction {
    /// Estimated cost from `from` to `to`.
    ///
    /// Must never overestimate the true cost (admissible) for the optimal
    /// strategies to stay optimal, and should satisfy the triangle
    /// inequality (consistent). Neither property is checked.
    fn estimate(&self, from: NodeId, to: NodeId) -> f64;
}

/// The constant-zero heuristic. Turns A* into Dijkstra and NBA* into
/// bidirectional Dijkstra.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ZeroHeuristic;

impl HeuristicFunction for ZeroHeuristic {
    #[inline]
    fn estimate(&self, _from: NodeId, _to: NodeId) -> f64 {
        0.0
    }
}

impl<F> HeuristicFunction for F
where
    F: Fn(NodeId, NodeId) -> f64,
{
    #[inline]
    fn estimate(&self, from: NodeId, to: NodeId) -> f64 {
        self(from, to)
    }
}

impl<F> WeightFunction for F
where
    F: Fn(NodeId, NodeId) -> Option<f64>,
{
    #[inline]
    fn weight(&self, tail: NodeId, head: NodeId) -> Option<f64> {
        self(tail, head)
    }
}

// ---------------------------------------------------------------------------
// wayfind-core collaborators
// ---------------------------------------------------------------------------

impl GraphView for DirectedGraph {
    #[inline]
    fn contains(&self, node: NodeId) -> bool {
        self.has_node(node)
    }

    fn successors(&self, node: NodeId, buf: &mut Vec<NodeId>) {
        buf.extend(self.children(node));
    }
}

impl BidirectionalGraphView for DirectedGraph {
    fn predecessors(&self, node: NodeId, buf: &mut Vec<NodeId>) {
        buf.extend(self.parents(node));
    }
}

impl WeightFunction for ArcWeights {
    #[inline]
    fn weight(&self, tail: NodeId, head: NodeId) -> Option<f64> {
        self.get(tail, head)
    }
}

impl HeuristicFunction for EuclideanHeuristic<'_> {
    #[inline]
    fn estimate(&self, from: NodeId, to: NodeId) -> f64 {
        EuclideanHeuristic::estimate(self, from, to)
    }
}
