//! Small graphs shared by the unit tests.

use wayfind_core::generate::euclidean_weights;
use wayfind_core::{ArcWeights, Coordinates, DirectedGraph, NodeId, Point2};

pub(crate) fn n(id: u32) -> NodeId {
    NodeId(id)
}

pub(crate) fn ids(path: &[u32]) -> Vec<NodeId> {
    path.iter().copied().map(NodeId).collect()
}

/// Positions 0=(0,0), 1=(1,0), 2=(2,1), 3=(2,-1), 4=(3,0).
pub(crate) fn fork_coords() -> Coordinates {
    let mut c = Coordinates::new();
    for (id, x, y) in [(0, 0.0, 0.0), (1, 1.0, 0.0), (2, 2.0, 1.0), (3, 2.0, -1.0), (4, 3.0, 0.0)] {
        c.put(n(id), Point2::new(x, y));
    }
    c
}

/// Nodes 0..=4 with arcs 0->1, 1->2, 1->3. Node 4 is unreachable.
pub(crate) fn disconnected_fork() -> DirectedGraph {
    let mut g = DirectedGraph::new();
    for id in 0..5 {
        g.add_node(n(id));
    }
    g.add_arc(n(0), n(1));
    g.add_arc(n(1), n(2));
    g.add_arc(n(1), n(3));
    g
}

/// [`disconnected_fork`] plus 2->4 and 3->4.
pub(crate) fn connected_fork() -> DirectedGraph {
    let mut g = disconnected_fork();
    g.add_arc(n(2), n(4));
    g.add_arc(n(3), n(4));
    g
}

/// Arc weights equal to the distance between [`fork_coords`] positions.
pub(crate) fn fork_weights(g: &DirectedGraph) -> ArcWeights {
    euclidean_weights(g, &fork_coords(), 1.0)
}

/// A graph where the fewest-hop route is not the cheapest one.
///
/// ```text
/// 0 -10-> 5
/// 0 -1-> 1 -1-> 2 -1-> 3 -1-> 5
/// 1 -5-> 4 -1-> 5
/// ```
/// Shortest 0 -> 5 costs 4 through 1, 2, 3.
pub(crate) fn detour() -> (DirectedGraph, ArcWeights) {
    let mut g = DirectedGraph::new();
    let mut w = ArcWeights::new();
    for (t, h, c) in [
        (0, 5, 10.0),
        (0, 1, 1.0),
        (1, 2, 1.0),
        (2, 3, 1.0),
        (3, 5, 1.0),
        (1, 4, 5.0),
        (4, 5, 1.0),
    ] {
        g.add_arc(n(t), n(h));
        w.put(n(t), n(h), c);
    }
    (g, w)
}
