//! Bidirectional best-first search: bidirectional Dijkstra and NBA*.
//!
//! A forward search grows from the source over successor arcs while a
//! backward search grows from the target over predecessor arcs. Every
//! relaxation that reaches a node already settled by the other side is a
//! candidate meeting point; the cheapest one seen is kept as the touch node.
//! The search stops once the two smallest frontier keys add up to more than
//! the best candidate, at which point no unsettled node can improve on it.
//!
//! NBA* keys each side with the averaged potential
//! `p(v) = (h(v, target) - h(source, v)) / 2`, forward `g + p(v)` and
//! backward `g - p(v)`. These keys keep the sum-of-minimums stopping rule
//! exact for consistent heuristics, so both variants share one loop.

use wayfind_core::NodeId;

use crate::astar::log_found;
use crate::error::{PathError, arc_weight, check_endpoints};
use crate::frontier::{PriorityEntry, SearchState};
use crate::path::{Path, reconstruct_path};
use crate::search::{Pathfinder, SearchResult};
use crate::traits::{BidirectionalGraphView, HeuristicFunction, WeightFunction, ZeroHeuristic};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Direction {
    Forward,
    Backward,
}

/// Best meeting point found so far.
#[derive(Debug)]
struct Meeting {
    best: f64,
    touch: Option<NodeId>,
}

/// Two-frontier search meeting in the middle.
///
/// Use [`BidirectionalSearch::dijkstra`] for plain bidirectional Dijkstra or
/// [`BidirectionalSearch::nba_star`] for the heuristic-guided NBA*.
pub struct BidirectionalSearch<'a, G, W, H> {
    graph: &'a G,
    weights: &'a W,
    heuristic: &'a H,
    name: &'static str,
}

/// Bidirectional Dijkstra.
pub type BidirectionalDijkstra<'a, G, W> = BidirectionalSearch<'a, G, W, ZeroHeuristic>;

/// Heuristic-guided bidirectional search.
pub type NbaStar<'a, G, W, H> = BidirectionalSearch<'a, G, W, H>;

const ZERO: ZeroHeuristic = ZeroHeuristic;

impl<'a, G, W> BidirectionalSearch<'a, G, W, ZeroHeuristic>
where
    G: BidirectionalGraphView,
    W: WeightFunction,
{
    /// Bidirectional Dijkstra: both frontiers keyed by distance alone.
    pub fn dijkstra(graph: &'a G, weights: &'a W) -> Self {
        Self {
            graph,
            weights,
            heuristic: &ZERO,
            name: "Bidirectional Dijkstra",
        }
    }
}

impl<'a, G, W, H> BidirectionalSearch<'a, G, W, H>
where
    G: BidirectionalGraphView,
    W: WeightFunction,
    H: HeuristicFunction,
{
    /// NBA*. `heuristic` must be consistent in both directions for the
    /// result to be a shortest path.
    pub fn nba_star(graph: &'a G, weights: &'a W, heuristic: &'a H) -> Self {
        Self {
            graph,
            weights,
            heuristic,
            name: "NBA*",
        }
    }

    /// Heuristic part of the key of `node` on side `dir`.
    #[inline]
    fn potential(&self, dir: Direction, node: NodeId, source: NodeId, target: NodeId) -> f64 {
        let p = 0.5 * (self.heuristic.estimate(node, target) - self.heuristic.estimate(source, node));
        match dir {
            Direction::Forward => p,
            Direction::Backward => -p,
        }
    }

    /// Settle the best live node of `this` and relax its arcs.
    #[allow(clippy::too_many_arguments)]
    fn expand(
        &self,
        dir: Direction,
        this: &mut SearchState,
        other: &SearchState,
        meeting: &mut Meeting,
        source: NodeId,
        target: NodeId,
        nbuf: &mut Vec<NodeId>,
    ) -> Result<(), PathError> {
        let Some(current) = this.pop_live() else {
            return Ok(());
        };
        let ci = current.node;
        this.closed.insert(ci);
        let current_g = this.g(ci);

        nbuf.clear();
        match dir {
            Direction::Forward => self.graph.successors(ci, nbuf),
            Direction::Backward => self.graph.predecessors(ci, nbuf),
        }

        for &ni in nbuf.iter() {
            if this.is_closed(ni) {
                continue;
            }
            let w = match dir {
                Direction::Forward => arc_weight(self.weights, ci, ni)?,
                Direction::Backward => arc_weight(self.weights, ni, ci)?,
            };
            let tentative_g = current_g + w;
            if this.improve(ni, ci, tentative_g) {
                let key = tentative_g + self.potential(dir, ni, source, target);
                this.open.push(PriorityEntry::new(ni, key));
            }

            if other.is_closed(ni) {
                let total = this.g(ni) + other.g(ni);
                if total < meeting.best {
                    log::trace!("{}: touch node {} at {}", self.name, ni, total);
                    meeting.best = total;
                    meeting.touch = Some(ni);
                }
            }
        }
        Ok(())
    }
}

impl<G, W, H> Pathfinder for BidirectionalSearch<'_, G, W, H>
where
    G: BidirectionalGraphView,
    W: WeightFunction,
    H: HeuristicFunction,
{
    fn name(&self) -> &'static str {
        self.name
    }

    fn search_with(&self, source: NodeId, target: NodeId, stop: &dyn Fn() -> bool) -> SearchResult {
        check_endpoints(self.graph, source, target)?;
        if source == target {
            return Ok(Some(Path::trivial(source)));
        }

        let mut forward = SearchState::rooted(
            source,
            self.potential(Direction::Forward, source, source, target),
        );
        let mut backward = SearchState::rooted(
            target,
            self.potential(Direction::Backward, target, source, target),
        );
        let mut meeting = Meeting {
            best: f64::INFINITY,
            touch: None,
        };
        let mut nbuf = Vec::new();

        loop {
            if stop() {
                return Err(PathError::Interrupted);
            }
            let (Some(top_f), Some(top_b)) = (forward.peek_key(), backward.peek_key()) else {
                break;
            };
            if top_f + top_b > meeting.best {
                break;
            }

            if forward.size() < backward.size() {
                self.expand(
                    Direction::Forward,
                    &mut forward,
                    &backward,
                    &mut meeting,
                    source,
                    target,
                    &mut nbuf,
                )?;
            } else {
                self.expand(
                    Direction::Backward,
                    &mut backward,
                    &forward,
                    &mut meeting,
                    source,
                    target,
                    &mut nbuf,
                )?;
            }
        }

        let settled = forward.closed.len() + backward.closed.len();
        match meeting.touch {
            Some(touch) => {
                let path = reconstruct_path(touch, &forward.parents, Some(&backward.parents));
                log_found(self.name, &path, settled);
                Ok(Some(path))
            }
            None => {
                log::debug!(
                    "{}: {} unreachable from {} after settling {} nodes",
                    self.name,
                    target,
                    source,
                    settled
                );
                Ok(None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::astar::AStar;
    use crate::fixtures::*;
    use wayfind_core::{ArcWeights, DirectedGraph, EuclideanHeuristic};

    #[test]
    fn fork_scenario() {
        let g = connected_fork();
        let w = fork_weights(&g);
        let coords = fork_coords();
        let h = EuclideanHeuristic::new(&coords);

        let bidi = BidirectionalSearch::dijkstra(&g, &w);
        let path = bidi.search(n(0), n(4)).unwrap().unwrap();
        assert_eq!(path.node_count(), 4);
        assert_eq!(&path.nodes()[..2], ids(&[0, 1]).as_slice());
        assert!(matches!(path.nodes()[2].get(), 2 | 3));
        assert_eq!(path.target(), n(4));

        let nba = BidirectionalSearch::nba_star(&g, &w, &h);
        let path = nba.search(n(0), n(4)).unwrap().unwrap();
        assert_eq!(path.node_count(), 4);
        assert_eq!(path.source(), n(0));
        assert_eq!(path.target(), n(4));
        assert!((path.cost(&w).unwrap() - (1.0 + 2.0 * 2f64.sqrt())).abs() < 1e-9);
    }

    #[test]
    fn disconnected_is_not_found() {
        let g = disconnected_fork();
        let w = fork_weights(&g);
        let coords = fork_coords();
        let h = EuclideanHeuristic::new(&coords);
        assert_eq!(BidirectionalSearch::dijkstra(&g, &w).search(n(0), n(4)).unwrap(), None);
        assert_eq!(BidirectionalSearch::nba_star(&g, &w, &h).search(n(0), n(4)).unwrap(), None);
    }

    #[test]
    fn prefers_cheap_detour() {
        let (g, w) = detour();
        let bidi = BidirectionalSearch::dijkstra(&g, &w);
        let path = bidi.search(n(0), n(5)).unwrap().unwrap();
        assert_eq!(path.nodes(), ids(&[0, 1, 2, 3, 5]).as_slice());
    }

    #[test]
    fn single_arc() {
        let mut g = DirectedGraph::new();
        let mut w = ArcWeights::new();
        g.add_arc(n(0), n(1));
        w.put(n(0), n(1), 2.5);
        let bidi = BidirectionalSearch::dijkstra(&g, &w);
        let path = bidi.search(n(0), n(1)).unwrap().unwrap();
        assert_eq!(path.nodes(), ids(&[0, 1]).as_slice());
        // Arcs are directed.
        assert_eq!(bidi.search(n(1), n(0)).unwrap(), None);
    }

    #[test]
    fn source_is_target() {
        let (g, w) = detour();
        let bidi = BidirectionalSearch::dijkstra(&g, &w);
        assert_eq!(bidi.search(n(2), n(2)).unwrap().unwrap().nodes(), &[n(2)]);
    }

    #[test]
    fn meeting_far_from_the_first_touch() {
        // The first contact between the frontiers is the expensive arc
        // 0 -> 9; the cheap chain must still win.
        let mut g = DirectedGraph::new();
        let mut w = ArcWeights::new();
        let arcs = [
            (0, 9, 100.0),
            (0, 1, 1.0),
            (1, 2, 1.0),
            (2, 3, 1.0),
            (3, 4, 1.0),
            (4, 9, 1.0),
        ];
        for (t, h, c) in arcs {
            g.add_arc(n(t), n(h));
            w.put(n(t), n(h), c);
        }
        let bidi = BidirectionalSearch::dijkstra(&g, &w);
        let path = bidi.search(n(0), n(9)).unwrap().unwrap();
        assert_eq!(path.nodes(), ids(&[0, 1, 2, 3, 4, 9]).as_slice());
        assert_eq!(path.cost(&w).unwrap(), 5.0);
    }

    #[test]
    fn touch_survives_an_exhausted_frontier() {
        // Backward settles 1 then 0, which has no predecessors, while the
        // frontier keys still tie with the touch at 1. The backward side
        // runs dry before the key rule fires.
        let mut g = DirectedGraph::new();
        let mut w = ArcWeights::new();
        g.add_arc(n(0), n(1));
        w.put(n(0), n(1), 0.0);
        let bidi = BidirectionalSearch::dijkstra(&g, &w);
        let path = bidi.search(n(0), n(1)).unwrap().unwrap();
        assert_eq!(path.nodes(), ids(&[0, 1]).as_slice());
        assert_eq!(path.cost(&w).unwrap(), 0.0);

        let h = |_: NodeId, _: NodeId| 0.0;
        let nba = BidirectionalSearch::nba_star(&g, &w, &h);
        assert_eq!(nba.search(n(0), n(1)).unwrap(), Some(path));
    }

    #[test]
    fn all_pairs_match_dijkstra() {
        let (g, w) = detour();
        let uni = AStar::dijkstra(&g, &w);
        let bidi = BidirectionalSearch::dijkstra(&g, &w);
        for s in 0..6 {
            for t in 0..6 {
                let a = uni.search(n(s), n(t)).unwrap().map(|p| p.cost(&w).unwrap());
                let b = bidi.search(n(s), n(t)).unwrap().map(|p| p.cost(&w).unwrap());
                assert_eq!(a, b, "{s} -> {t}");
            }
        }
    }

    #[test]
    fn unknown_endpoint_and_interrupt() {
        let (g, w) = detour();
        let bidi = BidirectionalSearch::dijkstra(&g, &w);
        assert_eq!(bidi.search(n(0), n(40)), Err(PathError::UnknownNode(n(40))));
        assert_eq!(
            bidi.search_with(n(0), n(5), &|| true),
            Err(PathError::Interrupted)
        );
    }

    #[test]
    fn names() {
        let (g, w) = detour();
        let h = |_: NodeId, _: NodeId| 0.0;
        assert_eq!(BidirectionalSearch::dijkstra(&g, &w).name(), "Bidirectional Dijkstra");
        assert_eq!(BidirectionalSearch::nba_star(&g, &w, &h).name(), "NBA*");
    }
}
