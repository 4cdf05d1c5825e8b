use wayfind_core::NodeId;

use crate::error::{PathError, arc_weight, check_endpoints};
use crate::frontier::{PriorityEntry, SearchState};
use crate::path::{Path, reconstruct_path};
use crate::search::{Pathfinder, SearchResult};
use crate::traits::{GraphView, HeuristicFunction, WeightFunction};

/// Unidirectional best-first search.
///
/// Nodes are expanded by `distance + heuristic(node, target)`. With an
/// admissible, consistent heuristic the returned path is a shortest one;
/// with [`ZeroHeuristic`](crate::ZeroHeuristic) this is Dijkstra's
/// algorithm (see [`Dijkstra`](crate::Dijkstra)).
pub struct AStar<'a, G, W, H> {
    pub(crate) graph: &'a G,
    pub(crate) weights: &'a W,
    pub(crate) heuristic: &'a H,
    pub(crate) name: &'static str,
}

impl<'a, G, W, H> AStar<'a, G, W, H>
where
    G: GraphView,
    W: WeightFunction,
    H: HeuristicFunction,
{
    /// Bind an A* search to its collaborators.
    pub fn new(graph: &'a G, weights: &'a W, heuristic: &'a H) -> Self {
        Self {
            graph,
            weights,
            heuristic,
            name: "A*",
        }
    }
}

impl<G, W, H> Pathfinder for AStar<'_, G, W, H>
where
    G: GraphView,
    W: WeightFunction,
    H: HeuristicFunction,
{
    fn name(&self) -> &'static str {
        self.name
    }

    fn search_with(&self, source: NodeId, target: NodeId, stop: &dyn Fn() -> bool) -> SearchResult {
        check_endpoints(self.graph, source, target)?;

        let mut state = SearchState::rooted(source, self.heuristic.estimate(source, target));
        let mut nbuf = Vec::new();

        loop {
            if stop() {
                return Err(PathError::Interrupted);
            }
            let Some(current) = state.open.pop() else {
                log::debug!(
                    "{}: {} unreachable from {} after settling {} nodes",
                    self.name,
                    target,
                    source,
                    state.closed.len()
                );
                return Ok(None);
            };
            let ci = current.node;

            if ci == target {
                let path = reconstruct_path(ci, &state.parents, None);
                log_found(self.name, &path, state.closed.len());
                return Ok(Some(path));
            }

            // Skip stale entries.
            if !state.closed.insert(ci) {
                continue;
            }

            let current_g = state.g(ci);
            nbuf.clear();
            self.graph.successors(ci, &mut nbuf);

            for &ni in nbuf.iter() {
                if state.is_closed(ni) {
                    continue;
                }
                let tentative_g = current_g + arc_weight(self.weights, ci, ni)?;
                if state.improve(ni, ci, tentative_g) {
                    let f = tentative_g + self.heuristic.estimate(ni, target);
                    state.open.push(PriorityEntry::new(ni, f));
                }
            }
        }
    }
}

pub(crate) fn log_found(name: &str, path: &Path, settled: usize) {
    log::debug!(
        "{}: {} -> {} in {} nodes, {} settled",
        name,
        path.source(),
        path.target(),
        path.node_count(),
        settled
    );
}
