use wayfind_core::NodeId;

use crate::error::PathError;
use crate::path::Path;

/// Outcome of a search: `Ok(Some(path))` when the target is reachable,
/// `Ok(None)` when it is not, `Err` when the search could not run.
pub type SearchResult = Result<Option<Path>, PathError>;

/// Common interface of every pathfinding strategy.
///
/// A strategy borrows its collaborators immutably and keeps all scratch
/// state local to a call, so one instance can serve any number of
/// searches, from several threads if the collaborators allow it.
pub trait Pathfinder {
    /// Short human-readable strategy name.
    fn name(&self) -> &'static str;

    /// Search a path from `source` to `target`, polling `stop` once per
    /// main-loop iteration. When `stop` returns `true` the search is
    /// abandoned with [`PathError::Interrupted`].
    ///
    /// Fails with [`PathError::UnknownNode`] if either endpoint is not in
    /// the graph. A node reaches itself through the single-node path.
    fn search_with(&self, source: NodeId, target: NodeId, stop: &dyn Fn() -> bool) -> SearchResult;

    /// Search a path from `source` to `target`.
    fn search(&self, source: NodeId, target: NodeId) -> SearchResult {
        self.search_with(source, target, &|| false)
    }
}
