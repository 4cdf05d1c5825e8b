use thiserror::Error;
use wayfind_core::NodeId;

use crate::traits::{GraphView, WeightFunction};

/// Why a search could not run to completion.
///
/// An unreachable target is not an error: searches report it as `Ok(None)`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PathError {
    /// An endpoint passed to `search` is not in the graph.
    #[error("node {0} is not in the graph")]
    UnknownNode(NodeId),
    /// The graph reports an arc the weight function has no cost for.
    #[error("arc {tail} -> {head} has no weight")]
    MissingWeight { tail: NodeId, head: NodeId },
    /// The walker's slack factor must be finite and at least 1.
    #[error("slack factor {0} must be finite and >= 1")]
    InvalidSlackFactor(f64),
    /// The caller's stop predicate fired.
    #[error("search interrupted")]
    Interrupted,
}

/// Fail with [`PathError::UnknownNode`] unless both endpoints exist.
pub(crate) fn check_endpoints<G: GraphView>(
    graph: &G,
    source: NodeId,
    target: NodeId,
) -> Result<(), PathError> {
    for node in [source, target] {
        if !graph.contains(node) {
            return Err(PathError::UnknownNode(node));
        }
    }
    Ok(())
}

/// Weight of `tail -> head`, or [`PathError::MissingWeight`].
#[inline]
pub(crate) fn arc_weight<W: WeightFunction>(
    weights: &W,
    tail: NodeId,
    head: NodeId,
) -> Result<f64, PathError> {
    let w = weights
        .weight(tail, head)
        .ok_or(PathError::MissingWeight { tail, head })?;
    debug_assert!(w >= 0.0, "negative weight {w} on arc {tail} -> {head}");
    Ok(w)
}
