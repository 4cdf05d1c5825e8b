use std::collections::HashMap;

use thiserror::Error;
use wayfind_core::NodeId;

use crate::error::{PathError, arc_weight};
use crate::traits::WeightFunction;

/// Parent relation of one search direction.
///
/// A missing key means the node was never reached; `Some(None)` marks the
/// root of the search.
pub type ParentMap = HashMap<NodeId, Option<NodeId>>;

/// A found path: source first, target last, both included. Never empty.
///
/// With the `serde` feature a path is stored as its node list; loading an
/// empty list fails.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Vec<NodeId>", into = "Vec<NodeId>"))]
pub struct Path {
    nodes: Vec<NodeId>,
}

impl Path {
    /// The single-node path from `node` to itself.
    pub fn trivial(node: NodeId) -> Self {
        Self { nodes: vec![node] }
    }

    /// Wrap a node sequence. Returns `None` for an empty sequence.
    pub fn from_nodes(nodes: Vec<NodeId>) -> Option<Self> {
        if nodes.is_empty() {
            None
        } else {
            Some(Self { nodes })
        }
    }

    #[inline]
    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    pub fn into_nodes(self) -> Vec<NodeId> {
        self.nodes
    }

    #[inline]
    pub fn source(&self) -> NodeId {
        self.nodes[0]
    }

    #[inline]
    pub fn target(&self) -> NodeId {
        self.nodes[self.nodes.len() - 1]
    }

    /// Number of nodes, endpoints included.
    #[inline]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Consecutive `(tail, head)` pairs.
    pub fn arcs(&self) -> impl Iterator<Item = (NodeId, NodeId)> + '_ {
        self.nodes.windows(2).map(|w| (w[0], w[1]))
    }

    /// Total weight of the path under `weights`.
    pub fn cost<W: WeightFunction>(&self, weights: &W) -> Result<f64, PathError> {
        self.arcs()
            .try_fold(0.0, |acc, (tail, head)| {
                arc_weight(weights, tail, head).map(|w| acc + w)
            })
    }
}

/// A path needs at least one node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("a path needs at least one node")]
pub struct EmptyPath;

impl TryFrom<Vec<NodeId>> for Path {
    type Error = EmptyPath;

    fn try_from(nodes: Vec<NodeId>) -> Result<Self, Self::Error> {
        Self::from_nodes(nodes).ok_or(EmptyPath)
    }
}

impl From<Path> for Vec<NodeId> {
    fn from(path: Path) -> Self {
        path.into_nodes()
    }
}

/// Rebuild the path running through `meeting`.
///
/// Follows `forward` from `meeting` back to its root and reverses that
/// chain. If `backward` is given, continues from the meeting node's
/// backward parent along `backward` to its root. Unidirectional searches
/// pass the target as `meeting` and no backward map.
pub fn reconstruct_path(meeting: NodeId, forward: &ParentMap, backward: Option<&ParentMap>) -> Path {
    let mut nodes = vec![meeting];
    let mut current = meeting;
    while let Some(&Some(parent)) = forward.get(&current) {
        nodes.push(parent);
        current = parent;
    }
    nodes.reverse();

    if let Some(backward) = backward {
        current = meeting;
        while let Some(&Some(next)) = backward.get(&current) {
            nodes.push(next);
            current = next;
        }
    }

    Path { nodes }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn path_round_trip() {
        let path = Path::from_nodes(vec![NodeId(3), NodeId(1), NodeId(2)]).unwrap();
        let json = serde_json::to_string(&path).unwrap();
        let back: Path = serde_json::from_str(&json).unwrap();
        assert_eq!(path, back);
        assert_eq!(json, "[3,1,2]");
    }

    #[test]
    fn empty_path_is_rejected() {
        let err = serde_json::from_str::<Path>("[]").unwrap_err();
        assert!(err.to_string().contains("at least one node"), "{err}");
        assert!(serde_json::from_str::<Path>(r#"{"nodes":[]}"#).is_err());
    }
}
