//! Directed graph storage and arc weights.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use crate::node::NodeId;

/// A directed graph with forward and backward adjacency.
///
/// Adjacency sets are ordered, so iterating children or parents always
/// yields ascending ids. Self-loops are allowed; parallel arcs collapse.
///
/// With the `serde` feature the graph is stored as its [`AdjacencyList`];
/// parents and the arc count are rebuilt on load.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "AdjacencyList", into = "AdjacencyList"))]
pub struct DirectedGraph {
    children: BTreeMap<NodeId, BTreeSet<NodeId>>,
    parents: BTreeMap<NodeId, BTreeSet<NodeId>>,
    arcs: usize,
}

impl DirectedGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `node`. Returns `false` if it was already present.
    pub fn add_node(&mut self, node: NodeId) -> bool {
        if self.children.contains_key(&node) {
            return false;
        }
        self.children.insert(node, BTreeSet::new());
        self.parents.insert(node, BTreeSet::new());
        true
    }

    /// Add the arc `tail -> head`, creating missing endpoints.
    ///
    /// Returns `false` if the arc was already present.
    pub fn add_arc(&mut self, tail: NodeId, head: NodeId) -> bool {
        self.add_node(tail);
        self.add_node(head);
        let inserted = self.children.entry(tail).or_default().insert(head);
        if inserted {
            self.parents.entry(head).or_default().insert(tail);
            self.arcs += 1;
        }
        inserted
    }

    /// Remove the arc `tail -> head`. Returns `false` if it was absent.
    pub fn remove_arc(&mut self, tail: NodeId, head: NodeId) -> bool {
        let removed = self
            .children
            .get_mut(&tail)
            .is_some_and(|set| set.remove(&head));
        if removed {
            if let Some(set) = self.parents.get_mut(&head) {
                set.remove(&tail);
            }
            self.arcs -= 1;
        }
        removed
    }

    #[inline]
    pub fn has_node(&self, node: NodeId) -> bool {
        self.children.contains_key(&node)
    }

    pub fn has_arc(&self, tail: NodeId, head: NodeId) -> bool {
        self.children
            .get(&tail)
            .is_some_and(|set| set.contains(&head))
    }

    /// Successors of `node` in ascending order. Empty for an unknown node.
    pub fn children(&self, node: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.children.get(&node).into_iter().flatten().copied()
    }

    /// Predecessors of `node` in ascending order. Empty for an unknown node.
    pub fn parents(&self, node: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.parents.get(&node).into_iter().flatten().copied()
    }

    /// All nodes in ascending order.
    pub fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.children.keys().copied()
    }

    pub fn node_count(&self) -> usize {
        self.children.len()
    }

    pub fn arc_count(&self) -> usize {
        self.arcs
    }

    /// Remove every node and arc.
    pub fn clear(&mut self) {
        self.children.clear();
        self.parents.clear();
        self.arcs = 0;
    }
}

/// Every node with its children, nodes and children in ascending order.
pub type AdjacencyList = Vec<(NodeId, Vec<NodeId>)>;

impl From<AdjacencyList> for DirectedGraph {
    fn from(list: AdjacencyList) -> Self {
        let mut g = Self::new();
        for (tail, heads) in list {
            g.add_node(tail);
            for head in heads {
                g.add_arc(tail, head);
            }
        }
        g
    }
}

impl From<DirectedGraph> for AdjacencyList {
    fn from(g: DirectedGraph) -> Self {
        g.children
            .into_iter()
            .map(|(tail, heads)| (tail, heads.into_iter().collect()))
            .collect()
    }
}

/// Arc weight table keyed by `(tail, head)`.
#[derive(Clone, Debug, Default)]
pub struct ArcWeights {
    weights: HashMap<(NodeId, NodeId), f64>,
}

impl ArcWeights {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the weight of `tail -> head`, returning the previous weight.
    ///
    /// Weights are expected to be non-negative; this is not checked.
    pub fn put(&mut self, tail: NodeId, head: NodeId, weight: f64) -> Option<f64> {
        self.weights.insert((tail, head), weight)
    }

    /// Weight of `tail -> head`, if one was set.
    #[inline]
    pub fn get(&self, tail: NodeId, head: NodeId) -> Option<f64> {
        self.weights.get(&(tail, head)).copied()
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }
}
