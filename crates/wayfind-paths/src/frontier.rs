use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};

use wayfind_core::NodeId;

use crate::path::ParentMap;

// ---------------------------------------------------------------------------
// Priority entries
// ---------------------------------------------------------------------------

/// A frontier entry: a node and its priority key.
///
/// Entries order by ascending key, then by ascending node id, so equal keys
/// always resolve the same way. `Ord` is reversed so that `BinaryHeap`
/// (a max-heap) pops the smallest entry first.
#[derive(Clone, Copy, Debug)]
pub struct PriorityEntry {
    pub node: NodeId,
    pub key: f64,
}

impl PriorityEntry {
    #[inline]
    pub fn new(node: NodeId, key: f64) -> Self {
        Self { node, key }
    }
}

impl Ord for PriorityEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .key
            .total_cmp(&self.key)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for PriorityEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for PriorityEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for PriorityEntry {}

// ---------------------------------------------------------------------------
// Per-call search state
// ---------------------------------------------------------------------------

/// Scratch state of one search direction.
///
/// Created fresh by every `search` call and dropped when it returns, so a
/// strategy never carries state from one call to the next. `open` may hold
/// stale duplicates of closed nodes; they are skipped when dequeued.
#[derive(Debug, Default)]
pub(crate) struct SearchState {
    pub(crate) distance: HashMap<NodeId, f64>,
    pub(crate) parents: ParentMap,
    pub(crate) closed: HashSet<NodeId>,
    pub(crate) open: BinaryHeap<PriorityEntry>,
}

impl SearchState {
    /// State with `root` at distance 0, no parent, queued with `key`.
    pub(crate) fn rooted(root: NodeId, key: f64) -> Self {
        let mut state = Self::default();
        state.distance.insert(root, 0.0);
        state.parents.insert(root, None);
        state.open.push(PriorityEntry::new(root, key));
        state
    }

    /// Best known distance to `node`, infinite if it was never reached.
    #[inline]
    pub(crate) fn g(&self, node: NodeId) -> f64 {
        self.distance.get(&node).copied().unwrap_or(f64::INFINITY)
    }

    #[inline]
    pub(crate) fn is_closed(&self, node: NodeId) -> bool {
        self.closed.contains(&node)
    }

    /// Record `node` as reached through `via` at `dist` if that is new or
    /// strictly shorter. Returns whether anything changed.
    pub(crate) fn improve(&mut self, node: NodeId, via: NodeId, dist: f64) -> bool {
        match self.distance.get(&node) {
            Some(&known) if known <= dist => false,
            _ => {
                self.distance.insert(node, dist);
                self.parents.insert(node, Some(via));
                true
            }
        }
    }

    /// Drop stale entries sitting on top of `open` and return the key of
    /// the first live one.
    pub(crate) fn peek_key(&mut self) -> Option<f64> {
        while let Some(top) = self.open.peek() {
            if self.closed.contains(&top.node) {
                self.open.pop();
            } else {
                return Some(top.key);
            }
        }
        None
    }

    /// Pop the smallest entry whose node is not closed yet.
    pub(crate) fn pop_live(&mut self) -> Option<PriorityEntry> {
        while let Some(entry) = self.open.pop() {
            if !self.closed.contains(&entry.node) {
                return Some(entry);
            }
        }
        None
    }

    /// Open plus closed cardinality, used to balance two directions.
    #[inline]
    pub(crate) fn size(&self) -> usize {
        self.open.len() + self.closed.len()
    }
}
