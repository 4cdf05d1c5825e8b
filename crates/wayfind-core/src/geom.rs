//! Planar geometry: [`Point2`] and the per-node [`Coordinates`] table.
//!
//! Coordinates exist only to build distance-based weights and the
//! [`EuclideanHeuristic`]; the graph itself has no notion of position.

use std::collections::HashMap;
use std::fmt;
use std::ops::Sub;

use crate::node::NodeId;

// ---------------------------------------------------------------------------
// Point2
// ---------------------------------------------------------------------------

/// A point in the plane with `f64` components.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point2 {
    pub x: f64,
    pub y: f64,
}

impl Point2 {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    /// Create a new point.
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    #[inline]
    pub fn distance(self, other: Point2) -> f64 {
        let d = self - other;
        d.x.hypot(d.y)
    }
}

impl fmt::Display for Point2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Sub for Point2 {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

// ---------------------------------------------------------------------------
// Coordinates
// ---------------------------------------------------------------------------

/// Maps node ids to positions in the plane.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinates {
    points: HashMap<NodeId, Point2>,
}

impl Coordinates {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the position of `node`, returning the previous one if any.
    pub fn put(&mut self, node: NodeId, p: Point2) -> Option<Point2> {
        self.points.insert(node, p)
    }

    /// Position of `node`, if known.
    #[inline]
    pub fn get(&self, node: NodeId) -> Option<Point2> {
        self.points.get(&node).copied()
    }

    /// Straight-line distance between two nodes, or `None` when either
    /// position is unknown.
    pub fn distance(&self, a: NodeId, b: NodeId) -> Option<f64> {
        Some(self.get(a)?.distance(self.get(b)?))
    }

    /// Number of positioned nodes.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

// ---------------------------------------------------------------------------
// EuclideanHeuristic
// ---------------------------------------------------------------------------

/// Straight-line distance between node positions.
///
/// Admissible (and consistent) as long as every arc weighs at least the
/// distance between its endpoints. A node without a position estimates to
/// `0.0`, which keeps the bound admissible.
#[derive(Clone, Copy, Debug)]
pub struct EuclideanHeuristic<'a> {
    coords: &'a Coordinates,
}

impl<'a> EuclideanHeuristic<'a> {
    pub fn new(coords: &'a Coordinates) -> Self {
        Self { coords }
    }

    /// Estimated distance from `from` to `to`.
    #[inline]
    pub fn estimate(&self, from: NodeId, to: NodeId) -> f64 {
        self.coords.distance(from, to).unwrap_or(0.0)
    }
}
