//! Layout types: Point, TreeLayout, ViewBox, DualLayout.

use petgraph::graph::NodeIndex;
use serde::Serialize;

// ─── Point ───────────────────────────────────────────────────────────────────

/// A position in layout space.
///
/// In a [`TreeLayout`], `x` is the cross axis (siblings stack along it) and
/// `y` is the depth axis. Scene coordinates swap them.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

// ─── TreeLayout ──────────────────────────────────────────────────────────────

/// Positions of every node of one hierarchy, indexed by `NodeIndex`.
#[derive(Debug, Clone, PartialEq)]
pub struct TreeLayout {
    pub positions: Vec<Point>,
}

impl TreeLayout {
    pub fn position(&self, idx: NodeIndex) -> Point {
        self.positions[idx.index()]
    }

    /// Minimum and maximum cross-axis coordinate.
    pub fn cross_extent(&self) -> Option<(f64, f64)> {
        self.positions.iter().fold(None, |acc, p| match acc {
            None => Some((p.x, p.x)),
            Some((lo, hi)) => Some((lo.min(p.x), hi.max(p.x))),
        })
    }
}

// ─── ViewBox ─────────────────────────────────────────────────────────────────

/// The canvas rectangle in scene coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ViewBox {
    pub min_x: f64,
    pub min_y: f64,
    pub width: f64,
    pub height: f64,
}

// ─── DualLayout ──────────────────────────────────────────────────────────────

/// Both trees laid out with shared spacing and one canvas.
#[derive(Debug, Clone, PartialEq)]
pub struct DualLayout {
    pub inputs: TreeLayout,
    pub outputs: TreeLayout,
    /// Sibling spacing.
    pub dx: f64,
    /// Depth spacing.
    pub dy: f64,
    /// Joint cross-axis extent of both trees.
    pub x0: f64,
    pub x1: f64,
    pub view_box: ViewBox,
}
