//! Encoder — visual attributes per node.
//!
//! Radius comes from capacity, color from the owner's lock args. The
//! encoder owns the per-render owner palette, so build one per render.

pub mod color;
pub mod palette;
pub mod radius;

pub use color::{FillState, HoverFill, Rgb};
pub use palette::{ACCENT, OwnerPalette};
pub use radius::radius_for;

use petgraph::graph::NodeIndex;

use crate::capacity::Capacity;
use crate::error::Result;
use crate::layout::{Hierarchy, Node};

/// Fill of nodes that have children.
pub const INTERNAL_FILL: Rgb = Rgb::from_hex(0x555555);
/// Fill of childless nodes that are not cells (an empty transaction root).
pub const LEAF_FILL: Rgb = Rgb::from_hex(0x999999);

/// Text fill and outline for a cell label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct LabelPaint {
    pub fill: Rgb,
    pub stroke: Rgb,
}

/// Per-render encoder state.
#[derive(Debug, Clone)]
pub struct Encoder {
    palette: OwnerPalette,
    min_radius: f64,
}

impl Encoder {
    pub fn new(min_radius: f64) -> Self {
        Self {
            palette: OwnerPalette::default(),
            min_radius,
        }
    }

    /// Total capacity a node stands for: its own, or its cell children's sum.
    pub fn capacity(&self, tree: &Hierarchy, idx: NodeIndex) -> Result<Capacity> {
        match tree.node(idx) {
            Node::Cell(cell) => Capacity::parse(&cell.capacity),
            Node::Transaction { .. } => tree
                .child_cells(idx)
                .map(|cell| Capacity::parse(&cell.capacity))
                .sum(),
        }
    }

    pub fn radius(&self, tree: &Hierarchy, idx: NodeIndex) -> Result<f64> {
        Ok(radius_for(&self.capacity(tree, idx)?, self.min_radius))
    }

    /// Owner color for a lock args key.
    pub fn owner_color(&mut self, args: &str) -> Rgb {
        self.palette.color(args)
    }

    pub fn fill(&mut self, tree: &Hierarchy, idx: NodeIndex) -> Rgb {
        if !tree.is_leaf(idx) {
            return INTERNAL_FILL;
        }
        match tree.node(idx) {
            Node::Cell(cell) => self.owner_color(&cell.lock.args),
            Node::Transaction { .. } => LEAF_FILL,
        }
    }

    /// Label paint for cells; transaction labels are unpainted.
    pub fn label_paint(&mut self, node: &Node) -> Option<LabelPaint> {
        let cell = node.as_cell()?;
        let fill = self.owner_color(&cell.lock.args);
        Some(LabelPaint {
            fill,
            stroke: fill.darker(1.0),
        })
    }

    pub fn palette(&self) -> &OwnerPalette {
        &self.palette
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_encode.rs"]
mod tests;
