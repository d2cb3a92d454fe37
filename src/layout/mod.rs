//! Layout engine — positions both trees and sizes the shared canvas.

pub mod hierarchy;
pub mod tidy;
pub mod types;

pub use hierarchy::{Hierarchy, Node, Side, TransactionTrees, build_trees};
pub use tidy::tidy_layout;
pub use types::{DualLayout, Point, TreeLayout, ViewBox};

use crate::config::RenderConfig;

/// Lay out both trees with one depth spacing and compute the canvas.
///
/// Depth spacing divides the fixed width among every level of both trees,
/// so the diagram always fits horizontally. The cross-axis extent is taken
/// over both trees jointly.
pub fn layout_trees(trees: &TransactionTrees, config: &RenderConfig) -> DualLayout {
    let dx = config.node_spacing;
    let inputs_height = trees.inputs.height();
    let outputs_height = trees.outputs.height();
    let dy = config.width / (inputs_height + outputs_height + 1) as f64;

    let inputs = tidy_layout(&trees.inputs, dx, dy);
    let outputs = tidy_layout(&trees.outputs, dx, dy);

    // Each tree has at least its root, so the fallback is never taken.
    let (x0, x1) = [inputs.cross_extent(), outputs.cross_extent()]
        .into_iter()
        .flatten()
        .reduce(|(lo_a, hi_a), (lo_b, hi_b)| (lo_a.min(lo_b), hi_a.max(hi_b)))
        .unwrap_or((0.0, 0.0));

    // Center the transaction when both sides fit in half the width;
    // otherwise anchor the deepest input at the left edge.
    let reach = |height: usize| dy * height as f64 + dx + config.label_margin;
    let half = config.width / 2.0;
    let min_x = if reach(inputs_height) <= half && reach(outputs_height) <= half {
        -half
    } else {
        -reach(inputs_height)
    };

    let view_box = ViewBox {
        min_x,
        min_y: x0 - dx,
        width: config.width,
        height: x1 - x0 + dx * 2.0,
    };

    log::debug!(
        "layout: dx={dx} dy={dy} heights=({inputs_height}, {outputs_height}) extent=({x0}, {x1})"
    );

    DualLayout {
        inputs,
        outputs,
        dx,
        dy,
        x0,
        x1,
        view_box,
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_layout.rs"]
mod tests;
