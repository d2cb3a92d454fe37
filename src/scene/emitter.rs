//! Scene emitter — turns laid-out trees into links and glyphs.

use crate::encode::{Encoder, HoverFill, Rgb};
use crate::error::Result;
use crate::labels::Labels;
use crate::layout::{DualLayout, Hierarchy, Node, Point, Side, TransactionTrees, TreeLayout};

use super::{
    Circle, ClickTarget, Glyph, GlyphKind, GlyphLayer, Label, Link, LinkLayer, Scene, TextAnchor,
};

// ─── Style constants ─────────────────────────────────────────────────────────

const LINK_STROKE: Rgb = Rgb::from_hex(0x555555);
const LINK_STROKE_OPACITY: f64 = 0.4;
const LINK_STROKE_WIDTH: f64 = 1.5;
const GLYPH_STROKE_WIDTH: f64 = 3.0;
const LABEL_STROKE_WIDTH: f64 = 0.5;
/// Horizontal gap between a circle's center and its label.
const LABEL_GAP: f64 = 5.0;
/// Baseline shift that vertically centers a label on its circle.
const LABEL_BASELINE: f64 = 6.0;

// ─── Helpers ─────────────────────────────────────────────────────────────────

/// Map a layout point to scene coordinates. Inputs grow left.
fn to_scene(side: Side, p: Point) -> Point {
    match side {
        // `0.0 - y` rather than `-y` keeps the root at 0, not -0.
        Side::Inputs => Point::new(0.0 - p.y, p.x),
        Side::Outputs => Point::new(p.y, p.x),
    }
}

fn label_placement(side: Side, node: &Node) -> (TextAnchor, Point) {
    match (side, node) {
        (Side::Inputs, Node::Cell(_)) => (TextAnchor::End, Point::new(-LABEL_GAP, LABEL_BASELINE)),
        _ => (TextAnchor::Start, Point::new(LABEL_GAP, LABEL_BASELINE)),
    }
}

fn label_text(labels: &Labels, node: &Node) -> Option<String> {
    match node {
        Node::Transaction { tx_hash } if tx_hash.is_empty() => None,
        Node::Transaction { tx_hash } => Some(labels.transaction(tx_hash)),
        Node::Cell(cell) => Some(labels.cell(cell)),
    }
}

fn click_target(node: &Node) -> Option<ClickTarget> {
    match node {
        Node::Transaction { tx_hash } if tx_hash.is_empty() => None,
        Node::Transaction { tx_hash } => Some(ClickTarget::Transaction {
            tx_hash: tx_hash.clone(),
        }),
        Node::Cell(cell) => cell
            .out_point
            .clone()
            .map(|out_point| ClickTarget::Cell { out_point }),
    }
}

// ─── Layers ──────────────────────────────────────────────────────────────────

fn link_layer(side: Side, tree: &Hierarchy, layout: &TreeLayout) -> LinkLayer {
    let links = tree
        .links()
        .into_iter()
        .map(|(parent, child)| Link {
            source: to_scene(side, layout.position(parent)),
            target: to_scene(side, layout.position(child)),
        })
        .collect();
    LinkLayer {
        side,
        stroke: LINK_STROKE,
        stroke_opacity: LINK_STROKE_OPACITY,
        stroke_width: LINK_STROKE_WIDTH,
        links,
    }
}

fn glyph_layer(
    side: Side,
    tree: &Hierarchy,
    layout: &TreeLayout,
    encoder: &mut Encoder,
    labels: &Labels,
) -> Result<GlyphLayer> {
    let mut glyphs = Vec::with_capacity(tree.node_count());
    for (idx, _) in tree.breadth_first() {
        let node = tree.node(idx);
        // Radius first: it validates the capacity before any label callback sees it.
        let radius = encoder.radius(tree, idx)?;
        let fill = encoder.fill(tree, idx);
        let label = label_text(labels, node).map(|text| {
            let (anchor, offset) = label_placement(side, node);
            Label {
                text,
                anchor,
                offset,
                paint: encoder.label_paint(node),
                stroke_width: LABEL_STROKE_WIDTH,
            }
        });
        glyphs.push(Glyph {
            kind: if node.is_cell() {
                GlyphKind::Cell
            } else {
                GlyphKind::Transaction
            },
            origin: to_scene(side, layout.position(idx)),
            circle: Circle {
                radius,
                fill: HoverFill::new(fill),
            },
            label,
            click: click_target(node),
        });
    }
    Ok(GlyphLayer {
        side,
        stroke_width: GLYPH_STROKE_WIDTH,
        glyphs,
    })
}

// ─── Public API ──────────────────────────────────────────────────────────────

/// Emit the scene for both trees. The encoder's palette is shared across
/// both sides so an owner keeps one color on the whole diagram.
pub fn emit_scene(
    trees: &TransactionTrees,
    layout: &DualLayout,
    encoder: &mut Encoder,
    labels: &Labels,
) -> Result<Scene> {
    let links = vec![
        link_layer(Side::Inputs, &trees.inputs, &layout.inputs),
        link_layer(Side::Outputs, &trees.outputs, &layout.outputs),
    ];
    let glyphs = vec![
        glyph_layer(Side::Inputs, &trees.inputs, &layout.inputs, encoder, labels)?,
        glyph_layer(Side::Outputs, &trees.outputs, &layout.outputs, encoder, labels)?,
    ];
    Ok(Scene {
        view_box: layout.view_box,
        links,
        glyphs,
    })
}

#[cfg(test)]
#[path = "../../tests/rust/test_scene_emitter.rs"]
mod tests;
