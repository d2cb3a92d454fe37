//! Scene graph — backend-independent drawables produced by one render.
//!
//! Coordinates are scene coordinates: `x` grows right (outputs side),
//! `y` grows down. Renderers turn a [`Scene`] into SVG, JSON, or anything
//! else without re-running layout.

pub mod emitter;

pub use emitter::emit_scene;

use serde::Serialize;

use crate::encode::{HoverFill, LabelPaint, Rgb};
use crate::layout::{Point, Side, ViewBox};
use crate::model::OutPoint;

// ─── Paths ───────────────────────────────────────────────────────────────────

/// A smooth horizontal connector from a parent to a child.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Link {
    pub source: Point,
    pub target: Point,
}

impl Link {
    /// Cubic bump curve with both control points at the horizontal midpoint.
    pub fn path_data(&self) -> String {
        let Point { x: sx, y: sy } = self.source;
        let Point { x: tx, y: ty } = self.target;
        let mx = (sx + tx) / 2.0;
        format!("M{sx},{sy}C{mx},{sy},{mx},{ty},{tx},{ty}")
    }
}

/// All connectors of one tree, sharing one stroke style.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LinkLayer {
    pub side: Side,
    pub stroke: Rgb,
    pub stroke_opacity: f64,
    pub stroke_width: f64,
    pub links: Vec<Link>,
}

// ─── Glyphs ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GlyphKind {
    Transaction,
    Cell,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Circle {
    pub radius: f64,
    pub fill: HoverFill,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TextAnchor {
    Start,
    End,
}

impl TextAnchor {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::End => "end",
        }
    }
}

/// Text beside a circle, offset relative to the glyph origin.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Label {
    pub text: String,
    pub anchor: TextAnchor,
    pub offset: Point,
    pub paint: Option<LabelPaint>,
    pub stroke_width: f64,
}

/// What a click on a glyph navigates to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum ClickTarget {
    Transaction { tx_hash: String },
    Cell { out_point: OutPoint },
}

/// One node: a circle and an optional label, translated to `origin`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Glyph {
    pub kind: GlyphKind,
    pub origin: Point,
    pub circle: Circle,
    pub label: Option<Label>,
    pub click: Option<ClickTarget>,
}

/// All glyphs of one tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GlyphLayer {
    pub side: Side,
    pub stroke_width: f64,
    pub glyphs: Vec<Glyph>,
}

// ─── Scene ───────────────────────────────────────────────────────────────────

/// The root drawable: links under glyphs, inputs before outputs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scene {
    pub view_box: ViewBox,
    pub links: Vec<LinkLayer>,
    pub glyphs: Vec<GlyphLayer>,
}

impl Scene {
    pub fn glyph_count(&self) -> usize {
        self.glyphs.iter().map(|layer| layer.glyphs.len()).sum()
    }

    pub fn link_count(&self) -> usize {
        self.links.iter().map(|layer| layer.links.len()).sum()
    }

    pub fn glyphs_on(&self, side: Side) -> impl Iterator<Item = &Glyph> {
        self.glyphs
            .iter()
            .filter(move |layer| layer.side == side)
            .flat_map(|layer| layer.glyphs.iter())
    }

    pub fn links_on(&self, side: Side) -> impl Iterator<Item = &Link> {
        self.links
            .iter()
            .filter(move |layer| layer.side == side)
            .flat_map(|layer| layer.links.iter())
    }

    /// Every glyph with a label, in drawing order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.glyphs
            .iter()
            .flat_map(|layer| layer.glyphs.iter())
            .filter_map(|glyph| glyph.label.as_ref().map(|l| l.text.as_str()))
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_scene.rs"]
mod tests;
