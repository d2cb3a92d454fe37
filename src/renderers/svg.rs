//! SVG renderer — converts a scene graph to a standalone SVG string.
//!
//! Hover feedback is carried by inline `onmouseover`/`onmouseout` handlers
//! that switch between the circle's precomputed resting and hovered fills.
//! Click targets become `data-*` attributes for the host page to wire up.

use super::Renderer;
use crate::error::Result;
use crate::scene::{ClickTarget, Glyph, GlyphLayer, LinkLayer, Scene};

const SVG_NS: &str = "http://www.w3.org/2000/svg";
const ROOT_STYLE: &str = "max-width: 100%; height: auto;";

// ── Helpers ──────────────────────────────────────────────────────────────────

fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

fn click_attrs(click: &Option<ClickTarget>) -> String {
    match click {
        None => String::new(),
        Some(ClickTarget::Transaction { tx_hash }) => {
            format!(r#" data-tx-hash="{}""#, escape(tx_hash))
        }
        Some(ClickTarget::Cell { out_point }) => format!(
            r#" data-tx-hash="{}" data-index="{}""#,
            escape(&out_point.tx_hash),
            out_point.index
        ),
    }
}

// ── Layers ───────────────────────────────────────────────────────────────────

fn render_links(layer: &LinkLayer) -> String {
    let mut parts = vec![format!(
        r#"<g fill="none" stroke="{}" stroke-opacity="{}" stroke-width="{}">"#,
        layer.stroke, layer.stroke_opacity, layer.stroke_width
    )];
    for link in &layer.links {
        parts.push(format!(r#"  <path d="{}"/>"#, link.path_data()));
    }
    parts.push("</g>".to_string());
    parts.join("\n")
}

fn render_glyph(glyph: &Glyph) -> String {
    let origin = glyph.origin;
    let fill = glyph.circle.fill;
    let mut parts = vec![
        format!(
            r#"  <g transform="translate({},{})"{}>"#,
            origin.x,
            origin.y,
            click_attrs(&glyph.click)
        ),
        format!(
            r#"    <circle r="{}" fill="{}" onmouseover="this.setAttribute('fill','{}')" onmouseout="this.setAttribute('fill','{}')"/>"#,
            glyph.circle.radius, fill.rest, fill.active, fill.rest
        ),
    ];
    if let Some(label) = &glyph.label {
        let paint = match label.paint {
            Some(p) => format!(r#" fill="{}" stroke="{}""#, p.fill, p.stroke),
            None => String::new(),
        };
        parts.push(format!(
            r#"    <text text-anchor="{}" transform="translate({},{})" stroke-width="{}"{}>{}</text>"#,
            label.anchor.as_str(),
            label.offset.x,
            label.offset.y,
            label.stroke_width,
            paint,
            escape(&label.text)
        ));
    }
    parts.push("  </g>".to_string());
    parts.join("\n")
}

fn render_glyphs(layer: &GlyphLayer) -> String {
    let mut parts = vec![format!(
        r#"<g stroke-linejoin="round" stroke-width="{}">"#,
        layer.stroke_width
    )];
    parts.extend(layer.glyphs.iter().map(render_glyph));
    parts.push("</g>".to_string());
    parts.join("\n")
}

// ── Public API ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default)]
pub struct SvgRenderer;

impl Renderer for SvgRenderer {
    fn render(&self, scene: &Scene) -> Result<String> {
        let vb = scene.view_box;
        let mut parts = vec![format!(
            r#"<svg xmlns="{SVG_NS}" viewBox="{} {} {} {}" style="{ROOT_STYLE}">"#,
            vb.min_x, vb.min_y, vb.width, vb.height
        )];
        parts.extend(scene.links.iter().map(render_links));
        parts.extend(scene.glyphs.iter().map(render_glyphs));
        parts.push("</svg>".to_string());
        Ok(parts.join("\n"))
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_renderers_svg.rs"]
mod tests;
