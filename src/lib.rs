//! tx-illustration — draws a CKB transaction as two mirrored trees.
//!
//! Public API: [`create_transaction_illustration`] and [`render_svg`].
//!
//! Pipeline:
//!   1. `layout::hierarchy` — inputs tree and outputs tree under the transaction
//!   2. `layout`            — compact tree layout, joint extent, canvas
//!   3. `encode`            — radius from capacity, color from lock args
//!   4. `scene`             — links and glyphs as a backend-independent scene
//!   5. `renderers`         — SVG or JSON output
//!
//! Each call builds its own encoder state; nothing is shared between calls.

pub mod capacity;
pub mod config;
pub mod encode;
pub mod error;
pub mod labels;
pub mod layout;
pub mod model;
pub mod renderers;
pub mod resolve;
pub mod scene;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use config::{RenderConfig, TransactionIllustrationConfig};
pub use error::{IllustrationError, ResolveError, Result};
pub use model::{CellInfo, OutPoint, Script, ScriptHashType, TransactionData};
pub use scene::Scene;

use crate::encode::Encoder;
use crate::layout::{build_trees, layout_trees};
use crate::renderers::{Renderer, SvgRenderer};
use crate::scene::emit_scene;

/// Build the scene graph for one transaction.
pub fn create_transaction_illustration(config: &TransactionIllustrationConfig) -> Result<Scene> {
    config.render.validate()?;
    let data = &config.data;
    log::debug!(
        "illustrating {} with {} input(s), {} output(s)",
        data.tx_hash,
        data.inputs.len(),
        data.outputs.len()
    );

    let trees = build_trees(data, config.render.mirror_inputs);
    let layout = layout_trees(&trees, &config.render);
    let mut encoder = Encoder::new(config.render.min_radius);
    let scene = emit_scene(&trees, &layout, &mut encoder, &config.labels)?;

    log::debug!(
        "scene: {} glyph(s), {} link(s), {} owner color(s)",
        scene.glyph_count(),
        scene.link_count(),
        encoder.palette().domain().len()
    );
    Ok(scene)
}

/// Build the scene and render it to a standalone SVG document.
pub fn render_svg(config: &TransactionIllustrationConfig) -> Result<String> {
    let scene = create_transaction_illustration(config)?;
    SvgRenderer.render(&scene)
}

#[cfg(test)]
#[path = "../tests/rust/test_lib.rs"]
mod tests;
