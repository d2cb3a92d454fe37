//! WASM bindings for tx-illustration.
//!
//! Exposes `render` and `renderWithOptions` to JavaScript via wasm-bindgen.
//! Both take the transaction as a JSON string and return SVG markup.

use wasm_bindgen::prelude::*;

use crate::labels::truncate_middle;
use crate::{RenderConfig, TransactionData, TransactionIllustrationConfig};

fn to_js(e: impl std::fmt::Display) -> JsError {
    JsError::new(&e.to_string())
}

/// Render a transaction JSON document with default settings.
#[wasm_bindgen]
pub fn render(data_json: &str) -> Result<String, JsError> {
    let data = TransactionData::from_json(data_json).map_err(to_js)?;
    crate::render_svg(&TransactionIllustrationConfig::new(data)).map_err(to_js)
}

/// Render with explicit options.
///
/// - `width`: canvas width; 0 keeps the default
/// - `truncate`: shorten hashes and lock args in labels
#[wasm_bindgen(js_name = "renderWithOptions")]
pub fn render_with_options(data_json: &str, width: f64, truncate: bool) -> Result<String, JsError> {
    let data = TransactionData::from_json(data_json).map_err(to_js)?;
    let mut render = RenderConfig::default();
    if width > 0.0 {
        render.width = width;
    }
    let mut config = TransactionIllustrationConfig::new(data).with_render_config(render);
    if truncate {
        config = config
            .with_transaction_label(|hash| truncate_middle(hash, 6, 6))
            .with_cell_label(|cell| truncate_middle(&cell.lock.args, 6, 4));
    }
    crate::render_svg(&config).map_err(to_js)
}
