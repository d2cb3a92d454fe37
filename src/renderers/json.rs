//! JSON renderer — the scene graph as a serde document.

use super::Renderer;
use crate::error::Result;
use crate::scene::Scene;

#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRenderer {
    pub pretty: bool,
}

impl Renderer for JsonRenderer {
    fn render(&self, scene: &Scene) -> Result<String> {
        let encoded = if self.pretty {
            serde_json::to_string_pretty(scene)?
        } else {
            serde_json::to_string(scene)?
        };
        Ok(encoded)
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_renderers_json.rs"]
mod tests;
