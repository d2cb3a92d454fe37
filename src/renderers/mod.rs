//! Renderer trait and the built-in scene renderers.

pub mod json;
pub mod svg;

pub use json::JsonRenderer;
pub use svg::SvgRenderer;

use crate::error::Result;
use crate::scene::Scene;

/// Turns a finished scene into a document.
pub trait Renderer {
    fn render(&self, scene: &Scene) -> Result<String>;
}

/// Output formats selectable by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    #[default]
    Svg,
    Json,
}

impl Format {
    pub fn renderer(self) -> Box<dyn Renderer> {
        match self {
            Self::Svg => Box::new(SvgRenderer),
            Self::Json => Box::new(JsonRenderer { pretty: true }),
        }
    }
}

impl std::str::FromStr for Format {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "svg" => Ok(Self::Svg),
            "json" => Ok(Self::Json),
            other => Err(format!("Unknown format '{other}'; use svg or json")),
        }
    }
}
