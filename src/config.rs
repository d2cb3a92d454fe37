//! Configuration for the rendering pipeline.

use crate::error::{IllustrationError, Result};
use crate::labels::{CellLabelFn, Labels, TransactionLabelFn};
use crate::model::{CellInfo, TransactionData};

/// Geometry and encoding knobs.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    /// Canvas width in scene units. Depth spacing is derived from it.
    pub width: f64,
    /// Spacing between siblings along the cross axis (`dx`).
    pub node_spacing: f64,
    /// Room reserved left of the deepest input for its label.
    pub label_margin: f64,
    /// Smallest radius drawn for any node.
    pub min_radius: f64,
    /// Build the outputs tree from the inputs, drawing a mirrored diagram
    /// instead of the real outputs.
    pub mirror_inputs: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 960.0,
            node_spacing: 20.0,
            label_margin: 100.0,
            min_radius: 1.0,
            mirror_inputs: false,
        }
    }
}

impl RenderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject values that would produce NaN or inverted geometry.
    pub fn validate(&self) -> Result<()> {
        let positive = |name: &str, v: f64| {
            if v.is_finite() && v > 0.0 {
                Ok(())
            } else {
                Err(IllustrationError::InvalidConfig(format!(
                    "{name} must be a positive finite number, got {v}"
                )))
            }
        };
        positive("width", self.width)?;
        positive("node_spacing", self.node_spacing)?;
        positive("min_radius", self.min_radius)?;
        if !self.label_margin.is_finite() || self.label_margin < 0.0 {
            return Err(IllustrationError::InvalidConfig(format!(
                "label_margin must be a non-negative finite number, got {}",
                self.label_margin
            )));
        }
        Ok(())
    }
}

/// Everything one render needs: the data plus optional label callbacks.
#[derive(Debug)]
pub struct TransactionIllustrationConfig {
    pub data: TransactionData,
    pub labels: Labels,
    pub render: RenderConfig,
}

impl TransactionIllustrationConfig {
    pub fn new(data: TransactionData) -> Self {
        Self {
            data,
            labels: Labels::default(),
            render: RenderConfig::default(),
        }
    }

    pub fn with_transaction_label<F>(mut self, f: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        let transaction: TransactionLabelFn = Box::new(f);
        self.labels = self.labels.with_transaction(transaction);
        self
    }

    pub fn with_cell_label<F>(mut self, f: F) -> Self
    where
        F: Fn(&CellInfo) -> String + Send + Sync + 'static,
    {
        let cell: CellLabelFn = Box::new(f);
        self.labels = self.labels.with_cell(cell);
        self
    }

    pub fn with_render_config(mut self, render: RenderConfig) -> Self {
        self.render = render;
        self
    }
}

#[cfg(test)]
#[path = "../tests/rust/test_config.rs"]
mod tests;
