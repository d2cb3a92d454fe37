//! Categorical owner palette.

use std::collections::HashMap;

use super::color::Rgb;

/// The eight-color "Accent" scheme.
pub const ACCENT: [Rgb; 8] = [
    Rgb::from_hex(0x7fc97f),
    Rgb::from_hex(0xbeaed4),
    Rgb::from_hex(0xfdc086),
    Rgb::from_hex(0xffff99),
    Rgb::from_hex(0x386cb0),
    Rgb::from_hex(0xf0027f),
    Rgb::from_hex(0xbf5b17),
    Rgb::from_hex(0x666666),
];

/// Assigns palette colors to owner keys in order of first encounter.
///
/// Keys beyond the palette size wrap around and share colors. One palette
/// lives for exactly one render.
#[derive(Debug, Clone)]
pub struct OwnerPalette {
    scheme: Vec<Rgb>,
    /// Keys in first-encounter order.
    domain: Vec<String>,
    index: HashMap<String, usize>,
}

impl Default for OwnerPalette {
    fn default() -> Self {
        Self::new(ACCENT.to_vec())
    }
}

impl OwnerPalette {
    /// An empty scheme falls back to [`ACCENT`].
    pub fn new(scheme: Vec<Rgb>) -> Self {
        let scheme = if scheme.is_empty() {
            ACCENT.to_vec()
        } else {
            scheme
        };
        Self {
            scheme,
            domain: Vec::new(),
            index: HashMap::new(),
        }
    }

    pub fn color(&mut self, key: &str) -> Rgb {
        let slot = match self.index.get(key) {
            Some(&slot) => slot,
            None => {
                let slot = self.domain.len();
                self.domain.push(key.to_string());
                self.index.insert(key.to_string(), slot);
                slot
            }
        };
        self.scheme[slot % self.scheme.len()]
    }

    /// Keys seen so far, in assignment order.
    pub fn domain(&self) -> &[String] {
        &self.domain
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_encode_palette.rs"]
mod tests;
