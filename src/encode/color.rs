//! RGB colors with shade stepping and hover fill state.

use std::fmt;

use serde::{Serialize, Serializer};

/// Multiplier for one `darker` step; `brighter` uses its inverse.
pub const SHADE_STEP: f64 = 0.7;

// ─── Rgb ─────────────────────────────────────────────────────────────────────

/// An opaque sRGB color, formatted as `#rrggbb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build from a packed `0xrrggbb` value.
    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xff) as u8,
            g: ((hex >> 8) & 0xff) as u8,
            b: (hex & 0xff) as u8,
        }
    }

    fn scale(self, k: f64) -> Self {
        let channel = |v: u8| (v as f64 * k).round().clamp(0.0, 255.0) as u8;
        Self {
            r: channel(self.r),
            g: channel(self.g),
            b: channel(self.b),
        }
    }

    /// Lighten by `steps` shade steps.
    pub fn brighter(self, steps: f64) -> Self {
        self.scale((1.0 / SHADE_STEP).powf(steps))
    }

    /// Darken by `steps` shade steps.
    pub fn darker(self, steps: f64) -> Self {
        self.scale(SHADE_STEP.powf(steps))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

// ─── Hover ───────────────────────────────────────────────────────────────────

/// Resting and hovered fill of a circle.
///
/// The hovered fill is computed once from the resting fill. Leaving restores
/// the stored resting value; `brighter` then `darker` is lossy on 8-bit
/// channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HoverFill {
    pub rest: Rgb,
    pub active: Rgb,
}

impl HoverFill {
    pub fn new(rest: Rgb) -> Self {
        Self {
            rest,
            active: rest.brighter(1.0),
        }
    }

    pub fn state(self) -> FillState {
        FillState {
            fill: self,
            hovered: false,
        }
    }
}

/// Current fill of one circle under pointer interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FillState {
    fill: HoverFill,
    hovered: bool,
}

impl FillState {
    pub fn pointer_enter(&mut self) {
        self.hovered = true;
    }

    pub fn pointer_leave(&mut self) {
        self.hovered = false;
    }

    pub fn current(&self) -> Rgb {
        if self.hovered {
            self.fill.active
        } else {
            self.fill.rest
        }
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_encode_color.rs"]
mod tests;
