//! Cell capacity arithmetic and formatting.
//!
//! Capacities are kept as arbitrary-precision integers of shannons from the
//! moment they are parsed until the final `log10` in the radius encoder.

use std::fmt;
use std::iter::Sum;
use std::str::FromStr;
use std::sync::LazyLock;

use num_bigint::BigUint;
use num_traits::{ToPrimitive, Zero};
use regex::Regex;

use crate::error::{IllustrationError, Result};

// ─── Constants ───────────────────────────────────────────────────────────────

/// Shannons per CKB.
pub const ONE_CKB: u64 = 100_000_000;

/// Digits in the fractional part of a formatted capacity.
pub const FRACTION_DIGITS: usize = 8;

pub const UNIT: &str = "CKB";

static LITERAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:0[xX](?P<hex>[0-9a-fA-F]+)|(?P<dec>[0-9]+))$")
        .expect("capacity literal pattern")
});

static LABEL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<whole>[0-9]+)(?:\.(?P<frac>[0-9]{8}))? CKB$").expect("capacity label pattern")
});

// ─── Capacity ────────────────────────────────────────────────────────────────

/// An amount of shannons.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Capacity(BigUint);

impl Capacity {
    /// Parse a decimal or `0x`-prefixed hex string.
    pub fn parse(value: &str) -> Result<Self> {
        let invalid = || IllustrationError::InvalidCapacity {
            value: value.to_string(),
        };
        let caps = LITERAL.captures(value).ok_or_else(invalid)?;
        let (digits, radix) = match (caps.name("hex"), caps.name("dec")) {
            (Some(hex), _) => (hex.as_str(), 16),
            (None, Some(dec)) => (dec.as_str(), 10),
            (None, None) => return Err(invalid()),
        };
        BigUint::parse_bytes(digits.as_bytes(), radix)
            .map(Self)
            .ok_or_else(invalid)
    }

    pub fn shannons(&self) -> &BigUint {
        &self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Whole CKB, rounded down.
    pub fn whole_units(&self) -> BigUint {
        &self.0 / ONE_CKB
    }

    /// Split into whole CKB and the remaining shannons.
    pub fn split(&self) -> (BigUint, u64) {
        let fraction = (&self.0 % ONE_CKB).to_u64().unwrap_or_default();
        (self.whole_units(), fraction)
    }
}

impl FromStr for Capacity {
    type Err = IllustrationError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Capacity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for Capacity {
    fn from(shannons: u64) -> Self {
        Self(BigUint::from(shannons))
    }
}

impl<'a> Sum<&'a Capacity> for Capacity {
    fn sum<I: Iterator<Item = &'a Capacity>>(iter: I) -> Self {
        Self(iter.fold(BigUint::zero(), |acc, c| acc + &c.0))
    }
}

impl Sum for Capacity {
    fn sum<I: Iterator<Item = Capacity>>(iter: I) -> Self {
        Self(iter.fold(BigUint::zero(), |acc, c| acc + c.0))
    }
}

// ─── Labels ──────────────────────────────────────────────────────────────────

/// Format as `"<whole> CKB"` or `"<whole>.<8 digits> CKB"`.
pub fn format_capacity(capacity: &Capacity) -> String {
    let (whole, fraction) = capacity.split();
    if fraction == 0 {
        format!("{whole} {UNIT}")
    } else {
        format!("{whole}.{fraction:0width$} {UNIT}", width = FRACTION_DIGITS)
    }
}

/// Inverse of [`format_capacity`].
pub fn parse_capacity_label(label: &str) -> Result<Capacity> {
    let invalid = || IllustrationError::InvalidLabel(label.to_string());
    let caps = LABEL.captures(label).ok_or_else(invalid)?;
    let whole = caps
        .name("whole")
        .and_then(|m| BigUint::parse_bytes(m.as_str().as_bytes(), 10))
        .ok_or_else(invalid)?;
    let fraction = match caps.name("frac") {
        Some(m) => m.as_str().parse::<u64>().map_err(|_| invalid())?,
        None => 0,
    };
    Ok(Capacity(whole * ONE_CKB + fraction))
}

#[cfg(test)]
#[path = "../tests/rust/test_capacity.rs"]
mod tests;
