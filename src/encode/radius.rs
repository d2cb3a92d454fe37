//! Logarithmic radius scale.

use std::f64::consts::LOG10_2;

use num_bigint::BigUint;
use num_traits::ToPrimitive;

use crate::capacity::Capacity;

/// `log10(n)`, estimated from the top 64 bits when `n` overflows `f64`.
fn log10_big(n: &BigUint) -> f64 {
    match n.to_f64() {
        Some(v) if v.is_finite() => v.log10(),
        _ => {
            let shift = n.bits().saturating_sub(64);
            let top = (n >> shift).to_f64().unwrap_or_default();
            top.log10() + shift as f64 * LOG10_2
        }
    }
}

/// `log10` of the whole CKB in `capacity`, never below `min_radius`.
///
/// Sub-unit and zero capacities would give zero, negative or infinite
/// values; those clamp to `min_radius`.
pub fn radius_for(capacity: &Capacity, min_radius: f64) -> f64 {
    let r = log10_big(&capacity.whole_units());
    if r.is_finite() && r > min_radius {
        r
    } else {
        min_radius
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_encode_radius.rs"]
mod tests;
