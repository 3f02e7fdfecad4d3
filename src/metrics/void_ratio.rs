//! Void Ratio from Phase Relationships
//!
//! γd = γ / (1 + w)
//! e  = (Gs · γw) / γd − 1
//!
//! Gs is held at a typical 2.65, so the result is an approximation that
//! tracks bulk density and moisture rather than a lab value.

use super::unit_weight::{density_to_unit_weight, GRAVITY};
use crate::utils::round_to;

/// Specific gravity of soil solids (typical quartz-dominated soils)
pub const SPECIFIC_GRAVITY: f64 = 2.65;

/// Unit weight of water (kN/m³)
pub const UNIT_WEIGHT_WATER: f64 = GRAVITY;

/// Moisture is clamped to this range (%) before use
pub const MAX_MOISTURE: f64 = 200.0;

/// Compute the void ratio from bulk density (g/cm³) and moisture (%).
///
/// Never negative; reported to 2 decimals.
pub fn compute_void_ratio(density: f64, moisture: f64) -> f64 {
    let gamma = density_to_unit_weight(density);
    let w = if moisture.is_nan() {
        0.0
    } else {
        moisture.clamp(0.0, MAX_MOISTURE) / 100.0
    };
    let gamma_dry = gamma / (1.0 + w);
    let e = (SPECIFIC_GRAVITY * UNIT_WEIGHT_WATER) / gamma_dry - 1.0;
    round_to(e.max(0.0), 2)
}
