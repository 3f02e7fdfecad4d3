//! California Bearing Ratio Estimate
//!
//! Trend-only estimate: a soil-type base value, tiered density bonuses and a
//! moisture penalty above 25%. Lab CBR always governs; this exists so the
//! scorer has a subgrade-strength signal without test data.

use crate::soil::SoilType;
use crate::utils::{clamp_or_low, round_to};

pub const MIN_CBR: f64 = 1.0;
pub const MAX_CBR: f64 = 30.0;

/// Moisture (%) above which the CBR is penalised
pub const MOISTURE_PENALTY_THRESHOLD: f64 = 25.0;

/// CBR points lost per moisture point above the threshold
pub const MOISTURE_PENALTY_RATE: f64 = 0.15;

fn base_cbr(soil_type: Option<&SoilType>) -> f64 {
    match soil_type {
        Some(SoilType::Sand) | Some(SoilType::SiltySand) => 8.0,
        Some(SoilType::Silt) | Some(SoilType::SandySilt) => 5.0,
        Some(SoilType::Clay) | Some(SoilType::SiltyClay) => 3.0,
        _ => 6.0,
    }
}

fn density_bonus(density: f64) -> f64 {
    if density >= 2.0 {
        6.0
    } else if density >= 1.8 {
        4.0
    } else if density >= 1.6 {
        2.0
    } else {
        0.0
    }
}

/// Estimate CBR (%) from bulk density (g/cm³), moisture (%) and soil type.
///
/// Always within [1, 30], reported to 1 decimal.
pub fn estimate_cbr(density: f64, moisture: f64, soil_type: Option<&SoilType>) -> f64 {
    let mut cbr = base_cbr(soil_type) + density_bonus(density);

    if moisture > MOISTURE_PENALTY_THRESHOLD {
        cbr -= (moisture - MOISTURE_PENALTY_THRESHOLD) * MOISTURE_PENALTY_RATE;
    }

    round_to(clamp_or_low(cbr, MIN_CBR, MAX_CBR), 1)
}
