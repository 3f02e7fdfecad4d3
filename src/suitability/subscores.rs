//! Piecewise-linear sub-score maps
//!
//! Each raw input maps to 0-100: 100 inside a named optimum band, degrading
//! linearly outside it. Results are clamped to [0, 100] (NaN maps to 0).

use crate::utils::clamp_or_low;

fn bounded(score: f64) -> f64 {
    clamp_or_low(score, 0.0, 100.0)
}

/// 100 inside [low, high], minus `rate_below`/`rate_above` per unit outside
fn band(value: f64, low: f64, high: f64, rate_below: f64, rate_above: f64) -> f64 {
    let score = if value.is_nan() {
        0.0
    } else if value < low {
        100.0 - (low - value) * rate_below
    } else if value > high {
        100.0 - (value - high) * rate_above
    } else {
        100.0
    };
    bounded(score)
}

// ============================================================================
// Building track
// ============================================================================

/// Optimum pH 6.0-8.0, 25 points per pH unit outside
pub fn building_ph_score(ph: f64) -> f64 {
    band(ph, 6.0, 8.0, 25.0, 25.0)
}

/// Optimum ≤ 20 %; 60 at 40 %; 3 points per % beyond 40
pub fn building_moisture_score(moisture: f64) -> f64 {
    let score = if moisture <= 20.0 {
        100.0
    } else if moisture <= 40.0 {
        100.0 - (moisture - 20.0) * 2.0
    } else {
        60.0 - (moisture - 40.0) * 3.0
    };
    bounded(score)
}

/// CBR of 15 % or more scores full marks
pub fn bearing_ratio_score(cbr: f64) -> f64 {
    bounded(cbr / 15.0 * 100.0)
}

/// Optimum e ≤ 0.5; 50 at e = 1.0; 50 points per unit beyond
pub fn void_ratio_score(void_ratio: f64) -> f64 {
    let score = if void_ratio <= 0.5 {
        100.0
    } else if void_ratio <= 1.0 {
        100.0 - (void_ratio - 0.5) * 100.0
    } else {
        50.0 - (void_ratio - 1.0) * 50.0
    };
    bounded(score)
}

// ============================================================================
// Agriculture track
// ============================================================================

/// Optimum pH 6.0-7.5, 25 points per pH unit outside
pub fn agriculture_ph_score(ph: f64) -> f64 {
    band(ph, 6.0, 7.5, 25.0, 25.0)
}

/// Optimum 20-60 %; 3 points per % too dry, 2.5 per % too wet
pub fn agriculture_moisture_score(moisture: f64) -> f64 {
    band(moisture, 20.0, 60.0, 3.0, 2.5)
}

/// 40 + 20·OM below 3 %, full marks 3-10 %, 5 points per % above 10
pub fn organic_matter_score(organic_matter: f64) -> f64 {
    let score = if organic_matter < 3.0 {
        40.0 + 20.0 * organic_matter
    } else if organic_matter <= 10.0 {
        100.0
    } else {
        100.0 - (organic_matter - 10.0) * 5.0
    };
    bounded(score)
}

/// Optimum 15-30 °C, 5 points per °C outside
pub fn temperature_score(temperature: f64) -> f64 {
    band(temperature, 15.0, 30.0, 5.0, 5.0)
}
