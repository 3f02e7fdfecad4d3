//! Safe Bearing Capacity (Terzaghi)
//!
//! Ultimate capacity of a shallow strip-like footing:
//!
//! ```text
//! qult  = c·Nc + γ·Df·Nq + 0.5·γ·B·Nγ
//! qsafe = qult / FOS
//! ```
//!
//! with factors
//!
//! ```text
//! Nq = e^(π·tanφ) · tan²(45° + φ/2)
//! Nc = (Nq − 1) / tanφ
//! Nγ = 1.5 · (Nq − 1) · tanφ
//! ```
//!
//! Nc is singular at φ = 0, so its denominator is floored at tan(1e-6 rad).
//! Nq is exactly 1 there, which makes Nc vanish: a φ = 0 layer carries the
//! surcharge term only, and its cohesion contributes nothing.

use serde::{Deserialize, Serialize};
use std::f64::consts::{FRAC_PI_4, PI};

use crate::utils::round_to;

/// Default factor of safety applied to the ultimate capacity
pub const FACTOR_OF_SAFETY: f64 = 3.0;

/// Friction angle range accepted by the factor formulas (degrees)
pub const MAX_FRICTION_ANGLE: f64 = 45.0;

/// Friction angle (radians) whose tangent floors the Nc denominator
const MIN_PHI_RAD: f64 = 1e-6;

/// Terzaghi bearing-capacity factors
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BearingFactors {
    pub nc: f64,
    pub nq: f64,
    pub ngamma: f64,
}

/// Bearing-capacity factors for a friction angle in degrees (clamped to 0-45°)
pub fn bearing_factors(phi_deg: f64) -> BearingFactors {
    let phi_deg = if phi_deg.is_nan() {
        0.0
    } else {
        phi_deg.clamp(0.0, MAX_FRICTION_ANGLE)
    };
    let phi = phi_deg.to_radians();
    let tan_phi = phi.tan();

    let nq = (PI * tan_phi).exp() * (FRAC_PI_4 + phi / 2.0).tan().powi(2);
    let nc = (nq - 1.0) / tan_phi.max(MIN_PHI_RAD.tan());
    let ngamma = 1.5 * (nq - 1.0) * tan_phi;

    BearingFactors { nc, nq, ngamma }
}

/// Ultimate bearing capacity qult (kPa), unrounded
///
/// # Arguments
/// * `cohesion` - c (kPa)
/// * `phi_deg` - friction angle φ (degrees)
/// * `unit_weight` - γ (kN/m³)
/// * `depth` - embedment depth Df (m)
/// * `width` - footing width B (m)
pub fn ultimate_bearing_capacity(
    cohesion: f64,
    phi_deg: f64,
    unit_weight: f64,
    depth: f64,
    width: f64,
) -> f64 {
    let factors = bearing_factors(phi_deg);
    let surcharge = unit_weight * depth;
    cohesion * factors.nc + surcharge * factors.nq + 0.5 * unit_weight * width * factors.ngamma
}

/// Safe bearing capacity (kPa) with an explicit factor of safety.
///
/// Never negative; NaN or infinite results give 0. Reported to 1 decimal.
pub fn safe_bearing_capacity_with_factor(
    cohesion: f64,
    phi_deg: f64,
    unit_weight: f64,
    depth: f64,
    width: f64,
    factor_of_safety: f64,
) -> f64 {
    let qult = ultimate_bearing_capacity(cohesion, phi_deg, unit_weight, depth, width);
    let qsafe = qult / factor_of_safety;
    if !qsafe.is_finite() {
        return 0.0;
    }
    round_to(qsafe.max(0.0), 1)
}

/// Safe bearing capacity (kPa) with the default factor of safety of 3.
///
/// # Examples
/// ```
/// use soil_engine::metrics::compute_safe_bearing_capacity;
///
/// // Undrained clay (φ = 0) must not blow up
/// let qsafe = compute_safe_bearing_capacity(0.0, 0.0, 18.0, 1.5, 1.0);
/// assert!(qsafe.is_finite() && qsafe >= 0.0);
/// ```
pub fn compute_safe_bearing_capacity(
    cohesion: f64,
    phi_deg: f64,
    unit_weight: f64,
    depth: f64,
    width: f64,
) -> f64 {
    safe_bearing_capacity_with_factor(cohesion, phi_deg, unit_weight, depth, width, FACTOR_OF_SAFETY)
}
