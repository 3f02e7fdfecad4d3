//! Bulk density to unit weight conversion

/// Gravitational conversion from g/cm³ to kN/m³
pub const GRAVITY: f64 = 9.81;

/// Unit weight used when the density is outside the plausible range (kN/m³)
pub const FALLBACK_UNIT_WEIGHT: f64 = 18.0;

/// Plausible bulk density range (g/cm³), exclusive low / inclusive high
pub const MIN_DENSITY: f64 = 0.5;
pub const MAX_DENSITY: f64 = 2.8;

/// Convert bulk density (g/cm³) to unit weight γ (kN/m³).
///
/// Densities outside (0.5, 2.8] return the 18 kN/m³ fallback so that a
/// mistyped value cannot produce a nonsensical bearing capacity.
pub fn density_to_unit_weight(density: f64) -> f64 {
    if density > MIN_DENSITY && density <= MAX_DENSITY {
        density * GRAVITY
    } else {
        FALLBACK_UNIT_WEIGHT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_range() {
        for density in [0.51, 1.0, 1.7, 2.0, 2.8] {
            assert_eq!(density_to_unit_weight(density), density * 9.81);
        }
    }

    #[test]
    fn test_out_of_range_fallback() {
        for density in [0.5, 0.0, -1.0, 2.81, 10.0, f64::NAN] {
            assert_eq!(density_to_unit_weight(density), 18.0);
        }
    }
}
