//! Primary soil metric calculators
//!
//! Pure functions deriving secondary metrics from the primary inputs. Each
//! degrades to a bounded fallback on malformed input rather than failing.

pub mod bearing_capacity;
pub mod cbr;
pub mod unit_weight;
pub mod void_ratio;

// Re-export calculator functions
pub use bearing_capacity::{
    bearing_factors, compute_safe_bearing_capacity, safe_bearing_capacity_with_factor,
    ultimate_bearing_capacity, BearingFactors, FACTOR_OF_SAFETY,
};
pub use cbr::estimate_cbr;
pub use unit_weight::{density_to_unit_weight, FALLBACK_UNIT_WEIGHT};
pub use void_ratio::compute_void_ratio;
