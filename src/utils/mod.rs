//! Utility modules shared by the calculators and classification tables
//!
//! - Rounding: fixed-precision presentation of derived metrics
//! - Rules: ordered condition/outcome tables (first- or last-match-wins)

pub mod rounding;
pub mod rules;

// Re-export commonly used helpers
pub use rounding::{clamp_or_low, round_to};
pub use rules::{fired, first_match, last_match, Rule};
