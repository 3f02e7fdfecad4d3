//! Building and Agriculture Suitability
//!
//! Blends piecewise-linear sub-scores into two 0-100 scores, each with a
//! recommendation band and the list of factors holding it back.
//!
//! ## Architecture
//! - `subscores.rs` - raw value → 0-100 maps with named optimum bands
//! - `scorer.rs` - factor weights and report assembly
//! - `assessment.rs` - report output structs
//!
//! The building track needs CBR and void ratio from the design evaluation;
//! `SoilEngine::score_suitability` supplies them.

pub mod assessment;
pub mod scorer;
pub mod subscores;

pub use assessment::{
    Factor, PerTrack, ScoreDetails, SubScore, SuitabilityBand, SuitabilityReport,
    Track, LIMITING_THRESHOLD,
};
pub use scorer::{
    agriculture_sub_scores, build_report, building_sub_scores, limiting_factors, weighted_score,
    ScoringInputs, AGRICULTURE_WEIGHTS, BUILDING_WEIGHTS,
};
