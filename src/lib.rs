//! Soil Engine
//!
//! Geotechnical and agronomic estimates from a soil description: bearing
//! capacity, foundation and structural recommendations, concrete durability
//! requirements and building/agriculture suitability scores.
//!
//! Module layout:
//! - `soil/`: input model (description, environment, soil types)
//! - `layers/`: bore-log handling, governing layer, synthesized profiles
//! - `metrics/`: unit weight, void ratio, CBR, bearing capacity
//! - `classify/`: foundation, exposure, concrete, structural and slab tables
//! - `remediation`: ground-improvement advice when capacity falls short
//! - `suitability/`: weighted building and agriculture scores
//! - `engine`: composes everything into a design bundle
//!
//! All outputs are preliminary estimates; verify against site
//! investigation and the governing codes.

pub mod classify;
pub mod config;
pub mod engine;
pub mod layers;
pub mod metrics;
pub mod remediation;
pub mod samples;
pub mod soil;
pub mod suitability;
pub mod utils;

// Re-export commonly used types
pub use classify::{ConcreteRecommendation, ExposureClass, FoundationType, StructuralRecommendation};
pub use config::EngineConfig;
pub use engine::{
    evaluate, foundation_summary_line, foundation_type_for, score_suitability, summarize,
    DesignBundle, DesignSummary, SoilEngine,
};
pub use layers::{ProfileSource, SoilLayer};
pub use remediation::RemediationPlan;
pub use soil::{BuildingType, EnvironmentDescription, EnvironmentTag, SoilDescription, SoilType};
pub use suitability::{SuitabilityReport, Track};
