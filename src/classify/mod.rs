//! Classification tables
//!
//! Threshold and rule tables mapping derived metrics and the site
//! environment to categorical recommendations.

pub mod concrete;
pub mod exposure;
pub mod foundation;
pub mod slab;
pub mod structural;

use crate::soil::{EnvironmentDescription, SoilDescription};

pub use concrete::{
    durability_requirement, recommend_concrete, select_cement_type, CementType, ConcreteGrade,
    ConcreteRecommendation, DurabilityRequirement, NominalCover,
};
pub use exposure::{compute_exposure, ExposureClass};
pub use foundation::{classify_foundation_type, estimate_max_floors, FoundationType};
pub use slab::{suggest_slab_system, SlabSuggestion, SlabSystem};
pub use structural::{recommend_structural_system, StructuralRecommendation, StructuralSystem};

/// Building scale and environment as seen by the structural and slab tables
#[derive(Debug, Clone)]
pub struct SiteContext {
    /// Planned floors, at least 1
    pub floors: u32,
    /// Site area, default area when none was given
    pub area: f64,
    pub env: EnvironmentDescription,
}

impl SiteContext {
    pub fn new(description: &SoilDescription, env: Option<&EnvironmentDescription>) -> Self {
        Self {
            floors: description.floors(),
            area: description.area(),
            env: env.cloned().unwrap_or_default(),
        }
    }
}
