//! Concrete mix recommendation (IS 456 / IS 10262 style)
//!
//! The exposure class fixes grade, water/cement ratio, cement content and
//! covers. Cement type, admixtures and notes come from the environment.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::soil::{EnvironmentDescription, EnvironmentTag};

use super::exposure::ExposureClass;

/// Seismic zone at or above which ductile detailing is required
pub const DUCTILE_DETAILING_ZONE: u8 = 4;

/// Basic wind speed (m/s) at or above which wind governs
pub const WIND_CRITICAL_SPEED: f64 = 44.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ConcreteGrade {
    M20,
    M25,
    M30,
    M35,
    M40,
}

impl fmt::Display for ConcreteGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Cement family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CementType {
    /// Ordinary Portland cement
    #[serde(rename = "OPC")]
    Opc,
    /// Portland pozzolana cement
    #[serde(rename = "PPC")]
    Ppc,
    /// Portland slag cement
    #[serde(rename = "PSC")]
    Psc,
    /// Sulfate-resisting cement
    #[serde(rename = "SRC")]
    Src,
}

impl CementType {
    pub fn code(&self) -> &'static str {
        match self {
            CementType::Opc => "OPC",
            CementType::Ppc => "PPC",
            CementType::Psc => "PSC",
            CementType::Src => "SRC",
        }
    }
}

impl fmt::Display for CementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Nominal cover per member (mm)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NominalCover {
    pub slab: u32,
    pub beam: u32,
    pub column: u32,
    pub footing: u32,
}

/// Durability row of the mix table
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DurabilityRequirement {
    pub grade: ConcreteGrade,
    pub max_wc_ratio: f64,
    /// kg/m³
    pub min_cement_content: u32,
    pub cover: NominalCover,
}

fn row(
    grade: ConcreteGrade,
    max_wc_ratio: f64,
    min_cement_content: u32,
    [slab, beam, column, footing]: [u32; 4],
) -> DurabilityRequirement {
    DurabilityRequirement {
        grade,
        max_wc_ratio,
        min_cement_content,
        cover: NominalCover { slab, beam, column, footing },
    }
}

/// Durability requirements for an exposure class
pub fn durability_requirement(exposure: ExposureClass) -> DurabilityRequirement {
    match exposure {
        ExposureClass::Mild => row(ConcreteGrade::M20, 0.55, 300, [20, 25, 25, 40]),
        ExposureClass::Moderate => row(ConcreteGrade::M25, 0.50, 320, [25, 30, 35, 45]),
        ExposureClass::Severe => row(ConcreteGrade::M30, 0.45, 340, [35, 40, 45, 50]),
        ExposureClass::VerySevere => row(ConcreteGrade::M35, 0.45, 360, [40, 50, 50, 55]),
        ExposureClass::Extreme => row(ConcreteGrade::M40, 0.40, 380, [50, 55, 60, 60]),
    }
}

/// Concrete specification for a site
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConcreteRecommendation {
    pub grade: ConcreteGrade,
    pub cement_type: CementType,
    /// By mass
    #[serde(rename = "maxWCRatio")]
    pub max_wc_ratio: f64,
    /// kg/m³ (indicative)
    pub min_cement_content: u32,
    pub nominal_cover: NominalCover,
    pub admixtures: Vec<String>,
    pub notes: Vec<String>,
}

/// Chloride exposure takes slag cement, aggressive sulfate takes SRC,
/// everything else the pozzolanic blend
pub fn select_cement_type(env: &EnvironmentDescription) -> CementType {
    if env.is_chloride_exposed() {
        CementType::Psc
    } else if env.is_sulfate_aggressive() {
        CementType::Src
    } else {
        CementType::Ppc
    }
}

fn admixtures_for(env: &EnvironmentDescription) -> Vec<String> {
    let mut admixtures = Vec::new();
    if env.has(EnvironmentTag::Hot) {
        admixtures.push("Retarder / Low-heat blend".to_string());
    }
    if env.has(EnvironmentTag::Cold) {
        admixtures.push("Air-entraining agent / Accelerator".to_string());
    }
    if env.is_chloride_exposed() {
        admixtures.push("Corrosion inhibitor".to_string());
    }
    if env.has_any(&[EnvironmentTag::Tropical, EnvironmentTag::Rainforest]) {
        admixtures.push("Water-reducer (HRWR)".to_string());
    }
    admixtures
}

fn notes_for(env: &EnvironmentDescription) -> Vec<String> {
    let mut notes = Vec::new();
    if env.has(EnvironmentTag::Seaside) {
        notes.push(
            "Provide robust cover blocks (same durability grade) and good curing; \
             consider micro-silica for chloride ingress resistance."
                .to_string(),
        );
    }
    if env.seismic_zone.is_some_and(|zone| zone >= DUCTILE_DETAILING_ZONE) {
        notes.push(
            "Detail per IS 13920 (ductile detailing): confinement, hook anchorage, \
             lap at low strain zones."
                .to_string(),
        );
    }
    if env.wind_speed_or_default() >= WIND_CRITICAL_SPEED {
        notes.push("Wind uplift & serviceability checks per IS 875 Part 3.".to_string());
    }
    notes
}

/// Concrete recommendation for an exposure class and optional environment
pub fn recommend_concrete(
    exposure: ExposureClass,
    env: Option<&EnvironmentDescription>,
) -> ConcreteRecommendation {
    let base = durability_requirement(exposure);
    let default_env = EnvironmentDescription::default();
    let env = env.unwrap_or(&default_env);

    ConcreteRecommendation {
        grade: base.grade,
        cement_type: select_cement_type(env),
        max_wc_ratio: base.max_wc_ratio,
        min_cement_content: base.min_cement_content,
        nominal_cover: base.cover,
        admixtures: admixtures_for(env),
        notes: notes_for(env),
    }
}
