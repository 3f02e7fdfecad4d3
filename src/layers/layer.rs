//! Bore-log layer record

use serde::{Deserialize, Serialize};

use crate::soil::SoilType;

/// One stratum of a bore log, covering depths [from_depth, to_depth) in metres.
///
/// Every numeric property is optional; missing values fall back to the
/// soil-type default table when the layer is normalized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SoilLayer {
    pub from_depth: f64,
    pub to_depth: f64,

    #[serde(alias = "soil")]
    pub soil_type: SoilType,

    /// Bulk unit weight γ (kN/m³)
    #[serde(default, alias = "gamma")]
    pub unit_weight: Option<f64>,

    /// Moisture content (%)
    #[serde(default)]
    pub moisture: Option<f64>,

    /// SPT blow count
    #[serde(default, alias = "SPT_N")]
    pub spt_n: Option<u32>,

    /// Cohesion c (kPa)
    #[serde(default)]
    pub cohesion: Option<f64>,

    /// Friction angle φ (degrees)
    #[serde(default, alias = "phi")]
    pub friction_angle: Option<f64>,

    #[serde(default)]
    pub plasticity_index: Option<f64>,

    #[serde(default, alias = "description")]
    pub remarks: Option<String>,
}

impl SoilLayer {
    /// Layer with only its interval and soil type set
    pub fn new(from_depth: f64, to_depth: f64, soil_type: SoilType) -> Self {
        Self {
            from_depth,
            to_depth,
            soil_type,
            unit_weight: None,
            moisture: None,
            spt_n: None,
            cohesion: None,
            friction_angle: None,
            plasticity_index: None,
            remarks: None,
        }
    }

    pub fn with_unit_weight(mut self, gamma: f64) -> Self {
        self.unit_weight = Some(gamma);
        self
    }

    pub fn with_moisture(mut self, moisture: f64) -> Self {
        self.moisture = Some(moisture);
        self
    }

    pub fn with_spt(mut self, blows: u32) -> Self {
        self.spt_n = Some(blows);
        self
    }

    pub fn with_strength(mut self, cohesion: f64, friction_angle: f64) -> Self {
        self.cohesion = Some(cohesion);
        self.friction_angle = Some(friction_angle);
        self
    }

    pub fn with_plasticity_index(mut self, pi: f64) -> Self {
        self.plasticity_index = Some(pi);
        self
    }

    pub fn with_remarks(mut self, remarks: impl Into<String>) -> Self {
        self.remarks = Some(remarks.into());
        self
    }

    /// Half-open containment: from_depth <= z < to_depth
    pub fn contains_depth(&self, z: f64) -> bool {
        z >= self.from_depth && z < self.to_depth
    }

    /// Layer thickness (m), 0 for inverted intervals
    pub fn thickness(&self) -> f64 {
        (self.to_depth - self.from_depth).max(0.0)
    }

    /// Plasticity index of 20 or more marks potentially expansive clay
    pub fn is_expansive(&self) -> bool {
        self.plasticity_index.unwrap_or(0.0) >= 20.0
    }
}
