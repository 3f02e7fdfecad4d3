//! Site environment description
//!
//! Optional input describing how aggressive the surroundings are for
//! concrete and steel: environment tags, seismic zone, wind speed, and
//! sulfate/chloride exposure levels.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Environment tag selected for a site
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnvironmentTag {
    Seaside,
    Hot,
    Cold,
    Tropical,
    Rainforest,
    Arid,
    Industrial,
    Hill,
    Urban,
    Volcanic,
}

/// Sulfate exposure level (ordinal)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SulfateExposure {
    Low,
    Moderate,
    High,
    VeryHigh,
}

/// Chloride risk from marine splash or industrial sources (ordinal)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChlorideRisk {
    Low,
    Moderate,
    High,
}

/// Environmental context of a site
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvironmentDescription {
    #[serde(default)]
    pub tags: SmallVec<[EnvironmentTag; 4]>,

    /// Seismic zone (2-5)
    #[serde(default)]
    pub seismic_zone: Option<u8>,

    /// Basic wind speed (m/s)
    #[serde(default)]
    pub basic_wind_speed: Option<f64>,

    #[serde(default)]
    pub sulfate_exposure: Option<SulfateExposure>,

    #[serde(default)]
    pub chloride_risk: Option<ChlorideRisk>,
}

impl EnvironmentDescription {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tag(mut self, tag: EnvironmentTag) -> Self {
        if !self.tags.contains(&tag) {
            self.tags.push(tag);
        }
        self
    }

    pub fn with_seismic_zone(mut self, zone: u8) -> Self {
        self.seismic_zone = Some(zone);
        self
    }

    pub fn with_wind_speed(mut self, speed: f64) -> Self {
        self.basic_wind_speed = Some(speed);
        self
    }

    pub fn with_sulfate(mut self, level: SulfateExposure) -> Self {
        self.sulfate_exposure = Some(level);
        self
    }

    pub fn with_chloride(mut self, risk: ChlorideRisk) -> Self {
        self.chloride_risk = Some(risk);
        self
    }

    pub fn has(&self, tag: EnvironmentTag) -> bool {
        self.tags.contains(&tag)
    }

    pub fn has_any(&self, tags: &[EnvironmentTag]) -> bool {
        tags.iter().any(|tag| self.has(*tag))
    }

    /// Seaside tag or high chloride risk
    pub fn is_chloride_exposed(&self) -> bool {
        self.has(EnvironmentTag::Seaside) || self.chloride_risk == Some(ChlorideRisk::High)
    }

    /// High or very high sulfate exposure
    pub fn is_sulfate_aggressive(&self) -> bool {
        matches!(
            self.sulfate_exposure,
            Some(SulfateExposure::High) | Some(SulfateExposure::VeryHigh)
        )
    }

    /// Seismic zone, zone 2 when unspecified
    pub fn seismic_zone_or_default(&self) -> u8 {
        self.seismic_zone.unwrap_or(2)
    }

    /// Basic wind speed, 0 when unspecified
    pub fn wind_speed_or_default(&self) -> f64 {
        self.basic_wind_speed.unwrap_or(0.0)
    }
}
