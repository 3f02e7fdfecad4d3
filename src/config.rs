//! Engine Configuration
//!
//! Design constants for one evaluation: trial footing, factor of safety and
//! indicative load per floor. Defaults reproduce the standard calibration;
//! an alternative can be loaded from JSON.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::metrics::FACTOR_OF_SAFETY;
use crate::soil::{BuildingType, SoilDescription};

/// Indicative design pressure per floor (kPa) by building type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoadPerFloor {
    pub residential: f64,
    pub commercial: f64,
    pub industrial: f64,
    pub skyscraper: f64,
}

impl Default for LoadPerFloor {
    fn default() -> Self {
        Self {
            residential: 10.0,
            commercial: 12.0,
            industrial: 15.0,
            skyscraper: 18.0,
        }
    }
}

impl LoadPerFloor {
    /// Load for a building type; free-text types use the residential value
    pub fn for_building(&self, building: &BuildingType) -> f64 {
        match building {
            BuildingType::Commercial => self.commercial,
            BuildingType::Industrial => self.industrial,
            BuildingType::Skyscraper => self.skyscraper,
            BuildingType::Residential | BuildingType::Other(_) => self.residential,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Trial embedment depth Df (m)
    pub trial_footing_depth: f64,
    /// Trial footing width B (m)
    pub trial_footing_width: f64,
    /// Use the description's footing size when it gives one
    pub use_site_footing: bool,
    pub factor_of_safety: f64,
    pub load_per_floor: LoadPerFloor,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            trial_footing_depth: 1.5,
            trial_footing_width: 1.0,
            use_site_footing: false,
            factor_of_safety: FACTOR_OF_SAFETY,
            load_per_floor: LoadPerFloor::default(),
        }
    }
}

impl EngineConfig {
    /// Load configuration from a JSON file. Missing keys keep their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read engine config: {:?}", path))?;

        let config: EngineConfig = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse engine config JSON: {:?}", path))?;

        config.validate()?;
        Ok(config)
    }

    /// Reject values that would make the calculators meaningless
    pub fn validate(&self) -> Result<()> {
        let positive = [
            ("trial_footing_depth", self.trial_footing_depth),
            ("trial_footing_width", self.trial_footing_width),
            ("factor_of_safety", self.factor_of_safety),
            ("load_per_floor.residential", self.load_per_floor.residential),
            ("load_per_floor.commercial", self.load_per_floor.commercial),
            ("load_per_floor.industrial", self.load_per_floor.industrial),
            ("load_per_floor.skyscraper", self.load_per_floor.skyscraper),
        ];
        for (name, value) in positive {
            if value.is_nan() || value <= 0.0 {
                anyhow::bail!("{} must be positive, got {}", name, value);
            }
        }
        Ok(())
    }

    /// Footing depth and width (m) to design with
    pub fn footing_for(&self, description: &SoilDescription) -> (f64, f64) {
        let pick = |site: Option<f64>, trial: f64| match site {
            Some(value) if self.use_site_footing && value > 0.0 => value,
            _ => trial,
        };
        (
            pick(description.foundation_depth, self.trial_footing_depth),
            pick(description.foundation_width, self.trial_footing_width),
        )
    }

    pub fn load_per_floor(&self, building: &BuildingType) -> f64 {
        self.load_per_floor.for_building(building)
    }

    /// Capacity (kPa) needed to carry the planned floors
    pub fn target_capacity(&self, description: &SoilDescription) -> f64 {
        f64::from(description.floors()) * self.load_per_floor(&description.building_type)
    }
}
