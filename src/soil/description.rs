//! Soil/site description (engine input)
//!
//! A snapshot of what the user entered: soil chemistry and composition,
//! bulk density, optional strength parameters, the planned building, and
//! an optional bore log. The engine never mutates it.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::soil_type::{infer_soil_type, SoilType};
use crate::layers::SoilLayer;

/// Site area assumed when none is given (same units as the caller's area)
pub const DEFAULT_SITE_AREA: f64 = 1000.0;

/// Building classification
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum BuildingType {
    #[default]
    Residential,
    Commercial,
    Industrial,
    Skyscraper,
    /// Free-text classification; designed with residential loads
    Other(String),
}

impl BuildingType {
    pub fn label(&self) -> &str {
        match self {
            BuildingType::Residential => "residential",
            BuildingType::Commercial => "commercial",
            BuildingType::Industrial => "industrial",
            BuildingType::Skyscraper => "skyscraper",
            BuildingType::Other(text) => text,
        }
    }

    pub fn from_label(label: &str) -> Self {
        let trimmed = label.trim();
        match trimmed.to_lowercase().as_str() {
            "residential" => BuildingType::Residential,
            "commercial" => BuildingType::Commercial,
            "industrial" => BuildingType::Industrial,
            "skyscraper" => BuildingType::Skyscraper,
            _ => BuildingType::Other(trimmed.to_string()),
        }
    }
}

impl fmt::Display for BuildingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl From<String> for BuildingType {
    fn from(label: String) -> Self {
        BuildingType::from_label(&label)
    }
}

impl From<BuildingType> for String {
    fn from(building: BuildingType) -> Self {
        building.label().to_string()
    }
}

/// Soil and project description entered for one analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SoilDescription {
    /// Analysis name for display
    #[serde(default)]
    pub name: String,

    // ========================================================================
    // Soil chemistry and composition
    // ========================================================================

    #[serde(rename = "pH")]
    pub ph: f64,

    /// Moisture content (% by mass)
    pub moisture: f64,

    /// Soil temperature (°C)
    pub temperature: f64,

    /// Clay fraction (%)
    pub clay_content: f64,

    /// Sand fraction (%)
    pub sand_content: f64,

    /// Silt fraction (%)
    pub silt_content: f64,

    /// Organic matter (%)
    pub organic_matter: f64,

    /// Bulk density (g/cm³)
    pub density: f64,

    // ========================================================================
    // Strength defaults (used when a layer leaves them out)
    // ========================================================================

    /// Cohesion c (kPa)
    #[serde(default)]
    pub cohesion: Option<f64>,

    /// Friction angle φ (degrees)
    #[serde(default, alias = "phi")]
    pub friction_angle: Option<f64>,

    /// Footing embedment depth (m)
    #[serde(default)]
    pub foundation_depth: Option<f64>,

    /// Footing width (m)
    #[serde(default)]
    pub foundation_width: Option<f64>,

    // ========================================================================
    // Project
    // ========================================================================

    #[serde(default)]
    pub building_type: BuildingType,

    #[serde(default)]
    pub planned_floors: u32,

    /// Site area, in whatever unit the caller uses (usually ft²)
    #[serde(default, alias = "squareFeet")]
    pub site_area: f64,

    /// Bore log, shallow to deep
    #[serde(default, alias = "boreLayers")]
    pub layers: Option<Vec<SoilLayer>>,
}

impl SoilDescription {
    /// Soil type inferred from the sand/silt/clay split, if the split is usable
    pub fn inferred_soil_type(&self) -> Option<SoilType> {
        infer_soil_type(self.sand_content, self.silt_content, self.clay_content)
    }

    /// Explicit bore log, if one with at least one layer was supplied
    pub fn bore_log(&self) -> Option<&[SoilLayer]> {
        match &self.layers {
            Some(layers) if !layers.is_empty() => Some(layers.as_slice()),
            _ => None,
        }
    }

    /// Planned floors with 0 read as a single storey
    pub fn floors(&self) -> u32 {
        self.planned_floors.max(1)
    }

    /// Site area with 0 (or garbage) read as the default area
    pub fn area(&self) -> f64 {
        if self.site_area > 0.0 {
            self.site_area
        } else {
            DEFAULT_SITE_AREA
        }
    }
}
