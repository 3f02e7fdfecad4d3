//! Soil Type Tags and Composition Inference
//!
//! Bore-log layers carry a soil-type tag from a closed list (clay, silty clay,
//! silt, ...). Anything outside the list is kept verbatim as free text so a
//! hand-written log ("Loam", "Laterite") still flows through the pipeline.
//!
//! Several rules in the engine key off what a tag *mentions* rather than the
//! exact variant: "sandy silt" counts as both sandy and silty, "silty clay"
//! as clayey. `mentions` reproduces that substring behaviour.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Soil-type tag of a layer
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SoilType {
    Clay,
    SiltyClay,
    Silt,
    SandySilt,
    Sand,
    SiltySand,
    Gravel,
    Peat,
    Fill,
    WeatheredRock,
    Rock,
    /// Free-text description with no match in the closed list
    Other(String),
}

/// Fallback strength/weight properties for a soil type
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SoilDefaults {
    /// Bulk unit weight γ (kN/m³)
    pub unit_weight: f64,
    /// Friction angle φ (degrees)
    pub friction_angle: f64,
    /// Cohesion c (kPa)
    pub cohesion: f64,
}

/// Defaults for free-text soil types
pub const GENERIC_DEFAULTS: SoilDefaults = SoilDefaults {
    unit_weight: 18.0,
    friction_angle: 28.0,
    cohesion: 0.0,
};

impl SoilType {
    /// All tags of the closed list, shallow-to-strong order
    pub const KNOWN: [SoilType; 11] = [
        SoilType::Clay,
        SoilType::SiltyClay,
        SoilType::Silt,
        SoilType::SandySilt,
        SoilType::Sand,
        SoilType::SiltySand,
        SoilType::Gravel,
        SoilType::Peat,
        SoilType::Fill,
        SoilType::WeatheredRock,
        SoilType::Rock,
    ];

    /// Canonical lowercase label ("silty clay", "weathered rock", ...)
    pub fn label(&self) -> &str {
        match self {
            SoilType::Clay => "clay",
            SoilType::SiltyClay => "silty clay",
            SoilType::Silt => "silt",
            SoilType::SandySilt => "sandy silt",
            SoilType::Sand => "sand",
            SoilType::SiltySand => "silty sand",
            SoilType::Gravel => "gravel",
            SoilType::Peat => "peat",
            SoilType::Fill => "fill",
            SoilType::WeatheredRock => "weathered rock",
            SoilType::Rock => "rock",
            SoilType::Other(text) => text,
        }
    }

    /// Parse a label case-insensitively; unknown text becomes `Other`
    pub fn from_label(label: &str) -> Self {
        let trimmed = label.trim();
        let normalized = trimmed.to_lowercase().replace('_', " ");
        Self::KNOWN
            .iter()
            .find(|known| known.label() == normalized)
            .cloned()
            .unwrap_or_else(|| SoilType::Other(trimmed.to_string()))
    }

    /// Whether the label contains `word` (case-insensitive)
    pub fn mentions(&self, word: &str) -> bool {
        self.label().to_lowercase().contains(&word.to_lowercase())
    }

    pub fn is_clayey(&self) -> bool {
        self.mentions("clay")
    }

    pub fn is_sandy(&self) -> bool {
        self.mentions("sand")
    }

    pub fn is_silty(&self) -> bool {
        self.mentions("silt")
    }

    /// Fallback γ/φ/c used when a bore-log layer omits them
    pub fn defaults(&self) -> SoilDefaults {
        let (unit_weight, friction_angle, cohesion) = match self {
            SoilType::Clay => (18.0, 18.0, 25.0),
            SoilType::SiltyClay => (18.0, 20.0, 15.0),
            SoilType::Silt => (18.5, 28.0, 5.0),
            SoilType::SandySilt => (19.0, 30.0, 3.0),
            SoilType::Sand => (19.5, 33.0, 0.0),
            SoilType::SiltySand => (19.2, 31.0, 0.0),
            SoilType::Gravel => (20.0, 38.0, 0.0),
            SoilType::Peat => (12.0, 10.0, 0.0),
            SoilType::Fill => (17.0, 25.0, 5.0),
            SoilType::WeatheredRock => (21.0, 35.0, 0.0),
            SoilType::Rock => (23.0, 40.0, 0.0),
            SoilType::Other(_) => return GENERIC_DEFAULTS,
        };
        SoilDefaults {
            unit_weight,
            friction_angle,
            cohesion,
        }
    }
}

impl fmt::Display for SoilType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl From<String> for SoilType {
    fn from(label: String) -> Self {
        SoilType::from_label(&label)
    }
}

impl From<&str> for SoilType {
    fn from(label: &str) -> Self {
        SoilType::from_label(label)
    }
}

impl From<SoilType> for String {
    fn from(soil: SoilType) -> Self {
        soil.label().to_string()
    }
}

// ============================================================================
// Composition Inference
// ============================================================================

/// Accepted band for sand + silt + clay (rounding tolerance around 100%)
pub const COMPOSITION_SUM_MIN: f64 = 95.0;
pub const COMPOSITION_SUM_MAX: f64 = 105.0;

/// Infer a soil type from sand/silt/clay percentages.
///
/// Returns `None` unless the three percentages sum to within [95, 105].
/// Rules are checked in order and the first match wins; anything that
/// matches no rule lands in the "silt" bucket.
///
/// # Examples
/// ```
/// use soil_engine::soil::{infer_soil_type, SoilType};
///
/// assert_eq!(infer_soil_type(60.0, 20.0, 20.0), Some(SoilType::Sand));
/// assert_eq!(infer_soil_type(50.0, 20.0, 20.0), None); // sums to 90
/// ```
pub fn infer_soil_type(sand: f64, silt: f64, clay: f64) -> Option<SoilType> {
    let total = sand + silt + clay;
    if !(COMPOSITION_SUM_MIN..=COMPOSITION_SUM_MAX).contains(&total) {
        return None;
    }

    let soil = if clay >= 40.0 {
        SoilType::Clay
    } else if clay >= 25.0 && silt >= 25.0 {
        SoilType::SiltyClay
    } else if sand >= 60.0 && silt <= 20.0 && clay <= 20.0 {
        SoilType::Sand
    } else if sand >= 40.0 && silt >= 20.0 && clay <= 20.0 {
        SoilType::SiltySand
    } else if silt >= 60.0 && clay <= 20.0 && sand <= 20.0 {
        SoilType::Silt
    } else if silt >= 40.0 && sand >= 20.0 && clay <= 20.0 {
        SoilType::SandySilt
    } else if sand >= 30.0 && silt >= 30.0 && clay >= 20.0 {
        SoilType::SiltyClay
    } else {
        SoilType::Silt
    };

    Some(soil)
}
