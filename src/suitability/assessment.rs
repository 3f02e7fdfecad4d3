//! Suitability Report Types
//!
//! Output structures for the suitability scorer: per-factor sub-scores, the
//! weighted building and agriculture scores, recommendation bands and
//! limiting factors.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::layers::ProfileSource;

/// Sub-scores below this are reported as limiting factors
pub const LIMITING_THRESHOLD: f64 = 60.0;

/// Scored input factor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Factor {
    #[serde(rename = "pH")]
    Ph,
    #[serde(rename = "moisture")]
    Moisture,
    /// CBR-derived subgrade strength proxy
    #[serde(rename = "bearing ratio")]
    BearingRatio,
    #[serde(rename = "void ratio")]
    VoidRatio,
    #[serde(rename = "organic matter")]
    OrganicMatter,
    #[serde(rename = "temperature")]
    Temperature,
}

impl Factor {
    pub fn display_text(&self) -> &'static str {
        match self {
            Factor::Ph => "pH",
            Factor::Moisture => "moisture",
            Factor::BearingRatio => "bearing ratio",
            Factor::VoidRatio => "void ratio",
            Factor::OrganicMatter => "organic matter",
            Factor::Temperature => "temperature",
        }
    }
}

impl fmt::Display for Factor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_text())
    }
}

/// Land use being scored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Track {
    Building,
    Agriculture,
}

/// Score band (≥80, ≥60, ≥40, below)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuitabilityBand {
    Excellent,
    Suitable,
    Marginal,
    Poor,
}

impl SuitabilityBand {
    pub fn from_score(score: f64) -> Self {
        if score >= 80.0 {
            SuitabilityBand::Excellent
        } else if score >= 60.0 {
            SuitabilityBand::Suitable
        } else if score >= 40.0 {
            SuitabilityBand::Marginal
        } else {
            SuitabilityBand::Poor
        }
    }

    /// Recommendation wording; differs between the two tracks
    pub fn display_text(&self, track: Track) -> &'static str {
        match (track, self) {
            (Track::Building, SuitabilityBand::Excellent) => "Excellent for building",
            (Track::Building, SuitabilityBand::Suitable) => "Suitable with checks",
            (Track::Building, SuitabilityBand::Marginal) => "Marginal - soil improvement advised",
            (Track::Building, SuitabilityBand::Poor) => {
                "Not recommended - deep foundation or ground improvement required"
            }
            (Track::Agriculture, SuitabilityBand::Excellent) => "Excellent for agriculture",
            (Track::Agriculture, SuitabilityBand::Suitable) => "Good with amendments",
            (Track::Agriculture, SuitabilityBand::Marginal) => "Moderate - amendments required",
            (Track::Agriculture, SuitabilityBand::Poor) => "Poor for agriculture",
        }
    }
}

/// One weighted factor score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubScore {
    pub factor: Factor,
    /// Raw input value (pH, %, CBR %, e or °C)
    pub value: f64,
    /// 0-100, 1 decimal
    pub score: f64,
    /// Share of the track score (weights of a track sum to 1)
    pub weight: f64,
}

impl SubScore {
    pub fn is_limiting(&self) -> bool {
        self.score < LIMITING_THRESHOLD
    }
}

/// A value per track
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerTrack<T> {
    pub building: T,
    pub agriculture: T,
}

/// Supporting numbers behind the scores
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreDetails {
    pub sub_scores: PerTrack<Vec<SubScore>>,
    pub void_ratio: f64,
    pub cbr: f64,
    /// Safe bearing capacity (kPa) of the governing layer
    pub qsafe: f64,
    /// Where the profile behind the building metrics came from
    pub basis: ProfileSource,
}

/// Complete suitability result for one description
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuitabilityReport {
    /// 0-100, 1 decimal
    pub building_score: f64,
    /// 0-100, 1 decimal
    pub agriculture_score: f64,
    pub recommendations: PerTrack<String>,
    pub limiting_factors: PerTrack<Vec<Factor>>,
    pub details: ScoreDetails,
    /// Track with the higher score; ties go to building
    pub overall_recommendation: Track,
}

impl SuitabilityReport {
    pub fn score(&self, track: Track) -> f64 {
        match track {
            Track::Building => self.building_score,
            Track::Agriculture => self.agriculture_score,
        }
    }

    pub fn band(&self, track: Track) -> SuitabilityBand {
        SuitabilityBand::from_score(self.score(track))
    }

    pub fn is_limited_by(&self, track: Track, factor: Factor) -> bool {
        let factors = match track {
            Track::Building => &self.limiting_factors.building,
            Track::Agriculture => &self.limiting_factors.agriculture,
        };
        factors.contains(&factor)
    }
}
