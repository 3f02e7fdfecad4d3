//! Weighted suitability scorer
//!
//! Building: pH 15 %, moisture 25 %, bearing ratio 35 %, void ratio 25 %.
//! Agriculture: pH 30 %, moisture 30 %, organic matter 25 %, temperature 15 %.

use crate::layers::ProfileSource;
use crate::soil::SoilDescription;
use crate::utils::round_to;

use super::assessment::{
    Factor, PerTrack, ScoreDetails, SubScore, SuitabilityBand, SuitabilityReport, Track,
};
use super::subscores::{
    agriculture_moisture_score, agriculture_ph_score, bearing_ratio_score, building_moisture_score,
    building_ph_score, organic_matter_score, temperature_score, void_ratio_score,
};

pub const BUILDING_WEIGHTS: [(Factor, f64); 4] = [
    (Factor::Ph, 0.15),
    (Factor::Moisture, 0.25),
    (Factor::BearingRatio, 0.35),
    (Factor::VoidRatio, 0.25),
];

pub const AGRICULTURE_WEIGHTS: [(Factor, f64); 4] = [
    (Factor::Ph, 0.30),
    (Factor::Moisture, 0.30),
    (Factor::OrganicMatter, 0.25),
    (Factor::Temperature, 0.15),
];

/// Derived metrics the building track needs, taken from the design evaluation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringInputs {
    pub void_ratio: f64,
    pub cbr: f64,
    pub qsafe: f64,
    pub basis: ProfileSource,
}

fn sub_score(factor: Factor, weight: f64, value: f64, score: f64) -> SubScore {
    SubScore {
        factor,
        value,
        score: round_to(score, 1),
        weight,
    }
}

fn with_weights(weights: &[(Factor, f64)], scored: [(f64, f64); 4]) -> Vec<SubScore> {
    weights
        .iter()
        .zip(scored)
        .map(|(&(factor, weight), (value, score))| sub_score(factor, weight, value, score))
        .collect()
}

pub fn building_sub_scores(description: &SoilDescription, cbr: f64, void_ratio: f64) -> Vec<SubScore> {
    with_weights(
        &BUILDING_WEIGHTS,
        [
            (description.ph, building_ph_score(description.ph)),
            (description.moisture, building_moisture_score(description.moisture)),
            (cbr, bearing_ratio_score(cbr)),
            (void_ratio, void_ratio_score(void_ratio)),
        ],
    )
}

pub fn agriculture_sub_scores(description: &SoilDescription) -> Vec<SubScore> {
    with_weights(
        &AGRICULTURE_WEIGHTS,
        [
            (description.ph, agriculture_ph_score(description.ph)),
            (description.moisture, agriculture_moisture_score(description.moisture)),
            (description.organic_matter, organic_matter_score(description.organic_matter)),
            (description.temperature, temperature_score(description.temperature)),
        ],
    )
}

/// Weighted sum of sub-scores, 1 decimal
pub fn weighted_score(sub_scores: &[SubScore]) -> f64 {
    round_to(sub_scores.iter().map(|s| s.score * s.weight).sum(), 1)
}

/// Factors scoring below the limiting threshold, in weight-table order
pub fn limiting_factors(sub_scores: &[SubScore]) -> Vec<Factor> {
    sub_scores
        .iter()
        .filter(|s| s.is_limiting())
        .map(|s| s.factor)
        .collect()
}

/// Assemble the full report from the description and its derived metrics
pub fn build_report(description: &SoilDescription, inputs: ScoringInputs) -> SuitabilityReport {
    let building = building_sub_scores(description, inputs.cbr, inputs.void_ratio);
    let agriculture = agriculture_sub_scores(description);

    let building_score = weighted_score(&building);
    let agriculture_score = weighted_score(&agriculture);

    let overall_recommendation = if agriculture_score > building_score {
        Track::Agriculture
    } else {
        Track::Building
    };

    SuitabilityReport {
        building_score,
        agriculture_score,
        recommendations: PerTrack {
            building: SuitabilityBand::from_score(building_score)
                .display_text(Track::Building)
                .to_string(),
            agriculture: SuitabilityBand::from_score(agriculture_score)
                .display_text(Track::Agriculture)
                .to_string(),
        },
        limiting_factors: PerTrack {
            building: limiting_factors(&building),
            agriculture: limiting_factors(&agriculture),
        },
        details: ScoreDetails {
            sub_scores: PerTrack { building, agriculture },
            void_ratio: inputs.void_ratio,
            cbr: inputs.cbr,
            qsafe: inputs.qsafe,
            basis: inputs.basis,
        },
        overall_recommendation,
    }
}
