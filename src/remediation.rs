//! Ground-improvement advisor
//!
//! When the soil cannot carry the planned floors, propose improvement
//! methods keyed by the governing soil type. Effectiveness bands in the
//! method texts are rough indications only.

use serde::{Deserialize, Serialize};

use crate::soil::SoilType;
use crate::utils::round_to;

/// Ground-improvement proposal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemediationPlan {
    /// Desired safe bearing capacity (kPa)
    pub target_qsafe: f64,
    /// Shortfall to make up (kPa), 1 decimal
    pub estimated_gain: f64,
    pub methods: Vec<String>,
    pub notes: Vec<String>,
}

fn methods_for(soil: &SoilType) -> &'static [&'static str] {
    if soil.is_clayey() {
        &[
            "Lime stabilization (+20–40%)",
            "Under-reamed piles (IS 2911)",
            "Preloading with vertical drains",
        ]
    } else if soil.is_sandy() || *soil == SoilType::Gravel {
        &[
            "Dynamic compaction / vibroflotation (+15–30%)",
            "Stone columns (+20–35%)",
        ]
    } else if soil.is_silty() {
        &[
            "Cement stabilization (+15–30%)",
            "Geogrid-reinforced mattress with granular blanket",
        ]
    } else if *soil == SoilType::Peat {
        &["Full replacement / floating raft", "Piles to firm stratum"]
    } else {
        &["Engineer review and site-specific ground improvement"]
    }
}

const VERIFICATION_NOTES: [&str; 2] = [
    "Post-treatment plate load test / CPT to verify achieved SBC.",
    "Adjust foundation option once verified (raft → isolated/piles).",
];

/// Improvement plan if `current_qsafe` falls short of `target_qsafe`, else `None`
pub fn propose_remediation(
    soil_type: &SoilType,
    current_qsafe: f64,
    target_qsafe: f64,
) -> Option<RemediationPlan> {
    if current_qsafe >= target_qsafe {
        return None;
    }

    Some(RemediationPlan {
        target_qsafe,
        estimated_gain: round_to(target_qsafe - current_qsafe, 1),
        methods: methods_for(soil_type).iter().map(|m| m.to_string()).collect(),
        notes: VERIFICATION_NOTES.iter().map(|n| n.to_string()).collect(),
    })
}
