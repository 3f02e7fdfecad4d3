//! Slab system suggestion
//!
//! Last-match-wins, checked in this order: large plate (> 12000) goes flat
//! slab, 8+ floors go post-tensioned, very large plate (> 20000) goes
//! waffle, and a small low-rise building (≤ 3 floors, ≤ 6000) goes back to
//! a two-way slab. Every rule that fires adds its remark.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::soil::SoilDescription;
use crate::utils::{fired, Rule};

use super::SiteContext;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SlabSystem {
    #[serde(rename = "Two-way")]
    TwoWay,
    #[serde(rename = "Flat slab")]
    FlatSlab,
    #[serde(rename = "PT slab")]
    PostTensioned,
    #[serde(rename = "Waffle")]
    Waffle,
}

impl SlabSystem {
    pub fn display_text(&self) -> &'static str {
        match self {
            SlabSystem::TwoWay => "Two-way",
            SlabSystem::FlatSlab => "Flat slab",
            SlabSystem::PostTensioned => "PT slab",
            SlabSystem::Waffle => "Waffle",
        }
    }
}

impl fmt::Display for SlabSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_text())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlabSuggestion {
    pub slab_system: SlabSystem,
    pub remarks: Vec<String>,
}

fn slab_rules() -> [Rule<SiteContext, (SlabSystem, &'static str)>; 4] {
    [
        Rule::new(
            "large_plate",
            |site: &SiteContext| site.area > 12_000.0,
            (
                SlabSystem::FlatSlab,
                "Consider drop panels/column heads; check punching shear.",
            ),
        ),
        Rule::new(
            "mid_rise",
            |site: &SiteContext| site.floors >= 8,
            (
                SlabSystem::PostTensioned,
                "PT recommended for longer spans & reduced thickness; coordinate tendon profiles.",
            ),
        ),
        Rule::new(
            "very_large_plate",
            |site: &SiteContext| site.area > 20_000.0,
            (
                SlabSystem::Waffle,
                "Waffle/voided slab for vibration control & serviceability.",
            ),
        ),
        Rule::new(
            "small_low_rise",
            |site: &SiteContext| site.floors <= 3 && site.area <= 6_000.0,
            (
                SlabSystem::TwoWay,
                "Conventional two-way slab economical for small spans.",
            ),
        ),
    ]
}

/// Slab system for the planned building
pub fn suggest_slab_system(description: &SoilDescription) -> SlabSuggestion {
    let site = SiteContext::new(description, None);
    let rules = slab_rules();
    let matched = fired(&rules, &site);

    let slab_system = matched
        .last()
        .map(|rule| rule.outcome.0)
        .unwrap_or(SlabSystem::TwoWay);
    let remarks = matched
        .iter()
        .map(|rule| rule.outcome.1.to_string())
        .collect();

    SlabSuggestion { slab_system, remarks }
}
