//! Structural system and lateral-system recommendation
//!
//! Both choices are last-match-wins tables: a later rule that fires
//! replaces whatever an earlier one chose. Volcanic/hill terrain therefore
//! reinstates RCC even on an industrial or large site, and a high seismic
//! zone takes precedence over wind.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::soil::{EnvironmentDescription, EnvironmentTag, SoilDescription};
use crate::utils::{last_match, Rule};

use super::concrete::{DUCTILE_DETAILING_ZONE, WIND_CRITICAL_SPEED};
use super::SiteContext;

/// Floors at or above which a composite frame is preferred
pub const COMPOSITE_MIN_FLOORS: u32 = 10;
/// Site area above which a composite frame is preferred
pub const COMPOSITE_MIN_AREA: f64 = 15_000.0;
/// Seaside buildings up to this height go composite to save weight
pub const LIGHT_SEASIDE_MAX_FLOORS: u32 = 4;

pub const STEEL_GRADE: &str = "Rolled steel: E250/E350; Rebar: Fe500D/Fe550D";

/// Primary structural system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StructuralSystem {
    /// Reinforced cement concrete frame
    #[serde(rename = "RCC")]
    Rcc,
    Composite,
    /// Pre-engineered steel building
    #[serde(rename = "PEB")]
    Peb,
}

impl StructuralSystem {
    pub fn display_text(&self) -> &'static str {
        match self {
            StructuralSystem::Rcc => "RCC",
            StructuralSystem::Composite => "Composite",
            StructuralSystem::Peb => "PEB",
        }
    }
}

impl fmt::Display for StructuralSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_text())
    }
}

/// Structural and steel recommendation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StructuralRecommendation {
    pub system: StructuralSystem,
    pub corrosion_protection: Vec<String>,
    pub steel_grade: String,
    pub lateral_system: String,
    pub notes: Vec<String>,
}

const DEFAULT_LATERAL: &str = "RC shear walls (IS 13920) + MRF";

fn system_rules() -> [Rule<SiteContext, StructuralSystem>; 4] {
    [
        Rule::new(
            "scale",
            |site: &SiteContext| site.floors >= COMPOSITE_MIN_FLOORS || site.area > COMPOSITE_MIN_AREA,
            StructuralSystem::Composite,
        ),
        Rule::new(
            "industrial",
            |site: &SiteContext| site.env.has(EnvironmentTag::Industrial),
            StructuralSystem::Peb,
        ),
        Rule::new(
            "light_seaside",
            |site: &SiteContext| {
                site.env.has(EnvironmentTag::Seaside) && site.floors <= LIGHT_SEASIDE_MAX_FLOORS
            },
            StructuralSystem::Composite,
        ),
        Rule::new(
            "robust_terrain",
            |site: &SiteContext| site.env.has_any(&[EnvironmentTag::Volcanic, EnvironmentTag::Hill]),
            StructuralSystem::Rcc,
        ),
    ]
}

fn lateral_rules() -> [Rule<SiteContext, &'static str>; 2] {
    [
        Rule::new(
            "wind_critical",
            |site: &SiteContext| site.env.wind_speed_or_default() >= WIND_CRITICAL_SPEED,
            "Braced steel frames / RC shear walls (wind critical)",
        ),
        Rule::new(
            "high_seismic",
            |site: &SiteContext| site.env.seismic_zone_or_default() >= DUCTILE_DETAILING_ZONE,
            "Dual system: RC shear walls + SMRF (ductile)",
        ),
    ]
}

fn corrosion_protection(env: &EnvironmentDescription) -> Vec<String> {
    if env.is_chloride_exposed() {
        vec![
            "Hot-dip galvanizing (≥85 µm) or duplex coating".to_string(),
            "Epoxy-coated rebars / CRR (corrosion-resistant) in splash zones".to_string(),
        ]
    } else {
        vec!["High-build epoxy system (DFT ≥ 240 µm) / regular maintenance".to_string()]
    }
}

/// Structural system for the planned building and site environment
pub fn recommend_structural_system(
    description: &SoilDescription,
    env: Option<&EnvironmentDescription>,
) -> StructuralRecommendation {
    let site = SiteContext::new(description, env);

    let system_rules = system_rules();
    let system = last_match(&system_rules, &site)
        .map(|rule| {
            tracing::debug!(rule = rule.name, "structural system rule");
            rule.outcome
        })
        .unwrap_or(StructuralSystem::Rcc);

    let lateral_rules = lateral_rules();
    let lateral = last_match(&lateral_rules, &site)
        .map(|rule| rule.outcome)
        .unwrap_or(DEFAULT_LATERAL);

    let mut notes = Vec::new();
    match system {
        StructuralSystem::Peb => notes.push(
            "Check IS 800 limit states design; use Z-purlins, tapered rafters; fast-track erection."
                .to_string(),
        ),
        StructuralSystem::Composite => notes.push(
            "Composite decks + shear studs for rapid floors; coordinate fire protection.".to_string(),
        ),
        StructuralSystem::Rcc => {}
    }
    if site.env.seismic_zone_or_default() >= DUCTILE_DETAILING_ZONE {
        notes.push("Ductile detailing per IS 13920 & IS 800 (for steel/CFST).".to_string());
    }

    StructuralRecommendation {
        system,
        corrosion_protection: corrosion_protection(&site.env),
        steel_grade: STEEL_GRADE.to_string(),
        lateral_system: lateral.to_string(),
        notes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::samples;

    fn building(floors: u32, area: f64) -> SoilDescription {
        let mut desc = samples::default_site().description;
        desc.planned_floors = floors;
        desc.site_area = area;
        desc
    }

    #[test]
    fn test_default_is_rcc() {
        let rec = recommend_structural_system(&building(2, 2000.0), None);
        assert_eq!(rec.system, StructuralSystem::Rcc);
        assert_eq!(rec.lateral_system, DEFAULT_LATERAL);
        assert_eq!(rec.steel_grade, STEEL_GRADE);
        assert!(rec.notes.is_empty());
        assert_eq!(rec.corrosion_protection.len(), 1);
    }

    #[test]
    fn test_scale_goes_composite() {
        assert_eq!(
            recommend_structural_system(&building(10, 2000.0), None).system,
            StructuralSystem::Composite
        );
        assert_eq!(
            recommend_structural_system(&building(2, 15_001.0), None).system,
            StructuralSystem::Composite
        );
        assert_eq!(
            recommend_structural_system(&building(9, 15_000.0), None).system,
            StructuralSystem::Rcc
        );
    }

    #[test]
    fn test_later_rules_override() {
        let industrial = EnvironmentDescription::new().with_tag(EnvironmentTag::Industrial);
        let rec = recommend_structural_system(&building(12, 2000.0), Some(&industrial));
        assert_eq!(rec.system, StructuralSystem::Peb);
        assert!(rec.notes[0].contains("IS 800"));

        // Low-rise seaside overrides PEB
        let coastal_plant = industrial.clone().with_tag(EnvironmentTag::Seaside);
        assert_eq!(
            recommend_structural_system(&building(3, 2000.0), Some(&coastal_plant)).system,
            StructuralSystem::Composite
        );
        // Taller seaside building keeps PEB
        assert_eq!(
            recommend_structural_system(&building(5, 2000.0), Some(&coastal_plant)).system,
            StructuralSystem::Peb
        );

        // Hill terrain reinstates RCC over everything
        let hill = coastal_plant.with_tag(EnvironmentTag::Hill);
        let rec = recommend_structural_system(&building(3, 20_000.0), Some(&hill));
        assert_eq!(rec.system, StructuralSystem::Rcc);
    }

    #[test]
    fn test_lateral_system() {
        let windy = EnvironmentDescription::new().with_wind_speed(44.0);
        assert_eq!(
            recommend_structural_system(&building(2, 2000.0), Some(&windy)).lateral_system,
            "Braced steel frames / RC shear walls (wind critical)"
        );

        // Seismic zone 4+ overrides the wind choice
        let both = windy.with_seismic_zone(5);
        let rec = recommend_structural_system(&building(2, 2000.0), Some(&both));
        assert_eq!(rec.lateral_system, "Dual system: RC shear walls + SMRF (ductile)");
        assert!(rec.notes.iter().any(|note| note.contains("IS 13920")));
    }

    #[test]
    fn test_marine_corrosion_protection() {
        let env = EnvironmentDescription::new().with_tag(EnvironmentTag::Seaside);
        let rec = recommend_structural_system(&building(6, 2000.0), Some(&env));
        assert_eq!(rec.corrosion_protection.len(), 2);
        assert!(rec.corrosion_protection[0].starts_with("Hot-dip galvanizing"));
    }

    #[test]
    fn test_zero_floors_and_area_use_defaults() {
        // 0 floors reads as 1 and 0 area as 1000, so nothing fires
        let rec = recommend_structural_system(&building(0, 0.0), None);
        assert_eq!(rec.system, StructuralSystem::Rcc);
    }
}
