//! Durability exposure class (IS 456 style)
//!
//! First-match-wins over an ordered table. The order is part of the
//! behaviour: a seaside site with very high sulfate is `VerySevere`, not
//! `Extreme`, because the chloride rule is checked first.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::soil::{EnvironmentDescription, EnvironmentTag, SulfateExposure};
use crate::utils::{first_match, Rule};

/// Durability category, ordered from least to most aggressive
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExposureClass {
    Mild,
    Moderate,
    Severe,
    VerySevere,
    Extreme,
}

impl ExposureClass {
    pub const ALL: [ExposureClass; 5] = [
        ExposureClass::Mild,
        ExposureClass::Moderate,
        ExposureClass::Severe,
        ExposureClass::VerySevere,
        ExposureClass::Extreme,
    ];

    /// snake_case key, as serialized
    pub fn key(&self) -> &'static str {
        match self {
            ExposureClass::Mild => "mild",
            ExposureClass::Moderate => "moderate",
            ExposureClass::Severe => "severe",
            ExposureClass::VerySevere => "very_severe",
            ExposureClass::Extreme => "extreme",
        }
    }
}

impl fmt::Display for ExposureClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

fn exposure_rules() -> [Rule<EnvironmentDescription, ExposureClass>; 5] {
    [
        Rule::new(
            "chloride",
            |env: &EnvironmentDescription| env.is_chloride_exposed(),
            ExposureClass::VerySevere,
        ),
        Rule::new(
            "humid_tropics",
            |env: &EnvironmentDescription| {
                env.has_any(&[EnvironmentTag::Rainforest, EnvironmentTag::Tropical])
            },
            ExposureClass::Severe,
        ),
        Rule::new(
            "very_high_sulfate",
            |env: &EnvironmentDescription| env.sulfate_exposure == Some(SulfateExposure::VeryHigh),
            ExposureClass::Extreme,
        ),
        Rule::new(
            "high_sulfate_or_industrial",
            |env: &EnvironmentDescription| {
                env.sulfate_exposure == Some(SulfateExposure::High)
                    || env.has(EnvironmentTag::Industrial)
            },
            ExposureClass::VerySevere,
        ),
        Rule::new(
            "hot_urban_or_moderate_sulfate",
            |env: &EnvironmentDescription| {
                env.has_any(&[EnvironmentTag::Hot, EnvironmentTag::Urban])
                    || env.sulfate_exposure == Some(SulfateExposure::Moderate)
            },
            ExposureClass::Moderate,
        ),
    ]
}

/// Exposure class for a site; no environment means `Mild`
pub fn compute_exposure(env: Option<&EnvironmentDescription>) -> ExposureClass {
    let Some(env) = env else {
        return ExposureClass::Mild;
    };
    let rules = exposure_rules();
    first_match(&rules, env)
        .map(|rule| {
            tracing::debug!(rule = rule.name, "exposure rule");
            rule.outcome
        })
        .unwrap_or(ExposureClass::Mild)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::soil::ChlorideRisk;

    #[test]
    fn test_no_environment_is_mild() {
        assert_eq!(compute_exposure(None), ExposureClass::Mild);
        assert_eq!(compute_exposure(Some(&EnvironmentDescription::new())), ExposureClass::Mild);
    }

    #[test]
    fn test_each_rule() {
        let cases = [
            (EnvironmentDescription::new().with_tag(EnvironmentTag::Seaside), ExposureClass::VerySevere),
            (EnvironmentDescription::new().with_chloride(ChlorideRisk::High), ExposureClass::VerySevere),
            (EnvironmentDescription::new().with_tag(EnvironmentTag::Tropical), ExposureClass::Severe),
            (EnvironmentDescription::new().with_tag(EnvironmentTag::Rainforest), ExposureClass::Severe),
            (EnvironmentDescription::new().with_sulfate(SulfateExposure::VeryHigh), ExposureClass::Extreme),
            (EnvironmentDescription::new().with_sulfate(SulfateExposure::High), ExposureClass::VerySevere),
            (EnvironmentDescription::new().with_tag(EnvironmentTag::Industrial), ExposureClass::VerySevere),
            (EnvironmentDescription::new().with_tag(EnvironmentTag::Hot), ExposureClass::Moderate),
            (EnvironmentDescription::new().with_tag(EnvironmentTag::Urban), ExposureClass::Moderate),
            (EnvironmentDescription::new().with_sulfate(SulfateExposure::Moderate), ExposureClass::Moderate),
            (EnvironmentDescription::new().with_tag(EnvironmentTag::Cold), ExposureClass::Mild),
            (EnvironmentDescription::new().with_chloride(ChlorideRisk::Moderate), ExposureClass::Mild),
        ];
        for (env, expected) in cases {
            assert_eq!(compute_exposure(Some(&env)), expected, "{:?}", env);
        }
    }

    #[test]
    fn test_rule_order_wins_over_severity() {
        // Chloride is checked before very high sulfate
        let env = EnvironmentDescription::new()
            .with_tag(EnvironmentTag::Seaside)
            .with_sulfate(SulfateExposure::VeryHigh);
        assert_eq!(compute_exposure(Some(&env)), ExposureClass::VerySevere);
        let rules = exposure_rules();
        assert_eq!(first_match(&rules, &env).map(|rule| rule.name), Some("chloride"));

        // Tropical is checked before very high sulfate
        let env = EnvironmentDescription::new()
            .with_tag(EnvironmentTag::Tropical)
            .with_sulfate(SulfateExposure::VeryHigh);
        assert_eq!(compute_exposure(Some(&env)), ExposureClass::Severe);
    }

    #[test]
    fn test_ordering_and_keys() {
        assert!(ExposureClass::Mild < ExposureClass::Moderate);
        assert!(ExposureClass::VerySevere < ExposureClass::Extreme);
        assert_eq!(ExposureClass::VerySevere.to_string(), "very_severe");
        assert_eq!(
            serde_json::to_string(&ExposureClass::VerySevere).unwrap(),
            "\"very_severe\""
        );
    }
}
