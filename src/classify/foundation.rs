//! Foundation type and floor-capacity bands

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::layers::SoilLayer;
use crate::soil::{SoilDescription, SoilType};

/// qsafe (kPa) at or above which isolated/strip footings suffice
pub const ISOLATED_FOOTING_MIN: f64 = 250.0;
pub const RAFT_MIN: f64 = 150.0;
pub const PILE_MIN: f64 = 80.0;

/// Expansive clay is only redirected to under-reamed piles below this qsafe
pub const UNDER_REAMED_MAX: f64 = 200.0;

/// Moisture (%) above which one floor is taken off the estimate
pub const WET_SOIL_MOISTURE: f64 = 45.0;

/// Recommended foundation family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FoundationType {
    IsolatedFooting,
    Raft,
    Pile,
    DeepPile,
    UnderReamedPile,
}

impl FoundationType {
    pub fn display_text(&self) -> &'static str {
        match self {
            FoundationType::IsolatedFooting => "Isolated/Strip Footing (IS 8009)",
            FoundationType::Raft => "Raft/Mat Foundation (IS 8009)",
            FoundationType::Pile => "Pile Foundation (IS 2911)",
            FoundationType::DeepPile => "Deep Pile / Caisson Foundation (IS 2911)",
            FoundationType::UnderReamedPile => "Under-reamed Piles (IS 2911)",
        }
    }

    /// General capacity band, ignoring the expansive-clay special case
    pub fn from_capacity(qsafe: f64) -> Self {
        if qsafe >= ISOLATED_FOOTING_MIN {
            FoundationType::IsolatedFooting
        } else if qsafe >= RAFT_MIN {
            FoundationType::Raft
        } else if qsafe >= PILE_MIN {
            FoundationType::Pile
        } else {
            FoundationType::DeepPile
        }
    }
}

impl fmt::Display for FoundationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_text())
    }
}

/// Foundation recommendation from the safe bearing capacity.
///
/// A clayey governing soil with any expansive layer (PI ≥ 20) in the log and
/// qsafe below 200 kPa gets under-reamed piles regardless of the band.
pub fn classify_foundation_type(qsafe: f64, soil_type: &SoilType, layers: &[SoilLayer]) -> FoundationType {
    if soil_type.is_clayey() && qsafe < UNDER_REAMED_MAX && layers.iter().any(SoilLayer::is_expansive) {
        return FoundationType::UnderReamedPile;
    }
    FoundationType::from_capacity(qsafe)
}

/// Storeys the soil can carry under a uniform load-per-floor model.
///
/// One floor comes off for wet soil (> 45 % moisture) and one for pH
/// outside 5.5–9. Never less than 1.
pub fn estimate_max_floors(description: &SoilDescription, qsafe: f64, load_per_floor: f64) -> u32 {
    let mut floors = (qsafe / load_per_floor).floor();
    if description.moisture > WET_SOIL_MOISTURE {
        floors -= 1.0;
    }
    if description.ph < 5.5 || description.ph > 9.0 {
        floors -= 1.0;
    }
    // f64::max discards NaN, and the cast saturates
    floors.max(1.0) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::samples;

    #[test]
    fn test_capacity_bands() {
        let none: [SoilLayer; 0] = [];
        let sand = SoilType::Sand;
        assert_eq!(classify_foundation_type(250.0, &sand, &none), FoundationType::IsolatedFooting);
        assert_eq!(classify_foundation_type(249.9, &sand, &none), FoundationType::Raft);
        assert_eq!(classify_foundation_type(150.0, &sand, &none), FoundationType::Raft);
        assert_eq!(classify_foundation_type(80.0, &sand, &none), FoundationType::Pile);
        assert_eq!(classify_foundation_type(79.9, &sand, &none), FoundationType::DeepPile);
        assert_eq!(classify_foundation_type(0.0, &sand, &none), FoundationType::DeepPile);
    }

    #[test]
    fn test_expansive_clay_override() {
        let layers = vec![
            SoilLayer::new(0.0, 1.0, SoilType::Fill),
            SoilLayer::new(1.0, 3.0, SoilType::Clay).with_plasticity_index(25.0),
        ];
        assert_eq!(
            classify_foundation_type(180.0, &SoilType::Clay, &layers),
            FoundationType::UnderReamedPile
        );
        assert_eq!(
            classify_foundation_type(180.0, &SoilType::SiltyClay, &layers),
            FoundationType::UnderReamedPile
        );
        // Above the cutoff the general band applies
        assert_eq!(classify_foundation_type(200.0, &SoilType::Clay, &layers), FoundationType::Raft);
        // Non-clay governing soil is never redirected
        assert_eq!(classify_foundation_type(100.0, &SoilType::Sand, &layers), FoundationType::Pile);
    }

    #[test]
    fn test_low_plasticity_clay_uses_band() {
        let layers = vec![SoilLayer::new(0.0, 3.0, SoilType::Clay).with_plasticity_index(12.0)];
        assert_eq!(classify_foundation_type(100.0, &SoilType::Clay, &layers), FoundationType::Pile);
    }

    #[test]
    fn test_labels() {
        assert_eq!(FoundationType::Raft.to_string(), "Raft/Mat Foundation (IS 8009)");
        assert_eq!(FoundationType::DeepPile.display_text(), "Deep Pile / Caisson Foundation (IS 2911)");
    }

    #[test]
    fn test_max_floors() {
        let mut desc = samples::default_site().description;
        assert_eq!(estimate_max_floors(&desc, 158.8, 10.0), 15);
        assert_eq!(estimate_max_floors(&desc, 158.8, 12.0), 13);

        desc.moisture = 50.0;
        assert_eq!(estimate_max_floors(&desc, 158.8, 10.0), 14);
        desc.ph = 4.5;
        assert_eq!(estimate_max_floors(&desc, 158.8, 10.0), 13);
    }

    #[test]
    fn test_max_floors_never_below_one() {
        let mut desc = samples::default_site().description;
        desc.moisture = 80.0;
        desc.ph = 4.0;
        assert_eq!(estimate_max_floors(&desc, 5.0, 10.0), 1);
        assert_eq!(estimate_max_floors(&desc, 0.0, 18.0), 1);
        assert_eq!(estimate_max_floors(&desc, f64::NAN, 10.0), 1);
    }
}
