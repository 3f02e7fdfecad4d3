//! Reference sites
//!
//! Three hardcoded analyses covering typical, poor and strong ground. Used
//! by the demo binary, tests and benchmarks.

use serde::{Deserialize, Serialize};

use crate::layers::SoilLayer;
use crate::soil::{
    BuildingType, ChlorideRisk, EnvironmentDescription, EnvironmentTag, SoilDescription, SoilType,
    SulfateExposure,
};

/// A named site: soil description plus its environment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampleSite {
    pub name: String,
    pub description: SoilDescription,
    #[serde(default)]
    pub environment: Option<EnvironmentDescription>,
}

fn description(name: &str) -> SoilDescription {
    SoilDescription {
        name: name.to_string(),
        ph: 7.0,
        moisture: 20.0,
        temperature: 25.0,
        clay_content: 25.0,
        sand_content: 45.0,
        silt_content: 30.0,
        organic_matter: 2.5,
        density: 1.7,
        cohesion: Some(25.0),
        friction_angle: Some(30.0),
        foundation_depth: None,
        foundation_width: None,
        building_type: BuildingType::Residential,
        planned_floors: 2,
        site_area: 2000.0,
        layers: None,
    }
}

/// Default analysis: silty clay-ish loam over a four-layer bore log
pub fn default_site() -> SampleSite {
    let mut desc = description("Default analysis");
    desc.layers = Some(vec![
        SoilLayer::new(0.0, 1.0, SoilType::Fill)
            .with_unit_weight(16.0)
            .with_strength(10.0, 18.0)
            .with_moisture(25.0)
            .with_spt(10)
            .with_remarks("-"),
        SoilLayer::new(1.0, 2.0, SoilType::Clay)
            .with_unit_weight(17.0)
            .with_strength(25.0, 18.0)
            .with_moisture(30.0)
            .with_spt(10)
            .with_remarks("Compressible"),
        SoilLayer::new(2.0, 3.0, SoilType::Clay)
            .with_unit_weight(18.0)
            .with_strength(45.0, 22.0)
            .with_moisture(24.0)
            .with_spt(10),
        SoilLayer::new(3.0, 4.0, SoilType::Sand)
            .with_unit_weight(19.0)
            .with_strength(0.0, 36.0)
            .with_moisture(18.0)
            .with_spt(10)
            .with_remarks("Good for pile termination"),
    ]);

    SampleSite {
        name: "Default analysis".to_string(),
        description: desc,
        environment: None,
    }
}

/// Acidic, waterlogged coastal clay with an expansive layer, planned as a
/// mid-rise commercial block
pub fn coastal_wet_site() -> SampleSite {
    let mut desc = description("Coastal reclaimed plot");
    desc.ph = 4.8;
    desc.moisture = 62.0;
    desc.temperature = 31.0;
    desc.clay_content = 48.0;
    desc.sand_content = 22.0;
    desc.silt_content = 30.0;
    desc.organic_matter = 6.5;
    desc.density = 1.45;
    desc.cohesion = None;
    desc.friction_angle = None;
    desc.building_type = BuildingType::Commercial;
    desc.planned_floors = 8;
    desc.site_area = 14_000.0;
    desc.layers = Some(vec![
        SoilLayer::new(0.0, 1.2, SoilType::Fill)
            .with_unit_weight(15.5)
            .with_moisture(40.0)
            .with_spt(4)
            .with_remarks("Dredged fill"),
        SoilLayer::new(1.2, 5.0, SoilType::Clay)
            .with_unit_weight(15.0)
            .with_strength(12.0, 4.0)
            .with_moisture(65.0)
            .with_spt(2)
            .with_plasticity_index(32.0)
            .with_remarks("Soft marine clay"),
        SoilLayer::new(5.0, 9.0, SoilType::SiltySand)
            .with_moisture(28.0)
            .with_spt(18),
    ]);

    let environment = EnvironmentDescription::new()
        .with_tag(EnvironmentTag::Seaside)
        .with_tag(EnvironmentTag::Hot)
        .with_wind_speed(47.0)
        .with_seismic_zone(3)
        .with_sulfate(SulfateExposure::Moderate)
        .with_chloride(ChlorideRisk::High);

    SampleSite {
        name: "Coastal reclaimed plot".to_string(),
        description: desc,
        environment: Some(environment),
    }
}

/// Dense sandy gravel on a hill slope; no bore log, profile from composition
pub fn upland_gravel_site() -> SampleSite {
    let mut desc = description("Upland terrace");
    desc.ph = 6.6;
    desc.moisture = 11.0;
    desc.temperature = 18.0;
    desc.clay_content = 8.0;
    desc.sand_content = 72.0;
    desc.silt_content = 20.0;
    desc.organic_matter = 1.2;
    desc.density = 2.05;
    desc.cohesion = None;
    desc.friction_angle = None;
    desc.building_type = BuildingType::Industrial;
    desc.planned_floors = 3;
    desc.site_area = 22_000.0;

    let environment = EnvironmentDescription::new()
        .with_tag(EnvironmentTag::Hill)
        .with_tag(EnvironmentTag::Cold)
        .with_tag(EnvironmentTag::Industrial)
        .with_seismic_zone(4)
        .with_wind_speed(39.0);

    SampleSite {
        name: "Upland terrace".to_string(),
        description: desc,
        environment: Some(environment),
    }
}

pub fn sample_sites() -> Vec<SampleSite> {
    vec![default_site(), coastal_wet_site(), upland_gravel_site()]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layers::validate_layers;

    #[test]
    fn test_sample_logs_are_valid() {
        for site in sample_sites() {
            let layers = site.description.layers.clone().unwrap_or_default();
            assert!(validate_layers(&layers).is_empty(), "{}", site.name);
        }
    }

    #[test]
    fn test_upland_site_infers_sand() {
        let site = upland_gravel_site();
        assert!(site.description.bore_log().is_none());
        assert_eq!(site.description.inferred_soil_type(), Some(SoilType::Sand));
    }

    #[test]
    fn test_sample_site_round_trips_through_json() {
        let site = coastal_wet_site();
        let json = serde_json::to_string(&site).unwrap();
        let back: SampleSite = serde_json::from_str(&json).unwrap();
        assert_eq!(back, site);
    }
}
