// Engine Integration Tests
//
// Purpose: End-to-end scenarios through the public API, plus the numeric
// properties the calculators must hold for every input.
// Run with: cargo test --test engine_integration_tests

use approx::{assert_abs_diff_eq, assert_relative_eq};
use soil_engine::classify::{CementType, ConcreteGrade, SlabSystem, StructuralSystem};
use soil_engine::layers::build_bore_log;
use soil_engine::metrics::{
    compute_safe_bearing_capacity, compute_void_ratio, density_to_unit_weight, estimate_cbr,
};
use soil_engine::samples::{coastal_wet_site, default_site, upland_gravel_site};
use soil_engine::soil::infer_soil_type;
use soil_engine::suitability::Factor;
use soil_engine::{
    evaluate, score_suitability, summarize, BuildingType, EngineConfig, ExposureClass,
    FoundationType, ProfileSource, SoilDescription, SoilEngine, SoilLayer, SoilType, Track,
};

fn default_description() -> SoilDescription {
    default_site().description
}

// =========================================================================
// Section 1: Scenarios
// =========================================================================

#[test]
fn test_synthesized_profile_scenario() {
    let mut desc = default_description();
    desc.layers = None;

    let bundle = evaluate(&desc, None);

    assert_eq!(bundle.profile_source, ProfileSource::Composition);
    assert_eq!(bundle.bore_log.len(), 2);
    assert!(bundle.qsafe >= 80.0 && bundle.qsafe <= 250.0, "qsafe = {}", bundle.qsafe);
    assert!(matches!(bundle.foundation_type, FoundationType::Pile | FoundationType::Raft));
    assert!(bundle.max_floors >= 1);
}

#[test]
fn test_wet_acidic_scenario() {
    let mut desc = default_description();
    desc.moisture = 80.0;
    desc.ph = 4.0;

    let report = score_suitability(&desc);
    assert!(report.is_limited_by(Track::Building, Factor::Ph));
    assert!(report.is_limited_by(Track::Building, Factor::Moisture));

    // 2 residential floors need 20 kPa: covered by the clay layer
    let bundle = evaluate(&desc, None);
    assert!(bundle.remediation.is_none());

    // 30 skyscraper floors need 540 kPa: not covered
    desc.planned_floors = 30;
    desc.building_type = BuildingType::Skyscraper;
    let bundle = evaluate(&desc, None);
    let plan = bundle.remediation.expect("target above computed qsafe");
    assert_eq!(plan.target_qsafe, 540.0);
    assert!(plan.estimated_gain > 0.0);
    assert_eq!(plan.notes.len(), 2);
}

#[test]
fn test_evaluate_is_idempotent() {
    for site in [default_site(), coastal_wet_site(), upland_gravel_site()] {
        let first = evaluate(&site.description, site.environment.as_ref());
        let second = evaluate(&site.description, site.environment.as_ref());
        assert_eq!(first, second, "{}", site.name);

        let a = serde_json::to_string(&first).unwrap();
        let b = serde_json::to_string(&second).unwrap();
        assert_eq!(a, b);
    }
}

#[test]
fn test_coastal_site() {
    let site = coastal_wet_site();
    let summary = summarize(&site.description, site.environment.as_ref());
    let bundle = &summary.bundle;

    // Soft marine clay (c 12, φ 4) governs at 1.5 m
    assert_eq!(bundle.governing_layer_index, 1);
    assert_eq!(bundle.governing_layer.soil_type, SoilType::Clay);
    assert_abs_diff_eq!(bundle.qsafe, 35.6, epsilon = 0.3);

    // PI 32 layer in the log: expansive clay override
    assert_eq!(bundle.foundation_type, FoundationType::UnderReamedPile);
    assert_eq!(bundle.max_floors, 1);

    assert_eq!(bundle.exposure, ExposureClass::VerySevere);
    assert_eq!(bundle.concrete.grade, ConcreteGrade::M35);
    assert_eq!(bundle.concrete.cement_type, CementType::Psc);
    assert!(bundle.concrete.admixtures.iter().any(|a| a == "Corrosion inhibitor"));

    assert_eq!(bundle.structural.system, StructuralSystem::Rcc);
    assert_eq!(
        bundle.structural.lateral_system,
        "Braced steel frames / RC shear walls (wind critical)"
    );
    assert_eq!(bundle.slab.slab_system, SlabSystem::PostTensioned);

    let plan = bundle.remediation.as_ref().expect("96 kPa target");
    assert_eq!(plan.target_qsafe, 96.0);
    assert!(plan.methods[0].starts_with("Lime stabilization"));

    assert_eq!(bundle.cbr, 1.0);
    assert_eq!(bundle.notes.len(), 2);
    assert_eq!(summary.messages.len(), 7);
    assert!(summary.messages[6].ends_with(&plan.methods.join("; ")));
}

#[test]
fn test_coastal_site_suitability() {
    let site = coastal_wet_site();
    let report = score_suitability(&site.description);

    assert!(report.is_limited_by(Track::Building, Factor::Moisture));
    assert!(report.is_limited_by(Track::Building, Factor::BearingRatio));
    assert!(report.is_limited_by(Track::Building, Factor::VoidRatio));
    assert!(!report.is_limited_by(Track::Building, Factor::Ph));
    assert!(report.limiting_factors.agriculture.is_empty());

    assert!(report.building_score < 40.0);
    assert_abs_diff_eq!(report.agriculture_score, 88.75, epsilon = 0.06);
    assert_eq!(report.overall_recommendation, Track::Agriculture);
}

#[test]
fn test_upland_site() {
    let site = upland_gravel_site();
    let bundle = evaluate(&site.description, site.environment.as_ref());

    assert_eq!(bundle.profile_source, ProfileSource::Composition);
    assert_eq!(bundle.inferred_soil_type, Some(SoilType::Sand));
    assert_eq!(bundle.governing_layer.soil_type, SoilType::Sand);
    assert_abs_diff_eq!(bundle.qsafe, 344.3, epsilon = 0.5);
    assert_eq!(bundle.foundation_type, FoundationType::IsolatedFooting);
    assert_eq!(bundle.max_floors, 22);
    assert!(bundle.remediation.is_none());

    // Industrial tag outranks the cold tag; hill terrain reinstates RCC
    assert_eq!(bundle.exposure, ExposureClass::VerySevere);
    assert_eq!(bundle.concrete.cement_type, CementType::Ppc);
    assert_eq!(bundle.structural.system, StructuralSystem::Rcc);
    assert_eq!(
        bundle.structural.lateral_system,
        "Dual system: RC shear walls + SMRF (ductile)"
    );
    assert_eq!(bundle.slab.slab_system, SlabSystem::Waffle);
    assert_eq!(bundle.slab.remarks.len(), 2);
    assert_eq!(bundle.cbr, 14.0);
}

#[test]
fn test_unusable_composition_falls_back_to_silt() {
    let mut desc = default_description();
    desc.layers = None;
    desc.clay_content = 10.0;
    desc.sand_content = 10.0;
    desc.silt_content = 10.0;

    let bundle = evaluate(&desc, None);
    assert_eq!(bundle.profile_source, ProfileSource::Fallback);
    assert_eq!(bundle.inferred_soil_type, None);
    assert_eq!(bundle.governing_layer.soil_type, SoilType::Silt);

    let report = score_suitability(&desc);
    assert_eq!(report.details.basis, ProfileSource::Fallback);
}

#[test]
fn test_malformed_log_still_evaluates() {
    let mut desc = default_description();
    desc.layers = Some(vec![
        SoilLayer::new(0.0, 2.0, SoilType::Clay),
        SoilLayer::new(1.5, 1.0, SoilType::Sand),
        SoilLayer::new(3.0, 5.0, SoilType::Gravel).with_unit_weight(-4.0),
    ]);

    let bundle = evaluate(&desc, None);
    assert!(bundle.qsafe.is_finite() && bundle.qsafe >= 0.0);
    assert_eq!(bundle.bore_log.len(), 3);
    assert!(bundle.max_floors >= 1);
}

#[test]
fn test_json_input() {
    let json = r#"{
        "name": "Laterite plot",
        "pH": 6.2,
        "moisture": 18,
        "temperature": 27,
        "clayContent": 30,
        "sandContent": 40,
        "siltContent": 30,
        "organicMatter": 3.1,
        "density": 1.8,
        "buildingType": "commercial",
        "plannedFloors": 4,
        "squareFeet": 5000,
        "boreLayers": [
            { "fromDepth": 0, "toDepth": 3, "soil": "Laterite", "SPT_N": 22 }
        ]
    }"#;
    let desc: SoilDescription = serde_json::from_str(json).unwrap();
    assert_eq!(desc.building_type, BuildingType::Commercial);
    assert_eq!(desc.site_area, 5000.0);

    let bundle = evaluate(&desc, None);
    assert_eq!(bundle.profile_source, ProfileSource::BoreLog);
    // Free-text soil: no strength hints, generic bore-log defaults
    assert_eq!(bundle.parameters.friction_angle, 28.0);
    assert_eq!(bundle.parameters.cohesion, 0.0);
    assert_eq!(bundle.bore_log[0].unit_weight, 18.0);
    assert_eq!(bundle.bore_log[0].spt_n, Some(22));

    let value = serde_json::to_value(&bundle).unwrap();
    assert!(value["qsafe"].is_number());
    assert!(value["governingLayer"].is_object());
    assert!(value["concrete"]["maxWCRatio"].is_number());
}

#[test]
fn test_custom_config() {
    let desc = default_description();
    let strict = SoilEngine::new(EngineConfig {
        factor_of_safety: 4.0,
        ..EngineConfig::default()
    });

    let default_bundle = evaluate(&desc, None);
    let strict_bundle = strict.evaluate(&desc, None);
    assert_relative_eq!(strict_bundle.qsafe, default_bundle.qsafe * 0.75, max_relative = 1e-2);
}

// =========================================================================
// Section 2: Calculator properties
// =========================================================================

#[test]
fn test_unit_weight_property() {
    for step in 0..=60 {
        let density = step as f64 * 0.05;
        let gamma = density_to_unit_weight(density);
        if density > 0.5 && density <= 2.8 {
            assert_eq!(gamma, density * 9.81);
        } else {
            assert_eq!(gamma, 18.0);
        }
    }
}

#[test]
fn test_void_ratio_property() {
    for density in [0.3, 1.2, 1.7, 2.2, 2.8, 3.5] {
        let mut previous = 0.0;
        for moisture in (0..=120).map(|m| m as f64) {
            let e = compute_void_ratio(density, moisture);
            assert!(e >= 0.0);
            assert!(e >= previous);
            previous = e;
        }
    }
}

#[test]
fn test_cbr_property() {
    let densities = [-5.0, 0.0, 1.0, 1.9, 2.4, 50.0, f64::NAN];
    let moistures = [-50.0, 0.0, 25.0, 80.0, 500.0, f64::NAN];
    let types = [None, Some(SoilType::Clay), Some(SoilType::Sand), Some(SoilType::Peat)];
    for density in densities {
        for moisture in moistures {
            for soil in &types {
                let cbr = estimate_cbr(density, moisture, soil.as_ref());
                assert!((1.0..=30.0).contains(&cbr), "{} {} {:?}", density, moisture, soil);
            }
        }
    }
}

#[test]
fn test_zero_friction_capacity() {
    for gamma in [12.0, 18.0, 21.0] {
        let qsafe = compute_safe_bearing_capacity(0.0, 0.0, gamma, 1.5, 1.0);
        assert!(qsafe.is_finite() && qsafe >= 0.0);
    }
    // Nc vanishes at φ = 0, so cohesion adds nothing: 18 * 1.5 / 3
    let qsafe = compute_safe_bearing_capacity(30.0, 0.0, 18.0, 1.5, 1.0);
    assert_abs_diff_eq!(qsafe, 9.0, epsilon = 1e-9);
}

#[test]
fn test_bore_log_properties() {
    let full = SoilLayer::new(0.0, 2.0, SoilType::Sand)
        .with_unit_weight(18.2)
        .with_strength(4.0, 29.0)
        .with_moisture(12.0)
        .with_spt(15)
        .with_plasticity_index(0.0)
        .with_remarks("Medium dense");
    let bare = SoilLayer::new(2.0, 4.0, SoilType::Sand);

    let rows = build_bore_log(&[full, bare]);

    assert_eq!(rows[0].unit_weight, 18.2);
    assert_eq!(rows[0].cohesion, 4.0);
    assert_eq!(rows[0].friction_angle, 29.0);
    assert_eq!(rows[0].moisture, Some(12.0));
    assert_eq!(rows[0].spt_n, Some(15));
    assert_eq!(rows[0].remarks.as_deref(), Some("Medium dense"));

    assert_eq!(rows[1].unit_weight, 19.5);
    assert_eq!(rows[1].friction_angle, 33.0);
    assert_eq!(rows[1].cohesion, 0.0);
}

#[test]
fn test_inference_boundaries() {
    assert_eq!(infer_soil_type(60.0, 20.0, 20.0), Some(SoilType::Sand));
    assert_eq!(infer_soil_type(50.0, 20.0, 30.0), Some(SoilType::Silt));
    assert_eq!(infer_soil_type(60.0, 20.0, 14.9), None);
    assert!(infer_soil_type(60.0, 20.0, 15.0).is_some());
    assert!(infer_soil_type(60.0, 25.0, 20.0).is_some());
    assert_eq!(infer_soil_type(60.0, 25.0, 20.1), None);
}
