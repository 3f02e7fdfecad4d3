//! Design Evaluation Engine
//!
//! Composes the calculators into one result: resolve the profile (bore log
//! or synthesized), pick the governing layer at the trial footing depth,
//! derive bearing capacity and soil metrics, then run the classification
//! tables and the remediation advisor.
//!
//! Every call is a pure function of its inputs and the engine config. The
//! only side effect is `tracing` output, which is a no-op unless the caller
//! installs a subscriber.

use serde::{Deserialize, Serialize};

use crate::classify::{
    classify_foundation_type, compute_exposure, estimate_max_floors, recommend_concrete,
    recommend_structural_system, suggest_slab_system, ConcreteRecommendation, ExposureClass,
    FoundationType, SlabSuggestion, StructuralRecommendation,
};
use crate::config::EngineConfig;
use crate::layers::{
    build_bore_log, governing_layer, resolve_profile, validate_layers, BoreLogRow, ProfileSource,
    SoilLayer,
};
use crate::metrics::{
    compute_void_ratio, density_to_unit_weight, estimate_cbr, safe_bearing_capacity_with_factor,
};
use crate::remediation::{propose_remediation, RemediationPlan};
use crate::soil::{EnvironmentDescription, SoilDescription, SoilType};
use crate::suitability::{build_report, ScoringInputs, SuitabilityReport};

/// Capacity (kPa) assumed by the one-line foundation summary
pub const PRELIMINARY_CAPACITY: f64 = 150.0;

// Advisory note thresholds
const ACIDIC_PH: f64 = 5.5;
const WET_MOISTURE: f64 = 50.0;
const HOT_TEMPERATURE: f64 = 35.0;

/// Strength parameters used for the bearing-capacity calculation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignParameters {
    /// γ (kN/m³)
    pub unit_weight: f64,
    /// φ (degrees)
    pub friction_angle: f64,
    /// c (kPa)
    pub cohesion: f64,
}

impl DesignParameters {
    /// Layer values first, then the description's global c/φ, then
    /// soil-type hints (sand → φ 33°, clay → c 20 kPa)
    pub fn resolve(layer: &SoilLayer, description: &SoilDescription) -> Self {
        let unit_weight = layer
            .unit_weight
            .unwrap_or_else(|| density_to_unit_weight(description.density));
        let friction_angle = layer
            .friction_angle
            .or(description.friction_angle)
            .unwrap_or(if layer.soil_type.is_sandy() { 33.0 } else { 28.0 });
        let cohesion = layer
            .cohesion
            .or(description.cohesion)
            .unwrap_or(if layer.soil_type.is_clayey() { 20.0 } else { 0.0 });

        Self {
            unit_weight,
            friction_angle,
            cohesion,
        }
    }
}

/// Everything derived for one site
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignBundle {
    /// Safe bearing capacity (kPa)
    pub qsafe: f64,
    pub governing_layer: SoilLayer,
    /// Position of the governing layer in the evaluated profile
    pub governing_layer_index: usize,
    /// Footing depth Df (m) the governing layer was picked at
    pub governing_depth: f64,
    /// Footing width B (m)
    pub footing_width: f64,
    pub parameters: DesignParameters,
    pub profile_source: ProfileSource,
    pub void_ratio: f64,
    pub cbr: f64,
    /// Soil type inferred from composition, when the profile was synthesized
    pub inferred_soil_type: Option<SoilType>,
    pub foundation_type: FoundationType,
    pub max_floors: u32,
    pub exposure: ExposureClass,
    pub concrete: ConcreteRecommendation,
    pub structural: StructuralRecommendation,
    pub slab: SlabSuggestion,
    pub remediation: Option<RemediationPlan>,
    pub bore_log: Vec<BoreLogRow>,
    pub notes: Vec<String>,
}

/// Design bundle plus condensed summary lines for reports
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignSummary {
    pub bundle: DesignBundle,
    pub messages: Vec<String>,
}

fn advisory_notes(description: &SoilDescription) -> Vec<String> {
    let mut notes = Vec::new();
    if description.ph < ACIDIC_PH {
        notes.push(
            "Acidic soil: protect concrete (PPC/PSC/SRC) & rebars; consider pH correction/backfill."
                .to_string(),
        );
    }
    if description.moisture > WET_MOISTURE {
        notes.push(
            "High moisture: provide sub-soil drainage & dewatering during foundation works."
                .to_string(),
        );
    }
    if description.temperature > HOT_TEMPERATURE {
        notes.push("Hot weather concreting precautions per IS 7861.".to_string());
    }
    notes
}

/// Stateless evaluator holding the design constants
#[derive(Debug, Clone, Default)]
pub struct SoilEngine {
    config: EngineConfig,
}

impl SoilEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Governing layer (owned), its index and the design parameters
    fn governing(
        &self,
        description: &SoilDescription,
        layers: &[SoilLayer],
        depth: f64,
    ) -> (usize, SoilLayer, DesignParameters) {
        let (index, layer) = match governing_layer(layers, depth) {
            Some((index, layer)) => (index, layer.clone()),
            // Unreachable for resolved profiles, which are never empty
            None => (0, SoilLayer::new(0.0, depth, SoilType::Silt)),
        };
        let parameters = DesignParameters::resolve(&layer, description);
        (index, layer, parameters)
    }

    fn qsafe(&self, parameters: &DesignParameters, depth: f64, width: f64) -> f64 {
        safe_bearing_capacity_with_factor(
            parameters.cohesion,
            parameters.friction_angle,
            parameters.unit_weight,
            depth,
            width,
            self.config.factor_of_safety,
        )
    }

    /// Full design evaluation for a site
    pub fn evaluate(
        &self,
        description: &SoilDescription,
        env: Option<&EnvironmentDescription>,
    ) -> DesignBundle {
        let profile = resolve_profile(description);
        let layers = profile.layers.as_ref();

        if profile.source == ProfileSource::BoreLog {
            let issues = validate_layers(layers);
            if !issues.is_empty() {
                tracing::warn!(
                    site = %description.name,
                    count = issues.len(),
                    "Bore log has issues; evaluating best effort"
                );
                for issue in &issues {
                    tracing::warn!("{}", issue);
                }
            }
        }

        let (depth, width) = self.config.footing_for(description);
        let (index, layer, parameters) = self.governing(description, layers, depth);
        let qsafe = self.qsafe(&parameters, depth, width);

        tracing::debug!(
            site = %description.name,
            source = ?profile.source,
            layer = index,
            soil = %layer.soil_type,
            qsafe,
            "Governing layer at {} m",
            depth
        );

        let void_ratio = compute_void_ratio(description.density, description.moisture);
        let cbr = estimate_cbr(description.density, description.moisture, Some(&layer.soil_type));

        let foundation_type = classify_foundation_type(qsafe, &layer.soil_type, layers);
        let load_per_floor = self.config.load_per_floor(&description.building_type);
        let max_floors = estimate_max_floors(description, qsafe, load_per_floor);

        let exposure = compute_exposure(env);
        let concrete = recommend_concrete(exposure, env);
        let structural = recommend_structural_system(description, env);
        let slab = suggest_slab_system(description);

        let target = self.config.target_capacity(description);
        let remediation = propose_remediation(&layer.soil_type, qsafe, target);
        if let Some(plan) = &remediation {
            tracing::debug!(target, gain = plan.estimated_gain, "Remediation proposed");
        }

        let inferred_soil_type = match profile.source {
            ProfileSource::BoreLog => None,
            ProfileSource::Composition | ProfileSource::Fallback => description.inferred_soil_type(),
        };

        DesignBundle {
            qsafe,
            governing_layer_index: index,
            governing_depth: depth,
            footing_width: width,
            parameters,
            profile_source: profile.source,
            void_ratio,
            cbr,
            inferred_soil_type,
            foundation_type,
            max_floors,
            exposure,
            concrete,
            structural,
            slab,
            remediation,
            bore_log: build_bore_log(layers),
            notes: advisory_notes(description),
            governing_layer: layer,
        }
    }

    /// Evaluate and render the condensed summary lines
    pub fn summarize(
        &self,
        description: &SoilDescription,
        env: Option<&EnvironmentDescription>,
    ) -> DesignSummary {
        let bundle = self.evaluate(description, env);

        let mut messages = vec![
            format!(
                "Safe Bearing Capacity (Df={:?}m, B={:?}m): {} kPa",
                bundle.governing_depth, bundle.footing_width, bundle.qsafe
            ),
            format!("Recommended foundation: {}", bundle.foundation_type),
            format!("Suggested maximum floors: {}", bundle.max_floors),
            format!(
                "Exposure class: {}, Concrete grade: {} (w/c ≤ {})",
                bundle.exposure, bundle.concrete.grade, bundle.concrete.max_wc_ratio
            ),
            format!(
                "Steel: {}, Lateral: {}",
                bundle.structural.system, bundle.structural.lateral_system
            ),
            format!("Slab system: {}", bundle.slab.slab_system),
        ];

        if let Some(plan) = &bundle.remediation {
            messages.push(format!(
                "Remediation advised to reach {} kPa (gain ≈ {} kPa): {}",
                plan.target_qsafe,
                plan.estimated_gain,
                plan.methods.join("; ")
            ));
        }

        DesignSummary { bundle, messages }
    }

    /// Building and agriculture suitability, using the design evaluation's
    /// CBR and void ratio for the building track
    pub fn score_suitability(&self, description: &SoilDescription) -> SuitabilityReport {
        let bundle = self.evaluate(description, None);
        build_report(
            description,
            ScoringInputs {
                void_ratio: bundle.void_ratio,
                cbr: bundle.cbr,
                qsafe: bundle.qsafe,
                basis: bundle.profile_source,
            },
        )
    }

    /// Foundation recommendation only (no environment needed)
    pub fn foundation_type_for(&self, description: &SoilDescription) -> FoundationType {
        let profile = resolve_profile(description);
        let layers = profile.layers.as_ref();
        let (depth, width) = self.config.footing_for(description);
        let (_, layer, parameters) = self.governing(description, layers, depth);
        let qsafe = self.qsafe(&parameters, depth, width);
        classify_foundation_type(qsafe, &layer.soil_type, layers)
    }

    /// "<foundation> • ≤ <n> floors (preliminary)"; the floor count assumes
    /// a 150 kPa capacity rather than the computed one
    pub fn foundation_summary_line(&self, description: &SoilDescription) -> String {
        let foundation = self.foundation_type_for(description);
        let load_per_floor = self.config.load_per_floor(&description.building_type);
        let floors = estimate_max_floors(description, PRELIMINARY_CAPACITY, load_per_floor);
        format!("{} • ≤ {} floors (preliminary)", foundation, floors)
    }
}

// ============================================================================
// Default-config entry points
// ============================================================================

pub fn evaluate(description: &SoilDescription, env: Option<&EnvironmentDescription>) -> DesignBundle {
    SoilEngine::default().evaluate(description, env)
}

pub fn summarize(description: &SoilDescription, env: Option<&EnvironmentDescription>) -> DesignSummary {
    SoilEngine::default().summarize(description, env)
}

pub fn score_suitability(description: &SoilDescription) -> SuitabilityReport {
    SoilEngine::default().score_suitability(description)
}

pub fn foundation_type_for(description: &SoilDescription) -> FoundationType {
    SoilEngine::default().foundation_type_for(description)
}

pub fn foundation_summary_line(description: &SoilDescription) -> String {
    SoilEngine::default().foundation_summary_line(description)
}
