//! Layer profile utilities
//!
//! Locating the governing layer at a design depth, and synthesizing a
//! two-layer profile from bulk composition when no bore log was supplied.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;

use crate::metrics::density_to_unit_weight;
use crate::soil::{SoilDescription, SoilType};

use super::layer::SoilLayer;

/// Depth split of the synthesized profile (m)
pub const SYNTHETIC_SHALLOW_BASE: f64 = 2.0;
pub const SYNTHETIC_DEEP_BASE: f64 = 6.0;

/// Where an evaluated profile came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfileSource {
    /// Explicit bore log
    BoreLog,
    /// Synthesized from the soil type inferred from composition
    Composition,
    /// Composition unusable; synthesized as silt
    Fallback,
}

/// Layers an evaluation runs on
#[derive(Debug, Clone)]
pub struct Profile<'a> {
    pub layers: Cow<'a, [SoilLayer]>,
    pub source: ProfileSource,
}

/// The explicit bore log if there is one, else a synthesized profile
pub fn resolve_profile(description: &SoilDescription) -> Profile<'_> {
    match description.bore_log() {
        Some(layers) => Profile {
            layers: Cow::Borrowed(layers),
            source: ProfileSource::BoreLog,
        },
        None => Profile {
            layers: Cow::Owned(synthesize_layers(description)),
            source: if description.inferred_soil_type().is_some() {
                ProfileSource::Composition
            } else {
                ProfileSource::Fallback
            },
        },
    }
}

/// First layer whose interval contains depth `z`
pub fn layer_at_depth(layers: &[SoilLayer], z: f64) -> Option<&SoilLayer> {
    layers.iter().find(|layer| layer.contains_depth(z))
}

/// Index and layer governing depth `z`: the containing layer, or the first
/// layer when `z` falls outside every interval. `None` only for an empty log.
pub fn governing_layer(layers: &[SoilLayer], z: f64) -> Option<(usize, &SoilLayer)> {
    layers
        .iter()
        .enumerate()
        .find(|(_, layer)| layer.contains_depth(z))
        .or_else(|| layers.first().map(|layer| (0, layer)))
}

/// Cohesion (kPa) and friction angle (°) of the shallow synthetic layer
fn synthetic_strength(soil: &SoilType) -> (f64, f64) {
    if soil.is_clayey() {
        (25.0, 18.0)
    } else if soil.is_silty() {
        (10.0, 28.0)
    } else {
        (0.0, 33.0)
    }
}

/// Build a two-layer profile (0-2 m, 2-6 m) from the bulk description.
///
/// The shallow layer takes the inferred soil type ("silt" when the
/// composition cannot be inferred). The deeper layer is a little heavier,
/// drier and more frictional. This is a heuristic so the rest of the
/// pipeline can run without bore data, not a physical model.
pub fn synthesize_layers(description: &SoilDescription) -> Vec<SoilLayer> {
    let inferred = description.inferred_soil_type().unwrap_or(SoilType::Silt);
    let gamma = density_to_unit_weight(description.density);
    let (cohesion, phi) = synthetic_strength(&inferred);

    let deep_type = match inferred {
        SoilType::Sand => SoilType::SiltySand,
        SoilType::Clay => SoilType::SiltyClay,
        ref other => other.clone(),
    };
    let surface_moisture = if description.moisture > 0.0 {
        description.moisture
    } else {
        15.0
    };
    let deep_cohesion = if cohesion > 0.0 { (cohesion - 5.0).max(0.0) } else { 0.0 };
    let deep_phi = if phi > 0.0 { (phi + 2.0).min(36.0) } else { 30.0 };

    let shallow = SoilLayer::new(0.0, SYNTHETIC_SHALLOW_BASE, inferred)
        .with_unit_weight(gamma)
        .with_moisture(description.moisture)
        .with_strength(cohesion, phi)
        .with_remarks("Synthesized layer from composition");

    let deep = SoilLayer::new(SYNTHETIC_SHALLOW_BASE, SYNTHETIC_DEEP_BASE, deep_type)
        .with_unit_weight((gamma + 0.5).max(18.0))
        .with_moisture((surface_moisture - 5.0).max(10.0))
        .with_strength(deep_cohesion, deep_phi)
        .with_remarks("Synthesized deeper layer");

    vec![shallow, deep]
}
