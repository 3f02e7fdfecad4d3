//! Bore-log validation and continuity repair
//!
//! Structural problems in a hand-edited log (inverted intervals, overlaps,
//! gaps, implausible properties) are advisory. They are surfaced to the
//! editing collaborator as messages and never block evaluation.

use thiserror::Error;

use super::layer::SoilLayer;

/// Friction angles outside this range (°) are flagged
pub const MAX_PLAUSIBLE_FRICTION_ANGLE: f64 = 60.0;

/// Minimum thickness (m) kept when a layer is shifted during repair
pub const MIN_REPAIRED_THICKNESS: f64 = 0.5;

/// Depth mismatch (m) below which consecutive layers count as contiguous
const CONTINUITY_TOLERANCE: f64 = 1e-6;

/// Advisory issue found in a bore log. Layer numbers are 1-based positions
/// in depth order.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayerIssue {
    #[error("Layer {layer}: \"Depth To\" ({to_depth} m) must be greater than \"Depth From\" ({from_depth} m).")]
    InvertedInterval {
        layer: usize,
        from_depth: f64,
        to_depth: f64,
    },

    #[error("Layer {layer}: γ must be positive. Current: {unit_weight}")]
    NonPositiveUnitWeight { layer: usize, unit_weight: f64 },

    #[error("Layer {layer}: cohesion cannot be negative. Current: {cohesion}")]
    NegativeCohesion { layer: usize, cohesion: f64 },

    #[error("Layer {layer}: φ should be in 0–60°. Current: {friction_angle}")]
    FrictionAngleOutOfRange { layer: usize, friction_angle: f64 },

    #[error("Layer {layer}: overlaps previous layer ({from_depth} m < {previous_to} m). Check depths.")]
    Overlap {
        layer: usize,
        from_depth: f64,
        previous_to: f64,
    },

    #[error("Layer {layer}: gap after previous layer ({previous_to} m to {from_depth} m). Check depths.")]
    Gap {
        layer: usize,
        from_depth: f64,
        previous_to: f64,
    },
}

/// Check a bore log for structural and property problems.
///
/// Layers are checked in depth order (sorted by `from_depth`); the input
/// order is not changed.
pub fn validate_layers(layers: &[SoilLayer]) -> Vec<LayerIssue> {
    let mut sorted: Vec<&SoilLayer> = layers.iter().collect();
    sorted.sort_by(|a, b| a.from_depth.total_cmp(&b.from_depth));

    let mut issues = Vec::new();
    for (i, layer) in sorted.iter().enumerate() {
        let number = i + 1;

        if layer.to_depth <= layer.from_depth {
            issues.push(LayerIssue::InvertedInterval {
                layer: number,
                from_depth: layer.from_depth,
                to_depth: layer.to_depth,
            });
        }
        if let Some(gamma) = layer.unit_weight {
            if gamma <= 0.0 {
                issues.push(LayerIssue::NonPositiveUnitWeight { layer: number, unit_weight: gamma });
            }
        }
        if let Some(cohesion) = layer.cohesion {
            if cohesion < 0.0 {
                issues.push(LayerIssue::NegativeCohesion { layer: number, cohesion });
            }
        }
        if let Some(phi) = layer.friction_angle {
            if !(0.0..=MAX_PLAUSIBLE_FRICTION_ANGLE).contains(&phi) {
                issues.push(LayerIssue::FrictionAngleOutOfRange { layer: number, friction_angle: phi });
            }
        }

        if i > 0 {
            let previous = sorted[i - 1];
            let mismatch = layer.from_depth - previous.to_depth;
            if mismatch < -CONTINUITY_TOLERANCE {
                issues.push(LayerIssue::Overlap {
                    layer: number,
                    from_depth: layer.from_depth,
                    previous_to: previous.to_depth,
                });
            } else if mismatch > CONTINUITY_TOLERANCE {
                issues.push(LayerIssue::Gap {
                    layer: number,
                    from_depth: layer.from_depth,
                    previous_to: previous.to_depth,
                });
            }
        }
    }
    issues
}

/// Shift each layer after the first to start where the previous one ends,
/// keeping its thickness (at least 0.5 m). Operates in the given order.
pub fn repair_continuity(layers: &mut [SoilLayer]) {
    for i in 1..layers.len() {
        let previous_to = layers[i - 1].to_depth;
        let layer = &mut layers[i];
        if layer.from_depth != previous_to {
            let thickness = layer.to_depth - layer.from_depth;
            layer.from_depth = previous_to;
            layer.to_depth = previous_to + thickness.max(MIN_REPAIRED_THICKNESS);
        }
    }
}
