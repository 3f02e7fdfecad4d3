//! Bore-log normalization
//!
//! Turns user layers into display rows with every strength/weight column
//! filled. Explicit values are kept as given; only missing γ, φ and c are
//! substituted from the soil-type default table.

use serde::{Deserialize, Serialize};

use crate::soil::SoilType;

use super::layer::SoilLayer;

/// Normalized bore-log row for tables and reports
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoreLogRow {
    pub depth_from: f64,
    pub depth_to: f64,
    pub soil_type: SoilType,
    /// γ (kN/m³)
    pub unit_weight: f64,
    /// c (kPa)
    pub cohesion: f64,
    /// φ (degrees)
    pub friction_angle: f64,
    pub moisture: Option<f64>,
    pub spt_n: Option<u32>,
    pub plasticity_index: Option<f64>,
    pub remarks: Option<String>,
}

impl From<&SoilLayer> for BoreLogRow {
    fn from(layer: &SoilLayer) -> Self {
        let defaults = layer.soil_type.defaults();
        Self {
            depth_from: layer.from_depth,
            depth_to: layer.to_depth,
            soil_type: layer.soil_type.clone(),
            unit_weight: layer.unit_weight.unwrap_or(defaults.unit_weight),
            cohesion: layer.cohesion.unwrap_or(defaults.cohesion),
            friction_angle: layer.friction_angle.unwrap_or(defaults.friction_angle),
            moisture: layer.moisture,
            spt_n: layer.spt_n,
            plasticity_index: layer.plasticity_index,
            remarks: layer.remarks.clone(),
        }
    }
}

/// Normalize a bore log into rows, one per layer, in input order
pub fn build_bore_log(layers: &[SoilLayer]) -> Vec<BoreLogRow> {
    layers.iter().map(BoreLogRow::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_values_kept() {
        let layer = SoilLayer::new(1.0, 2.5, SoilType::Clay)
            .with_unit_weight(17.3)
            .with_strength(31.0, 12.0)
            .with_moisture(28.0)
            .with_spt(7)
            .with_plasticity_index(24.0)
            .with_remarks("Stiff, fissured");

        let rows = build_bore_log(std::slice::from_ref(&layer));
        assert_eq!(rows.len(), 1);
        let row = &rows[0];
        assert_eq!(row.depth_from, 1.0);
        assert_eq!(row.depth_to, 2.5);
        assert_eq!(row.soil_type, SoilType::Clay);
        assert_eq!(row.unit_weight, 17.3);
        assert_eq!(row.cohesion, 31.0);
        assert_eq!(row.friction_angle, 12.0);
        assert_eq!(row.moisture, Some(28.0));
        assert_eq!(row.spt_n, Some(7));
        assert_eq!(row.plasticity_index, Some(24.0));
        assert_eq!(row.remarks.as_deref(), Some("Stiff, fissured"));
    }

    #[test]
    fn test_sand_defaults_substituted() {
        let rows = build_bore_log(&[SoilLayer::new(0.0, 3.0, SoilType::Sand)]);
        let row = &rows[0];
        assert_eq!(row.unit_weight, 19.5);
        assert_eq!(row.friction_angle, 33.0);
        assert_eq!(row.cohesion, 0.0);
        assert_eq!(row.moisture, None);
        assert_eq!(row.spt_n, None);
    }

    #[test]
    fn test_explicit_zero_is_not_replaced() {
        let layer = SoilLayer::new(0.0, 1.0, SoilType::Clay).with_strength(0.0, 0.0);
        let row = BoreLogRow::from(&layer);
        assert_eq!(row.cohesion, 0.0);
        assert_eq!(row.friction_angle, 0.0);
        assert_eq!(row.unit_weight, 18.0);
    }

    #[test]
    fn test_free_text_soil_uses_generic_defaults() {
        let rows = build_bore_log(&[SoilLayer::new(0.0, 1.0, SoilType::from_label("Loam"))]);
        assert_eq!(rows[0].soil_type.label(), "Loam");
        assert_eq!(rows[0].unit_weight, 18.0);
        assert_eq!(rows[0].friction_angle, 28.0);
        assert_eq!(rows[0].cohesion, 0.0);
    }

    #[test]
    fn test_order_preserved() {
        let layers = vec![
            SoilLayer::new(0.0, 1.0, SoilType::Fill),
            SoilLayer::new(1.0, 3.0, SoilType::Peat),
            SoilLayer::new(3.0, 8.0, SoilType::WeatheredRock),
        ];
        let types: Vec<_> = build_bore_log(&layers)
            .into_iter()
            .map(|row| row.soil_type)
            .collect();
        assert_eq!(types, vec![SoilType::Fill, SoilType::Peat, SoilType::WeatheredRock]);
    }
}
