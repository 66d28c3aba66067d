//! Metrics computed from the base analysis.

use crate::model::WaterAnalysisValues;
use serde::{Deserialize, Serialize};

/// German water hardness in °dH, absent unless both calcium and
/// magnesium are known.
pub fn water_hardness(values: &WaterAnalysisValues) -> Option<f64> {
    let ca = values.calcium?;
    let mg = values.magnesium?;
    Some(ca / 7.14 + mg / 4.32)
}

/// Ca:Mg mass ratio, absent when magnesium is zero or unknown.
pub fn calcium_magnesium_ratio(values: &WaterAnalysisValues) -> Option<f64> {
    let ca = values.calcium?;
    let mg = values.magnesium?;
    (mg != 0.0).then(|| ca / mg)
}

/// Na:K mass ratio, absent when potassium is zero or unknown.
pub fn sodium_potassium_ratio(values: &WaterAnalysisValues) -> Option<f64> {
    let na = values.sodium?;
    let k = values.potassium?;
    (k != 0.0).then(|| na / k)
}

/// Bicarbonate against the sum of sulfate and chloride; higher reads
/// smoother. Absent when none of the three inputs is known.
pub fn taste_balance(values: &WaterAnalysisValues) -> Option<f64> {
    if values.bicarbonate.is_none() && values.sulfate.is_none() && values.chloride.is_none() {
        return None;
    }
    let hco3 = values.bicarbonate.unwrap_or(0.0);
    let so4 = values.sulfate.unwrap_or(0.0);
    let cl = values.chloride.unwrap_or(0.0);
    Some(hco3 / (so4 + cl + 1.0))
}

/// Acid buffering capacity in mmol/L (bicarbonate over its molar mass).
pub fn buffer_capacity(values: &WaterAnalysisValues) -> Option<f64> {
    values.bicarbonate.map(|hco3| hco3 / 61.0)
}

/// Share of the ten base metrics that are present, as a percentage.
pub fn data_quality_score(values: &WaterAnalysisValues) -> f64 {
    values.present_count() as f64 / 10.0 * 100.0
}

/// All derived metrics in one serializable bundle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DerivedMetrics {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hardness: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calcium_magnesium_ratio: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sodium_potassium_ratio: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub taste_palatability: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buffer_capacity: Option<f64>,
    pub data_quality_score: f64,
}

impl DerivedMetrics {
    pub fn compute(values: &WaterAnalysisValues) -> Self {
        DerivedMetrics {
            hardness: water_hardness(values),
            calcium_magnesium_ratio: calcium_magnesium_ratio(values),
            sodium_potassium_ratio: sodium_potassium_ratio(values),
            taste_palatability: taste_balance(values),
            buffer_capacity: buffer_capacity(values),
            data_quality_score: data_quality_score(values),
        }
    }
}
