use serde::{Deserialize, Serialize};
use std::fmt;

/// A chemical metric on a mineral-water label.
///
/// Base metrics are read off the label (mg/L, except pH which is
/// dimensionless). Derived metrics are computed from base values and only
/// appear in presentation output, never as scoring inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ChemicalMetric {
    Ph,
    Calcium,
    Magnesium,
    Sodium,
    Potassium,
    Chloride,
    Sulfate,
    Nitrate,
    Bicarbonate,
    TotalDissolvedSolids,
    // Derived
    Hardness,
    CalciumMagnesiumRatio,
    SodiumPotassiumRatio,
    TastePalatability,
    BufferCapacity,
    DataQualityScore,
}

/// Base metrics in the fixed order the parser and scorer iterate them.
pub const BASE_METRICS: [ChemicalMetric; 10] = [
    ChemicalMetric::Ph,
    ChemicalMetric::Calcium,
    ChemicalMetric::Magnesium,
    ChemicalMetric::Sodium,
    ChemicalMetric::Potassium,
    ChemicalMetric::Chloride,
    ChemicalMetric::Sulfate,
    ChemicalMetric::Nitrate,
    ChemicalMetric::Bicarbonate,
    ChemicalMetric::TotalDissolvedSolids,
];

impl ChemicalMetric {
    /// Wire key used in JSON payloads.
    pub fn key(&self) -> &'static str {
        match self {
            ChemicalMetric::Ph => "ph",
            ChemicalMetric::Calcium => "calcium",
            ChemicalMetric::Magnesium => "magnesium",
            ChemicalMetric::Sodium => "sodium",
            ChemicalMetric::Potassium => "potassium",
            ChemicalMetric::Chloride => "chloride",
            ChemicalMetric::Sulfate => "sulfate",
            ChemicalMetric::Nitrate => "nitrate",
            ChemicalMetric::Bicarbonate => "bicarbonate",
            ChemicalMetric::TotalDissolvedSolids => "totalDissolvedSolids",
            ChemicalMetric::Hardness => "hardness",
            ChemicalMetric::CalciumMagnesiumRatio => "calciumMagnesiumRatio",
            ChemicalMetric::SodiumPotassiumRatio => "sodiumPotassiumRatio",
            ChemicalMetric::TastePalatability => "tastePalatability",
            ChemicalMetric::BufferCapacity => "bufferCapacity",
            ChemicalMetric::DataQualityScore => "dataQualityScore",
        }
    }

    /// German display label, as printed on bottle labels.
    pub fn label(&self) -> &'static str {
        match self {
            ChemicalMetric::Ph => "pH-Wert",
            ChemicalMetric::Calcium => "Calcium",
            ChemicalMetric::Magnesium => "Magnesium",
            ChemicalMetric::Sodium => "Natrium",
            ChemicalMetric::Potassium => "Kalium",
            ChemicalMetric::Chloride => "Chlorid",
            ChemicalMetric::Sulfate => "Sulfat",
            ChemicalMetric::Nitrate => "Nitrat",
            ChemicalMetric::Bicarbonate => "Hydrogencarbonat",
            ChemicalMetric::TotalDissolvedSolids => "Gesamtmineralisation",
            ChemicalMetric::Hardness => "Wasserhärte",
            ChemicalMetric::CalciumMagnesiumRatio => "Ca:Mg Verhältnis",
            ChemicalMetric::SodiumPotassiumRatio => "Na:K Verhältnis",
            ChemicalMetric::TastePalatability => "Geschmacksprofil",
            ChemicalMetric::BufferCapacity => "Pufferkapazität",
            ChemicalMetric::DataQualityScore => "Daten-Transparenz",
        }
    }

    /// Display unit, if the metric has one.
    pub fn unit(&self) -> Option<&'static str> {
        match self {
            ChemicalMetric::Ph
            | ChemicalMetric::CalciumMagnesiumRatio
            | ChemicalMetric::SodiumPotassiumRatio
            | ChemicalMetric::TastePalatability => None,
            ChemicalMetric::Hardness => Some("°dH"),
            ChemicalMetric::BufferCapacity => Some("mVal/L"),
            ChemicalMetric::DataQualityScore => Some("%"),
            _ => Some("mg/L"),
        }
    }

    pub fn is_derived(&self) -> bool {
        matches!(
            self,
            ChemicalMetric::Hardness
                | ChemicalMetric::CalciumMagnesiumRatio
                | ChemicalMetric::SodiumPotassiumRatio
                | ChemicalMetric::TastePalatability
                | ChemicalMetric::BufferCapacity
                | ChemicalMetric::DataQualityScore
        )
    }

    pub fn from_key(key: &str) -> Option<ChemicalMetric> {
        BASE_METRICS.iter().copied().find(|m| m.key() == key)
    }
}

impl fmt::Display for ChemicalMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// Sparse set of analysis values for one scan. A present value is a finite
/// real number; absence means "unknown", never zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WaterAnalysisValues {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ph: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calcium: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub magnesium: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sodium: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub potassium: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chloride: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sulfate: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nitrate: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bicarbonate: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_dissolved_solids: Option<f64>,
}

impl WaterAnalysisValues {
    pub fn get(&self, metric: ChemicalMetric) -> Option<f64> {
        match metric {
            ChemicalMetric::Ph => self.ph,
            ChemicalMetric::Calcium => self.calcium,
            ChemicalMetric::Magnesium => self.magnesium,
            ChemicalMetric::Sodium => self.sodium,
            ChemicalMetric::Potassium => self.potassium,
            ChemicalMetric::Chloride => self.chloride,
            ChemicalMetric::Sulfate => self.sulfate,
            ChemicalMetric::Nitrate => self.nitrate,
            ChemicalMetric::Bicarbonate => self.bicarbonate,
            ChemicalMetric::TotalDissolvedSolids => self.total_dissolved_solids,
            _ => None,
        }
    }

    pub fn set(&mut self, metric: ChemicalMetric, value: f64) {
        let slot = match metric {
            ChemicalMetric::Ph => &mut self.ph,
            ChemicalMetric::Calcium => &mut self.calcium,
            ChemicalMetric::Magnesium => &mut self.magnesium,
            ChemicalMetric::Sodium => &mut self.sodium,
            ChemicalMetric::Potassium => &mut self.potassium,
            ChemicalMetric::Chloride => &mut self.chloride,
            ChemicalMetric::Sulfate => &mut self.sulfate,
            ChemicalMetric::Nitrate => &mut self.nitrate,
            ChemicalMetric::Bicarbonate => &mut self.bicarbonate,
            ChemicalMetric::TotalDissolvedSolids => &mut self.total_dissolved_solids,
            _ => return,
        };
        *slot = Some(value);
    }

    /// Merge with user-supplied overrides. Overrides win key-by-key.
    pub fn merged(&self, overrides: &WaterAnalysisValues) -> WaterAnalysisValues {
        let mut out = *self;
        for metric in BASE_METRICS {
            if let Some(v) = overrides.get(metric) {
                out.set(metric, v);
            }
        }
        out
    }

    /// Iterate present (metric, value) pairs in the fixed base order.
    pub fn present(&self) -> impl Iterator<Item = (ChemicalMetric, f64)> + '_ {
        BASE_METRICS
            .iter()
            .filter_map(|&m| self.get(m).map(|v| (m, v)))
    }

    pub fn present_count(&self) -> usize {
        self.present().count()
    }

    pub fn is_empty(&self) -> bool {
        self.present_count() == 0
    }
}

/// Consumer profile a scan is scored against.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ProfileId {
    #[default]
    Standard,
    Baby,
    Sport,
    BloodPressure,
    Coffee,
    Kidney,
}

pub const ALL_PROFILES: [ProfileId; 6] = [
    ProfileId::Standard,
    ProfileId::Baby,
    ProfileId::Sport,
    ProfileId::BloodPressure,
    ProfileId::Coffee,
    ProfileId::Kidney,
];

impl ProfileId {
    pub fn key(&self) -> &'static str {
        match self {
            ProfileId::Standard => "standard",
            ProfileId::Baby => "baby",
            ProfileId::Sport => "sport",
            ProfileId::BloodPressure => "blood_pressure",
            ProfileId::Coffee => "coffee",
            ProfileId::Kidney => "kidney",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ProfileId::Standard => "Alltagswasser ohne besondere Anforderungen",
            ProfileId::Baby => "Zubereitung von Säuglingsnahrung",
            ProfileId::Sport => "Mineralstoffausgleich nach dem Training",
            ProfileId::BloodPressure => "Natriumarme Ernährung bei Bluthochdruck",
            ProfileId::Coffee => "Kaffeezubereitung (Extraktion und Härte)",
            ProfileId::Kidney => "Schonung bei Nierensteinrisiko",
        }
    }
}

impl fmt::Display for ProfileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl std::str::FromStr for ProfileId {
    type Err = crate::error::QuelleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        ALL_PROFILES
            .iter()
            .copied()
            .find(|p| p.key() == lower)
            .ok_or_else(|| crate::error::QuelleError::UnknownProfile(s.to_string()))
    }
}

/// Score contribution of a single metric.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricScoreResult {
    pub metric: ChemicalMetric,
    /// Suitability score 0–100 for this metric under the selected profile.
    pub score: f64,
    /// The value the score was computed from.
    pub raw_value: f64,
}

/// Aggregate scoring result for one scan.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreResult {
    /// Total suitability score 0–100, after the missing-data cap.
    pub total_score: f64,
    pub metrics: Vec<MetricScoreResult>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metric_keys_round_trip() {
        for metric in BASE_METRICS {
            assert_eq!(ChemicalMetric::from_key(metric.key()), Some(metric));
        }
    }

    #[test]
    fn test_tds_wire_name() {
        let json = serde_json::to_string(&ChemicalMetric::TotalDissolvedSolids).unwrap();
        assert_eq!(json, "\"totalDissolvedSolids\"");
    }

    #[test]
    fn test_values_absent_is_not_zero() {
        let values = WaterAnalysisValues::default();
        assert!(values.is_empty());
        assert_eq!(values.get(ChemicalMetric::Calcium), None);
    }

    #[test]
    fn test_merge_overrides_win() {
        let mut base = WaterAnalysisValues::default();
        base.set(ChemicalMetric::Calcium, 80.0);
        base.set(ChemicalMetric::Magnesium, 25.0);

        let mut overrides = WaterAnalysisValues::default();
        overrides.set(ChemicalMetric::Calcium, 95.0);

        let merged = base.merged(&overrides);
        assert_eq!(merged.calcium, Some(95.0));
        assert_eq!(merged.magnesium, Some(25.0));
    }

    #[test]
    fn test_values_json_wire_names() {
        let mut values = WaterAnalysisValues::default();
        values.set(ChemicalMetric::TotalDissolvedSolids, 450.0);
        let json = serde_json::to_string(&values).unwrap();
        assert_eq!(json, "{\"totalDissolvedSolids\":450.0}");
    }

    #[test]
    fn test_profile_from_str() {
        assert_eq!(
            "blood_pressure".parse::<ProfileId>().unwrap(),
            ProfileId::BloodPressure
        );
        assert!("espresso".parse::<ProfileId>().is_err());
    }

    #[test]
    fn test_profile_serde_snake_case() {
        let json = serde_json::to_string(&ProfileId::BloodPressure).unwrap();
        assert_eq!(json, "\"blood_pressure\"");
    }
}
