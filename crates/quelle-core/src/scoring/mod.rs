//! Profile-based suitability scoring.
//!
//! Every present metric with a target range gets a 0-100 band score; the
//! total is their plain mean. A result built from three or fewer values
//! says very little, so its total is capped at [`SPARSE_DATA_CAP`].

mod targets;

pub use targets::{target_range, targets, TargetRange};

use crate::model::{MetricScoreResult, ProfileId, ScoreResult, WaterAnalysisValues};
use tracing::debug;

/// Ceiling for the total score when fewer than [`MIN_CONFIDENT_VALUES`]
/// metrics are present.
pub const SPARSE_DATA_CAP: f64 = 60.0;

/// Smallest number of present values that earns an uncapped total.
pub const MIN_CONFIDENT_VALUES: usize = 4;

/// Trapezoid band score: 100 inside the optimal band, a linear ramp
/// through the transition bands, 0 outside the acceptable range.
pub fn band_score(value: f64, range: &TargetRange) -> f64 {
    if value < range.min || value > range.max {
        return 0.0;
    }
    if value >= range.optimal_min && value <= range.optimal_max {
        return 100.0;
    }
    if value < range.optimal_min {
        let span = range.optimal_min - range.min;
        if span <= 0.0 {
            return 100.0;
        }
        return (value - range.min) / span * 100.0;
    }
    let span = range.max - range.optimal_max;
    if span <= 0.0 {
        return 100.0;
    }
    (range.max - value) / span * 100.0
}

/// Scores all present metrics against the profile's targets.
///
/// Metrics without a value and metrics without a target (pH, total
/// mineralization) are skipped. With nothing to score the total is 0.
pub fn calculate_scores(values: &WaterAnalysisValues, profile: ProfileId) -> ScoreResult {
    let mut metrics = Vec::new();
    for (metric, range) in targets(profile) {
        let Some(value) = values.get(*metric) else {
            continue;
        };
        metrics.push(MetricScoreResult {
            metric: *metric,
            score: band_score(value, range),
            raw_value: value,
        });
    }

    let mut total = if metrics.is_empty() {
        0.0
    } else {
        metrics.iter().map(|m| m.score).sum::<f64>() / metrics.len() as f64
    };

    if values.present_count() < MIN_CONFIDENT_VALUES {
        total = total.min(SPARSE_DATA_CAP);
    }
    total = total.clamp(0.0, 100.0);

    debug!(
        profile = %profile,
        total = total,
        scored = metrics.len(),
        "score calculated"
    );

    ScoreResult {
        total_score: total,
        metrics,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ChemicalMetric;

    fn full_analysis() -> WaterAnalysisValues {
        WaterAnalysisValues {
            ph: Some(7.2),
            calcium: Some(100.0),
            magnesium: Some(40.0),
            sodium: Some(20.0),
            potassium: Some(4.0),
            chloride: Some(30.0),
            sulfate: Some(50.0),
            nitrate: Some(5.0),
            bicarbonate: Some(250.0),
            total_dissolved_solids: Some(500.0),
        }
    }

    #[test]
    fn test_band_score_shape() {
        let r = TargetRange {
            min: 40.0,
            max: 200.0,
            optimal_min: 60.0,
            optimal_max: 160.0,
        };
        assert_eq!(band_score(100.0, &r), 100.0);
        assert_eq!(band_score(60.0, &r), 100.0);
        assert_eq!(band_score(160.0, &r), 100.0);
        assert_eq!(band_score(50.0, &r), 50.0);
        assert_eq!(band_score(180.0, &r), 50.0);
        assert_eq!(band_score(40.0, &r), 0.0);
        assert_eq!(band_score(39.9, &r), 0.0);
        assert_eq!(band_score(200.1, &r), 0.0);
    }

    #[test]
    fn test_band_score_zero_width_transition() {
        // acceptable and optimal minima coincide
        let r = TargetRange {
            min: 0.0,
            max: 100.0,
            optimal_min: 0.0,
            optimal_max: 50.0,
        };
        assert_eq!(band_score(0.0, &r), 100.0);
    }

    #[test]
    fn test_ideal_water_scores_high() {
        let result = calculate_scores(&full_analysis(), ProfileId::Standard);
        assert!(result.total_score > 95.0, "{}", result.total_score);
        assert_eq!(result.metrics.len(), 8);
    }

    #[test]
    fn test_missing_metrics_are_skipped() {
        let values = WaterAnalysisValues {
            calcium: Some(100.0),
            magnesium: Some(40.0),
            sodium: Some(20.0),
            bicarbonate: Some(250.0),
            ..Default::default()
        };
        let result = calculate_scores(&values, ProfileId::Standard);
        assert_eq!(result.metrics.len(), 4);
        assert!(result
            .metrics
            .iter()
            .all(|m| m.metric != ChemicalMetric::Nitrate));
    }

    #[test]
    fn test_sparse_data_caps_total() {
        let values = WaterAnalysisValues {
            calcium: Some(100.0),
            magnesium: Some(40.0),
            bicarbonate: Some(250.0),
            ..Default::default()
        };
        // three perfect values, capped anyway
        let result = calculate_scores(&values, ProfileId::Standard);
        assert_eq!(result.total_score, SPARSE_DATA_CAP);
    }

    #[test]
    fn test_four_values_escape_the_cap() {
        let values = WaterAnalysisValues {
            calcium: Some(100.0),
            magnesium: Some(40.0),
            sodium: Some(20.0),
            bicarbonate: Some(250.0),
            ..Default::default()
        };
        let result = calculate_scores(&values, ProfileId::Standard);
        assert_eq!(result.total_score, 100.0);
    }

    #[test]
    fn test_empty_analysis_scores_zero() {
        let result = calculate_scores(&WaterAnalysisValues::default(), ProfileId::Standard);
        assert_eq!(result.total_score, 0.0);
        assert!(result.metrics.is_empty());
    }

    #[test]
    fn test_profiles_disagree() {
        // sodium-rich water suits sport, not a low-sodium diet
        let values = WaterAnalysisValues {
            calcium: Some(200.0),
            magnesium: Some(100.0),
            sodium: Some(120.0),
            potassium: Some(15.0),
            bicarbonate: Some(1000.0),
            ..Default::default()
        };
        let sport = calculate_scores(&values, ProfileId::Sport);
        let bp = calculate_scores(&values, ProfileId::BloodPressure);
        assert!(sport.total_score > bp.total_score);
    }
}
