//! quelle-core — mineral water label analysis.
//!
//! Takes OCR text from a bottle label and/or directly supplied values,
//! recognizes the chemical analysis, checks its plausibility and scores
//! the water against a consumer profile. The full pipeline lives in
//! [`process_scan`]; the individual stages are public for callers that
//! only need parsing or scoring.

pub mod derived;
pub mod error;
pub mod insights;
pub mod model;
pub mod parsing;
pub mod scoring;
pub mod validate;

pub use derived::DerivedMetrics;
pub use error::QuelleError;
pub use insights::{derive_insights, WaterInsights};
pub use model::{
    ChemicalMetric, MetricScoreResult, ProfileId, ScoreResult, WaterAnalysisValues, ALL_PROFILES,
    BASE_METRICS,
};
pub use parsing::parse_text_to_analysis;
pub use scoring::calculate_scores;
pub use validate::{check_schema_bounds, validate_value, ValidationResult};

use serde::{Deserialize, Serialize};
use tracing::info;

/// Longest accepted label text, in characters.
pub const MAX_TEXT_LEN: usize = 5000;

/// One scan: label text, a profile to score against, and optional values
/// that override whatever the text yields.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanRequest {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub profile: ProfileId,
    #[serde(default)]
    pub values: Option<WaterAnalysisValues>,
}

/// Everything a scan produces.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanOutcome {
    pub profile: ProfileId,
    /// Values as recognized from the label text, before overrides.
    pub ocr_parsed_values: WaterAnalysisValues,
    /// Values the caller supplied directly, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_overrides: Option<WaterAnalysisValues>,
    /// The analysis that was scored: parsed values with overrides applied.
    pub values: WaterAnalysisValues,
    pub total_score: f64,
    pub metric_details: Vec<MetricScoreResult>,
    pub derived: DerivedMetrics,
    pub insights: WaterInsights,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warnings: Option<Vec<String>>,
}

/// Runs the full pipeline: parse, merge, validate, score, derive.
///
/// Directly supplied values are checked against hard schema bounds and
/// take precedence over parsed ones. Implausible values stay in the
/// result and only produce warnings. Fails when the text exceeds
/// [`MAX_TEXT_LEN`] or when neither text nor values yield a single
/// metric.
pub fn process_scan(request: &ScanRequest) -> Result<ScanOutcome, QuelleError> {
    if let Some(text) = &request.text {
        let len = text.chars().count();
        if len > MAX_TEXT_LEN {
            return Err(QuelleError::TextTooLong {
                len,
                max: MAX_TEXT_LEN,
            });
        }
    }
    if let Some(overrides) = &request.values {
        for (metric, value) in overrides.present() {
            check_schema_bounds(metric, value)?;
        }
    }

    let parsed_values = request
        .text
        .as_deref()
        .map(parse_text_to_analysis)
        .unwrap_or_default();

    let values = match &request.values {
        Some(overrides) => parsed_values.merged(overrides),
        None => parsed_values,
    };
    if values.is_empty() {
        return Err(QuelleError::NoValuesDetected);
    }

    let mut warnings = Vec::new();
    for (metric, value) in values.present() {
        if let Some(warning) = validate_value(metric, value).warning {
            warnings.push(warning);
        }
    }

    let score = calculate_scores(&values, request.profile);
    let derived = DerivedMetrics::compute(&values);
    let insights = derive_insights(&values);

    info!(
        profile = %request.profile,
        total = score.total_score,
        recognized = values.present_count(),
        warnings = warnings.len(),
        "scan processed"
    );

    Ok(ScanOutcome {
        profile: request.profile,
        ocr_parsed_values: parsed_values,
        user_overrides: request.values.clone(),
        values,
        total_score: score.total_score,
        metric_details: score.metrics,
        derived,
        insights,
        warnings: (!warnings.is_empty()).then_some(warnings),
    })
}
