//! Plausibility checks for recognized values.
//!
//! OCR misreads produce numbers that are syntactically fine but
//! chemically absurd (a pH of 75, calcium in the thousands). Rather than
//! discarding such values, validation keeps them and attaches a warning;
//! the user decides whether to correct them. Hard schema bounds apply
//! only to values the caller supplies directly.

use crate::error::QuelleError;
use crate::model::ChemicalMetric;

/// Outcome of a single plausibility check.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationResult {
    pub valid: bool,
    pub warning: Option<String>,
}

impl ValidationResult {
    fn ok() -> Self {
        ValidationResult {
            valid: true,
            warning: None,
        }
    }
}

/// Accepted range and a human-readable description of what labels
/// typically show. Bounds are inclusive.
struct Plausible {
    min: f64,
    max: f64,
    typical: &'static str,
}

fn plausible_range(metric: ChemicalMetric) -> Option<Plausible> {
    let (min, max, typical) = match metric {
        ChemicalMetric::Ph => (4.0, 10.0, "6.5-8.5"),
        ChemicalMetric::Calcium => (0.0, 1500.0, "5-600 mg/L"),
        ChemicalMetric::Magnesium => (0.0, 200.0, "1-100 mg/L"),
        ChemicalMetric::Sodium => (0.0, 500.0, "1-200 mg/L"),
        ChemicalMetric::Potassium => (0.0, 100.0, "1-20 mg/L"),
        ChemicalMetric::Chloride => (0.0, 500.0, "1-250 mg/L"),
        ChemicalMetric::Sulfate => (0.0, 3000.0, "1-1500 mg/L"),
        ChemicalMetric::Nitrate => (0.0, 100.0, "0-50 mg/L"),
        ChemicalMetric::Bicarbonate => (0.0, 2000.0, "50-600 mg/L"),
        ChemicalMetric::TotalDissolvedSolids => (0.0, 3000.0, "50-1500 mg/L"),
        _ => return None,
    };
    Some(Plausible { min, max, typical })
}

/// Checks one value against its metric's plausible range. Metrics without
/// a range (the derived ones) always pass.
pub fn validate_value(metric: ChemicalMetric, value: f64) -> ValidationResult {
    let Some(range) = plausible_range(metric) else {
        return ValidationResult::ok();
    };
    if value >= range.min && value <= range.max {
        return ValidationResult::ok();
    }
    ValidationResult {
        valid: false,
        warning: Some(format!(
            "{}: {} liegt außerhalb des plausiblen Bereichs (typisch: {}). Bitte prüfen.",
            metric.key(),
            value,
            range.typical
        )),
    }
}

/// Hard input bounds for values supplied directly by the caller, more
/// generous than the plausible ranges. Exceeding them rejects the
/// request rather than producing a warning.
fn schema_bounds(metric: ChemicalMetric) -> Option<(f64, f64)> {
    match metric {
        ChemicalMetric::Ph => Some((0.0, 14.0)),
        ChemicalMetric::Calcium => Some((0.0, 1500.0)),
        ChemicalMetric::Magnesium => Some((0.0, 500.0)),
        ChemicalMetric::Sodium => Some((0.0, 1000.0)),
        ChemicalMetric::Potassium => Some((0.0, 500.0)),
        ChemicalMetric::Chloride => Some((0.0, 1000.0)),
        ChemicalMetric::Sulfate => Some((0.0, 3000.0)),
        ChemicalMetric::Nitrate => Some((0.0, 200.0)),
        ChemicalMetric::Bicarbonate => Some((0.0, 3000.0)),
        ChemicalMetric::TotalDissolvedSolids => Some((0.0, 5000.0)),
        _ => None,
    }
}

pub fn check_schema_bounds(metric: ChemicalMetric, value: f64) -> Result<(), QuelleError> {
    let Some((min, max)) = schema_bounds(metric) else {
        return Ok(());
    };
    if value.is_finite() && value >= min && value <= max {
        Ok(())
    } else {
        Err(QuelleError::SchemaViolation {
            metric: metric.key().to_string(),
            value,
            min,
            max,
        })
    }
}
