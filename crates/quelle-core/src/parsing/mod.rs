//! Label text parsing.
//!
//! Turns raw OCR output into a sparse [`WaterAnalysisValues`]. Extraction
//! is best effort and never fails: anything unreadable simply stays
//! absent. Two passes per metric, in a fixed metric order:
//!
//! 1. line-based fuzzy matching (synonym substring or bounded edit
//!    distance per token), taking the first number after the label on
//!    the same line, or on the following line when the label stands
//!    alone, and
//! 2. a legacy whole-text regex fallback for metrics pass one missed.

mod fuzzy;
mod numbers;
mod synonyms;

pub use fuzzy::{levenshtein, match_line, normalize_line};
pub use numbers::extract_number;
pub use synonyms::{legacy_pattern, synonyms_for};

use crate::model::{ChemicalMetric, WaterAnalysisValues, BASE_METRICS};
use tracing::{debug, trace};

/// Parses free-form label text into whatever values can be recognized.
pub fn parse_text_to_analysis(text: &str) -> WaterAnalysisValues {
    let lines: Vec<String> = text
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(normalize_line)
        .collect();

    let mut values = WaterAnalysisValues::default();
    for metric in BASE_METRICS {
        let value = resolve_fuzzy(&lines, metric).or_else(|| resolve_legacy(text, metric));
        if let Some(v) = value {
            trace!(metric = %metric, value = v, "label value recognized");
            values.set(metric, v);
        }
    }

    debug!(
        recognized = values.present_count(),
        lines = lines.len(),
        "label text parsed"
    );
    values
}

/// Pass one: scan normalized lines in order; the first line matching the
/// metric's label that yields a number wins.
///
/// The number is taken from the matched line after the label. When the
/// label stands on a line without any number at all (OCR splitting a
/// label/value pair), the following line is consulted instead. A matched
/// line that carries a number elsewhere, such as a unit token firing in
/// "calcium: 80 mg/l", is treated as a miss.
fn resolve_fuzzy(lines: &[String], metric: ChemicalMetric) -> Option<f64> {
    for (i, line) in lines.iter().enumerate() {
        let Some(end) = match_line(line, metric) else {
            continue;
        };
        if let Some(v) = extract_number(line, end) {
            return Some(v);
        }
        if extract_number(line, 0).is_none() {
            if let Some(v) = lines.get(i + 1).and_then(|next| extract_number(next, 0)) {
                return Some(v);
            }
        }
    }
    None
}

/// Pass two: the legacy single-regex-per-metric match over the whole raw
/// text, kept for layouts the line scanner cannot handle.
fn resolve_legacy(text: &str, metric: ChemicalMetric) -> Option<f64> {
    let re = legacy_pattern(metric)?;
    let caps = re.captures(text)?;
    let value: f64 = caps.get(1)?.as_str().replace(',', ".").parse().ok()?;
    value.is_finite().then_some(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typical_german_label() {
        let text = "Mineralwasser Analyse\n\
                    Calcium: 80 mg/l\n\
                    Magnesium: 25 mg/l\n\
                    Natrium: 15 mg/l\n\
                    Hydrogencarbonat: 240 mg/l\n\
                    pH-Wert: 7,3";
        let values = parse_text_to_analysis(text);
        assert_eq!(values.calcium, Some(80.0));
        assert_eq!(values.magnesium, Some(25.0));
        assert_eq!(values.sodium, Some(15.0));
        assert_eq!(values.bicarbonate, Some(240.0));
        assert_eq!(values.ph, Some(7.3));
        assert_eq!(values.potassium, None);
    }

    #[test]
    fn test_every_synonym_resolves_with_a_number() {
        for metric in BASE_METRICS {
            for syn in synonyms_for(metric) {
                let text = format!("{syn}: 42");
                let values = parse_text_to_analysis(&text);
                assert_eq!(values.get(metric), Some(42.0), "{metric}: {syn:?}");
            }
        }
    }

    #[test]
    fn test_whitespace_around_separator() {
        let values = parse_text_to_analysis("pH    :    7.5");
        assert_eq!(values.ph, Some(7.5));
    }

    #[test]
    fn test_label_and_value_on_separate_lines() {
        let values = parse_text_to_analysis("Magnesium\n25,5 mg/l");
        assert_eq!(values.magnesium, Some(25.5));
    }

    #[test]
    fn test_values_on_shared_line_stay_apart() {
        let values = parse_text_to_analysis("pH: 7.5 Calcium: 80");
        assert_eq!(values.ph, Some(7.5));
        assert_eq!(values.calcium, Some(80.0));
        assert_eq!(values.magnesium, None);
        assert_eq!(values.sodium, None);
    }

    #[test]
    fn test_unit_token_does_not_steal_next_line() {
        // "mg" in "mg/l" matches the magnesium shorthand, but the line
        // already carries calcium's number; the scan must not fall
        // through to natrium's line.
        let values = parse_text_to_analysis("Calcium: 80 mg/l\nNatrium: 15 mg/l");
        assert_eq!(values.calcium, Some(80.0));
        assert_eq!(values.sodium, Some(15.0));
        assert_eq!(values.magnesium, None);
    }

    #[test]
    fn test_legacy_fallback_handles_wide_numbers() {
        // five digits overflow the line scanner's number pattern
        let values = parse_text_to_analysis("Gesamtmineralisation: 12500");
        assert_eq!(values.total_dissolved_solids, Some(12500.0));
    }

    #[test]
    fn test_random_text_yields_nothing() {
        let values = parse_text_to_analysis("This is random text");
        assert!(values.is_empty());
    }

    #[test]
    fn test_empty_input() {
        assert!(parse_text_to_analysis("").is_empty());
    }
}
