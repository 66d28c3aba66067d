use crate::model::{ChemicalMetric, BASE_METRICS};
use regex::Regex;
use std::sync::LazyLock;

/// Recognized label synonyms per metric, lowercase, longest variants first.
///
/// Covers German and English label wording plus ion shorthand as it appears
/// on bottle labels ("Ca2+", "Na+", "HCO3-").
pub fn synonyms_for(metric: ChemicalMetric) -> &'static [&'static str] {
    match metric {
        ChemicalMetric::Ph => &["ph-wert", "ph"],
        ChemicalMetric::Calcium => &["calcium", "kalzium", "ca2+", "ca2", "ca"],
        ChemicalMetric::Magnesium => &["magnesium", "mg2+", "mg2", "mg"],
        ChemicalMetric::Sodium => &["natrium", "sodium", "na+", "na"],
        ChemicalMetric::Potassium => &["kaliumhydrogencarbonat", "kalium", "potassium", "k+"],
        ChemicalMetric::Chloride => &["chlorid", "chloride", "cl-", "cl"],
        ChemicalMetric::Sulfate => &["sulfat", "sulphate", "sulfate", "so4"],
        ChemicalMetric::Nitrate => &["nitrat", "nitrate", "no3-", "no3"],
        ChemicalMetric::Bicarbonate => &[
            "hydrogencarbonat",
            "bicarbonat",
            "bikarbonat",
            "hco3-",
            "hco3",
        ],
        ChemicalMetric::TotalDissolvedSolids => {
            &["gesamtmineralisation", "mineralstoffgehalt", "tds"]
        }
        // Derived metrics never appear on labels.
        _ => &[],
    }
}

/// If `token` is a verbatim synonym of exactly one metric, return it.
///
/// Used to keep the fuzzy pass honest: a token that already spells out one
/// metric ("calcium") must not edit-distance-match a neighboring one
/// ("kalium" is within distance 2 of "calcium").
pub fn exact_synonym_of(token: &str) -> Option<ChemicalMetric> {
    BASE_METRICS
        .iter()
        .copied()
        .find(|&m| synonyms_for(m).contains(&token))
}

/// Legacy whole-text patterns, one per metric, applied to the raw (unsplit)
/// text for any metric the line-based pass could not resolve. Carried over
/// unchanged from the first generation of the label parser.
pub static LEGACY_PATTERNS: LazyLock<Vec<(ChemicalMetric, Regex)>> = LazyLock::new(|| {
    let table: [(ChemicalMetric, &str); 10] = [
        (
            ChemicalMetric::Ph,
            r"(?i)pH[\-Wert]*[:\s]*([0-9]+[.,]?[0-9]*)",
        ),
        (
            ChemicalMetric::Calcium,
            r"(?i)(?:Kalzium|Calcium|Ca2?\+?)[:\s]*([0-9]+[.,]?[0-9]*)",
        ),
        (
            ChemicalMetric::Magnesium,
            r"(?i)(?:Magnesium|Mg2?\+?)[:\s]*([0-9]+[.,]?[0-9]*)",
        ),
        (
            ChemicalMetric::Sodium,
            r"(?i)(?:Natrium|Sodium|Na\+?)[:\s]*([0-9]+[.,]?[0-9]*)",
        ),
        (
            ChemicalMetric::Potassium,
            r"(?i)(?:Kaliumhydrogencarbonat|Kalium|Potassium|K\+?)[:\s]*([0-9]+[.,]?[0-9]*)",
        ),
        (
            ChemicalMetric::Chloride,
            r"(?i)(?:Chlorid|Chloride|Cl-?)[:\s]*([0-9]+[.,]?[0-9]*)",
        ),
        (
            ChemicalMetric::Sulfate,
            r"(?i)(?:Sulfat|Sulphate|Sulfate|SO4)[:\s-]*([0-9]+[.,]?[0-9]*)",
        ),
        (
            ChemicalMetric::Nitrate,
            r"(?i)(?:Nitrat|Nitrate|NO3)[:\s-]*([0-9]+[.,]?[0-9]*)",
        ),
        (
            ChemicalMetric::Bicarbonate,
            r"(?i)(?:Hydrogencarbonat|Bicarbonat|Bikarbonat|HCO3)[:\s-]*([0-9]+[.,]?[0-9]*)",
        ),
        (
            ChemicalMetric::TotalDissolvedSolids,
            r"(?i)(?:Gesamtmineralisation|TDS|Mineralstoffgehalt)[:\s]*([0-9]+[.,]?[0-9]*)",
        ),
    ];

    table
        .into_iter()
        .map(|(metric, pattern)| (metric, Regex::new(pattern).expect("valid legacy pattern")))
        .collect()
});

pub fn legacy_pattern(metric: ChemicalMetric) -> Option<&'static Regex> {
    LEGACY_PATTERNS
        .iter()
        .find(|(m, _)| *m == metric)
        .map(|(_, re)| re)
}
