//! End-to-end tests of the scan pipeline.

use quelle_core::{
    process_scan, ProfileId, QuelleError, ScanRequest, WaterAnalysisValues, MAX_TEXT_LEN,
};

const GERMAN_LABEL: &str = "\
Natürliches Mineralwasser
Calcium: 80 mg/l
Magnesium: 25 mg/l
Natrium: 15 mg/l
Kalium: 2,1 mg/l
Chlorid: 12 mg/l
Sulfat: 38 mg/l
Nitrat: 4,5 mg/l
Hydrogencarbonat: 244 mg/l
pH-Wert: 7,3
Gesamtmineralisation: 485 mg/l";

fn scan_text(text: &str, profile: ProfileId) -> ScanRequest {
    ScanRequest {
        text: Some(text.to_string()),
        profile,
        values: None,
    }
}

#[test]
fn test_full_label_scan() {
    let outcome = process_scan(&scan_text(GERMAN_LABEL, ProfileId::Standard)).unwrap();

    assert_eq!(outcome.values.calcium, Some(80.0));
    assert_eq!(outcome.values.magnesium, Some(25.0));
    assert_eq!(outcome.values.sodium, Some(15.0));
    assert_eq!(outcome.values.potassium, Some(2.1));
    assert_eq!(outcome.values.chloride, Some(12.0));
    assert_eq!(outcome.values.sulfate, Some(38.0));
    assert_eq!(outcome.values.nitrate, Some(4.5));
    assert_eq!(outcome.values.bicarbonate, Some(244.0));
    assert_eq!(outcome.values.ph, Some(7.3));
    assert_eq!(outcome.values.total_dissolved_solids, Some(485.0));

    assert!(outcome.total_score > 90.0, "{}", outcome.total_score);
    assert_eq!(outcome.metric_details.len(), 8);
    assert!(outcome.warnings.is_none());
    assert_eq!(outcome.derived.data_quality_score, 100.0);
}

#[test]
fn test_scan_is_deterministic() {
    let request = scan_text(GERMAN_LABEL, ProfileId::Baby);
    let a = process_scan(&request).unwrap();
    let b = process_scan(&request).unwrap();
    assert_eq!(a.total_score, b.total_score);
    assert_eq!(a.values, b.values);
}

#[test]
fn test_overrides_win_over_parsed_text() {
    let mut request = scan_text("Calcium: 80 mg/l\nMagnesium: 25 mg/l", ProfileId::Standard);
    request.values = Some(WaterAnalysisValues {
        calcium: Some(95.0),
        ..Default::default()
    });

    let outcome = process_scan(&request).unwrap();
    assert_eq!(outcome.ocr_parsed_values.calcium, Some(80.0));
    assert_eq!(outcome.values.calcium, Some(95.0));
    assert_eq!(outcome.values.magnesium, Some(25.0));
}

#[test]
fn test_values_only_scan_needs_no_text() {
    let request = ScanRequest {
        text: None,
        profile: ProfileId::BloodPressure,
        values: Some(WaterAnalysisValues {
            calcium: Some(60.0),
            magnesium: Some(20.0),
            sodium: Some(10.0),
            bicarbonate: Some(200.0),
            ..Default::default()
        }),
    };
    let outcome = process_scan(&request).unwrap();
    assert!(outcome.ocr_parsed_values.is_empty());
    assert_eq!(outcome.values.sodium, Some(10.0));
    assert!(outcome.total_score > 60.0);
}

#[test]
fn test_unreadable_text_is_an_error() {
    let err = process_scan(&scan_text("This is random text", ProfileId::Standard)).unwrap_err();
    assert!(matches!(err, QuelleError::NoValuesDetected));
}

#[test]
fn test_oversized_text_is_rejected() {
    let text = "x".repeat(MAX_TEXT_LEN + 1);
    let err = process_scan(&scan_text(&text, ProfileId::Standard)).unwrap_err();
    assert!(matches!(err, QuelleError::TextTooLong { .. }));
}

#[test]
fn test_out_of_schema_override_is_rejected() {
    let request = ScanRequest {
        text: None,
        profile: ProfileId::Standard,
        values: Some(WaterAnalysisValues {
            ph: Some(15.0),
            ..Default::default()
        }),
    };
    let err = process_scan(&request).unwrap_err();
    assert!(matches!(err, QuelleError::SchemaViolation { .. }));
}

#[test]
fn test_implausible_value_warns_but_scores() {
    // OCR misread a decimal point: pH 73 instead of 7.3
    let outcome = process_scan(&scan_text(
        "Calcium: 80\nMagnesium: 25\nNatrium: 15\npH: 73",
        ProfileId::Standard,
    ))
    .unwrap();

    assert_eq!(outcome.values.ph, Some(73.0));
    let warnings = outcome.warnings.unwrap();
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].contains("ph"));
    assert!(warnings[0].contains("Bitte prüfen"));
}

#[test]
fn test_sparse_result_is_capped() {
    // two perfectly placed values cannot earn more than 60 points
    let outcome = process_scan(&scan_text(
        "Calcium: 100 mg/l\nMagnesium: 40 mg/l",
        ProfileId::Standard,
    ))
    .unwrap();
    assert_eq!(outcome.total_score, 60.0);
}

#[test]
fn test_profile_changes_the_verdict() {
    let sporty = "Calcium: 200\nMagnesium: 100\nNatrium: 120\nKalium: 15\nHydrogencarbonat: 1000";
    let sport = process_scan(&scan_text(sporty, ProfileId::Sport)).unwrap();
    let baby = process_scan(&scan_text(sporty, ProfileId::Baby)).unwrap();
    assert!(sport.total_score > baby.total_score);
}

#[test]
fn test_outcome_serializes_with_wire_names() {
    let outcome = process_scan(&scan_text(GERMAN_LABEL, ProfileId::Standard)).unwrap();
    let json = serde_json::to_value(&outcome).unwrap();

    assert_eq!(json["profile"], "standard");
    assert!(json["totalScore"].is_number());
    assert!(json["ocrParsedValues"]["calcium"].is_number());
    assert!(json["metricDetails"].is_array());
    assert!(json["values"]["totalDissolvedSolids"].is_number());
    assert!(json["derived"]["hardness"].is_number());
    assert!(json["insights"]["profileFit"]["blood_pressure"].is_object());
    assert!(json.get("warnings").is_none());
}

#[test]
fn test_insights_reflect_the_analysis() {
    let outcome = process_scan(&scan_text(GERMAN_LABEL, ProfileId::Standard)).unwrap();
    // 15 mg/L sodium earns the low-sodium label claim
    assert!(outcome.insights.badges.iter().any(|b| b.id == "sodium_low"));
    // 80/25 sits above the balanced 2:1 band
    assert_eq!(outcome.insights.calcium_magnesium_ratio, Some(3.2));
}
