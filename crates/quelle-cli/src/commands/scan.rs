use quelle_core::error::QuelleError;
use quelle_core::{process_scan, ProfileId, ScanRequest, WaterAnalysisValues};
use std::path::PathBuf;

use crate::output;

pub fn run(
    input_file: Option<PathBuf>,
    text: Option<String>,
    values_file: Option<PathBuf>,
    profile: &str,
    output_format: &str,
) -> Result<(), QuelleError> {
    let profile: ProfileId = profile.parse()?;

    let overrides: Option<WaterAnalysisValues> = match values_file {
        Some(path) => {
            let json = std::fs::read_to_string(&path)?;
            Some(serde_json::from_str(&json)?)
        }
        None => None,
    };

    // With a values file the label text is optional
    let text = if input_file.is_none() && text.is_none() && overrides.is_some() {
        None
    } else {
        Some(super::read_label_text(input_file, text)?)
    };

    let request = ScanRequest {
        text,
        profile,
        values: overrides,
    };
    let outcome = process_scan(&request)?;

    match output_format {
        "json" => output::json::print(&outcome)?,
        _ => output::table::print_scan(&outcome),
    }

    Ok(())
}
