use quelle_core::error::QuelleError;
use quelle_core::{parse_text_to_analysis, validate_value};
use std::path::PathBuf;

use crate::output;

pub fn run(
    input_file: Option<PathBuf>,
    text: Option<String>,
    output_format: &str,
    output_file: Option<PathBuf>,
) -> Result<(), QuelleError> {
    let text = super::read_label_text(input_file, text)?;
    let values = parse_text_to_analysis(&text);

    let output_str = match output_format {
        "json" => serde_json::to_string_pretty(&values)?,
        _ => output::table::format_parsed(&values),
    };

    match output_file {
        Some(path) => {
            // Always write JSON when saving to file
            let json = serde_json::to_string_pretty(&values)?;
            std::fs::write(&path, json)?;
            eprintln!(
                "Recognized {} value(s), written to {}",
                values.present_count(),
                path.display()
            );
            for (metric, value) in values.present() {
                if let Some(warning) = validate_value(metric, value).warning {
                    eprintln!("  warning: {warning}");
                }
            }
        }
        None => {
            println!("{output_str}");
        }
    }

    Ok(())
}
