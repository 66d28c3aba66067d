use quelle_core::error::QuelleError;
use quelle_core::ScanOutcome;

pub fn print(outcome: &ScanOutcome) -> Result<(), QuelleError> {
    let json = serde_json::to_string_pretty(outcome)?;
    println!("{json}");
    Ok(())
}
