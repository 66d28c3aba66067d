use quelle_core::error::QuelleError;
use quelle_core::scoring::targets;
use quelle_core::{ProfileId, ALL_PROFILES};

pub fn list() -> Result<(), QuelleError> {
    println!("Available profiles:\n");
    for profile in ALL_PROFILES {
        println!("  {:<16} {}", profile.key(), profile.description());
    }
    Ok(())
}

pub fn show(profile: &str) -> Result<(), QuelleError> {
    let profile: ProfileId = profile.parse()?;

    println!("{} — {}\n", profile.key(), profile.description());
    println!(
        "  {:<14} {:>7} {:>7} {:>9} {:>9}",
        "metric", "min", "max", "opt. min", "opt. max"
    );
    for (metric, range) in targets(profile) {
        println!(
            "  {:<14} {:>7} {:>7} {:>9} {:>9}",
            metric.key(),
            range.min,
            range.max,
            range.optimal_min,
            range.optimal_max
        );
    }
    println!("\nValues in mg/L; pH and total mineralization are not scored.");
    Ok(())
}
