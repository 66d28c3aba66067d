use quelle_core::insights::FitStatus;
use quelle_core::model::{WaterAnalysisValues, BASE_METRICS};
use quelle_core::ScanOutcome;

pub fn format_parsed(values: &WaterAnalysisValues) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "Recognized {} of {} values:\n\n",
        values.present_count(),
        BASE_METRICS.len()
    ));
    for metric in BASE_METRICS {
        let rendered = match values.get(metric) {
            Some(v) => match metric.unit() {
                Some(unit) => format!("{v} {unit}"),
                None => format!("{v}"),
            },
            None => "-".to_string(),
        };
        out.push_str(&format!("  {:<22} {}\n", metric.label(), rendered));
    }
    out.trim_end().to_string()
}

pub fn print_scan(outcome: &ScanOutcome) {
    println!(
        "=== {} ({}) ===\n",
        outcome.profile.key(),
        outcome.profile.description()
    );
    println!("  Total score: {:.1} / 100\n", outcome.total_score);

    for m in &outcome.metric_details {
        let unit = m.metric.unit().unwrap_or("");
        println!(
            "  {:<22} {:>8} {:<5} -> {:>5.1}",
            m.metric.label(),
            m.raw_value,
            unit,
            m.score
        );
    }

    println!("\n  Derived:");
    let d = &outcome.derived;
    if let Some(hardness) = d.hardness {
        println!("  {:<22} {:.1} °dH", "Wasserhärte", hardness);
    }
    if let Some(ratio) = d.calcium_magnesium_ratio {
        println!("  {:<22} {:.2}", "Ca:Mg Verhältnis", ratio);
    }
    if let Some(ratio) = d.sodium_potassium_ratio {
        println!("  {:<22} {:.2}", "Na:K Verhältnis", ratio);
    }
    if let Some(balance) = d.taste_palatability {
        println!("  {:<22} {:.2}", "Geschmacksprofil", balance);
    }
    if let Some(buffer) = d.buffer_capacity {
        println!("  {:<22} {:.2} mVal/L", "Pufferkapazität", buffer);
    }
    println!(
        "  {:<22} {:.0} %",
        "Daten-Transparenz", d.data_quality_score
    );

    if !outcome.insights.badges.is_empty() {
        println!("\n  Badges:");
        for badge in &outcome.insights.badges {
            println!("  [{}] {}", badge.label, badge.description);
        }
    }
    if !outcome.insights.synergies.is_empty() {
        println!("\n  Synergies:");
        for synergy in &outcome.insights.synergies {
            println!("  {} – {}", synergy.title, synergy.description);
        }
    }

    if let Some(fit) = outcome.insights.profile_fit.get(&outcome.profile) {
        let status = match fit.status {
            FitStatus::Ideal => "ideal",
            FitStatus::Ok => "ok",
            FitStatus::Avoid => "avoid",
        };
        println!("\n  Profile fit: {status}");
        for reason in &fit.reasons {
            println!("    - {reason}");
        }
    }

    if let Some(warnings) = &outcome.warnings {
        println!();
        for warning in warnings {
            println!("  warning: {warning}");
        }
    }
}
