//! Qualitative insights derived from an analysis: regulatory label
//! badges, mineral synergy notes and a per-profile fit verdict.
//!
//! Everything here is rule-based and independent of the numeric score;
//! badges follow the German Mineral- und Tafelwasserverordnung claim
//! thresholds.

use crate::model::{ProfileId, WaterAnalysisValues, ALL_PROFILES};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Positive,
    Info,
    Warning,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FitStatus {
    Ideal,
    Ok,
    Avoid,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InsightBadge {
    pub id: &'static str,
    pub label: &'static str,
    pub description: &'static str,
    pub tone: Tone,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SynergyInsight {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub tone: Tone,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileFit {
    pub status: FitStatus,
    pub reasons: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WaterInsights {
    pub badges: Vec<InsightBadge>,
    pub synergies: Vec<SynergyInsight>,
    pub profile_fit: BTreeMap<ProfileId, ProfileFit>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calcium_magnesium_ratio: Option<f64>,
}

struct ThresholdRule {
    id: &'static str,
    label: &'static str,
    description: &'static str,
    tone: Tone,
    value: fn(&WaterAnalysisValues) -> Option<f64>,
    min: Option<f64>,
    max: Option<f64>,
}

/// Badge thresholds follow the label claims of the Min/TafelWV.
const REGULATORY_RULES: [ThresholdRule; 7] = [
    ThresholdRule {
        id: "calcium_high",
        label: "Calciumhaltig",
        description: "Mehr als 150 mg/L Calcium – entspricht der Min/TafelWV.",
        tone: Tone::Positive,
        value: |v| v.calcium,
        min: Some(150.0),
        max: None,
    },
    ThresholdRule {
        id: "magnesium_high",
        label: "Magnesiumhaltig",
        description: "Mehr als 50 mg/L Magnesium – deckt ein gutes Stück des Tagesbedarfs.",
        tone: Tone::Positive,
        value: |v| v.magnesium,
        min: Some(50.0),
        max: None,
    },
    ThresholdRule {
        id: "bicarbonate_high",
        label: "Hydrogencarbonatreich",
        description: "Über 600 mg/L Hydrogencarbonat – starker Säurepuffer.",
        tone: Tone::Positive,
        value: |v| v.bicarbonate,
        min: Some(600.0),
        max: None,
    },
    ThresholdRule {
        id: "bicarbonate_heal",
        label: "Heilwasser-Puffer",
        description: "Über 1300 mg/L Hydrogencarbonat – klinische Evidenz bei Sodbrennen.",
        tone: Tone::Positive,
        value: |v| v.bicarbonate,
        min: Some(1300.0),
        max: None,
    },
    ThresholdRule {
        id: "sulfate_high",
        label: "Sulfathaltig",
        description: "Mehr als 200 mg/L Sulfat – traditionell verdauungsfördernd.",
        tone: Tone::Info,
        value: |v| v.sulfate,
        min: Some(200.0),
        max: None,
    },
    ThresholdRule {
        id: "sodium_low",
        label: "Natriumarm",
        description: "Weniger als 20 mg/L Natrium – ideal für Babynahrung & Blutdruck.",
        tone: Tone::Positive,
        value: |v| v.sodium,
        min: None,
        max: Some(20.0),
    },
    ThresholdRule {
        id: "sodium_high",
        label: "Natriumhaltig",
        description: "Mehr als 200 mg/L Natrium – sportlicher Elektrolytboost.",
        tone: Tone::Info,
        value: |v| v.sodium,
        min: Some(200.0),
        max: None,
    },
];

fn regulatory_badges(values: &WaterAnalysisValues) -> Vec<InsightBadge> {
    let mut badges = Vec::new();
    for rule in &REGULATORY_RULES {
        let Some(value) = (rule.value)(values) else {
            continue;
        };
        if rule.min.is_some_and(|min| value < min) {
            continue;
        }
        if rule.max.is_some_and(|max| value > max) {
            continue;
        }
        badges.push(InsightBadge {
            id: rule.id,
            label: rule.label,
            description: rule.description,
            tone: rule.tone,
        });
    }
    badges
}

fn calcium_magnesium_synergy(values: &WaterAnalysisValues) -> Option<SynergyInsight> {
    let ca = values.calcium?;
    let mg = values.magnesium?;
    if mg == 0.0 {
        return None;
    }
    let ratio = ca / mg;
    if (1.6..=2.4).contains(&ratio) {
        return Some(SynergyInsight {
            id: "ca-mg-balanced",
            title: "Ausgewogenes Cal/Mg Verhältnis",
            description: "Das Verhältnis von Calcium zu Magnesium liegt nahe 2:1 – das gilt als \
                          günstig für Herz-Kreislauf und Muskelarbeit.",
            tone: Tone::Positive,
        });
    }
    if ratio < 1.3 {
        return Some(SynergyInsight {
            id: "ca-mg-mag-high",
            title: "Magnesium dominiert",
            description: "Deutlich mehr Magnesium als Calcium – sehr mineralreich, kann \
                          geschmacklich intensiver wirken.",
            tone: Tone::Info,
        });
    }
    if ratio > 3.0 {
        return Some(SynergyInsight {
            id: "ca-mg-calcium-heavy",
            title: "Calciumbetont",
            description: "Calcium überwiegt stark gegenüber Magnesium. Kombiniere das Wasser mit \
                          magnesiumreichen Quellen, wenn du Herz/Kreislauf unterstützen möchtest.",
            tone: Tone::Warning,
        });
    }
    None
}

fn kidney_balance_synergy(values: &WaterAnalysisValues) -> Option<SynergyInsight> {
    let ca = values.calcium.unwrap_or(0.0);
    let mg = values.magnesium.unwrap_or(0.0);
    let hco3 = values.bicarbonate.unwrap_or(0.0);

    if ca >= 150.0 && mg >= 70.0 && hco3 >= 1300.0 {
        return Some(SynergyInsight {
            id: "kidney-balance",
            title: "Nierenstein-Schutzprofil",
            description: "Trotz hohem Calcium sorgen Magnesium und Hydrogencarbonat für \
                          natürliche Inhibitoren (zitratfördernd, Alkalisierung). Geeignet bei \
                          Calciumoxalat-Risiko.",
            tone: Tone::Positive,
        });
    }
    if ca >= 150.0 && mg < 30.0 {
        return Some(SynergyInsight {
            id: "kidney-risk",
            title: "Calciumreich ohne Gegenspieler",
            description: "Hoher Calciumwert bei wenig Magnesium. Bei Nierensteinrisiko lieber \
                          ein Wasser mit mehr Magnesium/HCO₃⁻ wählen.",
            tone: Tone::Warning,
        });
    }
    None
}

fn reflux_synergy(values: &WaterAnalysisValues) -> Option<SynergyInsight> {
    let hco3 = values.bicarbonate.unwrap_or(0.0);
    if hco3 >= 1300.0 {
        return Some(SynergyInsight {
            id: "sodbrennen",
            title: "Säurepuffer (klinisch belegt)",
            description: "Über 1300 mg/L Hydrogencarbonat – Studien zeigen klare Vorteile bei \
                          Sodbrennen.",
            tone: Tone::Positive,
        });
    }
    if hco3 >= 600.0 {
        return Some(SynergyInsight {
            id: "magenfreundlich",
            title: "Magenfreundliches Wasser",
            description: "Hoher Hydrogencarbonatwert unterstützt die Neutralisation von Säuren – \
                          gut zur Regeneration nach Sport oder schwerem Essen.",
            tone: Tone::Info,
        });
    }
    None
}

fn electrolyte_synergy(values: &WaterAnalysisValues) -> Option<SynergyInsight> {
    let mg = values.magnesium.unwrap_or(0.0);
    let na = values.sodium.unwrap_or(0.0);
    if mg >= 50.0 && na >= 50.0 {
        return Some(SynergyInsight {
            id: "electrolyte-boost",
            title: "Elektrolyt-Boost",
            description: "Magnesiumreich mit messbarem Natrium – ideal, um nach dem Training \
                          Mineralverluste zu kompensieren.",
            tone: Tone::Positive,
        });
    }
    if mg >= 50.0 {
        return Some(SynergyInsight {
            id: "magnesium-power",
            title: "Magnesiumfokus",
            description: "Mehr als 50 mg/L Magnesium – deckt schnell den Muskelbedarf.",
            tone: Tone::Info,
        });
    }
    None
}

fn baby_fit(values: &WaterAnalysisValues) -> ProfileFit {
    let na = values.sodium;
    let no3 = values.nitrate;

    if let (Some(na), Some(no3)) = (na, no3) {
        if na < 20.0 && no3 < 10.0 {
            return ProfileFit {
                status: FitStatus::Ideal,
                reasons: vec![
                    "Sehr natriumarm (<20 mg/L)".into(),
                    "Sehr niedriger Nitratwert (<10 mg/L)".into(),
                ],
            };
        }
        if na < 50.0 && no3 < 25.0 {
            return ProfileFit {
                status: FitStatus::Ok,
                reasons: vec![
                    "Akzeptabel für Babynahrung (unter 50 mg/L Na, unter 25 mg/L Nitrat)".into(),
                ],
            };
        }
    }

    let mut reasons = Vec::new();
    if na.is_some_and(|na| na >= 50.0) {
        reasons.push("Natrium zu hoch für Babynutzung (>50 mg/L).".into());
    }
    if no3.is_some_and(|no3| no3 >= 25.0) {
        reasons.push("Nitrat oberhalb der Baby-Empfehlung (>25 mg/L).".into());
    }
    if reasons.is_empty() {
        reasons.push("Keine verlässlichen Werte für Babys.".into());
    }
    ProfileFit {
        status: FitStatus::Avoid,
        reasons,
    }
}

fn sport_fit(values: &WaterAnalysisValues) -> ProfileFit {
    let mg = values.magnesium;
    let hco3 = values.bicarbonate;

    if mg.is_some_and(|v| v >= 50.0) || hco3.is_some_and(|v| v >= 600.0) {
        let mut reasons = Vec::new();
        if mg.is_some_and(|v| v >= 50.0) {
            reasons.push("Magnesiumhaltig (>50 mg/L).".into());
        }
        if hco3.is_some_and(|v| v >= 600.0) {
            reasons.push("Hydrogencarbonatreich (>600 mg/L) – Säurepuffer.".into());
        }
        return ProfileFit {
            status: FitStatus::Ideal,
            reasons,
        };
    }
    if mg.is_some_and(|v| v >= 20.0) || hco3.is_some_and(|v| v >= 300.0) {
        return ProfileFit {
            status: FitStatus::Ok,
            reasons: vec!["Moderate Mineralisierung – kombinierbar mit anderen Quellen.".into()],
        };
    }
    ProfileFit {
        status: FitStatus::Avoid,
        reasons: vec!["Sehr niedrige Mineralisierung – kaum Mehrwert nach dem Training.".into()],
    }
}

fn blood_pressure_fit(values: &WaterAnalysisValues) -> ProfileFit {
    match values.sodium {
        Some(na) if na < 20.0 => ProfileFit {
            status: FitStatus::Ideal,
            reasons: vec!["Natriumarm (<20 mg/L).".into()],
        },
        Some(na) if na < 50.0 => ProfileFit {
            status: FitStatus::Ok,
            reasons: vec!["Moderater Natriumwert (<50 mg/L).".into()],
        },
        _ => ProfileFit {
            status: FitStatus::Avoid,
            reasons: vec!["Natriumreich (>50 mg/L) – nicht optimal bei Hypertonie.".into()],
        },
    }
}

fn coffee_fit(values: &WaterAnalysisValues) -> ProfileFit {
    let ca = values.calcium;
    let hco3 = values.bicarbonate;

    if ca.is_some_and(|v| (50.0..=90.0).contains(&v)) && hco3.is_some_and(|v| v <= 120.0) {
        return ProfileFit {
            status: FitStatus::Ideal,
            reasons: vec![
                "Moderate Härte (50-90 mg/L Calcium).".into(),
                "Geringe Pufferung (<120 mg/L Hydrogencarbonat) – klare Extraktion.".into(),
            ],
        };
    }
    if ca.is_some_and(|v| v <= 120.0) && hco3.is_some_and(|v| v <= 200.0) {
        return ProfileFit {
            status: FitStatus::Ok,
            reasons: vec!["Brauchbar für Kaffee, Extraktion leicht gedämpft.".into()],
        };
    }
    ProfileFit {
        status: FitStatus::Avoid,
        reasons: vec!["Zu hart oder zu stark gepuffert für gute Extraktion.".into()],
    }
}

fn kidney_fit(values: &WaterAnalysisValues) -> ProfileFit {
    let ca = values.calcium;
    let na = values.sodium;

    if ca.is_some_and(|v| v <= 50.0) && na.is_some_and(|v| v <= 10.0) {
        return ProfileFit {
            status: FitStatus::Ideal,
            reasons: vec!["Sehr mineralarm – geringe Steinbildungslast.".into()],
        };
    }
    if ca.is_some_and(|v| v <= 80.0) && na.is_some_and(|v| v <= 20.0) {
        return ProfileFit {
            status: FitStatus::Ok,
            reasons: vec!["Niedrige Mineralisierung, in Maßen geeignet.".into()],
        };
    }
    ProfileFit {
        status: FitStatus::Avoid,
        reasons: vec!["Mineralisierung zu hoch bei Nierensteinrisiko.".into()],
    }
}

/// Derives all insights from an analysis; purely rule-based, never fails.
pub fn derive_insights(values: &WaterAnalysisValues) -> WaterInsights {
    let badges = regulatory_badges(values);

    let synergies: Vec<SynergyInsight> = [
        calcium_magnesium_synergy(values),
        kidney_balance_synergy(values),
        reflux_synergy(values),
        electrolyte_synergy(values),
    ]
    .into_iter()
    .flatten()
    .collect();

    let mut profile_fit = BTreeMap::new();
    for profile in ALL_PROFILES {
        let fit = match profile {
            ProfileId::Standard => ProfileFit {
                status: FitStatus::Ok,
                reasons: Vec::new(),
            },
            ProfileId::Baby => baby_fit(values),
            ProfileId::Sport => sport_fit(values),
            ProfileId::BloodPressure => blood_pressure_fit(values),
            ProfileId::Coffee => coffee_fit(values),
            ProfileId::Kidney => kidney_fit(values),
        };
        profile_fit.insert(profile, fit);
    }

    let calcium_magnesium_ratio = match (values.calcium, values.magnesium) {
        (Some(ca), Some(mg)) if mg != 0.0 => Some(ca / mg),
        _ => None,
    };

    WaterInsights {
        badges,
        synergies,
        profile_fit,
        calcium_magnesium_ratio,
    }
}
