//! Per-profile target ranges.
//!
//! Each profile defines, per scored metric, an acceptable band and an
//! optimal band inside it. Values in the optimal band score full points,
//! values between the bands scale linearly, values outside the
//! acceptable band score zero. pH and total mineralization carry no
//! targets and never contribute to a score.

use crate::model::{ChemicalMetric, ProfileId};

/// Acceptable band `[min, max]` with optimal band
/// `[optimal_min, optimal_max]` inside it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TargetRange {
    pub min: f64,
    pub max: f64,
    pub optimal_min: f64,
    pub optimal_max: f64,
}

const fn range(min: f64, max: f64, optimal_min: f64, optimal_max: f64) -> TargetRange {
    TargetRange {
        min,
        max,
        optimal_min,
        optimal_max,
    }
}

use ChemicalMetric::{
    Bicarbonate, Calcium, Chloride, Magnesium, Nitrate, Potassium, Sodium, Sulfate,
};

/// Balanced everyday drinking water.
const STANDARD: [(ChemicalMetric, TargetRange); 8] = [
    (Calcium, range(40.0, 200.0, 60.0, 160.0)),
    (Magnesium, range(10.0, 100.0, 20.0, 60.0)),
    (Sodium, range(0.0, 100.0, 0.0, 50.0)),
    (Potassium, range(0.0, 20.0, 1.0, 10.0)),
    (Bicarbonate, range(80.0, 600.0, 120.0, 350.0)),
    (Sulfate, range(0.0, 400.0, 0.0, 150.0)),
    (Chloride, range(0.0, 150.0, 0.0, 80.0)),
    (Nitrate, range(0.0, 25.0, 0.0, 10.0)),
];

/// Infant formula preparation: very low sodium and nitrate.
const BABY: [(ChemicalMetric, TargetRange); 8] = [
    (Calcium, range(20.0, 100.0, 30.0, 80.0)),
    (Magnesium, range(5.0, 50.0, 10.0, 30.0)),
    (Sodium, range(0.0, 20.0, 0.0, 10.0)),
    (Potassium, range(0.0, 10.0, 1.0, 5.0)),
    (Bicarbonate, range(100.0, 400.0, 150.0, 300.0)),
    (Sulfate, range(0.0, 200.0, 0.0, 50.0)),
    (Chloride, range(0.0, 50.0, 0.0, 20.0)),
    (Nitrate, range(0.0, 10.0, 0.0, 5.0)),
];

/// Endurance sport: electrolyte and bicarbonate rich.
const SPORT: [(ChemicalMetric, TargetRange); 8] = [
    (Calcium, range(50.0, 400.0, 150.0, 300.0)),
    (Magnesium, range(20.0, 200.0, 80.0, 150.0)),
    (Sodium, range(20.0, 200.0, 50.0, 150.0)),
    (Potassium, range(5.0, 50.0, 10.0, 30.0)),
    (Bicarbonate, range(200.0, 2000.0, 600.0, 1500.0)),
    (Sulfate, range(0.0, 500.0, 0.0, 200.0)),
    (Chloride, range(0.0, 200.0, 20.0, 100.0)),
    (Nitrate, range(0.0, 50.0, 0.0, 10.0)),
];

/// Sodium-conscious diet.
const BLOOD_PRESSURE: [(ChemicalMetric, TargetRange); 8] = [
    (Calcium, range(20.0, 200.0, 40.0, 120.0)),
    (Magnesium, range(5.0, 80.0, 10.0, 40.0)),
    (Sodium, range(0.0, 50.0, 0.0, 20.0)),
    (Potassium, range(0.0, 20.0, 1.0, 8.0)),
    (Bicarbonate, range(120.0, 500.0, 150.0, 350.0)),
    (Sulfate, range(0.0, 250.0, 0.0, 120.0)),
    (Chloride, range(0.0, 80.0, 0.0, 40.0)),
    (Nitrate, range(0.0, 25.0, 0.0, 10.0)),
];

/// Coffee brewing per SCA water guidance: moderate hardness, low
/// buffering.
const COFFEE: [(ChemicalMetric, TargetRange); 8] = [
    (Calcium, range(40.0, 120.0, 50.0, 90.0)),
    (Magnesium, range(10.0, 60.0, 15.0, 40.0)),
    (Sodium, range(0.0, 50.0, 0.0, 20.0)),
    (Potassium, range(0.0, 20.0, 1.0, 10.0)),
    (Bicarbonate, range(40.0, 200.0, 60.0, 120.0)),
    (Sulfate, range(0.0, 80.0, 0.0, 30.0)),
    (Chloride, range(0.0, 80.0, 0.0, 30.0)),
    (Nitrate, range(0.0, 25.0, 0.0, 10.0)),
];

/// Kidney-sparing: low mineralization across the board.
const KIDNEY: [(ChemicalMetric, TargetRange); 8] = [
    (Calcium, range(0.0, 80.0, 0.0, 50.0)),
    (Magnesium, range(0.0, 40.0, 0.0, 25.0)),
    (Sodium, range(0.0, 20.0, 0.0, 10.0)),
    (Potassium, range(0.0, 10.0, 0.0, 5.0)),
    (Bicarbonate, range(50.0, 400.0, 80.0, 200.0)),
    (Sulfate, range(0.0, 150.0, 0.0, 50.0)),
    (Chloride, range(0.0, 50.0, 0.0, 20.0)),
    (Nitrate, range(0.0, 10.0, 0.0, 5.0)),
];

/// All target ranges for a profile, in scoring order.
pub fn targets(profile: ProfileId) -> &'static [(ChemicalMetric, TargetRange)] {
    match profile {
        ProfileId::Standard => &STANDARD,
        ProfileId::Baby => &BABY,
        ProfileId::Sport => &SPORT,
        ProfileId::BloodPressure => &BLOOD_PRESSURE,
        ProfileId::Coffee => &COFFEE,
        ProfileId::Kidney => &KIDNEY,
    }
}

pub fn target_range(profile: ProfileId, metric: ChemicalMetric) -> Option<TargetRange> {
    targets(profile)
        .iter()
        .find(|(m, _)| *m == metric)
        .map(|(_, r)| *r)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ALL_PROFILES;

    #[test]
    fn test_every_profile_scores_eight_metrics() {
        for profile in ALL_PROFILES {
            assert_eq!(targets(profile).len(), 8, "{profile}");
        }
    }

    #[test]
    fn test_ranges_are_well_formed() {
        for profile in ALL_PROFILES {
            for (metric, r) in targets(profile) {
                assert!(r.min <= r.optimal_min, "{profile}/{metric}");
                assert!(r.optimal_min <= r.optimal_max, "{profile}/{metric}");
                assert!(r.optimal_max <= r.max, "{profile}/{metric}");
            }
        }
    }

    #[test]
    fn test_ph_and_tds_have_no_targets() {
        for profile in ALL_PROFILES {
            assert!(target_range(profile, ChemicalMetric::Ph).is_none());
            assert!(target_range(profile, ChemicalMetric::TotalDissolvedSolids).is_none());
        }
    }

    #[test]
    fn test_baby_profile_is_strict_on_sodium() {
        let r = target_range(ProfileId::Baby, Sodium).unwrap();
        assert_eq!(r.max, 20.0);
    }
}
