//! Labour economics derived from headcount and the scenario sliders.
//!
//! These figures are illustrative and stay in `f64`; only headcounts that
//! must add up go through the allocator.

use crate::lens::LensData;
use crate::scenario::Horizon;
use fusion_calculator::mean;
use serde::{Deserialize, Serialize};

pub const HOURS_PER_DAY: f64 = 8.0;
/// Illustrative total outcomes per week
pub const WEEKLY_OUTCOME_UNITS: f64 = 3200.0;
/// Share of people treated as unused capacity
pub const LIABILITY_PCT: f64 = 16.0;
pub const PAID_DAYS_PER_YEAR: f64 = 220.0;
pub const MAX_DIGITAL_SHARE: f64 = 95.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Adoption {
    pub green: f64,
    pub amber: f64,
    pub red: f64,
    /// Green as a rounded percentage of the whole
    pub percent: f64,
}

pub fn adoption(green: f64, amber: f64) -> Adoption {
    let red = (100.0 - (green + amber)).max(0.0);
    let denominator = green + amber + red;
    let percent = if denominator == 0.0 { 0.0 } else { (green / denominator * 100.0).round() };
    Adoption { green, amber, red, percent }
}

/// Mean digital task share across the lens's functions, 0 when it has none
pub fn digital_share(lens: &LensData) -> f64 {
    let values: Vec<f64> = lens.fusion.iter().map(|f| f.digital).collect();
    mean(&values)
}

pub fn outcome_index(lens: &LensData) -> f64 {
    let outcomes: Vec<f64> = lens.output_vs_outcome.iter().map(|m| m.outcome).collect();
    mean(&outcomes).round()
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LabourDebt {
    pub lost_days_per_person: f64,
    pub lost_days: f64,
    pub lost_hours: f64,
    pub weekly_cost: f64,
}

pub fn labour_debt(total: u64, paid_days: f64, prod_days: f64, cost_per_hour: f64) -> LabourDebt {
    let lost_days_per_person = (paid_days - prod_days).max(0.0);
    let lost_days = lost_days_per_person * total as f64;
    let lost_hours = lost_days * HOURS_PER_DAY;
    LabourDebt { lost_days_per_person, lost_days, lost_hours, weekly_cost: lost_hours * cost_per_hour }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyEconomics {
    pub paid_hours: f64,
    pub labour_cost: f64,
    pub outcome_units: f64,
    pub cost_per_outcome: f64,
    /// Labour debt as a percentage of weekly labour cost
    pub labour_debt_pct: f64,
}

pub fn weekly_economics(total: u64, paid_days: f64, cost_per_hour: f64, debt: &LabourDebt) -> WeeklyEconomics {
    let paid_hours = total as f64 * paid_days * HOURS_PER_DAY;
    let labour_cost = paid_hours * cost_per_hour;
    let outcome_units = WEEKLY_OUTCOME_UNITS;

    WeeklyEconomics {
        paid_hours,
        labour_cost,
        outcome_units,
        cost_per_outcome: if outcome_units == 0.0 { 0.0 } else { labour_cost / outcome_units },
        labour_debt_pct: if labour_cost == 0.0 { 0.0 } else { debt.weekly_cost / labour_cost * 100.0 },
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Liability {
    pub pct: f64,
    pub headcount: u64,
    pub annual_cost: f64,
}

pub fn liability(total: u64, cost_per_hour: f64) -> Liability {
    let headcount = (LIABILITY_PCT / 100.0 * total as f64).round() as u64;
    Liability {
        pct: LIABILITY_PCT,
        headcount,
        annual_cost: headcount as f64 * HOURS_PER_DAY * PAID_DAYS_PER_YEAR * cost_per_hour,
    }
}

/// Reactive work converted to digital capacity
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DigitalSubstitution {
    pub reactive_people: u64,
    pub pct: f64,
    pub hours: f64,
    pub cost: f64,
}

pub fn digital_substitution(
    reactive_people: u64,
    paid_days: f64,
    pct: f64,
    cost_per_hour: f64,
) -> DigitalSubstitution {
    let hours = reactive_people as f64 * paid_days * HOURS_PER_DAY * (pct / 100.0);
    DigitalSubstitution { reactive_people, pct, hours, cost: hours * cost_per_hour }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastPoint {
    pub label: String,
    pub headcount: u64,
    pub digital_share: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HorizonProjection {
    pub horizon: Horizon,
    pub headcount: u64,
    pub digital_share: f64,
    /// Now, Next and Future points; Next is the selected horizon's projection
    pub forecast: Vec<ForecastPoint>,
}

pub fn horizon_projection(total: u64, digital_share: f64, horizon: Horizon) -> HorizonProjection {
    let (headcount_factor, digital_factor) = horizon.factors();
    let headcount = (total as f64 * headcount_factor).round() as u64;
    let projected_digital = (digital_share * digital_factor).round().min(MAX_DIGITAL_SHARE);

    let point = |label: &str, headcount: u64, digital_share: f64| ForecastPoint {
        label: label.to_string(),
        headcount,
        digital_share,
    };

    HorizonProjection {
        horizon,
        headcount,
        digital_share: projected_digital,
        forecast: vec![
            point("Now", total, digital_share),
            point("Next", headcount, projected_digital),
            point(
                "Future",
                (headcount as f64 * 1.05).round() as u64,
                (projected_digital * 1.1).round().min(MAX_DIGITAL_SHARE),
            ),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lens::{Lens, default_lenses};

    #[test]
    fn adoption_fills_red_and_rounds() {
        let a = adoption(56.0, 30.0);
        assert_eq!(a.red, 14.0);
        assert_eq!(a.percent, 56.0);

        let over = adoption(80.0, 40.0);
        assert_eq!(over.red, 0.0);
        assert_eq!(over.percent, 67.0);
    }

    #[test]
    fn adoption_with_nothing_is_zero() {
        let a = adoption(0.0, 0.0);
        assert_eq!(a.red, 100.0);
        assert_eq!(a.percent, 0.0);
    }

    #[test]
    fn lens_averages() {
        let ceo = &default_lenses()[&Lens::Ceo];
        assert!((digital_share(ceo) - 38.8).abs() < 1e-9);
        assert_eq!(outcome_index(ceo), 60.0);
    }

    #[test]
    fn empty_lens_series_average_to_zero() {
        let mut lens = default_lenses()[&Lens::Cfo].clone();
        lens.fusion.clear();
        lens.output_vs_outcome.clear();
        assert_eq!(digital_share(&lens), 0.0);
        assert_eq!(outcome_index(&lens), 0.0);
    }

    #[test]
    fn weekly_economics_for_default_org() {
        let debt = labour_debt(6639, 5.0, 3.9, 35.0);
        assert!((debt.lost_days_per_person - 1.1).abs() < 1e-9);
        let weekly = weekly_economics(6639, 5.0, 35.0, &debt);

        assert_eq!(weekly.paid_hours, 265_560.0);
        assert_eq!(weekly.labour_cost, 9_294_600.0);
        assert!((weekly.cost_per_outcome - 2904.5625).abs() < 1e-9);
        assert!((weekly.labour_debt_pct - 22.0).abs() < 1e-6);
    }

    #[test]
    fn productive_days_above_paid_days_is_no_debt() {
        let debt = labour_debt(100, 5.0, 6.0, 35.0);
        assert_eq!(debt.lost_days, 0.0);
        assert_eq!(debt.weekly_cost, 0.0);
    }

    #[test]
    fn zero_headcount_economics_do_not_divide_by_zero() {
        let debt = labour_debt(0, 5.0, 3.9, 35.0);
        let weekly = weekly_economics(0, 5.0, 35.0, &debt);
        assert_eq!(weekly.labour_cost, 0.0);
        assert_eq!(weekly.labour_debt_pct, 0.0);
    }

    #[test]
    fn liability_and_substitution() {
        let l = liability(6639, 35.0);
        assert_eq!(l.headcount, 1062);
        assert_eq!(l.annual_cost, 65_419_200.0);

        let sub = digital_substitution(2788, 5.0, 30.0, 35.0);
        assert!((sub.hours - 33_456.0).abs() < 1e-6);
        assert!((sub.cost - 1_170_960.0).abs() < 1e-3);
    }

    #[test]
    fn horizon_now_forecast() {
        let p = horizon_projection(6639, 38.8, Horizon::Now);
        assert_eq!((p.headcount, p.digital_share), (6639, 39.0));
        let points: Vec<(u64, f64)> = p.forecast.iter().map(|f| (f.headcount, f.digital_share)).collect();
        assert_eq!(points, vec![(6639, 38.8), (6639, 39.0), (6971, 43.0)]);
    }

    #[test]
    fn horizon_next_and_cap() {
        let p = horizon_projection(6639, 38.8, Horizon::Next);
        assert_eq!((p.headcount, p.digital_share), (6971, 52.0));
        assert_eq!((p.forecast[2].headcount, p.forecast[2].digital_share), (7320, 57.0));

        let capped = horizon_projection(100, 90.0, Horizon::Future);
        assert_eq!(capped.digital_share, MAX_DIGITAL_SHARE);
        assert_eq!(capped.forecast[2].digital_share, MAX_DIGITAL_SHARE);
    }
}
