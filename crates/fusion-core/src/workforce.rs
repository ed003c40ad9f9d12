//! Headcount by function and the two-way work mixes.
//!
//! Every count here comes from the largest-remainder allocator or the binary
//! split, so function totals add up to the org total and employees plus
//! contractors add up to each function total.

use crate::config::FunctionShare;
use crate::error::{DashboardError, DashboardResult};
use crate::lens::LensData;
use crate::scenario::Scenario;
use fusion_calculator::{Share, allocate, apportion_share_list, split_by_percentage};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Employee percentage for a function that has none configured
pub const DEFAULT_EMPLOYEE_PCT: f64 = 70.0;
/// Digital share assumed for a function the lens has no data for
pub const DEFAULT_DIGITAL_SHARE: f64 = 40.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionHeadcount {
    pub team: String,
    /// Whole-percentage share after apportioning to 100
    pub share_pct: f64,
    pub total: u64,
    pub employees: u64,
    pub contractors: u64,
    pub emp_pct: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrgTotals {
    pub employees: u64,
    pub contractors: u64,
    pub total: u64,
}

pub fn function_headcounts(
    total: u64,
    shares: &[FunctionShare],
    emp_pct_by_fn: &BTreeMap<String, f64>,
) -> DashboardResult<Vec<FunctionHeadcount>> {
    let shares: Vec<Share> = shares.iter().map(FunctionShare::to_share).collect();
    let apportioned =
        apportion_share_list(&shares).map_err(|e| DashboardError::allocation("function shares", e))?;
    let allocated =
        allocate(total, &apportioned).map_err(|e| DashboardError::allocation("function mix", e))?;

    Ok(allocated
        .into_iter()
        .map(|row| {
            let emp_pct = emp_pct_by_fn.get(&row.name).copied().unwrap_or(DEFAULT_EMPLOYEE_PCT);
            let split = split_by_percentage(row.count, emp_pct);
            FunctionHeadcount {
                team: row.name,
                share_pct: row.share_pct,
                total: row.count,
                employees: split.primary,
                contractors: split.secondary,
                emp_pct,
            }
        })
        .collect())
}

pub fn org_totals(functions: &[FunctionHeadcount]) -> OrgTotals {
    let employees = functions.iter().map(|f| f.employees).sum();
    let contractors = functions.iter().map(|f| f.contractors).sum();
    OrgTotals { employees, contractors, total: employees + contractors }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MixCount {
    pub name: String,
    pub pct: f64,
    pub count: u64,
}

/// Reactive/proactive and on-site/remote breakdowns of the org total
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkMix {
    pub reactive_proactive: Vec<MixCount>,
    pub on_off: Vec<MixCount>,
}

impl WorkMix {
    fn count_of(mix: &[MixCount], name: &str) -> u64 {
        mix.iter().find(|m| m.name == name).map_or(0, |m| m.count)
    }

    pub fn reactive(&self) -> u64 {
        Self::count_of(&self.reactive_proactive, "Reactive")
    }

    pub fn proactive(&self) -> u64 {
        Self::count_of(&self.reactive_proactive, "Proactive")
    }

    pub fn onsite(&self) -> u64 {
        Self::count_of(&self.on_off, "On-site")
    }

    pub fn remote(&self) -> u64 {
        Self::count_of(&self.on_off, "Remote")
    }
}

fn two_way_mix(total: u64, names: [&str; 2], pcts: [f64; 2], context: &str) -> DashboardResult<Vec<MixCount>> {
    let shares = [Share::new(names[0], pcts[0]), Share::new(names[1], pcts[1])];
    let allocated = allocate(total, &shares).map_err(|e| DashboardError::allocation(context, e))?;
    Ok(allocated
        .into_iter()
        .map(|a| MixCount { name: a.name, pct: a.share_pct, count: a.count })
        .collect())
}

/// Uses the lens percentages, or `[custom, 100 - custom]` when the scenario
/// asks for a custom mix.
pub fn work_mix(total: u64, lens: &LensData, scenario: &Scenario) -> DashboardResult<WorkMix> {
    let (rp, oo) = if scenario.use_custom_mix {
        (
            [scenario.custom_reactive, 100.0 - scenario.custom_reactive],
            [scenario.custom_onsite, 100.0 - scenario.custom_onsite],
        )
    } else {
        (lens.reactive_proactive_pct, lens.on_off_pct)
    };

    Ok(WorkMix {
        reactive_proactive: two_way_mix(total, ["Reactive", "Proactive"], rp, "reactive/proactive mix")?,
        on_off: two_way_mix(total, ["On-site", "Remote"], oo, "on-site/remote mix")?,
    })
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuadrantCell {
    pub key: String,
    pub name: String,
    pub count: u64,
    pub digital_tasks: u64,
}

/// 2x2 of reactive/proactive against on-site/remote, assuming the two mixes
/// are independent. Cells are rounded on their own and need not sum to the
/// total exactly.
pub fn quadrant(total: u64, mix: &WorkMix, digital_share: f64) -> Vec<QuadrantCell> {
    let t = if total == 0 { 1.0 } else { total as f64 };
    let cell = |key: &str, name: &str, a: u64, b: u64| {
        let count = ((a as f64 / t) * (b as f64 / t) * t).round().max(0.0) as u64;
        QuadrantCell {
            key: key.to_string(),
            name: name.to_string(),
            count,
            digital_tasks: ((count as f64 * digital_share) / 100.0).round().max(0.0) as u64,
        }
    };

    vec![
        cell("rx_on", "Reactive • On-site", mix.reactive(), mix.onsite()),
        cell("rx_off", "Reactive • Remote", mix.reactive(), mix.remote()),
        cell("pr_on", "Proactive • On-site", mix.proactive(), mix.onsite()),
        cell("pr_off", "Proactive • Remote", mix.proactive(), mix.remote()),
    ]
}

/// Split of a function's work by how automatable it is, in percent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Replaceability {
    pub team: String,
    pub replaceable: f64,
    pub augmentable: f64,
    pub digital_first: f64,
    pub unique: f64,
}

pub fn replaceability(functions: &[FunctionHeadcount], lens: &LensData) -> Vec<Replaceability> {
    functions
        .iter()
        .map(|f| {
            let digital = lens.digital_share_for(&f.team).unwrap_or(DEFAULT_DIGITAL_SHARE);
            let replaceable = (digital * 0.40).round();
            let augmentable = (digital * 0.30).round();
            let digital_first = (digital * 0.20).round();
            Replaceability {
                team: f.team.clone(),
                replaceable,
                augmentable,
                digital_first,
                unique: (100.0 - (replaceable + augmentable + digital_first)).max(0.0),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ResolvedConfig, default_emp_pct, default_function_share};
    use crate::lens::Lens;

    #[test]
    fn default_function_mix() {
        let functions = function_headcounts(6639, &default_function_share(), &default_emp_pct()).unwrap();
        let rows: Vec<(&str, u64, u64, u64)> = functions
            .iter()
            .map(|f| (f.team.as_str(), f.total, f.employees, f.contractors))
            .collect();

        assert_eq!(
            rows,
            vec![
                ("Sales", 1328, 982, 346),
                ("Ops", 1726, 1156, 570),
                ("Finance", 797, 661, 136),
                ("HR", 664, 564, 100),
                ("Engineering", 2124, 1401, 723),
            ]
        );
        assert_eq!(org_totals(&functions), OrgTotals { employees: 4764, contractors: 1875, total: 6639 });
    }

    #[test]
    fn unknown_function_uses_default_employee_pct() {
        let shares = vec![FunctionShare::new("Legal", 100.0)];
        let functions = function_headcounts(10, &shares, &BTreeMap::new()).unwrap();
        assert_eq!(functions[0].emp_pct, DEFAULT_EMPLOYEE_PCT);
        assert_eq!((functions[0].employees, functions[0].contractors), (7, 3));
    }

    #[test]
    fn edited_shares_are_normalized_first() {
        let shares = vec![
            FunctionShare::new("Sales", 30.0),
            FunctionShare::new("Ops", 30.0),
            FunctionShare::new("HR", 30.0),
        ];
        let functions = function_headcounts(6639, &shares, &BTreeMap::new()).unwrap();
        let pcts: Vec<f64> = functions.iter().map(|f| f.share_pct).collect();
        assert_eq!(pcts, vec![34.0, 33.0, 33.0]);
        let counts: Vec<u64> = functions.iter().map(|f| f.total).collect();
        assert_eq!(counts, vec![2257, 2191, 2191]);
    }

    #[test]
    fn every_single_share_edit_allocates_the_full_total() {
        for team in ["Sales", "Ops", "Finance", "HR", "Engineering"] {
            for pct in 0..=100 {
                let mut shares = default_function_share();
                if let Some(share) = shares.iter_mut().find(|s| s.team == team) {
                    share.share_pct = f64::from(pct);
                }
                let functions = function_headcounts(6639, &shares, &default_emp_pct())
                    .unwrap_or_else(|e| panic!("{team}={pct}: {e}"));
                assert_eq!(functions.iter().map(|f| f.total).sum::<u64>(), 6639, "{team}={pct}");
                assert_eq!(functions.iter().map(|f| f.share_pct).sum::<f64>(), 100.0, "{team}={pct}");
            }
        }
    }

    #[test]
    fn negative_share_is_reported() {
        let shares = vec![FunctionShare::new("Sales", -10.0), FunctionShare::new("Ops", 60.0)];
        let err = function_headcounts(6639, &shares, &BTreeMap::new()).unwrap_err();
        assert!(matches!(err, DashboardError::Allocation { .. }));
        assert!(err.is_input_error());
    }

    #[test]
    fn lens_and_custom_work_mixes() {
        let config = ResolvedConfig::default();
        let mut scenario = crate::Scenario::from_config(&config);
        let ceo = config.lens(Lens::Ceo).unwrap();

        let mix = work_mix(6639, ceo, &scenario).unwrap();
        assert_eq!((mix.reactive(), mix.proactive()), (2788, 3851));
        assert_eq!((mix.onsite(), mix.remote()), (2523, 4116));

        scenario.use_custom_mix = true;
        scenario.custom_reactive = 50.0;
        scenario.custom_onsite = 25.0;
        let custom = work_mix(100, ceo, &scenario).unwrap();
        assert_eq!((custom.reactive(), custom.proactive()), (50, 50));
        assert_eq!((custom.onsite(), custom.remote()), (25, 75));
    }

    #[test]
    fn quadrant_cells_for_default_mix() {
        let config = ResolvedConfig::default();
        let scenario = crate::Scenario::from_config(&config);
        let mix = work_mix(6639, config.lens(Lens::Ceo).unwrap(), &scenario).unwrap();

        let cells = quadrant(6639, &mix, 38.8);
        let counts: Vec<u64> = cells.iter().map(|c| c.count).collect();
        assert_eq!(counts, vec![1060, 1728, 1463, 2388]);
        assert_eq!(cells[0].key, "rx_on");
        assert_eq!(cells[0].digital_tasks, 411);
    }

    #[test]
    fn quadrant_with_zero_total_is_empty_not_nan() {
        let mix = WorkMix { reactive_proactive: vec![], on_off: vec![] };
        assert!(quadrant(0, &mix, 40.0).iter().all(|c| c.count == 0 && c.digital_tasks == 0));
    }

    #[test]
    fn replaceability_split() {
        let config = ResolvedConfig::default();
        let functions = function_headcounts(6639, &default_function_share(), &default_emp_pct()).unwrap();
        let rows = replaceability(&functions, config.lens(Lens::Ceo).unwrap());

        assert_eq!(
            rows[0],
            Replaceability {
                team: "Sales".to_string(),
                replaceable: 13.0,
                augmentable: 10.0,
                digital_first: 6.0,
                unique: 71.0,
            }
        );
    }
}
