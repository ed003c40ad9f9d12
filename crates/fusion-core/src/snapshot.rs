use crate::config::ResolvedConfig;
use crate::economics::{
    self, Adoption, DigitalSubstitution, HorizonProjection, LabourDebt, Liability, WeeklyEconomics,
};
use crate::error::DashboardResult;
use crate::lens::Lens;
use crate::scenario::Scenario;
use crate::workforce::{
    self, FunctionHeadcount, OrgTotals, QuadrantCell, Replaceability, WorkMix,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{debug, instrument};

/// Every number the dashboard shows for one scenario
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSnapshot {
    pub lens: Lens,
    /// Subtitle shown under the lens selector
    pub lens_description: String,
    pub total_headcount: u64,
    pub functions: Vec<FunctionHeadcount>,
    pub totals: OrgTotals,
    pub work_mix: WorkMix,
    pub adoption: Adoption,
    pub digital_share: f64,
    pub quadrant: Vec<QuadrantCell>,
    pub replaceability: Vec<Replaceability>,
    pub digital_substitution: DigitalSubstitution,
    pub horizon: HorizonProjection,
    pub outcome_index: f64,
    pub labour_debt: LabourDebt,
    pub weekly: WeeklyEconomics,
    pub liability: Liability,
    pub outcome_by_lens: BTreeMap<Lens, f64>,
    #[serde(rename = "shadowAIByLens")]
    pub shadow_ai_by_lens: BTreeMap<Lens, f64>,
}

impl DashboardSnapshot {
    #[instrument(skip_all, fields(lens = %scenario.lens, total = scenario.total_headcount))]
    pub fn compute(config: &ResolvedConfig, scenario: &Scenario) -> DashboardResult<Self> {
        let total = scenario.total_headcount;
        let lens = config.lens(scenario.lens)?;

        let functions =
            workforce::function_headcounts(total, &scenario.function_shares, &scenario.emp_pct_by_fn)?;
        let totals = workforce::org_totals(&functions);
        let work_mix = workforce::work_mix(total, lens, scenario)?;

        let digital_share = economics::digital_share(lens);
        let quadrant = workforce::quadrant(total, &work_mix, digital_share);
        let replaceability = workforce::replaceability(&functions, lens);

        let paid_days = config.paid_days;
        let labour_debt =
            economics::labour_debt(total, paid_days, scenario.prod_days, scenario.cost_per_hour);
        let weekly = economics::weekly_economics(total, paid_days, scenario.cost_per_hour, &labour_debt);

        let outcome_by_lens = config
            .lenses
            .iter()
            .map(|(l, data)| (*l, economics::outcome_index(data)))
            .collect();
        let shadow_ai_by_lens = config.lenses.iter().map(|(l, data)| (*l, data.shadow_ai)).collect();

        debug!(
            functions = functions.len(),
            employees = totals.employees,
            contractors = totals.contractors,
            digital_share,
            "Computed workforce mix"
        );

        Ok(Self {
            lens: scenario.lens,
            lens_description: scenario.lens.description().to_string(),
            total_headcount: total,
            digital_substitution: economics::digital_substitution(
                work_mix.reactive(),
                paid_days,
                scenario.digital_sub_pct,
                scenario.cost_per_hour,
            ),
            horizon: economics::horizon_projection(total, digital_share, scenario.horizon),
            outcome_index: economics::outcome_index(lens),
            adoption: economics::adoption(scenario.adopt_green, scenario.adopt_amber),
            liability: economics::liability(total, scenario.cost_per_hour),
            functions,
            totals,
            work_mix,
            digital_share,
            quadrant,
            replaceability,
            labour_debt,
            weekly,
            outcome_by_lens,
            shadow_ai_by_lens,
        })
    }
}
