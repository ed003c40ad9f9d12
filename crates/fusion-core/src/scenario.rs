//! What-if scenario state.
//!
//! The dashboard's sliders and toggles live in a plain [`Scenario`] value
//! owned by the caller and passed into the computations; nothing here is
//! global. [`ScenarioOverrides`] is the partial form accepted over the API.

use crate::config::{FunctionShare, ResolvedConfig};
use crate::lens::Lens;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const DEFAULT_CUSTOM_REACTIVE: f64 = 42.0;
pub const DEFAULT_CUSTOM_ONSITE: f64 = 38.0;
pub const DEFAULT_PROD_DAYS: f64 = 3.9;
pub const DEFAULT_COST_PER_HOUR: f64 = 35.0;
pub const DEFAULT_DIGITAL_SUB_PCT: f64 = 30.0;

/// Projection horizon
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Horizon {
    #[default]
    Now,
    Next,
    Future,
}

impl Horizon {
    /// `(headcount, digital share)` growth factors
    pub const fn factors(self) -> (f64, f64) {
        match self {
            Self::Now => (1.0, 1.0),
            Self::Next => (1.05, 1.35),
            Self::Future => (1.10, 1.80),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scenario {
    pub lens: Lens,
    pub total_headcount: u64,
    pub adopt_green: f64,
    pub adopt_amber: f64,
    /// Use `custom_reactive` / `custom_onsite` instead of the lens mixes
    pub use_custom_mix: bool,
    pub custom_reactive: f64,
    pub custom_onsite: f64,
    pub prod_days: f64,
    pub cost_per_hour: f64,
    /// Share of reactive work moved to digital
    pub digital_sub_pct: f64,
    pub horizon: Horizon,
    pub function_shares: Vec<FunctionShare>,
    pub emp_pct_by_fn: BTreeMap<String, f64>,
}

impl Scenario {
    pub fn from_config(config: &ResolvedConfig) -> Self {
        Self {
            lens: Lens::default(),
            total_headcount: config.default_total,
            adopt_green: config.adoption("Green"),
            adopt_amber: config.adoption("Amber"),
            use_custom_mix: false,
            custom_reactive: DEFAULT_CUSTOM_REACTIVE,
            custom_onsite: DEFAULT_CUSTOM_ONSITE,
            prod_days: DEFAULT_PROD_DAYS,
            cost_per_hour: DEFAULT_COST_PER_HOUR,
            digital_sub_pct: DEFAULT_DIGITAL_SUB_PCT,
            horizon: Horizon::default(),
            function_shares: config.default_function_share.clone(),
            emp_pct_by_fn: config.default_emp_pct.clone(),
        }
    }

    /// Edits one function's share; returns `false` if the team is unknown.
    /// Other shares are left alone, normalization happens at compute time.
    pub fn set_share(&mut self, team: &str, share_pct: f64) -> bool {
        match self.function_shares.iter_mut().find(|s| s.team == team) {
            Some(share) => {
                share.share_pct = share_pct;
                true
            }
            None => false,
        }
    }

    pub fn apply(&mut self, overrides: ScenarioOverrides) {
        let ScenarioOverrides {
            lens,
            total_headcount,
            adopt_green,
            adopt_amber,
            use_custom_mix,
            custom_reactive,
            custom_onsite,
            prod_days,
            cost_per_hour,
            digital_sub_pct,
            horizon,
            function_shares,
            share_edits,
            emp_pct_by_fn,
        } = overrides;

        if let Some(v) = lens {
            self.lens = v;
        }
        if let Some(v) = total_headcount {
            self.total_headcount = v;
        }
        if let Some(v) = adopt_green {
            self.adopt_green = v;
        }
        if let Some(v) = adopt_amber {
            self.adopt_amber = v;
        }
        if let Some(v) = use_custom_mix {
            self.use_custom_mix = v;
        }
        if let Some(v) = custom_reactive {
            self.custom_reactive = v;
        }
        if let Some(v) = custom_onsite {
            self.custom_onsite = v;
        }
        if let Some(v) = prod_days {
            self.prod_days = v;
        }
        if let Some(v) = cost_per_hour {
            self.cost_per_hour = v;
        }
        if let Some(v) = digital_sub_pct {
            self.digital_sub_pct = v;
        }
        if let Some(v) = horizon {
            self.horizon = v;
        }
        if let Some(v) = function_shares {
            self.function_shares = v;
        }
        for (team, pct) in share_edits.unwrap_or_default() {
            if !self.set_share(&team, pct) {
                tracing::debug!(%team, "Ignoring share edit for unknown function");
            }
        }
        if let Some(v) = emp_pct_by_fn {
            self.emp_pct_by_fn.extend(v);
        }
    }
}

/// Partial scenario edits; absent fields keep their current value
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScenarioOverrides {
    pub lens: Option<Lens>,
    pub total_headcount: Option<u64>,
    pub adopt_green: Option<f64>,
    pub adopt_amber: Option<f64>,
    pub use_custom_mix: Option<bool>,
    pub custom_reactive: Option<f64>,
    pub custom_onsite: Option<f64>,
    pub prod_days: Option<f64>,
    pub cost_per_hour: Option<f64>,
    pub digital_sub_pct: Option<f64>,
    pub horizon: Option<Horizon>,
    /// Replaces the whole share list
    pub function_shares: Option<Vec<FunctionShare>>,
    /// Per-team share edits applied after `function_shares`
    pub share_edits: Option<BTreeMap<String, f64>>,
    /// Merged into the employee percentages
    pub emp_pct_by_fn: Option<BTreeMap<String, f64>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scenario_starts_from_config() {
        let scenario = Scenario::from_config(&ResolvedConfig::default());
        assert_eq!(scenario.lens, Lens::Ceo);
        assert_eq!(scenario.total_headcount, 6639);
        assert_eq!(scenario.adopt_green, 56.0);
        assert_eq!(scenario.adopt_amber, 30.0);
        assert_eq!(scenario.horizon, Horizon::Now);
        assert_eq!(scenario.function_shares.len(), 5);
    }

    #[test]
    fn overrides_touch_only_named_fields() {
        let mut scenario = Scenario::from_config(&ResolvedConfig::default());
        let overrides: ScenarioOverrides = serde_json::from_str(
            r#"{ "lens": "CFO", "totalHeadcount": 1000, "horizon": "Future",
                 "shareEdits": { "Ops": 40, "Legal": 5 }, "empPctByFn": { "HR": 90 } }"#,
        )
        .unwrap();
        scenario.apply(overrides);

        assert_eq!(scenario.lens, Lens::Cfo);
        assert_eq!(scenario.total_headcount, 1000);
        assert_eq!(scenario.horizon, Horizon::Future);
        assert_eq!(scenario.function_shares[1], FunctionShare::new("Ops", 40.0));
        assert_eq!(scenario.emp_pct_by_fn["HR"], 90.0);
        assert_eq!(scenario.emp_pct_by_fn["Sales"], 74.0);
        assert_eq!(scenario.cost_per_hour, DEFAULT_COST_PER_HOUR);
    }

    #[test]
    fn set_share_reports_unknown_teams() {
        let mut scenario = Scenario::from_config(&ResolvedConfig::default());
        assert!(scenario.set_share("HR", 12.0));
        assert!(!scenario.set_share("Legal", 12.0));
    }
}
