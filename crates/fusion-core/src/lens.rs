use crate::error::DashboardError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Stakeholder viewpoint selecting which illustrative data set drives the mixes
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum Lens {
    #[default]
    Ceo,
    Cfo,
    Chro,
    Cio,
}

impl Lens {
    pub const ALL: [Self; 4] = [Self::Ceo, Self::Cfo, Self::Chro, Self::Cio];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ceo => "CEO",
            Self::Cfo => "CFO",
            Self::Chro => "CHRO",
            Self::Cio => "CIO",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::Ceo => "Growth & Value",
            Self::Cfo => "Cost & ROI",
            Self::Chro => "People & Wellbeing",
            Self::Cio => "Platforms & Risk",
        }
    }
}

impl fmt::Display for Lens {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Lens {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|lens| lens.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| DashboardError::UnknownLens(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyOutcome {
    pub month: String,
    pub output: f64,
    pub outcome: f64,
}

/// Human vs digital task share for one function
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FusionMix {
    pub team: String,
    pub human: f64,
    pub digital: f64,
}

/// Illustrative data behind one lens
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LensData {
    #[serde(rename = "shadowAI")]
    pub shadow_ai: f64,
    pub output_vs_outcome: Vec<MonthlyOutcome>,
    pub fusion: Vec<FusionMix>,
    /// `[reactive, proactive]` percentages
    pub reactive_proactive_pct: [f64; 2],
    /// `[on-site, remote]` percentages
    pub on_off_pct: [f64; 2],
}

impl LensData {
    pub fn digital_share_for(&self, team: &str) -> Option<f64> {
        self.fusion.iter().find(|f| f.team == team).map(|f| f.digital)
    }
}

const MONTHS: [&str; 6] = ["Apr", "May", "Jun", "Jul", "Aug", "Sep"];
const TEAMS: [&str; 5] = ["Sales", "Ops", "Finance", "HR", "Engineering"];

fn lens_data(
    shadow_ai: f64,
    output_outcome: [(f64, f64); 6],
    digital: [f64; 5],
    reactive_proactive_pct: [f64; 2],
    on_off_pct: [f64; 2],
) -> LensData {
    LensData {
        shadow_ai,
        output_vs_outcome: MONTHS
            .iter()
            .zip(output_outcome)
            .map(|(month, (output, outcome))| MonthlyOutcome {
                month: (*month).to_string(),
                output,
                outcome,
            })
            .collect(),
        fusion: TEAMS
            .iter()
            .zip(digital)
            .map(|(team, digital)| FusionMix {
                team: (*team).to_string(),
                human: 100.0 - digital,
                digital,
            })
            .collect(),
        reactive_proactive_pct,
        on_off_pct,
    }
}

/// Built-in lens data used when the configuration supplies none
pub fn default_lenses() -> BTreeMap<Lens, LensData> {
    BTreeMap::from([
        (
            Lens::Ceo,
            lens_data(
                34.0,
                [(62.0, 48.0), (65.0, 55.0), (68.0, 57.0), (71.0, 63.0), (73.0, 66.0), (76.0, 72.0)],
                [32.0, 46.0, 39.0, 26.0, 51.0],
                [42.0, 58.0],
                [38.0, 62.0],
            ),
        ),
        (
            Lens::Cfo,
            lens_data(
                28.0,
                [(58.0, 46.0), (60.0, 50.0), (63.0, 53.0), (65.0, 56.0), (67.0, 60.0), (69.0, 62.0)],
                [34.0, 48.0, 42.0, 28.0, 52.0],
                [46.0, 54.0],
                [41.0, 59.0],
            ),
        ),
        (
            Lens::Chro,
            lens_data(
                19.0,
                [(55.0, 45.0), (58.0, 51.0), (61.0, 54.0), (64.0, 58.0), (67.0, 61.0), (70.0, 65.0)],
                [29.0, 40.0, 34.0, 22.0, 47.0],
                [39.0, 61.0],
                [36.0, 64.0],
            ),
        ),
        (
            Lens::Cio,
            lens_data(
                41.0,
                [(61.0, 49.0), (63.0, 52.0), (66.0, 55.0), (69.0, 59.0), (71.0, 62.0), (75.0, 67.0)],
                [36.0, 49.0, 41.0, 27.0, 53.0],
                [48.0, 52.0],
                [43.0, 57.0],
            ),
        ),
    ])
}
