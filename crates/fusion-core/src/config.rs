use crate::error::{DashboardError, DashboardResult};
use crate::lens::{Lens, LensData, default_lenses};
use fusion_calculator::Share;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

pub const DEFAULT_TOTAL: u64 = 6639;
pub const PAID_DAYS: f64 = 5.0;
pub const CONFIG_PATH_ENV: &str = "FUSION_CONFIG_PATH";
pub const DEFAULT_CONFIG_PATH: &str = "fusion.json";

/// A function (team) and its share of total headcount
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionShare {
    pub team: String,
    pub share_pct: f64,
}

impl FunctionShare {
    pub fn new(team: impl Into<String>, share_pct: f64) -> Self {
        Self { team: team.into(), share_pct }
    }

    pub fn to_share(&self) -> Share {
        Share::new(self.team.clone(), self.share_pct)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedValue {
    pub name: String,
    pub value: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CommonConfig {
    #[serde(rename = "adoptionGAR", default, skip_serializing_if = "Option::is_none")]
    pub adoption_gar: Option<Vec<NamedValue>>,
}

/// The dashboard configuration document. Every field is optional; anything
/// missing falls back to the built-in defaults in [`DashboardConfig::resolve`].
/// Unknown fields (presentation-only data) are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_total: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_function_share: Option<Vec<FunctionShare>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_emp_pct: Option<BTreeMap<String, f64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paid_days: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub common: Option<CommonConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lenses: Option<BTreeMap<Lens, LensData>>,
}

/// Configuration with every default filled in
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedConfig {
    pub default_total: u64,
    pub default_function_share: Vec<FunctionShare>,
    pub default_emp_pct: BTreeMap<String, f64>,
    pub paid_days: f64,
    pub common: ResolvedCommon,
    pub lenses: BTreeMap<Lens, LensData>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedCommon {
    #[serde(rename = "adoptionGAR")]
    pub adoption_gar: Vec<NamedValue>,
}

impl ResolvedConfig {
    pub fn lens(&self, lens: Lens) -> DashboardResult<&LensData> {
        self.lenses.get(&lens).ok_or(DashboardError::MissingLens(lens))
    }

    /// Adoption value by name ("Green", "Amber", "Red"), 0 if absent
    pub fn adoption(&self, name: &str) -> f64 {
        self.common
            .adoption_gar
            .iter()
            .find(|v| v.name.eq_ignore_ascii_case(name))
            .map_or(0.0, |v| v.value)
    }
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        DashboardConfig::default().resolve()
    }
}

pub fn default_function_share() -> Vec<FunctionShare> {
    vec![
        FunctionShare::new("Sales", 20.0),
        FunctionShare::new("Ops", 26.0),
        FunctionShare::new("Finance", 12.0),
        FunctionShare::new("HR", 10.0),
        FunctionShare::new("Engineering", 32.0),
    ]
}

pub fn default_emp_pct() -> BTreeMap<String, f64> {
    [("Sales", 74.0), ("Ops", 67.0), ("Finance", 83.0), ("HR", 85.0), ("Engineering", 66.0)]
        .into_iter()
        .map(|(team, pct)| (team.to_string(), pct))
        .collect()
}

pub fn default_adoption_gar() -> Vec<NamedValue> {
    [("Green", 56.0), ("Amber", 30.0), ("Red", 14.0)]
        .into_iter()
        .map(|(name, value)| NamedValue { name: name.to_string(), value })
        .collect()
}

impl DashboardConfig {
    pub fn from_json_str(raw: &str) -> DashboardResult<Self> {
        serde_json::from_str(raw)
            .map_err(|e| DashboardError::config(format!("invalid JSON configuration: {e}"), None))
    }

    pub fn from_toml_str(raw: &str) -> DashboardResult<Self> {
        toml::from_str(raw)
            .map_err(|e| DashboardError::config(format!("invalid TOML configuration: {e}"), None))
    }

    /// Reads a configuration file; `.toml` files are parsed as TOML, anything
    /// else as JSON.
    pub fn from_path(path: &Path) -> DashboardResult<Self> {
        let display = path.display().to_string();
        let raw = fs::read_to_string(path).map_err(|e| {
            DashboardError::config(format!("cannot read '{display}': {e}"), Some(&display))
        })?;

        let parsed = match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Self::from_toml_str(&raw),
            _ => Self::from_json_str(&raw),
        };
        parsed.map_err(|e| match e {
            DashboardError::Config { message, .. } => {
                DashboardError::Config { message, path: Some(display.clone()) }
            }
            other => other,
        })
    }

    /// Loads the configuration named by `FUSION_CONFIG_PATH` (default
    /// `fusion.json`). Failures are logged and the built-in defaults are used.
    pub fn load() -> Self {
        let config_path =
            std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());

        match Self::from_path(Path::new(&config_path)) {
            Ok(config) => {
                info!(path = %config_path, "Loaded dashboard configuration");
                config
            }
            Err(e) => {
                warn!(path = %config_path, error = %e, "Falling back to built-in dashboard defaults");
                Self::default()
            }
        }
    }

    /// Fills in defaults. Lenses are merged per lens, so a document that only
    /// overrides `CEO` keeps the built-in data for the others.
    pub fn resolve(self) -> ResolvedConfig {
        let mut lenses = default_lenses();
        if let Some(overrides) = self.lenses {
            debug!(count = overrides.len(), "Applying lens overrides");
            lenses.extend(overrides);
        }

        let adoption_gar = self
            .common
            .and_then(|c| c.adoption_gar)
            .filter(|values| !values.is_empty())
            .unwrap_or_else(default_adoption_gar);

        ResolvedConfig {
            default_total: self.default_total.unwrap_or(DEFAULT_TOTAL),
            default_function_share: self
                .default_function_share
                .unwrap_or_else(default_function_share),
            default_emp_pct: self.default_emp_pct.unwrap_or_else(default_emp_pct),
            paid_days: self.paid_days.unwrap_or(PAID_DAYS),
            common: ResolvedCommon { adoption_gar },
            lenses,
        }
    }
}
