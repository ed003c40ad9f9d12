#![deny(warnings)]
#![allow(missing_docs)]
//! Fusion dashboard HTTP API
//!
//! Serves the resolved dashboard configuration, computes snapshots for
//! what-if scenarios, exports the org mix as CSV and exposes the headcount
//! calculators by name.

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    Json, Router,
    body::Bytes,
    extract::{Path, State},
    http::header,
    response::IntoResponse,
    routing::{get, post},
};
use fusion_calculator::Calculator;
use fusion_core::{
    DashboardSnapshot, ResolvedConfig, Scenario, ScenarioOverrides, export_org_mix_csv,
};
use fusion_types::FieldValue;
use serde_json::json;
use tower_http::trace::TraceLayer;
use tracing::{debug, info, instrument};

pub mod cli;
pub mod config;
pub mod error;
pub mod tracing_setup;

use error::{ApiError, ApiResult};

/// Shared, read-only service state
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ResolvedConfig>,
    pub calculator: Arc<Calculator>,
}

impl AppState {
    pub fn new(config: ResolvedConfig) -> Self {
        info!(
            default_total = config.default_total,
            lenses = config.lenses.len(),
            "Initializing application state"
        );
        Self { config: Arc::new(config), calculator: Arc::new(Calculator::new()) }
    }

    /// Scenario built from the configuration with `overrides` applied
    pub fn scenario(&self, overrides: ScenarioOverrides) -> Scenario {
        let mut scenario = Scenario::from_config(&self.config);
        scenario.apply(overrides);
        scenario
    }
}

pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/api/dashboard", get(dashboard_handler))
        .route("/api/snapshot", post(snapshot_handler))
        .route("/api/export.csv", get(export_handler))
        .route("/api/calculate/{name}", post(calculate_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_handler() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

async fn dashboard_handler(State(state): State<AppState>) -> Json<ResolvedConfig> {
    Json(state.config.as_ref().clone())
}

/// An empty body means "no overrides"
fn parse_overrides(body: &[u8]) -> ApiResult<ScenarioOverrides> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(ScenarioOverrides::default());
    }
    Ok(serde_json::from_slice(body)?)
}

#[instrument(skip_all)]
async fn snapshot_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> ApiResult<Json<DashboardSnapshot>> {
    let scenario = state.scenario(parse_overrides(&body)?);
    debug!(lens = %scenario.lens, total = scenario.total_headcount, "Computing snapshot");
    Ok(Json(DashboardSnapshot::compute(&state.config, &scenario)?))
}

async fn export_handler(State(state): State<AppState>) -> ApiResult<impl IntoResponse> {
    let scenario = state.scenario(ScenarioOverrides::default());
    let snapshot = DashboardSnapshot::compute(&state.config, &scenario)?;
    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
            (header::CONTENT_DISPOSITION, "attachment; filename=\"org_mix.csv\""),
        ],
        export_org_mix_csv(&snapshot),
    ))
}

#[instrument(skip(state, body))]
async fn calculate_handler(
    State(state): State<AppState>,
    Path(name): Path<String>,
    body: Bytes,
) -> ApiResult<Json<serde_json::Value>> {
    if !state.calculator.has(&name) {
        return Err(ApiError::not_found(format!("calculator '{name}'")));
    }

    let raw: serde_json::Value = serde_json::from_slice(&body)?;
    let serde_json::Value::Object(map) = raw else {
        return Err(ApiError::validation("calculator arguments must be a JSON object"));
    };

    let mut owned = HashMap::with_capacity(map.len());
    for (key, value) in &map {
        let value = FieldValue::try_from(value)
            .map_err(|e| ApiError::validation(format!("argument '{key}': {e}")))?;
        owned.insert(key.clone(), value);
    }
    let args: HashMap<String, &FieldValue> = owned.iter().map(|(k, v)| (k.clone(), v)).collect();

    let result = state.calculator.calculate(&name, &args)?;
    Ok(Json(json!({ "calculator": name, "result": serde_json::Value::from(result) })))
}
