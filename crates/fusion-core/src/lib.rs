#![deny(warnings)]
#![allow(missing_docs)]
//! Workforce mix model for the Fusion executive dashboard.
//!
//! Takes a [`ResolvedConfig`] and the caller-owned what-if [`Scenario`] and
//! produces a [`DashboardSnapshot`]: headcount by function, employee and
//! contractor splits, work mixes and the labour economics derived from them.
//! All headcounts come out of the largest-remainder allocator in
//! `fusion-calculator`, so every breakdown adds up to the total.

/// Configuration document with optional fields and built-in defaults
pub mod config;
/// Labour economics, adoption and horizon projections
pub mod economics;
/// Error types for the dashboard model
pub mod error;
/// Org-mix CSV export
pub mod export;
/// Stakeholder lenses and their illustrative data
pub mod lens;
/// What-if scenario state
pub mod scenario;
/// Full dashboard computation
pub mod snapshot;
/// Headcount by function and work mixes
pub mod workforce;

pub use config::{DashboardConfig, FunctionShare, ResolvedConfig};
pub use error::{DashboardError, DashboardResult};
pub use export::export_org_mix_csv;
pub use lens::{Lens, LensData};
pub use scenario::{Horizon, Scenario, ScenarioOverrides};
pub use snapshot::DashboardSnapshot;
