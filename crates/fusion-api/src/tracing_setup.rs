//! Logging setup
//!
//! Output goes to stderr through `tracing-subscriber`, filtered by `RUST_LOG` when it
//! is set. `FUSION_LOG_FORMAT=json` switches to one JSON object per line.

use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

pub const LOG_FORMAT_ENV: &str = "FUSION_LOG_FORMAT";
pub const DEFAULT_FILTER: &str = "fusion_api=debug,fusion_core=debug,tower_http=debug";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

#[derive(Debug, Clone)]
pub struct TracingConfig {
    pub service_name: String,
    pub service_version: String,
    pub format: LogFormat,
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            service_name: "fusion-api".to_string(),
            service_version: env!("CARGO_PKG_VERSION").to_string(),
            format: LogFormat::Pretty,
        }
    }
}

impl TracingConfig {
    pub fn from_environment() -> Self {
        let format = match std::env::var(LOG_FORMAT_ENV) {
            Ok(v) if v.eq_ignore_ascii_case("json") => LogFormat::Json,
            _ => LogFormat::Pretty,
        };
        Self { format, ..Self::default() }
    }
}

/// Installs the global subscriber. Fails if one is already installed.
pub fn init_tracing(config: &TracingConfig) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_FILTER.into());
    let registry = tracing_subscriber::registry().with(filter);

    match config.format {
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .try_init()?,
        LogFormat::Pretty => registry
            .with(tracing_subscriber::fmt::layer().with_target(false).with_writer(std::io::stderr))
            .try_init()?,
    }

    info!(
        service_name = %config.service_name,
        service_version = %config.service_version,
        format = ?config.format,
        "Tracing initialized"
    );
    Ok(())
}
