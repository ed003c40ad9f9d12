//! Command line interface for the `fusion` binary

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use fusion_calculator::{Allocation, Share, allocate, normalize_share_list};
use fusion_core::{
    DashboardConfig, DashboardSnapshot, Lens, ResolvedConfig, Scenario, export_org_mix_csv,
};
use tracing::info;

use crate::config::ServiceConfig;
use crate::{AppState, create_app};

/// Fusion workforce dashboard
#[derive(Debug, Parser)]
#[command(name = "fusion")]
#[command(about = "Workforce mix dashboard: headcount allocation, scenarios and labour economics")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Dashboard configuration file (JSON or TOML); defaults to FUSION_CONFIG_PATH
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the HTTP service
    Serve {
        /// Address to bind (overrides FUSION_HOST)
        #[arg(long)]
        host: Option<String>,

        /// Port to bind (overrides FUSION_PORT)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Print the dashboard snapshot as JSON
    Snapshot {
        /// Lens to compute for (CEO, CFO, CHRO, CIO)
        #[arg(short, long, default_value = "CEO")]
        lens: Lens,

        /// Total headcount (defaults to the configured total)
        #[arg(short, long)]
        total: Option<u64>,
    },

    /// Write the org mix CSV
    Export {
        #[arg(short, long, default_value = "org_mix.csv")]
        output: PathBuf,
    },

    /// Allocate a total across named shares
    Allocate {
        #[arg(short, long)]
        total: u64,

        /// Share as NAME=PCT, repeatable
        #[arg(short, long = "share", value_parser = parse_share, required = true)]
        shares: Vec<Share>,

        /// Rescale the shares to sum to 100 first
        #[arg(long)]
        normalize: bool,
    },
}

fn parse_share(raw: &str) -> Result<Share, String> {
    let (name, pct) = raw
        .rsplit_once('=')
        .ok_or_else(|| format!("expected NAME=PCT, got '{raw}'"))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("missing name in '{raw}'"));
    }
    let pct: f64 = pct.trim().parse().map_err(|e| format!("invalid percentage in '{raw}': {e}"))?;
    Ok(Share::new(name, pct))
}

fn load_config(path: Option<&Path>) -> anyhow::Result<ResolvedConfig> {
    let config = match path {
        Some(path) => DashboardConfig::from_path(path)?,
        None => DashboardConfig::load(),
    };
    Ok(config.resolve())
}

fn default_snapshot(config: &ResolvedConfig) -> anyhow::Result<DashboardSnapshot> {
    Ok(DashboardSnapshot::compute(config, &Scenario::from_config(config))?)
}

pub fn run_allocate(total: u64, shares: &[Share], normalize: bool) -> anyhow::Result<Vec<Allocation>> {
    let shares = if normalize { normalize_share_list(shares) } else { shares.to_vec() };
    Ok(allocate(total, &shares)?)
}

impl Cli {
    pub async fn execute(self) -> anyhow::Result<()> {
        let config_path = self.config.as_deref();

        match self.command {
            Command::Serve { host, port } => {
                let config = load_config(config_path)?;
                let service = ServiceConfig::from_environment().with_overrides(host, port);
                serve(config, &service).await
            }
            Command::Snapshot { lens, total } => {
                let config = load_config(config_path)?;
                let mut scenario = Scenario::from_config(&config);
                scenario.lens = lens;
                if let Some(total) = total {
                    scenario.total_headcount = total;
                }
                let snapshot = DashboardSnapshot::compute(&config, &scenario)?;
                println!("{}", serde_json::to_string_pretty(&snapshot)?);
                Ok(())
            }
            Command::Export { output } => {
                let config = load_config(config_path)?;
                let csv = export_org_mix_csv(&default_snapshot(&config)?);
                fs::write(&output, csv)
                    .with_context(|| format!("writing {}", output.display()))?;
                info!(path = %output.display(), "Exported org mix");
                Ok(())
            }
            Command::Allocate { total, shares, normalize } => {
                let allocations = run_allocate(total, &shares, normalize)?;
                println!("{}", serde_json::to_string_pretty(&allocations)?);
                Ok(())
            }
        }
    }
}

async fn serve(config: ResolvedConfig, service: &ServiceConfig) -> anyhow::Result<()> {
    let app = create_app(AppState::new(config));
    let addr = service.addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("binding {addr}"))?;

    info!(%addr, "Fusion dashboard server started");
    axum::serve(listener, app).await?;
    Ok(())
}
