use clap::Parser;
use fusion_api::cli::Cli;
use fusion_api::tracing_setup::{TracingConfig, init_tracing};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_tracing(&TracingConfig::from_environment())?;
    info!(version = env!("CARGO_PKG_VERSION"), "Starting Fusion dashboard");

    cli.execute().await
}
