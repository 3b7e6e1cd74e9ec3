//! Mock Fitness API - Main Entry Point

use anyhow::Context;
use api::{init_logging, run_server, ApiConfig};
use clap::Parser;
use metrics_exporter_prometheus::PrometheusBuilder;
use std::path::PathBuf;
use tracing::info;

/// Serve randomized fitness telemetry over HTTP
#[derive(Debug, Parser)]
#[command(name = "fitness-api", version)]
struct Args {
    /// TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Listen address, overrides the configured one
    #[arg(long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut config = ApiConfig::load(args.config.as_deref()).context("loading configuration")?;
    if let Some(bind) = args.bind {
        config.bind = bind;
    }

    init_logging(config.log_format);
    info!("=== Mock Fitness API v{} ===", env!("CARGO_PKG_VERSION"));

    let metrics = if config.enable_metrics {
        let handle = PrometheusBuilder::new()
            .install_recorder()
            .context("installing metrics recorder")?;
        Some(handle)
    } else {
        None
    };

    run_server(&config, metrics).await?;

    Ok(())
}
