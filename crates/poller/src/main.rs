//! Fetch-and-Store - Main Entry Point

use anyhow::Context;
use clap::Parser;
use poller::{init_logging, Poller, PollerConfig};
use std::path::PathBuf;

/// Poll the fitness endpoint and append samples to a CSV file
#[derive(Debug, Parser)]
#[command(name = "fetch-and-store", version)]
struct Args {
    /// TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Fitness data endpoint
    #[arg(long)]
    url: Option<String>,

    /// Number of fetch attempts
    #[arg(long)]
    cycles: Option<usize>,

    /// Pause between attempts in milliseconds
    #[arg(long)]
    interval_ms: Option<u64>,

    /// Request samples for this user only
    #[arg(long)]
    user_id: Option<u32>,

    /// CSV output file
    #[arg(long, short)]
    output: Option<PathBuf>,
}

impl Args {
    fn apply(self, config: &mut PollerConfig) {
        if let Some(url) = self.url {
            config.url = url;
        }
        if let Some(cycles) = self.cycles {
            config.cycles = cycles;
        }
        if let Some(interval_ms) = self.interval_ms {
            config.interval_ms = interval_ms;
        }
        if self.user_id.is_some() {
            config.user_id = self.user_id;
        }
        if let Some(output) = self.output {
            config.output = output;
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut config =
        PollerConfig::load(args.config.as_deref()).context("loading configuration")?;
    args.apply(&mut config);

    init_logging(config.json_logs);

    let poller = Poller::new(config).context("starting poller")?;
    let summary = poller.run().await.context("polling fitness data")?;

    println!(
        "Stored {} of {} samples ({} failed)",
        summary.stored, summary.attempted, summary.failed
    );
    Ok(())
}
