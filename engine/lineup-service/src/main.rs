//! Lineup Construction Service
//!
//! Entry point: load a slate, generate a batch of validated lineups across
//! the strategy rotation, and write the submission files.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::info;

use lineup_service::{initialize_logging, load_configuration, LineupService};

/// DFS lineup construction service
#[derive(Parser)]
#[command(name = "lineup-service")]
#[command(about = "Builds salary-capped lineups from a slate document")]
struct Cli {
    /// Path to the service configuration TOML
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Slate JSON to build from (overrides configuration)
    #[arg(long)]
    slate: Option<PathBuf>,

    /// Number of lineups to request (overrides configuration)
    #[arg(long)]
    count: Option<u32>,

    /// Output directory for submission files (overrides configuration)
    #[arg(long)]
    out: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = load_configuration(cli.config.as_deref())?;
    if let Some(slate) = cli.slate {
        config.slate_file = slate;
    }
    if let Some(count) = cli.count {
        config.lineup_count = count;
    }
    if let Some(out) = cli.out {
        config.output_dir = out;
    }

    initialize_logging(&config.logging.level)?;

    info!("Starting lineup service v{}", env!("CARGO_PKG_VERSION"));

    let report = LineupService::new(config).run().await?;

    info!(
        requested = report.requested,
        produced = report.produced,
        submission = %report.submission.display(),
        "lineup service run complete"
    );
    Ok(())
}
