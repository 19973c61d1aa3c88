//! Outguess - terminal 0/1 guessing game against an adaptive predictor.

use anyhow::Result;
use clap::Parser;
use outguess::{Cli, run};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Diagnostics go to stderr so they never disturb the game screen.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    info!(lead = cli.lead, table = cli.table, "starting game");

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let status = run(&mut stdin.lock(), &mut stdout.lock(), &cli)?;

    info!(%status, "game over");
    Ok(())
}
