//! Command-line interface for outguess.

use clap::Parser;

/// Outguess - try to outsmart an adaptive 0/1 predictor
#[derive(Parser, Debug, Clone)]
#[command(name = "outguess")]
#[command(about = "Try to outsmart an adaptive 0/1 predictor", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Show the frequency table before each prompt from the start
    #[arg(short, long)]
    pub table: bool,

    /// Points of lead required to win
    #[arg(short, long, default_value_t = 10)]
    pub lead: i32,
}
