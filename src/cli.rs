use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Climate extreme indices from daily station records.
#[derive(Parser)]
#[command(
    name = "clima",
    version,
    about = "ETCCDI climate extreme indices from daily station records"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Compute annual, decadal, trend and monthly tables.
    Compute(ComputeArgs),
    /// Dump the calendar-day percentile thresholds of one variable.
    Thresholds(ThresholdsArgs),
}

/// Arguments for the `compute` subcommand.
#[derive(clap::Args)]
pub struct ComputeArgs {
    /// Path to TOML configuration file; built-in defaults apply when omitted.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override the cleaned daily CSV path from config.
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Override the output directory from config.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Also write the full report as `report.json`.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `thresholds` subcommand.
#[derive(clap::Args)]
pub struct ThresholdsArgs {
    /// Path to TOML configuration file; built-in defaults apply when omitted.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override the cleaned daily CSV path from config.
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Path for the threshold CSV.
    #[arg(short, long)]
    pub output: PathBuf,

    /// Variable to estimate thresholds for.
    #[arg(long, default_value = "temp_max")]
    pub variable: String,

    /// Override the baseline percentile from config.
    #[arg(long)]
    pub percentile: Option<f64>,
}
