//! Command-line parsing for the DES Y3 BAO likelihood tool.
//!
//! The goal of this module is to keep **argument parsing** and **command dispatch**
//! separate from the likelihood code.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "bao", version, about = "DES Y3 BAO alpha likelihood")]
pub struct Cli {
    /// Log evaluation details (same as RUST_LOG=debug).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Summarize the chi2 profile and print the requirements declaration.
    Info(InfoArgs),
    /// Evaluate the log-likelihood for one theory point.
    Eval(EvalArgs),
    /// Evaluate the log-likelihood over a range of rdrag values.
    Scan(ScanArgs),
    /// Draw the chi2 profile, optionally marking a predicted alpha.
    Plot(PlotArgs),
}

/// Where the profile comes from and which chi2 column to use.
#[derive(Debug, Args, Clone, Default)]
pub struct ProfileArgs {
    /// Chi2 profile CSV (overrides DESY3BAO_DATA and the bundled default).
    #[arg(long, value_name = "CSV")]
    pub data: Option<PathBuf>,

    /// Column holding the chi2 method (column 0 is alpha).
    #[arg(long)]
    pub column: Option<usize>,
}

#[derive(Debug, Args)]
pub struct InfoArgs {
    #[command(flatten)]
    pub profile: ProfileArgs,

    /// Print the requirements declaration as JSON only.
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct EvalArgs {
    #[command(flatten)]
    pub profile: ProfileArgs,

    /// Sound horizon at the drag epoch (Mpc).
    #[arg(long)]
    pub rdrag: f64,

    /// Predicted distance at the effective redshift (Mpc).
    #[arg(long, conflicts_with = "curve", required_unless_present = "curve")]
    pub dm: Option<f64>,

    /// CSV of `z,d_a` rows, resampled onto the redshift grid.
    #[arg(long, value_name = "CSV")]
    pub curve: Option<PathBuf>,

    /// Print the evaluation as JSON.
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct ScanArgs {
    #[command(flatten)]
    pub profile: ProfileArgs,

    /// Predicted distance at the effective redshift (Mpc).
    #[arg(long)]
    pub dm: f64,

    /// Lower end of the rdrag range (Mpc).
    #[arg(long, default_value_t = 130.0)]
    pub rdrag_min: f64,

    /// Upper end of the rdrag range (Mpc).
    #[arg(long, default_value_t = 165.0)]
    pub rdrag_max: f64,

    /// Number of scan points.
    #[arg(long, default_value_t = 36)]
    pub steps: usize,

    /// Export the scan (`.json` for JSON, otherwise CSV).
    #[arg(long)]
    pub export: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct PlotArgs {
    #[command(flatten)]
    pub profile: ProfileArgs,

    /// Sound horizon used for the marker (Mpc).
    #[arg(long, requires = "dm")]
    pub rdrag: Option<f64>,

    /// Predicted distance used for the marker (Mpc).
    #[arg(long, requires = "rdrag")]
    pub dm: Option<f64>,

    /// Plot width (columns).
    #[arg(long, default_value_t = 100)]
    pub width: usize,

    /// Plot height (rows).
    #[arg(long, default_value_t = 25)]
    pub height: usize,
}
