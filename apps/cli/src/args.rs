//! # CLI Argument Definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// The main CLI structure parsing command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "mlife")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(arg_required_else_help = true)]
#[command(about = "Remaining mechanical life estimation and parameter comparison")]
pub(crate) struct Cli {
    /// Configuration file (defaults to an optional `mlife.toml` in the working directory)
    #[arg(short, long, global = true)]
    pub(crate) config: Option<PathBuf>,

    /// Log debug events to stderr
    #[arg(short, long, global = true)]
    pub(crate) verbose: bool,

    #[command(subcommand)]
    pub(crate) command: AppCommands,
}

/// Enumeration of available subcommands.
#[derive(Debug, Subcommand)]
pub(crate) enum AppCommands {
    /// Estimate remaining life and the first component to wear out
    Estimate {
        /// Operating hours per year
        #[arg(long, allow_negative_numbers = true)]
        usage_hours: f64,
        /// Load/stress cycles per year
        #[arg(long, allow_negative_numbers = true)]
        stress_cycles: f64,
        /// Operating temperature in °C
        #[arg(long, allow_negative_numbers = true)]
        temperature: f64,
        /// Print the estimate as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the 2013/2023 comparison of the configured parameters
    Parameters {
        /// Print the month-wise series of one parameter instead of the table
        #[arg(long)]
        monthly: Option<String>,
    },
}
