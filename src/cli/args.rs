//! CLI argument structures
//!
//! Defines the main CLI structure and subcommands for loadlens.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Analyze k6 load-test logs and generate visual reports
#[derive(Parser)]
#[command(name = "loadlens")]
#[command(about = "loadlens - Analyze k6 load-test logs and generate visual reports", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Enable verbose output (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze load-test logs (default command)
    #[command(name = "analyze")]
    Analyze {
        /// Specific log file to analyze
        #[arg(short = 'f', long)]
        file: Option<PathBuf>,

        /// Directory containing log files
        #[arg(short = 'd', long, default_value = "logs")]
        dir: PathBuf,

        /// Analyze all log files instead of just the latest
        #[arg(long)]
        all: bool,

        /// Export raw data to JSON
        #[arg(long)]
        export: bool,

        /// Skip chart and HTML generation and show only the text summary
        #[arg(long)]
        summary_only: bool,

        /// Results directory for generated artifacts
        #[arg(short = 'o', long, default_value = "results")]
        output: PathBuf,
    },
}
