//! Command routing and execution
//!
//! Routes parsed CLI commands to their implementations. With no subcommand
//! the tool runs a default analysis of the latest log file.

use std::path::PathBuf;

use anyhow::Result;

use crate::analytics::AnalyticsEngine;
use crate::cli::args::Commands;
use crate::report;

/// Execute a CLI command based on the parsed arguments
pub fn execute_command(command: Option<Commands>) -> Result<()> {
    match command {
        Some(Commands::Analyze {
            file,
            dir,
            all,
            export,
            summary_only,
            output,
        }) => run_analyze(file, dir, all, export, summary_only, output),
        None => run_analyze(
            None,
            PathBuf::from("logs"),
            false,
            false,
            false,
            PathBuf::from("results"),
        ),
    }
}

fn run_analyze(
    file: Option<PathBuf>,
    dir: PathBuf,
    all: bool,
    export: bool,
    summary_only: bool,
    output: PathBuf,
) -> Result<()> {
    let mut engine = AnalyticsEngine::new(&dir);

    if let Some(file) = file {
        println!("🚀 Starting Load Test Analysis for specific file...");
        if let Err(e) = engine.parse_log_file(&file) {
            println!("⚠️  Error parsing {}: {}", file.display(), e);
        }
    } else if all {
        println!("🚀 Starting Load Test Analysis for ALL log files...");
        engine.analyze_all_logs();
    } else {
        println!("🚀 Starting Load Test Analysis for LATEST log file...");
        println!("💡 Use --all flag to analyze all log files");
        engine.analyze_latest_log();
    }

    let data = engine.into_data();

    // The text summary always runs; later stages never prevent it.
    report::text::print_summary(&data);

    if !summary_only {
        if let Err(e) = report::chart::generate_chart_dashboard(&data, &output) {
            println!("⚠️  Chart generation failed: {e}");
        }
        if let Err(e) = report::html::generate_html_dashboard(&data, &output) {
            println!("⚠️  HTML dashboard generation failed: {e}");
        }
    }

    if export {
        if let Err(e) = report::export::export_json(&data, &output) {
            println!("⚠️  JSON export failed: {e}");
        }
    }

    println!("✅ Analysis complete!");
    Ok(())
}
