//! Analytics engine: file selection and the per-file fold driver
//!
//! Files are processed strictly sequentially; the aggregate is the only
//! mutable state. Per-file read errors are reported and skipped so a bad
//! file never aborts the run.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use tracing::debug;

use super::aggregate::AnalyticsData;
use super::extractor::{extract_events, extract_run_metrics, scenario_label};
use crate::error::Result;

pub struct AnalyticsEngine {
    logs_directory: PathBuf,
    data: AnalyticsData,
}

impl AnalyticsEngine {
    pub fn new(logs_directory: impl Into<PathBuf>) -> Self {
        Self {
            logs_directory: logs_directory.into(),
            data: AnalyticsData::new(),
        }
    }

    pub fn data(&self) -> &AnalyticsData {
        &self.data
    }

    pub fn into_data(self) -> AnalyticsData {
        self.data
    }

    /// Parse a single log file and fold everything it yields.
    ///
    /// The scenario label is derived once from the file name and pushed
    /// exactly once, even when no pattern matched.
    pub fn parse_log_file(&mut self, path: &Path) -> Result<()> {
        println!("📊 Analyzing log file: {}", path.display());

        let content = fs::read_to_string(path)?;
        let scenario = scenario_label(path);

        let events = extract_events(&content);
        debug!(
            "Extracted {} events from {} ({})",
            events.len(),
            path.display(),
            scenario
        );
        for event in events {
            self.data.fold_event(event, &scenario);
        }

        let metrics = extract_run_metrics(&content);
        if !metrics.is_empty() {
            self.data.merge_metrics(metrics);
        }

        self.data.push_scenario(scenario);
        Ok(())
    }

    /// Process every `*.log` in the logs directory, in sorted path order.
    pub fn analyze_all_logs(&mut self) {
        let log_files = self.log_files();

        if log_files.is_empty() {
            println!(
                "❌ No log files found in {}",
                self.logs_directory.display()
            );
            return;
        }

        println!("📁 Found {} log files - analyzing all", log_files.len());

        for log_file in log_files {
            if let Err(e) = self.parse_log_file(&log_file) {
                println!("⚠️  Error parsing {}: {}", log_file.display(), e);
            }
        }
    }

    /// Process only the most recently modified `*.log` in the logs directory.
    pub fn analyze_latest_log(&mut self) {
        let log_files = self.log_files();

        let Some(latest) = log_files.into_iter().max_by_key(|path| modified_at(path)) else {
            println!(
                "❌ No log files found in {}",
                self.logs_directory.display()
            );
            return;
        };

        println!(
            "📁 Analyzing latest log file: {}",
            latest
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_else(|| latest.display().to_string())
        );

        if let Err(e) = self.parse_log_file(&latest) {
            println!("⚠️  Error parsing {}: {}", latest.display(), e);
        }
    }

    /// The `*.log` files directly inside the logs directory, sorted by path.
    fn log_files(&self) -> Vec<PathBuf> {
        let mut files: Vec<PathBuf> = walkdir::WalkDir::new(&self.logs_directory)
            .max_depth(1)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .filter(|e| e.path().extension().and_then(|s| s.to_str()) == Some("log"))
            .map(|e| e.into_path())
            .collect();
        files.sort();
        files
    }
}

fn modified_at(path: &Path) -> SystemTime {
    fs::metadata(path)
        .and_then(|m| m.modified())
        .unwrap_or(SystemTime::UNIX_EPOCH)
}
