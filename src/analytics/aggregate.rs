//! The run-wide analytics accumulator
//!
//! One `AnalyticsData` exists per invocation. The extraction phase folds
//! every event and metrics block into it; reporters then borrow it
//! immutably. Folding the same file twice doubles every counter; there is
//! no deduplication.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use super::models::{ChatRecord, ErrorRecord, LogEvent, RunMetrics, UploadRecord};

/// Aggregated view of every processed log file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalyticsData {
    pub uploads: Vec<UploadRecord>,
    pub chat_completions: Vec<ChatRecord>,
    pub errors: Vec<ErrorRecord>,
    pub metrics: RunMetrics,
    pub scenarios: Vec<String>,
    pub file_types: HashMap<String, u64>,
    pub chat_models: HashMap<String, u64>,
    pub response_times: Vec<u64>,
    pub chat_response_times: Vec<u64>,
    pub success_count: u64,
    pub failure_count: u64,
    pub chat_success_count: u64,
    pub chat_failure_count: u64,
}

impl AnalyticsData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one extracted event into the aggregate. Infallible; events are
    /// well-typed by construction.
    pub fn fold_event(&mut self, event: LogEvent, scenario: &str) {
        match event {
            LogEvent::UploadAttempt { file_name, .. } => {
                bump(&mut self.file_types, file_extension(&file_name));
            }
            LogEvent::UploadSuccess {
                file_name,
                duration_ms,
                ..
            } => {
                self.uploads.push(UploadRecord {
                    filename: file_name,
                    duration: duration_ms,
                    status: "success".to_string(),
                    scenario: scenario.to_string(),
                });
                self.response_times.push(duration_ms);
                self.success_count += 1;
            }
            LogEvent::UploadFailure {
                file_name,
                status_code,
            } => {
                self.errors.push(ErrorRecord::upload(
                    file_name,
                    status_code,
                    scenario.to_string(),
                ));
                self.failure_count += 1;
            }
            LogEvent::ChatAttempt { model } => {
                bump(&mut self.chat_models, &model);
            }
            LogEvent::ChatSuccess { model, duration_ms } => {
                self.chat_completions.push(ChatRecord {
                    model,
                    duration: duration_ms,
                    status: "success".to_string(),
                    scenario: scenario.to_string(),
                });
                self.chat_response_times.push(duration_ms);
                self.chat_success_count += 1;
            }
            LogEvent::ChatFailure { model, status_code } => {
                self.errors
                    .push(ErrorRecord::chat(model, status_code, scenario.to_string()));
                self.chat_failure_count += 1;
            }
        }
    }

    /// Overwrite scalar metrics with whatever the latest file supplied.
    pub fn merge_metrics(&mut self, metrics: RunMetrics) {
        self.metrics.merge_from(metrics);
    }

    /// Record that a file was processed, whether or not it matched anything.
    pub fn push_scenario(&mut self, label: String) {
        self.scenarios.push(label);
    }

    /// True when at least one upload, chat completion, or error was seen.
    pub fn has_data(&self) -> bool {
        !self.uploads.is_empty() || !self.errors.is_empty() || !self.chat_completions.is_empty()
    }

    pub fn upload_total(&self) -> u64 {
        self.success_count + self.failure_count
    }

    pub fn chat_total(&self) -> u64 {
        self.chat_success_count + self.chat_failure_count
    }

    pub fn overall_total(&self) -> u64 {
        self.upload_total() + self.chat_total()
    }

    /// Overall success percentage across uploads and chat completions, or
    /// `None` when nothing was counted.
    pub fn overall_success_rate(&self) -> Option<f64> {
        let total = self.overall_total();
        if total == 0 {
            return None;
        }
        let successes = self.success_count + self.chat_success_count;
        Some(successes as f64 / total as f64 * 100.0)
    }

    /// Error counts keyed by HTTP status code, in ascending code order.
    pub fn error_breakdown(&self) -> BTreeMap<u16, u64> {
        let mut breakdown = BTreeMap::new();
        for error in &self.errors {
            *breakdown.entry(error.status_code()).or_insert(0u64) += 1;
        }
        breakdown
    }

    /// Scenario run counts in first-seen order.
    pub fn scenario_counts(&self) -> Vec<(String, u64)> {
        let mut counts: Vec<(String, u64)> = Vec::new();
        for scenario in &self.scenarios {
            match counts.iter_mut().find(|(name, _)| name == scenario) {
                Some((_, count)) => *count += 1,
                None => counts.push((scenario.clone(), 1)),
            }
        }
        counts
    }
}

fn bump(map: &mut HashMap<String, u64>, key: &str) {
    *map.entry(key.to_string()).or_insert(0u64) += 1;
}

/// The substring after the final `.`; a name with no dot is returned whole,
/// so extensionless files count under their own name.
fn file_extension(file_name: &str) -> &str {
    file_name.rsplit('.').next().unwrap_or(file_name)
}

/// Summary statistics over a duration list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DurationStats {
    pub mean: f64,
    pub median: f64,
    pub min: u64,
    pub max: u64,
}

impl DurationStats {
    /// Standard mean/median/min/max; `None` for an empty list.
    pub fn compute(times: &[u64]) -> Option<Self> {
        if times.is_empty() {
            return None;
        }

        let mut sorted = times.to_vec();
        sorted.sort_unstable();

        let mid = sorted.len() / 2;
        let median = if sorted.len() % 2 == 0 {
            (sorted[mid - 1] + sorted[mid]) as f64 / 2.0
        } else {
            sorted[mid] as f64
        };

        Some(Self {
            mean: sorted.iter().sum::<u64>() as f64 / sorted.len() as f64,
            median,
            min: sorted[0],
            max: sorted[sorted.len() - 1],
        })
    }
}
