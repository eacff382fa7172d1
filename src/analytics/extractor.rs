//! Event and metrics extraction from raw log text
//!
//! Pure functions over the full text of one log file. File I/O and fold
//! orchestration live in [`super::engine`].

use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;

use super::models::{LogEvent, RunMetrics};
use super::patterns::CATALOG;

static SCENARIO_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"scenario(\d+)").expect("Valid regex pattern"));

/// The k6 summary section sits between these two banner lines.
static METRICS_BLOCK_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)█ TOTAL RESULTS.*?█ EXECUTION").expect("Valid regex pattern")
});

static AVG_DURATION_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"http_req_duration.*?avg=(\d+\.?\d*)([ms]+)").expect("Valid regex pattern"));

static P95_DURATION_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"http_req_duration.*?p\(95\)=(\d+\.?\d*)([ms]+)").expect("Valid regex pattern")
});

static FAILURE_RATE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"http_req_failed.*?(\d+\.?\d*)%").expect("Valid regex pattern"));

static SUCCESS_RATE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"success_rate.*?(\d+\.?\d*)%").expect("Valid regex pattern"));

static TOTAL_REQUESTS_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"http_reqs.*?(\d+)").expect("Valid regex pattern"));

static THROUGHPUT_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"http_reqs.*?(\d+\.?\d*)/s").expect("Valid regex pattern"));

/// Derive the scenario label from a log file name.
///
/// The first `scenarioN` token in the base name selects `"Scenario N"`;
/// anything else yields `"Unknown"`.
pub fn scenario_label(path: &Path) -> String {
    let base = path
        .file_name()
        .and_then(|s| s.to_str())
        .unwrap_or_default();
    match SCENARIO_REGEX.captures(base) {
        Some(caps) => format!("Scenario {}", &caps[1]),
        None => "Unknown".to_string(),
    }
}

/// Extract every event the catalog recognizes, in catalog order with each
/// pattern's matches in text order.
pub fn extract_events(text: &str) -> Vec<LogEvent> {
    CATALOG
        .iter()
        .flat_map(|entry| entry.find_all(text))
        .collect()
}

/// Extract scalar run metrics from the bounded k6 summary section.
///
/// Returns an empty `RunMetrics` when the section is absent; every inner
/// pattern is optional. Durations captured with a bare `s` suffix are
/// normalized to milliseconds.
pub fn extract_run_metrics(text: &str) -> RunMetrics {
    let mut metrics = RunMetrics::default();

    let Some(block) = METRICS_BLOCK_REGEX.find(text) else {
        return metrics;
    };
    let block = block.as_str();

    metrics.avg_duration = capture_duration(&AVG_DURATION_REGEX, block);
    metrics.p95_duration = capture_duration(&P95_DURATION_REGEX, block);
    metrics.failure_rate = capture_scalar(&FAILURE_RATE_REGEX, block);
    metrics.success_rate = capture_scalar(&SUCCESS_RATE_REGEX, block);
    metrics.total_requests = capture_scalar(&TOTAL_REQUESTS_REGEX, block);
    metrics.throughput = capture_scalar(&THROUGHPUT_REGEX, block);

    metrics
}

fn capture_scalar(regex: &Regex, block: &str) -> Option<f64> {
    regex
        .captures(block)
        .and_then(|caps| caps[1].parse::<f64>().ok())
}

fn capture_duration(regex: &Regex, block: &str) -> Option<f64> {
    let caps = regex.captures(block)?;
    let value: f64 = caps[1].parse().ok()?;
    // k6 prints seconds as a bare "s"; everything else is already ms.
    if &caps[2] == "s" {
        Some(value * 1000.0)
    } else {
        Some(value)
    }
}
