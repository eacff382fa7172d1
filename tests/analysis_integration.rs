//! End-to-end extraction and aggregation tests
//!
//! Drives the engine over real log directories and checks the aggregate
//! against known totals.

use std::fs;

use loadlens::analytics::aggregate::DurationStats;
use loadlens::analytics::AnalyticsEngine;
use tempfile::TempDir;

const SCENARIO1: &str = "\
[DEBUG 2024-03-01T12:00:00.000Z] Starting upload of a.pdf (1000 bytes)
[DEBUG 2024-03-01T12:00:01.000Z] Upload successful for a.pdf, took 100ms, file ID: f_1
[DEBUG 2024-03-01T12:00:02.000Z] Upload successful for b.pdf, took 150ms, file ID: f_2
[DEBUG 2024-03-01T12:00:03.000Z] Upload successful for c.pdf, took 200ms, file ID: f_3
[DEBUG 2024-03-01T12:00:04.000Z] Upload FAILED for d.pdf: Status 500
";

const SCENARIO2: &str = "\
[DEBUG 2024-03-01T13:00:00.000Z] Upload successful for e.pdf, took 300ms, file ID: f_4
[DEBUG 2024-03-01T13:00:01.000Z] Upload successful for f.pdf, took 400ms, file ID: f_5
";

fn two_scenario_dir() -> TempDir {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("scenario1.log"), SCENARIO1).unwrap();
    fs::write(temp.path().join("scenario2.log"), SCENARIO2).unwrap();
    temp
}

#[test]
fn test_two_file_aggregate_totals() {
    let temp = two_scenario_dir();
    let mut engine = AnalyticsEngine::new(temp.path());
    engine.analyze_all_logs();

    let data = engine.data();
    assert_eq!(data.success_count, 5);
    assert_eq!(data.failure_count, 1);
    assert_eq!(data.response_times, vec![100, 150, 200, 300, 400]);
    assert_eq!(data.scenarios, vec!["Scenario 1", "Scenario 2"]);

    let stats = DurationStats::compute(&data.response_times).unwrap();
    assert_eq!(stats.mean, 230.0);

    let breakdown = data.error_breakdown();
    assert_eq!(breakdown.len(), 1);
    assert_eq!(breakdown[&500], 1);
}

#[test]
fn test_reprocessing_doubles_everything() {
    let temp = two_scenario_dir();
    let mut engine = AnalyticsEngine::new(temp.path());
    engine.analyze_all_logs();
    engine.analyze_all_logs();

    let data = engine.data();
    assert_eq!(data.success_count, 10);
    assert_eq!(data.failure_count, 2);
    assert_eq!(data.response_times.len(), 10);
    assert_eq!(data.scenarios.len(), 4);
}

#[test]
fn test_metrics_block_last_file_wins() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("scenario1.log"),
        "\
█ TOTAL RESULTS
    http_req_duration..............: avg=1.5s min=100ms med=1.2s max=3s p(90)=2s p(95)=2.5s
    http_reqs......................: 50 5.0/s
█ EXECUTION
",
    )
    .unwrap();
    fs::write(
        temp.path().join("scenario2.log"),
        "\
█ TOTAL RESULTS
    http_req_duration..............: avg=800ms min=90ms med=700ms max=2s p(90)=1.5s p(95)=1.9s
█ EXECUTION
",
    )
    .unwrap();

    let mut engine = AnalyticsEngine::new(temp.path());
    engine.analyze_all_logs();

    let metrics = &engine.data().metrics;
    // scenario2 overwrote the duration fields; throughput survives from
    // scenario1 because scenario2 never supplied it.
    assert_eq!(metrics.avg_duration, Some(800.0));
    assert_eq!(metrics.p95_duration, Some(1900.0));
    assert_eq!(metrics.throughput, Some(5.0));
    assert_eq!(metrics.total_requests, Some(50.0));
}

#[test]
fn test_mixed_upload_and_chat_log() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("scenario6_mixed.log"),
        "\
[DEBUG t] Starting upload of slides.pptx (90000 bytes)
[DEBUG t] Upload successful for slides.pptx, took 1200ms, file ID: f_9
[DEBUG t] Starting chat completion with model: gpt-4
[DEBUG t] Chat completion successful for model gpt-4, took 2500ms
[DEBUG t] Starting chat completion with model: claude-3
[DEBUG t] Chat completion FAILED for model claude-3: Status 429
",
    )
    .unwrap();

    let mut engine = AnalyticsEngine::new(temp.path());
    engine.analyze_all_logs();

    let data = engine.data();
    assert_eq!(data.success_count, 1);
    assert_eq!(data.chat_success_count, 1);
    assert_eq!(data.chat_failure_count, 1);
    assert_eq!(data.file_types["pptx"], 1);
    assert_eq!(data.chat_models["gpt-4"], 1);
    assert_eq!(data.chat_models["claude-3"], 1);
    assert_eq!(data.chat_response_times, vec![2500]);
    assert_eq!(data.scenarios, vec!["Scenario 6"]);
    assert_eq!(data.error_breakdown()[&429], 1);
}
