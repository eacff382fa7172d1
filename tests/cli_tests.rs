//! Integration tests for the CLI interface
//!
//! Tests the main entry point, command parsing, and end-to-end artifact
//! generation against temporary log directories.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const UPLOAD_LOG: &str = "\
[DEBUG 2024-03-01T12:00:00.000Z] Starting upload of report.pdf (52417 bytes)
[DEBUG 2024-03-01T12:00:01.000Z] Upload successful for report.pdf, took 843ms, file ID: f_8231ab
[DEBUG 2024-03-01T12:00:02.000Z] Upload FAILED for big.docx: Status 500
";

#[test]
fn test_cli_help_flag() {
    let mut cmd = Command::cargo_bin("loadlens").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("Commands:"));
}

#[test]
fn test_analyze_help() {
    let mut cmd = Command::cargo_bin("loadlens").unwrap();
    cmd.arg("analyze")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--all"))
        .stdout(predicate::str::contains("--export"))
        .stdout(predicate::str::contains("--summary-only"));
}

#[test]
fn test_invalid_command() {
    let mut cmd = Command::cargo_bin("loadlens").unwrap();
    cmd.arg("invalid-command")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}

#[test]
fn test_summary_only_run() {
    let temp = TempDir::new().unwrap();
    let logs = temp.path().join("logs");
    fs::create_dir(&logs).unwrap();
    fs::write(logs.join("scenario1_basic.log"), UPLOAD_LOG).unwrap();

    let mut cmd = Command::cargo_bin("loadlens").unwrap();
    cmd.current_dir(temp.path())
        .arg("analyze")
        .arg("--all")
        .arg("--summary-only")
        .assert()
        .success()
        .stdout(predicate::str::contains("LOAD TESTING ANALYTICS SUMMARY"))
        .stdout(predicate::str::contains("FILE UPLOAD TESTS:"))
        .stdout(predicate::str::contains("Analysis complete!"));

    // No artifacts in summary-only mode.
    assert!(!temp.path().join("results").exists());
}

#[test]
fn test_full_run_writes_chart_and_html() {
    let temp = TempDir::new().unwrap();
    let logs = temp.path().join("logs");
    fs::create_dir(&logs).unwrap();
    fs::write(logs.join("scenario1_basic.log"), UPLOAD_LOG).unwrap();

    let mut cmd = Command::cargo_bin("loadlens").unwrap();
    cmd.current_dir(temp.path())
        .arg("analyze")
        .arg("--all")
        .assert()
        .success()
        .stdout(predicate::str::contains("Analytics dashboard saved as:"))
        .stdout(predicate::str::contains("HTML dashboard saved as:"));

    let artifacts: Vec<String> = fs::read_dir(temp.path().join("results"))
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
        .collect();
    assert!(artifacts.iter().any(|name| name.ends_with(".svg")));
    assert!(artifacts.iter().any(|name| name.ends_with(".html")));
}

#[test]
fn test_export_writes_json() {
    let temp = TempDir::new().unwrap();
    let logs = temp.path().join("logs");
    fs::create_dir(&logs).unwrap();
    fs::write(logs.join("scenario1_basic.log"), UPLOAD_LOG).unwrap();

    let mut cmd = Command::cargo_bin("loadlens").unwrap();
    cmd.current_dir(temp.path())
        .arg("analyze")
        .arg("--all")
        .arg("--summary-only")
        .arg("--export")
        .assert()
        .success()
        .stdout(predicate::str::contains("Raw data exported to:"));

    let json_file = fs::read_dir(temp.path().join("results"))
        .unwrap()
        .map(|e| e.unwrap().path())
        .find(|p| p.extension().and_then(|s| s.to_str()) == Some("json"))
        .expect("JSON export present");

    let value: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(json_file).unwrap()).unwrap();
    assert_eq!(value["success_count"], 1);
    assert_eq!(value["failure_count"], 1);
    assert_eq!(value["scenarios"][0], "Scenario 1");
}

#[test]
fn test_specific_file_selection() {
    let temp = TempDir::new().unwrap();
    let logs = temp.path().join("logs");
    fs::create_dir(&logs).unwrap();
    let target = logs.join("scenario2_gradual.log");
    fs::write(&target, UPLOAD_LOG).unwrap();
    fs::write(logs.join("scenario1_other.log"), UPLOAD_LOG).unwrap();

    let mut cmd = Command::cargo_bin("loadlens").unwrap();
    cmd.current_dir(temp.path())
        .arg("analyze")
        .arg("-f")
        .arg(&target)
        .arg("--summary-only")
        .assert()
        .success()
        .stdout(predicate::str::contains("for specific file"))
        .stdout(predicate::str::contains("Total Tests: 2"));
}

#[test]
fn test_empty_logs_directory() {
    let temp = TempDir::new().unwrap();
    fs::create_dir(temp.path().join("logs")).unwrap();

    let mut cmd = Command::cargo_bin("loadlens").unwrap();
    cmd.current_dir(temp.path())
        .arg("analyze")
        .arg("--all")
        .arg("--summary-only")
        .assert()
        .success()
        .stdout(predicate::str::contains("No log files found"))
        .stdout(predicate::str::contains("Analysis complete!"));
}

#[test]
fn test_missing_file_does_not_abort_run() {
    let temp = TempDir::new().unwrap();

    let mut cmd = Command::cargo_bin("loadlens").unwrap();
    cmd.current_dir(temp.path())
        .arg("analyze")
        .arg("-f")
        .arg("does_not_exist.log")
        .arg("--summary-only")
        .assert()
        .success()
        .stdout(predicate::str::contains("Error parsing"))
        .stdout(predicate::str::contains("Analysis complete!"));
}
