//! JSON export of the full aggregate

use std::fs;
use std::path::{Path, PathBuf};

use super::timestamp;
use crate::analytics::aggregate::AnalyticsData;
use crate::error::Result;

/// Serialize the aggregate to a timestamped JSON file in the results
/// directory and return its path.
pub fn export_json(data: &AnalyticsData, results_dir: &Path) -> Result<PathBuf> {
    fs::create_dir_all(results_dir)?;

    let output_path = results_dir.join(format!("load_test_data_{}.json", timestamp()));
    let json = serde_json::to_string_pretty(data)?;
    fs::write(&output_path, json)?;

    println!("📁 Raw data exported to: {}", output_path.display());
    Ok(output_path)
}
