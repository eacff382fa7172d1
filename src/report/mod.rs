//! Reporters over the finished aggregate
//!
//! Each reporter borrows the aggregate immutably and produces one artifact:
//! a stdout summary, an SVG chart dashboard, an interactive HTML dashboard,
//! or a JSON export. They do not interact with each other.

pub mod chart;
pub mod export;
pub mod html;
pub mod text;

use chrono::Local;

/// Timestamp fragment used in artifact file names.
pub(crate) fn timestamp() -> String {
    Local::now().format("%Y%m%d_%H%M%S").to_string()
}
