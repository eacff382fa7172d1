//! # Loadlens
//!
//! A CLI tool that turns raw k6 load-test logs into aggregate statistics and
//! visual dashboards.
//!
//! ## Usage
//!
//! ```bash
//! loadlens analyze [-f file.log | -d logs] [--all] [--export] [--summary-only]
//! ```
//!
//! ## Modules
//!
//! - `analytics` - Log parsing, event extraction, and metric aggregation
//! - `cli` - Command-line interface definitions and command routing
//! - `report` - Text, chart, and HTML reporters plus the JSON exporter

pub mod analytics;
pub mod cli;
pub mod report;

pub mod error;

pub use error::{Error, Result};
