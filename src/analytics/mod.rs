//! Load-test log analytics module
//!
//! Extracts structured events from raw k6 log output and folds them into a
//! single aggregate that the reporters consume read-only.

pub mod aggregate;
pub mod engine;
pub mod extractor;
pub mod models;
pub mod patterns;
pub mod recommend;

pub use aggregate::AnalyticsData;
pub use engine::AnalyticsEngine;
pub use models::*;
pub use recommend::recommendations;
