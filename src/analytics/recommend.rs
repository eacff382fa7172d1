//! Rule-based performance recommendations
//!
//! Consumed by the HTML reporter. Thresholds mirror the dashboard's advice
//! tiers: success rate below 70% / 90%, average upload response time above
//! 10s / 5s, and targeted advice for specific HTTP status codes.

use serde::Serialize;

use super::aggregate::{AnalyticsData, DurationStats};

#[derive(Debug, Clone, Serialize)]
pub struct Recommendation {
    pub title: String,
    pub detail: String,
}

impl Recommendation {
    fn new(title: &str, detail: &str) -> Self {
        Self {
            title: title.to_string(),
            detail: detail.to_string(),
        }
    }
}

/// Build the recommendation list for a finished aggregate. Empty when
/// nothing was counted at all.
pub fn recommendations(data: &AnalyticsData) -> Vec<Recommendation> {
    let mut recs = Vec::new();

    let Some(success_rate) = data.overall_success_rate() else {
        return recs;
    };

    if success_rate < 70.0 {
        recs.push(Recommendation::new(
            "🚨 High Failure Rate:",
            "Investigate server capacity and PDF conversion issues",
        ));
    } else if success_rate < 90.0 {
        recs.push(Recommendation::new(
            "⚠️ Moderate Issues:",
            "Some optimization needed for better reliability",
        ));
    } else {
        recs.push(Recommendation::new(
            "✅ Good Success Rate:",
            "System performing well under current load",
        ));
    }

    let avg_time = DurationStats::compute(&data.response_times)
        .map(|stats| stats.mean)
        .unwrap_or(0.0);

    if avg_time > 10000.0 {
        recs.push(Recommendation::new(
            "🐌 Slow Response Times:",
            "Consider server optimization or load balancing",
        ));
    } else if avg_time > 5000.0 {
        recs.push(Recommendation::new(
            "⏱️ Moderate Response Times:",
            "Some optimization opportunities exist",
        ));
    } else {
        recs.push(Recommendation::new(
            "⚡ Good Response Times:",
            "Performance within acceptable range",
        ));
    }

    let breakdown = data.error_breakdown();
    if breakdown.contains_key(&500) {
        recs.push(Recommendation::new(
            "🔧 Server Errors (500):",
            "Check PDF conversion process and server resources",
        ));
    }
    if breakdown.contains_key(&400) {
        recs.push(Recommendation::new(
            "📝 Client Errors (400):",
            "Review file format validation and size limits",
        ));
    }

    recs
}
