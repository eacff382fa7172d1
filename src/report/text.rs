//! Text summary reporter
//!
//! Prints fixed labeled sections to stdout, each present only when its
//! backing data is non-empty. Rate lines guard division by zero by omitting
//! the whole section when the denominator is zero.

use std::fmt::Write;

use crate::analytics::aggregate::{AnalyticsData, DurationStats};

const RULE: &str =
    "======================================================================";

pub fn print_summary(data: &AnalyticsData) {
    print!("{}", render_summary(data));
}

pub fn render_summary(data: &AnalyticsData) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "\n{RULE}");
    let _ = writeln!(out, "📊 LOAD TESTING ANALYTICS SUMMARY");
    let _ = writeln!(out, "{RULE}");

    let file_total = data.upload_total();
    if file_total > 0 {
        let success_rate = data.success_count as f64 / file_total as f64 * 100.0;
        let _ = writeln!(out, "📁 FILE UPLOAD TESTS:");
        let _ = writeln!(out, "   Total Tests: {file_total}");
        let _ = writeln!(
            out,
            "   ✅ Successful: {} ({success_rate:.1}%)",
            data.success_count
        );
        let _ = writeln!(
            out,
            "   ❌ Failed: {} ({:.1}%)",
            data.failure_count,
            100.0 - success_rate
        );
    }

    let chat_total = data.chat_total();
    if chat_total > 0 {
        let chat_success_rate = data.chat_success_count as f64 / chat_total as f64 * 100.0;
        let _ = writeln!(out, "\n💬 CHAT COMPLETION TESTS:");
        let _ = writeln!(out, "   Total Tests: {chat_total}");
        let _ = writeln!(
            out,
            "   ✅ Successful: {} ({chat_success_rate:.1}%)",
            data.chat_success_count
        );
        let _ = writeln!(
            out,
            "   ❌ Failed: {} ({:.1}%)",
            data.chat_failure_count,
            100.0 - chat_success_rate
        );
    }

    if let Some(overall_rate) = data.overall_success_rate() {
        let _ = writeln!(out, "\n🎯 OVERALL PERFORMANCE:");
        let _ = writeln!(out, "   Total Tests: {}", data.overall_total());
        let _ = writeln!(out, "   ✅ Overall Success Rate: {overall_rate:.1}%");
    }

    if let Some(stats) = DurationStats::compute(&data.response_times) {
        let _ = writeln!(out, "\n📁 FILE UPLOAD RESPONSE TIMES:");
        write_duration_stats(&mut out, stats);
    }

    if let Some(stats) = DurationStats::compute(&data.chat_response_times) {
        let _ = writeln!(out, "\n💬 CHAT COMPLETION RESPONSE TIMES:");
        write_duration_stats(&mut out, stats);
    }

    if !data.file_types.is_empty() {
        let _ = writeln!(out, "\n📁 FILE TYPES TESTED:");
        for (file_type, count) in sorted_entries(&data.file_types) {
            let _ = writeln!(out, "   {file_type}: {count}");
        }
    }

    if !data.chat_models.is_empty() {
        let _ = writeln!(out, "\n🤖 CHAT MODELS TESTED:");
        for (model, count) in sorted_entries(&data.chat_models) {
            let _ = writeln!(out, "   {model}: {count}");
        }
    }

    if !data.errors.is_empty() {
        let _ = writeln!(out, "\n❌ ERROR ANALYSIS:");
        for (code, count) in data.error_breakdown() {
            let _ = writeln!(out, "   HTTP {code}: {count} occurrences");
        }
    }

    let _ = writeln!(out, "\n{RULE}");
    out
}

fn write_duration_stats(out: &mut String, stats: DurationStats) {
    let _ = writeln!(out, "   Average: {:.1} ms", stats.mean);
    let _ = writeln!(out, "   Median: {:.1} ms", stats.median);
    let _ = writeln!(out, "   Min: {} ms", stats.min);
    let _ = writeln!(out, "   Max: {} ms", stats.max);
}

fn sorted_entries(map: &std::collections::HashMap<String, u64>) -> Vec<(&String, &u64)> {
    let mut entries: Vec<_> = map.iter().collect();
    entries.sort_by(|a, b| a.0.cmp(b.0));
    entries
}
