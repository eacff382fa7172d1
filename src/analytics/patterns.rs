//! Pattern catalog for k6 debug log lines
//!
//! Each entry pairs a compiled regex with a capture mapper. The extractor
//! scans the full log text once per entry; matches are independent and a
//! line that matches nothing is simply ignored.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use super::models::LogEvent;

static UPLOAD_ATTEMPT_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\[DEBUG[^\]]*\] Starting upload of (\S+) \((\d+) bytes\)")
        .expect("Valid regex pattern")
});

static UPLOAD_SUCCESS_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\[DEBUG[^\]]*\] Upload successful for (\S+), took (\d+)ms, file ID: (\S+)")
        .expect("Valid regex pattern")
});

static UPLOAD_FAILURE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\[DEBUG[^\]]*\] Upload FAILED for (\S+): Status (\d+)")
        .expect("Valid regex pattern")
});

static CHAT_ATTEMPT_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\[DEBUG[^\]]*\] Starting chat completion with model: (\S+)")
        .expect("Valid regex pattern")
});

static CHAT_SUCCESS_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\[DEBUG[^\]]*\] Chat completion successful for model (\S+), took (\d+)ms")
        .expect("Valid regex pattern")
});

static CHAT_FAILURE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\[DEBUG[^\]]*\] Chat completion FAILED for model (\S+): Status (\d+)")
        .expect("Valid regex pattern")
});

/// One entry in the catalog: a line shape and how its captures become an
/// event. The mapper returns `None` when a numeric capture does not fit its
/// target type, which drops that single match.
pub struct PatternEntry {
    pub name: &'static str,
    regex: &'static Lazy<Regex>,
    map: fn(&Captures) -> Option<LogEvent>,
}

impl PatternEntry {
    /// All events this entry finds in `text`, in text order.
    pub fn find_all(&self, text: &str) -> Vec<LogEvent> {
        self.regex
            .captures_iter(text)
            .filter_map(|caps| (self.map)(&caps))
            .collect()
    }
}

pub static CATALOG: &[PatternEntry] = &[
    PatternEntry {
        name: "upload_attempt",
        regex: &UPLOAD_ATTEMPT_REGEX,
        map: |caps| {
            Some(LogEvent::UploadAttempt {
                file_name: caps[1].to_string(),
                byte_size: caps[2].parse().ok()?,
            })
        },
    },
    PatternEntry {
        name: "upload_success",
        regex: &UPLOAD_SUCCESS_REGEX,
        map: |caps| {
            Some(LogEvent::UploadSuccess {
                file_name: caps[1].to_string(),
                duration_ms: caps[2].parse().ok()?,
                artifact_id: caps[3].to_string(),
            })
        },
    },
    PatternEntry {
        name: "upload_failure",
        regex: &UPLOAD_FAILURE_REGEX,
        map: |caps| {
            Some(LogEvent::UploadFailure {
                file_name: caps[1].to_string(),
                status_code: caps[2].parse().ok()?,
            })
        },
    },
    PatternEntry {
        name: "chat_attempt",
        regex: &CHAT_ATTEMPT_REGEX,
        map: |caps| {
            Some(LogEvent::ChatAttempt {
                model: caps[1].to_string(),
            })
        },
    },
    PatternEntry {
        name: "chat_success",
        regex: &CHAT_SUCCESS_REGEX,
        map: |caps| {
            Some(LogEvent::ChatSuccess {
                model: caps[1].to_string(),
                duration_ms: caps[2].parse().ok()?,
            })
        },
    },
    PatternEntry {
        name: "chat_failure",
        regex: &CHAT_FAILURE_REGEX,
        map: |caps| {
            Some(LogEvent::ChatFailure {
                model: caps[1].to_string(),
                status_code: caps[2].parse().ok()?,
            })
        },
    },
];
