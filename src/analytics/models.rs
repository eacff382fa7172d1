//! Data models for load-test log analytics

use serde::{Deserialize, Serialize};

/// One structured occurrence extracted from a log file.
///
/// Events are produced by the pattern catalog and consumed by the aggregate
/// fold; they are never serialized directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogEvent {
    UploadAttempt {
        file_name: String,
        byte_size: u64,
    },
    UploadSuccess {
        file_name: String,
        duration_ms: u64,
        artifact_id: String,
    },
    UploadFailure {
        file_name: String,
        status_code: u16,
    },
    ChatAttempt {
        model: String,
    },
    ChatSuccess {
        model: String,
        duration_ms: u64,
    },
    ChatFailure {
        model: String,
        status_code: u16,
    },
}

/// A successful file upload retained for reporting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadRecord {
    pub filename: String,
    pub duration: u64,
    pub status: String,
    pub scenario: String,
}

/// A successful chat completion retained for reporting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRecord {
    pub model: String,
    pub duration: u64,
    pub status: String,
    pub scenario: String,
}

/// A failed request. Upload and chat failures serialize to different shapes:
/// chat failures carry a `type` discriminator, upload failures do not.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ErrorRecord {
    Chat {
        model: String,
        status_code: u16,
        scenario: String,
        #[serde(rename = "type")]
        kind: String,
    },
    Upload {
        filename: String,
        status_code: u16,
        scenario: String,
    },
}

impl ErrorRecord {
    pub fn upload(filename: String, status_code: u16, scenario: String) -> Self {
        Self::Upload {
            filename,
            status_code,
            scenario,
        }
    }

    pub fn chat(model: String, status_code: u16, scenario: String) -> Self {
        Self::Chat {
            model,
            status_code,
            scenario,
            kind: "chat_completion".to_string(),
        }
    }

    pub fn status_code(&self) -> u16 {
        match self {
            Self::Upload { status_code, .. } | Self::Chat { status_code, .. } => *status_code,
        }
    }
}

/// Scalar metrics parsed from a k6 summary block.
///
/// Every field is optional; a field found in a later file overwrites the
/// earlier value rather than merging. Durations are normalized to
/// milliseconds at capture time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RunMetrics {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_duration: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub p95_duration: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure_rate: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub success_rate: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_requests: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub throughput: Option<f64>,
}

impl RunMetrics {
    /// Overwrite each field of `self` with the corresponding field of
    /// `other` when the latter is present. Last file wins.
    pub fn merge_from(&mut self, other: RunMetrics) {
        if other.avg_duration.is_some() {
            self.avg_duration = other.avg_duration;
        }
        if other.p95_duration.is_some() {
            self.p95_duration = other.p95_duration;
        }
        if other.failure_rate.is_some() {
            self.failure_rate = other.failure_rate;
        }
        if other.success_rate.is_some() {
            self.success_rate = other.success_rate;
        }
        if other.total_requests.is_some() {
            self.total_requests = other.total_requests;
        }
        if other.throughput.is_some() {
            self.throughput = other.throughput;
        }
    }

    pub fn is_empty(&self) -> bool {
        self.avg_duration.is_none()
            && self.p95_duration.is_none()
            && self.failure_rate.is_none()
            && self.success_rate.is_none()
            && self.total_requests.is_none()
            && self.throughput.is_none()
    }
}
