use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

use super::JobName;

/// Completion marker written to a predictable location so the consuming
/// application can detect pipeline completion without polling the job API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Receipt {
    pub status: String,
    pub report_path: String,
    pub job_name: String,
    pub completed_at: String,
}

impl Receipt {
    pub fn completed(report_path: impl Into<String>, job_name: &JobName, at: DateTime<Utc>) -> Self {
        Self {
            status: "COMPLETED".to_string(),
            report_path: report_path.into(),
            job_name: job_name.as_str().to_string(),
            completed_at: at.to_rfc3339_opts(SecondsFormat::Secs, true),
        }
    }
}
