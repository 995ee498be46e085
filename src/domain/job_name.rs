use std::fmt;

use chrono::{DateTime, Utc};

pub const JOB_NAME_PREFIX: &str = "hs";

/// Name of a scribe job: `hs-<patient_id>-<sanitized_name>-<YYYYMMDD-HHMMSS>`.
///
/// The name doubles as the cross-stage correlation key: the scribe service
/// writes its output under a key prefixed with the job name, and the
/// reporting stage parses it back out.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct JobName(String);

impl JobName {
    /// Generate a job name for a patient at the given instant. Collisions
    /// within the same second for the same patient are accepted as unlikely.
    pub fn generate(patient_id: &str, patient_name: &str, at: DateTime<Utc>) -> Self {
        let clean_name: String = patient_name
            .chars()
            .filter(|c| c.is_ascii_alphanumeric() || *c == '-')
            .collect();
        let stamp = at.format("%Y%m%d-%H%M%S");
        Self(format!("{JOB_NAME_PREFIX}-{patient_id}-{clean_name}-{stamp}"))
    }

    /// Parse the job name embedded as the first path segment of a scribe
    /// output key, e.g. `hs-PAT-1-JaneDoe-20260101-000000/summary.json`.
    pub fn from_output_key(key: &str) -> Result<Self, JobNameError> {
        let segment = key.split('/').next().unwrap_or("");
        segment.parse()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::str::FromStr for JobName {
    type Err = JobNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rest = s
            .strip_prefix(JOB_NAME_PREFIX)
            .and_then(|r| r.strip_prefix('-'))
            .ok_or_else(|| JobNameError::MissingPrefix(s.to_string()))?;
        if rest.is_empty() {
            return Err(JobNameError::Empty);
        }
        if !s.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
            return Err(JobNameError::InvalidCharacter(s.to_string()));
        }
        Ok(Self(s.to_string()))
    }
}

impl fmt::Display for JobName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum JobNameError {
    #[error("missing 'hs-' prefix: {0}")]
    MissingPrefix(String),
    #[error("empty job name")]
    Empty,
    #[error("invalid character in job name: {0}")]
    InvalidCharacter(String),
}
