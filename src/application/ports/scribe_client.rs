use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::{JobName, JobTag};

/// Speaker role assigned to an audio channel of the recording.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParticipantRole {
    Clinician,
    Patient,
}

impl ParticipantRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            ParticipantRole::Clinician => "CLINICIAN",
            ParticipantRole::Patient => "PATIENT",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelDefinition {
    pub channel_id: u8,
    pub role: ParticipantRole,
}

impl ChannelDefinition {
    /// Fixed two-channel layout of a clinical recording: channel 0 is the
    /// clinician, channel 1 the patient.
    pub fn clinical_defaults() -> Vec<Self> {
        vec![
            ChannelDefinition {
                channel_id: 0,
                role: ParticipantRole::Clinician,
            },
            ChannelDefinition {
                channel_id: 1,
                role: ParticipantRole::Patient,
            },
        ]
    }
}

#[derive(Debug, Clone)]
pub struct StartJobRequest {
    pub job_name: JobName,
    pub data_access_role_arn: String,
    pub channel_identification: bool,
    pub note_template: String,
    pub channels: Vec<ChannelDefinition>,
    pub media_uri: String,
    pub output_bucket: String,
    pub tags: Vec<JobTag>,
}

/// Job record as returned by the scribe service once the job exists.
#[derive(Debug, Clone, Default)]
pub struct ScribeJob {
    pub tags: Vec<JobTag>,
    pub completion_time: Option<DateTime<Utc>>,
    pub media_uri: Option<String>,
}

#[async_trait]
pub trait ScribeClient: Send + Sync {
    async fn start_job(&self, request: &StartJobRequest) -> Result<(), ScribeClientError>;

    async fn get_job(&self, name: &JobName) -> Result<ScribeJob, ScribeClientError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ScribeClientError {
    #[error("job submission failed: {0}")]
    SubmissionFailed(String),
    #[error("job not found: {0}")]
    NotFound(String),
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
}
