use std::sync::Arc;

use chrono::Utc;

use crate::application::ports::{
    ChannelDefinition, ScribeClient, ScribeClientError, StartJobRequest,
};
use crate::domain::{layout, JobName, ObjectRef};

use super::MetadataExtractor;

/// Fixed submission parameters for scribe jobs.
#[derive(Debug, Clone)]
pub struct IngestionConfig {
    pub data_access_role_arn: String,
    pub note_template: String,
}

/// First pipeline stage: an audio upload under `input/` becomes a scribe
/// job carrying the patient metadata as tags.
pub struct IngestionService {
    extractor: MetadataExtractor,
    scribe: Arc<dyn ScribeClient>,
    config: IngestionConfig,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IngestionOutcome {
    /// The notification named an object this stage does not own. No side
    /// effects were produced.
    Skipped { reason: String },
    Started {
        job_name: JobName,
        patient_id: String,
        recording_id: String,
    },
}

impl IngestionService {
    pub fn new(
        extractor: MetadataExtractor,
        scribe: Arc<dyn ScribeClient>,
        config: IngestionConfig,
    ) -> Self {
        Self {
            extractor,
            scribe,
            config,
        }
    }

    pub async fn process_upload(
        &self,
        audio: &ObjectRef,
    ) -> Result<IngestionOutcome, IngestionError> {
        if !audio.has_prefix(layout::INPUT_PREFIX) {
            tracing::info!(key = %audio.key(), "Skipping object outside the input prefix");
            return Ok(IngestionOutcome::Skipped {
                reason: "object not in input directory".to_string(),
            });
        }

        let metadata = self.extractor.extract(audio).await;
        let job_name = JobName::generate(&metadata.patient_id, &metadata.patient_name, Utc::now());

        let request = StartJobRequest {
            job_name: job_name.clone(),
            data_access_role_arn: self.config.data_access_role_arn.clone(),
            channel_identification: true,
            note_template: self.config.note_template.clone(),
            channels: ChannelDefinition::clinical_defaults(),
            media_uri: audio.uri(),
            // Scribe output lands next to the input so one bucket carries
            // the whole pipeline state.
            output_bucket: audio.bucket().to_string(),
            tags: metadata.to_tags(),
        };

        self.scribe.start_job(&request).await?;

        tracing::info!(
            job_name = %job_name,
            patient_id = %metadata.patient_id,
            recording_id = %metadata.recording_id,
            media_uri = %audio.uri(),
            "Scribe job started"
        );

        Ok(IngestionOutcome::Started {
            job_name,
            patient_id: metadata.patient_id,
            recording_id: metadata.recording_id,
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum IngestionError {
    #[error("job submission: {0}")]
    Submission(#[from] ScribeClientError),
}
