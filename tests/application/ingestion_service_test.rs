use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use bytes::Bytes;

use medivoice::application::ports::{
    ScribeClient, ScribeClientError, ScribeJob, StartJobRequest,
};
use medivoice::application::services::{
    IngestionConfig, IngestionOutcome, IngestionService, MetadataExtractor,
};
use medivoice::domain::{JobName, MetadataDefaults, ObjectRef};
use medivoice::infrastructure::storage::MemoryMediaStore;

#[derive(Default)]
struct RecordingScribeClient {
    started: Mutex<Vec<StartJobRequest>>,
    fail_submission: bool,
}

#[async_trait]
impl ScribeClient for RecordingScribeClient {
    async fn start_job(&self, request: &StartJobRequest) -> Result<(), ScribeClientError> {
        if self.fail_submission {
            return Err(ScribeClientError::SubmissionFailed("boom".to_string()));
        }
        self.started.lock().unwrap().push(request.clone());
        Ok(())
    }

    async fn get_job(&self, name: &JobName) -> Result<ScribeJob, ScribeClientError> {
        Err(ScribeClientError::NotFound(name.as_str().to_string()))
    }
}

fn service(
    store: Arc<MemoryMediaStore>,
    scribe: Arc<RecordingScribeClient>,
) -> IngestionService {
    IngestionService::new(
        MetadataExtractor::new(store, MetadataDefaults::ingestion()),
        scribe,
        IngestionConfig {
            data_access_role_arn: "arn:aws:iam::123456789012:role/scribe-access".to_string(),
            note_template: "PHYSICAL_SOAP".to_string(),
        },
    )
}

#[tokio::test]
async fn given_key_outside_input_prefix_when_processing_then_skipped_and_nothing_submitted() {
    let store = Arc::new(MemoryMediaStore::new());
    let scribe = Arc::new(RecordingScribeClient::default());
    let service = service(Arc::clone(&store), Arc::clone(&scribe));

    let outcome = service
        .process_upload(&ObjectRef::new("clinic-audio", "patient-reports/x/summary.html"))
        .await
        .unwrap();

    assert!(matches!(outcome, IngestionOutcome::Skipped { .. }));
    assert!(scribe.started.lock().unwrap().is_empty());
}

#[tokio::test]
async fn given_tagged_upload_when_processing_then_job_carries_metadata_tags() {
    let store = Arc::new(MemoryMediaStore::new());
    let audio = ObjectRef::new("clinic-audio", "input/PAT-1/VIS-1/audio.webm");
    let attributes: HashMap<String, String> = [
        ("patient-id", "PAT-1"),
        ("patient-name", "Jane-Doe"),
        ("patient-email", "j@x.com"),
        ("recording-id", "R1"),
    ]
    .iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect();
    store.insert_object(&audio, Bytes::from_static(b"webm"), "audio/webm", attributes);

    let scribe = Arc::new(RecordingScribeClient::default());
    let service = service(Arc::clone(&store), Arc::clone(&scribe));

    let outcome = service.process_upload(&audio).await.unwrap();

    let started = scribe.started.lock().unwrap();
    assert_eq!(started.len(), 1);
    let request = &started[0];

    let tag = |key: &str| {
        request
            .tags
            .iter()
            .find(|t| t.key == key)
            .map(|t| t.value.as_str())
    };
    assert_eq!(tag("patient_id"), Some("PAT-1"));
    assert_eq!(tag("patient_name"), Some("Jane Doe"));
    assert_eq!(tag("patient_email"), Some("j@x.com"));
    assert_eq!(tag("recording_id"), Some("R1"));

    assert!(request.job_name.as_str().starts_with("hs-PAT-1-JaneDoe-"));
    assert!(request.channel_identification);
    assert_eq!(request.channels.len(), 2);
    assert_eq!(request.channels[0].channel_id, 0);
    assert_eq!(request.channels[1].channel_id, 1);
    assert_eq!(request.media_uri, "s3://clinic-audio/input/PAT-1/VIS-1/audio.webm");
    assert_eq!(request.output_bucket, "clinic-audio");
    assert_eq!(request.note_template, "PHYSICAL_SOAP");

    match outcome {
        IngestionOutcome::Started {
            job_name,
            patient_id,
            recording_id,
        } => {
            assert_eq!(job_name, request.job_name);
            assert_eq!(patient_id, "PAT-1");
            assert_eq!(recording_id, "R1");
        }
        other => panic!("expected Started, got {:?}", other),
    }
}

#[tokio::test]
async fn given_submission_failure_when_processing_then_error_propagates() {
    let store = Arc::new(MemoryMediaStore::new());
    let audio = ObjectRef::new("clinic-audio", "input/PAT-1/audio.webm");
    store.insert_object(&audio, Bytes::from_static(b"webm"), "audio/webm", HashMap::new());

    let scribe = Arc::new(RecordingScribeClient {
        fail_submission: true,
        ..Default::default()
    });
    let service = service(store, scribe);

    assert!(service.process_upload(&audio).await.is_err());
}
