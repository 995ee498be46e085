use std::collections::HashMap;
use std::sync::Arc;

use bytes::Bytes;

use medivoice::application::services::MetadataExtractor;
use medivoice::domain::{MetadataDefaults, ObjectRef};
use medivoice::infrastructure::storage::MemoryMediaStore;

fn attributes(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[tokio::test]
async fn given_full_attributes_when_extracting_then_fields_are_verbatim_except_name() {
    let store = Arc::new(MemoryMediaStore::new());
    let audio = ObjectRef::new("clinic-audio", "input/PAT-1/VIS-1/audio.webm");
    store.insert_object(
        &audio,
        Bytes::from_static(b"webm"),
        "audio/webm",
        attributes(&[
            ("patient-id", "PAT-1"),
            ("patient-name", "Jane-Doe"),
            ("patient-email", "j@x.com"),
            ("recording-id", "R1"),
        ]),
    );
    let extractor = MetadataExtractor::new(store, MetadataDefaults::ingestion());

    let metadata = extractor.extract(&audio).await;

    assert_eq!(metadata.patient_id, "PAT-1");
    assert_eq!(metadata.patient_name, "Jane Doe");
    assert_eq!(metadata.patient_email, "j@x.com");
    assert_eq!(metadata.recording_id, "R1");
}

#[tokio::test]
async fn given_missing_attributes_when_extracting_then_defaults_fill_in() {
    let store = Arc::new(MemoryMediaStore::new());
    let audio = ObjectRef::new("clinic-audio", "input/PAT-2/audio.webm");
    store.insert_object(&audio, Bytes::from_static(b"webm"), "audio/webm", HashMap::new());
    let extractor = MetadataExtractor::new(store, MetadataDefaults::ingestion());

    let metadata = extractor.extract(&audio).await;

    assert_eq!(metadata.patient_id, "UNKNOWN");
    assert_eq!(metadata.patient_name, "Unknown");
    assert_eq!(metadata.patient_email, "");
    assert_eq!(metadata.recording_id, "");
}

#[tokio::test]
async fn given_failed_lookup_when_extracting_then_patient_id_comes_from_filename() {
    // Nothing seeded: the head fails and the filename fallback kicks in.
    let store = Arc::new(MemoryMediaStore::new());
    let audio = ObjectRef::new("clinic-audio", "input/PAT9_x.webm");
    let extractor = MetadataExtractor::new(store, MetadataDefaults::ingestion());

    let metadata = extractor.extract(&audio).await;

    assert_eq!(metadata.patient_id, "PAT9");
    assert_eq!(metadata.patient_name, "Unknown");
    assert_eq!(metadata.patient_email, "");
    assert_eq!(metadata.recording_id, "");
}

#[tokio::test]
async fn given_failed_lookup_and_no_underscore_when_extracting_then_whole_filename_is_id() {
    let store = Arc::new(MemoryMediaStore::new());
    let audio = ObjectRef::new("clinic-audio", "input/recording.webm");
    let extractor = MetadataExtractor::new(store, MetadataDefaults::ingestion());

    let metadata = extractor.extract(&audio).await;

    assert_eq!(metadata.patient_id, "recording.webm");
}
