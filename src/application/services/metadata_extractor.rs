use std::collections::HashMap;
use std::sync::Arc;

use crate::application::ports::MediaStore;
use crate::domain::{
    normalize_name, MetadataDefaults, ObjectRef, PatientMetadata, ATTR_PATIENT_EMAIL,
    ATTR_PATIENT_ID, ATTR_PATIENT_NAME, ATTR_RECORDING_ID,
};

/// Resolves patient metadata for an uploaded audio object, either from the
/// object's stored attributes or from a fallback parse of its key.
pub struct MetadataExtractor {
    store: Arc<dyn MediaStore>,
    defaults: MetadataDefaults,
}

impl MetadataExtractor {
    pub fn new(store: Arc<dyn MediaStore>, defaults: MetadataDefaults) -> Self {
        Self { store, defaults }
    }

    /// Never fails: a missing attribute gets a default, and a failed lookup
    /// falls back to the filename parse. Only the transport error itself is
    /// logged.
    pub async fn extract(&self, audio: &ObjectRef) -> PatientMetadata {
        match self.store.head_metadata(audio).await {
            Ok(attributes) => self.from_attributes(&attributes),
            Err(e) => {
                tracing::warn!(error = %e, key = %audio.key(), "Attribute lookup failed, using filename fallback");
                self.fallback_from_key(audio.key())
            }
        }
    }

    fn from_attributes(&self, attributes: &HashMap<String, String>) -> PatientMetadata {
        let metadata = PatientMetadata {
            patient_id: attributes
                .get(ATTR_PATIENT_ID)
                .cloned()
                .unwrap_or_else(|| self.defaults.patient_id.clone()),
            patient_name: attributes
                .get(ATTR_PATIENT_NAME)
                .map(|name| normalize_name(name))
                .unwrap_or_else(|| self.defaults.patient_name.clone()),
            patient_email: attributes.get(ATTR_PATIENT_EMAIL).cloned().unwrap_or_default(),
            recording_id: attributes.get(ATTR_RECORDING_ID).cloned().unwrap_or_default(),
        };

        tracing::info!(
            patient_id = %metadata.patient_id,
            patient_name = %metadata.patient_name,
            recording_id = %metadata.recording_id,
            "Metadata extracted from object attributes"
        );

        metadata
    }

    /// Filename text before the first underscore becomes the patient id,
    /// everything else is defaulted.
    fn fallback_from_key(&self, key: &str) -> PatientMetadata {
        let filename = key.rsplit('/').next().unwrap_or(key);
        let patient_id = filename
            .split('_')
            .next()
            .unwrap_or(&self.defaults.patient_id)
            .to_string();

        PatientMetadata {
            patient_id,
            patient_name: self.defaults.patient_name.clone(),
            patient_email: String::new(),
            recording_id: String::new(),
        }
    }
}
