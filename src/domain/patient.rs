use serde::{Deserialize, Serialize};

/// Object-attribute keys set by the uploading application.
pub const ATTR_PATIENT_ID: &str = "patient-id";
pub const ATTR_PATIENT_NAME: &str = "patient-name";
pub const ATTR_PATIENT_EMAIL: &str = "patient-email";
pub const ATTR_RECORDING_ID: &str = "recording-id";
pub const ATTR_VISIT_ID: &str = "visit-id";

/// Tag keys on the scribe job record. Tags are the only channel carrying
/// patient metadata across the asynchronous boundary between the two
/// pipeline stages.
pub const TAG_PATIENT_ID: &str = "patient_id";
pub const TAG_PATIENT_NAME: &str = "patient_name";
pub const TAG_PATIENT_EMAIL: &str = "patient_email";
pub const TAG_RECORDING_ID: &str = "recording_id";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobTag {
    pub key: String,
    pub value: String,
}

impl JobTag {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Patient and visit identifying data. Email and recording id may be empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatientMetadata {
    pub patient_id: String,
    pub patient_name: String,
    pub patient_email: String,
    pub recording_id: String,
}

impl PatientMetadata {
    pub fn to_tags(&self) -> Vec<JobTag> {
        vec![
            JobTag::new(TAG_PATIENT_ID, &self.patient_id),
            JobTag::new(TAG_PATIENT_NAME, &self.patient_name),
            JobTag::new(TAG_PATIENT_EMAIL, &self.patient_email),
            JobTag::new(TAG_RECORDING_ID, &self.recording_id),
        ]
    }

    pub fn from_tags(tags: &[JobTag], defaults: &MetadataDefaults) -> Self {
        let find = |key: &str| tags.iter().find(|t| t.key == key).map(|t| t.value.clone());
        Self {
            patient_id: find(TAG_PATIENT_ID).unwrap_or_else(|| defaults.patient_id.clone()),
            patient_name: find(TAG_PATIENT_NAME).unwrap_or_else(|| defaults.patient_name.clone()),
            patient_email: find(TAG_PATIENT_EMAIL).unwrap_or_default(),
            recording_id: find(TAG_RECORDING_ID).unwrap_or_default(),
        }
    }
}

/// Display name as uploaded, with separator hyphens restored to spaces.
pub fn normalize_name(raw: &str) -> String {
    raw.replace('-', " ")
}

/// Substitution values for absent metadata fields. The two pipeline stages
/// use different placeholder vocabularies, kept explicit here instead of
/// inline literals.
#[derive(Debug, Clone)]
pub struct MetadataDefaults {
    pub patient_id: String,
    pub patient_name: String,
}

impl MetadataDefaults {
    /// Defaults applied while submitting a scribe job.
    pub fn ingestion() -> Self {
        Self {
            patient_id: "UNKNOWN".to_string(),
            patient_name: "Unknown".to_string(),
        }
    }

    /// Defaults applied while rendering a report.
    pub fn reporting() -> Self {
        Self {
            patient_id: "N/A".to_string(),
            patient_name: "Patient".to_string(),
        }
    }
}
