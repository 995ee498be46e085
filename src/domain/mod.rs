mod clinical_section;
mod job_name;
pub mod layout;
mod object_ref;
mod patient;
mod receipt;

pub use clinical_section::{ClinicalNote, ClinicalSection, SectionName, SummaryFragment};
pub use job_name::{JobName, JobNameError, JOB_NAME_PREFIX};
pub use object_ref::{ObjectRef, ObjectUriError};
pub use patient::{
    normalize_name, JobTag, MetadataDefaults, PatientMetadata, ATTR_PATIENT_EMAIL,
    ATTR_PATIENT_ID, ATTR_PATIENT_NAME, ATTR_RECORDING_ID, ATTR_VISIT_ID, TAG_PATIENT_EMAIL,
    TAG_PATIENT_ID, TAG_PATIENT_NAME, TAG_RECORDING_ID,
};
pub use receipt::Receipt;
