use std::sync::Arc;

use bytes::Bytes;
use chrono::Utc;

use crate::application::ports::{
    Mailer, MediaStore, MediaStoreError, ScribeClient, ScribeJob,
};
use crate::application::ports::HtmlEmail;
use crate::domain::{
    layout, normalize_name, ClinicalNote, JobName, MetadataDefaults, ObjectRef, PatientMetadata,
    Receipt, ATTR_PATIENT_EMAIL, ATTR_PATIENT_ID, ATTR_PATIENT_NAME, ATTR_VISIT_ID,
};

use super::report_renderer::{render_report, ReportHeader};

const DEFAULT_VISIT_DATE: &str = "N/A";

/// Second pipeline stage: a finished scribe output document becomes a
/// persisted HTML report, a completion receipt, and a best-effort email.
pub struct ReportingService {
    store: Arc<dyn MediaStore>,
    scribe: Arc<dyn ScribeClient>,
    mailer: Arc<dyn Mailer>,
    defaults: MetadataDefaults,
    sender: String,
}

/// Delivery of the patient email is advisory: it never decides the outcome
/// of the invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmailOutcome {
    Sent { to: String },
    Skipped { reason: String },
    Failed { error: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportCompletion {
    pub job_name: JobName,
    pub report_key: String,
    /// Absent when patient or visit id could not be resolved; the report
    /// itself was still written.
    pub receipt_key: Option<String>,
    pub email: EmailOutcome,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportingOutcome {
    Skipped { reason: String },
    Completed(ReportCompletion),
}

/// Everything the report stage knows about the patient, pulled from the job
/// tags and from a second lookup on the original audio object.
struct ReportContext {
    metadata: PatientMetadata,
    visit_date: String,
    receipt_patient_id: Option<String>,
    visit_id: Option<String>,
}

impl ReportingService {
    pub fn new(
        store: Arc<dyn MediaStore>,
        scribe: Arc<dyn ScribeClient>,
        mailer: Arc<dyn Mailer>,
        defaults: MetadataDefaults,
        sender: String,
    ) -> Self {
        Self {
            store,
            scribe,
            mailer,
            defaults,
            sender,
        }
    }

    pub async fn process_summary(
        &self,
        summary: &ObjectRef,
    ) -> Result<ReportingOutcome, ReportingError> {
        if !summary.key().ends_with(layout::SUMMARY_SUFFIX) {
            tracing::info!(key = %summary.key(), "Skipping object that is not a summary document");
            return Ok(ReportingOutcome::Skipped {
                reason: "object is not a summary document".to_string(),
            });
        }

        let job_name = match JobName::from_output_key(summary.key()) {
            Ok(name) => name,
            Err(e) => {
                tracing::warn!(error = %e, key = %summary.key(), "Output key does not embed a valid job name");
                return Ok(ReportingOutcome::Skipped {
                    reason: format!("job name mismatch: {e}"),
                });
            }
        };

        let context = self.resolve_context(&job_name, summary).await;

        let document = self
            .store
            .fetch(summary)
            .await
            .map_err(ReportingError::SummaryLoad)?;
        let note = ClinicalNote::from_json(&document)?;

        let header = ReportHeader {
            patient_name: context.metadata.patient_name.clone(),
            patient_id: context.metadata.patient_id.clone(),
            visit_date: context.visit_date.clone(),
        };
        let report_html = render_report(note.sections(), &header);

        let report_key = layout::report_key(&job_name);
        self.store
            .put(
                &summary.sibling(&report_key),
                Bytes::from(report_html.clone()),
                "text/html",
            )
            .await
            .map_err(ReportingError::ReportWrite)?;
        tracing::info!(report_key = %report_key, "Report saved");

        let receipt_key = self
            .write_receipt(summary, &job_name, &report_key, &context)
            .await?;

        let email = self.notify(&context.metadata, &report_html).await;

        Ok(ReportingOutcome::Completed(ReportCompletion {
            job_name,
            report_key,
            receipt_key,
            email,
        }))
    }

    /// Job tags carry the metadata across the async boundary; the original
    /// audio object is consulted a second time for the receipt identifiers
    /// and fresher contact fields. Both lookups recover locally on failure.
    async fn resolve_context(&self, job_name: &JobName, summary: &ObjectRef) -> ReportContext {
        let job = match self.scribe.get_job(job_name).await {
            Ok(job) => job,
            Err(e) => {
                tracing::warn!(error = %e, job_name = %job_name, "Job lookup failed, using defaults");
                ScribeJob::default()
            }
        };

        let mut metadata = PatientMetadata::from_tags(&job.tags, &self.defaults);
        let visit_date = job
            .completion_time
            .map(|t| t.date_naive().to_string())
            .unwrap_or_else(|| DEFAULT_VISIT_DATE.to_string());

        let mut receipt_patient_id = None;
        let mut visit_id = None;

        if let Some(media_uri) = job.media_uri.as_deref() {
            match ObjectRef::from_uri(media_uri) {
                Ok(audio) if audio.bucket() == summary.bucket() => {
                    match self.store.head_metadata(&audio).await {
                        Ok(attributes) => {
                            visit_id = attributes.get(ATTR_VISIT_ID).cloned();
                            receipt_patient_id = attributes.get(ATTR_PATIENT_ID).cloned();
                            if let Some(email) = attributes.get(ATTR_PATIENT_EMAIL) {
                                metadata.patient_email = email.clone();
                            }
                            if let Some(name) = attributes.get(ATTR_PATIENT_NAME) {
                                metadata.patient_name = normalize_name(name);
                            }
                        }
                        Err(e) => {
                            tracing::warn!(error = %e, media_uri = %media_uri, "Audio attribute lookup failed");
                        }
                    }
                }
                Ok(audio) => {
                    tracing::warn!(
                        media_uri = %media_uri,
                        expected_bucket = %summary.bucket(),
                        actual_bucket = %audio.bucket(),
                        "Job media is in an unexpected bucket"
                    );
                }
                Err(e) => {
                    tracing::warn!(error = %e, media_uri = %media_uri, "Job media uri unparseable");
                }
            }
        }

        ReportContext {
            metadata,
            visit_date,
            receipt_patient_id,
            visit_id,
        }
    }

    /// A receipt needs both identifiers; missing either is an accepted
    /// partial success, not an error.
    async fn write_receipt(
        &self,
        summary: &ObjectRef,
        job_name: &JobName,
        report_key: &str,
        context: &ReportContext,
    ) -> Result<Option<String>, ReportingError> {
        let (patient_id, visit_id) = match (
            context.receipt_patient_id.as_deref().filter(|s| !s.is_empty()),
            context.visit_id.as_deref().filter(|s| !s.is_empty()),
        ) {
            (Some(patient_id), Some(visit_id)) => (patient_id, visit_id),
            _ => {
                tracing::warn!(
                    patient_id = ?context.receipt_patient_id,
                    visit_id = ?context.visit_id,
                    "Receipt skipped, patient or visit id unresolved"
                );
                return Ok(None);
            }
        };

        let receipt = Receipt::completed(report_key, job_name, Utc::now());
        let body = serde_json::to_vec(&receipt)?;
        let receipt_key = layout::receipt_key(patient_id, visit_id);

        self.store
            .put(
                &summary.sibling(&receipt_key),
                Bytes::from(body),
                "application/json",
            )
            .await
            .map_err(ReportingError::ReceiptWrite)?;

        tracing::info!(receipt_key = %receipt_key, "Receipt created");
        Ok(Some(receipt_key))
    }

    async fn notify(&self, metadata: &PatientMetadata, report_html: &str) -> EmailOutcome {
        if metadata.patient_email.is_empty() {
            tracing::info!("No patient email address, notification skipped");
            return EmailOutcome::Skipped {
                reason: "no patient email address".to_string(),
            };
        }
        if self.sender.is_empty() {
            tracing::warn!("No sender address configured, notification skipped");
            return EmailOutcome::Skipped {
                reason: "no sender address configured".to_string(),
            };
        }

        let email = HtmlEmail {
            from: self.sender.clone(),
            to: metadata.patient_email.clone(),
            subject: format!("Your Visit Summary - {}", metadata.patient_name),
            html_body: report_html.to_string(),
        };

        match self.mailer.send_html(&email).await {
            Ok(()) => {
                tracing::info!(to = %email.to, "Report emailed to patient");
                EmailOutcome::Sent { to: email.to }
            }
            Err(e) => {
                tracing::warn!(error = %e, to = %email.to, "Email delivery failed");
                EmailOutcome::Failed {
                    error: e.to_string(),
                }
            }
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ReportingError {
    #[error("summary load: {0}")]
    SummaryLoad(MediaStoreError),
    #[error("summary parse: {0}")]
    SummaryParse(#[from] serde_json::Error),
    #[error("report write: {0}")]
    ReportWrite(MediaStoreError),
    #[error("receipt write: {0}")]
    ReceiptWrite(MediaStoreError),
}
