use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::application::services::{EmailOutcome, ReportingOutcome};
use crate::domain::ObjectRef;
use crate::presentation::state::AppState;

use super::models::ErrorResponse;

/// Object-created notification in the storage-records shape.
#[derive(Debug, Deserialize)]
pub struct SummaryNotification {
    #[serde(rename = "Records")]
    pub records: Vec<SummaryRecord>,
}

#[derive(Debug, Deserialize)]
pub struct SummaryRecord {
    pub s3: S3Entity,
}

#[derive(Debug, Deserialize)]
pub struct S3Entity {
    pub bucket: S3Bucket,
    pub object: S3Object,
}

#[derive(Debug, Deserialize)]
pub struct S3Bucket {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct S3Object {
    pub key: String,
}

#[derive(Serialize)]
pub struct ReportingResponse {
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receipt_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_status: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_detail: Option<String>,
}

/// Summary-ready trigger: the scribe service wrote its output document.
#[tracing::instrument(skip(state, notification))]
pub async fn summary_ready_handler(
    State(state): State<AppState>,
    Json(notification): Json<SummaryNotification>,
) -> impl IntoResponse {
    let Some(record) = notification.records.into_iter().next() else {
        tracing::warn!("Summary notification without records");
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "notification carries no records".to_string(),
            }),
        )
            .into_response();
    };

    let summary = ObjectRef::new(record.s3.bucket.name, record.s3.object.key);
    tracing::info!(bucket = %summary.bucket(), key = %summary.key(), "Summary notification received");

    match state.reporting_service.process_summary(&summary).await {
        Ok(ReportingOutcome::Skipped { reason }) => (
            StatusCode::OK,
            Json(ReportingResponse {
                status: "skipped",
                reason: Some(reason),
                report_key: None,
                receipt_key: None,
                email_status: None,
                email_detail: None,
            }),
        )
            .into_response(),
        Ok(ReportingOutcome::Completed(completion)) => {
            let (email_status, email_detail) = match completion.email {
                EmailOutcome::Sent { to } => ("sent", Some(to)),
                EmailOutcome::Skipped { reason } => ("skipped", Some(reason)),
                EmailOutcome::Failed { error } => ("failed", Some(error)),
            };
            (
                StatusCode::OK,
                Json(ReportingResponse {
                    status: "completed",
                    reason: None,
                    report_key: Some(completion.report_key),
                    receipt_key: completion.receipt_key,
                    email_status: Some(email_status),
                    email_detail,
                }),
            )
                .into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, key = %summary.key(), "Report generation failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: e.to_string(),
                }),
            )
                .into_response()
        }
    }
}
