use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::application::services::IngestionOutcome;
use crate::domain::ObjectRef;
use crate::presentation::state::AppState;

use super::models::ErrorResponse;

/// Object-created notification in the event-bus detail shape.
#[derive(Debug, Deserialize)]
pub struct UploadNotification {
    pub detail: UploadDetail,
}

#[derive(Debug, Deserialize)]
pub struct UploadDetail {
    pub bucket: BucketRef,
    pub object: ObjectKeyRef,
}

#[derive(Debug, Deserialize)]
pub struct BucketRef {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct ObjectKeyRef {
    pub key: String,
}

#[derive(Serialize)]
pub struct IngestionResponse {
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patient_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recording_id: Option<String>,
}

/// Audio-upload trigger. Errors surface as 500 so the delivering
/// infrastructure applies its own retry policy.
#[tracing::instrument(skip(state, notification))]
pub async fn audio_uploaded_handler(
    State(state): State<AppState>,
    Json(notification): Json<UploadNotification>,
) -> impl IntoResponse {
    let audio = ObjectRef::new(
        notification.detail.bucket.name,
        notification.detail.object.key,
    );
    tracing::info!(bucket = %audio.bucket(), key = %audio.key(), "Upload notification received");

    match state.ingestion_service.process_upload(&audio).await {
        Ok(IngestionOutcome::Skipped { reason }) => (
            StatusCode::OK,
            Json(IngestionResponse {
                status: "skipped",
                reason: Some(reason),
                job_name: None,
                patient_id: None,
                recording_id: None,
            }),
        )
            .into_response(),
        Ok(IngestionOutcome::Started {
            job_name,
            patient_id,
            recording_id,
        }) => (
            StatusCode::OK,
            Json(IngestionResponse {
                status: "started",
                reason: None,
                job_name: Some(job_name.as_str().to_string()),
                patient_id: Some(patient_id),
                recording_id: Some(recording_id),
            }),
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = %e, key = %audio.key(), "Ingestion failed");
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
