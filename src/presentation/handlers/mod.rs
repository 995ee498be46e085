mod audio_uploaded;
mod health;
mod models;
mod summary_ready;

pub use audio_uploaded::{audio_uploaded_handler, IngestionResponse, UploadNotification};
pub use health::{health_handler, HealthResponse};
pub use models::ErrorResponse;
pub use summary_ready::{summary_ready_handler, ReportingResponse, SummaryNotification};
