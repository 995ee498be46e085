use std::sync::Arc;

use crate::application::services::{IngestionService, ReportingService};

#[derive(Clone)]
pub struct AppState {
    pub ingestion_service: Arc<IngestionService>,
    pub reporting_service: Arc<ReportingService>,
}
