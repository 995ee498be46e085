mod ingestion_service;
mod metadata_extractor;
pub mod report_renderer;
mod reporting_service;

pub use ingestion_service::{IngestionConfig, IngestionError, IngestionOutcome, IngestionService};
pub use metadata_extractor::MetadataExtractor;
pub use report_renderer::{render_report, ReportHeader};
pub use reporting_service::{
    EmailOutcome, ReportCompletion, ReportingError, ReportingOutcome, ReportingService,
};
