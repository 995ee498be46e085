mod ingestion_service_test;
mod metadata_extractor_test;
mod report_renderer_test;
