use super::JobName;

/// Persisted object layout shared by both pipeline stages and the consuming
/// application.
pub const INPUT_PREFIX: &str = "input/";
pub const REPORTS_PREFIX: &str = "patient-reports";
pub const REPORT_FILENAME: &str = "summary.html";
pub const SUMMARY_SUFFIX: &str = "summary.json";
pub const RECEIPT_FILENAME: &str = "receipt.json";

pub fn report_key(job_name: &JobName) -> String {
    format!("{REPORTS_PREFIX}/{job_name}/{REPORT_FILENAME}")
}

pub fn receipt_key(patient_id: &str, visit_id: &str) -> String {
    format!("input/{patient_id}/{visit_id}/{RECEIPT_FILENAME}")
}
