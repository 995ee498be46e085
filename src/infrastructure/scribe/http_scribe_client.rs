use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::application::ports::{ScribeClient, ScribeClientError, ScribeJob, StartJobRequest};
use crate::domain::{JobName, JobTag};

/// HTTP adapter for the hosted medical-scribe service.
///
/// Contract: `POST {base}/medical-scribe-jobs` submits a job,
/// `GET {base}/medical-scribe-jobs/{name}` returns the job record.
pub struct HttpScribeClient {
    client: reqwest::Client,
    endpoint: String,
    api_key: Option<String>,
}

impl HttpScribeClient {
    pub fn new(base_url: &str, api_key: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: format!("{}/medical-scribe-jobs", base_url.trim_end_matches('/')),
            api_key,
        }
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.api_key {
            Some(key) => request.bearer_auth(key),
            None => request,
        }
    }
}

#[derive(Serialize)]
struct StartJobBody<'a> {
    job_name: &'a str,
    data_access_role_arn: &'a str,
    settings: JobSettingsBody<'a>,
    channel_definitions: Vec<ChannelBody>,
    media: MediaBody<'a>,
    output_bucket_name: &'a str,
    tags: &'a [JobTag],
}

#[derive(Serialize)]
struct JobSettingsBody<'a> {
    channel_identification: bool,
    note_template: &'a str,
}

#[derive(Serialize)]
struct ChannelBody {
    channel_id: u8,
    participant_role: &'static str,
}

#[derive(Serialize)]
struct MediaBody<'a> {
    media_file_uri: &'a str,
}

#[derive(Deserialize)]
struct JobResponse {
    #[serde(default)]
    tags: Vec<JobTag>,
    completion_time: Option<DateTime<Utc>>,
    media: Option<MediaResponse>,
}

#[derive(Deserialize)]
struct MediaResponse {
    media_file_uri: Option<String>,
}

#[async_trait]
impl ScribeClient for HttpScribeClient {
    async fn start_job(&self, request: &StartJobRequest) -> Result<(), ScribeClientError> {
        let body = StartJobBody {
            job_name: request.job_name.as_str(),
            data_access_role_arn: &request.data_access_role_arn,
            settings: JobSettingsBody {
                channel_identification: request.channel_identification,
                note_template: &request.note_template,
            },
            channel_definitions: request
                .channels
                .iter()
                .map(|c| ChannelBody {
                    channel_id: c.channel_id,
                    participant_role: c.role.as_str(),
                })
                .collect(),
            media: MediaBody {
                media_file_uri: &request.media_uri,
            },
            output_bucket_name: &request.output_bucket,
            tags: &request.tags,
        };

        tracing::debug!(job_name = %request.job_name, endpoint = %self.endpoint, "Submitting scribe job");

        let response = self
            .authorize(self.client.post(&self.endpoint))
            .json(&body)
            .send()
            .await
            .map_err(|e| ScribeClientError::ApiRequestFailed(format!("request: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(ScribeClientError::SubmissionFailed(format!(
                "status {status}: {body}"
            )));
        }

        Ok(())
    }

    async fn get_job(&self, name: &JobName) -> Result<ScribeJob, ScribeClientError> {
        let url = format!("{}/{}", self.endpoint, name);

        let response = self
            .authorize(self.client.get(&url))
            .send()
            .await
            .map_err(|e| ScribeClientError::ApiRequestFailed(format!("request: {e}")))?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(ScribeClientError::NotFound(name.as_str().to_string()));
        }
        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(ScribeClientError::ApiRequestFailed(format!(
                "status {status}: {body}"
            )));
        }

        let job: JobResponse = response
            .json()
            .await
            .map_err(|e| ScribeClientError::ApiRequestFailed(format!("parse response: {e}")))?;

        Ok(ScribeJob {
            tags: job.tags,
            completion_time: job.completion_time,
            media_uri: job.media.and_then(|m| m.media_file_uri),
        })
    }
}
