use reqwest::{
    header::{CONTENT_TYPE, HeaderMap, HeaderValue},
    StatusCode,
};
use serde::de::DeserializeOwned;
use standard_error::{Interpolate, StandardError, Status};
use url::Url;

use super::spec::{Job, JobFilters, RawJob};
use crate::{conf::settings, prelude::Result};

#[derive(Debug, thiserror::Error)]
pub enum JobApiError {
    #[error("Error fetching {url}: {status} {status_text}")]
    RequestFailure {
        url: String,
        status: u16,
        status_text: String,
    },
    #[error("Error decoding {url}: {reason}")]
    DecodeFailure { url: String, reason: String },
    #[error("Error reaching {url}: {reason}")]
    Transport { url: String, reason: String },
}

pub type ApiResult<T> = core::result::Result<T, JobApiError>;

impl JobApiError {
    pub fn error_code(&self) -> &'static str {
        match self {
            JobApiError::RequestFailure { .. } => "ERR-JOBS-001",
            JobApiError::DecodeFailure { .. } => "ERR-JOBS-002",
            JobApiError::Transport { .. } => "ERR-JOBS-003",
        }
    }
}

impl From<JobApiError> for StandardError {
    fn from(err: JobApiError) -> Self {
        let status = match &err {
            JobApiError::RequestFailure { status: 404, .. } => StatusCode::NOT_FOUND,
            _ => StatusCode::BAD_GATEWAY,
        };
        StandardError::new(err.error_code())
            .code(status)
            .interpolate_err(err.to_string())
    }
}

/// The two reads the pages need from the recruiting api.
#[async_trait::async_trait]
pub trait JobSource: Send + Sync {
    async fn list_jobs(&self, filters: &JobFilters) -> ApiResult<Vec<Job>>;

    async fn get_job(&self, id: &str) -> ApiResult<Job>;
}

#[derive(Debug, Clone)]
pub struct JobClient {
    http: reqwest::Client,
    base_url: Url,
}

impl JobClient {
    pub fn new(base_url: &str) -> Result<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|e| StandardError::new("ERR-CONF-001").interpolate_err(e.to_string()))?;
        if base_url.cannot_be_a_base() {
            return Err(StandardError::new("ERR-CONF-001").interpolate_err(base_url.to_string()));
        }
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        let http = reqwest::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .default_headers(headers)
            .build()
            .map_err(|e| StandardError::new("ERR-JOBS-000").interpolate_err(e.to_string()))?;
        Ok(JobClient { http, base_url })
    }

    pub fn from_settings() -> Result<Self> {
        Self::new(&settings.jobs_api_url)
    }

    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    /// `{base}/jobs` with one query parameter per active filter.
    pub fn jobs_url(&self, filters: &JobFilters) -> Url {
        let mut url = self.endpoint(&["jobs"]);
        let pairs = filters.query_pairs();
        if !pairs.is_empty() {
            url.query_pairs_mut()
                .extend_pairs(pairs.iter().map(|(field, value)| (field.as_str(), *value)));
        }
        url
    }

    pub fn job_url(&self, id: &str) -> Url {
        self.endpoint(&["jobs", id])
    }

    async fn fetch_json<T: DeserializeOwned>(&self, url: Url) -> ApiResult<T> {
        tracing::debug!("Fetching URL: {}", url);
        let response = self
            .http
            .get(url.clone())
            .send()
            .await
            .map_err(|e| JobApiError::Transport {
                url: url.to_string(),
                reason: e.to_string(),
            })?;
        let status = response.status();
        tracing::debug!("Response status: {}", status);
        if !status.is_success() {
            return Err(JobApiError::RequestFailure {
                url: url.to_string(),
                status: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or_default().to_string(),
            });
        }
        let body = response.bytes().await.map_err(|e| JobApiError::Transport {
            url: url.to_string(),
            reason: e.to_string(),
        })?;
        tracing::debug!("Response body length: {} bytes", body.len());
        serde_json::from_slice(&body).map_err(|e| JobApiError::DecodeFailure {
            url: url.to_string(),
            reason: e.to_string(),
        })
    }
}

#[async_trait::async_trait]
impl JobSource for JobClient {
    async fn list_jobs(&self, filters: &JobFilters) -> ApiResult<Vec<Job>> {
        let raw: Vec<RawJob> = self.fetch_json(self.jobs_url(filters)).await?;
        tracing::debug!("received {} jobs", raw.len());
        Ok(raw.into_iter().map(Job::from).collect())
    }

    async fn get_job(&self, id: &str) -> ApiResult<Job> {
        let raw: RawJob = self.fetch_json(self.job_url(id)).await?;
        Ok(Job::from(raw))
    }
}
