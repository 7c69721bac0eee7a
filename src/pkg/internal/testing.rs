//! Shared fixtures for unit tests.

use std::sync::Mutex;

use axum::Router;

use super::jobs::{ApiResult, Job, JobApiError, JobFilters, JobSource};

pub fn job(id: i64, department: &str) -> Job {
    Job {
        id,
        title: format!("Opening {id}"),
        department: department.to_string(),
        location: "Goa".to_string(),
        function: "Software".to_string(),
        description: format!("<p>Opening {id}</p>"),
        apply_url: format!("https://example.com/apply/{id}"),
    }
}

/// Serves `app` on an ephemeral port and returns its base url.
pub async fn spawn_upstream(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    format!("http://{}", addr)
}

/// In-memory job source. `list_jobs` answers with the jobs matching the
/// department filter and records every selection it was asked for.
#[derive(Default)]
pub struct StubSource {
    pub jobs: Vec<Job>,
    pub fail_list: bool,
    pub calls: Mutex<Vec<JobFilters>>,
}

impl StubSource {
    pub fn with_jobs(jobs: Vec<Job>) -> Self {
        StubSource {
            jobs,
            ..Default::default()
        }
    }

    pub fn failing() -> Self {
        StubSource {
            fail_list: true,
            ..Default::default()
        }
    }

    pub fn calls(&self) -> Vec<JobFilters> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl JobSource for StubSource {
    async fn list_jobs(&self, filters: &JobFilters) -> ApiResult<Vec<Job>> {
        self.calls.lock().unwrap().push(filters.clone());
        if self.fail_list {
            return Err(JobApiError::RequestFailure {
                url: "http://stub/jobs".into(),
                status: 500,
                status_text: "Internal Server Error".into(),
            });
        }
        Ok(self
            .jobs
            .iter()
            .filter(|job| {
                filters
                    .department
                    .as_deref()
                    .map_or(true, |department| job.department == department)
            })
            .cloned()
            .collect())
    }

    async fn get_job(&self, id: &str) -> ApiResult<Job> {
        self.jobs
            .iter()
            .find(|job| job.id.to_string() == id)
            .cloned()
            .ok_or_else(|| JobApiError::RequestFailure {
                url: format!("http://stub/jobs/{id}"),
                status: 404,
                status_text: "Not Found".into(),
            })
    }
}
