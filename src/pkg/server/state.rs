use std::sync::Arc;

use crate::{pkg::internal::jobs::{JobClient, JobSource}, prelude::Result};

#[derive(Clone)]
pub struct AppState {
    pub jobs: Arc<dyn JobSource>,
}

impl AppState {
    pub async fn new() -> Result<AppState> {
        Ok(AppState {
            jobs: Arc::new(JobClient::from_settings()?),
        })
    }

    pub fn with_source(source: impl JobSource + 'static) -> AppState {
        AppState {
            jobs: Arc::new(source),
        }
    }
}
