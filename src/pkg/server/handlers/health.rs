use axum::Json;
use serde_json::{Value, json};

use crate::conf::settings;

pub async fn livez() {
    tracing::debug!("service is live");
}

pub async fn healthz() -> Json<Value> {
    tracing::debug!("service is healthy");
    Json(json!({
        "service": settings.service_name,
        "upstream": settings.jobs_api_url,
    }))
}
