use axum::{Router, routing::get};

use super::handlers;
use super::handlers::health::{healthz, livez};
use super::state::AppState;
use crate::prelude::Result;

pub async fn build_routes() -> Result<Router> {
    let state = AppState::new().await?;
    Ok(routes(state))
}

pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::ui::list))
        .route("/jobs/:id", get(handlers::ui::detail))
        .route("/api/jobs", get(handlers::jobs::list))
        .route("/api/jobs/:id", get(handlers::jobs::retrieve))
        .route("/healthz", get(healthz))
        .route("/livez", get(livez))
        .fallback(handlers::ui::to_list)
        .with_state(state)
}
