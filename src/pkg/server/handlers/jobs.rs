use axum::{
    extract::{Path, RawQuery, State},
    Json,
};

use crate::{
    pkg::{
        internal::jobs::{Job, JobFilters},
        server::state::AppState,
    },
    prelude::Result,
};

pub async fn list(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
) -> Result<Json<Vec<Job>>> {
    let filters = JobFilters::from_query(query.as_deref());
    let jobs = state.jobs.list_jobs(&filters).await?;
    Ok(Json(jobs))
}

pub async fn retrieve(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<Job>> {
    let job = state.jobs.get_job(&id).await?;
    Ok(Json(job))
}
