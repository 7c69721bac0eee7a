use askama::Template;
use axum::{
    extract::{Path, RawQuery, State},
    http::StatusCode,
    response::{Html, Redirect},
};
use standard_error::{HtmlRes, StandardError, Status};

use crate::{
    conf::settings,
    pkg::{
        internal::{
            jobs::JobFilters,
            pages::{DetailView, ListPage},
        },
        server::{
            state::AppState,
            uispec::{JobDetail, JobList, JobNotFound},
        },
    },
    prelude::Result,
};

pub async fn list(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
) -> Result<Html<String>> {
    let mut page = ListPage::new(JobFilters::from_query(query.as_deref()));
    page.load(state.jobs.as_ref()).await;
    let template = JobList::from_page(&page);
    Ok(Html(template.render()?))
}

pub async fn detail(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Html<String>> {
    match DetailView::load(state.jobs.as_ref(), &id).await {
        DetailView::Loaded { job, others } => {
            let page_url = format!("{}/jobs/{}", settings.base_url, id);
            let template = JobDetail::new(job, others, &page_url);
            Ok(Html(template.render()?))
        }
        _ => Err(StandardError::new("ERR-JOBS-404")
            .code(StatusCode::NOT_FOUND)
            .template(JobNotFound {}.render()?)),
    }
}

pub async fn to_list() -> Redirect {
    Redirect::to("/")
}
