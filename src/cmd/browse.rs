use standard_error::{Status, StandardError};
use axum::http::StatusCode;

use super::FilterArgs;
use crate::{
    pkg::internal::{
        jobs::{selectors::group_by_department, FilterField, JobClient, JobFilters, JobSource},
        pages::DetailView,
    },
    prelude::Result,
};

impl From<FilterArgs> for JobFilters {
    fn from(args: FilterArgs) -> Self {
        let mut filters = JobFilters::default();
        let fields = [
            (FilterField::Search, args.search),
            (FilterField::Department, args.department),
            (FilterField::Location, args.location),
            (FilterField::Function, args.function),
        ];
        for (field, value) in fields {
            filters.set(field, value.as_deref().unwrap_or_default());
        }
        filters
    }
}

/// Unlike the list page, the cli reports upstream failures instead of
/// printing an empty listing.
pub async fn list(args: FilterArgs) -> Result<()> {
    let client = JobClient::from_settings()?;
    let filters = JobFilters::from(args);
    let jobs = client.list_jobs(&filters).await?;
    if jobs.is_empty() {
        println!("No job openings found.");
        return Ok(());
    }
    for group in group_by_department(&jobs) {
        println!("{}", group.department);
        for job in group.jobs {
            println!("  [{}] {} ({})", job.id, job.title, job.location);
        }
    }
    Ok(())
}

pub async fn show(id: &str) -> Result<()> {
    let client = JobClient::from_settings()?;
    match DetailView::load(&client, id).await {
        DetailView::Loaded { job, others } => {
            println!("{} [{}]", job.title, job.id);
            println!("{} / {} / {}", job.department, job.location, job.function);
            println!("apply: {}", job.apply_url);
            println!();
            println!("Other {} Jobs", job.department);
            if others.is_empty() {
                println!("  No other jobs in this department.");
            }
            for other in others {
                println!("  [{}] {}", other.id, other.title);
            }
            Ok(())
        }
        _ => Err(StandardError::new("ERR-JOBS-404").code(StatusCode::NOT_FOUND)),
    }
}
