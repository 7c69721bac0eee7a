use crate::pkg::internal::jobs::{ApiResult, FilterField, Job, JobFilters, JobSource};

/// Detail page state: `Loading` until both the job and its department
/// listing resolve, `NotFound` if either call fails.
#[derive(Debug, Clone, PartialEq)]
pub enum DetailView {
    Loading,
    Loaded {
        job: Job,
        others: Vec<Job>,
    },
    NotFound,
}

impl DetailView {
    pub async fn load(source: &dyn JobSource, id: &str) -> Self {
        let mut view = DetailView::Loading;
        view.refresh(source, id).await;
        view
    }

    /// Re-enters `Loading` and resolves the view for `id`.
    pub async fn refresh(&mut self, source: &dyn JobSource, id: &str) {
        *self = DetailView::Loading;
        *self = match fetch_with_others(source, id).await {
            Ok((job, others)) => DetailView::Loaded { job, others },
            Err(e) => {
                tracing::error!("failed to load job {}: {}", id, e);
                DetailView::NotFound
            }
        };
    }
}

/// The department listing is requested only once the job's department is known.
async fn fetch_with_others(source: &dyn JobSource, id: &str) -> ApiResult<(Job, Vec<Job>)> {
    let job = source.get_job(id).await?;
    let filters = JobFilters::default().with(FilterField::Department, &job.department);
    let in_department = source.list_jobs(&filters).await?;
    Ok((job, others_in_department(in_department, id)))
}

/// Drops the current job from its department listing, keeping server order.
pub fn others_in_department(jobs: Vec<Job>, current_id: &str) -> Vec<Job> {
    jobs.into_iter()
        .filter(|job| !same_id(job.id, current_id))
        .collect()
}

/// Compares a numeric job id with an id taken from a route.
pub fn same_id(id: i64, route_id: &str) -> bool {
    id.to_string() == route_id
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pkg::internal::testing::{job, StubSource};

    #[test]
    fn route_ids_match_numeric_ids() {
        assert!(same_id(42, "42"));
        assert!(!same_id(42, "43"));
        assert!(!same_id(42, "forty-two"));
    }

    #[test]
    fn current_job_is_excluded() {
        let others = others_in_department(vec![job(41, "Eng"), job(42, "Eng"), job(43, "Eng")], "42");
        let ids: Vec<_> = others.iter().map(|j| j.id).collect();
        assert_eq!(ids, vec![41, 43]);
    }

    #[tokio::test]
    async fn loads_job_then_department_listing() {
        let source = StubSource::with_jobs(vec![job(7, "Eng"), job(8, "Eng"), job(5, "Sales"), job(9, "Eng")]);
        let view = DetailView::load(&source, "7").await;

        match view {
            DetailView::Loaded { job, others } => {
                assert_eq!(job.id, 7);
                let ids: Vec<_> = others.iter().map(|j| j.id).collect();
                assert_eq!(ids, vec![8, 9]);
            }
            other => panic!("unexpected view: {other:?}"),
        }
        assert_eq!(
            source.calls(),
            vec![JobFilters::default().with(FilterField::Department, "Eng")]
        );
    }

    #[tokio::test]
    async fn missing_job_is_not_found_without_second_call() {
        let source = StubSource::with_jobs(vec![job(1, "Eng")]);
        let view = DetailView::load(&source, "404").await;
        assert_eq!(view, DetailView::NotFound);
        assert!(source.calls().is_empty());
    }

    #[tokio::test]
    async fn failed_department_listing_is_not_found() {
        let mut source = StubSource::failing();
        source.jobs = vec![job(3, "Eng")];
        let mut view = DetailView::Loading;
        view.refresh(&source, "3").await;
        assert_eq!(view, DetailView::NotFound);
    }
}
