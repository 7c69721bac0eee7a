use crate::pkg::internal::jobs::{
    selectors::{filter_options, group_by_department, DepartmentGroup, FilterOptions},
    Job, JobFilters, JobSource,
};

/// State behind the job list page. Owned by a single request.
#[derive(Debug, Clone, Default)]
pub struct ListPage {
    pub filters: JobFilters,
    pub jobs: Vec<Job>,
    pub loading: bool,
}

impl ListPage {
    pub fn new(filters: JobFilters) -> Self {
        ListPage {
            filters: filters.sanitized(),
            ..Default::default()
        }
    }

    /// Fetches jobs for the current selection. A failed fetch leaves the page
    /// with no jobs, which renders the same as an empty result.
    pub async fn load(&mut self, source: &dyn JobSource) {
        self.loading = true;
        self.jobs = match source.list_jobs(&self.filters).await {
            Ok(jobs) => jobs,
            Err(e) => {
                tracing::error!("failed to load jobs: {}", e);
                Vec::new()
            }
        };
        self.loading = false;
        tracing::debug!("loaded {} jobs for {:?}", self.jobs.len(), &self.filters);
    }

    pub fn groups(&self) -> Vec<DepartmentGroup> {
        group_by_department(&self.jobs)
    }

    pub fn options(&self) -> FilterOptions {
        filter_options(&self.jobs)
    }
}
