pub mod client;
pub mod mutators;
pub mod normalize;
pub mod selectors;
pub mod spec;

pub use client::{ApiResult, JobApiError, JobClient, JobSource};
pub use spec::{FilterField, Job, JobFilters, RawField, RawJob};
