use std::collections::{HashMap, HashSet};

use super::spec::{FilterField, Job, JobFilters};

/// Bucket for jobs that carry no department.
pub const UNGROUPED: &str = "Other";

#[derive(Debug, Clone, PartialEq)]
pub struct DepartmentGroup {
    pub department: String,
    pub jobs: Vec<Job>,
}

/// Choices offered by the filter controls, taken from the loaded jobs only.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterOptions {
    pub departments: Vec<String>,
    pub locations: Vec<String>,
    pub functions: Vec<String>,
}

impl JobFilters {
    pub fn get(&self, field: FilterField) -> Option<&str> {
        match field {
            FilterField::Search => self.search.as_deref(),
            FilterField::Department => self.department.as_deref(),
            FilterField::Location => self.location.as_deref(),
            FilterField::Function => self.function.as_deref(),
        }
    }

    /// Present, non-empty fields in api order.
    pub fn query_pairs(&self) -> Vec<(FilterField, &str)> {
        FilterField::ALL
            .into_iter()
            .filter_map(|field| {
                self.get(field)
                    .filter(|value| !value.is_empty())
                    .map(|value| (field, value))
            })
            .collect()
    }

    /// Url-encoded form of the selection, without a leading `?`.
    pub fn to_query_string(&self) -> String {
        let mut serializer = url::form_urlencoded::Serializer::new(String::new());
        for (field, value) in self.query_pairs() {
            serializer.append_pair(field.as_str(), value);
        }
        serializer.finish()
    }
}

/// Groups jobs by department in a single pass. Keys keep first-seen order and
/// jobs keep their received order inside each bucket.
pub fn group_by_department(jobs: &[Job]) -> Vec<DepartmentGroup> {
    let mut groups: Vec<DepartmentGroup> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();
    for job in jobs {
        let key = if job.department.is_empty() {
            UNGROUPED
        } else {
            job.department.as_str()
        };
        match index.get(key) {
            Some(&slot) => groups[slot].jobs.push(job.clone()),
            None => {
                index.insert(key, groups.len());
                groups.push(DepartmentGroup {
                    department: key.to_string(),
                    jobs: vec![job.clone()],
                });
            }
        }
    }
    groups
}

pub fn filter_options(jobs: &[Job]) -> FilterOptions {
    FilterOptions {
        departments: distinct(jobs, |job| &job.department),
        locations: distinct(jobs, |job| &job.location),
        functions: distinct(jobs, |job| &job.function),
    }
}

fn distinct<'a>(jobs: &'a [Job], field: impl Fn(&'a Job) -> &'a String) -> Vec<String> {
    let mut seen = HashSet::new();
    jobs.iter()
        .map(field)
        .filter(|value| !value.is_empty() && seen.insert(*value))
        .cloned()
        .collect()
}
