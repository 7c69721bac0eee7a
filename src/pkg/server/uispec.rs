use askama::Template;

use crate::pkg::internal::{
    jobs::{selectors::DepartmentGroup, FilterField, Job},
    pages::ListPage,
};

pub struct SelectOption {
    pub value: String,
    pub selected: bool,
}

pub struct FilterSelect {
    pub name: &'static str,
    pub placeholder: &'static str,
    pub options: Vec<SelectOption>,
}

/// An applied filter; following `remove_href` drops it from the selection.
pub struct FilterChip {
    pub field: &'static str,
    pub value: String,
    pub remove_href: String,
}

pub struct ShareLink {
    pub label: &'static str,
    pub href: String,
}

#[derive(Template)]
#[template(path = "list.html")]
pub struct JobList {
    pub search: String,
    pub selects: Vec<FilterSelect>,
    pub chips: Vec<FilterChip>,
    pub groups: Vec<DepartmentGroup>,
}

impl JobList {
    pub fn from_page(page: &ListPage) -> Self {
        let options = page.options();
        let select = |field: FilterField, placeholder: &'static str, values: Vec<String>| {
            let current = page.filters.get(field);
            FilterSelect {
                name: field.as_str(),
                placeholder,
                options: values
                    .into_iter()
                    .map(|value| SelectOption {
                        selected: current == Some(value.as_str()),
                        value,
                    })
                    .collect(),
            }
        };
        let chips = page
            .filters
            .query_pairs()
            .into_iter()
            .map(|(field, value)| FilterChip {
                field: field.as_str(),
                value: value.to_string(),
                remove_href: list_href(&page.filters.without(field).to_query_string()),
            })
            .collect();
        JobList {
            search: page.filters.search.clone().unwrap_or_default(),
            selects: vec![
                select(FilterField::Department, "Department", options.departments),
                select(FilterField::Location, "Location", options.locations),
                select(FilterField::Function, "Function", options.functions),
            ],
            chips,
            groups: page.groups(),
        }
    }
}

fn list_href(query: &str) -> String {
    if query.is_empty() {
        "/".to_string()
    } else {
        format!("/?{}", query)
    }
}

#[derive(Template)]
#[template(path = "detail.html")]
pub struct JobDetail {
    pub job: Job,
    pub others: Vec<Job>,
    pub share_links: Vec<ShareLink>,
}

impl JobDetail {
    pub fn new(job: Job, others: Vec<Job>, page_url: &str) -> Self {
        let target: String = url::form_urlencoded::byte_serialize(page_url.as_bytes()).collect();
        let share_links = vec![
            ShareLink {
                label: "Share on Facebook",
                href: format!("https://www.facebook.com/sharer/sharer.php?u={}", target),
            },
            ShareLink {
                label: "Share on LinkedIn",
                href: format!("https://www.linkedin.com/shareArticle?mini=true&url={}", target),
            },
            ShareLink {
                label: "Share on Twitter",
                href: format!("https://twitter.com/intent/tweet?url={}", target),
            },
        ];
        JobDetail {
            job,
            others,
            share_links,
        }
    }
}

#[derive(Template)]
#[template(path = "not_found.html")]
pub struct JobNotFound {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pkg::internal::{jobs::JobFilters, testing::job};

    #[test]
    fn chips_link_to_the_selection_without_them() {
        let mut page = ListPage::new(
            JobFilters::default()
                .with(FilterField::Department, "Eng")
                .with(FilterField::Location, "NYC"),
        );
        page.jobs = vec![job(1, "Eng")];
        let view = JobList::from_page(&page);

        let hrefs: Vec<_> = view.chips.iter().map(|c| c.remove_href.as_str()).collect();
        assert_eq!(hrefs, vec!["/?location=NYC", "/?department=Eng"]);
        assert!(view.selects[0].options[0].selected);
        assert!(!view.selects[1].options[0].selected);
    }

    #[test]
    fn last_chip_links_back_to_the_bare_list() {
        let page = ListPage::new(JobFilters::default().with(FilterField::Search, "rust"));
        let view = JobList::from_page(&page);
        assert_eq!(view.chips[0].remove_href, "/");
        assert_eq!(view.search, "rust");
    }

    #[test]
    fn share_links_encode_the_page_url() {
        let view = JobDetail::new(job(7, "Eng"), vec![], "http://localhost:3000/jobs/7");
        assert_eq!(
            view.share_links[2].href,
            "https://twitter.com/intent/tweet?url=http%3A%2F%2Flocalhost%3A3000%2Fjobs%2F7"
        );
    }

    #[test]
    fn empty_list_renders_the_empty_message() {
        let html = JobList::from_page(&ListPage::default()).render().unwrap();
        assert!(html.contains("No job openings found."));
    }
}
