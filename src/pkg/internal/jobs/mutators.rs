use url::form_urlencoded;

use super::spec::{FilterField, JobFilters};

impl JobFilters {
    fn slot_mut(&mut self, field: FilterField) -> &mut Option<String> {
        match field {
            FilterField::Search => &mut self.search,
            FilterField::Department => &mut self.department,
            FilterField::Location => &mut self.location,
            FilterField::Function => &mut self.function,
        }
    }

    /// Replaces one field; an empty value removes the constraint instead of
    /// filtering for emptiness.
    pub fn set(&mut self, field: FilterField, value: &str) {
        *self.slot_mut(field) = if value.is_empty() {
            None
        } else {
            Some(value.to_string())
        };
    }

    pub fn with(mut self, field: FilterField, value: &str) -> Self {
        self.set(field, value);
        self
    }

    pub fn without(&self, field: FilterField) -> Self {
        self.clone().with(field, "")
    }

    /// Drops empty values that arrive through query strings and forms.
    pub fn sanitized(self) -> Self {
        let mut clean = JobFilters::default();
        for field in FilterField::ALL {
            if let Some(value) = self.get(field) {
                clean.set(field, value);
            }
        }
        clean
    }

    /// Builds a selection from a raw query string. Unknown keys are ignored
    /// and a repeated key keeps its last value.
    pub fn from_query(query: Option<&str>) -> Self {
        let mut filters = JobFilters::default();
        let pairs = form_urlencoded::parse(query.unwrap_or_default().as_bytes());
        for (key, value) in pairs {
            if let Some(field) = FilterField::from_name(&key) {
                filters.set(field, &value);
            }
        }
        filters
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_replaces_only_the_named_field() {
        let mut filters = JobFilters::default().with(FilterField::Department, "Engineering");
        filters.set(FilterField::Location, "NYC");
        filters.set(FilterField::Location, "Goa");
        assert_eq!(filters.department.as_deref(), Some("Engineering"));
        assert_eq!(filters.location.as_deref(), Some("Goa"));
        assert_eq!(filters.search, None);
    }

    #[test]
    fn empty_value_removes_the_field() {
        let mut filters = JobFilters::default().with(FilterField::Location, "NYC");
        filters.set(FilterField::Location, "");
        assert_eq!(filters, JobFilters::default());
    }

    #[test]
    fn without_leaves_the_original_untouched() {
        let filters = JobFilters::default()
            .with(FilterField::Search, "rust")
            .with(FilterField::Function, "Software");
        let narrowed = filters.without(FilterField::Search);
        assert_eq!(narrowed.search, None);
        assert_eq!(narrowed.function.as_deref(), Some("Software"));
        assert_eq!(filters.search.as_deref(), Some("rust"));
    }

    #[test]
    fn sanitized_drops_empty_strings() {
        let filters = JobFilters {
            search: Some(String::new()),
            department: Some("Sales".into()),
            location: Some(String::new()),
            function: None,
        };
        assert_eq!(
            filters.sanitized(),
            JobFilters::default().with(FilterField::Department, "Sales")
        );
    }

    #[test]
    fn query_strings_fold_through_set() {
        let filters =
            JobFilters::from_query(Some("department=A&page=2&search=senior+dev&department=B&location="));
        assert_eq!(
            filters,
            JobFilters::default()
                .with(FilterField::Search, "senior dev")
                .with(FilterField::Department, "B")
        );
        assert_eq!(JobFilters::from_query(None), JobFilters::default());
    }

    #[test]
    fn a_trailing_empty_value_clears_the_field() {
        let filters = JobFilters::from_query(Some("function=Sales&function="));
        assert_eq!(filters.function, None);
    }
}
