use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single posting, with department/location/function already resolved to
/// display strings.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: i64,
    pub title: String,
    pub department: String,
    pub location: String,
    pub function: String,
    pub description: String,
    pub apply_url: String,
}

/// Upstream shape of department/location/function.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum RawField {
    Text(String),
    Reference(Map<String, Value>),
    Other(Value),
}

impl Default for RawField {
    fn default() -> Self {
        RawField::Other(Value::Null)
    }
}

/// A job record as the recruiting api returns it.
#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct RawJob {
    pub id: i64,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub department: RawField,
    #[serde(default)]
    pub location: RawField,
    #[serde(default)]
    pub function: RawField,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub apply_url: Option<String>,
}

/// Sparse filter selection. `None` means no constraint on that dimension.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobFilters {
    pub search: Option<String>,
    pub department: Option<String>,
    pub location: Option<String>,
    pub function: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterField {
    Search,
    Department,
    Location,
    Function,
}

impl FilterField {
    /// Query order used when talking to the recruiting api.
    pub const ALL: [FilterField; 4] = [
        FilterField::Search,
        FilterField::Department,
        FilterField::Location,
        FilterField::Function,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FilterField::Search => "search",
            FilterField::Department => "department",
            FilterField::Location => "location",
            FilterField::Function => "function",
        }
    }

    pub fn from_name(name: &str) -> Option<FilterField> {
        FilterField::ALL.into_iter().find(|field| field.as_str() == name)
    }
}
