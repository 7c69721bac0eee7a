use serde_json::{Map, Value};

use super::spec::{Job, RawField, RawJob};

/// Keys looked up on a reference object, highest priority first.
const DISPLAY_KEYS: [&str; 3] = ["title", "name", "label"];

/// Resolves any decoded json value to a display string.
///
/// Strings pass through, objects resolve to their first truthy `title`,
/// `name` or `label`, and an object carrying none of those is dumped as
/// compact json. `null` has no display form and yields `None`; other scalars
/// and arrays are rendered as their json text.
pub fn normalize(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(text) => Some(text.clone()),
        Value::Object(map) => Some(display_name(map)),
        other => Some(other.to_string()),
    }
}

impl RawField {
    pub fn normalize(&self) -> Option<String> {
        match self {
            RawField::Text(text) => Some(text.clone()),
            RawField::Reference(map) => Some(display_name(map)),
            RawField::Other(value) => normalize(value),
        }
    }

    /// Display string for a job field; a missing value becomes empty.
    pub fn into_display(self) -> String {
        self.normalize().unwrap_or_default()
    }
}

fn display_name(map: &Map<String, Value>) -> String {
    let found = DISPLAY_KEYS
        .iter()
        .filter_map(|key| map.get(*key))
        .find(|value| is_truthy(value));
    match found {
        Some(Value::String(text)) => text.clone(),
        Some(other) => other.to_string(),
        None => {
            let dump = Value::Object(map.clone()).to_string();
            tracing::warn!(raw = %dump, "reference field has no display key, falling back to raw json");
            dump
        }
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

impl From<RawJob> for Job {
    fn from(raw: RawJob) -> Self {
        Job {
            id: raw.id,
            title: raw.title.unwrap_or_default(),
            department: raw.department.into_display(),
            location: raw.location.into_display(),
            function: raw.function.into_display(),
            description: raw.description.unwrap_or_default(),
            apply_url: raw.apply_url.unwrap_or_default(),
        }
    }
}
