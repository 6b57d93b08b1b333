use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Roster fields the enrollment APIs can filter on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterField {
    #[default]
    LearnerName,
    LearnerEmail,
}

impl FilterField {
    pub const ALL: [FilterField; 2] = [FilterField::LearnerName, FilterField::LearnerEmail];

    /// Parameter name on the wire.
    pub fn as_param(&self) -> &'static str {
        match self {
            FilterField::LearnerName => "learner_name",
            FilterField::LearnerEmail => "learner_email",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FilterField::LearnerName => "Name",
            FilterField::LearnerEmail => "Email",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            FilterField::LearnerName => FilterField::LearnerEmail,
            FilterField::LearnerEmail => FilterField::LearnerName,
        }
    }
}

impl fmt::Display for FilterField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_param())
    }
}

/// Server-side filter: either nothing, or a single field/value pair.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Filter {
    term: Option<(FilterField, String)>,
}

impl Filter {
    pub fn none() -> Self {
        Self { term: None }
    }

    pub fn by(field: FilterField, value: impl Into<String>) -> Self {
        Self {
            term: Some((field, value.into())),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.term.is_none()
    }

    pub fn term(&self) -> Option<(FilterField, &str)> {
        self.term
            .as_ref()
            .map(|(field, value)| (*field, value.as_str()))
    }

    /// Query-string pairs for GET endpoints.
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        self.term
            .iter()
            .map(|(field, value)| (field.as_param(), value.clone()))
            .collect()
    }

    /// Merge the filter into a JSON request body.
    pub fn merge_into(&self, body: &mut Map<String, Value>) {
        if let Some((field, value)) = &self.term {
            body.insert(field.as_param().to_string(), Value::String(value.clone()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_filter_adds_nothing() {
        let mut body = Map::new();
        body.insert("course_id".to_string(), json!("course-v1:Org+C1+2024"));
        Filter::none().merge_into(&mut body);

        assert_eq!(Value::Object(body), json!({"course_id": "course-v1:Org+C1+2024"}));
        assert!(Filter::none().to_params().is_empty());
    }

    #[test]
    fn test_filter_merges_single_key() {
        let mut body = Map::new();
        body.insert("course_id".to_string(), json!("course-v1:Org+C1+2024"));
        Filter::by(FilterField::LearnerEmail, "ada@example.com").merge_into(&mut body);

        assert_eq!(
            Value::Object(body),
            json!({"course_id": "course-v1:Org+C1+2024", "learner_email": "ada@example.com"})
        );
    }

    #[test]
    fn test_filter_params() {
        let filter = Filter::by(FilterField::LearnerName, "ada");
        assert_eq!(filter.to_params(), vec![("learner_name", "ada".to_string())]);
        assert_eq!(filter.term(), Some((FilterField::LearnerName, "ada")));
    }
}
