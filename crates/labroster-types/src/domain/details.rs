use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::lab::as_number;
use crate::time::{NOT_AVAILABLE, format_provider_timestamp};

/// Full detail document for a single lab instance.
///
/// The provider's schema is wide and loosely typed, so the raw document is
/// kept as-is (it backs the JSON viewer) and the card/chart fields are read
/// through accessors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LabDetails {
    raw: Value,
}

/// Fields shown on the details card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabDetailsCard {
    pub lab_profile_name: String,
    pub user_first_name: String,
    pub user_last_name: String,
    pub start_time: String,
    pub end_time: String,
    pub state: String,
    pub completion_status: String,
    pub total_run_time: String,
    pub exam_passed: String,
}

/// Progress figures shown as gauges.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LabProgress {
    pub num_tasks: f64,
    pub num_completed_tasks: f64,
    pub exam_max_possible_score: f64,
    pub exam_score: f64,
}

impl LabProgress {
    pub fn task_ratio(&self) -> f64 {
        ratio(self.num_completed_tasks, self.num_tasks)
    }

    pub fn score_ratio(&self) -> f64 {
        ratio(self.exam_score, self.exam_max_possible_score)
    }
}

impl LabDetails {
    /// Wrap a detail response. `null`, `{}` and other empty bodies mean
    /// "no details" and yield `None`.
    pub fn from_response(raw: Value) -> Option<Self> {
        let empty = match &raw {
            Value::Null => true,
            Value::Object(map) => map.is_empty(),
            Value::Array(items) => items.is_empty(),
            Value::String(s) => s.is_empty(),
            _ => false,
        };
        (!empty).then_some(Self { raw })
    }

    pub fn raw(&self) -> &Value {
        &self.raw
    }

    pub fn card(&self) -> LabDetailsCard {
        LabDetailsCard {
            lab_profile_name: self.text("LabProfileName"),
            user_first_name: self.text("UserFirstName"),
            user_last_name: self.text("UserLastName"),
            start_time: format_provider_timestamp(self.timestamp("StartTime").as_deref()),
            end_time: format_provider_timestamp(self.timestamp("EndTime").as_deref()),
            state: self.text("State"),
            completion_status: self.text("CompletionStatus"),
            total_run_time: self.text("TotalRunTime"),
            exam_passed: if self.truthy("exam_passed") { "Yes" } else { "No" }.to_string(),
        }
    }

    pub fn progress(&self) -> LabProgress {
        LabProgress {
            num_tasks: self.number("NumTasks"),
            num_completed_tasks: self.number("NumCompletedTasks"),
            exam_max_possible_score: self.number("ExamMaxPossibleScore"),
            exam_score: self.number("ExamScore"),
        }
    }

    fn field(&self, key: &str) -> Option<&Value> {
        self.raw.get(key).filter(|v| !v.is_null())
    }

    fn text(&self, key: &str) -> String {
        match self.field(key) {
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
            None => NOT_AVAILABLE.to_string(),
        }
    }

    fn timestamp(&self, key: &str) -> Option<String> {
        match self.field(key)? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }

    fn number(&self, key: &str) -> f64 {
        self.field(key).and_then(as_number).unwrap_or(0.0)
    }

    fn truthy(&self, key: &str) -> bool {
        match self.field(key) {
            Some(Value::Bool(b)) => *b,
            Some(Value::Number(n)) => n.as_f64().is_some_and(|v| v != 0.0),
            Some(Value::String(s)) => !s.is_empty(),
            Some(Value::Array(_)) | Some(Value::Object(_)) => true,
            _ => false,
        }
    }
}

fn ratio(value: f64, max: f64) -> f64 {
    if max <= 0.0 {
        return 0.0;
    }
    (value / max).clamp(0.0, 1.0)
}
