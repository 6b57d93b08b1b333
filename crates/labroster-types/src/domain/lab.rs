use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;

use super::roster::SelectedStudent;
use crate::time::{NOT_AVAILABLE, format_epoch_seconds};

/// One lab-instance search result as the provider returns it.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RawLabInstance {
    #[serde(default)]
    pub lab_profile_name: String,

    #[serde(default, deserialize_with = "deserialize_id")]
    pub lab_instance_id: String,

    #[serde(default)]
    pub lab_instances_count: Value,

    #[serde(default)]
    pub exam_score: Value,

    #[serde(default)]
    pub exam_max_possible_score: Value,

    #[serde(default)]
    pub exam_passed: Value,

    #[serde(default)]
    pub start_time: Value,

    #[serde(default)]
    pub end_time: Value,
}

/// Outcome of a lab's exam, as shown in the summary table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExamPassed {
    Yes,
    No,
    #[serde(rename = "N/A")]
    NotAvailable,
}

impl ExamPassed {
    /// `true` maps to `Yes`, `false` to `No`; anything else is `N/A`.
    /// The string spellings `"true"`/`"false"` are accepted as well.
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::Bool(true) => ExamPassed::Yes,
            Value::Bool(false) => ExamPassed::No,
            Value::String(s) if s == "true" => ExamPassed::Yes,
            Value::String(s) if s == "false" => ExamPassed::No,
            _ => ExamPassed::NotAvailable,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ExamPassed::Yes => "Yes",
            ExamPassed::No => "No",
            ExamPassed::NotAvailable => NOT_AVAILABLE,
        }
    }
}

impl fmt::Display for ExamPassed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lab summary row derived from a [`RawLabInstance`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabSummaryEntry {
    pub lab_profile_name: String,
    pub lab_instance_id: String,
    pub launch_count: u64,
    pub exam_score: Option<f64>,
    pub exam_percentage: Option<f64>,
    pub exam_passed: ExamPassed,
    pub start_time: String,
    pub end_time: String,
}

impl LabSummaryEntry {
    pub fn from_raw(raw: RawLabInstance) -> Self {
        let exam_score = as_number(&raw.exam_score);
        let exam_percentage = match (exam_score, as_number(&raw.exam_max_possible_score)) {
            (Some(score), Some(max)) => Some(score / max * 10.0).filter(|pct| pct.is_finite()),
            _ => None,
        };

        Self {
            launch_count: as_number(&raw.lab_instances_count)
                .filter(|count| *count >= 1.0)
                .map(|count| count as u64)
                .unwrap_or(1),
            exam_passed: ExamPassed::from_value(&raw.exam_passed),
            start_time: format_epoch_seconds(&raw.start_time),
            end_time: format_epoch_seconds(&raw.end_time),
            lab_profile_name: raw.lab_profile_name,
            lab_instance_id: raw.lab_instance_id,
            exam_score,
            exam_percentage,
        }
    }

    pub fn exam_score_label(&self) -> String {
        self.exam_score
            .map(format_number)
            .unwrap_or_else(|| NOT_AVAILABLE.to_string())
    }

    pub fn exam_percentage_label(&self) -> String {
        self.exam_percentage
            .map(|pct| format!("{}%", format_number(pct)))
            .unwrap_or_else(|| NOT_AVAILABLE.to_string())
    }
}

/// Hand-off state for the details screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedLab {
    pub lab_instance_id: String,
    pub lab_profile_name: String,
    pub owner_user_id: String,
}

impl SelectedLab {
    pub fn from_entry(entry: &LabSummaryEntry, owner: &SelectedStudent) -> Self {
        Self {
            lab_instance_id: entry.lab_instance_id.clone(),
            lab_profile_name: entry.lab_profile_name.clone(),
            owner_user_id: owner.anonymous_user_id.clone(),
        }
    }
}

/// Shortest decimal rendering: `8` rather than `8.0`.
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    format!("{}", value)
}

/// Interpret a JSON number or numeric string.
pub(crate) fn as_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
    .filter(|n| n.is_finite())
}

fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) => s,
        Value::Null => String::new(),
        other => other.to_string(),
    })
}
