use serde::{Deserialize, Serialize};

use super::course::CourseKey;

/// One enrolled learner, as returned by a roster page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterEntry {
    #[serde(rename = "learner_name", default)]
    pub display_name: String,

    #[serde(rename = "learner_email", default)]
    pub email: String,

    #[serde(rename = "learner_anonymous_id", default)]
    pub anonymous_id: String,
}

/// Hand-off state for the lab screens: the learner picked on the roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedStudent {
    pub anonymous_user_id: String,
    pub username: String,
    pub course_id: CourseKey,
}

impl SelectedStudent {
    pub fn from_entry(entry: &RosterEntry, course_id: &CourseKey) -> Self {
        Self {
            anonymous_user_id: entry.anonymous_id.clone(),
            username: entry.display_name.clone(),
            course_id: course_id.clone(),
        }
    }
}
