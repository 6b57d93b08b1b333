use serde::Serialize;

use super::common::PageViewModel;

pub const ROSTER_COLUMNS: [&str; 2] = ["Username", "Email"];
pub const ROSTER_EMPTY_MESSAGE: &str = "No users found.";

#[derive(Debug, Clone, Serialize)]
pub struct RosterRowViewModel {
    pub username: String,
    pub email: String,
    pub anonymous_id: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct RosterListViewModel {
    pub course: String,
    pub page: PageViewModel,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
    pub entries: Vec<RosterRowViewModel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct FilterBarViewModel {
    pub field_label: String,
    pub value: String,
    pub focused: bool,
    pub can_submit: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_filter: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DashboardPanelViewModel {
    pub title: String,
    pub visible: bool,
    pub launching: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_url: Option<String>,
}
