use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct DashboardStatusViewModel {
    pub course: String,
    pub available: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct DashboardLaunchViewModel {
    pub course: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub opened: bool,
}
