use serde::Serialize;

use super::common::PageViewModel;

pub const LAB_COLUMNS: [&str; 7] = [
    "Lab Name",
    "Number of Launches",
    "Score",
    "Percentage",
    "Passed",
    "Start Time",
    "End Time",
];
pub const LAB_EMPTY_MESSAGE: &str = "No Labs found.";

#[derive(Debug, Clone, Serialize)]
pub struct LabRowViewModel {
    pub lab_name: String,
    pub lab_instance_id: String,
    pub launches: String,
    pub score: String,
    pub percentage: String,
    pub passed: String,
    pub start_time: String,
    pub end_time: String,
}

impl LabRowViewModel {
    pub fn cells(&self) -> Vec<String> {
        vec![
            self.lab_name.clone(),
            self.launches.clone(),
            self.score.clone(),
            self.percentage.clone(),
            self.passed.clone(),
            self.start_time.clone(),
            self.end_time.clone(),
        ]
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct LabListViewModel {
    pub student: String,
    pub page: PageViewModel,
    pub entries: Vec<LabRowViewModel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
