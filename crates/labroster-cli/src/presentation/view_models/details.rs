use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Clone, Serialize)]
pub struct GaugeViewModel {
    pub label: String,
    pub value: f64,
    pub max: f64,
    /// 0.0 ..= 1.0
    pub ratio: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct DetailsCardViewModel {
    pub fields: Vec<(String, String)>,
    pub num_tasks: f64,
    pub num_completed_tasks: f64,
    pub gauges: Vec<GaugeViewModel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw: Option<Value>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum DetailsContent {
    Loading,
    Message { text: String, is_error: bool },
    Card(Box<DetailsCardViewModel>),
}

#[derive(Debug, Clone, Serialize)]
pub struct LabDetailsViewModel {
    pub title: String,
    pub lab_instance_id: String,
    pub content: DetailsContent,
}
