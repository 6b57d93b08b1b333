use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct ConfigViewModel {
    pub config_path: String,
    pub exists: bool,
    pub data_dir: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub course_key: Option<String>,
    pub lms_base_url: String,
    pub lab_provider_base_url: String,
    pub course_operations_base_url: String,
    pub auth_token_set: bool,
    pub request_timeout_secs: u64,
    pub cooldown_ms: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ConfigInitViewModel {
    pub config_path: String,
    pub written: bool,
}
