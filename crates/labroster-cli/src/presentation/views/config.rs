use std::fmt;

use crate::presentation::view_models::{ConfigInitViewModel, ConfigViewModel};

use super::CsvTable;

impl fmt::Display for ConfigViewModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = if self.exists { "" } else { " (not created)" };
        writeln!(f, "Config file:     {}{}", self.config_path, status)?;
        writeln!(f, "Data directory:  {}", self.data_dir)?;
        writeln!(
            f,
            "Course key:      {}",
            self.course_key.as_deref().unwrap_or("(unset)")
        )?;
        writeln!(f, "Auth token:      {}", if self.auth_token_set { "set" } else { "unset" })?;
        writeln!(f, "Request timeout: {}s", self.request_timeout_secs)?;
        writeln!(f, "Launch cooldown: {}ms", self.cooldown_ms)?;
        writeln!(f)?;
        writeln!(f, "Endpoints:")?;
        writeln!(f, "  LMS:               {}", or_unset(&self.lms_base_url))?;
        writeln!(f, "  Lab provider:      {}", or_unset(&self.lab_provider_base_url))?;
        writeln!(
            f,
            "  Course operations: {}",
            or_unset(&self.course_operations_base_url)
        )
    }
}

fn or_unset(value: &str) -> &str {
    if value.is_empty() { "(unset)" } else { value }
}

impl CsvTable for ConfigViewModel {}

impl fmt::Display for ConfigInitViewModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.config_path)
    }
}

impl CsvTable for ConfigInitViewModel {}
