use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusLevel {
    Success,
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone, Serialize)]
pub struct StatusBadge {
    pub level: StatusLevel,
    pub label: String,
}

impl StatusBadge {
    pub fn new(level: StatusLevel, label: impl Into<String>) -> Self {
        Self {
            level,
            label: label.into(),
        }
    }

    pub fn success(label: impl Into<String>) -> Self {
        Self::new(StatusLevel::Success, label)
    }

    pub fn warning(label: impl Into<String>) -> Self {
        Self::new(StatusLevel::Warning, label)
    }

    pub fn error(label: impl Into<String>) -> Self {
        Self::new(StatusLevel::Error, label)
    }

    pub fn icon(&self) -> &'static str {
        match self.level {
            StatusLevel::Success => "✓",
            StatusLevel::Info => "ℹ",
            StatusLevel::Warning => "⚠",
            StatusLevel::Error => "✗",
        }
    }
}

/// A follow-up hint printed after the main output.
#[derive(Debug, Clone, Serialize)]
pub struct Guidance {
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
}

impl Guidance {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            command: None,
        }
    }

    pub fn with_command(mut self, command: impl Into<String>) -> Self {
        self.command = Some(command.into());
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageViewModel {
    pub current: u32,
    pub count: u32,
}
