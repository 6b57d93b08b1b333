use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use labroster_client::{ClientConfig, Endpoints};
use labroster_types::CourseKey;

pub const CONFIG_FILE: &str = "config.toml";
pub const LOG_FILE: &str = "labroster.log";

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_COOLDOWN_MS: u64 = 2000;

/// Environment variables that override file settings.
pub const ENV_LMS_BASE_URL: &str = "LMS_BASE_URL";
pub const ENV_LAB_PROVIDER_BASE_URL: &str = "LAB_PROVIDER_BASE_URL";
pub const ENV_COURSE_OPERATIONS_BASE_URL: &str = "COURSE_OPERATIONS_API_V2_BASE_URL";
pub const ENV_TOKEN: &str = "LABROSTER_TOKEN";
pub const ENV_DATA_DIR: &str = "LABROSTER_PATH";

/// Resolve the data directory based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. LABROSTER_PATH environment variable (with tilde expansion)
/// 3. Platform config directory
/// 4. ~/.labroster
pub fn resolve_data_dir(explicit_path: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    if let Ok(env_path) = std::env::var(ENV_DATA_DIR) {
        return Ok(expand_tilde(&env_path));
    }

    if let Some(config_dir) = dirs::config_dir() {
        return Ok(config_dir.join("labroster"));
    }

    if let Some(home) = dirs::home_dir() {
        return Ok(home.join(".labroster"));
    }

    Err(anyhow!(
        "could not determine data directory: no HOME or platform config directory found"
    ))
}

fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(stripped);
    }
    PathBuf::from(path)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Course shown when `--course` is not given.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub course_key: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth_token: Option<String>,

    #[serde(default = "default_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Cooldown applied to the dashboard launch action.
    #[serde(default = "default_cooldown_ms")]
    pub cooldown_ms: u64,

    #[serde(default)]
    pub endpoints: Endpoints,
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

fn default_cooldown_ms() -> u64 {
    DEFAULT_COOLDOWN_MS
}

impl Default for Config {
    fn default() -> Self {
        Self {
            course_key: None,
            auth_token: None,
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
            cooldown_ms: DEFAULT_COOLDOWN_MS,
            endpoints: Endpoints::default(),
        }
    }
}

impl Config {
    /// Load from `path`; a missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("invalid config file {}", path.display()))?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)
            .with_context(|| format!("failed to write {}", path.display()))?;
        Ok(())
    }

    /// Apply environment overrides from the process environment.
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides_from(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary lookup. Empty values are ignored.
    pub fn with_overrides_from(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        if let Some(url) = get(ENV_LMS_BASE_URL) {
            self.endpoints.lms_base_url = url;
        }
        if let Some(url) = get(ENV_LAB_PROVIDER_BASE_URL) {
            self.endpoints.lab_provider_base_url = url;
        }
        if let Some(url) = get(ENV_COURSE_OPERATIONS_BASE_URL) {
            self.endpoints.course_operations_base_url = url;
        }
        if let Some(token) = get(ENV_TOKEN) {
            self.auth_token = Some(token);
        }
        self
    }

    pub fn client_config(&self) -> ClientConfig {
        ClientConfig::new(self.endpoints.clone())
            .with_auth_token(self.auth_token.clone())
            .with_timeout(Duration::from_secs(self.request_timeout_secs.max(1)))
    }

    pub fn cooldown(&self) -> Duration {
        Duration::from_millis(self.cooldown_ms)
    }

    /// The course to work on: the override when given, else the configured one.
    pub fn course(&self, course_override: Option<&str>) -> Result<CourseKey> {
        let raw = course_override
            .or(self.course_key.as_deref())
            .ok_or_else(|| anyhow!("no course selected: pass --course or set course_key in config"))?;
        Ok(CourseKey::parse(raw)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::TempDir;

    #[test]
    fn test_config_save_and_load() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join(CONFIG_FILE);

        let config = Config {
            course_key: Some("course-v1:Org+CS101+2024".to_string()),
            endpoints: Endpoints::single_host("http://localhost:18000"),
            ..Config::default()
        };
        config.save_to(&config_path)?;

        let loaded = Config::load_from(&config_path)?;
        assert_eq!(loaded, config);
        Ok(())
    }

    #[test]
    fn test_load_nonexistent_returns_default() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let loaded = Config::load_from(&temp_dir.path().join("missing.toml"))?;
        assert_eq!(loaded, Config::default());
        assert_eq!(loaded.cooldown_ms, 2000);
        Ok(())
    }

    #[test]
    fn test_partial_file_uses_defaults() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join(CONFIG_FILE);
        std::fs::write(&path, "[endpoints]\nlms_base_url = \"https://lms.example.com\"\n")?;

        let loaded = Config::load_from(&path)?;
        assert_eq!(loaded.endpoints.lms_base_url, "https://lms.example.com");
        assert_eq!(loaded.request_timeout_secs, DEFAULT_TIMEOUT_SECS);
        assert!(loaded.course_key.is_none());
        Ok(())
    }

    #[test]
    fn test_env_overrides() {
        let env: HashMap<&str, &str> = HashMap::from([
            (ENV_LMS_BASE_URL, "https://lms.override"),
            (ENV_COURSE_OPERATIONS_BASE_URL, ""),
            (ENV_TOKEN, "t0ken"),
        ]);
        let base = Config {
            endpoints: Endpoints::single_host("https://file.example"),
            ..Config::default()
        };

        let config = base.with_overrides_from(|key| env.get(key).map(|v| v.to_string()));

        assert_eq!(config.endpoints.lms_base_url, "https://lms.override");
        assert_eq!(config.endpoints.lab_provider_base_url, "https://file.example");
        assert_eq!(config.endpoints.course_operations_base_url, "https://file.example");
        assert_eq!(config.auth_token.as_deref(), Some("t0ken"));
    }

    #[test]
    fn test_course_override_wins() -> Result<()> {
        let config = Config {
            course_key: Some("course-v1:Org+CS101+2024".to_string()),
            ..Config::default()
        };

        assert!(config.course(Some("ccx-v1:Org+CS101+2024+ccx@3"))?.is_class());
        assert!(!config.course(None)?.is_class());
        assert!(Config::default().course(None).is_err());
        assert!(config.course(Some("nonsense")).is_err());
        Ok(())
    }

    #[test]
    fn test_explicit_data_dir() -> Result<()> {
        assert_eq!(resolve_data_dir(Some("/tmp/lr"))?, PathBuf::from("/tmp/lr"));
        Ok(())
    }
}
