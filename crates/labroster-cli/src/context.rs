use anyhow::{Context, Result};
use once_cell::sync::OnceCell;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::runtime::Runtime;

use labroster_client::{DashboardLauncher, HttpLabApi, LabApi};
use labroster_types::CourseKey;

use crate::config::{CONFIG_FILE, Config, LOG_FILE};
use crate::types::OutputFormat;

pub struct ExecutionContext {
    data_dir: PathBuf,
    config_path: PathBuf,
    course_override: Option<String>,
    pub format: OutputFormat,
    config: OnceCell<Config>,
    api: OnceCell<Arc<dyn LabApi>>,
}

impl ExecutionContext {
    pub fn new(
        data_dir: PathBuf,
        config_path: Option<PathBuf>,
        course_override: Option<String>,
        format: OutputFormat,
    ) -> Self {
        let config_path = config_path.unwrap_or_else(|| data_dir.join(CONFIG_FILE));
        Self {
            data_dir,
            config_path,
            course_override,
            format,
            config: OnceCell::new(),
            api: OnceCell::new(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn log_path(&self) -> PathBuf {
        self.data_dir.join(LOG_FILE)
    }

    /// File config with environment overrides applied.
    pub fn config(&self) -> Result<&Config> {
        self.config
            .get_or_try_init(|| Ok(Config::load_from(&self.config_path)?.with_env_overrides()))
    }

    pub fn course(&self) -> Result<CourseKey> {
        self.config()?.course(self.course_override.as_deref())
    }

    pub fn api(&self) -> Result<Arc<dyn LabApi>> {
        self.api
            .get_or_try_init(|| {
                let config = self.config()?;
                config.endpoints.validate().with_context(|| {
                    format!(
                        "endpoints are not configured; edit {} or set LMS_BASE_URL / LAB_PROVIDER_BASE_URL / COURSE_OPERATIONS_API_V2_BASE_URL",
                        self.config_path.display()
                    )
                })?;
                let api: Arc<dyn LabApi> = Arc::new(HttpLabApi::new(config.client_config())?);
                Ok::<_, anyhow::Error>(api)
            })
            .cloned()
    }

    pub fn dashboard_launcher(&self, course: CourseKey) -> Result<DashboardLauncher> {
        let cooldown = self.config()?.cooldown();
        Ok(DashboardLauncher::with_cooldown(self.api()?, course, cooldown))
    }

    pub fn runtime(&self) -> Result<Runtime> {
        tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
            .context("failed to start async runtime")
    }
}
