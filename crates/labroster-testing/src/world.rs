//! TestWorld pattern for declarative integration test setup.

use anyhow::Result;
use assert_cmd::Command;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use tokio::runtime::Runtime;
use wiremock::{Mock, MockServer};

pub const DEFAULT_COURSE: &str = "course-v1:Org+CS101+2024";

/// Variables the CLI reads that must not leak in from the developer's shell.
const SCRUBBED_ENV: [&str; 7] = [
    "LMS_BASE_URL",
    "LAB_PROVIDER_BASE_URL",
    "COURSE_OPERATIONS_API_V2_BASE_URL",
    "LABROSTER_TOKEN",
    "LABROSTER_PATH",
    "LABROSTER_BROWSER",
    "RUST_LOG",
];

/// Isolated environment: temp data directory, a config file pointing every
/// endpoint at a mock server, and extra environment for the CLI.
///
/// # Example
/// ```no_run
/// use labroster_testing::{TestWorld, fixtures};
///
/// let world = TestWorld::new();
/// world.mount(fixtures::course_roster_mock(1, fixtures::roster_page(&[("ada", "ada@example.com", "anon-1")], 1, None)));
///
/// let result = world.run(&["roster", "list"]).unwrap();
/// assert!(result.success());
/// ```
pub struct TestWorld {
    temp_dir: TempDir,
    data_dir: PathBuf,
    // Dropped before the runtime that started it.
    server: MockServer,
    runtime: Runtime,
    course: String,
    env_vars: HashMap<String, String>,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorld {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let data_dir = temp_dir.path().join(".labroster");
        std::fs::create_dir_all(&data_dir).expect("Failed to create data dir");

        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()
            .expect("Failed to start runtime");
        let server = runtime.block_on(MockServer::start());

        let world = Self {
            temp_dir,
            data_dir,
            server,
            runtime,
            course: DEFAULT_COURSE.to_string(),
            env_vars: HashMap::new(),
        };
        world.write_config().expect("Failed to write config");
        world
    }

    /// Use another course key in the config file.
    pub fn with_course(mut self, course: &str) -> Self {
        self.course = course.to_string();
        self.write_config().expect("Failed to write config");
        self
    }

    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env_vars.insert(key.into(), value.into());
        self
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn config_path(&self) -> PathBuf {
        self.data_dir.join("config.toml")
    }

    pub fn temp_dir(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn server_uri(&self) -> String {
        self.server.uri()
    }

    pub fn mount(&self, mock: Mock) {
        self.runtime.block_on(mock.mount(&self.server));
    }

    /// Bodies of every request the backend has seen so far.
    pub fn received_bodies(&self) -> Vec<serde_json::Value> {
        self.runtime
            .block_on(self.server.received_requests())
            .unwrap_or_default()
            .iter()
            .filter_map(|request| serde_json::from_slice(&request.body).ok())
            .collect()
    }

    fn write_config(&self) -> Result<()> {
        let uri = self.server.uri();
        let content = format!(
            r#"course_key = "{course}"
auth_token = "test-token"
request_timeout_secs = 5
cooldown_ms = 50

[endpoints]
lms_base_url = "{uri}"
lab_provider_base_url = "{uri}"
course_operations_base_url = "{uri}"
"#,
            course = self.course,
        );
        std::fs::write(self.config_path(), content)?;
        Ok(())
    }

    /// Configure a CLI command with this environment's data directory and
    /// variables.
    pub fn configure_command<'a>(&self, cmd: &'a mut Command) -> &'a mut Command {
        cmd.arg("--data-dir").arg(self.data_dir());
        cmd.current_dir(self.temp_dir.path());

        for key in SCRUBBED_ENV {
            cmd.env_remove(key);
        }
        for (key, value) in &self.env_vars {
            cmd.env(key, value);
        }
        cmd
    }

    #[allow(deprecated)]
    pub fn run(&self, args: &[&str]) -> Result<CliResult> {
        let mut cmd = Command::cargo_bin("labroster")
            .map_err(|e| anyhow::anyhow!("Failed to find labroster binary: {}", e))?;
        self.configure_command(&mut cmd);
        cmd.args(args);

        let output = cmd.output()?;

        Ok(CliResult {
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }

    /// Run with `--format json` and parse stdout.
    pub fn run_json(&self, args: &[&str]) -> Result<serde_json::Value> {
        let mut full = vec!["--format", "json"];
        full.extend_from_slice(args);
        let result = self.run(&full)?;
        if !result.success() {
            anyhow::bail!("command failed: {}", result.stderr);
        }
        Ok(serde_json::from_str(&result.stdout)?)
    }
}

/// Result of a CLI command execution.
#[derive(Debug)]
pub struct CliResult {
    pub status: std::process::ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

impl CliResult {
    pub fn success(&self) -> bool {
        self.status.success()
    }
}
