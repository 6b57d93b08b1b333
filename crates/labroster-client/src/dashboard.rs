use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;
use tracing::error;

use labroster_types::CourseKey;

use crate::api::LabApi;
use crate::debounce::{DEFAULT_COOLDOWN, Debounced, UiEvent};
use crate::paged::DEFAULT_ERROR_MESSAGE;

type LaunchFuture = Pin<Box<dyn Future<Output = LaunchOutcome> + Send>>;
type LaunchFn = Box<dyn Fn() -> LaunchFuture + Send + Sync>;

/// Result of a dashboard launch attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LaunchOutcome {
    /// Open this URL in a new browser window.
    Ready { url: String },
    /// Show `message` next to the launch control, referencing the course.
    Failed { course_key: String, message: String },
}

/// Instructor dashboard launch control for one course.
#[derive(Clone)]
pub struct DashboardLauncher {
    api: Arc<dyn LabApi>,
    course: CourseKey,
    launch: Arc<Debounced<LaunchFn>>,
}

impl DashboardLauncher {
    pub fn new(api: Arc<dyn LabApi>, course: CourseKey) -> Self {
        Self::with_cooldown(api, course, DEFAULT_COOLDOWN)
    }

    pub fn with_cooldown(api: Arc<dyn LabApi>, course: CourseKey, cooldown: Duration) -> Self {
        let launch: LaunchFn = {
            let api = Arc::clone(&api);
            let course = course.clone();
            Box::new(move || {
                let api = Arc::clone(&api);
                let course = course.clone();
                Box::pin(async move { request_launch(api.as_ref(), &course).await }) as LaunchFuture
            })
        };

        Self {
            api,
            course,
            launch: Arc::new(Debounced::with_cooldown(launch, cooldown)),
        }
    }

    pub fn course(&self) -> &CourseKey {
        &self.course
    }

    pub fn is_busy(&self) -> bool {
        self.launch.is_busy()
    }

    /// Whether the launch control should be shown. Lookup failures are logged
    /// and hide it.
    pub async fn is_available(&self) -> bool {
        match self.api.is_ccx_course(&self.course).await {
            Ok(visible) => visible,
            Err(e) => {
                error!(course = %self.course, error = %e, "error fetching course status");
                false
            }
        }
    }

    /// Debounced launch. `None` when dropped because a launch is cooling down.
    pub async fn launch(&self, event: Option<&mut (dyn UiEvent + Send)>) -> Option<LaunchOutcome> {
        self.launch.call(event).await
    }
}

async fn request_launch(api: &dyn LabApi, course: &CourseKey) -> LaunchOutcome {
    match api.launch_dashboard(course).await {
        Ok(response) => match response.url.filter(|url| !url.is_empty()) {
            Some(url) => LaunchOutcome::Ready { url },
            None => LaunchOutcome::Failed {
                course_key: course.to_string(),
                message: response.error.unwrap_or_default(),
            },
        },
        Err(e) => {
            error!(course = %course, error = %e, "error fetching dashboard URL");
            LaunchOutcome::Failed {
                course_key: course.to_string(),
                message: DEFAULT_ERROR_MESSAGE.to_string(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ClientConfig, Endpoints};
    use crate::http::HttpLabApi;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const LAUNCH_PATH: &str = "/skillable_plugin/course-tab/api/v1/instructor-dashboard-launch/";

    fn launcher(server: &MockServer) -> DashboardLauncher {
        let api = HttpLabApi::new(ClientConfig::new(Endpoints::single_host(server.uri()))).unwrap();
        DashboardLauncher::with_cooldown(
            Arc::new(api),
            CourseKey::parse("ccx-v1:Org+CS101+2024+ccx@3").unwrap(),
            Duration::from_millis(50),
        )
    }

    #[tokio::test]
    async fn test_launch_ready() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(LAUNCH_PATH))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"url": "https://dash.example/x"})),
            )
            .mount(&server)
            .await;

        assert_eq!(
            launcher(&server).launch(None).await,
            Some(LaunchOutcome::Ready {
                url: "https://dash.example/x".to_string()
            })
        );
    }

    #[tokio::test]
    async fn test_launch_backend_error_message() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(LAUNCH_PATH))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"error": "Dashboard disabled"})),
            )
            .mount(&server)
            .await;

        assert_eq!(
            launcher(&server).launch(None).await,
            Some(LaunchOutcome::Failed {
                course_key: "ccx-v1:Org+CS101+2024+ccx@3".to_string(),
                message: "Dashboard disabled".to_string()
            })
        );
    }

    #[tokio::test]
    async fn test_launch_transport_failure_uses_default_message() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(LAUNCH_PATH))
            .respond_with(ResponseTemplate::new(502))
            .mount(&server)
            .await;

        let launcher = launcher(&server);
        match launcher.launch(None).await {
            Some(LaunchOutcome::Failed { message, .. }) => {
                assert_eq!(message, DEFAULT_ERROR_MESSAGE)
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
        assert!(launcher.is_busy());
        assert!(launcher.launch(None).await.is_none());
    }

    #[tokio::test]
    async fn test_availability_failure_hides_control() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        assert!(!launcher(&server).is_available().await);
    }
}
