use labroster_client::LaunchOutcome;
use labroster_types::CourseKey;

use crate::presentation::presenters::roster::launch_error_text;
use crate::presentation::view_models::{
    CommandResultViewModel, DashboardLaunchViewModel, DashboardStatusViewModel, Guidance,
    StatusBadge,
};

pub fn present_dashboard_status(
    course: &CourseKey,
    available: bool,
) -> CommandResultViewModel<DashboardStatusViewModel> {
    let content = DashboardStatusViewModel {
        course: course.to_string(),
        available,
    };

    if available {
        CommandResultViewModel::new(content)
            .with_badge(StatusBadge::success("Dashboard available"))
            .with_suggestion(Guidance::new("Open it").with_command("labroster dashboard launch"))
    } else {
        CommandResultViewModel::new(content)
            .with_badge(StatusBadge::warning("Dashboard not available for this course"))
    }
}

/// `outcome` is `None` when a launch was already in flight.
pub fn present_dashboard_launch(
    course: &CourseKey,
    outcome: Option<&LaunchOutcome>,
    opened: bool,
) -> CommandResultViewModel<DashboardLaunchViewModel> {
    match outcome {
        Some(LaunchOutcome::Ready { url }) => {
            let content = DashboardLaunchViewModel {
                course: course.to_string(),
                url: Some(url.clone()),
                error: None,
                opened,
            };
            let badge = if opened {
                StatusBadge::success("Dashboard opened")
            } else {
                StatusBadge::success("Dashboard URL ready")
            };
            CommandResultViewModel::new(content).with_badge(badge)
        }
        Some(LaunchOutcome::Failed {
            course_key,
            message,
        }) => {
            let text = launch_error_text(course_key, message);
            CommandResultViewModel::new(DashboardLaunchViewModel {
                course: course.to_string(),
                url: None,
                error: Some(text.clone()),
                opened: false,
            })
            .with_badge(StatusBadge::error(text))
        }
        None => CommandResultViewModel::new(DashboardLaunchViewModel {
            course: course.to_string(),
            url: None,
            error: None,
            opened: false,
        })
        .with_badge(StatusBadge::warning("A launch is already in progress")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn course() -> CourseKey {
        CourseKey::parse("ccx-v1:Org+CS101+2024+ccx@3").unwrap()
    }

    #[test]
    fn test_failed_launch_carries_error_text() {
        let outcome = LaunchOutcome::Failed {
            course_key: "ccx-v1:Org+CS101+2024+ccx@3".to_string(),
            message: "no dashboard".to_string(),
        };
        let result = present_dashboard_launch(&course(), Some(&outcome), false);

        assert_eq!(
            result.content.error.as_deref(),
            Some("Could not launch the dashboard for ccx-v1:Org+CS101+2024+ccx@3: no dashboard")
        );
        assert!(result.content.url.is_none());
    }

    #[test]
    fn test_ready_launch_not_opened() {
        let outcome = LaunchOutcome::Ready {
            url: "https://dash.example/c/1".to_string(),
        };
        let result = present_dashboard_launch(&course(), Some(&outcome), false);

        assert_eq!(result.content.url.as_deref(), Some("https://dash.example/c/1"));
        assert!(!result.content.opened);
    }
}
