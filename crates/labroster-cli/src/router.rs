//! Screen navigation.
//!
//! The router is the only owner of the hand-off state (selected student and
//! lab). Screens request transitions through [`Router::navigate`].

use labroster_types::{CourseKey, SelectedLab, SelectedStudent};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    Roster,
    LabSummary {
        student: SelectedStudent,
    },
    LabDetails {
        lab: SelectedLab,
        student: SelectedStudent,
    },
}

impl Screen {
    /// Client-side route of this screen within `course`.
    pub fn route_path(&self, course: &CourseKey) -> String {
        match self {
            Screen::Roster => format!("/courses/{course}"),
            Screen::LabSummary { student } => {
                format!("/courses/{course}/lab-summary/{}", student.anonymous_user_id)
            }
            Screen::LabDetails { lab, .. } => {
                format!("/courses/{course}/lab-details/{}", lab.lab_instance_id)
            }
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Screen::Roster => "Class Roster",
            Screen::LabSummary { .. } => "Lab Summary",
            Screen::LabDetails { .. } => "Lab Details",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Router {
    course: CourseKey,
    screen: Screen,
}

impl Router {
    pub fn new(course: CourseKey) -> Self {
        Self {
            course,
            screen: Screen::Roster,
        }
    }

    pub fn course(&self) -> &CourseKey {
        &self.course
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn selected_student(&self) -> Option<&SelectedStudent> {
        match &self.screen {
            Screen::Roster => None,
            Screen::LabSummary { student } | Screen::LabDetails { student, .. } => Some(student),
        }
    }

    pub fn selected_lab(&self) -> Option<&SelectedLab> {
        match &self.screen {
            Screen::LabDetails { lab, .. } => Some(lab),
            _ => None,
        }
    }

    pub fn route_path(&self) -> String {
        self.screen.route_path(&self.course)
    }

    /// Single navigation entry point.
    ///
    /// A lab selects the details screen (keeping the given student, or the
    /// one already held). A student alone selects the summary screen. Neither
    /// returns to the roster and drops both hand-off values. A lab with no
    /// student to return to cannot be shown and also lands on the roster.
    pub fn navigate(
        &mut self,
        student: Option<SelectedStudent>,
        lab: Option<SelectedLab>,
    ) -> &Screen {
        let next = match (student, lab) {
            (student, Some(lab)) => match student.or_else(|| self.selected_student().cloned()) {
                Some(student) => Screen::LabDetails { lab, student },
                None => Screen::Roster,
            },
            (Some(student), None) => Screen::LabSummary { student },
            (None, None) => Screen::Roster,
        };

        debug!(from = %self.route_path(), to = %next.route_path(&self.course), "navigate");
        self.screen = next;
        &self.screen
    }

    pub fn back_to_roster(&mut self) -> &Screen {
        self.navigate(None, None)
    }

    /// Enter a screen by route path, as a deep link would. Downstream
    /// screens are only entered when the held hand-off value matches the
    /// path; otherwise the router redirects to the roster.
    pub fn open_path(&mut self, path: &str) -> &Screen {
        let prefix = format!("/courses/{}", self.course);
        let rest = path
            .strip_prefix(prefix.as_str())
            .map(|rest| rest.trim_matches('/'));

        let next = match rest.and_then(|rest| rest.split_once('/')) {
            Some(("lab-summary", id)) => self
                .selected_student()
                .filter(|student| student.anonymous_user_id == id)
                .map(|student| Screen::LabSummary {
                    student: student.clone(),
                }),
            Some(("lab-details", id)) => match &self.screen {
                Screen::LabDetails { lab, .. } if lab.lab_instance_id == id => {
                    Some(self.screen.clone())
                }
                _ => None,
            },
            _ => None,
        };

        match next {
            Some(screen) => {
                self.screen = screen;
                &self.screen
            }
            None => {
                debug!(path, "missing hand-off state, redirecting to roster");
                self.back_to_roster()
            }
        }
    }
}
