//! Interactive application state: router plus the active screens.
//!
//! `App` is driven by two inputs, key presses and [`AppEvent`]s carrying the
//! results of asynchronous work, and answers both with the [`Effect`]s to
//! run next. It never touches the terminal or the network itself.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::debug;

use labroster_client::{Applied, LaunchOutcome, RequestTicket, Result};
use labroster_types::{
    CourseKey, LabDetails, PageEnvelope, RawLabInstance, RosterEntry, SelectedLab, SelectedStudent,
};

use crate::presentation::view_models::StatusLevel;
use crate::router::{Router, Screen};
use crate::screens::{Effect, LabDetailsScreen, LabSummaryScreen, RosterScreen, ScreenAction};

/// Results of asynchronous work, delivered back to the UI loop.
#[derive(Debug)]
pub enum AppEvent {
    RosterLoaded {
        ticket: RequestTicket,
        result: Result<PageEnvelope<RosterEntry>>,
    },
    LabsLoaded {
        ticket: RequestTicket,
        result: Result<PageEnvelope<RawLabInstance>>,
    },
    DetailsLoaded {
        seq: u64,
        result: Result<Option<LabDetails>>,
    },
    DashboardAvailability(bool),
    DashboardLaunched(Option<LaunchOutcome>),
    UrlOpened {
        url: String,
        error: Option<String>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub level: StatusLevel,
    pub text: String,
}

pub struct App {
    router: Router,
    roster: RosterScreen,
    summary: Option<LabSummaryScreen>,
    details: Option<LabDetailsScreen>,
    status: Option<StatusMessage>,
    should_quit: bool,
}

impl App {
    pub fn new(course: CourseKey) -> Self {
        Self {
            roster: RosterScreen::new(course.clone()),
            router: Router::new(course),
            summary: None,
            details: None,
            status: None,
            should_quit: false,
        }
    }

    /// Initial work: load the roster.
    pub fn start(&mut self) -> Vec<Effect> {
        self.roster.on_enter()
    }

    pub fn router(&self) -> &Router {
        &self.router
    }

    pub fn roster(&self) -> &RosterScreen {
        &self.roster
    }

    pub fn summary(&self) -> Option<&LabSummaryScreen> {
        self.summary.as_ref()
    }

    pub fn details(&self) -> Option<&LabDetailsScreen> {
        self.details.as_ref()
    }

    pub fn status(&self) -> Option<&StatusMessage> {
        self.status.as_ref()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Vec<Effect> {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return Vec::new();
        }

        let action = match self.router.screen() {
            Screen::Roster => self.roster.handle_key(key),
            Screen::LabSummary { .. } => match self.summary.as_mut() {
                Some(screen) => screen.handle_key(key),
                None => ScreenAction::None,
            },
            Screen::LabDetails { .. } => match self.details.as_mut() {
                Some(screen) => screen.handle_key(key),
                None => ScreenAction::None,
            },
        };

        self.apply(action)
    }

    pub fn handle_event(&mut self, event: AppEvent) -> Vec<Effect> {
        match event {
            AppEvent::RosterLoaded { ticket, result } => {
                let applied = self.roster.on_loaded(ticket, result);
                self.report(applied, "learners");
                Vec::new()
            }
            AppEvent::LabsLoaded { ticket, result } => {
                if let Some(screen) = self.summary.as_mut() {
                    let applied = screen.on_loaded(ticket, result);
                    self.report(applied, "labs");
                }
                Vec::new()
            }
            AppEvent::DetailsLoaded { seq, result } => {
                if let Some(screen) = self.details.as_mut() {
                    screen.on_loaded(seq, result);
                }
                Vec::new()
            }
            AppEvent::DashboardAvailability(visible) => {
                self.roster.on_dashboard_available(visible);
                Vec::new()
            }
            AppEvent::DashboardLaunched(outcome) => {
                self.roster.on_launch_finished(outcome).into_iter().collect()
            }
            AppEvent::UrlOpened { url, error } => {
                self.status = Some(match error {
                    None => StatusMessage {
                        level: StatusLevel::Success,
                        text: format!("Opened {url}"),
                    },
                    Some(e) => StatusMessage {
                        level: StatusLevel::Warning,
                        text: format!("Could not open a browser ({e}); dashboard URL: {url}"),
                    },
                });
                Vec::new()
            }
        }
    }

    fn apply(&mut self, action: ScreenAction) -> Vec<Effect> {
        match action {
            ScreenAction::None => Vec::new(),
            ScreenAction::Run(effect) => vec![effect],
            ScreenAction::Quit => {
                self.should_quit = true;
                Vec::new()
            }
            ScreenAction::Navigate { student, lab } => self.navigate(student, lab),
        }
    }

    /// Forward a transition to the router and bring the matching screen up.
    pub fn navigate(
        &mut self,
        student: Option<SelectedStudent>,
        lab: Option<SelectedLab>,
    ) -> Vec<Effect> {
        self.router.navigate(student, lab);
        self.sync_screens()
    }

    /// Enter a route path directly. Without matching hand-off state this
    /// lands on the roster.
    pub fn open_route(&mut self, path: &str) -> Vec<Effect> {
        let screen = self.router.open_path(path).clone();
        if screen == Screen::Roster && path != self.router.route_path() {
            self.status = Some(StatusMessage {
                level: StatusLevel::Warning,
                text: format!("{path} needs a learner selected first"),
            });
            return Vec::new();
        }
        self.sync_screens()
    }

    fn sync_screens(&mut self) -> Vec<Effect> {
        self.status = None;
        let screen = self.router.screen().clone();
        debug!(route = %self.router.route_path(), "screen changed");

        match screen {
            Screen::Roster => {
                self.summary = None;
                self.details = None;
                vec![self.roster.fetch_current()]
            }
            Screen::LabSummary { student } => {
                self.details = None;
                match self.summary.as_mut() {
                    // Back from details: keep the page, refresh it.
                    Some(summary) if summary.student() == &student => {
                        vec![summary.fetch_current()]
                    }
                    _ => {
                        let mut summary = LabSummaryScreen::new(student);
                        let effects = summary.on_enter();
                        self.summary = Some(summary);
                        effects
                    }
                }
            }
            Screen::LabDetails { lab, student } => {
                let mut details = LabDetailsScreen::new(lab, student);
                let effects = details.on_enter();
                self.details = Some(details);
                effects
            }
        }
    }

    fn report(&mut self, applied: Applied, noun: &str) {
        self.status = match applied {
            Applied::Loaded { rows } => Some(StatusMessage {
                level: StatusLevel::Info,
                text: format!("Loaded {rows} {noun}"),
            }),
            Applied::Failed { message } => Some(StatusMessage {
                level: StatusLevel::Error,
                text: message,
            }),
            Applied::Stale => return,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::screens::lab_details::DetailsState;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn roster_page() -> PageEnvelope<RosterEntry> {
        PageEnvelope {
            results: vec![RosterEntry {
                display_name: "ada".to_string(),
                email: "ada@example.com".to_string(),
                anonymous_id: "anon-1".to_string(),
            }],
            count: 1,
            next: None,
            prev: None,
        }
    }

    fn labs_page() -> PageEnvelope<RawLabInstance> {
        PageEnvelope {
            results: vec![RawLabInstance {
                lab_profile_name: "Routing".to_string(),
                lab_instance_id: "11".to_string(),
                ..RawLabInstance::default()
            }],
            count: 1,
            next: None,
            prev: None,
        }
    }

    fn started_app() -> App {
        let mut app = App::new(CourseKey::parse("course-v1:Org+CS101+2024").unwrap());
        let effects = app.start();
        let Some(Effect::FetchRoster { ticket, .. }) = effects.first().cloned() else {
            panic!("expected roster fetch");
        };
        app.handle_event(AppEvent::RosterLoaded {
            ticket,
            result: Ok(roster_page()),
        });
        app
    }

    #[test]
    fn test_drill_down_and_back() {
        let mut app = started_app();

        let effects = app.handle_key(key(KeyCode::Enter));
        let Some(Effect::FetchLabs { ticket, user_id }) = effects.first().cloned() else {
            panic!("expected lab fetch, got {effects:?}");
        };
        assert_eq!(user_id, "anon-1");
        assert!(matches!(app.router().screen(), Screen::LabSummary { .. }));

        app.handle_event(AppEvent::LabsLoaded {
            ticket,
            result: Ok(labs_page()),
        });
        let effects = app.handle_key(key(KeyCode::Enter));
        assert!(matches!(
            effects.first(),
            Some(Effect::FetchDetails { lab_instance_id, .. }) if lab_instance_id == "11"
        ));
        assert_eq!(app.router().selected_lab().map(|l| l.owner_user_id.as_str()), Some("anon-1"));

        // Breadcrumb back to the summary keeps the summary screen.
        let effects = app.handle_key(key(KeyCode::Char('b')));
        assert!(matches!(effects.first(), Some(Effect::FetchLabs { .. })));
        assert!(app.details().is_none());
        assert_eq!(app.summary().map(|s| s.table().rows().len()), Some(1));

        let effects = app.handle_key(key(KeyCode::Esc));
        assert!(matches!(effects.first(), Some(Effect::FetchRoster { .. })));
        assert_eq!(app.router().screen(), &Screen::Roster);
        assert!(app.summary().is_none());
        assert!(app.router().selected_student().is_none());
    }

    #[test]
    fn test_stale_roster_response_is_ignored() {
        let mut app = App::new(CourseKey::parse("course-v1:Org+CS101+2024").unwrap());
        let Some(Effect::FetchRoster { ticket: first, .. }) = app.start().first().cloned() else {
            panic!("expected roster fetch");
        };
        let Some(Effect::FetchRoster { ticket: second, .. }) =
            app.handle_key(key(KeyCode::Char('r'))).first().cloned()
        else {
            panic!("expected roster refetch");
        };

        app.handle_event(AppEvent::RosterLoaded {
            ticket: second,
            result: Ok(roster_page()),
        });
        app.handle_event(AppEvent::RosterLoaded {
            ticket: first,
            result: Ok(PageEnvelope {
                results: Vec::new(),
                count: 0,
                next: None,
                prev: None,
            }),
        });

        assert_eq!(app.roster().table().rows().len(), 1);
    }

    fn student(anonymous_user_id: &str, username: &str) -> SelectedStudent {
        SelectedStudent {
            anonymous_user_id: anonymous_user_id.to_string(),
            username: username.to_string(),
            course_id: CourseKey::parse("course-v1:Org+CS101+2024").unwrap(),
        }
    }

    fn lab(lab_instance_id: &str, owner_user_id: &str) -> SelectedLab {
        SelectedLab {
            lab_instance_id: lab_instance_id.to_string(),
            lab_profile_name: format!("Lab {lab_instance_id}"),
            owner_user_id: owner_user_id.to_string(),
        }
    }

    #[test]
    fn test_labs_for_previous_learner_are_ignored() {
        let mut app = started_app();

        let effects = app.navigate(Some(student("anon-1", "ada")), None);
        let Some(Effect::FetchLabs { ticket: for_ada, .. }) = effects.first().cloned() else {
            panic!("expected lab fetch, got {effects:?}");
        };
        app.navigate(None, None);
        let effects = app.navigate(Some(student("anon-2", "grace")), None);
        assert!(matches!(
            effects.first(),
            Some(Effect::FetchLabs { user_id, .. }) if user_id == "anon-2"
        ));

        app.handle_event(AppEvent::LabsLoaded {
            ticket: for_ada,
            result: Ok(labs_page()),
        });

        let summary = app.summary().unwrap();
        assert_eq!(summary.student().anonymous_user_id, "anon-2");
        assert!(summary.table().rows().is_empty());
        assert!(summary.table().is_loading());
        assert!(app.status().is_none());
    }

    #[test]
    fn test_details_for_previous_lab_are_ignored() {
        let mut app = started_app();
        let ada = student("anon-1", "ada");
        app.navigate(Some(ada.clone()), None);

        let effects = app.navigate(Some(ada.clone()), Some(lab("100", "anon-1")));
        let Some(Effect::FetchDetails { seq: for_first, .. }) = effects.first().cloned() else {
            panic!("expected details fetch, got {effects:?}");
        };
        app.navigate(Some(ada.clone()), None);
        let effects = app.navigate(Some(ada), Some(lab("200", "anon-1")));
        assert!(matches!(
            effects.first(),
            Some(Effect::FetchDetails { lab_instance_id, .. }) if lab_instance_id == "200"
        ));

        app.handle_event(AppEvent::DetailsLoaded {
            seq: for_first,
            result: Ok(LabDetails::from_response(
                serde_json::json!({"LabProfileName": "Lab 100"}),
            )),
        });

        let details = app.details().unwrap();
        assert_eq!(details.lab().lab_instance_id, "200");
        assert_eq!(details.state(), &DetailsState::Loading);
    }

    #[test]
    fn test_deep_link_without_selection_stays_on_roster() {
        let mut app = started_app();
        let effects = app.open_route("/courses/course-v1:Org+CS101+2024/lab-summary/anon-1");

        assert!(effects.is_empty());
        assert_eq!(app.router().screen(), &Screen::Roster);
        assert_eq!(app.status().map(|s| s.level), Some(StatusLevel::Warning));
    }

    #[test]
    fn test_ctrl_c_quits_from_any_screen() {
        let mut app = started_app();
        app.handle_key(key(KeyCode::Enter));
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit());
    }

    #[test]
    fn test_launch_result_opens_url() {
        let mut app = started_app();
        let effects = app.handle_event(AppEvent::DashboardLaunched(Some(LaunchOutcome::Ready {
            url: "https://dash.example".to_string(),
        })));
        assert_eq!(effects, vec![Effect::OpenUrl("https://dash.example".to_string())]);

        app.handle_event(AppEvent::UrlOpened {
            url: "https://dash.example".to_string(),
            error: Some("no opener".to_string()),
        });
        assert_eq!(app.status().map(|s| s.level), Some(StatusLevel::Warning));
    }
}
