use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::info;

use labroster_client::{Applied, LaunchOutcome, PagedView, RequestTicket, Result};
use labroster_types::{CourseKey, Filter, PageEnvelope, RosterEntry, SelectedStudent};

use super::{Effect, ScreenAction, move_cursor};
use crate::filter_form::{FilterForm, FormAction};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RosterFocus {
    Table,
    Filter,
}

/// Instructor dashboard launch control state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DashboardPanel {
    pub visible: bool,
    pub launching: bool,
    pub last_url: Option<String>,
    /// `(course key, message)` of the last failed launch.
    pub error: Option<(String, String)>,
}

pub struct RosterScreen {
    course: CourseKey,
    table: PagedView<RosterEntry>,
    form: FilterForm,
    applied: Filter,
    focus: RosterFocus,
    cursor: usize,
    dashboard: DashboardPanel,
}

impl RosterScreen {
    pub fn new(course: CourseKey) -> Self {
        Self {
            course,
            table: PagedView::new(),
            form: FilterForm::new(),
            applied: Filter::none(),
            focus: RosterFocus::Table,
            cursor: 0,
            dashboard: DashboardPanel::default(),
        }
    }

    pub fn course(&self) -> &CourseKey {
        &self.course
    }

    pub fn table(&self) -> &PagedView<RosterEntry> {
        &self.table
    }

    pub fn form(&self) -> &FilterForm {
        &self.form
    }

    pub fn applied_filter(&self) -> &Filter {
        &self.applied
    }

    pub fn focus(&self) -> RosterFocus {
        self.focus
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn dashboard(&self) -> &DashboardPanel {
        &self.dashboard
    }

    /// Work to do when the screen becomes active.
    pub fn on_enter(&mut self) -> Vec<Effect> {
        vec![self.fetch_current(), Effect::CheckDashboard]
    }

    pub fn fetch_current(&mut self) -> Effect {
        let ticket = self.table.begin_current();
        Effect::FetchRoster {
            ticket,
            filter: self.applied.clone(),
        }
    }

    /// Fetch `page` (clamped) if it differs from the current one.
    pub fn select_page(&mut self, page: u32) -> Option<Effect> {
        self.table.select_page(page).then(|| {
            self.cursor = 0;
            self.fetch_current()
        })
    }

    pub fn apply_filter(&mut self, filter: Filter) -> Effect {
        info!(filter = ?filter.term(), "applying roster filter");
        self.applied = filter;
        self.table.reset_pagination();
        self.cursor = 0;
        self.fetch_current()
    }

    pub fn on_loaded(
        &mut self,
        ticket: RequestTicket,
        result: Result<PageEnvelope<RosterEntry>>,
    ) -> Applied {
        let applied = self.table.complete(ticket, result, |entry| entry);
        self.cursor = move_cursor(self.cursor, 0, self.table.rows().len());
        applied
    }

    pub fn on_dashboard_available(&mut self, visible: bool) {
        self.dashboard.visible = visible;
    }

    pub fn on_launch_finished(&mut self, outcome: Option<LaunchOutcome>) -> Option<Effect> {
        match outcome {
            // Dropped by the cooldown; nothing else will clear the flag.
            None => {
                self.dashboard.launching = false;
                None
            }
            Some(LaunchOutcome::Ready { url }) => {
                self.dashboard.launching = false;
                self.dashboard.last_url = Some(url.clone());
                Some(Effect::OpenUrl(url))
            }
            Some(LaunchOutcome::Failed {
                course_key,
                message,
            }) => {
                self.dashboard.launching = false;
                self.dashboard.error = Some((course_key, message));
                None
            }
        }
    }

    pub fn selected_student(&self) -> Option<SelectedStudent> {
        self.table
            .rows()
            .get(self.cursor)
            .map(|entry| SelectedStudent::from_entry(entry, &self.course))
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> ScreenAction {
        match self.focus {
            RosterFocus::Filter => self.handle_filter_key(key),
            RosterFocus::Table => self.handle_table_key(key),
        }
    }

    fn handle_filter_key(&mut self, key: KeyEvent) -> ScreenAction {
        match key.code {
            KeyCode::Esc => self.focus = RosterFocus::Table,
            KeyCode::Tab => self.form.toggle_field(),
            KeyCode::Backspace => self.form.pop_char(),
            KeyCode::Enter => match self.form.submit() {
                FormAction::Apply(filter) => {
                    self.focus = RosterFocus::Table;
                    return ScreenAction::Run(self.apply_filter(filter));
                }
                FormAction::Rejected => {}
            },
            KeyCode::Char('r') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                return self.reset_filter();
            }
            KeyCode::Char(c) => self.form.push_char(c),
            _ => {}
        }
        ScreenAction::None
    }

    fn handle_table_key(&mut self, key: KeyEvent) -> ScreenAction {
        let rows = self.table.rows().len();
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => ScreenAction::Quit,
            KeyCode::Up | KeyCode::Char('k') => {
                self.cursor = move_cursor(self.cursor, -1, rows);
                ScreenAction::None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.cursor = move_cursor(self.cursor, 1, rows);
                ScreenAction::None
            }
            KeyCode::Left | KeyCode::Char('h') | KeyCode::PageUp => {
                let page = self.table.current_page().saturating_sub(1);
                self.page_action(page)
            }
            KeyCode::Right | KeyCode::Char('l') | KeyCode::PageDown => {
                let page = self.table.current_page().saturating_add(1);
                self.page_action(page)
            }
            KeyCode::Home => self.page_action(1),
            KeyCode::End => self.page_action(self.table.pagination().page_count()),
            KeyCode::Char('/') => {
                self.focus = RosterFocus::Filter;
                ScreenAction::None
            }
            KeyCode::Char('f') => {
                self.form.toggle_field();
                ScreenAction::None
            }
            KeyCode::Char('x') => self.reset_filter(),
            KeyCode::Char('r') => ScreenAction::Run(self.fetch_current()),
            KeyCode::Char('d') if self.dashboard.visible => {
                self.dashboard.launching = true;
                self.dashboard.error = None;
                ScreenAction::Run(Effect::LaunchDashboard)
            }
            KeyCode::Enter => match self.selected_student() {
                Some(student) => ScreenAction::Navigate {
                    student: Some(student),
                    lab: None,
                },
                None => ScreenAction::None,
            },
            _ => ScreenAction::None,
        }
    }

    fn page_action(&mut self, page: u32) -> ScreenAction {
        self.select_page(page)
            .map(ScreenAction::Run)
            .unwrap_or(ScreenAction::None)
    }

    fn reset_filter(&mut self) -> ScreenAction {
        match self.form.reset() {
            FormAction::Apply(filter) => ScreenAction::Run(self.apply_filter(filter)),
            FormAction::Rejected => ScreenAction::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter_form::EMPTY_VALUE_MESSAGE;
    use labroster_types::FilterField;

    fn course() -> CourseKey {
        CourseKey::parse("course-v1:Org+CS101+2024").unwrap()
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn page(names: &[&str], count: u64, next: bool) -> PageEnvelope<RosterEntry> {
        PageEnvelope {
            results: names
                .iter()
                .map(|name| RosterEntry {
                    display_name: name.to_string(),
                    email: format!("{name}@example.com"),
                    anonymous_id: format!("anon-{name}"),
                })
                .collect(),
            count,
            next: next.then(|| "next".to_string()),
            prev: None,
        }
    }

    fn loaded_screen() -> RosterScreen {
        let mut screen = RosterScreen::new(course());
        let effects = screen.on_enter();
        let Effect::FetchRoster { ticket, .. } = effects[0].clone() else {
            panic!("expected roster fetch");
        };
        screen.on_loaded(ticket, Ok(page(&["ada", "grace"], 6, true)));
        screen
    }

    #[test]
    fn test_enter_fetches_roster_and_checks_dashboard() {
        let mut screen = RosterScreen::new(course());
        let effects = screen.on_enter();

        assert!(matches!(
            &effects[0],
            Effect::FetchRoster { filter, .. } if filter.is_empty()
        ));
        assert_eq!(effects[1], Effect::CheckDashboard);
        assert!(screen.table().is_loading());
    }

    #[test]
    fn test_enter_on_row_selects_student() {
        let mut screen = loaded_screen();
        screen.handle_key(key(KeyCode::Down));

        let action = screen.handle_key(key(KeyCode::Enter));
        let ScreenAction::Navigate {
            student: Some(student),
            lab: None,
        } = action
        else {
            panic!("expected navigation, got {action:?}");
        };
        assert_eq!(student.anonymous_user_id, "anon-grace");
        assert_eq!(student.username, "grace");
        assert_eq!(student.course_id, course());
    }

    #[test]
    fn test_empty_filter_submit_does_not_fetch() {
        let mut screen = loaded_screen();
        screen.handle_key(key(KeyCode::Char('/')));

        assert_eq!(screen.handle_key(key(KeyCode::Enter)), ScreenAction::None);
        assert_eq!(screen.form().validation_error(), Some(EMPTY_VALUE_MESSAGE));
        assert_eq!(screen.focus(), RosterFocus::Filter);
    }

    #[test]
    fn test_filter_submit_fetches_page_one_with_filter() {
        let mut screen = loaded_screen();
        screen.handle_key(key(KeyCode::Right));
        assert_eq!(screen.table().current_page(), 2);

        screen.handle_key(key(KeyCode::Char('/')));
        screen.handle_key(key(KeyCode::Tab));
        for c in "ada".chars() {
            screen.handle_key(key(KeyCode::Char(c)));
        }

        let action = screen.handle_key(key(KeyCode::Enter));
        let ScreenAction::Run(Effect::FetchRoster { ticket, filter }) = action else {
            panic!("expected fetch, got {action:?}");
        };
        assert_eq!(filter, Filter::by(FilterField::LearnerEmail, "ada"));
        assert_eq!(ticket.page(), 1);
        assert_eq!(screen.focus(), RosterFocus::Table);
    }

    #[test]
    fn test_reset_fetches_without_filter() {
        let mut screen = loaded_screen();
        screen.apply_filter(Filter::by(FilterField::LearnerName, "ada"));

        let action = screen.handle_key(key(KeyCode::Char('x')));
        assert!(matches!(
            action,
            ScreenAction::Run(Effect::FetchRoster { ref filter, .. }) if filter.is_empty()
        ));
        assert!(screen.applied_filter().is_empty());
    }

    #[test]
    fn test_page_change_keeps_filter() {
        let mut screen = loaded_screen();
        let Effect::FetchRoster { ticket, .. } =
            screen.apply_filter(Filter::by(FilterField::LearnerName, "a"))
        else {
            panic!("expected roster fetch");
        };
        screen.on_loaded(ticket, Ok(page(&["ada", "alan"], 4, true)));

        let action = screen.handle_key(key(KeyCode::Right));
        assert!(matches!(
            action,
            ScreenAction::Run(Effect::FetchRoster { ref filter, ticket }) if !filter.is_empty() && ticket.page() == 2
        ));
    }

    #[test]
    fn test_last_page_does_not_refetch() {
        let mut screen = loaded_screen();
        screen.handle_key(key(KeyCode::End));
        assert_eq!(screen.table().current_page(), 3);
        assert_eq!(screen.handle_key(key(KeyCode::Right)), ScreenAction::None);
    }

    #[test]
    fn test_dashboard_launch_flow() {
        let mut screen = loaded_screen();
        assert_eq!(screen.handle_key(key(KeyCode::Char('d'))), ScreenAction::None);

        screen.on_dashboard_available(true);
        assert_eq!(
            screen.handle_key(key(KeyCode::Char('d'))),
            ScreenAction::Run(Effect::LaunchDashboard)
        );
        assert!(screen.dashboard().launching);

        let effect = screen.on_launch_finished(Some(LaunchOutcome::Failed {
            course_key: course().to_string(),
            message: "Dashboard disabled".to_string(),
        }));
        assert!(effect.is_none());
        assert_eq!(
            screen.dashboard().error,
            Some((course().to_string(), "Dashboard disabled".to_string()))
        );

        let effect = screen.on_launch_finished(Some(LaunchOutcome::Ready {
            url: "https://dash.example".to_string(),
        }));
        assert_eq!(effect, Some(Effect::OpenUrl("https://dash.example".to_string())));
    }

    #[test]
    fn test_launch_dropped_by_cooldown_clears_launching() {
        let mut screen = loaded_screen();
        screen.on_dashboard_available(true);

        screen.handle_key(key(KeyCode::Char('d')));
        screen.on_launch_finished(Some(LaunchOutcome::Ready {
            url: "https://dash.example".to_string(),
        }));

        screen.handle_key(key(KeyCode::Char('d')));
        assert!(screen.dashboard().launching);
        assert_eq!(screen.on_launch_finished(None), None);
        assert!(!screen.dashboard().launching);
        assert_eq!(screen.dashboard().last_url.as_deref(), Some("https://dash.example"));
    }
}
