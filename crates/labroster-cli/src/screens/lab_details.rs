use crossterm::event::{KeyCode, KeyEvent};
use tracing::error;

use labroster_client::{Result, next_request_seq};
use labroster_types::{LabDetails, SelectedLab, SelectedStudent};

use super::{Effect, ScreenAction};

pub const FETCH_ERROR_MESSAGE: &str = "An error occurred while fetching lab details.";

pub fn no_details_message(lab_profile_name: &str) -> String {
    format!("No details found for this lab {lab_profile_name}")
}

#[derive(Debug, Clone, PartialEq)]
pub enum DetailsState {
    Loading,
    Loaded(LabDetails),
    Empty(String),
    Failed(String),
}

pub struct LabDetailsScreen {
    lab: SelectedLab,
    student: SelectedStudent,
    state: DetailsState,
    issued: u64,
    show_json: bool,
    json_scroll: u16,
}

impl LabDetailsScreen {
    pub fn new(lab: SelectedLab, student: SelectedStudent) -> Self {
        Self {
            lab,
            student,
            state: DetailsState::Loading,
            issued: 0,
            show_json: false,
            json_scroll: 0,
        }
    }

    pub fn lab(&self) -> &SelectedLab {
        &self.lab
    }

    pub fn student(&self) -> &SelectedStudent {
        &self.student
    }

    pub fn state(&self) -> &DetailsState {
        &self.state
    }

    pub fn show_json(&self) -> bool {
        self.show_json
    }

    pub fn json_scroll(&self) -> u16 {
        self.json_scroll
    }

    pub fn on_enter(&mut self) -> Vec<Effect> {
        vec![self.fetch()]
    }

    pub fn fetch(&mut self) -> Effect {
        self.issued = next_request_seq();
        self.state = DetailsState::Loading;
        Effect::FetchDetails {
            seq: self.issued,
            lab_instance_id: self.lab.lab_instance_id.clone(),
        }
    }

    /// Apply a details response. Returns `false` for a stale response,
    /// including one issued by an earlier details screen.
    pub fn on_loaded(&mut self, seq: u64, result: Result<Option<LabDetails>>) -> bool {
        if seq != self.issued {
            return false;
        }

        self.state = match result {
            Ok(Some(details)) => DetailsState::Loaded(details),
            Ok(None) => DetailsState::Empty(no_details_message(&self.lab.lab_profile_name)),
            Err(e) => {
                error!(lab = %self.lab.lab_instance_id, error = %e, "lab details request failed");
                DetailsState::Failed(FETCH_ERROR_MESSAGE.to_string())
            }
        };
        true
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> ScreenAction {
        match key.code {
            KeyCode::Char('q') => ScreenAction::Quit,
            KeyCode::Char('b') | KeyCode::Esc | KeyCode::Backspace => ScreenAction::Navigate {
                student: Some(self.student.clone()),
                lab: None,
            },
            KeyCode::Char('R') => ScreenAction::Navigate {
                student: None,
                lab: None,
            },
            KeyCode::Char('r') => ScreenAction::Run(self.fetch()),
            KeyCode::Char('v') => {
                self.show_json = !self.show_json;
                self.json_scroll = 0;
                ScreenAction::None
            }
            KeyCode::Up | KeyCode::Char('k') if self.show_json => {
                self.json_scroll = self.json_scroll.saturating_sub(1);
                ScreenAction::None
            }
            KeyCode::Down | KeyCode::Char('j') if self.show_json => {
                self.json_scroll = self.json_scroll.saturating_add(1);
                ScreenAction::None
            }
            KeyCode::PageUp if self.show_json => {
                self.json_scroll = self.json_scroll.saturating_sub(10);
                ScreenAction::None
            }
            KeyCode::PageDown if self.show_json => {
                self.json_scroll = self.json_scroll.saturating_add(10);
                ScreenAction::None
            }
            _ => ScreenAction::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use labroster_client::Error;
    use labroster_types::CourseKey;
    use serde_json::json;

    fn screen() -> LabDetailsScreen {
        LabDetailsScreen::new(
            SelectedLab {
                lab_instance_id: "48213".to_string(),
                lab_profile_name: "Routing Basics".to_string(),
                owner_user_id: "anon-1".to_string(),
            },
            SelectedStudent {
                anonymous_user_id: "anon-1".to_string(),
                username: "ada".to_string(),
                course_id: CourseKey::parse("course-v1:Org+CS101+2024").unwrap(),
            },
        )
    }

    fn seq_of(effects: Vec<Effect>) -> u64 {
        match effects.into_iter().next() {
            Some(Effect::FetchDetails { seq, .. }) => seq,
            other => panic!("expected details fetch, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_response_shows_no_details_message() {
        let mut screen = screen();
        let seq = seq_of(screen.on_enter());
        assert!(screen.on_loaded(seq, Ok(None)));
        assert_eq!(
            screen.state(),
            &DetailsState::Empty("No details found for this lab Routing Basics".to_string())
        );
    }

    #[test]
    fn test_failure_shows_fetch_error() {
        let mut screen = screen();
        let seq = seq_of(screen.on_enter());
        screen.on_loaded(seq, Err(Error::config("offline")));
        assert_eq!(
            screen.state(),
            &DetailsState::Failed(FETCH_ERROR_MESSAGE.to_string())
        );
    }

    #[test]
    fn test_stale_response_is_ignored() {
        let mut screen = screen();
        let first = seq_of(screen.on_enter());
        screen.fetch();

        let details = LabDetails::from_response(json!({"State": "Off"}));
        assert!(!screen.on_loaded(first, Ok(details)));
        assert_eq!(screen.state(), &DetailsState::Loading);
    }

    #[test]
    fn test_response_for_previous_screen_is_ignored() {
        let mut previous = screen();
        let old = seq_of(previous.on_enter());

        let mut current = screen();
        current.on_enter();

        let details = LabDetails::from_response(json!({"LabProfileName": "Other lab"}));
        assert!(!current.on_loaded(old, Ok(details)));
        assert_eq!(current.state(), &DetailsState::Loading);
    }

    #[test]
    fn test_breadcrumbs() {
        let mut screen = screen();
        let key = |code| KeyEvent::new(code, KeyModifiers::NONE);

        assert!(matches!(
            screen.handle_key(key(KeyCode::Char('b'))),
            ScreenAction::Navigate { student: Some(_), lab: None }
        ));
        assert_eq!(
            screen.handle_key(key(KeyCode::Char('R'))),
            ScreenAction::Navigate { student: None, lab: None }
        );
    }
}
