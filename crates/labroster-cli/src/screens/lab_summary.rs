use crossterm::event::{KeyCode, KeyEvent};

use labroster_client::{Applied, PagedView, RequestTicket, Result};
use labroster_types::{LabSummaryEntry, PageEnvelope, RawLabInstance, SelectedLab, SelectedStudent};

use super::{Effect, ScreenAction, move_cursor};

pub struct LabSummaryScreen {
    student: SelectedStudent,
    table: PagedView<LabSummaryEntry>,
    cursor: usize,
}

impl LabSummaryScreen {
    pub fn new(student: SelectedStudent) -> Self {
        Self {
            student,
            table: PagedView::new(),
            cursor: 0,
        }
    }

    pub fn student(&self) -> &SelectedStudent {
        &self.student
    }

    pub fn table(&self) -> &PagedView<LabSummaryEntry> {
        &self.table
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn on_enter(&mut self) -> Vec<Effect> {
        vec![self.fetch_current()]
    }

    pub fn fetch_current(&mut self) -> Effect {
        Effect::FetchLabs {
            ticket: self.table.begin_current(),
            user_id: self.student.anonymous_user_id.clone(),
        }
    }

    pub fn on_loaded(
        &mut self,
        ticket: RequestTicket,
        result: Result<PageEnvelope<RawLabInstance>>,
    ) -> Applied {
        let applied = self.table.complete(ticket, result, LabSummaryEntry::from_raw);
        self.cursor = move_cursor(self.cursor, 0, self.table.rows().len());
        applied
    }

    pub fn selected_lab(&self) -> Option<SelectedLab> {
        self.table
            .rows()
            .get(self.cursor)
            .map(|entry| SelectedLab::from_entry(entry, &self.student))
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> ScreenAction {
        let rows = self.table.rows().len();
        match key.code {
            KeyCode::Char('q') => ScreenAction::Quit,
            KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('b') => ScreenAction::Navigate {
                student: None,
                lab: None,
            },
            KeyCode::Up | KeyCode::Char('k') => {
                self.cursor = move_cursor(self.cursor, -1, rows);
                ScreenAction::None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.cursor = move_cursor(self.cursor, 1, rows);
                ScreenAction::None
            }
            KeyCode::Left | KeyCode::Char('h') | KeyCode::PageUp => {
                self.page_action(self.table.current_page().saturating_sub(1))
            }
            KeyCode::Right | KeyCode::Char('l') | KeyCode::PageDown => {
                self.page_action(self.table.current_page().saturating_add(1))
            }
            KeyCode::Home => self.page_action(1),
            KeyCode::End => self.page_action(self.table.pagination().page_count()),
            KeyCode::Char('r') => ScreenAction::Run(self.fetch_current()),
            KeyCode::Enter => match self.selected_lab() {
                Some(lab) => ScreenAction::Navigate {
                    student: None,
                    lab: Some(lab),
                },
                None => ScreenAction::None,
            },
            _ => ScreenAction::None,
        }
    }

    fn page_action(&mut self, page: u32) -> ScreenAction {
        if !self.table.select_page(page) {
            return ScreenAction::None;
        }
        self.cursor = 0;
        ScreenAction::Run(self.fetch_current())
    }
}
