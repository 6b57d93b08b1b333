//! Terminal event loop for the interactive browser.
//!
//! The renderer owns the terminal and nothing else. Application state sits
//! behind [`TuiController`]: the loop forwards key presses to it, lets it
//! drain finished background work on every tick, and draws whatever screen
//! view model it reports.

use std::io;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEvent, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Layout, Rect},
};

use crate::presentation::view_models::{ScreenBodyViewModel, TuiScreenViewModel};
use crate::presentation::views::tui::{
    BreadcrumbView, DashboardPanelView, DetailsView, FilterBarView, StatusBarView, TableView,
};

const POLL_INTERVAL: Duration = Duration::from_millis(100);

pub trait TuiController {
    fn on_key(&mut self, key: KeyEvent);

    /// Called once per loop iteration, after input handling.
    fn on_tick(&mut self);

    fn screen(&self) -> TuiScreenViewModel;

    fn should_quit(&self) -> bool;
}

pub struct TuiRenderer {
    interrupted: Arc<AtomicBool>,
}

impl TuiRenderer {
    /// `interrupted` is raised from outside the loop (signal handler).
    pub fn new(interrupted: Arc<AtomicBool>) -> Self {
        Self { interrupted }
    }

    pub fn run<C: TuiController>(self, controller: &mut C) -> Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let result = self.event_loop(&mut terminal, controller);

        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    fn event_loop<C: TuiController>(
        &self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
        controller: &mut C,
    ) -> Result<()> {
        loop {
            let screen = controller.screen();
            terminal.draw(|f| render(f, &screen))?;

            if event::poll(POLL_INTERVAL)? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => controller.on_key(key),
                    // Next iteration redraws at the new size.
                    Event::Resize(_, _) => {}
                    _ => {}
                }
            }

            controller.on_tick();

            if controller.should_quit() || self.interrupted.load(Ordering::SeqCst) {
                break;
            }
        }
        Ok(())
    }
}

fn render(f: &mut Frame, screen: &TuiScreenViewModel) {
    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(5),
        Constraint::Length(3),
    ])
    .split(f.area());

    f.render_widget(BreadcrumbView::new(&screen.breadcrumb), chunks[0]);
    render_body(f, &screen.body, chunks[1]);
    f.render_widget(StatusBarView::new(&screen.status_bar), chunks[2]);
}

fn render_body(f: &mut Frame, body: &ScreenBodyViewModel, area: Rect) {
    match body {
        ScreenBodyViewModel::Roster {
            dashboard,
            filter,
            table,
        } => {
            let chunks = Layout::vertical([
                Constraint::Length(2),
                Constraint::Length(3),
                Constraint::Min(3),
            ])
            .split(area);
            f.render_widget(DashboardPanelView::new(dashboard), chunks[0]);
            f.render_widget(FilterBarView::new(filter), chunks[1]);
            f.render_widget(TableView::new(table, "Learners"), chunks[2]);
        }
        ScreenBodyViewModel::LabSummary { title, table } => {
            f.render_widget(TableView::new(table, title), area);
        }
        ScreenBodyViewModel::LabDetails {
            details,
            show_json,
            json_scroll,
        } => {
            f.render_widget(DetailsView::new(details, *show_json, *json_scroll), area);
        }
    }
}
