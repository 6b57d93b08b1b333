//! Bottom bar: last status message on the left, key hints on the right.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::presentation::view_models::StatusBarViewModel;

use super::status_level_to_color;

pub struct StatusBarView<'a> {
    model: &'a StatusBarViewModel,
}

impl<'a> StatusBarView<'a> {
    pub fn new(model: &'a StatusBarViewModel) -> Self {
        Self { model }
    }
}

impl<'a> Widget for StatusBarView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let color = status_level_to_color(self.model.level);

        let block = Block::default().borders(Borders::ALL);
        let inner = block.inner(area);
        block.render(area, buf);

        let chunks =
            Layout::horizontal([Constraint::Percentage(45), Constraint::Percentage(55)]).split(inner);

        Paragraph::new(Span::styled(
            self.model.message.as_str(),
            Style::default().fg(color),
        ))
        .render(chunks[0], buf);

        let mut help = Vec::new();
        for (key, action) in &self.model.keys {
            help.push(Span::styled(
                format!("[{key}]"),
                Style::default().fg(Color::Yellow),
            ));
            help.push(Span::raw(format!("{action} ")));
        }
        Paragraph::new(Line::from(help))
            .right_aligned()
            .render(chunks[1], buf);
    }
}
