use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::presentation::view_models::FilterBarViewModel;

/// Search field plus the active filter and its last message.
pub struct FilterBarView<'a> {
    model: &'a FilterBarViewModel,
}

impl<'a> FilterBarView<'a> {
    pub fn new(model: &'a FilterBarViewModel) -> Self {
        Self { model }
    }
}

impl<'a> Widget for FilterBarView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border = if self.model.focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        };
        let block = Block::default()
            .title(format!(" Search by {} ", self.model.field_label))
            .borders(Borders::ALL)
            .border_style(border);
        let inner = block.inner(area);
        block.render(area, buf);

        let chunks =
            Layout::horizontal([Constraint::Percentage(60), Constraint::Percentage(40)]).split(inner);

        let mut input = vec![Span::raw(self.model.value.as_str())];
        if self.model.focused {
            input.push(Span::styled("_", Style::default().add_modifier(Modifier::SLOW_BLINK)));
        }
        Paragraph::new(Line::from(input)).render(chunks[0], buf);

        let right = match (&self.model.message, &self.model.active_filter) {
            (Some(message), _) => Line::from(Span::styled(
                message.as_str(),
                Style::default().fg(Color::Red),
            )),
            (None, Some(active)) => Line::from(vec![
                Span::styled("Filtered: ", Style::default().add_modifier(Modifier::DIM)),
                Span::raw(active.as_str()),
            ]),
            (None, None) => Line::default(),
        };
        Paragraph::new(right).render(chunks[1], buf);
    }
}
