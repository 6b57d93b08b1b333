use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::presentation::view_models::DashboardPanelViewModel;

/// Roster header: page title and, when the course has one, the dashboard
/// launcher.
pub struct DashboardPanelView<'a> {
    model: &'a DashboardPanelViewModel,
}

impl<'a> DashboardPanelView<'a> {
    pub fn new(model: &'a DashboardPanelViewModel) -> Self {
        Self { model }
    }
}

impl<'a> Widget for DashboardPanelView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = vec![Span::styled(
            self.model.title.as_str(),
            Style::default().add_modifier(Modifier::BOLD),
        )];

        if self.model.visible {
            spans.push(Span::raw("   "));
            if self.model.launching {
                spans.push(Span::styled(
                    "Launching dashboard...",
                    Style::default().fg(Color::Yellow),
                ));
            } else {
                spans.push(Span::styled("[d]", Style::default().fg(Color::Yellow)));
                spans.push(Span::raw(" Launch dashboard"));
            }
        }

        let mut lines = vec![Line::from(spans)];
        if let Some(error) = &self.model.error {
            lines.push(Line::from(Span::styled(
                error.as_str(),
                Style::default().fg(Color::Red),
            )));
        } else if let Some(url) = &self.model.last_url {
            lines.push(Line::from(Span::styled(
                url.as_str(),
                Style::default().add_modifier(Modifier::DIM),
            )));
        }

        Paragraph::new(lines).render(area, buf);
    }
}
