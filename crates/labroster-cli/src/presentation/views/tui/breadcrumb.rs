use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::presentation::view_models::BreadcrumbViewModel;

pub struct BreadcrumbView<'a> {
    model: &'a BreadcrumbViewModel,
}

impl<'a> BreadcrumbView<'a> {
    pub fn new(model: &'a BreadcrumbViewModel) -> Self {
        Self { model }
    }
}

impl<'a> Widget for BreadcrumbView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chunks =
            Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)]).split(area);

        let last = self.model.trail.len().saturating_sub(1);
        let mut spans = Vec::new();
        for (i, crumb) in self.model.trail.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" › "));
            }
            let style = if i == last {
                Style::default().add_modifier(Modifier::BOLD)
            } else {
                Style::default().add_modifier(Modifier::DIM)
            };
            spans.push(Span::styled(crumb.as_str(), style));
        }
        Paragraph::new(Line::from(spans)).render(chunks[0], buf);

        Paragraph::new(Line::from(Span::styled(
            self.model.route.as_str(),
            Style::default().add_modifier(Modifier::DIM),
        )))
        .right_aligned()
        .render(chunks[1], buf);
    }
}
