//! Lab details card: field list, progress gauges, optional raw JSON pane.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Widget, Wrap},
};

use crate::presentation::formatters::{format_number, format_ratio};
use crate::presentation::view_models::{DetailsCardViewModel, DetailsContent, LabDetailsViewModel};

pub struct DetailsView<'a> {
    model: &'a LabDetailsViewModel,
    show_json: bool,
    json_scroll: u16,
}

impl<'a> DetailsView<'a> {
    pub fn new(model: &'a LabDetailsViewModel, show_json: bool, json_scroll: u16) -> Self {
        Self {
            model,
            show_json,
            json_scroll,
        }
    }

    fn render_card(&self, card: &DetailsCardViewModel, area: Rect, buf: &mut Buffer) {
        let gauge_height = (card.gauges.len() as u16) * 3;
        let json_min = if self.show_json { 3 } else { 0 };
        let rows = Layout::vertical([
            Constraint::Length(card.fields.len() as u16),
            Constraint::Length(gauge_height),
            Constraint::Min(json_min),
        ])
        .split(area);

        let width = card
            .fields
            .iter()
            .map(|(label, _)| label.chars().count())
            .max()
            .unwrap_or(0);
        let lines: Vec<Line> = card
            .fields
            .iter()
            .map(|(label, value)| {
                Line::from(vec![
                    Span::styled(
                        format!("{label:<width$}  "),
                        Style::default().add_modifier(Modifier::DIM),
                    ),
                    Span::raw(value.as_str()),
                ])
            })
            .collect();
        Paragraph::new(lines).render(rows[0], buf);

        let gauge_rows =
            Layout::vertical(vec![Constraint::Length(3); card.gauges.len()]).split(rows[1]);
        for (gauge, slot) in card.gauges.iter().zip(gauge_rows.iter()) {
            let label = format!(
                "{}/{} ({})",
                format_number(gauge.value),
                format_number(gauge.max),
                format_ratio(gauge.ratio)
            );
            Gauge::default()
                .block(
                    Block::default()
                        .title(format!(" {} ", gauge.label))
                        .borders(Borders::ALL),
                )
                .gauge_style(Style::default().fg(Color::Green))
                .ratio(gauge.ratio.clamp(0.0, 1.0))
                .label(label)
                .render(*slot, buf);
        }

        if self.show_json {
            let text = card
                .raw
                .as_ref()
                .and_then(|raw| serde_json::to_string_pretty(raw).ok())
                .unwrap_or_default();
            Paragraph::new(text)
                .block(Block::default().title(" JSON ").borders(Borders::ALL))
                .wrap(Wrap { trim: false })
                .scroll((self.json_scroll, 0))
                .render(rows[2], buf);
        }
    }
}

impl<'a> Widget for DetailsView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(format!(" {} ", self.model.title))
            .borders(Borders::ALL);
        let inner = block.inner(area);
        block.render(area, buf);

        match &self.model.content {
            DetailsContent::Loading => {
                Paragraph::new("Loading...")
                    .style(Style::default().add_modifier(Modifier::DIM))
                    .render(inner, buf);
            }
            DetailsContent::Message { text, is_error } => {
                let style = if *is_error {
                    Style::default().fg(Color::Red)
                } else {
                    Style::default()
                };
                Paragraph::new(text.as_str()).style(style).render(inner, buf);
            }
            DetailsContent::Card(card) => self.render_card(card, inner, buf),
        }
    }
}
