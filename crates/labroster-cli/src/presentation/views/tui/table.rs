//! Paged data table shared by the roster and lab summary screens.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Cell, Paragraph, Row, StatefulWidget, Table, TableState, Widget},
};

use crate::presentation::view_models::TableViewModel;

pub struct TableView<'a> {
    model: &'a TableViewModel,
    title: &'a str,
}

impl<'a> TableView<'a> {
    pub fn new(model: &'a TableViewModel, title: &'a str) -> Self {
        Self { model, title }
    }

    fn block(&self) -> Block<'a> {
        let page = format!(
            " Page {} of {} ",
            self.model.page.current, self.model.page.count
        );
        Block::default()
            .title(format!(" {} ", self.title))
            .title_bottom(Line::from(page).alignment(Alignment::Right))
            .borders(Borders::ALL)
    }
}

impl<'a> Widget for TableView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = self.block();

        let placeholder = if self.model.loading {
            Some(Paragraph::new("Loading...").style(Style::default().add_modifier(Modifier::DIM)))
        } else if let Some(error) = &self.model.error {
            Some(Paragraph::new(error.as_str()).style(Style::default().fg(Color::Red)))
        } else if self.model.rows.is_empty() {
            Some(Paragraph::new(self.model.empty_message.as_str()))
        } else {
            None
        };

        if let Some(paragraph) = placeholder {
            paragraph
                .alignment(Alignment::Center)
                .block(block)
                .render(area, buf);
            return;
        }

        let header = Row::new(
            self.model
                .columns
                .iter()
                .map(|c| Cell::from(c.as_str())),
        )
        .style(Style::default().add_modifier(Modifier::BOLD));

        let rows = self
            .model
            .rows
            .iter()
            .map(|row| Row::new(row.iter().map(|cell| Cell::from(cell.as_str()))));

        let widths = vec![Constraint::Fill(1); self.model.columns.len().max(1)];
        let table = Table::new(rows, widths)
            .header(header)
            .block(block)
            .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED));

        let mut state = TableState::default().with_selected(self.model.selected);
        StatefulWidget::render(table, area, buf, &mut state);
    }
}
