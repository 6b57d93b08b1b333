use std::fmt;

use crate::presentation::formatters::render_table;
use crate::presentation::view_models::{ROSTER_COLUMNS, ROSTER_EMPTY_MESSAGE, RosterListViewModel};

use super::{CsvRows, CsvTable, MAX_CELL, write_page_footer};

impl fmt::Display for RosterListViewModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Course: {}", self.course)?;
        if let Some(filter) = &self.filter {
            writeln!(f, "Filter: {filter}")?;
        }
        writeln!(f)?;

        if let Some(error) = &self.error {
            return writeln!(f, "Error: {error}");
        }

        if self.entries.is_empty() {
            writeln!(f, "{ROSTER_EMPTY_MESSAGE}")?;
        } else {
            let rows: Vec<Vec<String>> = self
                .entries
                .iter()
                .map(|e| vec![e.username.clone(), e.email.clone(), e.anonymous_id.clone()])
                .collect();
            let headers = [ROSTER_COLUMNS[0], ROSTER_COLUMNS[1], "Anonymous ID"];
            write!(f, "{}", render_table(&headers, &rows, MAX_CELL))?;
        }

        write_page_footer(f, &self.page)
    }
}

impl CsvTable for RosterListViewModel {
    fn csv_rows(&self) -> Option<CsvRows> {
        Some(CsvRows {
            headers: vec![
                "username".to_string(),
                "email".to_string(),
                "anonymous_id".to_string(),
            ],
            rows: self
                .entries
                .iter()
                .map(|e| vec![e.username.clone(), e.email.clone(), e.anonymous_id.clone()])
                .collect(),
        })
    }
}
