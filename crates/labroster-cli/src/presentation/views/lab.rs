use std::fmt;

use crate::presentation::formatters::render_table;
use crate::presentation::view_models::{LAB_COLUMNS, LAB_EMPTY_MESSAGE, LabListViewModel};

use super::{CsvRows, CsvTable, MAX_CELL, write_page_footer};

impl fmt::Display for LabListViewModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Labs for {}", self.student)?;
        writeln!(f)?;

        if let Some(error) = &self.error {
            return writeln!(f, "Error: {error}");
        }

        if self.entries.is_empty() {
            writeln!(f, "{LAB_EMPTY_MESSAGE}")?;
        } else {
            let mut headers = vec!["ID"];
            headers.extend(LAB_COLUMNS);
            let rows: Vec<Vec<String>> = self
                .entries
                .iter()
                .map(|row| {
                    let mut cells = vec![row.lab_instance_id.clone()];
                    cells.extend(row.cells());
                    cells
                })
                .collect();
            write!(f, "{}", render_table(&headers, &rows, MAX_CELL))?;
        }

        write_page_footer(f, &self.page)
    }
}

impl CsvTable for LabListViewModel {
    fn csv_rows(&self) -> Option<CsvRows> {
        let headers = [
            "lab_instance_id",
            "lab_name",
            "launches",
            "score",
            "percentage",
            "passed",
            "start_time",
            "end_time",
        ];
        Some(CsvRows {
            headers: headers.iter().map(|h| h.to_string()).collect(),
            rows: self
                .entries
                .iter()
                .map(|row| {
                    let mut cells = vec![row.lab_instance_id.clone()];
                    cells.extend(row.cells());
                    cells
                })
                .collect(),
        })
    }
}
