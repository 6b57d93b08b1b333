//! Console views.
//!
//! Each view model renders itself through `Display` for plain output; list
//! shaped results also expose a [`CsvTable`] for `--format csv`.

pub mod config;
pub mod dashboard;
pub mod details;
pub mod lab;
pub mod roster;
pub mod tui;

/// Header plus rows for CSV output.
pub struct CsvRows {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

pub trait CsvTable {
    /// `None` when the result has no tabular shape.
    fn csv_rows(&self) -> Option<CsvRows> {
        None
    }
}

const MAX_CELL: usize = 48;

fn write_page_footer(
    f: &mut std::fmt::Formatter<'_>,
    page: &crate::presentation::view_models::PageViewModel,
) -> std::fmt::Result {
    writeln!(f)?;
    writeln!(f, "Page {} of {}", page.current, page.count)
}
