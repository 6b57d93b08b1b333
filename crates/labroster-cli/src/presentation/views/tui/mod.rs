//! Ratatui widgets for the interactive browser.
//!
//! Each widget borrows a view model and maps it onto ratatui primitives.
//! Layout decisions live here; wording and numbers come from presenters.

pub mod breadcrumb;
pub mod dashboard_panel;
pub mod details;
pub mod filter_bar;
pub mod status_bar;
pub mod table;

pub use breadcrumb::BreadcrumbView;
pub use dashboard_panel::DashboardPanelView;
pub use details::DetailsView;
pub use filter_bar::FilterBarView;
pub use status_bar::StatusBarView;
pub use table::TableView;

use crate::presentation::view_models::StatusLevel;
use ratatui::style::Color;

pub(crate) fn status_level_to_color(level: StatusLevel) -> Color {
    match level {
        StatusLevel::Success => Color::Green,
        StatusLevel::Info => Color::Cyan,
        StatusLevel::Warning => Color::Yellow,
        StatusLevel::Error => Color::Red,
    }
}
