pub mod common;
pub mod config;
pub mod dashboard;
pub mod details;
pub mod lab;
pub mod result;
pub mod roster;
pub mod tui;

pub use common::{Guidance, PageViewModel, StatusBadge, StatusLevel};
pub use config::{ConfigInitViewModel, ConfigViewModel};
pub use dashboard::{DashboardLaunchViewModel, DashboardStatusViewModel};
pub use details::{DetailsCardViewModel, DetailsContent, GaugeViewModel, LabDetailsViewModel};
pub use lab::{LAB_COLUMNS, LAB_EMPTY_MESSAGE, LabListViewModel, LabRowViewModel};
pub use result::CommandResultViewModel;
pub use roster::{
    DashboardPanelViewModel, FilterBarViewModel, ROSTER_COLUMNS, ROSTER_EMPTY_MESSAGE,
    RosterListViewModel, RosterRowViewModel,
};
pub use tui::{
    BreadcrumbViewModel, ScreenBodyViewModel, StatusBarViewModel, TableViewModel,
    TuiScreenViewModel,
};
