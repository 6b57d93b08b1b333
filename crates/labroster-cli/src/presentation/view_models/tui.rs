use serde::Serialize;

use super::common::{PageViewModel, StatusLevel};
use super::details::LabDetailsViewModel;
use super::roster::{DashboardPanelViewModel, FilterBarViewModel};

#[derive(Debug, Clone, Serialize)]
pub struct TableViewModel {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
    pub selected: Option<usize>,
    pub loading: bool,
    pub empty_message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub page: PageViewModel,
}

#[derive(Debug, Clone, Serialize)]
pub struct BreadcrumbViewModel {
    /// Trail of screen titles; the last one is the active screen.
    pub trail: Vec<String>,
    pub route: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct StatusBarViewModel {
    pub message: String,
    pub level: StatusLevel,
    pub keys: Vec<(String, String)>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "screen", rename_all = "snake_case")]
pub enum ScreenBodyViewModel {
    Roster {
        dashboard: DashboardPanelViewModel,
        filter: FilterBarViewModel,
        table: TableViewModel,
    },
    LabSummary {
        title: String,
        table: TableViewModel,
    },
    LabDetails {
        details: Box<LabDetailsViewModel>,
        show_json: bool,
        json_scroll: u16,
    },
}

#[derive(Debug, Clone, Serialize)]
pub struct TuiScreenViewModel {
    pub breadcrumb: BreadcrumbViewModel,
    pub body: ScreenBodyViewModel,
    pub status_bar: StatusBarViewModel,
}
