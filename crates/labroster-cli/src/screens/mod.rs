//! Screen controllers.
//!
//! Each screen owns its paged data, reacts to key presses and fetch results,
//! and asks for work to be done by returning [`Effect`]s. Transitions go
//! through [`ScreenAction::Navigate`], which the app forwards to the router.

pub mod lab_details;
pub mod lab_summary;
pub mod roster;

pub use lab_details::LabDetailsScreen;
pub use lab_summary::LabSummaryScreen;
pub use roster::{DashboardPanel, RosterFocus, RosterScreen};

use labroster_client::RequestTicket;
use labroster_types::{Filter, SelectedLab, SelectedStudent};

/// Asynchronous work requested by a screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    FetchRoster {
        ticket: RequestTicket,
        filter: Filter,
    },
    FetchLabs {
        ticket: RequestTicket,
        user_id: String,
    },
    FetchDetails {
        seq: u64,
        lab_instance_id: String,
    },
    CheckDashboard,
    LaunchDashboard,
    OpenUrl(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenAction {
    None,
    Run(Effect),
    Navigate {
        student: Option<SelectedStudent>,
        lab: Option<SelectedLab>,
    },
    Quit,
}

/// Move a row cursor within `len` rows.
pub(crate) fn move_cursor(cursor: usize, delta: isize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    cursor.saturating_add_signed(delta).min(len - 1)
}
