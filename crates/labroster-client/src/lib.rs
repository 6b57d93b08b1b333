//! labroster-client: backend access for the labroster tools.
//!
//! # Overview
//!
//! The roster and lab screens read from three backends:
//! - the LMS (course enrollments, instructor dashboard launch),
//! - the course operations v2 API (class students),
//! - the lab provider (lab-instance search and details).
//!
//! [`LabApi`] is the seam the UI depends on and [`HttpLabApi`] its reqwest
//! implementation. [`PagedView`] holds one paged table and drops responses
//! that arrive after a newer request was issued. [`Debounced`] and
//! [`CooldownGate`] throttle user-triggered actions such as
//! [`DashboardLauncher::launch`].
//!
//! # Quickstart
//!
//! ```no_run
//! use labroster_client::{ClientConfig, Endpoints, HttpLabApi, LabApi, PagedView};
//! use labroster_types::{CourseKey, Filter, RosterEntry};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let api = HttpLabApi::new(ClientConfig::new(Endpoints::single_host("http://localhost:18000")))?;
//! let course = CourseKey::parse("course-v1:Org+CS101+2024")?;
//! let filter = Filter::none();
//!
//! let mut roster: PagedView<RosterEntry> = PagedView::new();
//! roster
//!     .fetch_page(1, |page| api.roster_page(&course, page, &filter), |e| e)
//!     .await;
//! for entry in roster.rows() {
//!     println!("{} <{}>", entry.display_name, entry.email);
//! }
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod config;
pub mod dashboard;
pub mod debounce;
pub mod error;
pub mod http;
pub mod paged;

pub use api::{DashboardLaunch, LabApi};
pub use config::{ClientConfig, DEFAULT_TIMEOUT, Endpoints};
pub use dashboard::{DashboardLauncher, LaunchOutcome};
pub use debounce::{CooldownGate, DEFAULT_COOLDOWN, Debounced, UiEvent};
pub use error::{Error, Result};
pub use http::HttpLabApi;
pub use paged::{
    Applied, DEFAULT_ERROR_MESSAGE, PagedView, RequestTicket, filter_error_message,
    next_request_seq,
};

// Re-export domain types for convenience
pub use labroster_types as types;
