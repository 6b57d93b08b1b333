pub mod config;
pub mod dashboard;
pub mod details;
pub mod lab;
pub mod roster;
pub mod screen;

pub use config::{present_config, present_config_init};
pub use dashboard::{present_dashboard_launch, present_dashboard_status};
pub use details::present_lab_details;
pub use lab::present_lab_list;
pub use roster::present_roster_list;
pub use screen::present_screen;
