use std::fmt;

use crate::presentation::view_models::{DashboardLaunchViewModel, DashboardStatusViewModel};

use super::CsvTable;

impl fmt::Display for DashboardStatusViewModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Course:    {}", self.course)?;
        writeln!(
            f,
            "Dashboard: {}",
            if self.available { "available" } else { "not available" }
        )
    }
}

impl CsvTable for DashboardStatusViewModel {}

impl fmt::Display for DashboardLaunchViewModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Course: {}", self.course)?;
        if let Some(url) = &self.url {
            writeln!(f, "URL:    {url}")?;
        }
        Ok(())
    }
}

impl CsvTable for DashboardLaunchViewModel {}
