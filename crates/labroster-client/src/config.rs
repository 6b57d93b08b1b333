//! Backend endpoints and client settings.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use url::Url;

use crate::error::{Error, Result};

const ENROLLMENTS_PATH: &str = "pearson-core/api/v1/course-enrollments";
const STUDENTS_PATH: &str = "students/";
const LAB_SEARCH_PATH: &str = "events/api/v1/labinstancesearch/";
const LAB_DETAILS_PATH: &str = "events/api/v1/details/";
const COURSE_TAB_PATH: &str = "skillable_plugin/course-tab/api/v1";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Base URLs of the three backends.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Endpoints {
    /// LMS root, hosting enrollments and the course-tab plugin.
    #[serde(default)]
    pub lms_base_url: String,

    /// Lab provider root, hosting lab-instance search and details.
    #[serde(default)]
    pub lab_provider_base_url: String,

    /// Course operations v2 root, hosting the class students API.
    #[serde(default)]
    pub course_operations_base_url: String,
}

impl Endpoints {
    pub fn new(
        lms_base_url: impl Into<String>,
        lab_provider_base_url: impl Into<String>,
        course_operations_base_url: impl Into<String>,
    ) -> Self {
        Self {
            lms_base_url: lms_base_url.into(),
            lab_provider_base_url: lab_provider_base_url.into(),
            course_operations_base_url: course_operations_base_url.into(),
        }
    }

    /// Every endpoint pointing at one server. Handy for local stacks and tests.
    pub fn single_host(base_url: impl Into<String>) -> Self {
        let base = base_url.into();
        Self::new(base.clone(), base.clone(), base)
    }

    /// Check that every base URL is present and parses.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("lms_base_url", &self.lms_base_url),
            ("lab_provider_base_url", &self.lab_provider_base_url),
            ("course_operations_base_url", &self.course_operations_base_url),
        ] {
            if value.trim().is_empty() {
                return Err(Error::config(format!("{name} is not set")));
            }
            Url::parse(value)
                .map_err(|e| Error::config(format!("{name} is not a valid URL ({e}): {value}")))?;
        }
        Ok(())
    }

    pub fn enrollments_url(&self, page: u32) -> Result<Url> {
        let mut url = join(&self.lms_base_url, ENROLLMENTS_PATH)?;
        url.query_pairs_mut().append_pair("page", &page.to_string());
        Ok(url)
    }

    pub fn students_url(&self) -> Result<Url> {
        join(&self.course_operations_base_url, STUDENTS_PATH)
    }

    pub fn lab_search_url(&self, page: u32) -> Result<Url> {
        let mut url = join(&self.lab_provider_base_url, LAB_SEARCH_PATH)?;
        url.query_pairs_mut().append_pair("page", &page.to_string());
        Ok(url)
    }

    pub fn lab_details_url(&self) -> Result<Url> {
        join(&self.lab_provider_base_url, LAB_DETAILS_PATH)
    }

    pub fn dashboard_launch_url(&self) -> Result<Url> {
        join(
            &self.lms_base_url,
            &format!("{COURSE_TAB_PATH}/instructor-dashboard-launch/"),
        )
    }

    pub fn ccx_check_url(&self) -> Result<Url> {
        join(&self.lms_base_url, &format!("{COURSE_TAB_PATH}/is-ccx-course/"))
    }
}

/// Settings for [`HttpLabApi`](crate::HttpLabApi).
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub endpoints: Endpoints,
    /// Sent as `Authorization: Bearer <token>` when present.
    pub auth_token: Option<String>,
    pub timeout: Duration,
}

impl ClientConfig {
    pub fn new(endpoints: Endpoints) -> Self {
        Self {
            endpoints,
            auth_token: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_auth_token(mut self, token: Option<String>) -> Self {
        self.auth_token = token.filter(|t| !t.trim().is_empty());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

// Base URLs may carry a path prefix, so suffixes are appended rather than
// resolved with `Url::join` (which would drop the last segment).
fn join(base: &str, suffix: &str) -> Result<Url> {
    let base = base.trim().trim_end_matches('/');
    if base.is_empty() {
        return Err(Error::config(format!("no base URL configured for /{suffix}")));
    }
    Ok(Url::parse(&format!("{base}/{suffix}"))?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urls_keep_base_path_prefix() {
        let endpoints = Endpoints::new(
            "https://lms.example.com/",
            "https://labs.example.com/provider",
            "https://ops.example.com/api/v2",
        );

        assert_eq!(
            endpoints.enrollments_url(3).unwrap().as_str(),
            "https://lms.example.com/pearson-core/api/v1/course-enrollments?page=3"
        );
        assert_eq!(
            endpoints.lab_search_url(1).unwrap().as_str(),
            "https://labs.example.com/provider/events/api/v1/labinstancesearch/?page=1"
        );
        assert_eq!(
            endpoints.students_url().unwrap().as_str(),
            "https://ops.example.com/api/v2/students/"
        );
        assert_eq!(
            endpoints.ccx_check_url().unwrap().as_str(),
            "https://lms.example.com/skillable_plugin/course-tab/api/v1/is-ccx-course/"
        );
    }

    #[test]
    fn test_validate_reports_missing_url() {
        let endpoints = Endpoints::new("https://lms.example.com", "", "https://ops.example.com");
        let err = endpoints.validate().unwrap_err();
        assert!(err.to_string().contains("lab_provider_base_url"));
    }

    #[test]
    fn test_blank_token_is_ignored() {
        let config = ClientConfig::new(Endpoints::default()).with_auth_token(Some("  ".into()));
        assert!(config.auth_token.is_none());
    }
}
