use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use labroster_types::{
    CourseKey, Filter, LabDetails, PageEnvelope, RawLabInstance, RosterEntry,
};

use crate::error::Result;

/// Response of the instructor dashboard launch endpoint: either a URL to
/// open or an error message to show.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DashboardLaunch {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// The backend operations the UI depends on.
///
/// [`HttpLabApi`](crate::HttpLabApi) is the production implementation;
/// tests substitute their own.
#[async_trait]
pub trait LabApi: Send + Sync {
    /// One page of the course roster, optionally filtered server-side.
    async fn roster_page(
        &self,
        course: &CourseKey,
        page: u32,
        filter: &Filter,
    ) -> Result<PageEnvelope<RosterEntry>>;

    /// One page of a learner's lab instances.
    async fn lab_page(&self, user_id: &str, page: u32) -> Result<PageEnvelope<RawLabInstance>>;

    /// Full details of a lab instance. `None` when the provider has nothing.
    async fn lab_details(&self, lab_instance_id: &str) -> Result<Option<LabDetails>>;

    async fn launch_dashboard(&self, course: &CourseKey) -> Result<DashboardLaunch>;

    async fn is_ccx_course(&self, course: &CourseKey) -> Result<bool>;
}
