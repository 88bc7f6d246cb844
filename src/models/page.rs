use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::search::RepositorySummary;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PageEnvelope {
    pub total_pages: u64,
    /// Requested page, echoed even past the last page
    pub current_page: u32,
    pub total: u64,
    /// Repositories as returned by GitHub
    #[schema(value_type = Vec<Object>)]
    pub repositories: Vec<RepositorySummary>,
}

/// Number of pages needed for `total` items at `limit` per page.
pub fn total_pages(total: u64, limit: u32) -> u64 {
    total.div_ceil(u64::from(limit.max(1)))
}
