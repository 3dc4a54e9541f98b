use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::filtering::PageParams;

/// Query parameters for list and lookup-by-foreign-key endpoints.
pub type ListQuery = PageParams;

/// Query parameters for search endpoints.
///
/// `query` is matched case-insensitively as a substring of the entity's
/// searchable columns. It must not be empty.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchQuery {
    /// Text to look for
    #[serde(default)]
    #[param(example = "tolkien")]
    pub query: String,
    /// 1-based page number (default 1)
    pub page: Option<u64>,
    /// Page size between 1 and 100 (default 10)
    pub limit: Option<u64>,
}

impl SearchQuery {
    #[must_use]
    pub const fn page_params(&self) -> PageParams {
        PageParams {
            page: self.page,
            limit: self.limit,
        }
    }
}

/// Result of a delete: the removed identifier and the number of rows removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DeleteResult {
    pub id: String,
    pub changes: u64,
}
