//! SCIM list response envelope.

use serde::{Deserialize, Serialize};

/// Paged list envelope returned by the SCIM collection endpoints.
///
/// The resource array key is capitalized (`Resources`) per the SCIM wire
/// format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListResponse<T> {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub schemas: Vec<String>,

    /// Total matching resources on the server, across all pages.
    #[serde(default)]
    pub total_results: u64,

    /// 1-based index of the first returned resource.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_index: Option<u64>,

    /// Number of resources in this page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items_per_page: Option<u64>,

    /// The resources themselves.
    #[serde(rename = "Resources", default = "Vec::new")]
    pub resources: Vec<T>,
}

impl<T> Default for ListResponse<T> {
    fn default() -> Self {
        Self {
            schemas: Vec::new(),
            total_results: 0,
            start_index: None,
            items_per_page: None,
            resources: Vec::new(),
        }
    }
}
