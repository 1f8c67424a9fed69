//! SCIM ServicePrincipal resource.

use serde::{Deserialize, Serialize};

use super::user::{Entitlement, GroupRef};

/// Automation identity registered in the workspace.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServicePrincipal {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub schemas: Vec<String>,

    /// Workspace-assigned identifier.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,

    /// Cloud-provider application id (a UUID for Azure service principals).
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub application_id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub groups: Vec<GroupRef>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub entitlements: Vec<Entitlement>,

    #[serde(default)]
    pub active: bool,
}

/// Body for creating a service principal.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServicePrincipalCreateRequest {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub schemas: Vec<String>,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub application_id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub entitlements: Vec<Entitlement>,
}
