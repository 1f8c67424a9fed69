//! SCIM Group resource.

use serde::{Deserialize, Serialize};

use super::user::Entitlement;

/// Workspace group (SCIM core Group resource).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    /// SCIM schema URNs for this resource.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub schemas: Vec<String>,

    /// Workspace-assigned identifier.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,

    /// Group name.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub display_name: String,

    /// Users and service principals in the group.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub members: Vec<GroupMember>,

    /// Workspace entitlements granted through the group.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub entitlements: Vec<Entitlement>,
}

/// Member entry inside a group.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupMember {
    /// Member resource id.
    pub value: String,

    /// Member display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display: Option<String>,

    /// Reference URI.
    #[serde(rename = "$ref", default, skip_serializing_if = "Option::is_none")]
    pub ref_uri: Option<String>,
}
