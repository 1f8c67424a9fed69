//! SCIM User resource.

use serde::{Deserialize, Serialize};

/// Workspace user (SCIM core User resource).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// SCIM schema URNs for this resource.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub schemas: Vec<String>,

    /// Workspace-assigned identifier.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,

    /// Login name, typically the user's email address.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub user_name: String,

    /// Display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    /// Email addresses.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub emails: Vec<Email>,

    /// Groups the user belongs to.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub groups: Vec<GroupRef>,

    /// Workspace entitlements (e.g. `allow-cluster-create`).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub entitlements: Vec<Entitlement>,

    /// Whether the user is active.
    #[serde(default)]
    pub active: bool,
}

/// Email address attached to a user.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Email {
    /// The address itself.
    pub value: String,

    /// Address type (e.g. `work`).
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub email_type: Option<String>,

    /// Whether this is the primary address.
    #[serde(default)]
    pub primary: bool,
}

/// Reference to a group, as embedded in User and ServicePrincipal resources.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupRef {
    /// Group id.
    pub value: String,

    /// Group display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display: Option<String>,

    /// Reference URI.
    #[serde(rename = "$ref", default, skip_serializing_if = "Option::is_none")]
    pub ref_uri: Option<String>,
}

/// A single workspace entitlement.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Entitlement {
    /// Entitlement name.
    pub value: String,
}
