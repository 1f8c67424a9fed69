//! SCIM resource models for the workspace identity API.
//!
//! Plain serializable records; all request/response handling lives in the
//! endpoint modules and the transport client.

pub mod group;
pub mod response;
pub mod service_principal;
pub mod user;

pub use group::{Group, GroupMember};
pub use response::ListResponse;
pub use service_principal::{ServicePrincipal, ServicePrincipalCreateRequest};
pub use user::{Email, Entitlement, GroupRef, User};

/// SCIM core User schema URN.
pub const SCHEMA_USER: &str = "urn:ietf:params:scim:schemas:core:2.0:User";

/// SCIM core Group schema URN.
pub const SCHEMA_GROUP: &str = "urn:ietf:params:scim:schemas:core:2.0:Group";

/// SCIM ServicePrincipal schema URN.
pub const SCHEMA_SERVICE_PRINCIPAL: &str = "urn:ietf:params:scim:schemas:core:2.0:ServicePrincipal";

/// SCIM ListResponse message URN.
pub const SCHEMA_LIST_RESPONSE: &str = "urn:ietf:params:scim:api:messages:2.0:ListResponse";
