//! Typed SCIM endpoints for the Databricks workspace API.
//!
//! Each endpoint is a thin wrapper around the transport client: it supplies
//! the URL template and the HTTP verb, validates required identifiers, and
//! (de)serializes the typed models. Rate limiting, retries, and error
//! translation all live in `databricks-client`.

pub mod groups;
pub mod models;
pub mod service_principals;
pub mod users;

pub use groups::GroupsEndpoint;
pub use service_principals::ServicePrincipalsEndpoint;
pub use users::UsersEndpoint;

use databricks_client::{Bytes, Result};
use serde::de::DeserializeOwned;

/// Deserialize an optional response body into `T`.
///
/// A missing body (204 where the caller expected a resource) surfaces as the
/// serialization error produced by parsing empty input.
pub(crate) fn deserialize_body<T: DeserializeOwned>(body: Option<Bytes>) -> Result<T> {
    let bytes = body.unwrap_or_default();
    Ok(serde_json::from_slice(&bytes)?)
}
