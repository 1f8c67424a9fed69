//! Groups endpoint (`preview/scim/v2/Groups`).

use databricks_client::{Client, Error, Method, Result};
use tracing::debug;

use crate::models::{Group, ListResponse};

const GROUPS_PATH: &str = "preview/scim/v2/Groups";

/// Typed CRUD over workspace groups.
#[derive(Debug, Clone)]
pub struct GroupsEndpoint {
    client: Client,
}

impl GroupsEndpoint {
    #[must_use]
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// List all groups in the workspace.
    pub async fn list(&self) -> Result<ListResponse<Group>> {
        let body = self.client.query(Method::GET, GROUPS_PATH, None::<&()>).await?;
        crate::deserialize_body(body)
    }

    /// Fetch a group by id.
    pub async fn get(&self, id: &str) -> Result<Group> {
        if id.is_empty() {
            return Err(Error::Validation("no group id provided".to_string()));
        }
        let body = self
            .client
            .query(Method::GET, &format!("{GROUPS_PATH}/{id}"), None::<&()>)
            .await?;
        crate::deserialize_body(body)
    }

    /// Create a group.
    pub async fn create(&self, group: &Group) -> Result<Group> {
        debug!(display_name = %group.display_name, "creating group");
        let body = self
            .client
            .query(Method::POST, GROUPS_PATH, Some(group))
            .await?;
        crate::deserialize_body(body)
    }

    /// Replace the group with the given id.
    pub async fn update(&self, id: &str, group: &Group) -> Result<Group> {
        if id.is_empty() {
            return Err(Error::Validation("no group id provided".to_string()));
        }
        let body = self
            .client
            .query(Method::PUT, &format!("{GROUPS_PATH}/{id}"), Some(group))
            .await?;
        crate::deserialize_body(body)
    }

    /// Delete a group by id.
    pub async fn delete(&self, id: &str) -> Result<()> {
        if id.is_empty() {
            return Err(Error::Validation("no group id provided".to_string()));
        }
        debug!(id, "deleting group");
        self.client
            .query(Method::DELETE, &format!("{GROUPS_PATH}/{id}"), None::<&()>)
            .await?;
        Ok(())
    }
}
