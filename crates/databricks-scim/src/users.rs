//! Users endpoint (`preview/scim/v2/Users`).

use databricks_client::{Client, Error, Method, Result};
use tracing::debug;

use crate::models::{ListResponse, User};

const USERS_PATH: &str = "preview/scim/v2/Users";

/// Typed CRUD over workspace users.
///
/// A thin adapter over [`Client::query`]: URL template plus
/// (de)serialization. Retries and rate limiting happen in the transport
/// client.
#[derive(Debug, Clone)]
pub struct UsersEndpoint {
    client: Client,
}

impl UsersEndpoint {
    #[must_use]
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// List all users in the workspace.
    pub async fn list(&self) -> Result<ListResponse<User>> {
        let body = self.client.query(Method::GET, USERS_PATH, None::<&()>).await?;
        crate::deserialize_body(body)
    }

    /// Fetch a user by id.
    pub async fn get(&self, id: &str) -> Result<User> {
        if id.is_empty() {
            return Err(Error::Validation("no user id provided".to_string()));
        }
        let body = self
            .client
            .query(Method::GET, &format!("{USERS_PATH}/{id}"), None::<&()>)
            .await?;
        crate::deserialize_body(body)
    }

    /// Create a user.
    pub async fn create(&self, user: &User) -> Result<User> {
        debug!(user_name = %user.user_name, "creating user");
        let body = self.client.query(Method::POST, USERS_PATH, Some(user)).await?;
        crate::deserialize_body(body)
    }

    /// Replace a user; the id is taken from the model.
    pub async fn update(&self, user: &User) -> Result<User> {
        if user.id.is_empty() {
            return Err(Error::Validation("no user id provided".to_string()));
        }
        let body = self
            .client
            .query(Method::PUT, &format!("{USERS_PATH}/{}", user.id), Some(user))
            .await?;
        crate::deserialize_body(body)
    }

    /// Delete a user by id.
    pub async fn delete(&self, id: &str) -> Result<()> {
        if id.is_empty() {
            return Err(Error::Validation("no user id provided".to_string()));
        }
        debug!(id, "deleting user");
        self.client
            .query(Method::DELETE, &format!("{USERS_PATH}/{id}"), None::<&()>)
            .await?;
        Ok(())
    }
}
