//! Service principals endpoint (`preview/scim/v2/ServicePrincipals`).

use databricks_client::{Client, Error, Method, Result};
use tracing::debug;

use crate::models::{ListResponse, ServicePrincipal, ServicePrincipalCreateRequest};

const SERVICE_PRINCIPALS_PATH: &str = "preview/scim/v2/ServicePrincipals";

/// Typed CRUD over workspace service principals.
#[derive(Debug, Clone)]
pub struct ServicePrincipalsEndpoint {
    client: Client,
}

impl ServicePrincipalsEndpoint {
    #[must_use]
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// List all service principals in the workspace.
    pub async fn list(&self) -> Result<ListResponse<ServicePrincipal>> {
        let body = self
            .client
            .query(Method::GET, SERVICE_PRINCIPALS_PATH, None::<&()>)
            .await?;
        crate::deserialize_body(body)
    }

    /// Fetch a service principal by id.
    pub async fn get(&self, id: &str) -> Result<ServicePrincipal> {
        if id.is_empty() {
            return Err(Error::Validation(
                "no service principal id provided".to_string(),
            ));
        }
        let body = self
            .client
            .query(
                Method::GET,
                &format!("{SERVICE_PRINCIPALS_PATH}/{id}"),
                None::<&()>,
            )
            .await?;
        crate::deserialize_body(body)
    }

    /// Register a service principal.
    pub async fn create(
        &self,
        request: &ServicePrincipalCreateRequest,
    ) -> Result<ServicePrincipal> {
        debug!(application_id = %request.application_id, "creating service principal");
        let body = self
            .client
            .query(Method::POST, SERVICE_PRINCIPALS_PATH, Some(request))
            .await?;
        crate::deserialize_body(body)
    }

    /// Replace a service principal; the id is taken from the model.
    pub async fn update(&self, principal: &ServicePrincipal) -> Result<ServicePrincipal> {
        if principal.id.is_empty() {
            return Err(Error::Validation(
                "no service principal id provided".to_string(),
            ));
        }
        let body = self
            .client
            .query(
                Method::PUT,
                &format!("{SERVICE_PRINCIPALS_PATH}/{}", principal.id),
                Some(principal),
            )
            .await?;
        crate::deserialize_body(body)
    }

    /// Delete a service principal by id.
    pub async fn delete(&self, id: &str) -> Result<()> {
        if id.is_empty() {
            return Err(Error::Validation(
                "no service principal id provided".to_string(),
            ));
        }
        debug!(id, "deleting service principal");
        self.client
            .query(
                Method::DELETE,
                &format!("{SERVICE_PRINCIPALS_PATH}/{id}"),
                None::<&()>,
            )
            .await?;
        Ok(())
    }
}
