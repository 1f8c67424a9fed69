//! Client configuration and explicit environment fallback.

use std::env;
use std::time::Duration;

/// Environment variable consulted by [`ClientConfig::with_env_fallback`] for
/// the workspace domain.
pub const ENV_DOMAIN: &str = "DATABRICKS_DOMAIN";

/// Environment variable consulted by [`ClientConfig::with_env_fallback`] for
/// the bearer token.
pub const ENV_TOKEN: &str = "DATABRICKS_TOKEN";

/// Configuration for a [`Client`](crate::Client).
///
/// `domain` is mandatory. The two Azure headers are all-or-nothing: setting
/// one without the other fails construction.
///
/// The [`Debug`] impl redacts the token fields to prevent accidental
/// credential exposure in log output.
#[derive(Clone, Default)]
pub struct ClientConfig {
    /// Workspace hostname, e.g. `myshard.cloud.databricks.com`.
    pub domain: Option<String>,

    /// Personal access token sent as `Authorization: Bearer {token}`.
    pub token: Option<String>,

    /// Value for the `X-Databricks-Azure-Workspace-Resource-Id` header.
    pub azure_workspace_resource_id: Option<String>,

    /// Value for the `X-Databricks-Azure-SP-Management-Token` header.
    pub azure_sp_management_token: Option<String>,

    /// Retries after the initial attempt; total attempts = `max_retries + 1`.
    pub max_retries: u32,

    /// Fixed delay slept between consecutive attempts.
    pub retry_delay: Duration,

    /// Token-bucket refill rate. `None` disables rate limiting; zero is a
    /// configuration error rather than a silent deadlock.
    pub rate_limit_per_second: Option<u32>,
}

impl ClientConfig {
    /// Create an empty configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the workspace domain.
    #[must_use]
    pub fn with_domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = Some(domain.into());
        self
    }

    /// Set the bearer token.
    #[must_use]
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set the Azure workspace resource id and service-principal management
    /// token headers. They are only valid together.
    #[must_use]
    pub fn with_azure_headers(
        mut self,
        workspace_resource_id: impl Into<String>,
        sp_management_token: impl Into<String>,
    ) -> Self {
        self.azure_workspace_resource_id = Some(workspace_resource_id.into());
        self.azure_sp_management_token = Some(sp_management_token.into());
        self
    }

    /// Set the retry count.
    #[must_use]
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// Set the inter-retry delay.
    #[must_use]
    pub fn with_retry_delay(mut self, delay: Duration) -> Self {
        self.retry_delay = delay;
        self
    }

    /// Set the requests-per-second rate limit.
    #[must_use]
    pub fn with_rate_limit(mut self, requests_per_second: u32) -> Self {
        self.rate_limit_per_second = Some(requests_per_second);
        self
    }

    /// Fill `domain` and `token` from `DATABRICKS_DOMAIN` and
    /// `DATABRICKS_TOKEN` where they are still unset.
    ///
    /// This is an explicit step for the caller; [`Client::new`](crate::Client::new)
    /// itself never reads the process environment.
    #[must_use]
    pub fn with_env_fallback(mut self) -> Self {
        if self.domain.is_none() {
            if let Ok(v) = env::var(ENV_DOMAIN) {
                if !v.is_empty() {
                    self.domain = Some(v);
                }
            }
        }
        if self.token.is_none() {
            if let Ok(v) = env::var(ENV_TOKEN) {
                if !v.is_empty() {
                    self.token = Some(v);
                }
            }
        }
        self
    }
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("domain", &self.domain)
            .field("token", &self.token.as_ref().map(|_| "[REDACTED]"))
            .field(
                "azure_workspace_resource_id",
                &self.azure_workspace_resource_id,
            )
            .field(
                "azure_sp_management_token",
                &self.azure_sp_management_token.as_ref().map(|_| "[REDACTED]"),
            )
            .field("max_retries", &self.max_retries)
            .field("retry_delay", &self.retry_delay)
            .field("rate_limit_per_second", &self.rate_limit_per_second)
            .finish()
    }
}
