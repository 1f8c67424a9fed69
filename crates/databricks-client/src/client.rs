//! Databricks workspace HTTP transport: request construction, rate limiting,
//! retry-on-transient-failure, and error translation.

use bytes::Bytes;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{redirect, Method, StatusCode};
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

use crate::config::ClientConfig;
use crate::error::{Error, ErrorResponse, ProviderError, Result};
use crate::rate_limit::RateLimiter;

/// Per-request timeout on the underlying HTTP transport.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

const HEADER_AZURE_SP_MANAGEMENT_TOKEN: &str = "X-Databricks-Azure-SP-Management-Token";
const HEADER_AZURE_WORKSPACE_RESOURCE_ID: &str = "X-Databricks-Azure-Workspace-Resource-Id";

/// Transport client for the workspace API.
///
/// Immutable after construction and cheap to clone; clones share the HTTP
/// connection pool and the rate limiter, so a single client may serve any
/// number of concurrent callers.
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    base_url: Url,
    max_retries: u32,
    retry_delay: Duration,
    rate_limiter: Option<RateLimiter>,
}

impl Client {
    /// Build a client from `config`, resolving the base URL as
    /// `https://{domain}/api/2.0/`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] when the domain is missing, when exactly one
    /// of the two Azure headers is set, when the Azure pair is present
    /// without a bearer token, or when the rate limit is zero.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let Some(domain) = config.domain.as_deref() else {
            return Err(Error::Config(format!(
                "missing domain (set it on the config or export {})",
                crate::config::ENV_DOMAIN
            )));
        };

        let base_url = Url::parse(&format!("https://{domain}/api/2.0/"))
            .map_err(|e| Error::Config(format!("invalid domain {domain:?}: {e}")))?;

        Self::build(config, base_url)
    }

    /// Build a client against an explicit base URL instead of the canonical
    /// workspace address. Intended for tests and proxied deployments; all
    /// other validation still applies.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] for an unparsable URL or an invalid
    /// configuration, as with [`Client::new`].
    pub fn with_base_url(config: ClientConfig, base_url: &str) -> Result<Self> {
        // A trailing slash keeps relative paths appending instead of
        // replacing the last segment on join.
        let normalized = if base_url.ends_with('/') {
            base_url.to_string()
        } else {
            format!("{base_url}/")
        };
        let base_url = Url::parse(&normalized)
            .map_err(|e| Error::Config(format!("invalid base url {base_url:?}: {e}")))?;

        Self::build(config, base_url)
    }

    fn build(config: ClientConfig, base_url: Url) -> Result<Self> {
        match (
            &config.azure_workspace_resource_id,
            &config.azure_sp_management_token,
        ) {
            (Some(_), None) => {
                return Err(Error::Config(format!(
                    "missing {HEADER_AZURE_SP_MANAGEMENT_TOKEN} when {HEADER_AZURE_WORKSPACE_RESOURCE_ID} is provided"
                )));
            }
            (None, Some(_)) => {
                return Err(Error::Config(format!(
                    "missing {HEADER_AZURE_WORKSPACE_RESOURCE_ID} when {HEADER_AZURE_SP_MANAGEMENT_TOKEN} is provided"
                )));
            }
            (Some(_), Some(_)) if config.token.is_none() => {
                return Err(Error::Config(format!(
                    "missing token when {HEADER_AZURE_WORKSPACE_RESOURCE_ID} is provided"
                )));
            }
            _ => {}
        }

        let mut headers = HeaderMap::new();
        if let Some(token) = &config.token {
            let mut value = HeaderValue::from_str(&format!("Bearer {token}"))
                .map_err(|e| Error::Config(format!("token is not a valid header value: {e}")))?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }
        if let (Some(resource_id), Some(mgmt_token)) = (
            &config.azure_workspace_resource_id,
            &config.azure_sp_management_token,
        ) {
            let mut mgmt = HeaderValue::from_str(mgmt_token).map_err(|e| {
                Error::Config(format!(
                    "{HEADER_AZURE_SP_MANAGEMENT_TOKEN} is not a valid header value: {e}"
                ))
            })?;
            mgmt.set_sensitive(true);
            headers.insert(HEADER_AZURE_SP_MANAGEMENT_TOKEN, mgmt);
            headers.insert(
                HEADER_AZURE_WORKSPACE_RESOURCE_ID,
                HeaderValue::from_str(resource_id).map_err(|e| {
                    Error::Config(format!(
                        "{HEADER_AZURE_WORKSPACE_RESOURCE_ID} is not a valid header value: {e}"
                    ))
                })?,
            );
        }

        // Redirects are not followed: the caller inspects the last response
        // rather than the transport silently chasing a Location header.
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .redirect(redirect::Policy::none())
            .default_headers(headers)
            .build()
            .map_err(|e| Error::Config(format!("failed to build HTTP client: {e}")))?;

        let rate_limiter = config
            .rate_limit_per_second
            .map(RateLimiter::new)
            .transpose()?;

        Ok(Self {
            http,
            base_url,
            max_retries: config.max_retries,
            retry_delay: config.retry_delay,
            rate_limiter,
        })
    }

    /// The resolved base URL requests are issued against.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Issue `method` against `path` (relative to the base URL), serializing
    /// `body` as JSON when present.
    ///
    /// Waits on the rate limiter before every attempt. Transport failures
    /// and responses with status >= 500 are retried up to the configured
    /// count with the configured delay in between; everything else surfaces
    /// immediately. Dropping the returned future (e.g. through
    /// `tokio::time::timeout`) cancels the limiter wait and the in-flight
    /// call.
    ///
    /// Returns the raw response bytes on 200/201 and `None` on 204; the
    /// endpoint layer deserializes.
    ///
    /// # Errors
    ///
    /// [`Error::Validation`] for an unresolvable path, [`Error::Serialization`]
    /// for an unserializable body or malformed error payload,
    /// [`Error::Transport`] for network failures, and [`Error::Provider`] for
    /// non-2xx/204 responses.
    pub async fn query<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<Option<Bytes>> {
        let url = self
            .base_url
            .join(path)
            .map_err(|e| Error::Validation(format!("invalid request path {path:?}: {e}")))?;

        let payload = body.map(serde_json::to_vec).transpose()?;

        let mut attempt: u32 = 0;
        loop {
            if let Some(limiter) = &self.rate_limiter {
                limiter.acquire().await;
            }

            match self.attempt(&method, &url, payload.as_deref()).await {
                Ok(response) => return Ok(response),
                Err(err) if err.is_temporary() && attempt < self.max_retries => {
                    attempt += 1;
                    warn!(
                        %method,
                        %url,
                        attempt,
                        max_retries = self.max_retries,
                        error = %err,
                        "transient failure, retrying after delay"
                    );
                    tokio::time::sleep(self.retry_delay).await;
                }
                Err(err) => return Err(err),
            }
        }
    }

    async fn attempt(
        &self,
        method: &Method,
        url: &Url,
        payload: Option<&[u8]>,
    ) -> Result<Option<Bytes>> {
        debug!(%method, %url, "sending request");

        let mut request = self.http.request(method.clone(), url.clone());
        if let Some(bytes) = payload {
            request = request
                .header(CONTENT_TYPE, "application/json")
                .body(bytes.to_vec());
        }

        let response = request.send().await?;
        self.parse_response(method, url, response).await
    }

    async fn parse_response(
        &self,
        method: &Method,
        url: &Url,
        response: reqwest::Response,
    ) -> Result<Option<Bytes>> {
        let status = response.status();
        let json_body = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|v| v.contains("json"));
        let body = response.bytes().await?;

        debug!(%method, %url, status = status.as_u16(), bytes = body.len(), "received response");

        match status {
            StatusCode::NO_CONTENT => Ok(None),
            StatusCode::OK | StatusCode::CREATED => Ok(Some(body)),
            _ => {
                warn!(%method, %url, status = status.as_u16(), "error response");

                let provider = if json_body {
                    let envelope: ErrorResponse = serde_json::from_slice(&body)?;
                    ProviderError {
                        error_code: envelope.error_code,
                        message: envelope.message,
                        status_code: status.as_u16(),
                    }
                } else {
                    // No structured body to translate; embed the request and
                    // raw text so the failure is diagnosable.
                    ProviderError {
                        error_code: String::new(),
                        message: format!(
                            "{method} {url} returned {status}: {}",
                            String::from_utf8_lossy(&body)
                        ),
                        status_code: status.as_u16(),
                    }
                };

                Err(Error::Provider(provider))
            }
        }
    }
}
