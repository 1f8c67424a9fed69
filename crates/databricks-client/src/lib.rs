//! HTTP transport for the Databricks workspace API.
//!
//! Owns the concerns every endpoint shares: base-URL resolution, auth header
//! injection, token-bucket rate limiting, retry on transient failures, and
//! translation of error responses into typed errors. Resource endpoints
//! (see the `databricks-scim` crate) are thin wrappers over
//! [`Client::query`].

pub mod client;
pub mod config;
pub mod error;
pub mod rate_limit;

pub use client::Client;
pub use config::ClientConfig;
pub use error::{Error, ProviderError, Result};

// Re-exported so endpoint crates don't need their own HTTP dependencies.
pub use bytes::Bytes;
pub use reqwest::Method;
