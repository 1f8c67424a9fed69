//! Shared helpers for endpoint integration tests.

#![allow(dead_code)]

use databricks_client::{Client, ClientConfig};
use wiremock::MockServer;

use databricks_scim::models::{
    Email, Entitlement, Group, GroupMember, ServicePrincipalCreateRequest, User, SCHEMA_GROUP,
    SCHEMA_SERVICE_PRINCIPAL, SCHEMA_USER,
};

/// Build a client pointed at the mock server.
pub fn client_for(server: &MockServer) -> Client {
    Client::with_base_url(
        ClientConfig::new().with_token("test-token-123"),
        &server.uri(),
    )
    .expect("client construction")
}

/// Build a client whose address is never contacted; used to prove that
/// validation failures happen before any network call.
pub fn offline_client() -> Client {
    Client::with_base_url(
        ClientConfig::new().with_token("test-token-123"),
        "http://127.0.0.1:9",
    )
    .expect("client construction")
}

/// User fixture as sent in a create request.
pub fn sample_user(user_name: &str) -> User {
    User {
        schemas: vec![SCHEMA_USER.to_string()],
        user_name: user_name.to_string(),
        display_name: Some("Test User".to_string()),
        emails: vec![Email {
            value: user_name.to_string(),
            email_type: Some("work".to_string()),
            primary: true,
        }],
        entitlements: vec![Entitlement {
            value: "allow-cluster-create".to_string(),
        }],
        active: true,
        ..User::default()
    }
}

/// Group fixture as sent in a create request.
pub fn sample_group(display_name: &str) -> Group {
    Group {
        schemas: vec![SCHEMA_GROUP.to_string()],
        display_name: display_name.to_string(),
        members: vec![GroupMember {
            value: "100".to_string(),
            display: Some("Test User".to_string()),
            ref_uri: None,
        }],
        ..Group::default()
    }
}

/// Service-principal create request fixture.
pub fn sample_service_principal_request(application_id: &str) -> ServicePrincipalCreateRequest {
    ServicePrincipalCreateRequest {
        schemas: vec![SCHEMA_SERVICE_PRINCIPAL.to_string()],
        application_id: application_id.to_string(),
        display_name: Some("ci-automation".to_string()),
        entitlements: vec![Entitlement {
            value: "allow-cluster-create".to_string(),
        }],
    }
}
