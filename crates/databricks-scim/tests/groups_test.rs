//! Integration tests for the Groups endpoint.

mod helpers;

use helpers::{client_for, offline_client, sample_group};
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use databricks_client::Error;
use databricks_scim::GroupsEndpoint;

#[tokio::test]
async fn get_with_empty_id_fails_before_any_network_call() {
    let endpoint = GroupsEndpoint::new(offline_client());

    match endpoint.get("").await {
        Err(Error::Validation(msg)) => assert_eq!(msg, "no group id provided"),
        other => panic!("expected Validation error, got {other:?}"),
    }
}

#[tokio::test]
async fn update_with_empty_id_fails_before_any_network_call() {
    let endpoint = GroupsEndpoint::new(offline_client());
    let group = sample_group("data-eng");

    assert!(matches!(
        endpoint.update("", &group).await,
        Err(Error::Validation(_))
    ));
}

#[tokio::test]
async fn delete_with_empty_id_fails_before_any_network_call() {
    let endpoint = GroupsEndpoint::new(offline_client());

    assert!(matches!(
        endpoint.delete("").await,
        Err(Error::Validation(_))
    ));
}

#[tokio::test]
async fn create_round_trips_the_group_model() {
    let server = MockServer::start().await;
    let request = sample_group("data-eng");

    let mut canned = request.clone();
    canned.id = "200".to_string();

    Mock::given(method("POST"))
        .and(path("/preview/scim/v2/Groups"))
        .and(body_json(serde_json::to_value(&request).unwrap()))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(serde_json::to_value(&canned).unwrap()),
        )
        .expect(1)
        .mount(&server)
        .await;

    let endpoint = GroupsEndpoint::new(client_for(&server));
    let created = endpoint.create(&request).await.unwrap();

    assert_eq!(created, canned);
}

#[tokio::test]
async fn update_puts_to_the_id_path() {
    let server = MockServer::start().await;
    let group = sample_group("data-eng-renamed");

    Mock::given(method("PUT"))
        .and(path("/preview/scim/v2/Groups/200"))
        .and(body_json(serde_json::to_value(&group).unwrap()))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::to_value(&group).unwrap()),
        )
        .expect(1)
        .mount(&server)
        .await;

    let endpoint = GroupsEndpoint::new(client_for(&server));
    let updated = endpoint.update("200", &group).await.unwrap();

    assert_eq!(updated.display_name, "data-eng-renamed");
}

#[tokio::test]
async fn list_parses_members() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/preview/scim/v2/Groups"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "schemas": ["urn:ietf:params:scim:api:messages:2.0:ListResponse"],
            "totalResults": 1,
            "Resources": [{
                "id": "200",
                "displayName": "data-eng",
                "members": [
                    {"value": "100", "display": "Jane"},
                    {"value": "101"}
                ]
            }]
        })))
        .mount(&server)
        .await;

    let endpoint = GroupsEndpoint::new(client_for(&server));
    let response = endpoint.list().await.unwrap();

    assert_eq!(response.total_results, 1);
    let group = &response.resources[0];
    assert_eq!(group.display_name, "data-eng");
    assert_eq!(group.members.len(), 2);
    assert_eq!(group.members[0].display.as_deref(), Some("Jane"));
    assert!(group.members[1].display.is_none());
}

#[tokio::test]
async fn delete_accepts_204_no_content() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/preview/scim/v2/Groups/200"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let endpoint = GroupsEndpoint::new(client_for(&server));
    assert!(endpoint.delete("200").await.is_ok());
}
