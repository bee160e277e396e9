//! Tests for the GraphQL client

use super::*;
use crate::config::Config;
use crate::error::Error;
use crate::types::OwnerType;
use serde::Deserialize;
use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[derive(Debug, Deserialize, PartialEq)]
struct Viewer {
    login: String,
}

#[derive(Debug, Deserialize, PartialEq)]
struct ViewerData {
    viewer: Viewer,
}

fn client_for(server: &MockServer) -> GraphqlClient {
    let config = Config::builder()
        .endpoint(format!("{}/graphql", server.uri()))
        .token("t")
        .build()
        .unwrap();
    GraphqlClient::from_config(&config).unwrap()
}

#[test]
fn test_request_serialization() {
    let request = GraphqlRequest {
        query: "query Q($id: ID!) { node(id: $id) { id } }",
        variables: json!({"id": "PVT_1"}),
    };
    assert_eq!(
        serde_json::to_value(&request).unwrap(),
        json!({
            "query": "query Q($id: ID!) { node(id: $id) { id } }",
            "variables": {"id": "PVT_1"}
        })
    );
}

#[test]
fn test_error_describe() {
    let error: GraphqlError = serde_json::from_value(json!({
        "type": "NOT_FOUND",
        "message": "Could not resolve to a node with the global id of 'x'"
    }))
    .unwrap();
    assert_eq!(
        error.describe(),
        "NOT_FOUND: Could not resolve to a node with the global id of 'x'"
    );

    let error: GraphqlError = serde_json::from_value(json!({"message": "boom"})).unwrap();
    assert_eq!(error.describe(), "boom");
}

#[test]
fn test_projects_query_per_owner_type() {
    assert!(queries::projects_query(OwnerType::User).contains("owner: user(login: $login)"));
    assert!(queries::projects_query(OwnerType::Organization)
        .contains("owner: organization(login: $login)"));
}

#[test]
fn test_paginated_queries_take_cursor() {
    for query in [
        queries::USER_PROJECTS,
        queries::ORGANIZATION_PROJECTS,
        queries::PROJECT_ITEMS,
        queries::PROJECT_FIELDS,
    ] {
        assert!(query.contains("$first: Int!"));
        assert!(query.contains("$after: String"));
        assert!(query.contains("pageInfo { hasNextPage endCursor }"));
    }
}

#[tokio::test]
async fn test_execute_decodes_data() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/graphql"))
        .and(body_partial_json(json!({"variables": {"x": 1}})))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"data": {"viewer": {"login": "octocat"}}})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let data: ViewerData = client
        .execute("{ viewer { login } }", json!({"x": 1}))
        .await
        .unwrap();

    assert_eq!(data.viewer.login, "octocat");
}

#[tokio::test]
async fn test_execute_errors_fail_even_with_data() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"viewer": {"login": "octocat"}},
            "errors": [{"message": "Something went wrong"}]
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client
        .execute::<_, ViewerData>("{ viewer { login } }", json!({}))
        .await
        .unwrap_err();

    match err {
        Error::GraphQl { messages } => assert_eq!(messages, vec!["Something went wrong"]),
        other => panic!("Expected GraphQl, got {other:?}"),
    }
}

#[tokio::test]
async fn test_execute_missing_data() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": null})))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client
        .execute::<_, ViewerData>("{ viewer { login } }", json!({}))
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Fetch { .. }));
}

#[tokio::test]
async fn test_execute_invalid_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client
        .execute::<_, ViewerData>("{ viewer { login } }", json!({}))
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Decode { .. }));
    assert!(err.is_fetch_error());
}
