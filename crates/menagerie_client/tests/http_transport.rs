#![cfg(not(target_arch = "wasm32"))]

use std::sync::Arc;

use menagerie_client::{GraphqlContext, HttpTransport, QueryError, Transport};
use menagerie_common::{AllClients, GraphqlOperation, NoVariables};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn clients_body() -> serde_json::Value {
    json!({
        "data": {
            "allClients": [{
                "firstName": "Ada",
                "lastName": "Lovelace",
                "email": "ada@example.com",
                "isActive": false,
                "registeredAt": "2024-03-01T10:00:00+00:00"
            }]
        }
    })
}

#[tokio::test]
async fn test_posts_graphql_body_as_json() {
    let server = MockServer::start().await;
    let request = AllClients::request(&NoVariables::default()).unwrap();

    Mock::given(method("POST"))
        .and(path("/clients/"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({
            "query": AllClients::QUERY,
            "variables": {},
            "operationName": "AllClients",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(clients_body()))
        .expect(1)
        .mount(&server)
        .await;

    let transport = HttpTransport::new(format!("{}/clients/", server.uri()));
    let body = transport.post(&request).await.unwrap();

    assert_eq!(body, clients_body());
}

#[tokio::test]
async fn test_context_caches_over_http() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/clients/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(clients_body()))
        .expect(1)
        .mount(&server)
        .await;

    let ctx = GraphqlContext::new(
        "clients",
        Arc::new(HttpTransport::new(format!("{}/clients/", server.uri()))),
    );

    let first = ctx.execute::<AllClients>(&NoVariables::default()).await.unwrap();
    let second = ctx.execute::<AllClients>(&NoVariables::default()).await.unwrap();

    assert_eq!(first, second);
    assert!(!second.all_clients[0].is_active);
}

#[tokio::test]
async fn test_bad_request_with_errors_body_is_graphql_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "errors": [{ "message": "Syntax Error: Unexpected Name \"nope\"" }]
        })))
        .mount(&server)
        .await;

    let ctx = GraphqlContext::new("clients", Arc::new(HttpTransport::new(server.uri())));
    let err = ctx.execute::<AllClients>(&NoVariables::default()).await.unwrap_err();

    assert!(matches!(err, QueryError::Graphql { .. }));
    assert_eq!(err.message(), "Syntax Error: Unexpected Name \"nope\"");
}

#[tokio::test]
async fn test_non_json_error_page_is_network_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_string("<h1>Server Error</h1>"))
        .mount(&server)
        .await;

    let transport = HttpTransport::new(server.uri());
    let request = AllClients::request(&NoVariables::default()).unwrap();
    let err = transport.post(&request).await.unwrap_err();

    assert_eq!(
        err,
        QueryError::Network {
            message: "Response not successful: Received status code 500".to_string()
        }
    );
}

#[tokio::test]
async fn test_unreachable_endpoint_is_network_error() {
    let server = MockServer::start().await;
    let uri = server.uri();
    drop(server);

    let transport = HttpTransport::new(format!("{uri}/clients/"));
    let request = AllClients::request(&NoVariables::default()).unwrap();
    let err = transport.post(&request).await.unwrap_err();

    assert!(matches!(err, QueryError::Network { .. }));
    assert!(!err.message().is_empty());
}
