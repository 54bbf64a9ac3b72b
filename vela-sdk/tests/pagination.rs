//! Pagination integration tests against a mock API server
//!
//! The aggregate item count must equal the sum of per-page counts for
//! however many pages the server returns, including the zero-item and
//! single-page boundary cases.

use serde_json::json;
use wiremock::matchers::{bearer_token, method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

use vela_sdk::auth::Authenticator;
use vela_sdk::paging::list_all;
use vela_sdk::{Config, VpcClient};

fn test_client(server: &MockServer) -> VpcClient {
    let config = Config::new("us-south").with_endpoint(format!("{}/v1", server.uri()));
    VpcClient::new(config, Authenticator::with_token("test-token")).unwrap()
}

fn route_server_json(id: &str, name: &str) -> serde_json::Value {
    json!({
        "id": id,
        "href": format!("https://us-south.iaas.velacloud.net/v1/route_servers/{}", id),
        "crn": format!("crn:v1:vela:public:is:us-south:a/123::route-server:{}", id),
        "name": name,
        "asn": 64512,
        "lifecycle_state": "stable",
        "created_at": "2025-10-02T09:21:14Z",
        "vpc": {"id": "r006-vpc1", "name": "vpc-prod"}
    })
}

#[tokio::test]
async fn empty_collection_aggregates_to_zero() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/route_servers"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "route_servers": [],
            "total_count": 0
        })))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let servers = list_all(|start| {
        let client = client.clone();
        async move { client.list_route_servers(start.as_deref()).await }
    })
    .await
    .unwrap();

    assert!(servers.is_empty());
}

#[tokio::test]
async fn single_page_collection() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/route_servers"))
        .and(bearer_token("test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "route_servers": [
                route_server_json("r014-a", "rs-a"),
                route_server_json("r014-b", "rs-b"),
            ],
            "total_count": 2
        })))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let servers = list_all(|start| {
        let client = client.clone();
        async move { client.list_route_servers(start.as_deref()).await }
    })
    .await
    .unwrap();

    assert_eq!(servers.len(), 2);
    assert_eq!(servers[0].name, "rs-a");
}

#[tokio::test]
async fn multi_page_collection_follows_start_tokens() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/route_servers"))
        .and(query_param_is_missing("start"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "route_servers": [
                route_server_json("r014-a", "rs-a"),
                route_server_json("r014-b", "rs-b"),
            ],
            "next": {"href": "https://us-south.iaas.velacloud.net/v1/route_servers?limit=2&start=page2"},
            "total_count": 5
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v1/route_servers"))
        .and(query_param("start", "page2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "route_servers": [
                route_server_json("r014-c", "rs-c"),
                route_server_json("r014-d", "rs-d"),
            ],
            "next": {"href": "https://us-south.iaas.velacloud.net/v1/route_servers?limit=2&start=page3"},
            "total_count": 5
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v1/route_servers"))
        .and(query_param("start", "page3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "route_servers": [route_server_json("r014-e", "rs-e")],
            "total_count": 5
        })))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let servers = list_all(|start| {
        let client = client.clone();
        async move { client.list_route_servers(start.as_deref()).await }
    })
    .await
    .unwrap();

    assert_eq!(servers.len(), 5);
    let names: Vec<&str> = servers.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["rs-a", "rs-b", "rs-c", "rs-d", "rs-e"]);
}

#[tokio::test]
async fn page_fetch_error_aborts_listing() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/route_servers"))
        .and(query_param_is_missing("start"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "route_servers": [route_server_json("r014-a", "rs-a")],
            "next": {"href": "https://us-south.iaas.velacloud.net/v1/route_servers?start=page2"},
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v1/route_servers"))
        .and(query_param("start", "page2"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "errors": [{"code": "internal_error", "message": "something broke"}]
        })))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let result = list_all(|start| {
        let client = client.clone();
        async move { client.list_route_servers(start.as_deref()).await }
    })
    .await;

    // No partial results: the whole listing fails
    let err = result.unwrap_err();
    assert_eq!(err.status(), Some(500));
}
