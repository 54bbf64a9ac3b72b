//! Acceptance tests for the VPC provider against a mock API server
//!
//! Each test drives the full handler path through the Provider trait:
//! configuration attributes in, HTTP calls out, flattened state back.

use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

use vela_core::provider::Provider;
use vela_core::resource::{Resource, Value};
use vela_provider_vpc::VpcProvider;
use vela_sdk::auth::Authenticator;
use vela_sdk::{Config, VpcClient};

fn test_provider(server: &MockServer) -> VpcProvider {
    let config = Config::new("us-south").with_endpoint(format!("{}/v1", server.uri()));
    let client = VpcClient::new(config, Authenticator::with_token("test-token")).unwrap();
    VpcProvider::with_client(client)
        .with_delete_poll(Duration::from_millis(5), Duration::from_millis(250))
}

fn share_json(id: &str, name: &str, size: i64) -> serde_json::Value {
    json!({
        "id": id,
        "href": format!("https://us-south.iaas.velacloud.net/v1/shares/{}", id),
        "crn": format!("crn:v1:vela:public:is:us-south:a/123::share:{}", id),
        "name": name,
        "size": size,
        "profile": {"name": "dp2"},
        "zone": {"name": "us-south-2"},
        "encryption": "provider_managed",
        "lifecycle_state": "stable",
        "created_at": "2025-08-30T16:05:00Z"
    })
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

fn vpn_gateway_json(id: &str, name: &str) -> serde_json::Value {
    json!({
        "id": id,
        "href": format!("https://us-south.iaas.velacloud.net/v1/vpn_gateways/{}", id),
        "crn": format!("crn:v1:vela:public:is:us-south:a/123::vpn-gateway:{}", id),
        "name": name,
        "mode": "route",
        "status": "available",
        "members": [
            {
                "role": "active",
                "status": "available",
                "public_ip": {"address": "192.0.2.1"},
                "private_ip": {"address": "10.0.1.5", "id": "r014-rip1"}
            },
            {
                "role": "standby",
                "status": "available",
                "public_ip": {"address": "192.0.2.2"}
            }
        ],
        "subnet": {"id": "0717-sub1"},
        "created_at": "2025-07-11T08:00:00Z"
    })
}

#[tokio::test]
async fn create_then_read_preserves_configured_attributes() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/shares"))
        .respond_with(ResponseTemplate::new(201).set_body_json(share_json("r006-share1", "data", 500)))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v1/shares/r006-share1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(share_json("r006-share1", "data", 500)))
        .mount(&server)
        .await;

    let provider = test_provider(&server);
    let resource = Resource::new("share", "data")
        .with_attribute("name", Value::String("data".to_string()))
        .with_attribute("size", Value::Int(500))
        .with_attribute("profile", Value::String("dp2".to_string()))
        .with_attribute("zone", Value::String("us-south-2".to_string()));

    let state = provider.create(&resource).await.unwrap();

    assert!(state.exists);
    assert_eq!(state.identifier.as_deref(), Some("r006-share1"));
    // Attributes set at create time are observable unchanged at read time
    assert_eq!(state.attribute("name").and_then(Value::as_str), Some("data"));
    assert_eq!(state.attribute("size").and_then(Value::as_int), Some(500));
    assert_eq!(state.attribute("profile").and_then(Value::as_str), Some("dp2"));
    assert_eq!(
        state.attribute("zone").and_then(Value::as_str),
        Some("us-south-2")
    );
}

#[tokio::test]
async fn read_missing_resource_reports_absent() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/shares/r006-gone"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "errors": [{"code": "not_found", "message": "Share not found"}]
        })))
        .mount(&server)
        .await;

    let provider = test_provider(&server);
    let resource = Resource::new("share", "data");
    let state = provider.read(&resource, Some("r006-gone")).await.unwrap();

    assert!(!state.exists);
    assert!(state.identifier.is_none());
}

#[tokio::test]
async fn read_without_identifier_is_absent_without_api_call() {
    let server = MockServer::start().await;
    let provider = test_provider(&server);

    let resource = Resource::new("route_server", "rs");
    let state = provider.read(&resource, None).await.unwrap();
    assert!(!state.exists);
}

#[tokio::test]
async fn delete_then_read_reports_absent() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/v1/shares/r006-share1"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v1/shares/r006-share1"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "errors": [{"code": "not_found", "message": "Share not found"}]
        })))
        .mount(&server)
        .await;

    let provider = test_provider(&server);
    let resource = Resource::new("share", "data");

    provider
        .delete(&resource.id, "r006-share1")
        .await
        .unwrap();

    let state = provider.read(&resource, Some("r006-share1")).await.unwrap();
    assert!(!state.exists);
}

#[tokio::test]
async fn delete_of_already_absent_resource_is_ok() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/v1/shares/r006-share1"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "errors": [{"code": "not_found", "message": "Share not found"}]
        })))
        .mount(&server)
        .await;

    let provider = test_provider(&server);
    let resource = Resource::new("share", "data");
    provider.delete(&resource.id, "r006-share1").await.unwrap();
}

#[tokio::test]
async fn async_delete_polls_until_remote_reports_absent() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/v1/vpn_gateways/r014-gw1"))
        .respond_with(ResponseTemplate::new(202))
        .mount(&server)
        .await;

    // Still deleting for the first two polls, then gone
    Mock::given(method("GET"))
        .and(path("/v1/vpn_gateways/r014-gw1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(vpn_gateway_json("r014-gw1", "gw-1")))
        .up_to_n_times(2)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v1/vpn_gateways/r014-gw1"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "errors": [{"code": "not_found", "message": "VPN gateway not found"}]
        })))
        .mount(&server)
        .await;

    let provider = test_provider(&server);
    let resource = Resource::new("vpn_gateway", "gw");
    provider.delete(&resource.id, "r014-gw1").await.unwrap();
}

#[tokio::test]
async fn async_delete_times_out_when_resource_never_disappears() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/v1/vpn_gateways/r014-stuck"))
        .respond_with(ResponseTemplate::new(202))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v1/vpn_gateways/r014-stuck"))
        .respond_with(ResponseTemplate::new(200).set_body_json(vpn_gateway_json("r014-stuck", "gw-stuck")))
        .mount(&server)
        .await;

    let provider = test_provider(&server);
    let resource = Resource::new("vpn_gateway", "gw");
    let err = provider.delete(&resource.id, "r014-stuck").await.unwrap_err();
    assert!(err.to_string().contains("Timed out"));
}

#[tokio::test]
async fn vpn_gateway_read_flattens_both_member_ip_shapes() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/vpn_gateways/r014-gw1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(vpn_gateway_json("r014-gw1", "gw-1")))
        .mount(&server)
        .await;

    let provider = test_provider(&server);
    let resource = Resource::new("vpn_gateway", "gw");
    let state = provider.read(&resource, Some("r014-gw1")).await.unwrap();

    let members = state
        .attribute("members")
        .and_then(Value::as_list)
        .expect("members list");
    assert_eq!(members.len(), 2);

    // Active member carries a reserved private IP alongside its public IP
    let active = members[0].as_map().expect("member map");
    assert!(active.contains_key("private_ip"));
    // Standby has no private IP key at all
    let standby = members[1].as_map().expect("member map");
    assert!(!standby.contains_key("private_ip"));
}

#[tokio::test]
async fn child_resource_round_trips_composite_identifier() {
    let server = MockServer::start().await;

    let peer = json!({
        "id": "r014-peer1",
        "href": "https://us-south.iaas.velacloud.net/v1/route_servers/r014-srv/peers/r014-peer1",
        "name": "edge-1",
        "asn": 64999,
        "ip": {"address": "10.0.0.5"},
        "authentication_enabled": false,
        "lifecycle_state": "stable",
        "created_at": "2025-10-03T10:00:00Z"
    });

    Mock::given(method("POST"))
        .and(path("/v1/route_servers/r014-srv/peers"))
        .and(body_json(json!({
            "name": "edge-1",
            "asn": 64999,
            "ip": {"address": "10.0.0.5"}
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(&peer))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v1/route_servers/r014-srv/peers/r014-peer1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&peer))
        .mount(&server)
        .await;

    let provider = test_provider(&server);
    let resource = Resource::new("route_server_peer", "edge")
        .with_attribute("name", Value::String("edge-1".to_string()))
        .with_attribute("route_server", Value::String("r014-srv".to_string()))
        .with_attribute("ip", Value::String("10.0.0.5".to_string()))
        .with_attribute("asn", Value::Int(64999));

    let state = provider.create(&resource).await.unwrap();

    assert_eq!(state.identifier.as_deref(), Some("r014-srv/r014-peer1"));
    assert_eq!(
        state.attribute("route_server").and_then(Value::as_str),
        Some("r014-srv")
    );
    assert_eq!(state.attribute("asn").and_then(Value::as_int), Some(64999));
}

#[tokio::test]
async fn invalid_configuration_fails_before_any_api_call() {
    let server = MockServer::start().await;
    let provider = test_provider(&server);

    // Size below the minimum the schema allows
    let resource = Resource::new("share", "tiny")
        .with_attribute("size", Value::Int(5))
        .with_attribute("profile", Value::String("dp2".to_string()))
        .with_attribute("zone", Value::String("us-south-2".to_string()));

    let err = provider.create(&resource).await.unwrap_err();
    assert!(err.to_string().contains("Invalid configuration"));
    assert_eq!(server.received_requests().await.unwrap().len(), 0);
}

#[tokio::test]
async fn update_patches_only_changed_attributes() {
    let server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .and(path("/v1/shares/r006-share1"))
        .and(body_json(json!({"size": 1000})))
        .respond_with(ResponseTemplate::new(200).set_body_json(share_json("r006-share1", "data", 1000)))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v1/shares/r006-share1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(share_json("r006-share1", "data", 1000)))
        .mount(&server)
        .await;

    let provider = test_provider(&server);

    let mut prior_attrs = std::collections::HashMap::new();
    prior_attrs.insert("name".to_string(), Value::String("data".to_string()));
    prior_attrs.insert("size".to_string(), Value::Int(500));
    prior_attrs.insert("profile".to_string(), Value::String("dp2".to_string()));
    let resource = Resource::new("share", "data")
        .with_attribute("name", Value::String("data".to_string()))
        .with_attribute("size", Value::Int(1000))
        .with_attribute("profile", Value::String("dp2".to_string()));
    let from = vela_core::resource::State::existing(resource.id.clone(), prior_attrs);

    let state = provider
        .update(&resource.id, "r006-share1", &from, &resource)
        .await
        .unwrap();

    assert_eq!(state.attribute("size").and_then(Value::as_int), Some(1000));
}

#[tokio::test]
async fn update_without_changes_skips_the_patch_call() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/shares/r006-share1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(share_json("r006-share1", "data", 500)))
        .mount(&server)
        .await;

    let provider = test_provider(&server);

    let mut prior_attrs = std::collections::HashMap::new();
    prior_attrs.insert("name".to_string(), Value::String("data".to_string()));
    prior_attrs.insert("size".to_string(), Value::Int(500));
    let resource = Resource::new("share", "data")
        .with_attribute("name", Value::String("data".to_string()))
        .with_attribute("size", Value::Int(500));
    let from = vela_core::resource::State::existing(resource.id.clone(), prior_attrs);

    let state = provider
        .update(&resource.id, "r006-share1", &from, &resource)
        .await
        .unwrap();
    assert!(state.exists);

    let requests = server.received_requests().await.unwrap();
    assert!(requests.iter().all(|r| r.method.to_string() != "PATCH"));
}

#[tokio::test]
async fn data_source_aggregates_every_page() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/route_servers"))
        .and(query_param_is_missing("start"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "route_servers": [
                route_server_json("r014-a", "rs-a"),
                route_server_json("r014-b", "rs-b"),
            ],
            "next": {"href": "https://us-south.iaas.velacloud.net/v1/route_servers?start=page2"},
            "total_count": 3
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v1/route_servers"))
        .and(query_param("start", "page2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "route_servers": [route_server_json("r014-c", "rs-c")],
            "total_count": 3
        })))
        .mount(&server)
        .await;

    let provider = test_provider(&server);
    let resource = Resource::new("route_servers", "all").with_read_only(true);
    let state = provider.read(&resource, None).await.unwrap();

    assert_eq!(state.identifier.as_deref(), Some("us-south/route_servers"));
    assert_eq!(
        state.attribute("total_count").and_then(Value::as_int),
        Some(3)
    );
    let servers = state
        .attribute("route_servers")
        .and_then(Value::as_list)
        .expect("route_servers list");
    assert_eq!(servers.len(), 3);
}

#[tokio::test]
async fn data_source_with_empty_collection() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/vpn_gateways"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "vpn_gateways": [],
            "total_count": 0
        })))
        .mount(&server)
        .await;

    let provider = test_provider(&server);
    let resource = Resource::new("vpn_gateways", "all").with_read_only(true);
    let state = provider.read(&resource, None).await.unwrap();

    assert_eq!(
        state.attribute("total_count").and_then(Value::as_int),
        Some(0)
    );
    assert_eq!(
        state
            .attribute("vpn_gateways")
            .and_then(Value::as_list)
            .map(|l| l.len()),
        Some(0)
    );
}

#[tokio::test]
async fn create_rejects_data_source_types() {
    let server = MockServer::start().await;
    let provider = test_provider(&server);

    let resource = Resource::new("route_servers", "all").with_read_only(true);
    let err = provider.create(&resource).await.unwrap_err();
    assert!(err.to_string().contains("read-only data source"));
}

#[tokio::test]
async fn api_error_propagates_with_context() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/route_servers/r014-a"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "errors": [{"code": "internal_error", "message": "backend unavailable"}]
        })))
        .mount(&server)
        .await;

    let provider = test_provider(&server);
    let resource = Resource::new("route_server", "rs");
    let err = provider.read(&resource, Some("r014-a")).await.unwrap_err();

    assert!(err.to_string().contains("Failed to get route server"));
    assert!(err.to_string().contains("backend unavailable"));
}
