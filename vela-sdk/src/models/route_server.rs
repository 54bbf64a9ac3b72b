//! Dynamic route server models
//!
//! A route server distributes routes to its peers over BGP sessions. The
//! server deletes asynchronously: DELETE is accepted and the resource
//! stays visible in `deleting` state until it disappears.

use serde::{Deserialize, Serialize};

use super::common::{
    Href, IpAddress, LifecycleState, ResourceIdentity, ResourceReference, ReservedIpReference,
    Timestamp,
};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RouteServer {
    pub id: String,
    pub href: String,
    pub crn: String,
    pub name: String,
    /// Autonomous system number the server speaks BGP with
    pub asn: i64,
    pub lifecycle_state: LifecycleState,
    pub created_at: Timestamp,
    #[serde(default)]
    pub ips: Vec<ReservedIpReference>,
    #[serde(default)]
    pub security_groups: Vec<ResourceReference>,
    pub vpc: ResourceReference,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_group: Option<ResourceReference>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RouteServerCollection {
    #[serde(default)]
    pub route_servers: Vec<RouteServer>,
    #[serde(default)]
    pub first: Option<Href>,
    #[serde(default)]
    pub next: Option<Href>,
    #[serde(default)]
    pub limit: Option<i64>,
    #[serde(default)]
    pub total_count: Option<i64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RouteServerPrototype {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asn: Option<i64>,
    pub vpc: ResourceIdentity,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub security_groups: Vec<ResourceIdentity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_group: Option<ResourceIdentity>,
}

/// Partial update; only the fields present are patched
#[derive(Debug, Clone, Serialize, Default)]
pub struct RouteServerPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// BGP peer attached to a route server
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RouteServerPeer {
    pub id: String,
    pub href: String,
    pub name: String,
    pub asn: i64,
    pub ip: IpAddress,
    #[serde(default)]
    pub authentication_enabled: bool,
    pub lifecycle_state: LifecycleState,
    pub created_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RouteServerPeerCollection {
    #[serde(default)]
    pub peers: Vec<RouteServerPeer>,
    #[serde(default)]
    pub first: Option<Href>,
    #[serde(default)]
    pub next: Option<Href>,
    #[serde(default)]
    pub limit: Option<i64>,
    #[serde(default)]
    pub total_count: Option<i64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RouteServerPeerPrototype {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub asn: i64,
    pub ip: IpAddress,
}

#[derive(Debug, Clone, Serialize, Default)]
pub struct RouteServerPeerPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asn: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn route_server_deserializes_with_optional_fields_absent() {
        let json = r#"{
            "id": "r014-9e5a",
            "href": "https://us-south.iaas.velacloud.net/v1/route_servers/r014-9e5a",
            "crn": "crn:v1:vela:public:is:us-south:a/123::route-server:r014-9e5a",
            "name": "rs-hub",
            "asn": 64512,
            "lifecycle_state": "stable",
            "created_at": "2025-10-02T09:21:14Z",
            "vpc": {"id": "r006-vpc1"}
        }"#;
        let server: RouteServer = serde_json::from_str(json).unwrap();
        assert_eq!(server.asn, 64512);
        assert!(server.ips.is_empty());
        assert!(server.resource_group.is_none());
    }

    #[test]
    fn empty_patch_serializes_to_empty_object() {
        let patch = RouteServerPatch::default();
        assert_eq!(serde_json::to_value(&patch).unwrap(), serde_json::json!({}));
    }

    #[test]
    fn peer_prototype_skips_absent_name() {
        let proto = RouteServerPeerPrototype {
            name: None,
            asn: 64999,
            ip: IpAddress {
                address: "10.0.0.5".to_string(),
            },
        };
        let value = serde_json::to_value(&proto).unwrap();
        assert!(value.get("name").is_none());
        assert_eq!(value["asn"], 64999);
    }
}
