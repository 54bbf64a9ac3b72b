//! Resource schemas
//!
//! One schema per managed resource type, consulted before create to
//! validate the configuration attributes.

pub mod cluster_network;
pub mod network_attachment;
pub mod route_server;
pub mod share;
pub mod types;
pub mod vpn_gateway;

use vela_core::schema::ResourceSchema;

/// All resource schemas this provider declares
pub fn schemas() -> Vec<ResourceSchema> {
    vec![
        route_server::route_server_schema(),
        route_server::route_server_peer_schema(),
        cluster_network::cluster_network_schema(),
        cluster_network::cluster_network_subnet_schema(),
        share::share_schema(),
        vpn_gateway::vpn_gateway_schema(),
        vpn_gateway::vpn_gateway_connection_schema(),
        network_attachment::instance_network_attachment_schema(),
    ]
}

/// Look up the schema for a resource type
pub fn schema_for(resource_type: &str) -> Option<ResourceSchema> {
    schemas()
        .into_iter()
        .find(|schema| schema.resource_type == resource_type)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_managed_type_has_a_schema() {
        for resource_type in [
            "route_server",
            "route_server_peer",
            "cluster_network",
            "cluster_network_subnet",
            "share",
            "vpn_gateway",
            "vpn_gateway_connection",
            "instance_network_attachment",
        ] {
            assert!(
                schema_for(resource_type).is_some(),
                "missing schema for {}",
                resource_type
            );
        }
    }

    #[test]
    fn unknown_type_has_no_schema() {
        assert!(schema_for("load_balancer").is_none());
    }
}
