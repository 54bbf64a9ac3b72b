//! VPN gateway schema definitions

use vela_core::resource::Value;
use vela_core::schema::{AttributeSchema, AttributeType, ResourceSchema, types as core_types};

use super::types;

pub fn vpn_gateway_schema() -> ResourceSchema {
    ResourceSchema::new("vpn_gateway")
        .with_description("Site-to-site VPN gateway")
        .attribute(AttributeSchema::new("name", AttributeType::String))
        .attribute(
            AttributeSchema::new("subnet", AttributeType::String)
                .required()
                .with_remote_name("subnet.id")
                .with_description("ID of the subnet hosting the gateway members"),
        )
        .attribute(
            AttributeSchema::new("mode", types::vpn_mode())
                .with_default(Value::String("route".to_string())),
        )
        .attribute(
            AttributeSchema::new("resource_group", AttributeType::String)
                .with_remote_name("resource_group.id"),
        )
}

pub fn vpn_gateway_connection_schema() -> ResourceSchema {
    ResourceSchema::new("vpn_gateway_connection")
        .with_description("Tunnel from a VPN gateway to a peer")
        .attribute(AttributeSchema::new("name", AttributeType::String))
        .attribute(
            AttributeSchema::new("vpn_gateway", AttributeType::String)
                .required()
                .with_description("ID of the parent VPN gateway"),
        )
        .attribute(AttributeSchema::new("peer_address", types::ip_address()).required())
        .attribute(AttributeSchema::new("psk", AttributeType::String).required())
        .attribute(AttributeSchema::new(
            "local_cidrs",
            AttributeType::List(Box::new(core_types::cidr())),
        ))
        .attribute(AttributeSchema::new(
            "peer_cidrs",
            AttributeType::List(Box::new(core_types::cidr())),
        ))
}
