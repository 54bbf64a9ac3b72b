//! Route server schema definitions

use vela_core::resource::Value;
use vela_core::schema::{AttributeSchema, AttributeType, ResourceSchema};

use super::types;

pub fn route_server_schema() -> ResourceSchema {
    ResourceSchema::new("route_server")
        .with_description("Dynamic route server distributing routes over BGP")
        .attribute(AttributeSchema::new("name", AttributeType::String))
        .attribute(
            AttributeSchema::new("vpc", AttributeType::String)
                .required()
                .with_remote_name("vpc.id")
                .with_description("ID of the VPC the route server serves"),
        )
        .attribute(
            AttributeSchema::new("asn", types::bgp_asn()).with_default(Value::Int(64512)),
        )
        .attribute(AttributeSchema::new(
            "security_groups",
            AttributeType::List(Box::new(AttributeType::String)),
        ))
        .attribute(
            AttributeSchema::new("resource_group", AttributeType::String)
                .with_remote_name("resource_group.id"),
        )
}

pub fn route_server_peer_schema() -> ResourceSchema {
    ResourceSchema::new("route_server_peer")
        .with_description("BGP peer attached to a route server")
        .attribute(AttributeSchema::new("name", AttributeType::String))
        .attribute(
            AttributeSchema::new("route_server", AttributeType::String)
                .required()
                .with_description("ID of the parent route server"),
        )
        .attribute(
            AttributeSchema::new("ip", types::ip_address())
                .required()
                .with_remote_name("ip.address"),
        )
        .attribute(AttributeSchema::new("asn", types::bgp_asn()).required())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn valid_route_server_configuration() {
        let schema = route_server_schema();
        let mut attrs = HashMap::new();
        attrs.insert("name".to_string(), Value::String("rs-hub".to_string()));
        attrs.insert("vpc".to_string(), Value::String("r006-vpc1".to_string()));
        attrs.insert("asn".to_string(), Value::Int(64999));
        assert!(schema.validate(&attrs).is_ok());
    }

    #[test]
    fn route_server_requires_vpc() {
        let schema = route_server_schema();
        let mut attrs = HashMap::new();
        attrs.insert("name".to_string(), Value::String("rs-hub".to_string()));
        assert!(schema.validate(&attrs).is_err());
    }

    #[test]
    fn peer_rejects_bad_ip() {
        let schema = route_server_peer_schema();
        let mut attrs = HashMap::new();
        attrs.insert(
            "route_server".to_string(),
            Value::String("r014-1".to_string()),
        );
        attrs.insert("ip".to_string(), Value::String("10.0.0".to_string()));
        attrs.insert("asn".to_string(), Value::Int(64512));
        assert!(schema.validate(&attrs).is_err());
    }
}
