//! Cluster network schema definitions

use vela_core::resource::Value;
use vela_core::schema::{AttributeSchema, AttributeType, ResourceSchema, types as core_types};

use super::types;

pub fn cluster_network_schema() -> ResourceSchema {
    ResourceSchema::new("cluster_network")
        .with_description("Isolated high-bandwidth network for accelerator clusters")
        .attribute(AttributeSchema::new("name", AttributeType::String))
        .attribute(
            AttributeSchema::new("profile", AttributeType::String)
                .required()
                .with_remote_name("profile.name"),
        )
        .attribute(
            AttributeSchema::new("vpc", AttributeType::String)
                .required()
                .with_remote_name("vpc.id"),
        )
        .attribute(
            AttributeSchema::new("zone", types::zone())
                .required()
                .with_remote_name("zone.name"),
        )
        .attribute(AttributeSchema::new(
            "subnet_prefixes",
            AttributeType::List(Box::new(core_types::cidr())),
        ))
        .attribute(
            AttributeSchema::new("resource_group", AttributeType::String)
                .with_remote_name("resource_group.id"),
        )
}

pub fn cluster_network_subnet_schema() -> ResourceSchema {
    ResourceSchema::new("cluster_network_subnet")
        .with_description("Subnet within a cluster network")
        .attribute(AttributeSchema::new("name", AttributeType::String))
        .attribute(
            AttributeSchema::new("cluster_network", AttributeType::String)
                .required()
                .with_description("ID of the parent cluster network"),
        )
        .attribute(AttributeSchema::new("ipv4_cidr_block", core_types::cidr()))
        .attribute(AttributeSchema::new(
            "total_ipv4_address_count",
            core_types::positive_int(),
        ))
}
