//! File share schema definitions

use vela_core::resource::Value;
use vela_core::schema::{AttributeSchema, AttributeType, ResourceSchema, types as core_types};

use super::types;

pub fn share_schema() -> ResourceSchema {
    ResourceSchema::new("share")
        .with_description("Zonal file share")
        .attribute(AttributeSchema::new("name", AttributeType::String))
        .attribute(AttributeSchema::new("size", types::share_size()).required())
        .attribute(
            AttributeSchema::new("profile", AttributeType::String)
                .required()
                .with_remote_name("profile.name"),
        )
        .attribute(
            AttributeSchema::new("zone", types::zone())
                .required()
                .with_remote_name("zone.name"),
        )
        .attribute(AttributeSchema::new("iops", core_types::positive_int()))
        .attribute(
            AttributeSchema::new("resource_group", AttributeType::String)
                .with_remote_name("resource_group.id"),
        )
}
