//! Instance network attachment schema definitions

use vela_core::resource::Value;
use vela_core::schema::{AttributeSchema, AttributeType, ResourceSchema};

pub fn instance_network_attachment_schema() -> ResourceSchema {
    ResourceSchema::new("instance_network_attachment")
        .with_description("Binds a virtual network interface to a server instance")
        .attribute(AttributeSchema::new("name", AttributeType::String))
        .attribute(
            AttributeSchema::new("instance", AttributeType::String)
                .required()
                .with_description("ID of the parent instance"),
        )
        .attribute(
            AttributeSchema::new("virtual_network_interface", AttributeType::String)
                .required()
                .with_remote_name("virtual_network_interface.id"),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn valid_attachment_configuration() {
        let schema = instance_network_attachment_schema();
        let mut attrs = HashMap::new();
        attrs.insert(
            "instance".to_string(),
            Value::String("0717-inst1".to_string()),
        );
        attrs.insert(
            "virtual_network_interface".to_string(),
            Value::String("0717-vni1".to_string()),
        );
        attrs.insert("name".to_string(), Value::String("eth1".to_string()));
        assert!(schema.validate(&attrs).is_ok());
    }

    #[test]
    fn attachment_requires_instance_and_interface() {
        let schema = instance_network_attachment_schema();
        let attrs = HashMap::new();
        let errors = schema.validate(&attrs).unwrap_err();
        assert_eq!(errors.len(), 2);
    }
}
