//! Instance network attachment models
//!
//! Attachments are children of a server instance; they bind a virtual
//! network interface to the instance and are addressed under the
//! instance's collection path.

use serde::{Deserialize, Serialize};

use super::common::{
    Href, LifecycleState, ResourceIdentity, ResourceReference, ReservedIpReference, Timestamp,
};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InstanceNetworkAttachment {
    pub id: String,
    pub href: String,
    pub name: String,
    /// Link speed in Mbps
    pub port_speed: i64,
    pub primary_ip: ReservedIpReference,
    pub subnet: ResourceReference,
    pub lifecycle_state: LifecycleState,
    /// "primary" or "secondary"
    #[serde(rename = "type")]
    pub attachment_type: String,
    pub created_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InstanceNetworkAttachmentCollection {
    #[serde(default)]
    pub network_attachments: Vec<InstanceNetworkAttachment>,
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
pub struct InstanceNetworkAttachmentPrototype {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Existing virtual network interface to attach
    pub virtual_network_interface: ResourceIdentity,
}

#[derive(Debug, Clone, Serialize, Default)]
pub struct InstanceNetworkAttachmentPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attachment_type_maps_reserved_word() {
        let json = r#"{
            "id": "0717-atta1",
            "href": "https://us-south.iaas.velacloud.net/v1/instances/0717-inst1/network_attachments/0717-atta1",
            "name": "eth0",
            "port_speed": 16000,
            "primary_ip": {"address": "10.0.1.4", "id": "0717-rip1"},
            "subnet": {"id": "0717-sub1"},
            "lifecycle_state": "stable",
            "type": "primary",
            "created_at": "2025-09-14T11:02:33Z"
        }"#;
        let attachment: InstanceNetworkAttachment = serde_json::from_str(json).unwrap();
        assert_eq!(attachment.attachment_type, "primary");
        assert_eq!(attachment.port_speed, 16000);
    }
}
