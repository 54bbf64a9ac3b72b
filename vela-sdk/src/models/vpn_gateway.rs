//! VPN gateway models
//!
//! Gateways come in two modes (policy-based and route-based) and expose
//! two members whose IPs arrive in one of several concrete shapes. Both
//! points of polymorphism are modeled as enums so every consumer has to
//! dispatch exhaustively; there is no downcast to guess wrong on.

use serde::{Deserialize, Serialize};

use super::common::{
    Href, IpAddress, ResourceIdentity, ResourceReference, ReservedIpReference, Timestamp,
};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum VpnGatewayMode {
    Policy,
    Route,
}

impl VpnGatewayMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            VpnGatewayMode::Policy => "policy",
            VpnGatewayMode::Route => "route",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum VpnGatewayStatus {
    Available,
    Deleting,
    Failed,
    Pending,
}

impl VpnGatewayStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            VpnGatewayStatus::Available => "available",
            VpnGatewayStatus::Deleting => "deleting",
            VpnGatewayStatus::Failed => "failed",
            VpnGatewayStatus::Pending => "pending",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum VpnGatewayMemberRole {
    Active,
    Standby,
}

impl VpnGatewayMemberRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            VpnGatewayMemberRole::Active => "active",
            VpnGatewayMemberRole::Standby => "standby",
        }
    }
}

/// Member IP in one of its concrete shapes. Untagged: a reserved IP
/// carries an `id` alongside the address, a floating address only the
/// address itself. Variant order matters for deserialization — the richer
/// shape is tried first.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum VpnGatewayMemberIp {
    Reserved(ReservedIpReference),
    Address(IpAddress),
}

impl VpnGatewayMemberIp {
    /// The address, whichever shape it arrived in
    pub fn address(&self) -> &str {
        match self {
            VpnGatewayMemberIp::Reserved(ip) => &ip.address,
            VpnGatewayMemberIp::Address(ip) => &ip.address,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VpnGatewayMember {
    pub role: VpnGatewayMemberRole,
    pub status: String,
    pub public_ip: VpnGatewayMemberIp,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub private_ip: Option<VpnGatewayMemberIp>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VpnGateway {
    pub id: String,
    pub href: String,
    pub crn: String,
    pub name: String,
    pub mode: VpnGatewayMode,
    pub status: VpnGatewayStatus,
    #[serde(default)]
    pub members: Vec<VpnGatewayMember>,
    pub subnet: ResourceReference,
    pub created_at: Timestamp,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_group: Option<ResourceReference>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VpnGatewayCollection {
    #[serde(default)]
    pub vpn_gateways: Vec<VpnGateway>,
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
pub struct VpnGatewayPrototype {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub subnet: ResourceIdentity,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<VpnGatewayMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_group: Option<ResourceIdentity>,
}

#[derive(Debug, Clone, Serialize, Default)]
pub struct VpnGatewayPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum VpnConnectionStatus {
    Down,
    Up,
}

impl VpnConnectionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            VpnConnectionStatus::Down => "down",
            VpnConnectionStatus::Up => "up",
        }
    }
}

/// Tunnel from a gateway to a peer. Policy-mode connections carry CIDR
/// lists; route-mode connections carry a routing protocol instead.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VpnGatewayConnection {
    pub id: String,
    pub href: String,
    pub name: String,
    pub mode: VpnGatewayMode,
    pub status: VpnConnectionStatus,
    pub peer_address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub psk: Option<String>,
    #[serde(default)]
    pub local_cidrs: Vec<String>,
    #[serde(default)]
    pub peer_cidrs: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub routing_protocol: Option<String>,
    pub created_at: Timestamp,
}

#[derive(Debug, Clone, Serialize)]
pub struct VpnGatewayConnectionPrototype {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub peer_address: String,
    pub psk: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub local_cidrs: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub peer_cidrs: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Default)]
pub struct VpnGatewayConnectionPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub peer_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub psk: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VpnGatewayConnectionCollection {
    #[serde(default)]
    pub connections: Vec<VpnGatewayConnection>,
    #[serde(default)]
    pub first: Option<Href>,
    #[serde(default)]
    pub next: Option<Href>,
    #[serde(default)]
    pub limit: Option<i64>,
    #[serde(default)]
    pub total_count: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn member_ip_deserializes_reserved_shape() {
        let json = r#"{"address": "192.0.2.10", "id": "r014-ip1", "name": "member-ip"}"#;
        let ip: VpnGatewayMemberIp = serde_json::from_str(json).unwrap();
        match ip {
            VpnGatewayMemberIp::Reserved(ref reserved) => {
                assert_eq!(reserved.id, "r014-ip1");
            }
            VpnGatewayMemberIp::Address(_) => panic!("expected reserved shape"),
        }
        assert_eq!(ip.address(), "192.0.2.10");
    }

    #[test]
    fn member_ip_deserializes_bare_address_shape() {
        let json = r#"{"address": "198.51.100.7"}"#;
        let ip: VpnGatewayMemberIp = serde_json::from_str(json).unwrap();
        assert!(matches!(ip, VpnGatewayMemberIp::Address(_)));
        assert_eq!(ip.address(), "198.51.100.7");
    }

    #[test]
    fn gateway_mode_round_trips() {
        let mode: VpnGatewayMode = serde_json::from_str("\"route\"").unwrap();
        assert_eq!(mode, VpnGatewayMode::Route);
        assert_eq!(serde_json::to_string(&mode).unwrap(), "\"route\"");
    }
}
