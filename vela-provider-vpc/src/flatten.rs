//! Flatteners - wire structs to state attributes
//!
//! Each flattener converts a nested response object into the string-keyed
//! attribute map the engine stores. Every non-absent field of the source
//! maps to exactly one key; absent optional fields are omitted. All
//! helpers accept the possibly-absent form: flattening nothing yields an
//! empty result rather than a crash, and polymorphic shapes go through an
//! exhaustive match.
//!
//! Nested objects follow the usual state convention: a sub-object becomes
//! a single-element list of maps, so an absent sub-object is an empty
//! list rather than a hole.

use std::collections::HashMap;

use vela_core::resource::Value;
use vela_sdk::models::{
    ClusterNetwork, ClusterNetworkSubnet, InstanceNetworkAttachment, NamedReference,
    ResourceReference, ReservedIpReference, RouteServer, RouteServerPeer, Share, SubnetPrefix,
    VpnGateway, VpnGatewayConnection, VpnGatewayMember, VpnGatewayMemberIp, VpnGatewayMode,
    ZoneReference,
};

fn string(s: &str) -> Value {
    Value::String(s.to_string())
}

fn single(map: HashMap<String, Value>) -> Value {
    Value::List(vec![Value::Map(map)])
}

// =============================================================================
// Reference flatteners
// =============================================================================

pub fn flatten_resource_reference(reference: Option<&ResourceReference>) -> Value {
    let Some(reference) = reference else {
        return Value::List(vec![]);
    };
    let mut map = HashMap::new();
    map.insert("id".to_string(), string(&reference.id));
    if let Some(name) = &reference.name {
        map.insert("name".to_string(), string(name));
    }
    if let Some(href) = &reference.href {
        map.insert("href".to_string(), string(href));
    }
    if let Some(crn) = &reference.crn {
        map.insert("crn".to_string(), string(crn));
    }
    single(map)
}

/// Profiles and zones are configured by bare name, so they flatten back
/// to the bare name rather than a nested reference
pub fn flatten_named_reference(reference: Option<&NamedReference>) -> Value {
    match reference {
        Some(reference) => string(&reference.name),
        None => string(""),
    }
}

pub fn flatten_zone_reference(zone: Option<&ZoneReference>) -> Value {
    match zone {
        Some(zone) => string(&zone.name),
        None => string(""),
    }
}

fn reserved_ip_map(ip: &ReservedIpReference) -> Value {
    let mut map = HashMap::new();
    map.insert("address".to_string(), string(&ip.address));
    map.insert("id".to_string(), string(&ip.id));
    if let Some(name) = &ip.name {
        map.insert("name".to_string(), string(name));
    }
    Value::Map(map)
}

pub fn flatten_reserved_ip(ip: Option<&ReservedIpReference>) -> Value {
    match ip {
        Some(ip) => Value::List(vec![reserved_ip_map(ip)]),
        None => Value::List(vec![]),
    }
}

/// Member IPs arrive in one of several concrete shapes; dispatch is
/// exhaustive so a new shape is a compile error, not a runtime crash.
pub fn flatten_member_ip(ip: Option<&VpnGatewayMemberIp>) -> Value {
    let Some(ip) = ip else {
        return Value::List(vec![]);
    };
    match ip {
        VpnGatewayMemberIp::Reserved(reserved) => flatten_reserved_ip(Some(reserved)),
        VpnGatewayMemberIp::Address(address) => {
            let mut map = HashMap::new();
            map.insert("address".to_string(), string(&address.address));
            single(map)
        }
    }
}

pub fn flatten_members(members: &[VpnGatewayMember]) -> Value {
    Value::List(
        members
            .iter()
            .map(|member| {
                let mut map = HashMap::new();
                map.insert("role".to_string(), string(member.role.as_str()));
                map.insert("status".to_string(), string(&member.status));
                map.insert(
                    "public_ip".to_string(),
                    flatten_member_ip(Some(&member.public_ip)),
                );
                if member.private_ip.is_some() {
                    map.insert(
                        "private_ip".to_string(),
                        flatten_member_ip(member.private_ip.as_ref()),
                    );
                }
                Value::Map(map)
            })
            .collect(),
    )
}

pub fn flatten_subnet_prefixes(prefixes: &[SubnetPrefix]) -> Value {
    Value::List(
        prefixes
            .iter()
            .map(|prefix| {
                let mut map = HashMap::new();
                map.insert("cidr".to_string(), string(&prefix.cidr));
                if let Some(policy) = &prefix.allocation_policy {
                    map.insert("allocation_policy".to_string(), string(policy));
                }
                Value::Map(map)
            })
            .collect(),
    )
}

fn string_list(items: &[String]) -> Value {
    Value::List(items.iter().map(|s| string(s)).collect())
}

// =============================================================================
// Resource flatteners
// =============================================================================

pub fn route_server_attributes(server: &RouteServer) -> HashMap<String, Value> {
    let mut attributes = HashMap::new();
    attributes.insert("id".to_string(), string(&server.id));
    attributes.insert("href".to_string(), string(&server.href));
    attributes.insert("crn".to_string(), string(&server.crn));
    attributes.insert("name".to_string(), string(&server.name));
    attributes.insert("asn".to_string(), Value::Int(server.asn));
    attributes.insert(
        "lifecycle_state".to_string(),
        string(server.lifecycle_state.as_str()),
    );
    attributes.insert(
        "created_at".to_string(),
        string(&server.created_at.to_rfc3339()),
    );
    if !server.ips.is_empty() {
        attributes.insert(
            "ips".to_string(),
            Value::List(server.ips.iter().map(reserved_ip_map).collect()),
        );
    }
    if !server.security_groups.is_empty() {
        attributes.insert(
            "security_groups".to_string(),
            string_list(
                &server
                    .security_groups
                    .iter()
                    .map(|sg| sg.id.clone())
                    .collect::<Vec<_>>(),
            ),
        );
    }
    attributes.insert("vpc".to_string(), flatten_resource_reference(Some(&server.vpc)));
    if server.resource_group.is_some() {
        attributes.insert(
            "resource_group".to_string(),
            flatten_resource_reference(server.resource_group.as_ref()),
        );
    }
    attributes
}

pub fn route_server_peer_attributes(peer: &RouteServerPeer) -> HashMap<String, Value> {
    let mut attributes = HashMap::new();
    attributes.insert("id".to_string(), string(&peer.id));
    attributes.insert("href".to_string(), string(&peer.href));
    attributes.insert("name".to_string(), string(&peer.name));
    attributes.insert("asn".to_string(), Value::Int(peer.asn));
    attributes.insert("ip".to_string(), string(&peer.ip.address));
    attributes.insert(
        "authentication_enabled".to_string(),
        Value::Bool(peer.authentication_enabled),
    );
    attributes.insert(
        "lifecycle_state".to_string(),
        string(peer.lifecycle_state.as_str()),
    );
    attributes.insert(
        "created_at".to_string(),
        string(&peer.created_at.to_rfc3339()),
    );
    attributes
}

pub fn cluster_network_attributes(network: &ClusterNetwork) -> HashMap<String, Value> {
    let mut attributes = HashMap::new();
    attributes.insert("id".to_string(), string(&network.id));
    attributes.insert("href".to_string(), string(&network.href));
    attributes.insert("crn".to_string(), string(&network.crn));
    attributes.insert("name".to_string(), string(&network.name));
    attributes.insert(
        "lifecycle_state".to_string(),
        string(network.lifecycle_state.as_str()),
    );
    attributes.insert(
        "created_at".to_string(),
        string(&network.created_at.to_rfc3339()),
    );
    attributes.insert(
        "profile".to_string(),
        flatten_named_reference(Some(&network.profile)),
    );
    if !network.subnet_prefixes.is_empty() {
        attributes.insert(
            "subnet_prefixes".to_string(),
            flatten_subnet_prefixes(&network.subnet_prefixes),
        );
    }
    attributes.insert(
        "vpc".to_string(),
        flatten_resource_reference(Some(&network.vpc)),
    );
    attributes.insert(
        "zone".to_string(),
        flatten_zone_reference(Some(&network.zone)),
    );
    if network.resource_group.is_some() {
        attributes.insert(
            "resource_group".to_string(),
            flatten_resource_reference(network.resource_group.as_ref()),
        );
    }
    attributes
}

pub fn cluster_network_subnet_attributes(
    subnet: &ClusterNetworkSubnet,
) -> HashMap<String, Value> {
    let mut attributes = HashMap::new();
    attributes.insert("id".to_string(), string(&subnet.id));
    attributes.insert("href".to_string(), string(&subnet.href));
    attributes.insert("name".to_string(), string(&subnet.name));
    attributes.insert("ip_version".to_string(), string(&subnet.ip_version));
    attributes.insert(
        "ipv4_cidr_block".to_string(),
        string(&subnet.ipv4_cidr_block),
    );
    attributes.insert(
        "total_ipv4_address_count".to_string(),
        Value::Int(subnet.total_ipv4_address_count),
    );
    attributes.insert(
        "available_ipv4_address_count".to_string(),
        Value::Int(subnet.available_ipv4_address_count),
    );
    attributes.insert(
        "lifecycle_state".to_string(),
        string(subnet.lifecycle_state.as_str()),
    );
    attributes.insert(
        "created_at".to_string(),
        string(&subnet.created_at.to_rfc3339()),
    );
    attributes
}

pub fn share_attributes(share: &Share) -> HashMap<String, Value> {
    let mut attributes = HashMap::new();
    attributes.insert("id".to_string(), string(&share.id));
    attributes.insert("href".to_string(), string(&share.href));
    attributes.insert("crn".to_string(), string(&share.crn));
    attributes.insert("name".to_string(), string(&share.name));
    attributes.insert("size".to_string(), Value::Int(share.size));
    if let Some(iops) = share.iops {
        attributes.insert("iops".to_string(), Value::Int(iops));
    }
    attributes.insert(
        "profile".to_string(),
        flatten_named_reference(Some(&share.profile)),
    );
    attributes.insert(
        "zone".to_string(),
        flatten_zone_reference(Some(&share.zone)),
    );
    attributes.insert("encryption".to_string(), string(&share.encryption));
    attributes.insert(
        "lifecycle_state".to_string(),
        string(share.lifecycle_state.as_str()),
    );
    attributes.insert(
        "created_at".to_string(),
        string(&share.created_at.to_rfc3339()),
    );
    if share.resource_group.is_some() {
        attributes.insert(
            "resource_group".to_string(),
            flatten_resource_reference(share.resource_group.as_ref()),
        );
    }
    attributes
}

pub fn vpn_gateway_attributes(gateway: &VpnGateway) -> HashMap<String, Value> {
    let mut attributes = HashMap::new();
    attributes.insert("id".to_string(), string(&gateway.id));
    attributes.insert("href".to_string(), string(&gateway.href));
    attributes.insert("crn".to_string(), string(&gateway.crn));
    attributes.insert("name".to_string(), string(&gateway.name));
    attributes.insert("mode".to_string(), string(gateway.mode.as_str()));
    attributes.insert("status".to_string(), string(gateway.status.as_str()));
    if !gateway.members.is_empty() {
        attributes.insert("members".to_string(), flatten_members(&gateway.members));
    }
    attributes.insert(
        "subnet".to_string(),
        flatten_resource_reference(Some(&gateway.subnet)),
    );
    attributes.insert(
        "created_at".to_string(),
        string(&gateway.created_at.to_rfc3339()),
    );
    if gateway.resource_group.is_some() {
        attributes.insert(
            "resource_group".to_string(),
            flatten_resource_reference(gateway.resource_group.as_ref()),
        );
    }
    attributes
}

pub fn vpn_gateway_connection_attributes(
    connection: &VpnGatewayConnection,
) -> HashMap<String, Value> {
    let mut attributes = HashMap::new();
    attributes.insert("id".to_string(), string(&connection.id));
    attributes.insert("href".to_string(), string(&connection.href));
    attributes.insert("name".to_string(), string(&connection.name));
    attributes.insert("mode".to_string(), string(connection.mode.as_str()));
    attributes.insert("status".to_string(), string(connection.status.as_str()));
    attributes.insert(
        "peer_address".to_string(),
        string(&connection.peer_address),
    );
    attributes.insert(
        "created_at".to_string(),
        string(&connection.created_at.to_rfc3339()),
    );

    // The two connection modes carry different fields; dispatch covers
    // both so neither can leak the other's empty shape into state.
    match connection.mode {
        VpnGatewayMode::Policy => {
            attributes.insert(
                "local_cidrs".to_string(),
                string_list(&connection.local_cidrs),
            );
            attributes.insert(
                "peer_cidrs".to_string(),
                string_list(&connection.peer_cidrs),
            );
        }
        VpnGatewayMode::Route => {
            if let Some(protocol) = &connection.routing_protocol {
                attributes.insert("routing_protocol".to_string(), string(protocol));
            }
        }
    }

    attributes
}

pub fn instance_network_attachment_attributes(
    attachment: &InstanceNetworkAttachment,
) -> HashMap<String, Value> {
    let mut attributes = HashMap::new();
    attributes.insert("id".to_string(), string(&attachment.id));
    attributes.insert("href".to_string(), string(&attachment.href));
    attributes.insert("name".to_string(), string(&attachment.name));
    attributes.insert("port_speed".to_string(), Value::Int(attachment.port_speed));
    attributes.insert(
        "primary_ip".to_string(),
        flatten_reserved_ip(Some(&attachment.primary_ip)),
    );
    attributes.insert(
        "subnet".to_string(),
        flatten_resource_reference(Some(&attachment.subnet)),
    );
    attributes.insert(
        "lifecycle_state".to_string(),
        string(attachment.lifecycle_state.as_str()),
    );
    attributes.insert("type".to_string(), string(&attachment.attachment_type));
    attributes.insert(
        "created_at".to_string(),
        string(&attachment.created_at.to_rfc3339()),
    );
    attributes
}
