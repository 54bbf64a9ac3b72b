//! Cluster network models
//!
//! A cluster network is an isolated high-bandwidth network for accelerator
//! clusters; its subnets are carved from the declared prefixes.

use serde::{Deserialize, Serialize};

use super::common::{
    Href, LifecycleState, NameIdentity, NamedReference, ResourceIdentity, ResourceReference,
    Timestamp, ZoneReference,
};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SubnetPrefix {
    pub cidr: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allocation_policy: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClusterNetwork {
    pub id: String,
    pub href: String,
    pub crn: String,
    pub name: String,
    pub lifecycle_state: LifecycleState,
    pub created_at: Timestamp,
    pub profile: NamedReference,
    #[serde(default)]
    pub subnet_prefixes: Vec<SubnetPrefix>,
    pub vpc: ResourceReference,
    pub zone: ZoneReference,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_group: Option<ResourceReference>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ClusterNetworkCollection {
    #[serde(default)]
    pub cluster_networks: Vec<ClusterNetwork>,
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
pub struct ClusterNetworkPrototype {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub profile: NameIdentity,
    pub vpc: ResourceIdentity,
    pub zone: NameIdentity,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub subnet_prefixes: Vec<SubnetPrefix>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_group: Option<ResourceIdentity>,
}

#[derive(Debug, Clone, Serialize, Default)]
pub struct ClusterNetworkPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Subnet inside a cluster network
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClusterNetworkSubnet {
    pub id: String,
    pub href: String,
    pub name: String,
    pub ip_version: String,
    pub ipv4_cidr_block: String,
    pub total_ipv4_address_count: i64,
    pub available_ipv4_address_count: i64,
    pub lifecycle_state: LifecycleState,
    pub created_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ClusterNetworkSubnetCollection {
    #[serde(default)]
    pub subnets: Vec<ClusterNetworkSubnet>,
    #[serde(default)]
    pub first: Option<Href>,
    #[serde(default)]
    pub next: Option<Href>,
    #[serde(default)]
    pub limit: Option<i64>,
    #[serde(default)]
    pub total_count: Option<i64>,
}

/// Create request; either a CIDR or an address count, not both
#[derive(Debug, Clone, Serialize, Default)]
pub struct ClusterNetworkSubnetPrototype {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ipv4_cidr_block: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_ipv4_address_count: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Default)]
pub struct ClusterNetworkSubnetPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}
