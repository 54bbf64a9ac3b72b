//! Cluster network operations
//!
//! Subnets are children addressed by a networkID/subnetID composite
//! identifier.

use vela_core::provider::{ProviderError, ProviderResult};
use vela_core::resource::{Resource, ResourceId, State, Value};
use vela_sdk::models::{
    ClusterNetworkPatch, ClusterNetworkPrototype, ClusterNetworkSubnetPatch,
    ClusterNetworkSubnetPrototype, NameIdentity, ResourceIdentity, SubnetPrefix,
};

use crate::ids::{composite_id, parse_composite};
use crate::{
    VpcProvider, changed_string, flatten, optional_int, optional_string, require_string,
};

impl VpcProvider {
    pub(crate) async fn read_cluster_network(
        &self,
        resource: &Resource,
        identifier: Option<&str>,
    ) -> ProviderResult<State> {
        let id = resource.id.clone();

        let Some(identifier) = identifier else {
            return Ok(State::not_found(id));
        };

        match self.client().get_cluster_network(identifier).await {
            Ok(network) => Ok(
                State::existing(id, flatten::cluster_network_attributes(&network))
                    .with_identifier(identifier),
            ),
            Err(e) if e.is_not_found() => Ok(State::not_found(id)),
            Err(e) => Err(
                ProviderError::new(format!("Failed to get cluster network: {}", e))
                    .for_resource(id),
            ),
        }
    }

    pub(crate) async fn create_cluster_network(
        &self,
        resource: &Resource,
    ) -> ProviderResult<State> {
        let profile = require_string(resource, "profile")?;
        let vpc_id = require_string(resource, "vpc")?;
        let zone = require_string(resource, "zone")?;

        let subnet_prefixes = match resource.attributes.get("subnet_prefixes") {
            Some(Value::List(items)) => items
                .iter()
                .filter_map(|v| v.as_str())
                .map(|cidr| SubnetPrefix {
                    cidr: cidr.to_string(),
                    allocation_policy: None,
                })
                .collect(),
            _ => Vec::new(),
        };

        let prototype = ClusterNetworkPrototype {
            name: optional_string(resource, "name"),
            profile: NameIdentity::new(profile),
            vpc: ResourceIdentity::new(vpc_id),
            zone: NameIdentity::new(zone),
            subnet_prefixes,
            resource_group: optional_string(resource, "resource_group").map(ResourceIdentity::new),
        };

        let network = self
            .client()
            .create_cluster_network(&prototype)
            .await
            .map_err(|e| {
                ProviderError::new(format!("Failed to create cluster network: {}", e))
                    .for_resource(resource.id.clone())
            })?;

        self.read_cluster_network(resource, Some(&network.id)).await
    }

    pub(crate) async fn update_cluster_network(
        &self,
        id: &ResourceId,
        identifier: &str,
        from: &State,
        to: &Resource,
    ) -> ProviderResult<State> {
        let patch = ClusterNetworkPatch {
            name: changed_string(from, to, "name"),
        };

        // Profile, VPC, and zone are immutable; only the name is tracked
        if patch.name.is_some() {
            self.client()
                .update_cluster_network(identifier, &patch)
                .await
                .map_err(|e| {
                    ProviderError::new(format!("Failed to update cluster network: {}", e))
                        .for_resource(id.clone())
                })?;
        }

        self.read_cluster_network(to, Some(identifier)).await
    }

    pub(crate) async fn delete_cluster_network(
        &self,
        id: &ResourceId,
        identifier: &str,
    ) -> ProviderResult<()> {
        match self.client().delete_cluster_network(identifier).await {
            Ok(()) => Ok(()),
            Err(e) if e.is_not_found() => Ok(()),
            Err(e) => Err(
                ProviderError::new(format!("Failed to delete cluster network: {}", e))
                    .for_resource(id.clone()),
            ),
        }
    }

    // =========================================================================
    // Subnets
    // =========================================================================

    pub(crate) async fn read_cluster_network_subnet(
        &self,
        resource: &Resource,
        identifier: Option<&str>,
    ) -> ProviderResult<State> {
        let id = resource.id.clone();

        let Some(identifier) = identifier else {
            return Ok(State::not_found(id));
        };
        let (network_id, subnet_id) = parse_composite(identifier, &id)?;

        match self
            .client()
            .get_cluster_network_subnet(&network_id, &subnet_id)
            .await
        {
            Ok(subnet) => {
                let mut attributes = flatten::cluster_network_subnet_attributes(&subnet);
                attributes.insert(
                    "cluster_network".to_string(),
                    Value::String(network_id.clone()),
                );
                Ok(State::existing(id, attributes).with_identifier(identifier))
            }
            Err(e) if e.is_not_found() => Ok(State::not_found(id)),
            Err(e) => Err(ProviderError::new(format!(
                "Failed to get cluster network subnet: {}",
                e
            ))
            .for_resource(id)),
        }
    }

    pub(crate) async fn create_cluster_network_subnet(
        &self,
        resource: &Resource,
    ) -> ProviderResult<State> {
        let network_id = require_string(resource, "cluster_network")?;

        let prototype = ClusterNetworkSubnetPrototype {
            name: optional_string(resource, "name"),
            ipv4_cidr_block: optional_string(resource, "ipv4_cidr_block"),
            total_ipv4_address_count: optional_int(resource, "total_ipv4_address_count"),
        };

        if prototype.ipv4_cidr_block.is_some() && prototype.total_ipv4_address_count.is_some() {
            return Err(ProviderError::new(
                "Only one of 'ipv4_cidr_block' and 'total_ipv4_address_count' may be set",
            )
            .for_resource(resource.id.clone()));
        }

        let subnet = self
            .client()
            .create_cluster_network_subnet(&network_id, &prototype)
            .await
            .map_err(|e| {
                ProviderError::new(format!("Failed to create cluster network subnet: {}", e))
                    .for_resource(resource.id.clone())
            })?;

        self.read_cluster_network_subnet(resource, Some(&composite_id(&network_id, &subnet.id)))
            .await
    }

    pub(crate) async fn update_cluster_network_subnet(
        &self,
        id: &ResourceId,
        identifier: &str,
        from: &State,
        to: &Resource,
    ) -> ProviderResult<State> {
        let (network_id, subnet_id) = parse_composite(identifier, id)?;

        let patch = ClusterNetworkSubnetPatch {
            name: changed_string(from, to, "name"),
        };

        if patch.name.is_some() {
            self.client()
                .update_cluster_network_subnet(&network_id, &subnet_id, &patch)
                .await
                .map_err(|e| {
                    ProviderError::new(format!(
                        "Failed to update cluster network subnet: {}",
                        e
                    ))
                    .for_resource(id.clone())
                })?;
        }

        self.read_cluster_network_subnet(to, Some(identifier)).await
    }

    pub(crate) async fn delete_cluster_network_subnet(
        &self,
        id: &ResourceId,
        identifier: &str,
    ) -> ProviderResult<()> {
        let (network_id, subnet_id) = parse_composite(identifier, id)?;

        match self
            .client()
            .delete_cluster_network_subnet(&network_id, &subnet_id)
            .await
        {
            Ok(()) => Ok(()),
            Err(e) if e.is_not_found() => Ok(()),
            Err(e) => Err(ProviderError::new(format!(
                "Failed to delete cluster network subnet: {}",
                e
            ))
            .for_resource(id.clone())),
        }
    }
}
