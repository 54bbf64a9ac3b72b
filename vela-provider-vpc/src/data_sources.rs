//! Read-only collection data sources
//!
//! Each data source lists its whole collection through the paging loop,
//! flattens every item, and commits the aggregate under a stable
//! identifier derived from the region-qualified collection path.

use std::collections::HashMap;

use vela_core::provider::{ProviderError, ProviderResult};
use vela_core::resource::{Resource, State, Value};
use vela_sdk::paging::list_all;

use crate::{VpcProvider, flatten, require_string};

impl VpcProvider {
    pub(crate) async fn read_route_servers(&self, resource: &Resource) -> ProviderResult<State> {
        let client = self.client().clone();
        let servers = list_all(|start| {
            let client = client.clone();
            async move { client.list_route_servers(start.as_deref()).await }
        })
        .await
        .map_err(|e| {
            ProviderError::new(format!("Failed to list route servers: {}", e))
                .for_resource(resource.id.clone())
        })?;

        let mut attributes = HashMap::new();
        attributes.insert(
            "route_servers".to_string(),
            Value::List(
                servers
                    .iter()
                    .map(|server| Value::Map(flatten::route_server_attributes(server)))
                    .collect(),
            ),
        );
        attributes.insert("total_count".to_string(), Value::Int(servers.len() as i64));

        Ok(State::existing(resource.id.clone(), attributes)
            .with_identifier(format!("{}/route_servers", self.region())))
    }

    pub(crate) async fn read_cluster_networks(&self, resource: &Resource) -> ProviderResult<State> {
        let client = self.client().clone();
        let networks = list_all(|start| {
            let client = client.clone();
            async move { client.list_cluster_networks(start.as_deref()).await }
        })
        .await
        .map_err(|e| {
            ProviderError::new(format!("Failed to list cluster networks: {}", e))
                .for_resource(resource.id.clone())
        })?;

        let mut attributes = HashMap::new();
        attributes.insert(
            "cluster_networks".to_string(),
            Value::List(
                networks
                    .iter()
                    .map(|network| Value::Map(flatten::cluster_network_attributes(network)))
                    .collect(),
            ),
        );
        attributes.insert("total_count".to_string(), Value::Int(networks.len() as i64));

        Ok(State::existing(resource.id.clone(), attributes)
            .with_identifier(format!("{}/cluster_networks", self.region())))
    }

    pub(crate) async fn read_shares(&self, resource: &Resource) -> ProviderResult<State> {
        let client = self.client().clone();
        let shares = list_all(|start| {
            let client = client.clone();
            async move { client.list_shares(start.as_deref()).await }
        })
        .await
        .map_err(|e| {
            ProviderError::new(format!("Failed to list shares: {}", e))
                .for_resource(resource.id.clone())
        })?;

        let mut attributes = HashMap::new();
        attributes.insert(
            "shares".to_string(),
            Value::List(
                shares
                    .iter()
                    .map(|share| Value::Map(flatten::share_attributes(share)))
                    .collect(),
            ),
        );
        attributes.insert("total_count".to_string(), Value::Int(shares.len() as i64));

        Ok(State::existing(resource.id.clone(), attributes)
            .with_identifier(format!("{}/shares", self.region())))
    }

    pub(crate) async fn read_vpn_gateways(&self, resource: &Resource) -> ProviderResult<State> {
        let client = self.client().clone();
        let gateways = list_all(|start| {
            let client = client.clone();
            async move { client.list_vpn_gateways(start.as_deref()).await }
        })
        .await
        .map_err(|e| {
            ProviderError::new(format!("Failed to list VPN gateways: {}", e))
                .for_resource(resource.id.clone())
        })?;

        let mut attributes = HashMap::new();
        attributes.insert(
            "vpn_gateways".to_string(),
            Value::List(
                gateways
                    .iter()
                    .map(|gateway| Value::Map(flatten::vpn_gateway_attributes(gateway)))
                    .collect(),
            ),
        );
        attributes.insert("total_count".to_string(), Value::Int(gateways.len() as i64));

        Ok(State::existing(resource.id.clone(), attributes)
            .with_identifier(format!("{}/vpn_gateways", self.region())))
    }

    pub(crate) async fn read_instance_network_attachments(
        &self,
        resource: &Resource,
    ) -> ProviderResult<State> {
        let instance_id = require_string(resource, "instance")?;

        let client = self.client().clone();
        let attachments = {
            let instance_id = instance_id.clone();
            list_all(move |start| {
                let client = client.clone();
                let instance_id = instance_id.clone();
                async move {
                    client
                        .list_instance_network_attachments(&instance_id, start.as_deref())
                        .await
                }
            })
            .await
            .map_err(|e| {
                ProviderError::new(format!(
                    "Failed to list instance network attachments: {}",
                    e
                ))
                .for_resource(resource.id.clone())
            })?
        };

        let mut attributes = HashMap::new();
        attributes.insert("instance".to_string(), Value::String(instance_id.clone()));
        attributes.insert(
            "network_attachments".to_string(),
            Value::List(
                attachments
                    .iter()
                    .map(|attachment| {
                        Value::Map(flatten::instance_network_attachment_attributes(attachment))
                    })
                    .collect(),
            ),
        );
        attributes.insert(
            "total_count".to_string(),
            Value::Int(attachments.len() as i64),
        );

        Ok(State::existing(resource.id.clone(), attributes).with_identifier(format!(
            "{}/instances/{}/network_attachments",
            self.region(),
            instance_id
        )))
    }
}
