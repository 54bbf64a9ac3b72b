//! Vela VPC Provider
//!
//! Exposes remote VPC resources — route servers and their peers, cluster
//! networks and their subnets, file shares, VPN gateways and their
//! connections, instance network attachments — as declarative resources
//! plus read-only collection data sources.
//!
//! Every handler follows the same shape: build a typed request from the
//! configuration attributes, call one SDK operation, flatten the response
//! into state. Errors are wrapped with context and returned to the engine
//! immediately; the one expected error is not-found, which reads back as
//! an absent state.

pub mod flatten;
pub mod schemas;
pub mod waiter;

mod cluster_network;
mod data_sources;
mod ids;
mod network_attachment;
mod route_server;
mod share;
mod vpn_gateway;

use std::time::Duration;

use vela_core::provider::{BoxFuture, Provider, ProviderError, ProviderResult, ResourceType};
use vela_core::resource::{Resource, ResourceId, State, Value};
use vela_sdk::auth::Authenticator;
use vela_sdk::{Config, VpcClient};

pub use ids::{composite_id, split_composite_id};

/// Route server resource type
pub struct RouteServerType;

impl ResourceType for RouteServerType {
    fn name(&self) -> &'static str {
        "route_server"
    }
}

/// Route server peer resource type
pub struct RouteServerPeerType;

impl ResourceType for RouteServerPeerType {
    fn name(&self) -> &'static str {
        "route_server_peer"
    }
}

/// Cluster network resource type
pub struct ClusterNetworkType;

impl ResourceType for ClusterNetworkType {
    fn name(&self) -> &'static str {
        "cluster_network"
    }
}

/// Cluster network subnet resource type
pub struct ClusterNetworkSubnetType;

impl ResourceType for ClusterNetworkSubnetType {
    fn name(&self) -> &'static str {
        "cluster_network_subnet"
    }
}

/// File share resource type
pub struct ShareType;

impl ResourceType for ShareType {
    fn name(&self) -> &'static str {
        "share"
    }
}

/// VPN gateway resource type
pub struct VpnGatewayType;

impl ResourceType for VpnGatewayType {
    fn name(&self) -> &'static str {
        "vpn_gateway"
    }
}

/// VPN gateway connection resource type
pub struct VpnGatewayConnectionType;

impl ResourceType for VpnGatewayConnectionType {
    fn name(&self) -> &'static str {
        "vpn_gateway_connection"
    }
}

/// Instance network attachment resource type
pub struct InstanceNetworkAttachmentType;

impl ResourceType for InstanceNetworkAttachmentType {
    fn name(&self) -> &'static str {
        "instance_network_attachment"
    }
}

/// Read-only collection data sources
pub struct RouteServersDataSource;

impl ResourceType for RouteServersDataSource {
    fn name(&self) -> &'static str {
        "route_servers"
    }

    fn is_data_source(&self) -> bool {
        true
    }
}

pub struct ClusterNetworksDataSource;

impl ResourceType for ClusterNetworksDataSource {
    fn name(&self) -> &'static str {
        "cluster_networks"
    }

    fn is_data_source(&self) -> bool {
        true
    }
}

pub struct SharesDataSource;

impl ResourceType for SharesDataSource {
    fn name(&self) -> &'static str {
        "shares"
    }

    fn is_data_source(&self) -> bool {
        true
    }
}

pub struct VpnGatewaysDataSource;

impl ResourceType for VpnGatewaysDataSource {
    fn name(&self) -> &'static str {
        "vpn_gateways"
    }

    fn is_data_source(&self) -> bool {
        true
    }
}

pub struct InstanceNetworkAttachmentsDataSource;

impl ResourceType for InstanceNetworkAttachmentsDataSource {
    fn name(&self) -> &'static str {
        "instance_network_attachments"
    }

    fn is_data_source(&self) -> bool {
        true
    }
}

/// VPC Provider
///
/// Holds the shared SDK client handle; read-only after construction.
pub struct VpcProvider {
    client: VpcClient,
    delete_poll_interval: Duration,
    delete_timeout: Duration,
}

impl VpcProvider {
    /// Create a new VpcProvider for the specified region
    pub fn new(region: &str, auth: Authenticator) -> ProviderResult<Self> {
        let client = VpcClient::new(Config::new(region), auth)
            .map_err(|e| ProviderError::new(format!("Failed to create VPC client: {}", e)))?;
        Ok(Self::with_client(client))
    }

    /// Create with a specific client (for testing)
    pub fn with_client(client: VpcClient) -> Self {
        Self {
            client,
            delete_poll_interval: waiter::DEFAULT_POLL_INTERVAL,
            delete_timeout: waiter::DEFAULT_DELETE_TIMEOUT,
        }
    }

    /// Override the delete polling cadence (used by tests)
    pub fn with_delete_poll(mut self, interval: Duration, timeout: Duration) -> Self {
        self.delete_poll_interval = interval;
        self.delete_timeout = timeout;
        self
    }

    pub(crate) fn client(&self) -> &VpcClient {
        &self.client
    }

    pub(crate) fn region(&self) -> &str {
        &self.client.config().region
    }
}

impl Provider for VpcProvider {
    fn name(&self) -> &'static str {
        "vpc"
    }

    fn resource_types(&self) -> Vec<Box<dyn ResourceType>> {
        vec![
            Box::new(RouteServerType),
            Box::new(RouteServerPeerType),
            Box::new(ClusterNetworkType),
            Box::new(ClusterNetworkSubnetType),
            Box::new(ShareType),
            Box::new(VpnGatewayType),
            Box::new(VpnGatewayConnectionType),
            Box::new(InstanceNetworkAttachmentType),
            Box::new(RouteServersDataSource),
            Box::new(ClusterNetworksDataSource),
            Box::new(SharesDataSource),
            Box::new(VpnGatewaysDataSource),
            Box::new(InstanceNetworkAttachmentsDataSource),
        ]
    }

    fn read(
        &self,
        resource: &Resource,
        identifier: Option<&str>,
    ) -> BoxFuture<'_, ProviderResult<State>> {
        let resource = resource.clone();
        let identifier = identifier.map(String::from);
        Box::pin(async move {
            let identifier = identifier.as_deref();
            match resource.id.resource_type.as_str() {
                "route_server" => self.read_route_server(&resource, identifier).await,
                "route_server_peer" => self.read_route_server_peer(&resource, identifier).await,
                "cluster_network" => self.read_cluster_network(&resource, identifier).await,
                "cluster_network_subnet" => {
                    self.read_cluster_network_subnet(&resource, identifier).await
                }
                "share" => self.read_share(&resource, identifier).await,
                "vpn_gateway" => self.read_vpn_gateway(&resource, identifier).await,
                "vpn_gateway_connection" => {
                    self.read_vpn_gateway_connection(&resource, identifier).await
                }
                "instance_network_attachment" => {
                    self.read_instance_network_attachment(&resource, identifier)
                        .await
                }
                "route_servers" => self.read_route_servers(&resource).await,
                "cluster_networks" => self.read_cluster_networks(&resource).await,
                "shares" => self.read_shares(&resource).await,
                "vpn_gateways" => self.read_vpn_gateways(&resource).await,
                "instance_network_attachments" => {
                    self.read_instance_network_attachments(&resource).await
                }
                _ => Err(ProviderError::new(format!(
                    "Unknown resource type: {}",
                    resource.id.resource_type
                ))
                .for_resource(resource.id.clone())),
            }
        })
    }

    fn create(&self, resource: &Resource) -> BoxFuture<'_, ProviderResult<State>> {
        let resource = resource.clone();
        Box::pin(async move {
            if resource.is_data_source() {
                return Err(ProviderError::new(format!(
                    "{} is a read-only data source",
                    resource.id.resource_type
                ))
                .for_resource(resource.id.clone()));
            }

            if let Some(schema) = schemas::schema_for(&resource.id.resource_type)
                && let Err(errors) = schema.validate(&resource.attributes)
            {
                let messages: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
                return Err(ProviderError::new(format!(
                    "Invalid configuration: {}",
                    messages.join("; ")
                ))
                .for_resource(resource.id.clone()));
            }

            match resource.id.resource_type.as_str() {
                "route_server" => self.create_route_server(&resource).await,
                "route_server_peer" => self.create_route_server_peer(&resource).await,
                "cluster_network" => self.create_cluster_network(&resource).await,
                "cluster_network_subnet" => self.create_cluster_network_subnet(&resource).await,
                "share" => self.create_share(&resource).await,
                "vpn_gateway" => self.create_vpn_gateway(&resource).await,
                "vpn_gateway_connection" => self.create_vpn_gateway_connection(&resource).await,
                "instance_network_attachment" => {
                    self.create_instance_network_attachment(&resource).await
                }
                _ => Err(ProviderError::new(format!(
                    "Unknown resource type: {}",
                    resource.id.resource_type
                ))
                .for_resource(resource.id.clone())),
            }
        })
    }

    fn update(
        &self,
        id: &ResourceId,
        identifier: &str,
        from: &State,
        to: &Resource,
    ) -> BoxFuture<'_, ProviderResult<State>> {
        let id = id.clone();
        let identifier = identifier.to_string();
        let from = from.clone();
        let to = to.clone();
        Box::pin(async move {
            match id.resource_type.as_str() {
                "route_server" => self.update_route_server(&id, &identifier, &from, &to).await,
                "route_server_peer" => {
                    self.update_route_server_peer(&id, &identifier, &from, &to)
                        .await
                }
                "cluster_network" => {
                    self.update_cluster_network(&id, &identifier, &from, &to)
                        .await
                }
                "cluster_network_subnet" => {
                    self.update_cluster_network_subnet(&id, &identifier, &from, &to)
                        .await
                }
                "share" => self.update_share(&id, &identifier, &from, &to).await,
                "vpn_gateway" => self.update_vpn_gateway(&id, &identifier, &from, &to).await,
                "vpn_gateway_connection" => {
                    self.update_vpn_gateway_connection(&id, &identifier, &from, &to)
                        .await
                }
                "instance_network_attachment" => {
                    self.update_instance_network_attachment(&id, &identifier, &from, &to)
                        .await
                }
                _ => Err(ProviderError::new(format!(
                    "Unknown resource type: {}",
                    id.resource_type
                ))
                .for_resource(id.clone())),
            }
        })
    }

    fn delete(&self, id: &ResourceId, identifier: &str) -> BoxFuture<'_, ProviderResult<()>> {
        let id = id.clone();
        let identifier = identifier.to_string();
        Box::pin(async move {
            match id.resource_type.as_str() {
                "route_server" => self.delete_route_server(&id, &identifier).await,
                "route_server_peer" => self.delete_route_server_peer(&id, &identifier).await,
                "cluster_network" => self.delete_cluster_network(&id, &identifier).await,
                "cluster_network_subnet" => {
                    self.delete_cluster_network_subnet(&id, &identifier).await
                }
                "share" => self.delete_share(&id, &identifier).await,
                "vpn_gateway" => self.delete_vpn_gateway(&id, &identifier).await,
                "vpn_gateway_connection" => {
                    self.delete_vpn_gateway_connection(&id, &identifier).await
                }
                "instance_network_attachment" => {
                    self.delete_instance_network_attachment(&id, &identifier).await
                }
                _ => Err(ProviderError::new(format!(
                    "Unknown resource type: {}",
                    id.resource_type
                ))
                .for_resource(id.clone())),
            }
        })
    }
}

// =============================================================================
// Attribute extraction helpers
// =============================================================================

/// Get a required string attribute from the configuration
pub(crate) fn require_string(resource: &Resource, key: &str) -> ProviderResult<String> {
    match resource.attributes.get(key) {
        Some(Value::String(s)) => Ok(s.clone()),
        _ => Err(
            ProviderError::new(format!("Attribute '{}' is required", key))
                .for_resource(resource.id.clone()),
        ),
    }
}

/// Get a required integer attribute from the configuration
pub(crate) fn require_int(resource: &Resource, key: &str) -> ProviderResult<i64> {
    match resource.attributes.get(key) {
        Some(Value::Int(n)) => Ok(*n),
        _ => Err(
            ProviderError::new(format!("Attribute '{}' is required", key))
                .for_resource(resource.id.clone()),
        ),
    }
}

pub(crate) fn optional_string(resource: &Resource, key: &str) -> Option<String> {
    match resource.attributes.get(key) {
        Some(Value::String(s)) => Some(s.clone()),
        _ => None,
    }
}

pub(crate) fn optional_int(resource: &Resource, key: &str) -> Option<i64> {
    match resource.attributes.get(key) {
        Some(Value::Int(n)) => Some(*n),
        _ => None,
    }
}

pub(crate) fn string_list(resource: &Resource, key: &str) -> Vec<String> {
    match resource.attributes.get(key) {
        Some(Value::List(items)) => items
            .iter()
            .filter_map(|v| v.as_str().map(String::from))
            .collect(),
        _ => Vec::new(),
    }
}

/// A tracked string attribute's new value, if it differs from prior state
pub(crate) fn changed_string(from: &State, to: &Resource, key: &str) -> Option<String> {
    let new = to.attributes.get(key)?.as_str()?;
    match from.attributes.get(key).and_then(Value::as_str) {
        Some(old) if old == new => None,
        _ => Some(new.to_string()),
    }
}

pub(crate) fn changed_int(from: &State, to: &Resource, key: &str) -> Option<i64> {
    let new = to.attributes.get(key)?.as_int()?;
    match from.attributes.get(key).and_then(Value::as_int) {
        Some(old) if old == new => None,
        _ => Some(new),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn require_string_reports_missing_attribute() {
        let resource = Resource::new("share", "data");
        let err = require_string(&resource, "profile").unwrap_err();
        assert!(err.to_string().contains("'profile' is required"));
    }

    #[test]
    fn changed_string_ignores_unchanged_value() {
        let mut resource = Resource::new("share", "data");
        resource
            .attributes
            .insert("name".to_string(), Value::String("data".to_string()));

        let mut attrs = std::collections::HashMap::new();
        attrs.insert("name".to_string(), Value::String("data".to_string()));
        let state = State::existing(resource.id.clone(), attrs);

        assert_eq!(changed_string(&state, &resource, "name"), None);
    }

    #[test]
    fn changed_string_detects_new_value() {
        let mut resource = Resource::new("share", "data");
        resource
            .attributes
            .insert("name".to_string(), Value::String("data-v2".to_string()));

        let mut attrs = std::collections::HashMap::new();
        attrs.insert("name".to_string(), Value::String("data".to_string()));
        let state = State::existing(resource.id.clone(), attrs);

        assert_eq!(
            changed_string(&state, &resource, "name").as_deref(),
            Some("data-v2")
        );
    }

    #[test]
    fn changed_int_treats_absent_prior_as_changed() {
        let mut resource = Resource::new("share", "data");
        resource.attributes.insert("size".to_string(), Value::Int(1000));
        let state = State::existing(resource.id.clone(), std::collections::HashMap::new());
        assert_eq!(changed_int(&state, &resource, "size"), Some(1000));
    }

    #[test]
    fn data_source_types_are_flagged() {
        assert!(RouteServersDataSource.is_data_source());
        assert!(!RouteServerType.is_data_source());
    }
}
