//! VPN gateway operations
//!
//! The gateway deletes asynchronously and holds its members until the
//! remote finishes tearing them down, so delete polls until not-found.
//! Connections are children addressed by a gatewayID/connectionID
//! composite identifier.

use vela_core::provider::{ProviderError, ProviderResult};
use vela_core::resource::{Resource, ResourceId, State, Value};
use vela_sdk::models::{
    ResourceIdentity, VpnGatewayConnectionPatch, VpnGatewayConnectionPrototype, VpnGatewayMode,
    VpnGatewayPatch, VpnGatewayPrototype,
};

use crate::ids::{composite_id, parse_composite};
use crate::{
    VpcProvider, changed_string, flatten, optional_string, require_string, string_list, waiter,
};

impl VpcProvider {
    pub(crate) async fn read_vpn_gateway(
        &self,
        resource: &Resource,
        identifier: Option<&str>,
    ) -> ProviderResult<State> {
        let id = resource.id.clone();

        let Some(identifier) = identifier else {
            return Ok(State::not_found(id));
        };

        match self.client().get_vpn_gateway(identifier).await {
            Ok(gateway) => Ok(
                State::existing(id, flatten::vpn_gateway_attributes(&gateway))
                    .with_identifier(identifier),
            ),
            Err(e) if e.is_not_found() => Ok(State::not_found(id)),
            Err(e) => Err(
                ProviderError::new(format!("Failed to get VPN gateway: {}", e)).for_resource(id),
            ),
        }
    }

    pub(crate) async fn create_vpn_gateway(&self, resource: &Resource) -> ProviderResult<State> {
        let subnet_id = require_string(resource, "subnet")?;

        let mode = match optional_string(resource, "mode").as_deref() {
            Some("policy") => Some(VpnGatewayMode::Policy),
            Some("route") => Some(VpnGatewayMode::Route),
            Some(other) => {
                return Err(ProviderError::new(format!(
                    "Invalid mode '{}': expected 'policy' or 'route'",
                    other
                ))
                .for_resource(resource.id.clone()));
            }
            None => None,
        };

        let prototype = VpnGatewayPrototype {
            name: optional_string(resource, "name"),
            subnet: ResourceIdentity::new(subnet_id),
            mode,
            resource_group: optional_string(resource, "resource_group").map(ResourceIdentity::new),
        };

        let gateway = self
            .client()
            .create_vpn_gateway(&prototype)
            .await
            .map_err(|e| {
                ProviderError::new(format!("Failed to create VPN gateway: {}", e))
                    .for_resource(resource.id.clone())
            })?;

        self.read_vpn_gateway(resource, Some(&gateway.id)).await
    }

    pub(crate) async fn update_vpn_gateway(
        &self,
        id: &ResourceId,
        identifier: &str,
        from: &State,
        to: &Resource,
    ) -> ProviderResult<State> {
        let patch = VpnGatewayPatch {
            name: changed_string(from, to, "name"),
        };

        // Mode and subnet are fixed at create time
        if patch.name.is_some() {
            self.client()
                .update_vpn_gateway(identifier, &patch)
                .await
                .map_err(|e| {
                    ProviderError::new(format!("Failed to update VPN gateway: {}", e))
                        .for_resource(id.clone())
                })?;
        }

        self.read_vpn_gateway(to, Some(identifier)).await
    }

    pub(crate) async fn delete_vpn_gateway(
        &self,
        id: &ResourceId,
        identifier: &str,
    ) -> ProviderResult<()> {
        match self.client().delete_vpn_gateway(identifier).await {
            Ok(()) => {}
            Err(e) if e.is_not_found() => return Ok(()),
            Err(e) => {
                return Err(
                    ProviderError::new(format!("Failed to delete VPN gateway: {}", e))
                        .for_resource(id.clone()),
                );
            }
        }

        tracing::debug!("waiting for VPN gateway {} to finish deleting", identifier);
        waiter::wait_until_absent(
            || self.vpn_gateway_still_present(identifier),
            self.delete_poll_interval,
            self.delete_timeout,
        )
        .await
        .map_err(|e| e.for_resource(id.clone()))
    }

    async fn vpn_gateway_still_present(&self, identifier: &str) -> ProviderResult<bool> {
        match self.client().get_vpn_gateway(identifier).await {
            Ok(_) => Ok(true),
            Err(e) if e.is_not_found() => Ok(false),
            Err(e) => Err(ProviderError::new(format!(
                "Failed to poll VPN gateway: {}",
                e
            ))),
        }
    }

    // =========================================================================
    // Connections
    // =========================================================================

    pub(crate) async fn read_vpn_gateway_connection(
        &self,
        resource: &Resource,
        identifier: Option<&str>,
    ) -> ProviderResult<State> {
        let id = resource.id.clone();

        let Some(identifier) = identifier else {
            return Ok(State::not_found(id));
        };
        let (gateway_id, connection_id) = parse_composite(identifier, &id)?;

        match self
            .client()
            .get_vpn_gateway_connection(&gateway_id, &connection_id)
            .await
        {
            Ok(connection) => {
                let mut attributes = flatten::vpn_gateway_connection_attributes(&connection);
                attributes.insert(
                    "vpn_gateway".to_string(),
                    Value::String(gateway_id.clone()),
                );
                Ok(State::existing(id, attributes).with_identifier(identifier))
            }
            Err(e) if e.is_not_found() => Ok(State::not_found(id)),
            Err(e) => Err(ProviderError::new(format!(
                "Failed to get VPN gateway connection: {}",
                e
            ))
            .for_resource(id)),
        }
    }

    pub(crate) async fn create_vpn_gateway_connection(
        &self,
        resource: &Resource,
    ) -> ProviderResult<State> {
        let gateway_id = require_string(resource, "vpn_gateway")?;
        let peer_address = require_string(resource, "peer_address")?;
        let psk = require_string(resource, "psk")?;

        let prototype = VpnGatewayConnectionPrototype {
            name: optional_string(resource, "name"),
            peer_address,
            psk,
            local_cidrs: string_list(resource, "local_cidrs"),
            peer_cidrs: string_list(resource, "peer_cidrs"),
        };

        let connection = self
            .client()
            .create_vpn_gateway_connection(&gateway_id, &prototype)
            .await
            .map_err(|e| {
                ProviderError::new(format!("Failed to create VPN gateway connection: {}", e))
                    .for_resource(resource.id.clone())
            })?;

        self.read_vpn_gateway_connection(
            resource,
            Some(&composite_id(&gateway_id, &connection.id)),
        )
        .await
    }

    pub(crate) async fn update_vpn_gateway_connection(
        &self,
        id: &ResourceId,
        identifier: &str,
        from: &State,
        to: &Resource,
    ) -> ProviderResult<State> {
        let (gateway_id, connection_id) = parse_composite(identifier, id)?;

        let patch = VpnGatewayConnectionPatch {
            name: changed_string(from, to, "name"),
            peer_address: changed_string(from, to, "peer_address"),
            psk: changed_string(from, to, "psk"),
        };

        if patch.name.is_some() || patch.peer_address.is_some() || patch.psk.is_some() {
            self.client()
                .update_vpn_gateway_connection(&gateway_id, &connection_id, &patch)
                .await
                .map_err(|e| {
                    ProviderError::new(format!(
                        "Failed to update VPN gateway connection: {}",
                        e
                    ))
                    .for_resource(id.clone())
                })?;
        }

        self.read_vpn_gateway_connection(to, Some(identifier)).await
    }

    pub(crate) async fn delete_vpn_gateway_connection(
        &self,
        id: &ResourceId,
        identifier: &str,
    ) -> ProviderResult<()> {
        let (gateway_id, connection_id) = parse_composite(identifier, id)?;

        match self
            .client()
            .delete_vpn_gateway_connection(&gateway_id, &connection_id)
            .await
        {
            Ok(()) => Ok(()),
            Err(e) if e.is_not_found() => Ok(()),
            Err(e) => Err(ProviderError::new(format!(
                "Failed to delete VPN gateway connection: {}",
                e
            ))
            .for_resource(id.clone())),
        }
    }
}
