//! Route server operations
//!
//! The server itself deletes asynchronously, so delete polls until the
//! remote stops returning it. Peers are children addressed by a
//! serverID/peerID composite identifier.

use vela_core::provider::{ProviderError, ProviderResult};
use vela_core::resource::{Resource, ResourceId, State};
use vela_sdk::models::{
    IpAddress, ResourceIdentity, RouteServerPatch, RouteServerPeerPatch, RouteServerPeerPrototype,
    RouteServerPrototype,
};

use crate::ids::{composite_id, parse_composite};
use crate::{
    VpcProvider, changed_int, changed_string, flatten, optional_int, optional_string,
    require_int, require_string, string_list, waiter,
};

impl VpcProvider {
    pub(crate) async fn read_route_server(
        &self,
        resource: &Resource,
        identifier: Option<&str>,
    ) -> ProviderResult<State> {
        let id = resource.id.clone();

        let Some(identifier) = identifier else {
            return Ok(State::not_found(id));
        };

        match self.client().get_route_server(identifier).await {
            Ok(server) => Ok(
                State::existing(id, flatten::route_server_attributes(&server))
                    .with_identifier(identifier),
            ),
            Err(e) if e.is_not_found() => Ok(State::not_found(id)),
            Err(e) => Err(
                ProviderError::new(format!("Failed to get route server: {}", e)).for_resource(id),
            ),
        }
    }

    pub(crate) async fn create_route_server(&self, resource: &Resource) -> ProviderResult<State> {
        let vpc_id = require_string(resource, "vpc")?;

        let prototype = RouteServerPrototype {
            name: optional_string(resource, "name"),
            asn: optional_int(resource, "asn"),
            vpc: ResourceIdentity::new(vpc_id),
            security_groups: string_list(resource, "security_groups")
                .into_iter()
                .map(ResourceIdentity::new)
                .collect(),
            resource_group: optional_string(resource, "resource_group").map(ResourceIdentity::new),
        };

        let server = self
            .client()
            .create_route_server(&prototype)
            .await
            .map_err(|e| {
                ProviderError::new(format!("Failed to create route server: {}", e))
                    .for_resource(resource.id.clone())
            })?;

        tracing::debug!("created route server {}", server.id);
        self.read_route_server(resource, Some(&server.id)).await
    }

    pub(crate) async fn update_route_server(
        &self,
        id: &ResourceId,
        identifier: &str,
        from: &State,
        to: &Resource,
    ) -> ProviderResult<State> {
        let patch = RouteServerPatch {
            name: changed_string(from, to, "name"),
        };

        // The ASN is immutable; everything else tracked lives in the patch
        if patch.name.is_some() {
            self.client()
                .update_route_server(identifier, &patch)
                .await
                .map_err(|e| {
                    ProviderError::new(format!("Failed to update route server: {}", e))
                        .for_resource(id.clone())
                })?;
        }

        self.read_route_server(to, Some(identifier)).await
    }

    pub(crate) async fn delete_route_server(
        &self,
        id: &ResourceId,
        identifier: &str,
    ) -> ProviderResult<()> {
        match self.client().delete_route_server(identifier).await {
            Ok(()) => {}
            Err(e) if e.is_not_found() => return Ok(()),
            Err(e) => {
                return Err(
                    ProviderError::new(format!("Failed to delete route server: {}", e))
                        .for_resource(id.clone()),
                );
            }
        }

        tracing::debug!("waiting for route server {} to finish deleting", identifier);
        waiter::wait_until_absent(
            || self.route_server_still_present(identifier),
            self.delete_poll_interval,
            self.delete_timeout,
        )
        .await
        .map_err(|e| e.for_resource(id.clone()))
    }

    async fn route_server_still_present(&self, identifier: &str) -> ProviderResult<bool> {
        match self.client().get_route_server(identifier).await {
            Ok(_) => Ok(true),
            Err(e) if e.is_not_found() => Ok(false),
            Err(e) => Err(ProviderError::new(format!(
                "Failed to poll route server: {}",
                e
            ))),
        }
    }

    // =========================================================================
    // Peers
    // =========================================================================

    pub(crate) async fn read_route_server_peer(
        &self,
        resource: &Resource,
        identifier: Option<&str>,
    ) -> ProviderResult<State> {
        let id = resource.id.clone();

        let Some(identifier) = identifier else {
            return Ok(State::not_found(id));
        };
        let (server_id, peer_id) = parse_composite(identifier, &id)?;

        match self.client().get_route_server_peer(&server_id, &peer_id).await {
            Ok(peer) => {
                let mut attributes = flatten::route_server_peer_attributes(&peer);
                attributes.insert(
                    "route_server".to_string(),
                    vela_core::resource::Value::String(server_id.clone()),
                );
                Ok(State::existing(id, attributes).with_identifier(identifier))
            }
            Err(e) if e.is_not_found() => Ok(State::not_found(id)),
            Err(e) => Err(ProviderError::new(format!(
                "Failed to get route server peer: {}",
                e
            ))
            .for_resource(id)),
        }
    }

    pub(crate) async fn create_route_server_peer(
        &self,
        resource: &Resource,
    ) -> ProviderResult<State> {
        let server_id = require_string(resource, "route_server")?;
        let address = require_string(resource, "ip")?;
        let asn = require_int(resource, "asn")?;

        let prototype = RouteServerPeerPrototype {
            name: optional_string(resource, "name"),
            asn,
            ip: IpAddress { address },
        };

        let peer = self
            .client()
            .create_route_server_peer(&server_id, &prototype)
            .await
            .map_err(|e| {
                ProviderError::new(format!("Failed to create route server peer: {}", e))
                    .for_resource(resource.id.clone())
            })?;

        self.read_route_server_peer(resource, Some(&composite_id(&server_id, &peer.id)))
            .await
    }

    pub(crate) async fn update_route_server_peer(
        &self,
        id: &ResourceId,
        identifier: &str,
        from: &State,
        to: &Resource,
    ) -> ProviderResult<State> {
        let (server_id, peer_id) = parse_composite(identifier, id)?;

        let patch = RouteServerPeerPatch {
            name: changed_string(from, to, "name"),
            asn: changed_int(from, to, "asn"),
        };

        if patch.name.is_some() || patch.asn.is_some() {
            self.client()
                .update_route_server_peer(&server_id, &peer_id, &patch)
                .await
                .map_err(|e| {
                    ProviderError::new(format!("Failed to update route server peer: {}", e))
                        .for_resource(id.clone())
                })?;
        }

        self.read_route_server_peer(to, Some(identifier)).await
    }

    pub(crate) async fn delete_route_server_peer(
        &self,
        id: &ResourceId,
        identifier: &str,
    ) -> ProviderResult<()> {
        let (server_id, peer_id) = parse_composite(identifier, id)?;

        match self
            .client()
            .delete_route_server_peer(&server_id, &peer_id)
            .await
        {
            Ok(()) => Ok(()),
            Err(e) if e.is_not_found() => Ok(()),
            Err(e) => Err(ProviderError::new(format!(
                "Failed to delete route server peer: {}",
                e
            ))
            .for_resource(id.clone())),
        }
    }
}
