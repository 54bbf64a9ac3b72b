//! VPC client
//!
//! Typed operations over the HTTP plumbing, one method per API call.
//! Collection operations return a single [`Page`]; callers that want the
//! whole collection drive them through [`crate::paging::list_all`].

use serde_json::to_value;

use crate::auth::Authenticator;
use crate::config::Config;
use crate::error::Result;
use crate::http::HttpClient;
use crate::models::*;
use crate::paging::{Page, next_start_token};

fn start_query<'a>(start: Option<&'a str>) -> Vec<(&'static str, &'a str)> {
    match start {
        Some(token) => vec![("start", token)],
        None => vec![],
    }
}

/// Client handle for one regional VPC endpoint. Cheap to clone; treated
/// as read-only after construction.
#[derive(Clone)]
pub struct VpcClient {
    http: HttpClient,
}

impl VpcClient {
    pub fn new(config: Config, auth: Authenticator) -> Result<Self> {
        Ok(Self {
            http: HttpClient::new(config, auth)?,
        })
    }

    pub fn config(&self) -> &Config {
        self.http.config()
    }

    // =========================================================================
    // Route servers
    // =========================================================================

    pub async fn list_route_servers(&self, start: Option<&str>) -> Result<Page<RouteServer>> {
        let value = self.http.get("/route_servers", &start_query(start)).await?;
        let collection: RouteServerCollection = serde_json::from_value(value)?;
        Ok(Page {
            items: collection.route_servers,
            next_start: next_start_token(collection.next.as_ref()),
            total_count: collection.total_count,
        })
    }

    pub async fn get_route_server(&self, id: &str) -> Result<RouteServer> {
        let value = self.http.get(&format!("/route_servers/{}", id), &[]).await?;
        Ok(serde_json::from_value(value)?)
    }

    pub async fn create_route_server(
        &self,
        prototype: &RouteServerPrototype,
    ) -> Result<RouteServer> {
        let value = self.http.post("/route_servers", &to_value(prototype)?).await?;
        Ok(serde_json::from_value(value)?)
    }

    pub async fn update_route_server(
        &self,
        id: &str,
        patch: &RouteServerPatch,
    ) -> Result<RouteServer> {
        let value = self
            .http
            .patch(&format!("/route_servers/{}", id), &to_value(patch)?)
            .await?;
        Ok(serde_json::from_value(value)?)
    }

    pub async fn delete_route_server(&self, id: &str) -> Result<()> {
        self.http.delete(&format!("/route_servers/{}", id)).await?;
        Ok(())
    }

    // =========================================================================
    // Route server peers
    // =========================================================================

    pub async fn list_route_server_peers(
        &self,
        server_id: &str,
        start: Option<&str>,
    ) -> Result<Page<RouteServerPeer>> {
        let value = self
            .http
            .get(
                &format!("/route_servers/{}/peers", server_id),
                &start_query(start),
            )
            .await?;
        let collection: RouteServerPeerCollection = serde_json::from_value(value)?;
        Ok(Page {
            items: collection.peers,
            next_start: next_start_token(collection.next.as_ref()),
            total_count: collection.total_count,
        })
    }

    pub async fn get_route_server_peer(
        &self,
        server_id: &str,
        id: &str,
    ) -> Result<RouteServerPeer> {
        let value = self
            .http
            .get(&format!("/route_servers/{}/peers/{}", server_id, id), &[])
            .await?;
        Ok(serde_json::from_value(value)?)
    }

    pub async fn create_route_server_peer(
        &self,
        server_id: &str,
        prototype: &RouteServerPeerPrototype,
    ) -> Result<RouteServerPeer> {
        let value = self
            .http
            .post(
                &format!("/route_servers/{}/peers", server_id),
                &to_value(prototype)?,
            )
            .await?;
        Ok(serde_json::from_value(value)?)
    }

    pub async fn update_route_server_peer(
        &self,
        server_id: &str,
        id: &str,
        patch: &RouteServerPeerPatch,
    ) -> Result<RouteServerPeer> {
        let value = self
            .http
            .patch(
                &format!("/route_servers/{}/peers/{}", server_id, id),
                &to_value(patch)?,
            )
            .await?;
        Ok(serde_json::from_value(value)?)
    }

    pub async fn delete_route_server_peer(&self, server_id: &str, id: &str) -> Result<()> {
        self.http
            .delete(&format!("/route_servers/{}/peers/{}", server_id, id))
            .await?;
        Ok(())
    }

    // =========================================================================
    // Cluster networks
    // =========================================================================

    pub async fn list_cluster_networks(&self, start: Option<&str>) -> Result<Page<ClusterNetwork>> {
        let value = self
            .http
            .get("/cluster_networks", &start_query(start))
            .await?;
        let collection: ClusterNetworkCollection = serde_json::from_value(value)?;
        Ok(Page {
            items: collection.cluster_networks,
            next_start: next_start_token(collection.next.as_ref()),
            total_count: collection.total_count,
        })
    }

    pub async fn get_cluster_network(&self, id: &str) -> Result<ClusterNetwork> {
        let value = self
            .http
            .get(&format!("/cluster_networks/{}", id), &[])
            .await?;
        Ok(serde_json::from_value(value)?)
    }

    pub async fn create_cluster_network(
        &self,
        prototype: &ClusterNetworkPrototype,
    ) -> Result<ClusterNetwork> {
        let value = self
            .http
            .post("/cluster_networks", &to_value(prototype)?)
            .await?;
        Ok(serde_json::from_value(value)?)
    }

    pub async fn update_cluster_network(
        &self,
        id: &str,
        patch: &ClusterNetworkPatch,
    ) -> Result<ClusterNetwork> {
        let value = self
            .http
            .patch(&format!("/cluster_networks/{}", id), &to_value(patch)?)
            .await?;
        Ok(serde_json::from_value(value)?)
    }

    pub async fn delete_cluster_network(&self, id: &str) -> Result<()> {
        self.http
            .delete(&format!("/cluster_networks/{}", id))
            .await?;
        Ok(())
    }

    // =========================================================================
    // Cluster network subnets
    // =========================================================================

    pub async fn list_cluster_network_subnets(
        &self,
        network_id: &str,
        start: Option<&str>,
    ) -> Result<Page<ClusterNetworkSubnet>> {
        let value = self
            .http
            .get(
                &format!("/cluster_networks/{}/subnets", network_id),
                &start_query(start),
            )
            .await?;
        let collection: ClusterNetworkSubnetCollection = serde_json::from_value(value)?;
        Ok(Page {
            items: collection.subnets,
            next_start: next_start_token(collection.next.as_ref()),
            total_count: collection.total_count,
        })
    }

    pub async fn get_cluster_network_subnet(
        &self,
        network_id: &str,
        id: &str,
    ) -> Result<ClusterNetworkSubnet> {
        let value = self
            .http
            .get(
                &format!("/cluster_networks/{}/subnets/{}", network_id, id),
                &[],
            )
            .await?;
        Ok(serde_json::from_value(value)?)
    }

    pub async fn create_cluster_network_subnet(
        &self,
        network_id: &str,
        prototype: &ClusterNetworkSubnetPrototype,
    ) -> Result<ClusterNetworkSubnet> {
        let value = self
            .http
            .post(
                &format!("/cluster_networks/{}/subnets", network_id),
                &to_value(prototype)?,
            )
            .await?;
        Ok(serde_json::from_value(value)?)
    }

    pub async fn update_cluster_network_subnet(
        &self,
        network_id: &str,
        id: &str,
        patch: &ClusterNetworkSubnetPatch,
    ) -> Result<ClusterNetworkSubnet> {
        let value = self
            .http
            .patch(
                &format!("/cluster_networks/{}/subnets/{}", network_id, id),
                &to_value(patch)?,
            )
            .await?;
        Ok(serde_json::from_value(value)?)
    }

    pub async fn delete_cluster_network_subnet(&self, network_id: &str, id: &str) -> Result<()> {
        self.http
            .delete(&format!("/cluster_networks/{}/subnets/{}", network_id, id))
            .await?;
        Ok(())
    }

    // =========================================================================
    // File shares
    // =========================================================================

    pub async fn list_shares(&self, start: Option<&str>) -> Result<Page<Share>> {
        let value = self.http.get("/shares", &start_query(start)).await?;
        let collection: ShareCollection = serde_json::from_value(value)?;
        Ok(Page {
            items: collection.shares,
            next_start: next_start_token(collection.next.as_ref()),
            total_count: collection.total_count,
        })
    }

    pub async fn get_share(&self, id: &str) -> Result<Share> {
        let value = self.http.get(&format!("/shares/{}", id), &[]).await?;
        Ok(serde_json::from_value(value)?)
    }

    pub async fn create_share(&self, prototype: &SharePrototype) -> Result<Share> {
        let value = self.http.post("/shares", &to_value(prototype)?).await?;
        Ok(serde_json::from_value(value)?)
    }

    pub async fn update_share(&self, id: &str, patch: &SharePatch) -> Result<Share> {
        let value = self
            .http
            .patch(&format!("/shares/{}", id), &to_value(patch)?)
            .await?;
        Ok(serde_json::from_value(value)?)
    }

    pub async fn delete_share(&self, id: &str) -> Result<()> {
        self.http.delete(&format!("/shares/{}", id)).await?;
        Ok(())
    }

    // =========================================================================
    // VPN gateways
    // =========================================================================

    pub async fn list_vpn_gateways(&self, start: Option<&str>) -> Result<Page<VpnGateway>> {
        let value = self.http.get("/vpn_gateways", &start_query(start)).await?;
        let collection: VpnGatewayCollection = serde_json::from_value(value)?;
        Ok(Page {
            items: collection.vpn_gateways,
            next_start: next_start_token(collection.next.as_ref()),
            total_count: collection.total_count,
        })
    }

    pub async fn get_vpn_gateway(&self, id: &str) -> Result<VpnGateway> {
        let value = self.http.get(&format!("/vpn_gateways/{}", id), &[]).await?;
        Ok(serde_json::from_value(value)?)
    }

    pub async fn create_vpn_gateway(&self, prototype: &VpnGatewayPrototype) -> Result<VpnGateway> {
        let value = self.http.post("/vpn_gateways", &to_value(prototype)?).await?;
        Ok(serde_json::from_value(value)?)
    }

    pub async fn update_vpn_gateway(
        &self,
        id: &str,
        patch: &VpnGatewayPatch,
    ) -> Result<VpnGateway> {
        let value = self
            .http
            .patch(&format!("/vpn_gateways/{}", id), &to_value(patch)?)
            .await?;
        Ok(serde_json::from_value(value)?)
    }

    pub async fn delete_vpn_gateway(&self, id: &str) -> Result<()> {
        self.http.delete(&format!("/vpn_gateways/{}", id)).await?;
        Ok(())
    }

    // =========================================================================
    // VPN gateway connections
    // =========================================================================

    pub async fn list_vpn_gateway_connections(
        &self,
        gateway_id: &str,
        start: Option<&str>,
    ) -> Result<Page<VpnGatewayConnection>> {
        let value = self
            .http
            .get(
                &format!("/vpn_gateways/{}/connections", gateway_id),
                &start_query(start),
            )
            .await?;
        let collection: VpnGatewayConnectionCollection = serde_json::from_value(value)?;
        Ok(Page {
            items: collection.connections,
            next_start: next_start_token(collection.next.as_ref()),
            total_count: collection.total_count,
        })
    }

    pub async fn get_vpn_gateway_connection(
        &self,
        gateway_id: &str,
        id: &str,
    ) -> Result<VpnGatewayConnection> {
        let value = self
            .http
            .get(
                &format!("/vpn_gateways/{}/connections/{}", gateway_id, id),
                &[],
            )
            .await?;
        Ok(serde_json::from_value(value)?)
    }

    pub async fn create_vpn_gateway_connection(
        &self,
        gateway_id: &str,
        prototype: &VpnGatewayConnectionPrototype,
    ) -> Result<VpnGatewayConnection> {
        let value = self
            .http
            .post(
                &format!("/vpn_gateways/{}/connections", gateway_id),
                &to_value(prototype)?,
            )
            .await?;
        Ok(serde_json::from_value(value)?)
    }

    pub async fn update_vpn_gateway_connection(
        &self,
        gateway_id: &str,
        id: &str,
        patch: &VpnGatewayConnectionPatch,
    ) -> Result<VpnGatewayConnection> {
        let value = self
            .http
            .patch(
                &format!("/vpn_gateways/{}/connections/{}", gateway_id, id),
                &to_value(patch)?,
            )
            .await?;
        Ok(serde_json::from_value(value)?)
    }

    pub async fn delete_vpn_gateway_connection(&self, gateway_id: &str, id: &str) -> Result<()> {
        self.http
            .delete(&format!("/vpn_gateways/{}/connections/{}", gateway_id, id))
            .await?;
        Ok(())
    }

    // =========================================================================
    // Instance network attachments
    // =========================================================================

    pub async fn list_instance_network_attachments(
        &self,
        instance_id: &str,
        start: Option<&str>,
    ) -> Result<Page<InstanceNetworkAttachment>> {
        let value = self
            .http
            .get(
                &format!("/instances/{}/network_attachments", instance_id),
                &start_query(start),
            )
            .await?;
        let collection: InstanceNetworkAttachmentCollection = serde_json::from_value(value)?;
        Ok(Page {
            items: collection.network_attachments,
            next_start: next_start_token(collection.next.as_ref()),
            total_count: collection.total_count,
        })
    }

    pub async fn get_instance_network_attachment(
        &self,
        instance_id: &str,
        id: &str,
    ) -> Result<InstanceNetworkAttachment> {
        let value = self
            .http
            .get(
                &format!("/instances/{}/network_attachments/{}", instance_id, id),
                &[],
            )
            .await?;
        Ok(serde_json::from_value(value)?)
    }

    pub async fn create_instance_network_attachment(
        &self,
        instance_id: &str,
        prototype: &InstanceNetworkAttachmentPrototype,
    ) -> Result<InstanceNetworkAttachment> {
        let value = self
            .http
            .post(
                &format!("/instances/{}/network_attachments", instance_id),
                &to_value(prototype)?,
            )
            .await?;
        Ok(serde_json::from_value(value)?)
    }

    pub async fn update_instance_network_attachment(
        &self,
        instance_id: &str,
        id: &str,
        patch: &InstanceNetworkAttachmentPatch,
    ) -> Result<InstanceNetworkAttachment> {
        let value = self
            .http
            .patch(
                &format!("/instances/{}/network_attachments/{}", instance_id, id),
                &to_value(patch)?,
            )
            .await?;
        Ok(serde_json::from_value(value)?)
    }

    pub async fn delete_instance_network_attachment(
        &self,
        instance_id: &str,
        id: &str,
    ) -> Result<()> {
        self.http
            .delete(&format!(
                "/instances/{}/network_attachments/{}",
                instance_id, id
            ))
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_query_builds_pairs() {
        assert!(start_query(None).is_empty());
        assert_eq!(start_query(Some("abc")), vec![("start", "abc")]);
    }
}
