//! Operations on Fluid Relay servers.

use armkit_resourceids::{ResourceGroupId, SubscriptionId};
use tracing::info;

use super::ids::FluidRelayId;
use super::models::{
    FluidRelayServer, FluidRelayServerKeys, FluidRelayServerUpdate, RegenerateKeyRequest,
};
use super::{API_VERSION, PROVIDER_PATH};
use crate::client::ArmClient;
use crate::error::SdkError;

/// Client for `Microsoft.FluidRelay/fluidRelayServers`.
#[derive(Debug, Clone)]
pub struct FluidRelayServersClient {
    client: ArmClient,
}

impl FluidRelayServersClient {
    pub fn new(client: ArmClient) -> Self {
        Self { client }
    }

    /// Get a server.
    pub async fn get(&self, id: &FluidRelayId) -> Result<FluidRelayServer, SdkError> {
        self.client.get(&id.id(), API_VERSION).await
    }

    /// Create a server, or replace an existing one.
    pub async fn create_or_update(
        &self,
        id: &FluidRelayId,
        server: &FluidRelayServer,
    ) -> Result<FluidRelayServer, SdkError> {
        info!(id = %id.id(), location = %server.location, "Creating or updating Fluid Relay server");
        self.client.put(&id.id(), API_VERSION, server).await
    }

    /// Apply a partial update to a server.
    pub async fn update(
        &self,
        id: &FluidRelayId,
        update: &FluidRelayServerUpdate,
    ) -> Result<FluidRelayServer, SdkError> {
        self.client.patch(&id.id(), API_VERSION, update).await
    }

    /// Delete a server.
    pub async fn delete(&self, id: &FluidRelayId) -> Result<(), SdkError> {
        info!(id = %id.id(), "Deleting Fluid Relay server");
        self.client.delete(&id.id(), API_VERSION).await
    }

    /// List every server in a resource group.
    pub async fn list_by_resource_group(
        &self,
        id: &ResourceGroupId,
    ) -> Result<Vec<FluidRelayServer>, SdkError> {
        let path = format!("{}{}", id.id(), PROVIDER_PATH);
        self.client.list_all(&path, API_VERSION).await
    }

    /// List every server in a subscription.
    pub async fn list_by_subscription(
        &self,
        id: &SubscriptionId,
    ) -> Result<Vec<FluidRelayServer>, SdkError> {
        let path = format!("{}{}", id.id(), PROVIDER_PATH);
        self.client.list_all(&path, API_VERSION).await
    }

    /// Fetch the primary and secondary keys.
    pub async fn list_keys(&self, id: &FluidRelayId) -> Result<FluidRelayServerKeys, SdkError> {
        let path = format!("{}/listKeys", id.id());
        self.client.post_action(&path, API_VERSION).await
    }

    /// Regenerate one key, returning both keys afterwards.
    pub async fn regenerate_key(
        &self,
        id: &FluidRelayId,
        request: &RegenerateKeyRequest,
    ) -> Result<FluidRelayServerKeys, SdkError> {
        info!(id = %id.id(), key = %request.key_name, "Regenerating Fluid Relay key");
        let path = format!("{}/regenerateKey", id.id());
        self.client.post(&path, API_VERSION, request).await
    }
}
