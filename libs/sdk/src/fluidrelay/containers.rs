//! Operations on Fluid Relay containers.

use super::ids::{FluidRelayContainerId, FluidRelayId};
use super::models::FluidRelayContainer;
use super::API_VERSION;
use crate::client::ArmClient;
use crate::error::SdkError;

/// Client for `Microsoft.FluidRelay/fluidRelayServers/fluidRelayContainers`.
#[derive(Debug, Clone)]
pub struct FluidRelayContainersClient {
    client: ArmClient,
}

impl FluidRelayContainersClient {
    pub fn new(client: ArmClient) -> Self {
        Self { client }
    }

    pub async fn get(&self, id: &FluidRelayContainerId) -> Result<FluidRelayContainer, SdkError> {
        self.client.get(&id.id(), API_VERSION).await
    }

    pub async fn delete(&self, id: &FluidRelayContainerId) -> Result<(), SdkError> {
        self.client.delete(&id.id(), API_VERSION).await
    }

    /// List every container in a server.
    pub async fn list_by_fluid_relay_servers(
        &self,
        id: &FluidRelayId,
    ) -> Result<Vec<FluidRelayContainer>, SdkError> {
        let path = format!("{}/fluidRelayContainers", id.id());
        self.client.list_all(&path, API_VERSION).await
    }
}
