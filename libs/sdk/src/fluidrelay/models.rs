//! JSON models for the Fluid Relay API.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::enums::{
    CmkIdentityType, CreatedByType, KeyName, ProvisioningState, ResourceIdentityType, StorageSku,
};
use super::ids::{FluidRelayContainerId, FluidRelayId};
use crate::error::SdkError;

// =============================================================================
// Servers
// =============================================================================

/// A Fluid Relay server.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FluidRelayServer {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<String>,

    pub location: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<HashMap<String, String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identity: Option<Identity>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<FluidRelayServerProperties>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system_data: Option<SystemData>,
}

impl FluidRelayServer {
    /// Parses the `id` returned by the API, tolerating inconsistent casing.
    pub fn parsed_id(&self) -> Result<Option<FluidRelayId>, SdkError> {
        let id = self
            .id
            .as_deref()
            .map(FluidRelayId::parse_insensitively)
            .transpose()?;
        Ok(id)
    }

    /// The provisioning state, if the API reported one.
    pub fn provisioning_state(&self) -> Option<&ProvisioningState> {
        self.properties.as_ref()?.provisioning_state.as_ref()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FluidRelayServerProperties {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frs_tenant_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fluid_relay_endpoints: Option<FluidRelayEndpoints>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provisioning_state: Option<ProvisioningState>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub encryption: Option<EncryptionProperties>,

    /// Only settable at creation time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storagesku: Option<StorageSku>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FluidRelayEndpoints {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub orderer_endpoints: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage_endpoints: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_endpoints: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EncryptionProperties {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_managed_key_encryption: Option<CustomerManagedKeyEncryptionProperties>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerManagedKeyEncryptionProperties {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_encryption_key_identity: Option<KeyEncryptionKeyIdentity>,

    /// Versionless Key Vault key URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_encryption_key_url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyEncryptionKeyIdentity {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identity_type: Option<CmkIdentityType>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_assigned_identity_resource_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub principal_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tenant_id: Option<String>,

    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub identity_type: Option<ResourceIdentityType>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_assigned_identities: Option<HashMap<String, UserAssignedIdentity>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserAssignedIdentity {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub principal_id: Option<String>,
}

/// Creation and modification metadata.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by_type: Option<CreatedByType>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_modified_by: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_modified_by_type: Option<CreatedByType>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_modified_at: Option<DateTime<Utc>>,
}

/// A partial update to a Fluid Relay server.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FluidRelayServerUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identity: Option<Identity>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<FluidRelayServerUpdateProperties>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<HashMap<String, String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FluidRelayServerUpdateProperties {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub encryption: Option<EncryptionProperties>,
}

// =============================================================================
// Keys
// =============================================================================

/// The primary and secondary keys of a server.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FluidRelayServerKeys {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key1: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key2: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegenerateKeyRequest {
    pub key_name: KeyName,
}

// =============================================================================
// Containers
// =============================================================================

/// A container within a Fluid Relay server.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FluidRelayContainer {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<FluidRelayContainerProperties>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system_data: Option<SystemData>,
}

impl FluidRelayContainer {
    /// Parses the `id` returned by the API, tolerating inconsistent casing.
    pub fn parsed_id(&self) -> Result<Option<FluidRelayContainerId>, SdkError> {
        let id = self
            .id
            .as_deref()
            .map(FluidRelayContainerId::parse_insensitively)
            .transpose()?;
        Ok(id)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FluidRelayContainerProperties {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frs_tenant_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frs_container_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provisioning_state: Option<ProvisioningState>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creation_time: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_access_time: Option<DateTime<Utc>>,
}
