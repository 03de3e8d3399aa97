//! String enums used by the Fluid Relay models.

use crate::define_string_enum;

define_string_enum! {
    /// Provisioning state of a Fluid Relay resource.
    pub enum ProvisioningState {
        Canceled => "Canceled",
        Failed => "Failed",
        Succeeded => "Succeeded",
    }
}

define_string_enum! {
    /// The key to regenerate.
    pub enum KeyName {
        KeyOne => "key1",
        KeyTwo => "key2",
    }
}

define_string_enum! {
    /// Storage SKU of a Fluid Relay server.
    pub enum StorageSku {
        Basic => "basic",
        Standard => "standard",
    }
}

define_string_enum! {
    /// Identity used to access the customer-managed key.
    pub enum CmkIdentityType {
        SystemAssigned => "SystemAssigned",
        UserAssigned => "UserAssigned",
    }
}

define_string_enum! {
    /// Managed identity attached to a Fluid Relay server.
    pub enum ResourceIdentityType {
        None => "None",
        SystemAssigned => "SystemAssigned",
        SystemAssignedUserAssigned => "SystemAssigned, UserAssigned",
        UserAssigned => "UserAssigned",
    }
}

define_string_enum! {
    /// The kind of principal that created or modified a resource.
    pub enum CreatedByType {
        Application => "Application",
        Key => "Key",
        ManagedIdentity => "ManagedIdentity",
        User => "User",
    }
}
