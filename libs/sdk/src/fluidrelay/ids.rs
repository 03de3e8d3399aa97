//! Resource IDs for Fluid Relay servers and containers.

use armkit_resourceids::{define_resource_id, ResourceGroupId, Segment};

define_resource_id! {
    /// A Fluid Relay server.
    pub struct FluidRelayId("Fluid Relay") {
        subscription_id: "subscriptionId" => "Subscription",
        resource_group: "resourceGroupName" => "Resource Group Name",
        fluid_relay_server_name: "fluidRelayServerName" => "Fluid Relay Server Name",
    }
    segments = [
        Segment::static_segment("staticSubscriptions", "subscriptions"),
        Segment::subscription_id("subscriptionId"),
        Segment::static_segment("staticResourceGroups", "resourceGroups"),
        Segment::resource_group("resourceGroupName"),
        Segment::static_segment("staticProviders", "providers"),
        Segment::resource_provider("staticMicrosoftFluidRelay", "Microsoft.FluidRelay"),
        Segment::static_segment("staticFluidRelayServers", "fluidRelayServers"),
        Segment::user_specified("fluidRelayServerName", "fluidRelayServerValue"),
    ];
}

define_resource_id! {
    /// A container within a Fluid Relay server.
    pub struct FluidRelayContainerId("Fluid Relay Container") {
        subscription_id: "subscriptionId" => "Subscription",
        resource_group: "resourceGroupName" => "Resource Group Name",
        fluid_relay_server_name: "fluidRelayServerName" => "Fluid Relay Server Name",
        fluid_relay_container_name: "fluidRelayContainerName" => "Fluid Relay Container Name",
    }
    segments = [
        Segment::static_segment("staticSubscriptions", "subscriptions"),
        Segment::subscription_id("subscriptionId"),
        Segment::static_segment("staticResourceGroups", "resourceGroups"),
        Segment::resource_group("resourceGroupName"),
        Segment::static_segment("staticProviders", "providers"),
        Segment::resource_provider("staticMicrosoftFluidRelay", "Microsoft.FluidRelay"),
        Segment::static_segment("staticFluidRelayServers", "fluidRelayServers"),
        Segment::user_specified("fluidRelayServerName", "fluidRelayServerValue"),
        Segment::static_segment("staticFluidRelayContainers", "fluidRelayContainers"),
        Segment::user_specified("fluidRelayContainerName", "fluidRelayContainerValue"),
    ];
}

impl FluidRelayId {
    /// The resource group the server lives in.
    #[must_use]
    pub fn resource_group_id(&self) -> ResourceGroupId {
        ResourceGroupId::new(self.subscription_id.clone(), self.resource_group.clone())
    }

    /// The container `name` within this server.
    #[must_use]
    pub fn container(&self, name: impl Into<String>) -> FluidRelayContainerId {
        FluidRelayContainerId::new(
            self.subscription_id.clone(),
            self.resource_group.clone(),
            self.fluid_relay_server_name.clone(),
            name,
        )
    }
}

impl FluidRelayContainerId {
    /// The server this container belongs to.
    #[must_use]
    pub fn fluid_relay(&self) -> FluidRelayId {
        FluidRelayId::new(
            self.subscription_id.clone(),
            self.resource_group.clone(),
            self.fluid_relay_server_name.clone(),
        )
    }
}
