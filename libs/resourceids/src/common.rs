//! Resource IDs shared by every service package.

use crate::define_resource_id;
use crate::segment::{Segment, EXAMPLE_SCOPE};

// =============================================================================
// Subscriptions and Resource Groups
// =============================================================================

define_resource_id! {
    /// A subscription: `/subscriptions/{subscriptionId}`.
    pub struct SubscriptionId("Subscription") {
        subscription_id: "subscriptionId" => "Subscription",
    }
    segments = [
        Segment::static_segment("staticSubscriptions", "subscriptions"),
        Segment::subscription_id("subscriptionId"),
    ];
}

define_resource_id! {
    /// A resource group within a subscription.
    pub struct ResourceGroupId("Resource Group") {
        subscription_id: "subscriptionId" => "Subscription",
        resource_group_name: "resourceGroupName" => "Resource Group Name",
    }
    segments = [
        Segment::static_segment("staticSubscriptions", "subscriptions"),
        Segment::subscription_id("subscriptionId"),
        Segment::static_segment("staticResourceGroups", "resourceGroups"),
        Segment::resource_group("resourceGroupName"),
    ];
}

// =============================================================================
// Management Groups
// =============================================================================

define_resource_id! {
    /// A management group.
    pub struct ManagementGroupId("Management Group") {
        group_id: "groupId" => "Group",
    }
    segments = [
        Segment::static_segment("staticProviders", "providers"),
        Segment::resource_provider("staticMicrosoftManagement", "Microsoft.Management"),
        Segment::static_segment("staticManagementGroups", "managementGroups"),
        Segment::user_specified("groupId", "groupIdValue"),
    ];
}

// =============================================================================
// Scopes
// =============================================================================

define_resource_id! {
    /// Any non-empty path a scoped resource can be attached under.
    pub struct ScopeId("Scope") {
        scope: "scope" => "Scope",
    }
    segments = [
        Segment::scope("scope", EXAMPLE_SCOPE),
    ];
}

impl SubscriptionId {
    /// The resource group `name` within this subscription.
    #[must_use]
    pub fn resource_group(&self, name: impl Into<String>) -> ResourceGroupId {
        ResourceGroupId::new(self.subscription_id.clone(), name)
    }
}

impl ResourceGroupId {
    /// The subscription this resource group belongs to.
    #[must_use]
    pub fn subscription(&self) -> SubscriptionId {
        SubscriptionId::new(self.subscription_id.clone())
    }
}

impl From<SubscriptionId> for ScopeId {
    fn from(id: SubscriptionId) -> Self {
        ScopeId::new(id.id())
    }
}

impl From<ResourceGroupId> for ScopeId {
    fn from(id: ResourceGroupId) -> Self {
        ScopeId::new(id.id())
    }
}

impl From<ManagementGroupId> for ScopeId {
    fn from(id: ManagementGroupId) -> Self {
        ScopeId::new(id.id())
    }
}

// =============================================================================
// Tests
// =============================================================================
