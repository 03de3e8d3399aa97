//! Property tests for the resource ID codec.
//!
//! Uses a child resource type declared from outside the crate, which also
//! exercises the declaration macro's paths.

use armkit_resourceids::{define_resource_id, Segment};
use proptest::prelude::*;
use rstest::rstest;
use serde_json::json;

define_resource_id! {
    /// A subnet within a virtual network.
    pub struct SubnetId("Subnet") {
        subscription_id: "subscriptionId" => "Subscription",
        resource_group_name: "resourceGroupName" => "Resource Group Name",
        virtual_network_name: "virtualNetworkName" => "Virtual Network Name",
        subnet_name: "subnetName" => "Subnet Name",
    }
    segments = [
        Segment::static_segment("staticSubscriptions", "subscriptions"),
        Segment::subscription_id("subscriptionId"),
        Segment::static_segment("staticResourceGroups", "resourceGroups"),
        Segment::resource_group("resourceGroupName"),
        Segment::static_segment("staticProviders", "providers"),
        Segment::resource_provider("staticMicrosoftNetwork", "Microsoft.Network"),
        Segment::static_segment("staticVirtualNetworks", "virtualNetworks"),
        Segment::user_specified("virtualNetworkName", "virtualNetworkValue"),
        Segment::static_segment("staticSubnets", "subnets"),
        Segment::user_specified("subnetName", "subnetValue"),
    ];
}

define_resource_id! {
    /// A role assignment attached at any scope.
    pub struct RoleAssignmentId("Role Assignment") {
        scope: "scope" => "Scope",
        role_assignment_name: "roleAssignmentName" => "Role Assignment Name",
    }
    segments = [
        Segment::scope("scope", "/subscriptions/12345678-1234-9876-4563-123456789012"),
        Segment::static_segment("staticProviders", "providers"),
        Segment::resource_provider("staticMicrosoftAuthorization", "Microsoft.Authorization"),
        Segment::static_segment("staticRoleAssignments", "roleAssignments"),
        Segment::user_specified("roleAssignmentName", "roleAssignmentValue"),
    ];
}

fn value() -> impl Strategy<Value = String> {
    "[A-Za-z0-9][A-Za-z0-9._-]{0,20}"
}

fn subnet() -> impl Strategy<Value = SubnetId> {
    (value(), value(), value(), value()).prop_map(|(s, rg, vnet, subnet)| {
        SubnetId::new(s, rg, vnet, subnet)
    })
}

/// Mix of valid subnet IDs, near misses, and arbitrary paths.
fn subnet_candidate() -> impl Strategy<Value = String> {
    prop_oneof![
        subnet().prop_map(|id| id.id()),
        subnet().prop_map(|id| id.id().replace("virtualNetworks", "virtualnetworks")),
        subnet().prop_map(|id| format!("{}/extra", id.id())),
        "(/[A-Za-z.]{0,12}){0,11}",
    ]
}

fn scope() -> impl Strategy<Value = String> {
    prop_oneof![
        value().prop_map(|s| format!("/subscriptions/{s}")),
        (value(), value()).prop_map(|(s, rg)| format!("/subscriptions/{s}/resourceGroups/{rg}")),
        value().prop_map(|mg| format!("/providers/Microsoft.Management/managementGroups/{mg}")),
    ]
}

/// Indices of literal segments within `SubnetId`'s template.
const LITERAL_INDICES: &[usize] = &[0, 2, 4, 5, 6, 8];

/// Indices of dynamic segments within `SubnetId`'s template.
const DYNAMIC_INDICES: &[usize] = &[1, 3, 7, 9];

fn replace_component(id: &str, segment_index: usize, f: impl Fn(&str) -> String) -> String {
    // Component 0 is the empty string before the leading slash.
    let mut components: Vec<String> = id.split('/').map(str::to_string).collect();
    components[segment_index + 1] = f(&components[segment_index + 1]);
    components.join("/")
}

proptest! {
    #[test]
    fn roundtrip(id in subnet()) {
        let parsed = SubnetId::parse(&id.id()).unwrap();
        prop_assert_eq!(parsed, id);
    }

    #[test]
    fn scoped_roundtrip(scope in scope(), name in value()) {
        let id = RoleAssignmentId::new(scope, name);
        let parsed = RoleAssignmentId::parse(&id.id()).unwrap();
        prop_assert_eq!(parsed, id);
    }

    #[test]
    fn strict_rejects_non_canonical_literal(
        id in subnet(),
        idx in prop::sample::select(LITERAL_INDICES),
    ) {
        let input = replace_component(&id.id(), idx, |c| c.to_uppercase());
        prop_assert!(SubnetId::parse(&input).is_err());
        let insensitive = SubnetId::parse_insensitively(&input).unwrap();
        prop_assert_eq!(insensitive, id);
    }

    #[test]
    fn empty_dynamic_segment_rejected(
        id in subnet(),
        idx in prop::sample::select(DYNAMIC_INDICES),
    ) {
        let input = replace_component(&id.id(), idx, |_| String::new());
        let err = SubnetId::parse(&input).unwrap_err();
        prop_assert!(err.is_empty_segment());
        prop_assert!(SubnetId::parse_insensitively(&input).is_err());
    }

    #[test]
    fn trailing_component_rejected(id in subnet(), extra in value()) {
        let appended = format!("{}/{}", id.id(), extra);
        prop_assert!(SubnetId::parse(&appended).is_err());

        let full = id.id();
        let truncated = full.rsplit_once('/').map(|(head, _)| head).unwrap();
        prop_assert!(SubnetId::parse(truncated).is_err());
    }

    #[test]
    fn scoped_trailing_component_rejected(scope in scope(), name in value(), extra in value()) {
        let id = RoleAssignmentId::new(scope, name);
        let appended = format!("{}/{}", id.id(), extra);
        prop_assert!(RoleAssignmentId::parse(&appended).is_err());
    }

    #[test]
    fn validate_agrees_with_parse(input in subnet_candidate()) {
        let (warnings, errors) = SubnetId::validate(&json!(input.clone()), "subnet_id");
        prop_assert!(warnings.is_empty());
        prop_assert_eq!(errors.is_empty(), SubnetId::parse(&input).is_ok());
    }

    #[test]
    fn validate_accepts_rendered_ids(id in subnet()) {
        let (_, errors) = SubnetId::validate(&json!(id.id()), "subnet_id");
        prop_assert!(errors.is_empty(), "{:?}", errors);
    }
}

#[rstest]
#[case::lowercase_provider(
    "/subscriptions/s/resourceGroups/rg/providers/microsoft.network/virtualNetworks/v/subnets/a"
)]
#[case::missing_child(
    "/subscriptions/s/resourceGroups/rg/providers/Microsoft.Network/virtualNetworks/v"
)]
#[case::wrong_child_type(
    "/subscriptions/s/resourceGroups/rg/providers/Microsoft.Network/virtualNetworks/v/routes/a"
)]
#[case::empty_child("/subscriptions/s/resourceGroups/rg/providers/Microsoft.Network/virtualNetworks/v/subnets/")]
#[case::empty("")]
fn subnet_rejects(#[case] input: &str) {
    assert!(SubnetId::parse(input).is_err());
}

#[test]
fn display_lists_every_field() {
    let id = SubnetId::new("s", "rg", "v", "a");
    assert_eq!(
        id.to_string(),
        "Subnet (Subscription: \"s\"\nResource Group Name: \"rg\"\nVirtual Network Name: \"v\"\nSubnet Name: \"a\")"
    );
}

#[test]
fn role_assignment_under_management_group() {
    let id = RoleAssignmentId::parse(
        "/providers/Microsoft.Management/managementGroups/mg/providers/Microsoft.Authorization/roleAssignments/ra",
    )
    .unwrap();
    assert_eq!(id.scope, "/providers/Microsoft.Management/managementGroups/mg");
    assert_eq!(id.role_assignment_name, "ra");
}

#[test]
fn scope_without_leading_slash_roundtrips() {
    let id = RoleAssignmentId::new("subscriptions/s", "a");
    assert_eq!(id.scope, "/subscriptions/s");
    assert_eq!(
        id.id(),
        "/subscriptions/s/providers/Microsoft.Authorization/roleAssignments/a"
    );
    assert_eq!(RoleAssignmentId::parse(&id.id()).unwrap(), id);
}
