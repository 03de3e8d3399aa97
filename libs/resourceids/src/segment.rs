//! Segment descriptors that make up a resource ID template.

/// Example subscription used when rendering documentation IDs.
pub const EXAMPLE_SUBSCRIPTION_ID: &str = "12345678-1234-9876-4563-123456789012";

/// Example resource group used when rendering documentation IDs.
pub const EXAMPLE_RESOURCE_GROUP: &str = "example-resource-group";

/// Example scope used when rendering documentation IDs.
pub const EXAMPLE_SCOPE: &str =
    "/subscriptions/12345678-1234-9876-4563-123456789012/resourceGroups/example-resource-group";

/// The kind of a single segment in a resource ID template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SegmentKind {
    /// A literal path keyword, such as `resourceGroups` or `providers`.
    Static,
    /// A literal resource provider namespace, such as `Microsoft.Network`.
    ResourceProvider,
    /// A caller-supplied value, such as a resource name.
    UserSpecified,
    /// A caller-supplied subscription ID.
    SubscriptionId,
    /// A caller-supplied resource group name.
    ResourceGroup,
    /// An arbitrary-depth prefix the resource is attached under.
    Scope,
}

impl SegmentKind {
    /// Returns true if the segment is matched against fixed text.
    pub const fn is_literal(self) -> bool {
        matches!(self, SegmentKind::Static | SegmentKind::ResourceProvider)
    }

    /// Returns true if the segment captures a value from the input.
    pub const fn is_dynamic(self) -> bool {
        !self.is_literal()
    }
}

/// One atomic piece of a resource ID template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Segment {
    /// The segment name; dynamic segments are keyed by it in a parse result.
    pub name: &'static str,
    pub kind: SegmentKind,
    /// The literal text for static and resource provider segments.
    pub fixed_value: Option<&'static str>,
    /// The value used when rendering an example ID.
    pub example_value: &'static str,
}

impl Segment {
    pub const fn static_segment(name: &'static str, value: &'static str) -> Self {
        Self {
            name,
            kind: SegmentKind::Static,
            fixed_value: Some(value),
            example_value: value,
        }
    }

    pub const fn resource_provider(name: &'static str, value: &'static str) -> Self {
        Self {
            name,
            kind: SegmentKind::ResourceProvider,
            fixed_value: Some(value),
            example_value: value,
        }
    }

    pub const fn user_specified(name: &'static str, example: &'static str) -> Self {
        Self {
            name,
            kind: SegmentKind::UserSpecified,
            fixed_value: None,
            example_value: example,
        }
    }

    pub const fn subscription_id(name: &'static str) -> Self {
        Self {
            name,
            kind: SegmentKind::SubscriptionId,
            fixed_value: None,
            example_value: EXAMPLE_SUBSCRIPTION_ID,
        }
    }

    pub const fn resource_group(name: &'static str) -> Self {
        Self {
            name,
            kind: SegmentKind::ResourceGroup,
            fixed_value: None,
            example_value: EXAMPLE_RESOURCE_GROUP,
        }
    }

    /// A scope segment. Scope values are stored with a leading `/`, so the
    /// example should start with one.
    pub const fn scope(name: &'static str, example: &'static str) -> Self {
        Self {
            name,
            kind: SegmentKind::Scope,
            fixed_value: None,
            example_value: example,
        }
    }

    /// Returns true if `component` matches this literal segment.
    ///
    /// Always false for dynamic segments.
    pub fn matches_literal(&self, component: &str, insensitively: bool) -> bool {
        match self.fixed_value {
            Some(expected) if insensitively => expected.eq_ignore_ascii_case(component),
            Some(expected) => expected == component,
            None => false,
        }
    }

    /// Brings a caller-supplied value into the form parsing produces.
    ///
    /// Scope values gain a leading `/` if missing; other values are unchanged.
    pub fn normalize_value(&self, value: String) -> String {
        if self.kind == SegmentKind::Scope && !value.starts_with('/') {
            format!("/{value}")
        } else {
            value
        }
    }

    /// Describes what the segment expects, for error messages.
    pub(crate) fn describe_expected(&self) -> String {
        match (self.kind, self.fixed_value) {
            (SegmentKind::Static, Some(value)) => format!("the literal {value:?}"),
            (SegmentKind::ResourceProvider, Some(value)) => {
                format!("the resource provider {value:?}")
            }
            (SegmentKind::SubscriptionId, _) => "a subscription ID".to_string(),
            (SegmentKind::ResourceGroup, _) => "a resource group name".to_string(),
            (SegmentKind::Scope, _) => "a scope".to_string(),
            _ => format!("a value for {:?}", self.name),
        }
    }
}
