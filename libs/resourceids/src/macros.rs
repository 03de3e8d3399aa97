//! Macros for declaring typed resource ID types.

/// Declares a typed resource ID from a field list and a segment template.
///
/// Each field maps to a dynamic segment by name and carries the label used in
/// the `Display` output. This generates:
/// - A struct with one `String` field per dynamic segment
/// - `new()` taking the fields in declaration order
/// - `parse()`, `parse_insensitively()`, `validate()`, `id()`
/// - A multi-line `Display` for diagnostics
/// - `FromStr` (strict) and string `Serialize`/`Deserialize`
/// - An implementation of [`ResourceId`](crate::ResourceId)
///
/// # Example
///
/// ```ignore
/// define_resource_id! {
///     /// A resource group.
///     pub struct ResourceGroupId("Resource Group") {
///         subscription_id: "subscriptionId" => "Subscription",
///         resource_group_name: "resourceGroupName" => "Resource Group Name",
///     }
///     segments = [
///         Segment::static_segment("staticSubscriptions", "subscriptions"),
///         Segment::subscription_id("subscriptionId"),
///         Segment::static_segment("staticResourceGroups", "resourceGroups"),
///         Segment::resource_group("resourceGroupName"),
///     ];
/// }
///
/// let id = ResourceGroupId::new("sub", "rg");
/// assert_eq!(id.id(), "/subscriptions/sub/resourceGroups/rg");
/// ```
#[macro_export]
macro_rules! define_resource_id {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident($display:literal) {
            $( $field:ident : $segment:literal => $label:literal ),+ $(,)?
        }
        segments = [ $( $seg:expr ),+ $(,)? ];
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
        $vis struct $name {
            $( pub $field: String, )+
        }

        impl $name {
            const SEGMENTS: &'static [$crate::Segment] = &[ $( $seg ),+ ];

            /// Creates an ID from its dynamic segment values, in path order.
            ///
            /// No validation is performed. A scope value without a leading
            /// `/` has one added.
            #[must_use]
            pub fn new($( $field: impl Into<String> ),+) -> Self {
                Self {
                    $( $field: Self::normalize($segment, $field.into()), )+
                }
            }

            fn normalize(name: &str, value: String) -> String {
                match Self::SEGMENTS.iter().find(|segment| segment.name == name) {
                    Some(segment) => segment.normalize_value(value),
                    None => value,
                }
            }

            /// Parses an ID, matching literal segments case-sensitively.
            pub fn parse(input: &str) -> Result<Self, $crate::ResourceIdError> {
                <Self as $crate::ResourceId>::parse(input)
            }

            /// Parses an ID, matching literal segments case-insensitively.
            ///
            /// Only for normalising IDs returned by the API.
            pub fn parse_insensitively(input: &str) -> Result<Self, $crate::ResourceIdError> {
                <Self as $crate::ResourceId>::parse_insensitively(input)
            }

            /// Checks that `input` is a string holding a valid ID of this type.
            pub fn validate(
                input: &$crate::__private::serde_json::Value,
                key: &str,
            ) -> (Vec<String>, Vec<$crate::ValidationError>) {
                $crate::validate_resource_id::<Self>(input, key)
            }

            /// Renders the canonical resource ID string.
            #[must_use]
            pub fn id(&self) -> String {
                <Self as $crate::ResourceId>::id(self)
            }

            /// The segment template for this type.
            pub fn segments() -> &'static [$crate::Segment] {
                Self::SEGMENTS
            }
        }

        impl $crate::ResourceId for $name {
            const NAME: &'static str = $display;

            fn segments() -> &'static [$crate::Segment] {
                Self::SEGMENTS
            }

            fn from_parse_result(
                result: &$crate::ParseResult,
            ) -> Result<Self, $crate::ResourceIdError> {
                Ok(Self {
                    $( $field: result.value($segment)?.to_string(), )+
                })
            }

            fn segment_value(&self, name: &str) -> Option<&str> {
                match name {
                    $( $segment => Some(self.$field.as_str()), )+
                    _ => None,
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                let components: Vec<String> = vec![
                    $( format!("{}: {:?}", $label, self.$field), )+
                ];
                write!(f, "{} ({})", $display, components.join("\n"))
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::ResourceIdError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s)
            }
        }

        impl $crate::__private::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: $crate::__private::serde::Serializer,
            {
                serializer.serialize_str(&self.id())
            }
        }

        impl<'de> $crate::__private::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: $crate::__private::serde::Deserializer<'de>,
            {
                let s = <String as $crate::__private::serde::Deserialize>::deserialize(
                    deserializer,
                )?;
                Self::parse(&s).map_err($crate::__private::serde::de::Error::custom)
            }
        }
    };
}
