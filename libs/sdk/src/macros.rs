//! Macros for declaring open-world string enums.

/// Declares a string enum that tolerates values it does not know about.
///
/// The API may add values at any time, so parsing never fails: known values
/// are matched ASCII case-insensitively and anything else is kept verbatim
/// in the `Other` variant. This generates:
/// - The enum, with an extra `Other(String)` variant
/// - `as_str()`, `possible_values()`, and `is_known()`
/// - `From<&str>`, `From<String>`, and an infallible `FromStr`
/// - `Display` and string `Serialize`/`Deserialize`
///
/// # Example
///
/// ```ignore
/// define_string_enum! {
///     /// Provisioning state of a resource.
///     pub enum ProvisioningState {
///         Succeeded => "Succeeded",
///         Failed => "Failed",
///     }
/// }
///
/// assert_eq!(ProvisioningState::from("succeeded"), ProvisioningState::Succeeded);
/// assert_eq!(ProvisioningState::from("Updating").as_str(), "Updating");
/// ```
#[macro_export]
macro_rules! define_string_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $value:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        $vis enum $name {
            $( $(#[$vmeta])* $variant, )+
            /// A value not known to this version of the SDK.
            Other(String),
        }

        impl $name {
            /// Returns the wire value.
            pub fn as_str(&self) -> &str {
                match self {
                    $( Self::$variant => $value, )+
                    Self::Other(value) => value.as_str(),
                }
            }

            /// All values known to this version of the SDK.
            pub fn possible_values() -> &'static [&'static str] {
                &[ $( $value ),+ ]
            }

            /// Returns false for values carried through `Other`.
            pub fn is_known(&self) -> bool {
                !matches!(self, Self::Other(_))
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                $(
                    if s.eq_ignore_ascii_case($value) {
                        return Self::$variant;
                    }
                )+
                Self::Other(s.to_string())
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self::from(s.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = std::convert::Infallible;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self::from(s))
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $crate::__private::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: $crate::__private::serde::Serializer,
            {
                serializer.serialize_str(self.as_str())
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
                Ok(Self::from(s))
            }
        }
    };
}

#[cfg(test)]
mod tests {
    define_string_enum! {
        /// Test enum.
        pub enum Colour {
            Red => "Red",
            DarkBlue => "DarkBlue",
        }
    }

    #[test]
    fn parses_known_values_case_insensitively() {
        assert_eq!(Colour::from("red"), Colour::Red);
        assert_eq!(Colour::from("DARKBLUE"), Colour::DarkBlue);
        assert!(Colour::from("Red").is_known());
    }

    #[test]
    fn unknown_values_pass_through() {
        let colour: Colour = "Chartreuse".parse().unwrap();
        assert_eq!(colour, Colour::Other("Chartreuse".to_string()));
        assert_eq!(colour.as_str(), "Chartreuse");
        assert!(!colour.is_known());
    }

    #[test]
    fn serializes_canonical_casing() {
        let parsed: Colour = serde_json::from_str("\"darkblue\"").unwrap();
        assert_eq!(serde_json::to_string(&parsed).unwrap(), "\"DarkBlue\"");

        let unknown: Colour = serde_json::from_str("\"mauve\"").unwrap();
        assert_eq!(serde_json::to_string(&unknown).unwrap(), "\"mauve\"");
    }

    #[test]
    fn possible_values_in_declaration_order() {
        assert_eq!(Colour::possible_values(), &["Red", "DarkBlue"]);
        assert_eq!(Colour::Red.to_string(), "Red");
    }
}
