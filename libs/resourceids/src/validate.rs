//! Adapters for schema-style input validation callbacks.
//!
//! Validators follow the `(warnings, errors)` convention: both are lists, and
//! a value is accepted iff the error list is empty.

use serde_json::Value;

use crate::error::ValidationError;
use crate::resource_id::ResourceId;

/// Validates that `input` is a string that parses strictly as `T`.
///
/// Any parse failure is reported as a single error keyed by `key`.
pub fn validate_resource_id<T: ResourceId>(
    input: &Value,
    key: &str,
) -> (Vec<String>, Vec<ValidationError>) {
    let Some(value) = input.as_str() else {
        return (Vec::new(), vec![ValidationError::not_a_string(key)]);
    };

    match T::parse(value) {
        Ok(_) => (Vec::new(), Vec::new()),
        Err(err) => (Vec::new(), vec![ValidationError::new(key, err.to_string())]),
    }
}

/// Validates a raw string against `T`; convenience over [`validate_resource_id`].
pub fn validate_resource_id_str<T: ResourceId>(
    input: &str,
    key: &str,
) -> (Vec<String>, Vec<ValidationError>) {
    validate_resource_id::<T>(&Value::String(input.to_string()), key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::ResourceGroupId;
    use serde_json::json;

    #[test]
    fn accepts_valid_string() {
        let (warnings, errors) = validate_resource_id::<ResourceGroupId>(
            &json!("/subscriptions/sub/resourceGroups/rg"),
            "resource_group_id",
        );
        assert!(warnings.is_empty());
        assert!(errors.is_empty());
    }

    #[test]
    fn rejects_non_string() {
        for input in [json!(42), json!(null), json!(["a"]), json!({"id": "x"})] {
            let (_, errors) = validate_resource_id::<ResourceGroupId>(&input, "resource_group_id");
            assert_eq!(errors, vec![ValidationError::not_a_string("resource_group_id")]);
        }
    }

    #[test]
    fn wraps_parse_error_with_key() {
        let (_, errors) =
            validate_resource_id_str::<ResourceGroupId>("/subscriptions/sub", "resource_group_id");
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].key, "resource_group_id");
        assert!(errors[0].message.contains("staticResourceGroups"));
    }
}
