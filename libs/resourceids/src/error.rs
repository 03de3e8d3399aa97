//! Error types for resource ID parsing and validation.

use thiserror::Error;

/// Errors that can occur when parsing a resource ID.
///
/// Every variant carries the human-readable resource name, the segment that
/// could not be matched, the original input, and an example of a well-formed
/// ID of the same type.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ResourceIdError {
    /// A segment was absent from the input, or a literal segment did not match.
    #[error(
        "parsing {resource} ID {input:?}: the segment {segment:?} was not found, expected {expected}\n\nExpected a {resource} ID that matched:\n\n> {example}"
    )]
    MissingSegment {
        resource: &'static str,
        segment: &'static str,
        expected: String,
        input: String,
        example: String,
    },

    /// A dynamic segment was present but empty.
    #[error(
        "parsing {resource} ID {input:?}: the segment {segment:?} must not be empty\n\nExpected a {resource} ID that matched:\n\n> {example}"
    )]
    EmptySegment {
        resource: &'static str,
        segment: &'static str,
        input: String,
        example: String,
    },

    /// Components remained after every declared segment was matched.
    #[error(
        "parsing {resource} ID {input:?}: unexpected trailing segments {remainder:?}\n\nExpected a {resource} ID that matched:\n\n> {example}"
    )]
    UnexpectedSegments {
        resource: &'static str,
        remainder: String,
        input: String,
        example: String,
    },
}

impl ResourceIdError {
    /// Returns the name of the segment that failed to match, if any.
    pub fn segment(&self) -> Option<&'static str> {
        match self {
            ResourceIdError::MissingSegment { segment, .. }
            | ResourceIdError::EmptySegment { segment, .. } => Some(*segment),
            ResourceIdError::UnexpectedSegments { .. } => None,
        }
    }

    /// Returns the raw input that was being parsed.
    pub fn input(&self) -> &str {
        match self {
            ResourceIdError::MissingSegment { input, .. }
            | ResourceIdError::EmptySegment { input, .. }
            | ResourceIdError::UnexpectedSegments { input, .. } => input,
        }
    }

    /// Returns true if a dynamic segment was present but blank.
    pub fn is_empty_segment(&self) -> bool {
        matches!(self, ResourceIdError::EmptySegment { .. })
    }
}

/// A validation failure reported against a schema key.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{key}: {message}")]
pub struct ValidationError {
    /// The schema key the value was supplied under.
    pub key: String,
    /// What was wrong with the value.
    pub message: String,
}

impl ValidationError {
    pub fn new(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            message: message.into(),
        }
    }

    /// The value handed to a validator was not a string.
    pub fn not_a_string(key: impl Into<String>) -> Self {
        let key = key.into();
        let message = format!("expected {key:?} to be a string");
        Self { key, message }
    }
}
