//! Error types for SDK operations.

use armkit_resourceids::ResourceIdError;
use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when calling the Resource Manager API.
#[derive(Debug, Error)]
pub enum SdkError {
    /// The request could not be sent or the response could not be read.
    #[error("network error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success status.
    #[error("API error ({status}): {code}: {message}")]
    Api {
        status: u16,
        code: String,
        message: String,
    },

    /// The response body did not match the expected model.
    #[error("decoding response: {0}")]
    Decode(#[from] serde_json::Error),

    /// A resource ID in a request or response was malformed.
    #[error(transparent)]
    ResourceId(#[from] ResourceIdError),

    /// A list operation returned a `nextLink` it had already returned.
    #[error("pagination loop: nextLink {0} was already fetched")]
    Pagination(String),

    /// The client was configured with invalid options.
    #[error("invalid client configuration: {0}")]
    Config(String),
}

impl SdkError {
    /// Create an API error from response details.
    pub fn api(status: u16, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            code: code.into(),
            message: message.into(),
        }
    }

    /// Returns the HTTP status for API errors.
    pub fn status(&self) -> Option<u16> {
        match self {
            SdkError::Api { status, .. } => Some(*status),
            SdkError::Http(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Returns true if the API reported the resource as not found.
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// Builds an API error from a non-success response body.
    ///
    /// Falls back to the raw body when it is not an ARM error envelope.
    pub(crate) fn from_response_body(status: u16, body: &str) -> Self {
        match serde_json::from_str::<ErrorResponse>(body) {
            Ok(envelope) => Self::api(status, envelope.error.code, envelope.error.message),
            Err(_) if body.trim().is_empty() => Self::api(status, "Unknown", "no response body"),
            Err(_) => Self::api(status, "Unknown", body.trim()),
        }
    }
}

/// The ARM error envelope: `{"error": {"code": ..., "message": ...}}`.
#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    #[serde(default)]
    code: String,
    #[serde(default)]
    message: String,
}
