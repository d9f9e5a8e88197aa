//! Structured success-or-failure result for boundary callers.

use serde::Serialize;

use crate::clients::api::client::{ApiClientError, ApiResult};

/// A well-formed success-or-failure result.
///
/// Boundary layers (such as a tool-registration surface feeding an
/// LLM-driven agent) must never observe a raw propagated error; they
/// convert every domain operation outcome into this shape, so callers
/// always receive an explicit flag plus either data or message text.
///
/// # Example
///
/// ```rust
/// use n8n_api::ApiCallResult;
/// use serde_json::json;
///
/// let ok = ApiCallResult::ok(Some(json!({"id": "42"})));
/// assert!(ok.success);
/// assert!(ok.error.is_none());
///
/// let failed = ApiCallResult::failed("Resource not found");
/// assert!(!failed.success);
/// assert_eq!(failed.error.as_deref(), Some("Resource not found"));
/// ```
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct ApiCallResult {
    /// Whether the operation succeeded.
    pub success: bool,
    /// The response payload, when present on success.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
    /// The failure message, when the operation failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ApiCallResult {
    /// Creates a success result.
    #[must_use]
    pub const fn ok(data: Option<serde_json::Value>) -> Self {
        Self {
            success: true,
            data,
            error: None,
        }
    }

    /// Creates a failure result with the given message.
    #[must_use]
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

impl From<ApiResult> for ApiCallResult {
    fn from(result: ApiResult) -> Self {
        match result {
            Ok(data) => Self::ok(data),
            Err(error) => Self::failed(error.to_string()),
        }
    }
}

impl From<ApiClientError> for ApiCallResult {
    fn from(error: ApiClientError) -> Self {
        Self::failed(error.to_string())
    }
}
