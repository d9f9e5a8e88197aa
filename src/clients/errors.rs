//! HTTP-specific error types for the n8n API client.
//!
//! This module contains the error taxonomy every client operation resolves
//! to: API response errors, timeouts, network failures, and malformed
//! response bodies.
//!
//! # Error Handling
//!
//! - [`ApiError`]: Non-2xx HTTP responses from the API
//! - [`TimeoutError`]: A per-attempt timer fired before a response arrived
//! - [`HttpError`]: Unified error type encompassing all failure shapes
//!
//! # Example
//!
//! ```rust,ignore
//! use n8n_api::clients::{HttpClient, HttpError};
//!
//! match client.request(request).await {
//!     Ok(Some(body)) => println!("Success: {body}"),
//!     Ok(None) => println!("Success, empty body"),
//!     Err(HttpError::Api(e)) => {
//!         println!("API error {} at {}: {}", e.status, e.endpoint, e.message);
//!     }
//!     Err(HttpError::Timeout(e)) => {
//!         println!("Timed out after {}ms at {}", e.timeout_ms, e.endpoint);
//!     }
//!     Err(HttpError::Network(e)) => println!("Network error: {e}"),
//!     Err(HttpError::MalformedResponse { endpoint, source }) => {
//!         println!("Bad JSON from {endpoint}: {source}");
//!     }
//! }
//! ```

use thiserror::Error;

/// Error returned when an API request receives a non-successful response
/// and will not be retried further.
///
/// The message is sanitized according to the configured
/// [`ErrorMode`](crate::config::ErrorMode) before it reaches the caller.
///
/// # Example
///
/// ```rust
/// use n8n_api::clients::ApiError;
///
/// let error = ApiError {
///     message: "Resource not found".to_string(),
///     status: 404,
///     endpoint: "/workflows/42".to_string(),
///     retryable: false,
/// };
///
/// assert_eq!(error.to_string(), "n8n API error (404) at /workflows/42: Resource not found");
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("n8n API error ({status}) at {endpoint}: {message}")]
pub struct ApiError {
    /// Sanitized, human-facing error message.
    pub message: String,
    /// The HTTP status code of the response.
    pub status: u16,
    /// The endpoint path that failed.
    pub endpoint: String,
    /// Whether the failure was classified as retryable (429 or 5xx).
    pub retryable: bool,
}

/// Error returned when the per-attempt timer fires before a response
/// is received.
///
/// Timeouts are terminal: the in-flight attempt is aborted and no further
/// attempts are made.
///
/// # Example
///
/// ```rust
/// use n8n_api::clients::TimeoutError;
///
/// let error = TimeoutError {
///     endpoint: "/executions".to_string(),
///     timeout_ms: 5000,
/// };
///
/// assert!(error.to_string().contains("5000ms"));
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Request to {endpoint} timed out after {timeout_ms}ms")]
pub struct TimeoutError {
    /// The endpoint path that timed out.
    pub endpoint: String,
    /// The configured per-attempt timeout in milliseconds.
    pub timeout_ms: u64,
}

/// Unified error type for all client operations.
///
/// Every terminal failure surfaces as exactly one of these variants; no
/// failure is silently swallowed and no partial result is ever returned.
#[derive(Debug, Error)]
pub enum HttpError {
    /// A non-2xx API response, not retried further.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// The per-attempt timer fired before a response arrived.
    #[error(transparent)]
    Timeout(#[from] TimeoutError),

    /// Connection-level failure, surfaced after retries are exhausted.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// A 2xx response carried a non-empty body that was not valid JSON.
    #[error("Malformed JSON response from {endpoint}: {source}")]
    MalformedResponse {
        /// The endpoint that returned the malformed body.
        endpoint: String,
        /// The underlying parse error.
        source: serde_json::Error,
    },
}

impl HttpError {
    /// Returns the HTTP status code associated with this error, or 0 if
    /// no response was received (timeout, network failure, bad body).
    #[must_use]
    pub fn status(&self) -> u16 {
        match self {
            Self::Api(e) => e.status,
            Self::Network(e) => e.status().map_or(0, |s| s.as_u16()),
            Self::Timeout(_) | Self::MalformedResponse { .. } => 0,
        }
    }
}
