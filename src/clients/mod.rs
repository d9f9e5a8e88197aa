//! HTTP client types for n8n API communication.
//!
//! This module provides the foundational HTTP client layer for making
//! authenticated requests to an n8n instance. It handles request/response
//! processing, retry logic with exponential backoff, per-attempt timeouts,
//! and error message sanitization.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`HttpClient`]: The async resilient HTTP client
//! - [`HttpRequest`]: A request to be sent to the API
//! - [`HttpMethod`]: Supported HTTP methods
//! - [`BasicAuth`]: HTTP Basic credentials for webhook invocation
//! - [`HttpError`]: Unified error taxonomy ([`ApiError`], [`TimeoutError`],
//!   network, malformed response)
//! - [`api::N8nClient`]: Higher-level domain client
//!
//! # Retry Behavior
//!
//! The client retries transient failures automatically:
//!
//! - **429 (Rate Limited)** and **5xx (Server Error)**: retried with
//!   exponential backoff (`retry_delay * 2^(attempt - 1)`)
//! - **Connection-level failures**: retried with the same backoff
//! - **Other 4xx statuses**: returned immediately without retry
//! - **Timeouts**: terminal, never retried
//!
//! Attempts are capped at the configured `max_retries` (default 3,
//! counting the first attempt).

pub mod api;
mod errors;
mod http_client;
mod http_request;
mod sanitize;

pub use errors::{ApiError, HttpError, TimeoutError};
pub use http_client::{HttpClient, API_KEY_HEADER};
pub use http_request::{BasicAuth, HttpMethod, HttpRequest, HttpRequestBuilder};
pub use sanitize::sanitize_error_message;

// Re-export domain client types at the clients module level
pub use api::{
    ApiCallResult, ApiClientError, ApiResult, ExecutionListParams, ExecutionStatus, N8nClient,
    WebhookRequest, WorkflowListParams,
};
