//! # n8n API Rust client
//!
//! An async Rust client for the n8n workflow-automation platform's REST
//! API, providing type-safe configuration, a resilient HTTP engine with
//! retry/backoff/timeout handling, and domain-shaped operations for
//! workflows, executions, credentials, tags, variables, audits, and
//! webhook invocation.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`N8nConfig`] and [`N8nConfigBuilder`]
//! - Validated newtypes for the base URL and API key
//! - A resilient HTTP client with per-attempt timeouts and exponential
//!   backoff on transient failures via [`clients::HttpClient`]
//! - A stable error taxonomy ([`ApiError`], [`TimeoutError`], network,
//!   malformed response) with configurable message sanitization
//! - A domain client, [`N8nClient`], covering the n8n public API surface
//!
//! ## Quick Start
//!
//! ```rust
//! use n8n_api::{N8nConfig, BaseUrl, ApiKey, N8nClient};
//!
//! let config = N8nConfig::builder()
//!     .base_url(BaseUrl::new("https://n8n.example.com/api/v1").unwrap())
//!     .api_key(ApiKey::new("your-api-key").unwrap())
//!     .build()
//!     .unwrap();
//!
//! let client = N8nClient::new(config);
//! ```
//!
//! ## Making API Requests
//!
//! ```rust,ignore
//! use n8n_api::{N8nClient, WorkflowListParams, ExecutionListParams, ExecutionStatus};
//!
//! // List active workflows
//! let workflows = client
//!     .list_workflows(&WorkflowListParams::default().active(true).limit(20))
//!     .await?;
//!
//! // Inspect failed executions of one workflow
//! let failures = client
//!     .list_executions(
//!         &ExecutionListParams::default()
//!             .workflow_id("42")
//!             .status(ExecutionStatus::Error),
//!     )
//!     .await?;
//!
//! // Delete a workflow; empty upstream body resolves to Ok(None)
//! let deleted = client.delete_workflow("42").await?;
//! assert!(deleted.is_none());
//! ```
//!
//! ## Retry Behavior
//!
//! Each logical request is attempted up to `max_retries` times (default 3,
//! counting the first attempt). A 429 or 5xx response and connection-level
//! failures are retried after `retry_delay * 2^(attempt - 1)`; other 4xx
//! statuses terminate immediately, and a per-attempt timeout is terminal
//! and never retried.
//!
//! ## Invoking Webhooks
//!
//! Webhook targets are user-defined external endpoints, so they get a
//! single attempt with no retry loop:
//!
//! ```rust,ignore
//! use n8n_api::{WebhookRequest, BasicAuth};
//! use serde_json::json;
//!
//! let response = client
//!     .invoke_webhook(
//!         &WebhookRequest::new("webhook/order-created")
//!             .payload(json!({"orderId": 42}))
//!             .basic_auth(BasicAuth::new("svc", "secret")),
//!     )
//!     .await?;
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: All newtypes validate on construction
//! - **Thread-safe**: All types are `Send + Sync`; concurrent calls share
//!   only immutable configuration
//! - **Async-first**: Designed for use with the Tokio async runtime
//! - **Explicit failure shapes**: every terminal failure is one typed
//!   error; no failure is silently swallowed and no partial result is
//!   ever returned

pub mod clients;
pub mod config;
pub mod error;

// Re-export public types at crate root for convenience
pub use config::{ApiKey, BaseUrl, ErrorMode, N8nConfig, N8nConfigBuilder};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    ApiError, BasicAuth, HttpClient, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder,
    TimeoutError, API_KEY_HEADER,
};

// Re-export domain client types
pub use clients::{
    ApiCallResult, ApiClientError, ApiResult, ExecutionListParams, ExecutionStatus, N8nClient,
    WebhookRequest, WorkflowListParams,
};
