//! Domain-shaped API client for n8n.
//!
//! This module provides a higher-level client built on top of the
//! [`HttpClient`](crate::clients::HttpClient) that exposes n8n's REST API
//! as domain operations: workflow CRUD and activation, execution queries,
//! credential schemas, tags, variables, security audits, and webhook
//! invocation.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`N8nClient`]: The domain client
//! - [`ApiClientError`]: Error type wrapping HTTP-level failures
//! - [`WorkflowListParams`], [`ExecutionListParams`]: List filters
//! - [`ExecutionStatus`]: Execution status filter values
//! - [`WebhookRequest`]: Webhook invocation parameters
//! - [`ApiCallResult`]: Structured success-or-failure shape for callers
//!   that must never observe a raw error (e.g. a tool-registration layer)
//!
//! # Example
//!
//! ```rust,ignore
//! use n8n_api::{N8nConfig, BaseUrl, ApiKey, N8nClient, WorkflowListParams};
//!
//! let config = N8nConfig::builder()
//!     .base_url(BaseUrl::new("https://n8n.example.com/api/v1").unwrap())
//!     .api_key(ApiKey::new("api-key").unwrap())
//!     .build()
//!     .unwrap();
//!
//! let client = N8nClient::new(config);
//!
//! let workflows = client
//!     .list_workflows(&WorkflowListParams::default().active(true).limit(20))
//!     .await?;
//! ```

mod client;
mod params;
mod result;

pub use client::{ApiClientError, ApiResult, N8nClient};
pub use params::{ExecutionListParams, ExecutionStatus, WebhookRequest, WorkflowListParams};
pub use result::ApiCallResult;
