//! Filter and invocation parameter types for the domain client.

use std::collections::HashMap;
use std::fmt;

use crate::clients::http_request::{BasicAuth, HttpMethod};

/// Filters for [`N8nClient::list_workflows`](super::N8nClient::list_workflows).
///
/// All fields are optional; unset fields are omitted from the query string.
///
/// # Example
///
/// ```rust
/// use n8n_api::WorkflowListParams;
///
/// let params = WorkflowListParams::default()
///     .active(true)
///     .tags("prod,billing")
///     .limit(50);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WorkflowListParams {
    active: Option<bool>,
    tags: Option<String>,
    cursor: Option<String>,
    limit: Option<u32>,
}

impl WorkflowListParams {
    /// Filters by active state.
    #[must_use]
    pub const fn active(mut self, active: bool) -> Self {
        self.active = Some(active);
        self
    }

    /// Filters by a comma-separated tag list.
    #[must_use]
    pub fn tags(mut self, tags: impl Into<String>) -> Self {
        self.tags = Some(tags.into());
        self
    }

    /// Sets the pagination cursor from a previous response.
    #[must_use]
    pub fn cursor(mut self, cursor: impl Into<String>) -> Self {
        self.cursor = Some(cursor.into());
        self
    }

    /// Sets the page size.
    #[must_use]
    pub const fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Converts the set fields into query parameters.
    #[must_use]
    pub fn to_query(&self) -> HashMap<String, String> {
        let mut query = HashMap::new();
        if let Some(active) = self.active {
            query.insert("active".to_string(), active.to_string());
        }
        if let Some(tags) = &self.tags {
            query.insert("tags".to_string(), tags.clone());
        }
        if let Some(cursor) = &self.cursor {
            query.insert("cursor".to_string(), cursor.clone());
        }
        if let Some(limit) = self.limit {
            query.insert("limit".to_string(), limit.to_string());
        }
        query
    }
}

/// Execution status values accepted by the executions list filter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExecutionStatus {
    /// Execution finished with an error.
    Error,
    /// Execution finished successfully.
    Success,
    /// Execution is waiting (e.g. on a wait node or webhook).
    Waiting,
}

impl fmt::Display for ExecutionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Success => write!(f, "success"),
            Self::Waiting => write!(f, "waiting"),
        }
    }
}

/// Filters for [`N8nClient::list_executions`](super::N8nClient::list_executions).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExecutionListParams {
    workflow_id: Option<String>,
    status: Option<ExecutionStatus>,
    cursor: Option<String>,
    limit: Option<u32>,
}

impl ExecutionListParams {
    /// Filters by the owning workflow id.
    #[must_use]
    pub fn workflow_id(mut self, id: impl Into<String>) -> Self {
        self.workflow_id = Some(id.into());
        self
    }

    /// Filters by execution status.
    #[must_use]
    pub const fn status(mut self, status: ExecutionStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Sets the pagination cursor from a previous response.
    #[must_use]
    pub fn cursor(mut self, cursor: impl Into<String>) -> Self {
        self.cursor = Some(cursor.into());
        self
    }

    /// Sets the page size.
    #[must_use]
    pub const fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Converts the set fields into query parameters.
    #[must_use]
    pub fn to_query(&self) -> HashMap<String, String> {
        let mut query = HashMap::new();
        if let Some(workflow_id) = &self.workflow_id {
            query.insert("workflowId".to_string(), workflow_id.clone());
        }
        if let Some(status) = self.status {
            query.insert("status".to_string(), status.to_string());
        }
        if let Some(cursor) = &self.cursor {
            query.insert("cursor".to_string(), cursor.clone());
        }
        if let Some(limit) = self.limit {
            query.insert("limit".to_string(), limit.to_string());
        }
        query
    }
}

/// Parameters for invoking an externally-registered webhook.
///
/// # Example
///
/// ```rust
/// use n8n_api::{WebhookRequest, BasicAuth};
/// use n8n_api::clients::HttpMethod;
/// use serde_json::json;
///
/// let request = WebhookRequest::new("webhook/order-created")
///     .method(HttpMethod::Post)
///     .payload(json!({"orderId": 42}))
///     .basic_auth(BasicAuth::new("svc", "secret"));
/// ```
#[derive(Clone, Debug)]
pub struct WebhookRequest {
    /// The webhook path, relative to the instance root.
    pub path: String,
    /// The HTTP method to invoke with (default POST).
    pub method: HttpMethod,
    /// The JSON payload to send, if any.
    pub payload: Option<serde_json::Value>,
    /// Optional HTTP Basic credentials.
    pub basic_auth: Option<BasicAuth>,
}

impl WebhookRequest {
    /// Creates a webhook request for the given path, defaulting to POST.
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            method: HttpMethod::Post,
            payload: None,
            basic_auth: None,
        }
    }

    /// Sets the HTTP method.
    #[must_use]
    pub const fn method(mut self, method: HttpMethod) -> Self {
        self.method = method;
        self
    }

    /// Sets the JSON payload.
    #[must_use]
    pub fn payload(mut self, payload: impl Into<serde_json::Value>) -> Self {
        self.payload = Some(payload.into());
        self
    }

    /// Sets HTTP Basic credentials.
    #[must_use]
    pub fn basic_auth(mut self, auth: BasicAuth) -> Self {
        self.basic_auth = Some(auth);
        self
    }
}
