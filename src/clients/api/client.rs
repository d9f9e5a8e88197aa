//! Domain client implementation for the n8n REST API.
//!
//! Every operation here is a thin delegation to the generic request
//! primitive in [`HttpClient`]; the retry, timeout, and sanitization
//! behavior lives entirely in that layer.

use thiserror::Error;

use crate::clients::api::params::{ExecutionListParams, WebhookRequest, WorkflowListParams};
use crate::clients::http_request::{HttpMethod, HttpRequest};
use crate::clients::{HttpClient, HttpError};
use crate::config::N8nConfig;

/// Error type for domain API operations.
///
/// Wraps HTTP-level errors and adds domain-specific validation failures.
#[derive(Debug, Error)]
pub enum ApiClientError {
    /// A resource id was empty or otherwise unusable in a URL path.
    #[error("Invalid resource id: '{id}'")]
    InvalidResourceId {
        /// The invalid id that was provided.
        id: String,
    },

    /// An HTTP-level error occurred.
    #[error(transparent)]
    Http(#[from] HttpError),
}

/// Convenience alias for domain operation results.
///
/// `Ok(None)` means the upstream returned an empty body, which is the
/// documented success shape for delete-style operations.
pub type ApiResult = Result<Option<serde_json::Value>, ApiClientError>;

/// Domain client for the n8n REST API.
///
/// Exposes workflows, executions, credentials, tags, variables, audit,
/// and webhook invocation as async operations, each routed through the
/// resilient [`HttpClient`].
///
/// # Thread Safety
///
/// `N8nClient` is `Send + Sync`; clone-free sharing behind an `Arc` is
/// the intended usage for concurrent tool calls.
///
/// # Example
///
/// ```rust,ignore
/// use n8n_api::{N8nClient, N8nConfig, BaseUrl, ApiKey};
///
/// let config = N8nConfig::builder()
///     .base_url(BaseUrl::new("https://n8n.example.com/api/v1").unwrap())
///     .api_key(ApiKey::new("api-key").unwrap())
///     .build()
///     .unwrap();
///
/// let client = N8nClient::new(config);
/// let workflow = client.get_workflow("42").await?;
/// ```
#[derive(Debug)]
pub struct N8nClient {
    /// The internal resilient HTTP client.
    http_client: HttpClient,
}

// Verify N8nClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<N8nClient>();
};

impl N8nClient {
    /// Creates a new domain client from the given configuration.
    #[must_use]
    pub fn new(config: N8nConfig) -> Self {
        Self {
            http_client: HttpClient::new(config),
        }
    }

    /// Returns a reference to the underlying HTTP client.
    #[must_use]
    pub const fn http_client(&self) -> &HttpClient {
        &self.http_client
    }

    // ------------------------------------------------------------------
    // Workflows
    // ------------------------------------------------------------------

    /// Lists workflows, optionally filtered by active state, tags, cursor,
    /// and limit.
    ///
    /// # Errors
    ///
    /// Returns [`ApiClientError::Http`] for HTTP-level failures.
    pub async fn list_workflows(&self, params: &WorkflowListParams) -> ApiResult {
        let request = HttpRequest::builder(HttpMethod::Get, "/workflows")
            .query(params.to_query())
            .build();
        Ok(self.http_client.request(&request).await?)
    }

    /// Fetches a workflow by id.
    ///
    /// # Errors
    ///
    /// Returns [`ApiClientError::InvalidResourceId`] for an empty id and
    /// [`ApiClientError::Http`] for HTTP-level failures.
    pub async fn get_workflow(&self, id: &str) -> ApiResult {
        let id = validate_id(id)?;
        let request = HttpRequest::builder(HttpMethod::Get, format!("/workflows/{id}")).build();
        Ok(self.http_client.request(&request).await?)
    }

    /// Creates a workflow from the given definition.
    ///
    /// # Errors
    ///
    /// Returns [`ApiClientError::Http`] for HTTP-level failures.
    pub async fn create_workflow(&self, workflow: serde_json::Value) -> ApiResult {
        let request = HttpRequest::builder(HttpMethod::Post, "/workflows")
            .body(workflow)
            .build();
        Ok(self.http_client.request(&request).await?)
    }

    /// Updates a workflow definition by id.
    ///
    /// # Errors
    ///
    /// Returns [`ApiClientError::InvalidResourceId`] for an empty id and
    /// [`ApiClientError::Http`] for HTTP-level failures.
    pub async fn update_workflow(&self, id: &str, workflow: serde_json::Value) -> ApiResult {
        let id = validate_id(id)?;
        let request = HttpRequest::builder(HttpMethod::Put, format!("/workflows/{id}"))
            .body(workflow)
            .build();
        Ok(self.http_client.request(&request).await?)
    }

    /// Deletes a workflow by id.
    ///
    /// Resolves to `Ok(None)` when the upstream returns an empty body.
    ///
    /// # Errors
    ///
    /// Returns [`ApiClientError::InvalidResourceId`] for an empty id and
    /// [`ApiClientError::Http`] for HTTP-level failures.
    pub async fn delete_workflow(&self, id: &str) -> ApiResult {
        let id = validate_id(id)?;
        let request = HttpRequest::builder(HttpMethod::Delete, format!("/workflows/{id}")).build();
        Ok(self.http_client.request(&request).await?)
    }

    /// Activates a workflow by id.
    ///
    /// # Errors
    ///
    /// Returns [`ApiClientError::InvalidResourceId`] for an empty id and
    /// [`ApiClientError::Http`] for HTTP-level failures.
    pub async fn activate_workflow(&self, id: &str) -> ApiResult {
        let id = validate_id(id)?;
        let request =
            HttpRequest::builder(HttpMethod::Post, format!("/workflows/{id}/activate")).build();
        Ok(self.http_client.request(&request).await?)
    }

    /// Deactivates a workflow by id.
    ///
    /// # Errors
    ///
    /// Returns [`ApiClientError::InvalidResourceId`] for an empty id and
    /// [`ApiClientError::Http`] for HTTP-level failures.
    pub async fn deactivate_workflow(&self, id: &str) -> ApiResult {
        let id = validate_id(id)?;
        let request =
            HttpRequest::builder(HttpMethod::Post, format!("/workflows/{id}/deactivate")).build();
        Ok(self.http_client.request(&request).await?)
    }

    // ------------------------------------------------------------------
    // Executions
    // ------------------------------------------------------------------

    /// Lists executions, optionally filtered by workflow id, status,
    /// cursor, and limit.
    ///
    /// # Errors
    ///
    /// Returns [`ApiClientError::Http`] for HTTP-level failures.
    pub async fn list_executions(&self, params: &ExecutionListParams) -> ApiResult {
        let request = HttpRequest::builder(HttpMethod::Get, "/executions")
            .query(params.to_query())
            .build();
        Ok(self.http_client.request(&request).await?)
    }

    /// Fetches an execution by id.
    ///
    /// # Errors
    ///
    /// Returns [`ApiClientError::InvalidResourceId`] for an empty id and
    /// [`ApiClientError::Http`] for HTTP-level failures.
    pub async fn get_execution(&self, id: &str) -> ApiResult {
        let id = validate_id(id)?;
        let request = HttpRequest::builder(HttpMethod::Get, format!("/executions/{id}")).build();
        Ok(self.http_client.request(&request).await?)
    }

    /// Deletes an execution by id.
    ///
    /// # Errors
    ///
    /// Returns [`ApiClientError::InvalidResourceId`] for an empty id and
    /// [`ApiClientError::Http`] for HTTP-level failures.
    pub async fn delete_execution(&self, id: &str) -> ApiResult {
        let id = validate_id(id)?;
        let request = HttpRequest::builder(HttpMethod::Delete, format!("/executions/{id}")).build();
        Ok(self.http_client.request(&request).await?)
    }

    /// Retries a failed execution by id.
    ///
    /// When `load_workflow` is true, the current workflow definition is
    /// reloaded before the retry instead of reusing the snapshot stored
    /// with the execution.
    ///
    /// # Errors
    ///
    /// Returns [`ApiClientError::InvalidResourceId`] for an empty id and
    /// [`ApiClientError::Http`] for HTTP-level failures.
    pub async fn retry_execution(&self, id: &str, load_workflow: bool) -> ApiResult {
        let id = validate_id(id)?;
        let request = HttpRequest::builder(HttpMethod::Post, format!("/executions/{id}/retry"))
            .body(serde_json::json!({ "loadWorkflow": load_workflow }))
            .build();
        Ok(self.http_client.request(&request).await?)
    }

    // ------------------------------------------------------------------
    // Credentials
    // ------------------------------------------------------------------

    /// Lists credentials.
    ///
    /// Credential data itself is never returned by the upstream API; only
    /// metadata (name, type, timestamps).
    ///
    /// # Errors
    ///
    /// Returns [`ApiClientError::Http`] for HTTP-level failures.
    pub async fn list_credentials(&self) -> ApiResult {
        let request = HttpRequest::builder(HttpMethod::Get, "/credentials").build();
        Ok(self.http_client.request(&request).await?)
    }

    /// Fetches the parameter schema for a credential type.
    ///
    /// # Errors
    ///
    /// Returns [`ApiClientError::InvalidResourceId`] for an empty type name
    /// and [`ApiClientError::Http`] for HTTP-level failures.
    pub async fn get_credential_schema(&self, type_name: &str) -> ApiResult {
        let type_name = validate_id(type_name)?;
        let request =
            HttpRequest::builder(HttpMethod::Get, format!("/credentials/schema/{type_name}"))
                .build();
        Ok(self.http_client.request(&request).await?)
    }

    // ------------------------------------------------------------------
    // Tags
    // ------------------------------------------------------------------

    /// Lists tags.
    ///
    /// # Errors
    ///
    /// Returns [`ApiClientError::Http`] for HTTP-level failures.
    pub async fn list_tags(&self) -> ApiResult {
        let request = HttpRequest::builder(HttpMethod::Get, "/tags").build();
        Ok(self.http_client.request(&request).await?)
    }

    /// Creates a tag with the given name.
    ///
    /// # Errors
    ///
    /// Returns [`ApiClientError::Http`] for HTTP-level failures.
    pub async fn create_tag(&self, name: &str) -> ApiResult {
        let request = HttpRequest::builder(HttpMethod::Post, "/tags")
            .body(serde_json::json!({ "name": name }))
            .build();
        Ok(self.http_client.request(&request).await?)
    }

    // ------------------------------------------------------------------
    // Variables
    // ------------------------------------------------------------------

    /// Lists variables.
    ///
    /// # Errors
    ///
    /// Returns [`ApiClientError::Http`] for HTTP-level failures.
    pub async fn list_variables(&self) -> ApiResult {
        let request = HttpRequest::builder(HttpMethod::Get, "/variables").build();
        Ok(self.http_client.request(&request).await?)
    }

    // ------------------------------------------------------------------
    // Audit
    // ------------------------------------------------------------------

    /// Runs a security audit, optionally scoped to the given categories
    /// (e.g. `credentials`, `database`, `nodes`).
    ///
    /// # Errors
    ///
    /// Returns [`ApiClientError::Http`] for HTTP-level failures.
    pub async fn run_audit(&self, categories: Option<&[&str]>) -> ApiResult {
        let mut builder = HttpRequest::builder(HttpMethod::Post, "/audit");
        if let Some(categories) = categories {
            builder = builder.body(serde_json::json!({
                "additionalOptions": { "categories": categories }
            }));
        }
        let request = builder.build();
        Ok(self.http_client.request(&request).await?)
    }

    // ------------------------------------------------------------------
    // Webhooks
    // ------------------------------------------------------------------

    /// Invokes an externally-registered webhook.
    ///
    /// A single attempt with no retry loop; see
    /// [`HttpClient::invoke_webhook`] for the rationale. Returns the raw
    /// response body parsed as JSON, or `None` if empty.
    ///
    /// # Errors
    ///
    /// Returns [`ApiClientError::Http`] for any failure, including
    /// retryable-classified statuses (which are still not retried here).
    pub async fn invoke_webhook(&self, webhook: &WebhookRequest) -> ApiResult {
        Ok(self
            .http_client
            .invoke_webhook(
                webhook.method,
                &webhook.path,
                webhook.payload.as_ref(),
                webhook.basic_auth.as_ref(),
            )
            .await?)
    }
}

/// Rejects ids that would mangle the URL path.
fn validate_id(id: &str) -> Result<&str, ApiClientError> {
    let trimmed = id.trim();
    if trimmed.is_empty() || trimmed.contains('/') {
        return Err(ApiClientError::InvalidResourceId { id: id.to_string() });
    }
    Ok(trimmed)
}
