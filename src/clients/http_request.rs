//! HTTP request types for the n8n API client.
//!
//! This module provides the [`HttpRequest`] type and its builder for
//! constructing requests against the n8n REST API.

use std::collections::HashMap;
use std::fmt;

/// HTTP methods supported by the n8n REST API.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    /// HTTP GET method for retrieving resources.
    Get,
    /// HTTP POST method for creating resources and triggering actions.
    Post,
    /// HTTP PUT method for replacing resources.
    Put,
    /// HTTP PATCH method for partial updates.
    Patch,
    /// HTTP DELETE method for removing resources.
    Delete,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "get"),
            Self::Post => write!(f, "post"),
            Self::Put => write!(f, "put"),
            Self::Patch => write!(f, "patch"),
            Self::Delete => write!(f, "delete"),
        }
    }
}

/// HTTP Basic credentials for webhook invocation.
///
/// Encoded as `Authorization: Basic base64(username:password)` when
/// supplied to [`HttpClient::invoke_webhook`](crate::clients::HttpClient::invoke_webhook).
#[derive(Clone, PartialEq, Eq)]
pub struct BasicAuth {
    /// The username.
    pub username: String,
    /// The password.
    pub password: String,
}

impl BasicAuth {
    /// Creates new Basic credentials.
    #[must_use]
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Returns the `Authorization` header value for these credentials.
    #[must_use]
    pub fn to_header_value(&self) -> String {
        use base64::engine::general_purpose::STANDARD;
        use base64::Engine as _;

        let credentials = format!("{}:{}", self.username, self.password);
        format!("Basic {}", STANDARD.encode(credentials))
    }
}

impl fmt::Debug for BasicAuth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BasicAuth")
            .field("username", &self.username)
            .field("password", &"*****")
            .finish()
    }
}

/// A request to be sent to the n8n API.
///
/// One logical request may be attempted multiple times by the retry loop;
/// the request itself is immutable and re-serialized on each attempt.
///
/// Use [`HttpRequest::builder`] to construct requests.
///
/// # Example
///
/// ```rust
/// use n8n_api::clients::{HttpRequest, HttpMethod};
/// use serde_json::json;
///
/// // GET request
/// let get_request = HttpRequest::builder(HttpMethod::Get, "/workflows").build();
///
/// // POST request with JSON body
/// let post_request = HttpRequest::builder(HttpMethod::Post, "/workflows")
///     .body(json!({"name": "My Workflow", "nodes": []}))
///     .build();
/// ```
#[derive(Clone, Debug)]
pub struct HttpRequest {
    /// The HTTP method for this request.
    pub method: HttpMethod,
    /// The endpoint path, relative to the API root (e.g. `/workflows/42`).
    pub endpoint: String,
    /// The JSON request body, if any.
    pub body: Option<serde_json::Value>,
    /// Query parameters to append to the URL.
    pub query: Option<HashMap<String, String>>,
    /// Additional headers to include in the request.
    ///
    /// Caller headers cannot override the API key header; the client's
    /// key is authoritative.
    pub extra_headers: Option<HashMap<String, String>>,
}

impl HttpRequest {
    /// Creates a new builder for constructing an `HttpRequest`.
    #[must_use]
    pub fn builder(method: HttpMethod, endpoint: impl Into<String>) -> HttpRequestBuilder {
        HttpRequestBuilder::new(method, endpoint)
    }
}

/// Builder for constructing [`HttpRequest`] instances.
#[derive(Debug)]
pub struct HttpRequestBuilder {
    method: HttpMethod,
    endpoint: String,
    body: Option<serde_json::Value>,
    query: Option<HashMap<String, String>>,
    extra_headers: Option<HashMap<String, String>>,
}

impl HttpRequestBuilder {
    /// Creates a new builder with the required method and endpoint.
    fn new(method: HttpMethod, endpoint: impl Into<String>) -> Self {
        Self {
            method,
            endpoint: endpoint.into(),
            body: None,
            query: None,
            extra_headers: None,
        }
    }

    /// Sets the JSON request body.
    #[must_use]
    pub fn body(mut self, body: impl Into<serde_json::Value>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Sets all query parameters at once.
    #[must_use]
    pub fn query(mut self, query: HashMap<String, String>) -> Self {
        self.query = Some(query);
        self
    }

    /// Adds a single query parameter.
    #[must_use]
    pub fn query_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Sets all extra headers at once.
    #[must_use]
    pub fn extra_headers(mut self, headers: HashMap<String, String>) -> Self {
        self.extra_headers = Some(headers);
        self
    }

    /// Adds a single extra header.
    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra_headers
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Builds the [`HttpRequest`].
    #[must_use]
    pub fn build(self) -> HttpRequest {
        HttpRequest {
            method: self.method,
            endpoint: self.endpoint,
            body: self.body,
            query: self.query,
            extra_headers: self.extra_headers,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_http_method_display() {
        assert_eq!(HttpMethod::Get.to_string(), "get");
        assert_eq!(HttpMethod::Post.to_string(), "post");
        assert_eq!(HttpMethod::Put.to_string(), "put");
        assert_eq!(HttpMethod::Patch.to_string(), "patch");
        assert_eq!(HttpMethod::Delete.to_string(), "delete");
    }

    #[test]
    fn test_builder_creates_get_request() {
        let request = HttpRequest::builder(HttpMethod::Get, "/workflows").build();

        assert_eq!(request.method, HttpMethod::Get);
        assert_eq!(request.endpoint, "/workflows");
        assert!(request.body.is_none());
        assert!(request.query.is_none());
    }

    #[test]
    fn test_builder_creates_post_request_with_body() {
        let request = HttpRequest::builder(HttpMethod::Post, "/workflows")
            .body(json!({"name": "Test"}))
            .build();

        assert_eq!(request.method, HttpMethod::Post);
        assert_eq!(request.body, Some(json!({"name": "Test"})));
    }

    #[test]
    fn test_builder_with_query_params() {
        let request = HttpRequest::builder(HttpMethod::Get, "/executions")
            .query_param("limit", "50")
            .query_param("status", "error")
            .build();

        let query = request.query.unwrap();
        assert_eq!(query.get("limit"), Some(&"50".to_string()));
        assert_eq!(query.get("status"), Some(&"error".to_string()));
    }

    #[test]
    fn test_builder_with_extra_headers() {
        let request = HttpRequest::builder(HttpMethod::Get, "/workflows")
            .header("X-Custom-Header", "custom-value")
            .build();

        let headers = request.extra_headers.unwrap();
        assert_eq!(
            headers.get("X-Custom-Header"),
            Some(&"custom-value".to_string())
        );
    }

    #[test]
    fn test_basic_auth_header_value() {
        let auth = BasicAuth::new("user", "pass");
        // base64("user:pass") == "dXNlcjpwYXNz"
        assert_eq!(auth.to_header_value(), "Basic dXNlcjpwYXNz");
    }

    #[test]
    fn test_basic_auth_debug_masks_password() {
        let auth = BasicAuth::new("user", "hunter2");
        let debug = format!("{auth:?}");
        assert!(debug.contains("user"));
        assert!(!debug.contains("hunter2"));
    }

    #[test]
    fn test_builder_chaining() {
        let mut extra = HashMap::new();
        extra.insert("X-Trace".to_string(), "abc".to_string());

        let request = HttpRequest::builder(HttpMethod::Patch, "/workflows/42")
            .body(json!({"active": true}))
            .query_param("force", "true")
            .extra_headers(extra)
            .build();

        assert_eq!(request.method, HttpMethod::Patch);
        assert!(request.body.is_some());
        assert!(request.query.as_ref().unwrap().contains_key("force"));
        assert!(request
            .extra_headers
            .as_ref()
            .unwrap()
            .contains_key("X-Trace"));
    }
}
