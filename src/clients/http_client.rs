//! HTTP client for n8n API communication.
//!
//! This module provides the [`HttpClient`] type: the resilient request
//! engine every domain operation is routed through. It enforces a
//! per-attempt timeout, retries transient failures with exponential
//! backoff, and translates low-level failures into the stable error
//! taxonomy in [`crate::clients::errors`].

use std::collections::HashMap;
use std::time::Duration;

use crate::clients::errors::{ApiError, HttpError, TimeoutError};
use crate::clients::http_request::{BasicAuth, HttpMethod, HttpRequest};
use crate::clients::sanitize::sanitize_error_message;
use crate::config::N8nConfig;

/// Header carrying the n8n API key.
pub const API_KEY_HEADER: &str = "X-N8N-API-KEY";

/// Outcome of a single request attempt.
///
/// The retry loop is driven by pattern-matching on this tag rather than by
/// catching errors, keeping the retryable/terminal distinction explicit.
#[derive(Debug)]
enum AttemptOutcome {
    /// 2xx response; `None` when the body was empty (delete-style endpoints).
    Success(Option<serde_json::Value>),
    /// Transient failure (429, 5xx, or connection-level); carries the error
    /// to raise if no attempts remain.
    Retry(HttpError),
    /// Terminal failure; raised immediately regardless of remaining attempts.
    Fatal(HttpError),
}

/// Resilient HTTP client for the n8n REST API.
///
/// The client handles:
/// - URL construction from the configured base URL
/// - Header merging with an authoritative API key header
/// - Per-attempt timeout enforcement
/// - Automatic retry with exponential backoff on 429 and 5xx responses
///   and on connection-level failures
/// - Error message sanitization per the configured
///   [`ErrorMode`](crate::config::ErrorMode)
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync` and holds no mutable state; concurrent
/// calls run fully independent attempt loops.
///
/// # Example
///
/// ```rust,ignore
/// use n8n_api::{N8nConfig, BaseUrl, ApiKey};
/// use n8n_api::clients::{HttpClient, HttpRequest, HttpMethod};
///
/// let config = N8nConfig::builder()
///     .base_url(BaseUrl::new("https://n8n.example.com/api/v1").unwrap())
///     .api_key(ApiKey::new("api-key").unwrap())
///     .build()
///     .unwrap();
///
/// let client = HttpClient::new(config);
/// let request = HttpRequest::builder(HttpMethod::Get, "/workflows").build();
/// let body = client.request(&request).await?;
/// ```
#[derive(Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Immutable client configuration.
    config: N8nConfig,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client from the given configuration.
    ///
    /// # Panics
    ///
    /// Panics if the reqwest client itself cannot be constructed, which
    /// requires the rustls backend to fail to load. Configuration problems
    /// never reach this point; they are rejected when building [`N8nConfig`].
    #[must_use]
    pub fn new(config: N8nConfig) -> Self {
        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .build()
            .expect("Failed to create HTTP client");

        Self { client, config }
    }

    /// Returns the client configuration.
    #[must_use]
    pub const fn config(&self) -> &N8nConfig {
        &self.config
    }

    /// Executes one logical API request, retrying transient failures.
    ///
    /// Attempts are 1-indexed and capped at `max_retries`. A 429 or 5xx
    /// response and any connection-level failure are retried after a sleep
    /// of `retry_delay * 2^(attempt - 1)`. Non-retryable HTTP errors and
    /// timeouts terminate immediately, regardless of remaining attempts.
    ///
    /// Returns the parsed JSON body on success, or `None` if the response
    /// body was empty (the documented contract for delete-style endpoints).
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] when the request terminally fails:
    /// - [`HttpError::Api`] for a non-2xx response that was not (or could
    ///   no longer be) retried
    /// - [`HttpError::Timeout`] when the per-attempt timer fired
    /// - [`HttpError::Network`] for the last connection-level failure once
    ///   retries are exhausted
    /// - [`HttpError::MalformedResponse`] for a 2xx response with an
    ///   unparseable non-empty body
    pub async fn request(
        &self,
        request: &HttpRequest,
    ) -> Result<Option<serde_json::Value>, HttpError> {
        let max_attempts = self.config.max_retries();
        let mut attempt: u32 = 0;

        loop {
            attempt += 1;
            tracing::debug!(
                endpoint = %request.endpoint,
                method = %request.method,
                attempt,
                "sending API request"
            );

            match self.execute_attempt(request).await {
                AttemptOutcome::Success(body) => {
                    tracing::debug!(endpoint = %request.endpoint, attempt, "request succeeded");
                    return Ok(body);
                }
                AttemptOutcome::Fatal(error) => {
                    tracing::warn!(
                        endpoint = %request.endpoint,
                        status = error.status(),
                        attempt,
                        retryable = false,
                        "request failed terminally: {error}"
                    );
                    return Err(error);
                }
                AttemptOutcome::Retry(error) => {
                    tracing::warn!(
                        endpoint = %request.endpoint,
                        status = error.status(),
                        attempt,
                        retryable = true,
                        "attempt failed: {error}"
                    );
                    if attempt >= max_attempts {
                        return Err(error);
                    }
                    let delay = backoff_delay(self.config.retry_delay(), attempt);
                    tracing::info!(
                        endpoint = %request.endpoint,
                        delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX),
                        attempt,
                        "retrying after backoff"
                    );
                    tokio::time::sleep(delay).await;
                }
            }
        }
    }

    /// Invokes an externally-registered webhook.
    ///
    /// Same timeout mechanics and error taxonomy as [`request`](Self::request),
    /// but a single attempt only: webhook targets are user-defined external
    /// endpoints, not the platform's own API, so blind retries are not
    /// assumed safe. Optional HTTP Basic credentials are added as an
    /// `Authorization` header.
    ///
    /// The webhook path resolves against the instance root (webhooks are
    /// not hosted under `/api/v1`).
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on any failure; a retryable-classified status
    /// such as 500 still terminates after the single attempt.
    pub async fn invoke_webhook(
        &self,
        method: HttpMethod,
        path: &str,
        payload: Option<&serde_json::Value>,
        auth: Option<&BasicAuth>,
    ) -> Result<Option<serde_json::Value>, HttpError> {
        let url = format!(
            "{}/{}",
            self.config.base_url().instance_root(),
            path.trim_start_matches('/')
        );
        tracing::debug!(%url, method = %method, "invoking webhook");

        let mut headers = HashMap::new();
        headers.insert(
            "Content-Type".to_string(),
            "application/json".to_string(),
        );
        if let Some(auth) = auth {
            headers.insert("Authorization".to_string(), auth.to_header_value());
        }

        let mut builder = self.builder_for(method, &url).timeout(self.config.timeout());
        for (key, value) in &headers {
            builder = builder.header(key.as_str(), value.as_str());
        }
        if let Some(payload) = payload {
            builder = builder.json(payload);
        }

        let outcome = self.resolve_response(builder.send().await, path).await;
        match outcome {
            AttemptOutcome::Success(body) => {
                tracing::debug!(path, "webhook invocation succeeded");
                Ok(body)
            }
            AttemptOutcome::Retry(error) | AttemptOutcome::Fatal(error) => {
                tracing::warn!(path, status = error.status(), "webhook invocation failed: {error}");
                Err(error)
            }
        }
    }

    /// Performs a single attempt against the API root.
    async fn execute_attempt(&self, request: &HttpRequest) -> AttemptOutcome {
        let url = format!(
            "{}{}",
            self.config.base_url().api_root(),
            request.endpoint
        );

        // Merge headers; the API key header is inserted last so caller
        // headers cannot unset it.
        let mut headers = HashMap::new();
        headers.insert(
            "Content-Type".to_string(),
            "application/json".to_string(),
        );
        headers.insert("Accept".to_string(), "application/json".to_string());
        if let Some(extra) = &request.extra_headers {
            for (key, value) in extra {
                headers.insert(key.clone(), value.clone());
            }
        }
        headers.insert(
            API_KEY_HEADER.to_string(),
            self.config.api_key().as_ref().to_string(),
        );

        let mut builder = self
            .builder_for(request.method, &url)
            .timeout(self.config.timeout());
        for (key, value) in &headers {
            builder = builder.header(key.as_str(), value.as_str());
        }
        if let Some(query) = &request.query {
            builder = builder.query(query);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        self.resolve_response(builder.send().await, &request.endpoint)
            .await
    }

    /// Classifies the result of one network call into an attempt outcome.
    async fn resolve_response(
        &self,
        result: Result<reqwest::Response, reqwest::Error>,
        endpoint: &str,
    ) -> AttemptOutcome {
        let response = match result {
            Ok(response) => response,
            Err(error) => return self.classify_transport_error(error, endpoint),
        };

        let status = response.status().as_u16();
        // Read the body as raw text; error bodies are context for
        // sanitization, success bodies are parsed below.
        let text = match response.text().await {
            Ok(text) => text,
            Err(error) => return self.classify_transport_error(error, endpoint),
        };

        if !(200..300).contains(&status) {
            let retryable = status == 429 || (500..600).contains(&status);
            let error = ApiError {
                message: sanitize_error_message(self.config.error_mode(), status, &text),
                status,
                endpoint: endpoint.to_string(),
                retryable,
            };
            return if retryable {
                AttemptOutcome::Retry(error.into())
            } else {
                AttemptOutcome::Fatal(error.into())
            };
        }

        // Empty body is success, not an error (delete-style endpoints).
        if text.is_empty() {
            return AttemptOutcome::Success(None);
        }

        match serde_json::from_str(&text) {
            Ok(value) => AttemptOutcome::Success(Some(value)),
            Err(source) => AttemptOutcome::Fatal(HttpError::MalformedResponse {
                endpoint: endpoint.to_string(),
                source,
            }),
        }
    }

    /// Maps a pre-response failure: timeouts are terminal, everything else
    /// is a retryable connection-level failure.
    fn classify_transport_error(&self, error: reqwest::Error, endpoint: &str) -> AttemptOutcome {
        if error.is_timeout() {
            AttemptOutcome::Fatal(HttpError::Timeout(TimeoutError {
                endpoint: endpoint.to_string(),
                timeout_ms: u64::try_from(self.config.timeout().as_millis()).unwrap_or(u64::MAX),
            }))
        } else {
            AttemptOutcome::Retry(HttpError::Network(error))
        }
    }

    /// Starts a reqwest builder for the given method and absolute URL.
    fn builder_for(&self, method: HttpMethod, url: &str) -> reqwest::RequestBuilder {
        match method {
            HttpMethod::Get => self.client.get(url),
            HttpMethod::Post => self.client.post(url),
            HttpMethod::Put => self.client.put(url),
            HttpMethod::Patch => self.client.patch(url),
            HttpMethod::Delete => self.client.delete(url),
        }
    }
}

/// Delay before the attempt following 1-indexed `attempt`:
/// `base * 2^(attempt - 1)`, so the first retry waits exactly `base`.
fn backoff_delay(base: Duration, attempt: u32) -> Duration {
    let factor = 2u32.saturating_pow(attempt.saturating_sub(1));
    base.saturating_mul(factor)
}
