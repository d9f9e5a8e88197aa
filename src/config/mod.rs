//! Configuration types for the n8n API client.
//!
//! This module provides the core configuration types used to initialize
//! the client for API communication with an n8n instance.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`N8nConfig`]: The main configuration struct holding all client settings
//! - [`N8nConfigBuilder`]: A builder for constructing [`N8nConfig`] instances
//! - [`BaseUrl`]: A validated API base URL
//! - [`ApiKey`]: A validated API key newtype with masked debug output
//! - [`ErrorMode`]: Controls error message sanitization
//!
//! # Example
//!
//! ```rust
//! use n8n_api::{N8nConfig, BaseUrl, ApiKey};
//!
//! let config = N8nConfig::builder()
//!     .base_url(BaseUrl::new("https://n8n.example.com/api/v1").unwrap())
//!     .api_key(ApiKey::new("my-api-key").unwrap())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.timeout().as_millis(), 30_000);
//! ```

mod newtypes;

pub use newtypes::{ApiKey, BaseUrl, ErrorMode};

use crate::error::ConfigError;
use std::time::Duration;

/// Default per-attempt timeout (30 seconds).
const DEFAULT_TIMEOUT_MS: u64 = 30_000;
/// Default maximum number of attempts per logical request.
const DEFAULT_MAX_RETRIES: u32 = 3;
/// Default base retry delay (doubles per retry).
const DEFAULT_RETRY_DELAY_MS: u64 = 1_000;

/// Configuration for the n8n API client.
///
/// This struct holds all configuration needed for client operations:
/// the instance base URL, the API key, and the retry/timeout policy.
/// It is created once and never mutated afterwards.
///
/// # Thread Safety
///
/// `N8nConfig` is `Clone`, `Send`, and `Sync`, making it safe to share
/// across threads and async tasks.
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use n8n_api::{N8nConfig, BaseUrl, ApiKey, ErrorMode};
///
/// let config = N8nConfig::builder()
///     .base_url(BaseUrl::new("https://n8n.example.com/api/v1").unwrap())
///     .api_key(ApiKey::new("my-api-key").unwrap())
///     .timeout(Duration::from_secs(10))
///     .max_retries(5)
///     .error_mode(ErrorMode::Development)
///     .build()
///     .unwrap();
///
/// assert_eq!(config.max_retries(), 5);
/// ```
#[derive(Clone, Debug)]
pub struct N8nConfig {
    base_url: BaseUrl,
    api_key: ApiKey,
    timeout: Duration,
    max_retries: u32,
    retry_delay: Duration,
    error_mode: ErrorMode,
}

impl N8nConfig {
    /// Creates a new builder for constructing an `N8nConfig`.
    #[must_use]
    pub fn builder() -> N8nConfigBuilder {
        N8nConfigBuilder::new()
    }

    /// Returns the API base URL.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the API key.
    #[must_use]
    pub const fn api_key(&self) -> &ApiKey {
        &self.api_key
    }

    /// Returns the per-attempt timeout.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Returns the maximum number of attempts per logical request.
    #[must_use]
    pub const fn max_retries(&self) -> u32 {
        self.max_retries
    }

    /// Returns the base retry delay (doubles per retry).
    #[must_use]
    pub const fn retry_delay(&self) -> Duration {
        self.retry_delay
    }

    /// Returns the error sanitization mode.
    #[must_use]
    pub const fn error_mode(&self) -> ErrorMode {
        self.error_mode
    }
}

// Verify N8nConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<N8nConfig>();
};

/// Builder for constructing [`N8nConfig`] instances.
///
/// Required fields are `base_url` and `api_key`. All other fields have
/// sensible defaults.
///
/// # Defaults
///
/// - `timeout`: 30 seconds
/// - `max_retries`: 3
/// - `retry_delay`: 1 second
/// - `error_mode`: [`ErrorMode::Production`]
#[derive(Debug, Default)]
pub struct N8nConfigBuilder {
    base_url: Option<BaseUrl>,
    api_key: Option<ApiKey>,
    timeout: Option<Duration>,
    max_retries: Option<u32>,
    retry_delay: Option<Duration>,
    error_mode: Option<ErrorMode>,
}

impl N8nConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API base URL (required).
    #[must_use]
    pub fn base_url(mut self, url: BaseUrl) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Sets the API key (required).
    #[must_use]
    pub fn api_key(mut self, key: ApiKey) -> Self {
        self.api_key = Some(key);
        self
    }

    /// Sets the per-attempt timeout.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the maximum number of attempts per logical request.
    ///
    /// A value of 1 disables retries entirely.
    #[must_use]
    pub const fn max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = Some(max_retries);
        self
    }

    /// Sets the base retry delay. The delay before attempt `k + 1` is
    /// `retry_delay * 2^(k - 1)`.
    #[must_use]
    pub const fn retry_delay(mut self, delay: Duration) -> Self {
        self.retry_delay = Some(delay);
        self
    }

    /// Sets the error sanitization mode.
    #[must_use]
    pub const fn error_mode(mut self, mode: ErrorMode) -> Self {
        self.error_mode = Some(mode);
        self
    }

    /// Builds the [`N8nConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `base_url` or
    /// `api_key` are not set.
    pub fn build(self) -> Result<N8nConfig, ConfigError> {
        let base_url = self
            .base_url
            .ok_or(ConfigError::MissingRequiredField { field: "base_url" })?;
        let api_key = self
            .api_key
            .ok_or(ConfigError::MissingRequiredField { field: "api_key" })?;

        Ok(N8nConfig {
            base_url,
            api_key,
            timeout: self
                .timeout
                .unwrap_or(Duration::from_millis(DEFAULT_TIMEOUT_MS)),
            max_retries: self.max_retries.unwrap_or(DEFAULT_MAX_RETRIES).max(1),
            retry_delay: self
                .retry_delay
                .unwrap_or(Duration::from_millis(DEFAULT_RETRY_DELAY_MS)),
            error_mode: self.error_mode.unwrap_or_default(),
        })
    }
}
