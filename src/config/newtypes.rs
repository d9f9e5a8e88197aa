//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use std::fmt;

/// A validated n8n API key.
///
/// This newtype ensures the API key is non-empty and masks its value
/// in debug output to prevent accidental exposure in logs.
///
/// # Security
///
/// The `Debug` implementation masks the key value, displaying only
/// `ApiKey(*****)` instead of the actual key.
///
/// # Example
///
/// ```rust
/// use n8n_api::ApiKey;
///
/// let key = ApiKey::new("my-api-key").unwrap();
/// assert_eq!(key.as_ref(), "my-api-key");
/// assert_eq!(format!("{:?}", key), "ApiKey(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Creates a new validated API key.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyApiKey`] if the key is empty.
    pub fn new(key: impl Into<String>) -> Result<Self, ConfigError> {
        let key = key.into();
        if key.is_empty() {
            return Err(ConfigError::EmptyApiKey);
        }
        Ok(Self(key))
    }
}

impl AsRef<str> for ApiKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(*****)")
    }
}

/// A validated n8n base URL.
///
/// This newtype validates that the URL is an absolute http(s) URL and
/// normalizes it by stripping any trailing slash.
///
/// The base URL points at the REST API root, conventionally
/// `https://<instance>/api/v1`. Webhooks are registered at the instance
/// root rather than under the API path, so [`BaseUrl::instance_root`]
/// strips a trailing `/api/v1` segment when present.
///
/// # Example
///
/// ```rust
/// use n8n_api::BaseUrl;
///
/// let url = BaseUrl::new("https://n8n.example.com/api/v1/").unwrap();
/// assert_eq!(url.api_root(), "https://n8n.example.com/api/v1");
/// assert_eq!(url.instance_root(), "https://n8n.example.com");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BaseUrl(String);

impl BaseUrl {
    const API_SUFFIX: &'static str = "/api/v1";

    /// Creates a new validated base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] if the URL does not start
    /// with `http://` or `https://`, or has no host component.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let trimmed = url.trim();

        let rest = trimmed
            .strip_prefix("https://")
            .or_else(|| trimmed.strip_prefix("http://"));

        match rest {
            Some(host) if !host.is_empty() && !host.starts_with('/') => {
                Ok(Self(trimmed.trim_end_matches('/').to_string()))
            }
            _ => Err(ConfigError::InvalidBaseUrl { url }),
        }
    }

    /// Returns the API root URL (no trailing slash).
    #[must_use]
    pub fn api_root(&self) -> &str {
        &self.0
    }

    /// Returns the instance root URL, with any trailing `/api/v1` stripped.
    ///
    /// Webhook paths resolve against this root.
    #[must_use]
    pub fn instance_root(&self) -> &str {
        self.0.strip_suffix(Self::API_SUFFIX).unwrap_or(&self.0)
    }
}

impl AsRef<str> for BaseUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Controls how upstream error messages are surfaced to callers.
///
/// In [`ErrorMode::Production`], raw upstream error text is replaced by a
/// fixed generic phrase keyed by status code family, preventing internal
/// diagnostic detail from leaking out of the platform. In
/// [`ErrorMode::Development`], the raw text is surfaced, truncated to a
/// bounded length.
///
/// This is an explicit configuration flag rather than an ambient
/// environment read, so both modes are testable without environment
/// mutation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ErrorMode {
    /// Replace upstream error text with generic phrases.
    #[default]
    Production,
    /// Surface raw upstream error text, truncated.
    Development,
}
