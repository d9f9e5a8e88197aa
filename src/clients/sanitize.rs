//! Error message sanitization.
//!
//! Upstream error bodies can contain internal diagnostic detail (stack
//! traces, database errors, hostnames). In [`ErrorMode::Production`] the
//! raw text is replaced with a fixed phrase keyed by status code family;
//! in [`ErrorMode::Development`] the raw text is surfaced, truncated to a
//! bounded length.
//!
//! Sanitization is a pure function of `(mode, status, raw)`: the same
//! inputs always yield the identical output string.

use crate::config::ErrorMode;

/// Maximum raw error text surfaced in development mode.
const MAX_RAW_ERROR_LEN: usize = 500;
/// Marker appended when raw error text is cut off.
const TRUNCATION_MARKER: &str = "... (truncated)";

/// Returns the caller-facing message for a failed response.
#[must_use]
pub fn sanitize_error_message(mode: ErrorMode, status: u16, raw: &str) -> String {
    match mode {
        ErrorMode::Production => generic_message(status).to_string(),
        ErrorMode::Development => truncate_raw(raw),
    }
}

/// Fixed phrase for a status code family.
const fn generic_message(status: u16) -> &'static str {
    match status {
        400 => "Invalid request parameters",
        401 => "Authentication failed",
        403 => "Access denied",
        404 => "Resource not found",
        429 => "Rate limit exceeded",
        500..=599 => "n8n server error",
        _ => "Request failed",
    }
}

/// Truncates raw error text at a character boundary.
fn truncate_raw(raw: &str) -> String {
    if raw.chars().count() <= MAX_RAW_ERROR_LEN {
        return raw.to_string();
    }
    let truncated: String = raw.chars().take(MAX_RAW_ERROR_LEN).collect();
    format!("{truncated}{TRUNCATION_MARKER}")
}
