//! Error types for the webhook logger
//!
//! All errors are designed to be non-fatal - the `DiscordLogger` facade
//! catches them, emits a local diagnostic, and reports `false` to the caller
//! without ever crashing the host application.

use thiserror::Error;

/// Main error type for webhook delivery operations
#[derive(Error, Debug)]
pub enum LogError {
    /// No webhook URLs have been registered; sending is refused outright
    #[error("Not configured: no webhook URLs registered")]
    NotConfigured,

    /// Network-related errors (connection, DNS, timeout, etc.)
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The webhook rejected the message with a non-retryable status code
    #[error("Failed to send log: HTTP {0}")]
    SendFailed(reqwest::StatusCode),

    /// Every attempt was answered with HTTP 429 until the retry budget ran out
    #[error("Rate limited: retries exhausted after {0} attempts")]
    RetriesExhausted(u32),
}

impl LogError {
    /// True when the failure is the rate-limit budget running out, as opposed
    /// to a permanent rejection
    pub fn is_exhausted(&self) -> bool {
        matches!(self, LogError::RetriesExhausted(_))
    }
}
