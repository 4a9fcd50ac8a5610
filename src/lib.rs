//! # Discord Webhook Logger
//!
//! Forward application log events to Discord channels via incoming webhooks.
//!
//! The crate routes each event to a webhook URL by a caller-defined category
//! tag, renders it as plain text, and performs the HTTP POST with
//! rate-limit-aware retry. It's designed with these principles:
//!
//! - **Non-blocking**: every send is an independent async operation; the
//!   back-off sleep never blocks other in-flight sends
//! - **Fail-safe**: an empty registry or a delivery failure yields `false`,
//!   never a panic or a propagated error
//! - **Fire-and-forget friendly**: callers are free to drop the returned
//!   boolean
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use discord_webhook_logger::DiscordLogger;
//!
//! #[tokio::main]
//! async fn main() {
//!     let logger = DiscordLogger::configure([
//!         ("general", "https://discord.com/api/webhooks/111/general-token"),
//!         ("alerts", "https://discord.com/api/webhooks/222/alerts-token"),
//!     ]);
//!
//!     // Routed to the "alerts" webhook
//!     logger.warning("disk usage at 91%", Some("worker-3"), Some("alerts")).await;
//!
//!     // Unknown or missing categories fall back to the first-registered URL
//!     logger.info("service started", None, None).await;
//! }
//! ```
//!
//! ## How It Works
//!
//! 1. The category is resolved against the registry (first-registered URL is
//!    the fallback; an empty registry refuses to send)
//! 2. The message is formatted: Unix timestamp, user, category, device
//!    string, extra `key: value` lines, then the content block (truncated to
//!    Discord's 2000-character limit)
//! 3. The message is POSTed as `{"content": ...}`; HTTP 429 responses are
//!    retried up to 5 times honoring the `retry-after` hint, any other
//!    failure is permanent for that call
//! 4. The caller gets `true` only when the webhook accepted the message
//!
//! Concurrent sends to the same webhook back off independently; there is no
//! cross-call rate-limit coordination.
//!
//! ## Architecture
//!
//! - `config`: category-to-URL registry with registration-order fallback
//! - `logger`: log record, message formatting, and the `DiscordLogger` facade
//! - `client`: HTTP delivery with the 429 retry loop
//! - `device`: best-effort platform description for message headers
//! - `error`: custom error types for clean error handling
//! - `utils`: helper functions (timestamps, truncation)

pub mod client;
pub mod config;
pub mod device;
pub mod error;
pub mod logger;
pub mod utils;

// Re-export main components for easy access
pub use config::WebhookConfig;
pub use error::LogError;
pub use logger::{DiscordLogger, LogRecord, Severity};

/// Convenience prelude for importing common types
pub mod prelude {
    pub use crate::config::WebhookConfig;
    pub use crate::error::LogError;
    pub use crate::logger::{DiscordLogger, LogRecord, Severity};
}
