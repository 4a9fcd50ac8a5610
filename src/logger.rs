//! Log records, message formatting, and the logging facade
//!
//! This module defines the ephemeral log record, the plain-text formatter,
//! and `DiscordLogger` - the public entry point that resolves a destination,
//! formats the message, and hands it to the HTTP delivery loop. Every
//! failure is mapped to a `false` return and a local diagnostic; nothing
//! here panics or propagates an error to the caller.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;
use serde::Serialize;
use tracing::error;

use crate::client;
use crate::config::WebhookConfig;
use crate::device;
use crate::utils;

/// Discord rejects messages longer than this many characters
pub const MAX_MESSAGE_LEN: usize = 2000;

/// User label embedded when the caller supplies none
pub const DEFAULT_USER: &str = "N/A";

/// Per-request timeout so a stalled webhook never hangs a send call
const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// One log event, created per call and consumed immediately
#[derive(Serialize, Debug, Clone)]
pub struct LogRecord {
    /// The message body supplied by the caller
    pub content: String,

    /// Who or what produced the event
    pub user: String,

    /// Routing tag; `None` routes to the fallback webhook
    pub category: Option<String>,

    /// Additional `key: value` lines, rendered in insertion order
    pub extra_fields: Vec<(String, String)>,
}

impl LogRecord {
    pub fn new(
        content: impl Into<String>,
        user: Option<&str>,
        category: Option<&str>,
        extra_fields: &[(String, String)],
    ) -> Self {
        Self {
            content: content.into(),
            user: user.unwrap_or(DEFAULT_USER).to_string(),
            category: category.map(str::to_string),
            extra_fields: extra_fields.to_vec(),
        }
    }
}

/// Severity tag attached by the convenience entry points
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Info,
    Warning,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Error => "Error",
            Severity::Info => "Info",
            Severity::Warning => "Warning",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Render a record as the plain-text webhook message
///
/// Layout: a metadata header (timestamp in Unix seconds, user, category or
/// the literal `default`, device string), one line per extra field in the
/// order provided, then the content block. The header and field lines are
/// always kept; only the content is truncated when the total would exceed
/// [`MAX_MESSAGE_LEN`].
pub fn format_message(record: &LogRecord, device: &str) -> String {
    let mut header = String::new();
    header.push_str(&format!("Time: {}\n", utils::current_unix_timestamp()));
    header.push_str(&format!("User: {}\n", record.user));
    header.push_str(&format!(
        "Category: {}\n",
        record.category.as_deref().unwrap_or("default")
    ));
    header.push_str(&format!("Device: {}\n", device));
    for (key, value) in &record.extra_fields {
        header.push_str(&format!("{}: {}\n", key, value));
    }

    let budget = MAX_MESSAGE_LEN.saturating_sub(header.len());
    let content = utils::truncate_content(&record.content, budget);

    format!("{header}{content}")
}

/// Forwards log events to Discord webhooks
///
/// Construct it once with a [`WebhookConfig`] and share it freely - it is
/// cheap to clone and every send call is an independent async operation.
/// Callers may ignore the returned boolean for fire-and-forget logging.
#[derive(Debug, Clone)]
pub struct DiscordLogger {
    config: Arc<WebhookConfig>,
    client: Client,
}

impl DiscordLogger {
    /// Create a logger over an already-built registry
    pub fn new(config: WebhookConfig) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_default();
        Self {
            config: config.into_arc(),
            client,
        }
    }

    /// Create a logger directly from (category, url) pairs
    pub fn configure<I, K, V>(urls: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self::new(WebhookConfig::new(urls))
    }

    /// Send a log event to the webhook resolved from `category`
    ///
    /// The only path that performs formatting + delivery. Returns `true`
    /// when the webhook accepted the message; `false` for every failure:
    /// an empty registry (no request is made), a permanent rejection, a
    /// transport error, or an exhausted retry budget. Never panics and
    /// never propagates an error.
    pub async fn send_log(
        &self,
        content: &str,
        user: Option<&str>,
        category: Option<&str>,
        extra_fields: &[(String, String)],
    ) -> bool {
        let url = match self.config.resolve(category) {
            Ok(url) => url.to_string(),
            Err(e) => {
                error!(error = %e, "refusing to send log");
                return false;
            }
        };

        let record = LogRecord::new(content, user, category, extra_fields);
        let device = device::description().await;
        let message = format_message(&record, &device);

        match client::deliver(&self.client, &url, &message).await {
            Ok(()) => true,
            Err(e) => {
                error!(
                    error = %e,
                    category = record.category.as_deref().unwrap_or("default"),
                    "log delivery failed"
                );
                false
            }
        }
    }

    /// Send a log tagged `Severity: Error`
    pub async fn error(
        &self,
        content: &str,
        user: Option<&str>,
        category: Option<&str>,
    ) -> bool {
        self.tagged(Severity::Error, content, user, category).await
    }

    /// Send a log tagged `Severity: Info`
    pub async fn info(
        &self,
        content: &str,
        user: Option<&str>,
        category: Option<&str>,
    ) -> bool {
        self.tagged(Severity::Info, content, user, category).await
    }

    /// Send a log tagged `Severity: Warning`
    pub async fn warning(
        &self,
        content: &str,
        user: Option<&str>,
        category: Option<&str>,
    ) -> bool {
        self.tagged(Severity::Warning, content, user, category).await
    }

    async fn tagged(
        &self,
        severity: Severity,
        content: &str,
        user: Option<&str>,
        category: Option<&str>,
    ) -> bool {
        let extra = [("Severity".to_string(), severity.as_str().to_string())];
        self.send_log(content, user, category, &extra).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_string_contains, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn sample_record() -> LogRecord {
        LogRecord::new(
            "disk usage at 91%",
            Some("worker-3"),
            Some("alerts"),
            &[
                ("Severity".to_string(), "Warning".to_string()),
                ("Region".to_string(), "eu-west-1".to_string()),
            ],
        )
    }

    #[test]
    fn test_format_embeds_all_metadata() {
        let message = format_message(&sample_record(), "Linux (x86_64)");

        assert!(message.contains("User: worker-3"));
        assert!(message.contains("Category: alerts"));
        assert!(message.contains("Device: Linux (x86_64)"));
        assert!(message.contains("Severity: Warning"));
        assert!(message.contains("Region: eu-west-1"));
        assert!(message.ends_with("disk usage at 91%"));
    }

    #[test]
    fn test_format_missing_category_reads_default() {
        let record = LogRecord::new("boot", None, None, &[]);
        let message = format_message(&record, "Linux (x86_64)");

        assert!(message.contains("Category: default"));
        assert!(message.contains(&format!("User: {DEFAULT_USER}")));
    }

    #[test]
    fn test_format_is_deterministic_except_timestamp() {
        let record = sample_record();
        let a = format_message(&record, "Linux (x86_64)");
        let b = format_message(&record, "Linux (x86_64)");

        let a_lines: Vec<&str> = a.lines().collect();
        let b_lines: Vec<&str> = b.lines().collect();
        assert_eq!(a_lines.len(), b_lines.len());

        // The Time line may differ; every other line must be identical
        assert!(a_lines[0].starts_with("Time: "));
        assert!(b_lines[0].starts_with("Time: "));
        a_lines[0]
            .trim_start_matches("Time: ")
            .parse::<i64>()
            .expect("timestamp is Unix seconds");
        assert_eq!(a_lines[1..], b_lines[1..]);
    }

    #[test]
    fn test_format_preserves_extra_field_order() {
        let fields = [
            ("zulu".to_string(), "1".to_string()),
            ("alpha".to_string(), "2".to_string()),
            ("mike".to_string(), "3".to_string()),
        ];
        let record = LogRecord::new("msg", None, None, &fields);
        let message = format_message(&record, "dev");

        let zulu = message.find("zulu: 1").unwrap();
        let alpha = message.find("alpha: 2").unwrap();
        let mike = message.find("mike: 3").unwrap();
        assert!(zulu < alpha && alpha < mike);
    }

    #[test]
    fn test_format_truncates_oversized_content() {
        let record = LogRecord::new("A".repeat(5000), None, None, &[]);
        let message = format_message(&record, "dev");

        assert!(message.len() <= MAX_MESSAGE_LEN);
        assert!(message.ends_with(utils::TRUNCATION_SUFFIX));
        // Header survived the cut
        assert!(message.contains("Category: default"));
    }

    #[tokio::test]
    async fn test_send_log_unconfigured_returns_false() {
        let logger = DiscordLogger::new(WebhookConfig::default());

        // No registry, no request: resolution fails before any network I/O
        let delivered = logger.send_log("lost message", None, None, &[]).await;
        assert!(!delivered);
    }

    #[tokio::test]
    async fn test_send_log_delivers_formatted_message() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/general"))
            .and(body_string_contains("Category: default"))
            .and(body_string_contains("deploy finished"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        let logger =
            DiscordLogger::configure([("general", format!("{}/general", server.uri()))]);
        let delivered = logger.send_log("deploy finished", None, None, &[]).await;

        assert!(delivered);
    }

    #[tokio::test]
    async fn test_send_log_routes_by_category() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/alerts"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        let logger = DiscordLogger::configure([
            ("general", format!("{}/general", server.uri())),
            ("alerts", format!("{}/alerts", server.uri())),
        ]);
        let delivered = logger
            .send_log("pager test", Some("ops"), Some("alerts"), &[])
            .await;

        assert!(delivered);
    }

    #[tokio::test]
    async fn test_facade_adds_severity_field() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/hook"))
            .and(body_string_contains("Severity: Error"))
            .and(body_string_contains("db unreachable"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        let logger = DiscordLogger::configure([("general", format!("{}/hook", server.uri()))]);
        assert!(logger.error("db unreachable", None, None).await);
    }

    #[tokio::test]
    async fn test_facade_severity_tags_per_entry_point() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(body_string_contains("Severity: Info"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(body_string_contains("Severity: Warning"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        let logger = DiscordLogger::configure([("general", format!("{}/hook", server.uri()))]);
        assert!(logger.info("service started", None, None).await);
        assert!(logger.warning("high latency", Some("probe"), None).await);
    }

    #[tokio::test]
    async fn test_send_log_permanent_failure_returns_false() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(400))
            .expect(1)
            .mount(&server)
            .await;

        let logger = DiscordLogger::configure([("general", format!("{}/hook", server.uri()))]);
        let delivered = logger.send_log("rejected", None, None, &[]).await;

        assert!(!delivered);
    }

    #[test]
    fn test_severity_display() {
        assert_eq!(Severity::Error.to_string(), "Error");
        assert_eq!(Severity::Info.to_string(), "Info");
        assert_eq!(Severity::Warning.to_string(), "Warning");
    }

    #[test]
    fn test_log_record_serializes() {
        let json = serde_json::to_string(&sample_record()).expect("serialize");
        assert!(json.contains("disk usage"));
        assert!(json.contains("worker-3"));
        assert!(json.contains("alerts"));
    }
}
