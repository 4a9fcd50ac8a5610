//! HTTP delivery to Discord webhooks
//!
//! Handles the POST request, interprets the response, and retries on
//! rate-limiting. Designed to be non-blocking and fail-safe - network errors
//! surface as a typed error, never a panic.

use std::time::Duration;

use reqwest::{Client, Response, StatusCode};
use tracing::{debug, info, warn};

use crate::error::LogError;

/// How many times a single send call may hit HTTP 429 before giving up
pub const MAX_ATTEMPTS: u32 = 5;

/// Back-off used when a 429 response carries no usable `retry-after` header
const DEFAULT_RETRY_DELAY: Duration = Duration::from_secs(1);

/// Deliver a formatted message to a webhook URL
///
/// Drives one send call through its retry loop:
/// 1. POST `{"content": <message>}` with `Content-Type: application/json`
/// 2. 200/204 → success
/// 3. 429 → sleep for the `retry-after` hint (default 1s) and try again,
///    up to [`MAX_ATTEMPTS`] requests total
/// 4. Any other status or transport error → permanent failure, no retry
///
/// The back-off sleep holds no lock; other in-flight sends proceed
/// independently. There is no cross-call coordination - concurrent sends to
/// the same URL each back off on their own. A per-destination token bucket
/// or shared dispatch queue would be the place to add that, if ever needed.
///
/// # Returns
/// * `Ok(())` - the webhook accepted the message
/// * `Err(LogError)` - permanent rejection, transport failure, or retries
///   exhausted
pub async fn deliver(client: &Client, url: &str, message: &str) -> Result<(), LogError> {
    let payload = serde_json::json!({ "content": message });

    for attempt in 0..MAX_ATTEMPTS {
        let response = client
            .post(url)
            .header("Content-Type", "application/json")
            .json(&payload)
            .send()
            .await?;

        match response.status() {
            StatusCode::OK | StatusCode::NO_CONTENT => {
                info!(attempt, "log delivered to webhook");
                return Ok(());
            }
            StatusCode::TOO_MANY_REQUESTS => {
                let delay = retry_after(&response).unwrap_or(DEFAULT_RETRY_DELAY);
                warn!(
                    attempt,
                    delay_secs = delay.as_secs(),
                    "webhook rate limited, backing off"
                );
                tokio::time::sleep(delay).await;
            }
            status => {
                debug!(%status, "webhook rejected message");
                return Err(LogError::SendFailed(status));
            }
        }
    }

    Err(LogError::RetriesExhausted(MAX_ATTEMPTS))
}

/// Read the `retry-after` hint (integer seconds) from a 429 response
///
/// Returns `None` when the header is absent or not a valid integer.
fn retry_after(response: &Response) -> Option<Duration> {
    response
        .headers()
        .get("retry-after")?
        .to_str()
        .ok()?
        .trim()
        .parse::<u64>()
        .ok()
        .map(Duration::from_secs)
}
