//! Webhook registry for the logger
//!
//! Maps a caller-defined category tag to a Discord webhook URL. The registry
//! is built once, before logging begins, and is read-only afterwards - shared
//! across concurrent send calls via `Arc` with no locking.

use std::sync::Arc;

use crate::error::LogError;

/// Mapping from category tags to webhook URLs
///
/// Registration order matters: the first-registered URL is the fallback
/// destination for messages whose category is absent or unknown. Keys are
/// case-sensitive; registering the same key twice keeps the later URL.
///
/// An empty registry is valid to construct but refuses to resolve - the
/// logger treats it as "not configured" and never attempts a request.
#[derive(Debug, Clone, Default)]
pub struct WebhookConfig {
    /// (category, url) pairs in registration order
    entries: Vec<(String, String)>,
}

impl WebhookConfig {
    /// Build a registry from (category, url) pairs
    ///
    /// Replaces nothing in-place: constructing a new `WebhookConfig` is the
    /// way to reconfigure, and the last registration of a duplicate key wins.
    pub fn new<I, K, V>(urls: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut entries: Vec<(String, String)> = Vec::new();
        for (key, url) in urls {
            let key = key.into();
            let url = url.into();
            if let Some(existing) = entries.iter_mut().find(|(k, _)| *k == key) {
                existing.1 = url;
            } else {
                entries.push((key, url));
            }
        }
        Self { entries }
    }

    /// Whether at least one webhook URL has been registered
    pub fn is_configured(&self) -> bool {
        !self.entries.is_empty()
    }

    /// Resolve the destination URL for a category
    ///
    /// An exact (case-sensitive) match wins; an absent or unknown category
    /// falls back to the first-registered URL. An empty registry yields
    /// `LogError::NotConfigured` so the caller can refuse to send.
    pub fn resolve(&self, category: Option<&str>) -> Result<&str, LogError> {
        let fallback = self
            .entries
            .first()
            .map(|(_, url)| url.as_str())
            .ok_or(LogError::NotConfigured)?;

        match category {
            Some(key) => Ok(self
                .entries
                .iter()
                .find(|(k, _)| k == key)
                .map(|(_, url)| url.as_str())
                .unwrap_or(fallback)),
            None => Ok(fallback),
        }
    }

    /// Wrap the registry in an `Arc` for sharing across concurrent sends
    pub fn into_arc(self) -> Arc<Self> {
        Arc::new(self)
    }
}
