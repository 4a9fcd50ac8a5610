//! Utility functions for the webhook logger
//!
//! Provides helper functions for timestamps and content truncation.

use chrono::Utc;

/// Suffix appended when content had to be cut to fit the message limit
pub const TRUNCATION_SUFFIX: &str = "... (truncated)";

/// Get the current timestamp as Unix seconds
pub fn current_unix_timestamp() -> i64 {
    Utc::now().timestamp()
}

/// Truncate content so it fits in `max_len` bytes
///
/// Limits content size to avoid the transport rejecting oversized messages.
/// When truncation occurs, the [`TRUNCATION_SUFFIX`] is included within the
/// budget and the cut lands on a UTF-8 character boundary. A budget too
/// small even for the suffix drops the content entirely.
pub fn truncate_content(content: &str, max_len: usize) -> String {
    if content.len() <= max_len {
        return content.to_string();
    }

    let Some(budget) = max_len.checked_sub(TRUNCATION_SUFFIX.len()) else {
        return String::new();
    };

    let mut end = budget;
    while !content.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}{}", &content[..end], TRUNCATION_SUFFIX)
}
