//! Device identification for log messages
//!
//! Supplies a human-readable description of the platform the process runs
//! on. The function is async to match richer probes (OS version lookups,
//! hardware queries) that callers may substitute; the built-in one only
//! consults compile-time constants and is best-effort by design - it always
//! produces a string, never an error.

/// Describe the current platform, e.g. `"Linux (x86_64)"`
///
/// Unrecognized platforms yield the literal `"Unknown Platform"`.
pub async fn description() -> String {
    let os = match std::env::consts::OS {
        "linux" => "Linux",
        "macos" => "macOS",
        "windows" => "Windows",
        "android" => "Android",
        "ios" => "iOS",
        "freebsd" => "FreeBSD",
        _ => return "Unknown Platform".to_string(),
    };
    format!("{} ({})", os, std::env::consts::ARCH)
}
