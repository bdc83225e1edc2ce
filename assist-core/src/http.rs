//! Shared HTTP client utilities
//!
//! This module provides a shared, lazily-initialized HTTP client for all
//! provider calls. Using a single client allows connection pooling and gives
//! one place to set the request timeout.

use reqwest::Client;
use std::sync::OnceLock;
use std::time::Duration;

/// Default HTTP timeout for provider requests in seconds
const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Global HTTP client shared by every dispatch
static HTTP_CLIENT: OnceLock<Client> = OnceLock::new();

/// Get or create the shared HTTP client
///
/// Scoped per-call credentials do not get their own client; they reuse this
/// pool and only differ in the request headers.
pub fn get_client() -> &'static Client {
    HTTP_CLIENT.get_or_init(|| {
        Client::builder()
            .user_agent("idmc-assist/0.1")
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .expect("Failed to create HTTP client - this should never fail")
    })
}

/// Strip markdown code blocks from JSON response
///
/// Even in JSON output mode some models wrap their response in markdown
/// code blocks like:
/// ```json
/// {"key": "value"}
/// ```
///
/// This function removes such wrappers and returns the clean JSON content.
pub fn strip_markdown_json(content: &str) -> &str {
    let trimmed = content.trim();

    // Handle ```json ... ```
    if let Some(stripped) = trimmed
        .strip_prefix("```json")
        .and_then(|s| s.strip_suffix("```"))
    {
        return stripped.trim();
    }

    // Handle ``` ... ```
    if let Some(stripped) = trimmed
        .strip_prefix("```")
        .and_then(|s| s.strip_suffix("```"))
    {
        return stripped.trim();
    }

    content
}
