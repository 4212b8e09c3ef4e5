//! Utility modules for web, DOM, and formatting operations.
//!
//! Provides:
//! - [`fetch_json`], [`fetch_github_json`], [`fetch_json_cached`], [`fetch_content`] - Network fetching with timeout
//! - [`cache`] - sessionStorage cache
//! - [`dom`] - Browser API access
//! - [`format`] - Display strings
//! - [`validate_problem_url`] - Link validation

pub mod cache;
pub mod dom;
mod fetch;
pub mod format;
mod url;

pub use fetch::{fetch_content, fetch_github_json, fetch_json, fetch_json_cached};
pub use url::{UrlValidation, safe_problem_url, validate_problem_url};

/// Current time in milliseconds since the Unix epoch.
#[cfg(target_arch = "wasm32")]
pub fn now_ms() -> f64 {
    js_sys::Date::now()
}

/// Current time in milliseconds since the Unix epoch.
#[cfg(not(target_arch = "wasm32"))]
pub fn now_ms() -> f64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs_f64() * 1000.0)
        .unwrap_or(0.0)
}
