//! Build-time client configuration.
//!
//! The WASM bundle cannot read the process environment at runtime, so the
//! API base URL is baked in from `SHORT_URL_API_BASE_URL` when the crate is
//! compiled.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

/// Shortening service used when `SHORT_URL_API_BASE_URL` is unset at build time.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8010";

/// Upper bound on a single API request, including reading the body.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// How long the "copied" notice stays visible.
pub const NOTICE_DISMISS_AFTER: Duration = Duration::from_secs(3);

/// Base URL of the shortening service, without a trailing slash.
pub fn api_base_url() -> String {
    resolve_api_base_url(option_env!("SHORT_URL_API_BASE_URL"))
}

fn resolve_api_base_url(raw: Option<&str>) -> String {
    raw.map(str::trim)
        .filter(|value| !value.is_empty())
        .unwrap_or(DEFAULT_API_BASE_URL)
        .trim_end_matches('/')
        .to_owned()
}
