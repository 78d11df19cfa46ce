//! Client-side authentication settings.
//!
//! Values are fixed at build time. `WAYFARER_AUTH_ENDPOINT` and
//! `WAYFARER_AUTH_TIMEOUT_SECS` override the defaults when set in the
//! environment of the WASM build.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

pub const DEFAULT_AUTH_ENDPOINT: &str =
    "https://rahulmohan.app.n8n.cloud/webhook/933ce8d9-e632-45dc-9144-87188d27666a";
pub const DEFAULT_AUTH_TIMEOUT_SECS: u64 = 20;
pub const LOGIN_PATH: &str = "/login";
pub const DEFAULT_LANDING_PATH: &str = "/discover";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthConfig {
    pub endpoint: String,
    pub timeout: Duration,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self { endpoint: DEFAULT_AUTH_ENDPOINT.to_owned(), timeout: Duration::from_secs(DEFAULT_AUTH_TIMEOUT_SECS) }
    }
}

impl AuthConfig {
    /// Build config from compile-time overrides, falling back to defaults.
    pub fn from_build_env() -> Self {
        Self::from_overrides(option_env!("WAYFARER_AUTH_ENDPOINT"), option_env!("WAYFARER_AUTH_TIMEOUT_SECS"))
    }

    fn from_overrides(endpoint: Option<&str>, timeout_secs: Option<&str>) -> Self {
        let endpoint = endpoint
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .unwrap_or(DEFAULT_AUTH_ENDPOINT)
            .to_owned();
        let timeout_secs = timeout_secs
            .and_then(|value| value.trim().parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .unwrap_or(DEFAULT_AUTH_TIMEOUT_SECS);
        Self { endpoint, timeout: Duration::from_secs(timeout_secs) }
    }
}
