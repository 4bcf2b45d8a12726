//! Environment-backed configuration for the runner.

use monday_core::{ClientConfig, DEFAULT_BASE_URL};

pub const TOKEN_VAR: &str = "MONDAY_API_TOKEN";
pub const BASE_URL_VAR: &str = "MONDAY_BASE_URL";

/// Read `MONDAY_API_TOKEN` and `MONDAY_BASE_URL` once.
///
/// A missing token is kept as `None`; the client rejects it at construction.
/// `base_url_override` wins over the environment.
pub fn from_env(base_url_override: Option<&str>) -> ClientConfig {
    let api_token = std::env::var(TOKEN_VAR).ok().filter(|token| !token.is_empty());
    let base_url = match base_url_override {
        Some(url) => url.to_string(),
        None => std::env::var(BASE_URL_VAR)
            .ok()
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
    };
    ClientConfig { api_token, base_url }
}
