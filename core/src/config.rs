//! Client configuration.
//!
//! The core never reads the process environment; the host resolves the
//! token and endpoint once and hands a `ClientConfig` to the client.

/// Public monday.com GraphQL endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.monday.com/v2";

#[derive(Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Raw API token, sent verbatim as the `Authorization` header.
    pub api_token: Option<String>,
    pub base_url: String,
}

impl ClientConfig {
    pub fn new(api_token: impl Into<String>) -> Self {
        Self {
            api_token: Some(api_token.into()),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_token: None,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

// Hand-written so the token never reaches logs through `{:?}`.
impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_token", &self.api_token.as_ref().map(|_| "<redacted>"))
            .field("base_url", &self.base_url)
            .finish()
    }
}
