use log::debug;
use reqwest::{
    Client,
    header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue},
};
use std::time::Duration;

use super::auth::ApiToken;
use crate::error::{FreesoundError, Result};

/// Environment variable holding the default API token.
pub const API_KEY_ENV: &str = "FREESOUND_API_KEY";

pub const DEFAULT_API_URL: &str = "https://freesound.org/apiv2";

/// Applies to every request, including downloads.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Settings used to build a [`FreesoundClient`](super::FreesoundClient).
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Explicit token; empty or `None` falls back to `FREESOUND_API_KEY`
    pub token: Option<String>,
    /// Base URL, defaults to [`DEFAULT_API_URL`]
    pub api_url: Option<String>,
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            token: None,
            api_url: None,
            timeout: DEFAULT_TIMEOUT,
            user_agent: format!("freesound-dl/{}", env!("FREESOUND_DL_VERSION")),
        }
    }
}

impl ClientConfig {
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
            ..Self::default()
        }
    }

    /// Base URL without trailing slashes.
    pub fn base_url(&self) -> String {
        self.api_url
            .as_deref()
            .unwrap_or(DEFAULT_API_URL)
            .trim_end_matches('/')
            .to_string()
    }
}

/// Builds a reqwest client that sends the token and JSON content type on
/// every request and enforces the configured timeout.
pub fn build_http_client(token: &ApiToken, config: &ClientConfig) -> Result<Client> {
    let mut headers = HeaderMap::new();

    let mut auth_value = HeaderValue::from_str(&format!("Token {}", token.expose()))
        .map_err(FreesoundError::InvalidTokenHeader)?;
    auth_value.set_sensitive(true);
    headers.insert(AUTHORIZATION, auth_value);
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

    debug!(
        "Building HTTP client with token {} and timeout {:?}",
        token, config.timeout
    );

    Client::builder()
        .user_agent(config.user_agent.as_str())
        .default_headers(headers)
        .timeout(config.timeout)
        .build()
        .map_err(FreesoundError::Client)
}
