use anyhow::{Context, Result};
use log::debug;
use std::time::Duration;

use crate::freesound::{ClientConfig, FreesoundClient};
use crate::runtime::Runtime;

/// Connection settings shared by every subcommand.
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub token: Option<String>,
    pub api_url: Option<String>,
    pub timeout_secs: Option<u64>,
}

impl Config {
    pub fn client_config(&self) -> ClientConfig {
        let mut config = ClientConfig {
            token: self.token.clone(),
            api_url: self.api_url.clone(),
            ..ClientConfig::default()
        };
        if let Some(secs) = self.timeout_secs {
            config.timeout = Duration::from_secs(secs);
        }
        config
    }

    /// Builds the client, resolving the token through `runtime`.
    pub fn connect<R: Runtime>(&self, runtime: R) -> Result<FreesoundClient<R>> {
        let config = self.client_config();
        debug!("Connecting to {} with timeout {:?}", config.base_url(), config.timeout);
        FreesoundClient::new(runtime, config).context("Failed to set up the Freesound client")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::freesound::{SoundApi, TextSearch};
    use crate::test_utils::mock_runtime_with_env;
    use mockito::{Matcher, Server};

    #[test]
    fn test_client_config_defaults() {
        let config = Config::default().client_config();
        assert_eq!(config.timeout, Duration::from_secs(10));
        assert_eq!(config.base_url(), "https://freesound.org/apiv2");
    }

    #[test]
    fn test_client_config_overrides() {
        let config = Config {
            token: Some("abc".to_string()),
            api_url: Some("http://localhost:8080/".to_string()),
            timeout_secs: Some(3),
        }
        .client_config();

        assert_eq!(config.token.as_deref(), Some("abc"));
        assert_eq!(config.timeout, Duration::from_secs(3));
        assert_eq!(config.base_url(), "http://localhost:8080");
    }

    #[test]
    fn test_connect_without_token_reports_env_var() {
        let runtime = mock_runtime_with_env(None);
        let err = Config::default().connect(runtime).err().unwrap();
        assert!(format!("{:#}", err).contains("FREESOUND_API_KEY"));
    }

    /// Verifies which token ends up in the Authorization header.
    async fn verify_authorization_header(
        explicit: Option<&str>,
        env: Option<&'static str>,
        expected: &str,
    ) {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("GET", "/search/text/")
            .match_query(Matcher::Any)
            .match_header("Authorization", Matcher::Exact(format!("Token {}", expected)))
            .with_status(200)
            .with_body("{}")
            .create_async()
            .await;

        let config = Config {
            token: explicit.map(str::to_string),
            api_url: Some(server.url()),
            timeout_secs: None,
        };
        let client = config.connect(mock_runtime_with_env(env)).unwrap();

        client.search_text(&TextSearch::new("wind")).await.unwrap();

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_connect_uses_explicit_token() {
        verify_authorization_header(Some("cli_token"), Some("env_token"), "cli_token").await;
    }

    #[tokio::test]
    async fn test_connect_uses_env_token() {
        verify_authorization_header(None, Some("env_token"), "env_token").await;
    }
}
