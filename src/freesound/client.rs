use async_trait::async_trait;
use log::{info, warn};
use std::path::Path;

use super::auth::resolve_token;
use super::config::{ClientConfig, build_http_client};
use super::params::{SearchParams, TextSearch};
use crate::error::{FreesoundError, Result};
use crate::http::HttpClient;
use crate::runtime::{RealRuntime, Runtime};

/// Operations offered by the Freesound API.
///
/// Every call performs exactly one request. Failures never panic; they come
/// back as [`FreesoundError`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SoundApi: Send + Sync {
    /// Text search with query and paging only. Returns the raw JSON body.
    async fn search_text(&self, search: &TextSearch) -> Result<String>;

    /// Text search with filter, sort, grouping and weights. Returns the raw
    /// JSON body.
    async fn search(&self, params: &SearchParams) -> Result<String>;

    /// Downloads one sound to `dest`, returning the number of bytes written.
    ///
    /// A rejected request leaves `dest` untouched. Whether the failure was
    /// remote or local can be told apart with [`FreesoundError::is_remote`]
    /// and [`FreesoundError::is_local_io`].
    async fn download_sound(&self, sound_id: u64, dest: &Path) -> Result<u64>;
}

pub struct FreesoundClient<R: Runtime = RealRuntime> {
    runtime: R,
    http: HttpClient,
    api_url: String,
}

impl FreesoundClient<RealRuntime> {
    /// Client with default settings, using `token` or `FREESOUND_API_KEY`.
    pub fn from_env(token: Option<String>) -> Result<Self> {
        Self::new(
            RealRuntime,
            ClientConfig {
                token,
                ..ClientConfig::default()
            },
        )
    }
}

impl<R: Runtime> FreesoundClient<R> {
    /// Resolves the token and prepares the HTTP client. No request is sent.
    #[tracing::instrument(skip(runtime, config))]
    pub fn new(runtime: R, config: ClientConfig) -> Result<Self> {
        let token = resolve_token(&runtime, config.token.as_deref())?;
        let client = build_http_client(&token, &config)?;

        Ok(Self {
            runtime,
            http: HttpClient::new(client),
            api_url: config.base_url(),
        })
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    fn search_url(&self) -> String {
        format!("{}/search/text/", self.api_url)
    }

    fn download_url(&self, sound_id: u64) -> String {
        format!("{}/sounds/{}/download/", self.api_url, sound_id)
    }
}

#[async_trait]
impl<R: Runtime> SoundApi for FreesoundClient<R> {
    #[tracing::instrument(skip(self))]
    async fn search_text(&self, search: &TextSearch) -> Result<String> {
        search.validate()?;
        info!(
            "Searching Freesound for {:?} (page {}, {} per page)...",
            search.query, search.page, search.page_size
        );
        self.http.get_text(&self.search_url(), search).await
    }

    #[tracing::instrument(skip(self))]
    async fn search(&self, params: &SearchParams) -> Result<String> {
        params.validate()?;
        info!(
            "Searching Freesound for {:?} (page {}, {} per page)...",
            params.query, params.page, params.page_size
        );
        self.http
            .get_text(&self.search_url(), &params.to_query())
            .await
    }

    #[tracing::instrument(skip(self))]
    async fn download_sound(&self, sound_id: u64, dest: &Path) -> Result<u64> {
        if sound_id == 0 {
            return Err(FreesoundError::InvalidArgument(
                "sound id must be a positive integer".to_string(),
            ));
        }
        if dest.as_os_str().is_empty() {
            return Err(FreesoundError::InvalidArgument(
                "destination path must not be empty".to_string(),
            ));
        }

        info!("Downloading sound {} to {}...", sound_id, dest.display());

        let mut created = false;
        let result = self
            .http
            .download_file(&self.download_url(sound_id), dest, || {
                let writer = self.runtime.create_file(dest)?;
                created = true;
                Ok(writer)
            })
            .await;

        match result {
            Ok(bytes) => {
                info!("Download complete ({} bytes).", bytes);
                Ok(bytes)
            }
            Err(e) => {
                // Drop whatever part of the body made it to disk
                if created && self.runtime.exists(dest) {
                    if let Err(remove_err) = self.runtime.remove_file(dest) {
                        warn!(
                            "Failed to remove partial download {}: {}",
                            dest.display(),
                            remove_err
                        );
                    }
                }
                Err(e)
            }
        }
    }
}
