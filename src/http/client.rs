//! HTTP client wrapping the single request routine used by every operation.

use log::{debug, error};
use reqwest::{Client, Response, StatusCode};
use serde::Serialize;
use std::io::Write;
use std::path::Path;

use crate::error::{FreesoundError, Result};

/// Stored in [`FreesoundError::Rejected`] when the error body itself failed.
pub const UNREADABLE_BODY: &str = "<unreadable body>";

/// Thin wrapper over a preconfigured reqwest [`Client`].
///
/// Authentication headers and the timeout live on the wrapped client, so every
/// request issued here shares the same policy.
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    /// Creates a new HTTP client wrapping the given reqwest Client.
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Performs a GET request and returns the body as text, unparsed.
    #[tracing::instrument(skip(self, query))]
    pub async fn get_text<Q>(&self, url: &str, query: &Q) -> Result<String>
    where
        Q: Serialize + ?Sized,
    {
        let response = self.send(url, query).await?;

        let body = response.text().await.map_err(|e| {
            error!("Failed to read response body from {}: {}", url, e);
            FreesoundError::Transport(e)
        })?;

        debug!("Received {} bytes from {}", body.len(), url);
        Ok(body)
    }

    /// Downloads `url` into the writer returned by `create_writer`.
    ///
    /// The writer is only created once the server has answered with 200, so a
    /// rejected request never touches `dest`. Returns the number of bytes written.
    #[tracing::instrument(skip(self, create_writer))]
    pub async fn download_file<W, F>(
        &self,
        url: &str,
        dest: &Path,
        create_writer: F,
    ) -> Result<u64>
    where
        W: Write,
        F: FnOnce() -> std::io::Result<W>,
    {
        let mut response = self.send(url, &[] as &[(&str, &str)]).await?;

        let io_error = |source: std::io::Error| FreesoundError::Io {
            path: dest.to_path_buf(),
            source,
        };

        let mut writer = create_writer().map_err(io_error)?;
        let mut downloaded_bytes: u64 = 0;

        while let Some(chunk) = response.chunk().await.map_err(|e| {
            error!("Download stream from {} broke: {}", url, e);
            FreesoundError::Transport(e)
        })? {
            writer.write_all(&chunk).map_err(io_error)?;
            downloaded_bytes += chunk.len() as u64;
        }
        writer.flush().map_err(io_error)?;

        debug!(
            "Downloaded {:.2} MB",
            downloaded_bytes as f64 / (1024.0 * 1024.0)
        );

        Ok(downloaded_bytes)
    }

    /// Sends a GET request and accepts only a 200 answer.
    ///
    /// Transport failures and rejected responses are logged here and turned
    /// into [`FreesoundError`] values; nothing below this point can panic.
    async fn send<Q>(&self, url: &str, query: &Q) -> Result<Response>
    where
        Q: Serialize + ?Sized,
    {
        debug!("GET {}...", url);

        let response = self
            .client
            .get(url)
            .query(query)
            .send()
            .await
            .map_err(|e| {
                error!("Exception during Freesound request to {}: {}", url, e);
                FreesoundError::Transport(e)
            })?;

        let status = response.status();
        if status != StatusCode::OK {
            let body = match response.text().await {
                Ok(body) => body,
                Err(e) => {
                    debug!("Could not read error body from {}: {}", url, e);
                    UNREADABLE_BODY.to_string()
                }
            };
            error!(
                "Freesound API error: status code {}, full response: {}",
                status.as_u16(),
                body
            );
            return Err(FreesoundError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response)
    }
}
