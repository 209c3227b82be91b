//! Error types for Freesound client operations.

use std::path::PathBuf;

use thiserror::Error;

use crate::http::status_hint;

/// Everything that can go wrong while talking to Freesound.
///
/// A failed download is reported either as [`FreesoundError::Rejected`] (the API
/// refused the request, nothing was written) or as [`FreesoundError::Io`] (the
/// API answered but the destination could not be written). Callers that only
/// care whether the sound landed on disk can treat both the same way.
#[derive(Error, Debug)]
pub enum FreesoundError {
    /// No token was passed explicitly and `FREESOUND_API_KEY` is unset or empty
    #[error(
        "Freesound API authentication failed. Provide an API key explicitly or via the {} environment variable",
        crate::freesound::API_KEY_ENV
    )]
    MissingToken,

    /// Arguments rejected locally, before any request was sent
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The API answered with a status other than 200
    #[error("Freesound API returned HTTP {status}{}", status_hint(.status))]
    Rejected { status: u16, body: String },

    /// The destination file could not be created or written
    #[error("Failed to write {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// DNS, connection, timeout or body stream failure
    #[error("Request to Freesound failed: {0}")]
    Transport(#[source] reqwest::Error),

    /// The token contains characters that cannot go into a header
    #[error("API token is not a valid header value")]
    InvalidTokenHeader(#[source] reqwest::header::InvalidHeaderValue),

    /// The HTTP client could not be configured
    #[error("Failed to configure HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}

impl FreesoundError {
    /// True when the failure came from the remote side (status or transport).
    pub fn is_remote(&self) -> bool {
        matches!(
            self,
            FreesoundError::Rejected { .. } | FreesoundError::Transport(_)
        )
    }

    /// True when the failure happened while writing locally.
    pub fn is_local_io(&self) -> bool {
        matches!(self, FreesoundError::Io { .. })
    }

    /// HTTP status of a rejected request.
    pub fn status(&self) -> Option<u16> {
        match self {
            FreesoundError::Rejected { status, .. } => Some(*status),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, FreesoundError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_token_mentions_env_var() {
        let msg = FreesoundError::MissingToken.to_string();
        assert!(msg.contains("FREESOUND_API_KEY"));
    }

    #[test]
    fn test_rejected_display_includes_hint() {
        let err = FreesoundError::Rejected {
            status: 401,
            body: r#"{"detail": "Invalid token"}"#.to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("HTTP 401"));
        assert!(msg.contains("API key"));
        assert_eq!(err.status(), Some(401));
        assert!(err.is_remote());
        assert!(!err.is_local_io());
    }

    #[test]
    fn test_io_error_is_local() {
        let err = FreesoundError::Io {
            path: PathBuf::from("/nope/sound.wav"),
            source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        };
        assert!(err.is_local_io());
        assert!(!err.is_remote());
        assert_eq!(err.status(), None);
        assert!(err.to_string().contains("/nope/sound.wav"));
    }
}
