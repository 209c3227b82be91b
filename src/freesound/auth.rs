//! API token resolution.

use log::debug;
use std::fmt;

use super::config::API_KEY_ENV;
use crate::error::{FreesoundError, Result};
use crate::runtime::Runtime;

/// A non-empty Freesound API token.
///
/// `Debug` and `Display` only show a redacted form, so the token can be logged
/// safely.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiToken(String);

impl ApiToken {
    /// Wraps `raw` after trimming; fails when nothing is left.
    pub fn new(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(FreesoundError::MissingToken);
        }
        Ok(Self(trimmed.to_string()))
    }

    /// The token as sent to the API.
    pub fn expose(&self) -> &str {
        &self.0
    }

    fn redacted(&self) -> String {
        let chars: Vec<char> = self.0.chars().collect();
        if chars.len() <= 8 {
            return "*********".to_string();
        }
        let head: String = chars[..3].iter().collect();
        let tail: String = chars[chars.len() - 3..].iter().collect();
        format!("{}*********{}", head, tail)
    }
}

impl fmt::Debug for ApiToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ApiToken").field(&self.redacted()).finish()
    }
}

impl fmt::Display for ApiToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.redacted())
    }
}

/// Picks the explicit token if it is non-empty, otherwise `FREESOUND_API_KEY`.
#[tracing::instrument(skip(runtime, explicit))]
pub fn resolve_token<R: Runtime + ?Sized>(runtime: &R, explicit: Option<&str>) -> Result<ApiToken> {
    if let Some(token) = explicit.and_then(|raw| ApiToken::new(raw).ok()) {
        debug!("Using explicitly supplied API token: {}", token);
        return Ok(token);
    }

    let from_env = runtime
        .env_var(API_KEY_ENV)
        .map_err(|_| FreesoundError::MissingToken)?;
    let token = ApiToken::new(&from_env)?;
    debug!("Using {} for authentication: {}", API_KEY_ENV, token);
    Ok(token)
}
