//! Freesound API client.
//!
//! [`FreesoundClient`] authenticates with an API token and exposes the three
//! supported operations: simple text search, advanced text search and
//! download of a single sound by id. Search results are returned as the raw
//! JSON text sent by the API.

mod auth;
mod client;
mod config;
mod params;

pub use auth::{ApiToken, resolve_token};
pub use client::{FreesoundClient, SoundApi};
pub use config::{
    API_KEY_ENV, ClientConfig, DEFAULT_API_URL, DEFAULT_TIMEOUT, build_http_client,
};
pub use params::{
    DEFAULT_PAGE, DEFAULT_PAGE_SIZE, SEARCH_FIELDS, SearchParams, TextSearch,
};

#[cfg(test)]
pub use client::MockSoundApi;
