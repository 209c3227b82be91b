//! HTTP plumbing shared by every Freesound operation.

mod client;
mod status;

pub use client::{HttpClient, UNREADABLE_BODY};
pub use status::status_hint;
