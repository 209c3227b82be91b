//! Handlers behind the `freesound-dl` subcommands.

pub mod config;
mod download;
mod search;

pub use config::Config;
pub use download::download;
pub use search::{SearchOptions, search};
