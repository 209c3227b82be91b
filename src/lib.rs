//! Client for the Freesound audio-sample API.
//!
//! ```no_run
//! use freesound_dl::freesound::{FreesoundClient, SearchParams, SoundApi};
//!
//! # async fn run() -> freesound_dl::Result<()> {
//! let client = FreesoundClient::from_env(None)?;
//! let json = client
//!     .search(&SearchParams::new("piano").filter("duration:[0 TO 30]").sort("score"))
//!     .await?;
//! println!("{}", json);
//!
//! client.download_sound(1234, "piano.wav".as_ref()).await?;
//! # Ok(())
//! # }
//! ```

pub mod commands;
pub mod error;
pub mod freesound;
pub mod http;
pub mod runtime;

pub use error::{FreesoundError, Result};
