use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;

use crate::freesound::SoundApi;

/// Downloads one sound and reports where it went.
#[tracing::instrument(skip(api, out))]
pub async fn download<A: SoundApi, W: Write>(
    api: &A,
    sound_id: u64,
    dest: &Path,
    out: &mut W,
) -> Result<()> {
    let bytes = api
        .download_sound(sound_id, dest)
        .await
        .with_context(|| format!("Failed to download sound {} to {}", sound_id, dest.display()))?;

    writeln!(
        out,
        "Saved sound {} to {} ({} bytes)",
        sound_id,
        dest.display(),
        bytes
    )?;
    Ok(())
}
