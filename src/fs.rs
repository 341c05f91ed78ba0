//! Atomic output writer
//!
//! Writes artifacts via a temp file in the target directory followed by a
//! rename, so readers never observe a half-written manifest.

use std::io::Write;
use std::path::Path;

use crate::error::ScenemapResult;
use crate::models::OutputFile;

/// Write `content` to `path` atomically (tempfile + rename).
///
/// Parent directories are created as needed. The temp file lives in the
/// same directory as the target so the rename never crosses filesystems.
pub fn atomic_write(path: &Path, content: &[u8]) -> ScenemapResult<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let dir = path.parent().unwrap_or_else(|| Path::new("."));
    let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
    tmp.write_all(content)?;
    tmp.persist(path).map_err(|e| e.error)?;

    Ok(())
}

/// Write every output artifact, in the order given.
pub fn write_outputs(outputs: &[OutputFile]) -> ScenemapResult<()> {
    for output in outputs {
        atomic_write(output.path(), output.content())?;
    }
    Ok(())
}
