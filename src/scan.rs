//! Build directory scanner
//!
//! Walks the base directory into a deterministic sequence of file records
//! for the manifest builder.

use std::fs;
use std::path::Path;

use crate::error::{ScenemapError, ScenemapResult};
use crate::models::FileRecord;

/// Recursively collect a record for every file under `dir`.
///
/// Hidden entries (dot-prefixed files and directories) are skipped.
/// Records are sorted by path for deterministic output.
pub fn scan_directory(dir: &Path) -> ScenemapResult<Vec<FileRecord>> {
    if !dir.is_dir() {
        return Err(ScenemapError::BaseDirNotFound {
            path: dir.to_path_buf(),
        });
    }

    let mut records = Vec::new();
    scan_recursive(dir, &mut records)?;

    records.sort_by(|a, b| a.path.cmp(&b.path));

    Ok(records)
}

fn scan_recursive(current: &Path, records: &mut Vec<FileRecord>) -> ScenemapResult<()> {
    for entry in fs::read_dir(current)? {
        let entry = entry?;
        let path = entry.path();

        let hidden = path
            .file_name()
            .and_then(|n| n.to_str())
            .map(|n| n.starts_with('.'))
            .unwrap_or(false);
        if hidden {
            continue;
        }

        if path.is_dir() {
            scan_recursive(&path, records)?;
        } else {
            let contents = fs::read(&path)?;
            records.push(FileRecord::new(path, contents));
        }
    }

    Ok(())
}
