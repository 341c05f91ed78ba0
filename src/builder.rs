//! Streaming manifest builder
//!
//! Consumes file records one at a time, hashes materialized contents, and
//! partitions the hashes into shared/scene buckets. `finish` serializes the
//! accumulated manifest and emits the two output artifacts.

use std::path::{Path, PathBuf};

use chrono::{SecondsFormat, Utc};

use crate::error::{ScenemapError, ScenemapResult};
use crate::hash::ContentHash;
use crate::manifest::{normalize_manifest_path, Bucket, Manifest};
use crate::models::{FileRecord, OutputFile};

/// Stem shared by both output artifacts
pub const OUTPUT_NAME: &str = "contents";

/// Top-level directory deliberately left out of the manifest.
///
/// Audio lives in one flat folder and is not tied to scenes, so it cannot
/// be partitioned here; a separate mechanism has to cover it.
// TODO: fold audio into the manifest once the build groups it by scene.
const EXCLUDED_TOP_LEVEL: &str = "audio";

/// Streaming manifest builder
///
/// Feed records with [`push`](Self::push), then call
/// [`finish`](Self::finish) exactly once to obtain the output artifacts,
/// JSON first.
#[derive(Debug)]
pub struct ManifestBuilder {
    manifest: Manifest,
    base: PathBuf,
    skipped: usize,
}

impl ManifestBuilder {
    /// Create a builder for the given version tag and base directory.
    ///
    /// The base directory anchors every relative path in the manifest. A
    /// relative base is resolved against the current working directory; a
    /// base that cannot be resolved to an absolute path is rejected before
    /// any record is processed.
    pub fn new(version: impl Into<String>, base: impl AsRef<Path>) -> ScenemapResult<Self> {
        let base = base.as_ref();
        let base = if base.is_absolute() {
            base.to_path_buf()
        } else {
            std::env::current_dir()
                .map_err(|_| ScenemapError::BaseDirNotFound {
                    path: base.to_path_buf(),
                })?
                .join(base)
        };

        Ok(Self {
            manifest: Manifest::new(version),
            base,
            skipped: 0,
        })
    }

    /// Resolved absolute base directory
    pub fn base(&self) -> &Path {
        &self.base
    }

    /// The manifest accumulated so far
    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }

    /// Number of records skipped so far
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    /// Process one record.
    ///
    /// Records without materialized contents, the builder's own outputs
    /// from an earlier run, and anything under the excluded top-level
    /// directory are skipped. A record whose path does not live under the
    /// base directory is a fatal misconfiguration.
    pub fn push(&mut self, record: &FileRecord) -> ScenemapResult<()> {
        let Some(bytes) = record.contents.bytes() else {
            self.skipped += 1;
            return Ok(());
        };

        let rel = record.path.strip_prefix(&self.base).map_err(|_| {
            ScenemapError::RecordOutsideBase {
                path: record.path.clone(),
                base: self.base.clone(),
            }
        })?;
        let rel = normalize_manifest_path(rel);

        if is_own_output(&rel) || is_excluded(&rel) {
            self.skipped += 1;
            return Ok(());
        }

        let hash = ContentHash::from_bytes(bytes);
        self.manifest.insert(Bucket::classify(&rel), rel, hash);
        Ok(())
    }

    /// Finish the run and emit both artifacts.
    ///
    /// The JSON manifest comes first, then the JavaScript wrapper carrying
    /// a generation timestamp comment; the order is part of the contract.
    pub fn finish(self) -> ScenemapResult<Vec<OutputFile>> {
        let json = self.manifest.to_json()?;

        let json_file = OutputFile::new(
            self.base.join(format!("{OUTPUT_NAME}.json")),
            json.as_bytes(),
        );

        let stamp = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
        let js = format!("// Generated at {stamp}\nconst contents = {json};");
        let js_file = OutputFile::new(
            self.base.join(format!("{OUTPUT_NAME}.js")),
            js.into_bytes(),
        );

        Ok(vec![json_file, js_file])
    }
}

/// Check whether a relative path names one of the builder's own outputs.
///
/// A manifest from an earlier run must not be hashed into the next one.
fn is_own_output(rel: &str) -> bool {
    rel.strip_suffix(".json")
        .or_else(|| rel.strip_suffix(".js"))
        .map(|stem| stem == OUTPUT_NAME)
        .unwrap_or(false)
}

/// Check whether a relative path sits under the excluded top-level
/// directory (the directory itself included).
fn is_excluded(rel: &str) -> bool {
    rel.split('/').next() == Some(EXCLUDED_TOP_LEVEL)
}
