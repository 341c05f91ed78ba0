//! Manifest data model and bucket classification
//!
//! The manifest partitions hashed files into a global `shared` bucket and
//! per-scene buckets keyed by the first directory level under `scenes/`.
//! Classification uses explicit path-segment parsing; a manifest key always
//! uses forward slashes regardless of host separator.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ScenemapResult;

/// Top-level directory that groups scene content
const SCENES_DIR: &str = "scenes";

/// Scene name reserved for cross-scene content; never a bucket of its own
const SHARED_SCENE: &str = "shared";

/// Normalize a path for manifest storage (always use forward slashes).
pub(crate) fn normalize_manifest_path(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// Destination bucket for one relative path
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Bucket {
    /// The global shared bucket
    Shared,
    /// A named scene bucket
    Scene(String),
}

impl Bucket {
    /// Classify a normalized relative path into its bucket.
    ///
    /// `scenes/<name>/...` routes to `Scene(name)`, except when `<name>` is
    /// the reserved literal `shared`, which would collide with the global
    /// bucket. The path must reach at least one segment past the scene
    /// name, so a file sitting directly at `scenes/<name>` stays shared.
    pub fn classify(rel: &str) -> Bucket {
        let mut segments = rel.split('/');
        if segments.next() == Some(SCENES_DIR) {
            if let Some(name) = segments.next() {
                if !name.is_empty() && name != SHARED_SCENE && segments.next().is_some() {
                    return Bucket::Scene(name.to_string());
                }
            }
        }
        Bucket::Shared
    }
}

/// Accumulated manifest state
///
/// `shared` maps relative path to content hash for files outside any
/// scene; `scenes` nests the same mapping per scene name. Every processed
/// path lands in exactly one bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    /// Opaque version tag, recorded verbatim
    pub version: String,
    /// Relative path -> content hash, for files outside any scene
    pub shared: BTreeMap<String, String>,
    /// Scene name -> (relative path -> content hash)
    pub scenes: BTreeMap<String, BTreeMap<String, String>>,
}

impl Manifest {
    /// Create an empty manifest carrying the given version tag
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            shared: BTreeMap::new(),
            scenes: BTreeMap::new(),
        }
    }

    /// Record a hash under the given bucket, creating scene buckets on
    /// first use. A later entry for the same path overwrites the earlier
    /// hash (last-write-wins).
    pub fn insert(&mut self, bucket: Bucket, rel: impl Into<String>, hash: impl Into<String>) {
        let target = match bucket {
            Bucket::Shared => &mut self.shared,
            Bucket::Scene(name) => self.scenes.entry(name).or_default(),
        };
        target.insert(rel.into(), hash.into());
    }

    /// Total number of hashed entries across all buckets
    pub fn len(&self) -> usize {
        self.shared.len() + self.scenes.values().map(BTreeMap::len).sum::<usize>()
    }

    /// Check if no entries have been recorded
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Look up the hash recorded for a relative path, searching the shared
    /// bucket first, then every scene bucket.
    pub fn hash_for(&self, rel: &str) -> Option<&str> {
        self.shared
            .get(rel)
            .or_else(|| self.scenes.values().find_map(|files| files.get(rel)))
            .map(String::as_str)
    }

    /// Serialize to the canonical JSON artifact body
    pub fn to_json(&self) -> ScenemapResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}
