//! Scan + build pipeline
//!
//! One-call wrapper used by the CLI commands: scan the base directory,
//! feed every record through the builder, and return the finished
//! artifacts together with the manifest.

use std::path::{Path, PathBuf};

use crate::builder::ManifestBuilder;
use crate::error::ScenemapResult;
use crate::manifest::Manifest;
use crate::models::OutputFile;
use crate::scan::scan_directory;

/// Unified scan + hash + emit pipeline.
#[derive(Debug, Clone)]
pub struct BuildPipeline {
    base: PathBuf,
    version: String,
}

/// Result of a pipeline run
#[derive(Debug)]
pub struct BuildOutcome {
    /// The accumulated manifest
    pub manifest: Manifest,
    /// The two output artifacts, JSON first
    pub outputs: Vec<OutputFile>,
    /// Files hashed into the manifest
    pub hashed: usize,
    /// Records skipped by the builder's skip rules
    pub skipped: usize,
}

impl BuildPipeline {
    /// Create a pipeline over the given base directory and version tag
    pub fn new(base: impl Into<PathBuf>, version: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            version: version.into(),
        }
    }

    /// Base directory as configured (possibly relative)
    pub fn base(&self) -> &Path {
        &self.base
    }

    /// Scan the base directory and build both artifacts.
    ///
    /// Nothing is written to disk; callers decide what to do with the
    /// returned outputs.
    pub fn run(&self) -> ScenemapResult<BuildOutcome> {
        let mut builder = ManifestBuilder::new(&self.version, &self.base)?;

        let records = scan_directory(builder.base())?;
        for record in &records {
            builder.push(record)?;
        }

        let manifest = builder.manifest().clone();
        let hashed = manifest.len();
        let skipped = builder.skipped();
        let outputs = builder.finish()?;

        Ok(BuildOutcome {
            manifest,
            outputs,
            hashed,
            skipped,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn write(dir: &Path, rel: &str, contents: &str) {
        let path = dir.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, contents).unwrap();
    }

    #[test]
    fn run_builds_manifest_and_both_outputs() {
        let dir = tempdir().unwrap();
        write(dir.path(), "index.html", "alpha");
        write(dir.path(), "scenes/foo/bar.txt", "scene body\n");
        write(dir.path(), "audio/track.mp3", "beta");

        let outcome = BuildPipeline::new(dir.path(), "v1").run().unwrap();

        assert_eq!(outcome.hashed, 2);
        assert_eq!(outcome.skipped, 1);
        assert_eq!(outcome.outputs.len(), 2);
        assert!(outcome.manifest.shared.contains_key("index.html"));
        assert!(outcome.manifest.scenes.contains_key("foo"));
    }

    #[test]
    fn rerun_over_identical_inputs_is_idempotent() {
        let dir = tempdir().unwrap();
        write(dir.path(), "index.html", "alpha");
        write(dir.path(), "scenes/foo/bar.txt", "scene body\n");

        let pipeline = BuildPipeline::new(dir.path(), "v1");
        let first = pipeline.run().unwrap();
        let second = pipeline.run().unwrap();

        assert_eq!(first.manifest, second.manifest);
        assert_eq!(first.outputs[0].content(), second.outputs[0].content());
    }

    #[test]
    fn prior_outputs_on_disk_are_not_hashed_into_the_next_run() {
        let dir = tempdir().unwrap();
        write(dir.path(), "index.html", "alpha");
        write(dir.path(), "contents.json", r#"{"version":"old"}"#);
        write(dir.path(), "contents.js", "const contents = {};");

        let outcome = BuildPipeline::new(dir.path(), "v2").run().unwrap();

        assert_eq!(outcome.hashed, 1);
        assert_eq!(outcome.skipped, 2);
        assert!(!outcome.manifest.shared.contains_key("contents.json"));
        assert!(!outcome.manifest.shared.contains_key("contents.js"));
    }
}
