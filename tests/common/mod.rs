//! Common test utilities for Scenemap integration tests.
//!
//! Provides `TestBuild` - an isolated static-build sandbox with helpers to
//! lay out fixture trees and run the scenemap binary against them.

#![allow(dead_code)]

use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

/// Isolated build sandbox backed by a temp directory.
pub struct TestBuild {
    /// Temporary directory serving as the static build root
    pub root: TempDir,
}

impl TestBuild {
    pub fn new() -> Self {
        Self {
            root: TempDir::new().unwrap(),
        }
    }

    /// The build root path
    pub fn base(&self) -> &Path {
        self.root.path()
    }

    /// Write a fixture file under the build root
    pub fn file(&self, rel: &str, contents: &str) -> &Self {
        let path = self.root.path().join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(&path, contents).unwrap();
        self
    }

    /// Run the scenemap binary with the given args plus `--base <root>`.
    ///
    /// Global flags (`--json`, `-v`) go before the subcommand, e.g.
    /// `run(&["--json", "build"])`.
    pub fn run(&self, args: &[&str]) -> Output {
        let bin = env!("CARGO_BIN_EXE_scenemap");
        Command::new(bin)
            .args(args)
            .arg("--base")
            .arg(self.root.path())
            .output()
            .unwrap()
    }

    /// Read the raw contents.json artifact
    pub fn manifest_raw(&self) -> String {
        std::fs::read_to_string(self.root.path().join("contents.json")).unwrap()
    }

    /// Parse the contents.json artifact
    pub fn manifest_json(&self) -> serde_json::Value {
        serde_json::from_str(&self.manifest_raw()).unwrap()
    }

    /// Read the contents.js artifact
    pub fn manifest_js(&self) -> String {
        std::fs::read_to_string(self.root.path().join("contents.js")).unwrap()
    }
}

/// Stdout of a finished command as a string
pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// Stderr of a finished command as a string
pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}
