//! Core data models for Scenemap
//!
//! Defines the structures flowing through the manifest build:
//! - `FileRecord`: one build artifact entering the builder
//! - `RecordContents`: materialized bytes, or a marker for content that is
//!   absent or not yet materialized
//! - `OutputFile`: an emitted artifact ready to be written

use std::path::{Path, PathBuf};

/// Contents attached to a build artifact record
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordContents {
    /// No content attached to the record
    Absent,
    /// Content exists upstream but has not been materialized yet
    Deferred,
    /// Materialized raw bytes
    Bytes(Vec<u8>),
}

impl RecordContents {
    /// Materialized bytes, if any
    pub fn bytes(&self) -> Option<&[u8]> {
        match self {
            Self::Bytes(bytes) => Some(bytes),
            Self::Absent | Self::Deferred => None,
        }
    }
}

/// A build artifact record consumed exactly once by the manifest builder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    /// Absolute path of the artifact
    pub path: PathBuf,
    /// Raw contents, if materialized
    pub contents: RecordContents,
}

impl FileRecord {
    /// Create a record with materialized bytes
    pub fn new(path: impl Into<PathBuf>, contents: impl Into<Vec<u8>>) -> Self {
        Self {
            path: path.into(),
            contents: RecordContents::Bytes(contents.into()),
        }
    }

    /// Create a record carrying no content
    pub fn absent(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            contents: RecordContents::Absent,
        }
    }

    /// Create a record whose content is still streaming upstream
    pub fn deferred(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            contents: RecordContents::Deferred,
        }
    }
}

/// An output artifact ready to be written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputFile {
    /// Path where this file should be written
    path: PathBuf,
    /// Raw content bytes
    content: Vec<u8>,
}

impl OutputFile {
    /// Create a new OutputFile
    pub fn new(path: impl Into<PathBuf>, content: impl Into<Vec<u8>>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    /// Get the output path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the content bytes
    pub fn content(&self) -> &[u8] {
        &self.content
    }

    /// Content length in bytes
    pub fn len(&self) -> usize {
        self.content.len()
    }

    /// Check if content is empty
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}
