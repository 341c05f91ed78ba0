//! Error types for Scenemap
//!
//! Uses `thiserror` for library errors; the CLI layers `anyhow` on top.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Scenemap operations
pub type ScenemapResult<T> = Result<T, ScenemapError>;

/// Main error type for Scenemap operations
#[derive(Error, Debug)]
pub enum ScenemapError {
    /// Base directory missing, unreadable, or not a directory
    #[error("base directory not found: {path}")]
    BaseDirNotFound { path: PathBuf },

    /// Record path does not live under the configured base directory
    #[error("record '{path}' is outside the base directory '{base}'")]
    RecordOutsideBase { path: PathBuf, base: PathBuf },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
