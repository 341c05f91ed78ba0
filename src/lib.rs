//! Scenemap - scene content manifest generator
//!
//! Scenemap walks a static build tree, content-hashes every artifact, and
//! groups the hashes into a two-level manifest: a global `shared` bucket
//! plus one bucket per scene directory. The manifest is emitted twice -
//! as `contents.json` for tooling and as `contents.js` for direct
//! inclusion in a page.

pub mod builder;
pub mod error;
pub mod fs;
pub mod hash;
pub mod manifest;
pub mod models;
pub mod pipeline;
pub mod scan;

// Re-exports for convenience
pub use builder::{ManifestBuilder, OUTPUT_NAME};
pub use error::{ScenemapError, ScenemapResult};
pub use fs::{atomic_write, write_outputs};
pub use hash::ContentHash;
pub use manifest::{Bucket, Manifest};
pub use models::{FileRecord, OutputFile, RecordContents};
pub use pipeline::{BuildOutcome, BuildPipeline};
pub use scan::scan_directory;
