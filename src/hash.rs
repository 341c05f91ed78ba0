//! Content Hash Value Object
//!
//! A validated, immutable hash representing the content of a file.
//! Used as the change-detection key stored in the manifest.

use std::fmt;

use md5::{Digest, Md5};

/// Content hash value object
///
/// Wraps the 32-character lowercase hex encoding of a 128-bit MD5 digest.
/// The digest serves as a cache key and change detector, not an integrity
/// guarantee.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContentHash(String);

impl ContentHash {
    /// Number of hex characters in an encoded digest
    pub const HEX_LEN: usize = 32;

    /// Compute the hash of raw content bytes
    pub fn from_bytes(content: &[u8]) -> Self {
        let digest = Md5::digest(content);
        Self(format!("{:x}", digest))
    }

    /// Get the hex string
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Check if this hash matches another
    pub fn matches(&self, other: &ContentHash) -> bool {
        self.0 == other.0
    }
}

impl fmt::Display for ContentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for ContentHash {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<ContentHash> for String {
    fn from(hash: ContentHash) -> Self {
        hash.0
    }
}
