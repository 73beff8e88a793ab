//! File content comparison via streaming digests
//!
//! Change detection never trusts metadata alone: both files are digested
//! in full on every comparison, so any content difference is always
//! detected even when sizes and modification times agree.

mod hash;

pub use hash::{FileHash, FileHasher};

use std::path::Path;

use crate::error::Result;

/// File comparator built on content digests
pub struct FileComparator;

impl Default for FileComparator {
    fn default() -> Self {
        Self::new()
    }
}

impl FileComparator {
    /// Create a new file comparator
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Check whether two files have byte-identical content
    ///
    /// # Errors
    ///
    /// Returns an error if either file cannot be opened or read.
    pub fn contents_equal(a: &Path, b: &Path) -> Result<bool> {
        let hash_a = FileHasher::hash(a)?;
        let hash_b = FileHasher::hash(b)?;

        Ok(hash_a == hash_b)
    }
}
