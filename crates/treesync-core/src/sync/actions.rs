//! Sync action determination logic

use std::path::PathBuf;

use crate::comparison::FileComparator;
use crate::error::Result;

/// Sync action to perform
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncAction {
    /// Create a directory (and any missing ancestors) in the replica
    CreateDir {
        /// Directory to create
        dest: PathBuf,
    },
    /// Copy a source file over its replica counterpart
    CopyFile {
        /// Source file
        source: PathBuf,
        /// Replica destination
        dest: PathBuf,
    },
    /// Remove a replica file with no source counterpart
    RemoveFile {
        /// File to remove
        dest: PathBuf,
    },
    /// Remove a whole replica subtree with no source counterpart
    RemoveDirTree {
        /// Root of the subtree to remove
        dest: PathBuf,
    },
    /// Leave this file alone (no action needed)
    Skip {
        /// File that needs no action
        dest: PathBuf,
        /// Why the file was skipped
        reason: &'static str,
    },
}

/// Resolves per-file state into sync actions
pub struct SyncActionResolver;

impl SyncActionResolver {
    /// Create a new action resolver
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Decide what to do for a source file and its replica counterpart
    ///
    /// The file is copied when the counterpart is absent or its content
    /// differs; byte-identical content is skipped. Content is always
    /// compared by digest, never by size or modification time.
    ///
    /// # Errors
    ///
    /// Returns an error if either file cannot be read for comparison.
    pub fn resolve_file(source: PathBuf, dest: PathBuf) -> Result<SyncAction> {
        if !dest.exists() {
            return Ok(SyncAction::CopyFile { source, dest });
        }

        if FileComparator::contents_equal(&source, &dest)? {
            Ok(SyncAction::Skip {
                dest,
                reason: "identical content",
            })
        } else {
            Ok(SyncAction::CopyFile { source, dest })
        }
    }
}
