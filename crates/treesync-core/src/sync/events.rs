//! Event vocabulary emitted by the reconciliation passes

use std::fmt;
use std::path::PathBuf;

/// A single state-changing operation applied to the replica tree
///
/// Events are recorded in application order and each renders to one
/// human-readable log line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncEvent {
    /// A directory was created in the replica
    DirCreated {
        /// Path of the created directory
        path: PathBuf,
    },
    /// A file was copied from the source into the replica
    FileCopied {
        /// Source file path
        source: PathBuf,
        /// Replica destination path
        dest: PathBuf,
    },
    /// A file no longer present in the source was removed from the replica
    FileRemoved {
        /// Path of the removed file
        path: PathBuf,
    },
    /// A directory subtree no longer present in the source was removed
    DirRemoved {
        /// Root of the removed subtree
        path: PathBuf,
    },
}

impl fmt::Display for SyncEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DirCreated { path } => write!(f, "Directory created: {}", path.display()),
            Self::FileCopied { source, dest } => {
                write!(f, "Copied file: {} to {}", source.display(), dest.display())
            }
            Self::FileRemoved { path } => write!(f, "File removed: {}", path.display()),
            Self::DirRemoved { path } => write!(f, "Directory removed: {}", path.display()),
        }
    }
}
