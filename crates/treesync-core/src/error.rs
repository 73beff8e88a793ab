//! Error types for treesync-core.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias used throughout the core crate
pub type Result<T> = std::result::Result<T, SyncError>;

/// All errors that can arise from synchronization.
#[derive(Debug, Error)]
pub enum SyncError {
    /// An I/O error, with annotated path for context.
    ///
    /// Reported per item: the reconciliation pass records it and moves on
    /// to the next entry rather than aborting.
    #[error("I/O error at {path}: {source}")]
    Io {
        /// Path the failing operation was acting on.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A directory traversal error for a single entry.
    #[error("failed to walk directory tree: {0}")]
    Walk(#[from] walkdir::Error),

    /// The source root does not exist or is not an accessible directory.
    ///
    /// Fatal to the whole pass: nothing in the replica is touched.
    #[error("source root does not exist or is not an accessible directory: {path}")]
    SourceRoot {
        /// The rejected source root path.
        path: PathBuf,
    },

    /// The replica root exists but is not a directory.
    ///
    /// Fatal to the whole pass.
    #[error("replica root is not a directory: {path}")]
    ReplicaRoot {
        /// The rejected replica root path.
        path: PathBuf,
    },
}

/// Convenience constructor for [`SyncError::Io`].
pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> SyncError {
    SyncError::Io {
        path: path.into(),
        source,
    }
}
