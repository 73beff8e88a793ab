//! Sync orchestration - coordinates the forward and reverse passes

use std::fs;
use std::path::Path;

use walkdir::WalkDir;

use super::SyncReport;
use super::actions::{SyncAction, SyncActionResolver};
use super::executor::FileOperationExecutor;
use crate::error::{Result, SyncError};

/// Main sync engine converging a replica tree to a source tree
pub struct SyncEngine {
    executor: FileOperationExecutor,
}

impl SyncEngine {
    /// Create a new sync engine
    ///
    /// With `dry_run` set, actions are resolved and reported but the
    /// replica is never touched.
    #[must_use]
    pub const fn new(dry_run: bool) -> Self {
        Self {
            executor: FileOperationExecutor::new(dry_run),
        }
    }

    /// Run one reconciliation pass
    ///
    /// The forward pass walks the source tree creating and updating
    /// replica entries; the reverse pass then walks the replica tree
    /// removing anything absent from the source. The forward pass always
    /// completes before the reverse pass begins. Per-item failures are
    /// recorded in the report and the pass continues; a retry on the next
    /// cycle redoes any outstanding work.
    ///
    /// # Errors
    ///
    /// Returns [`SyncError::SourceRoot`] or [`SyncError::ReplicaRoot`]
    /// when a root path is invalid, or [`SyncError::Io`] when a missing
    /// replica root cannot be created. Everything else is per-item and
    /// lands in [`SyncReport::errors`].
    pub fn sync(&self, source_root: &Path, replica_root: &Path) -> Result<SyncReport> {
        if !source_root.is_dir() {
            return Err(SyncError::SourceRoot {
                path: source_root.to_path_buf(),
            });
        }

        // A source that cannot be listed must fail up front: an empty view
        // of it would read as "delete everything" in the reverse pass.
        fs::read_dir(source_root).map_err(|_| SyncError::SourceRoot {
            path: source_root.to_path_buf(),
        })?;

        let mut report = SyncReport::default();

        if replica_root.exists() {
            if !replica_root.is_dir() {
                return Err(SyncError::ReplicaRoot {
                    path: replica_root.to_path_buf(),
                });
            }
        } else if let Some(event) = self.executor.execute(&SyncAction::CreateDir {
            dest: replica_root.to_path_buf(),
        })? {
            report.record_event(event);
        }

        self.forward_pass(source_root, replica_root, &mut report);
        self.reverse_pass(source_root, replica_root, &mut report);

        Ok(report)
    }

    /// Create and update replica entries from the source tree
    ///
    /// Depth-first, directories before their contents, so a directory
    /// always exists in the replica before its files are copied into it.
    fn forward_pass(&self, source_root: &Path, replica_root: &Path, report: &mut SyncReport) {
        for entry in WalkDir::new(source_root).follow_links(false) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    report.record_error(e.into());
                    continue;
                }
            };

            // The roots themselves are handled before the pass starts
            if entry.depth() == 0 {
                continue;
            }

            let Ok(rel) = entry.path().strip_prefix(source_root) else {
                continue;
            };
            let dest = replica_root.join(rel);

            if entry.file_type().is_dir() {
                if !dest.exists() {
                    self.apply(SyncAction::CreateDir { dest }, report);
                }
            } else if entry.file_type().is_file() {
                match SyncActionResolver::resolve_file(entry.path().to_path_buf(), dest) {
                    Ok(action) => self.apply(action, report),
                    Err(e) => report.record_error(e),
                }
            }
            // Symlinks and special files are left alone
        }
    }

    /// Delete replica entries the source no longer has
    fn reverse_pass(&self, source_root: &Path, replica_root: &Path, report: &mut SyncReport) {
        // Nothing to prune; can happen on a dry run against a missing replica
        if !replica_root.is_dir() {
            return;
        }

        let mut walker = WalkDir::new(replica_root).follow_links(false).into_iter();

        while let Some(entry) = walker.next() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    report.record_error(e.into());
                    continue;
                }
            };

            if entry.depth() == 0 {
                continue;
            }

            let Ok(rel) = entry.path().strip_prefix(replica_root) else {
                continue;
            };
            let counterpart = source_root.join(rel);

            if entry.file_type().is_dir() {
                if !counterpart.exists() {
                    self.apply(
                        SyncAction::RemoveDirTree {
                            dest: entry.path().to_path_buf(),
                        },
                        report,
                    );
                    // The subtree is removed as a whole; don't walk into it
                    walker.skip_current_dir();
                }
            } else if entry.file_type().is_file() && !counterpart.exists() {
                self.apply(
                    SyncAction::RemoveFile {
                        dest: entry.path().to_path_buf(),
                    },
                    report,
                );
            }
        }
    }

    /// Execute one action and fold its outcome into the report
    fn apply(&self, action: SyncAction, report: &mut SyncReport) {
        if let SyncAction::Skip { .. } = action {
            report.record_skip();
            return;
        }

        match self.executor.execute(&action) {
            Ok(Some(event)) => report.record_event(event),
            Ok(None) => {}
            Err(e) => report.record_error(e),
        }
    }
}
