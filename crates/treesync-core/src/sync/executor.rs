//! Filesystem operation executor

use std::fs;
use std::path::Path;

use filetime::FileTime;

use super::actions::SyncAction;
use super::events::SyncEvent;
use crate::error::{Result, io_err};

/// Executes resolved sync actions against the replica tree
pub struct FileOperationExecutor {
    dry_run: bool,
}

impl FileOperationExecutor {
    /// Create a new executor
    #[must_use]
    pub const fn new(dry_run: bool) -> Self {
        Self { dry_run }
    }

    /// Execute a sync action, returning the event it produced
    ///
    /// `Skip` actions produce no event. In dry-run mode nothing on disk is
    /// changed but the event is still returned.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying file operation fails.
    pub fn execute(&self, action: &SyncAction) -> Result<Option<SyncEvent>> {
        match action {
            SyncAction::CreateDir { dest } => {
                self.create_dir(dest)?;
                Ok(Some(SyncEvent::DirCreated { path: dest.clone() }))
            }
            SyncAction::CopyFile { source, dest } => {
                self.copy_file(source, dest)?;
                Ok(Some(SyncEvent::FileCopied {
                    source: source.clone(),
                    dest: dest.clone(),
                }))
            }
            SyncAction::RemoveFile { dest } => {
                self.remove_file(dest)?;
                Ok(Some(SyncEvent::FileRemoved { path: dest.clone() }))
            }
            SyncAction::RemoveDirTree { dest } => {
                self.remove_dir_tree(dest)?;
                Ok(Some(SyncEvent::DirRemoved { path: dest.clone() }))
            }
            SyncAction::Skip { .. } => Ok(None),
        }
    }

    /// Create a directory and any missing ancestors
    fn create_dir(&self, dest: &Path) -> Result<()> {
        if self.dry_run {
            return Ok(());
        }

        fs::create_dir_all(dest).map_err(|e| io_err(dest, e))
    }

    /// Copy a file, preserving permission bits and modification time
    fn copy_file(&self, source: &Path, dest: &Path) -> Result<()> {
        if self.dry_run {
            return Ok(());
        }

        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent).map_err(|e| io_err(parent, e))?;
        }

        // fs::copy carries the permission bits; the mtime is restored
        // separately so the replica matches the source timestamp
        fs::copy(source, dest).map_err(|e| io_err(dest, e))?;

        let metadata = fs::metadata(source).map_err(|e| io_err(source, e))?;
        let mtime = FileTime::from_last_modification_time(&metadata);
        filetime::set_file_mtime(dest, mtime).map_err(|e| io_err(dest, e))
    }

    /// Remove a single file
    fn remove_file(&self, dest: &Path) -> Result<()> {
        if self.dry_run {
            return Ok(());
        }

        fs::remove_file(dest).map_err(|e| io_err(dest, e))
    }

    /// Remove a directory and all of its descendants
    fn remove_dir_tree(&self, dest: &Path) -> Result<()> {
        if self.dry_run {
            return Ok(());
        }

        fs::remove_dir_all(dest).map_err(|e| io_err(dest, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use std::time::{Duration, UNIX_EPOCH};
    use tempfile::TempDir;

    #[test]
    fn test_copy_creates_missing_parents() {
        let tmp = TempDir::new().unwrap();
        let source = tmp.path().join("a.txt");
        let dest = tmp.path().join("replica/nested/a.txt");
        fs::write(&source, "content").unwrap();

        let executor = FileOperationExecutor::new(false);
        let event = executor
            .execute(&SyncAction::CopyFile {
                source: source.clone(),
                dest: dest.clone(),
            })
            .unwrap();

        assert_eq!(fs::read_to_string(&dest).unwrap(), "content");
        assert_eq!(event, Some(SyncEvent::FileCopied { source, dest }));
    }

    #[test]
    fn test_copy_preserves_modification_time() {
        let tmp = TempDir::new().unwrap();
        let source = tmp.path().join("a.txt");
        let dest = tmp.path().join("b.txt");
        fs::write(&source, "content").unwrap();

        // Pin the source to a known mtime (Jan 1, 2024)
        let mtime = FileTime::from_system_time(UNIX_EPOCH + Duration::from_secs(1_704_067_200));
        filetime::set_file_mtime(&source, mtime).unwrap();

        let executor = FileOperationExecutor::new(false);
        executor
            .execute(&SyncAction::CopyFile {
                source: source.clone(),
                dest: dest.clone(),
            })
            .unwrap();

        let copied = FileTime::from_last_modification_time(&fs::metadata(&dest).unwrap());
        assert_eq!(copied.unix_seconds(), mtime.unix_seconds());
    }

    #[test]
    fn test_remove_file_and_dir_tree() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("old.log");
        let dir = tmp.path().join("old");
        fs::write(&file, "stale").unwrap();
        fs::create_dir_all(dir.join("nested")).unwrap();
        fs::write(dir.join("nested/x.txt"), "x").unwrap();

        let executor = FileOperationExecutor::new(false);
        executor
            .execute(&SyncAction::RemoveFile { dest: file.clone() })
            .unwrap();
        executor
            .execute(&SyncAction::RemoveDirTree { dest: dir.clone() })
            .unwrap();

        assert!(!file.exists());
        assert!(!dir.exists());
    }

    #[test]
    fn test_skip_produces_no_event() {
        let executor = FileOperationExecutor::new(false);
        let event = executor
            .execute(&SyncAction::Skip {
                dest: PathBuf::from("a.txt"),
                reason: "identical content",
            })
            .unwrap();

        assert_eq!(event, None);
    }

    #[test]
    fn test_dry_run_reports_without_touching_disk() {
        let tmp = TempDir::new().unwrap();
        let source = tmp.path().join("a.txt");
        let dest = tmp.path().join("b.txt");
        let stale = tmp.path().join("stale.txt");
        fs::write(&source, "content").unwrap();
        fs::write(&stale, "stale").unwrap();

        let executor = FileOperationExecutor::new(true);
        let copy_event = executor
            .execute(&SyncAction::CopyFile {
                source: source.clone(),
                dest: dest.clone(),
            })
            .unwrap();
        let remove_event = executor
            .execute(&SyncAction::RemoveFile { dest: stale.clone() })
            .unwrap();

        assert!(copy_event.is_some());
        assert!(remove_event.is_some());
        assert!(!dest.exists());
        assert!(stale.exists());
    }
}
