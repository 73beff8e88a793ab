//! One-way tree synchronization engine
//!
//! This module converges a replica directory tree to a source tree in two
//! passes per call: a forward pass over the source creating and updating
//! replica entries, then a reverse pass over the replica deleting
//! anything the source no longer has. A pass is stateless: every call
//! derives its work from the live filesystem contents, so the engine is
//! self-healing after external interference and safe to re-run.

mod actions;
mod events;
mod executor;
mod orchestrator;
mod reporting;

pub use actions::{SyncAction, SyncActionResolver};
pub use events::SyncEvent;
pub use executor::FileOperationExecutor;
pub use orchestrator::SyncEngine;
pub use reporting::SyncReporter;

use tracing::{info, warn};

use crate::error::SyncError;

/// Outcome of one reconciliation pass
///
/// Events appear in application order; errors are per-item failures that
/// did not stop the pass.
#[derive(Debug, Default)]
pub struct SyncReport {
    /// State-changing operations applied to the replica
    pub events: Vec<SyncEvent>,
    /// Per-item failures encountered along the way
    pub errors: Vec<SyncError>,
    /// Files left alone because their content already matched
    pub skipped: usize,
}

impl SyncReport {
    /// Record an applied operation, logging its one-line description
    pub fn record_event(&mut self, event: SyncEvent) {
        info!("{event}");
        self.events.push(event);
    }

    /// Record a per-item failure, logging it with the offending path
    pub fn record_error(&mut self, error: SyncError) {
        warn!("{error}");
        self.errors.push(error);
    }

    /// Record a file that needed no action
    pub fn record_skip(&mut self) {
        self.skipped += 1;
    }

    /// Directories created in the replica
    #[must_use]
    pub fn dirs_created(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, SyncEvent::DirCreated { .. }))
            .count()
    }

    /// Files copied into the replica
    #[must_use]
    pub fn files_copied(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, SyncEvent::FileCopied { .. }))
            .count()
    }

    /// Files removed from the replica
    #[must_use]
    pub fn files_removed(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, SyncEvent::FileRemoved { .. }))
            .count()
    }

    /// Directory subtrees removed from the replica
    #[must_use]
    pub fn dirs_removed(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, SyncEvent::DirRemoved { .. }))
            .count()
    }

    /// Total operations performed
    #[must_use]
    pub fn total_operations(&self) -> usize {
        self.events.len()
    }

    /// Whether sync was successful (no errors)
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.errors.is_empty()
    }
}
