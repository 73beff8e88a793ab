//! # treesync-core
//!
//! Core library for one-way folder tree synchronization.
//!
//! This library converges a replica directory tree to a source directory
//! tree: files and directories added to or changed in the source are
//! copied over, and entries the source no longer has are removed from the
//! replica. The source is never written to.

#![warn(missing_docs)]
#![warn(clippy::all)]

/// File content comparison via streaming digests
pub mod comparison;

/// Core error types for the treesync library
pub mod error;

/// One-way tree synchronization engine
pub mod sync;
