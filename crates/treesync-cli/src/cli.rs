use clap::Parser;
use std::path::PathBuf;

/// One-way folder synchronization tool
///
/// Periodically mirrors a source folder into a replica folder: new and
/// changed files are copied over, and files or directories removed from
/// the source are removed from the replica. The source is never modified.
#[derive(Parser, Debug)]
#[command(name = "treesync")]
#[command(about, long_about = None, version)]
pub struct Cli {
    /// Source folder path (read-only, never modified)
    pub source: PathBuf,

    /// Replica folder path (made to mirror the source)
    pub replica: PathBuf,

    /// Synchronization interval in seconds
    pub interval: u64,

    /// Path to the log file
    pub logfile: PathBuf,

    /// Number of synchronization cycles to run before exiting
    #[arg(long, default_value_t = 5, conflicts_with = "forever")]
    pub cycles: u64,

    /// Keep synchronizing until interrupted
    #[arg(long)]
    pub forever: bool,

    /// Preview changes without touching the replica
    #[arg(long)]
    pub dry_run: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
