//! Log output configuration
//!
//! Every sync event and error is written both to the console and to the
//! append-only log file given on the command line, each line timestamped
//! by the subscriber.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Initialize the tracing subscriber
///
/// Installs two layers: compact console output and an ANSI-free layer
/// appending to `logfile`. The level comes from `RUST_LOG` when set,
/// otherwise `info` (`debug` with `--verbose`).
pub fn init(logfile: &Path, verbose: bool) -> anyhow::Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(logfile)
        .with_context(|| format!("Failed to open log file: {}", logfile.display()))?;

    let default_level = if verbose { "debug" } else { "info" };
    let filter_layer =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(default_level))?;

    let console_layer = fmt::layer().with_target(false).compact();
    let file_layer = fmt::layer()
        .with_target(false)
        .with_ansi(false)
        .with_writer(Arc::new(file));

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(console_layer)
        .with(file_layer)
        .try_init()?;

    Ok(())
}
