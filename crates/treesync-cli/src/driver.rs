//! Cycle driver running reconciliation passes on a fixed interval

use std::thread;
use std::time::Duration;

use tracing::{error, info};
use treesync_core::sync::{SyncEngine, SyncReporter};

use crate::cli::Cli;

/// Run the configured number of synchronization cycles
///
/// A pass that fails outright (invalid roots) is logged and the driver
/// carries on with the next scheduled cycle rather than terminating the
/// process; the next cycle re-checks the roots from scratch.
pub fn run(cli: &Cli) -> anyhow::Result<()> {
    let engine = SyncEngine::new(cli.dry_run);
    let interval = Duration::from_secs(cli.interval);

    if cli.dry_run {
        info!("Dry-run mode: the replica will not be modified");
    }

    let mut cycle: u64 = 0;
    while cli.forever || cycle < cli.cycles {
        cycle += 1;

        if cli.forever {
            info!("Starting synchronization cycle {cycle}");
        } else {
            info!("Starting synchronization cycle {cycle}/{}", cli.cycles);
        }

        match engine.sync(&cli.source, &cli.replica) {
            Ok(report) => {
                info!(
                    "Cycle {cycle} completed: {} operations, {} unchanged, {} errors",
                    report.total_operations(),
                    report.skipped,
                    report.errors.len()
                );
                if cli.verbose {
                    info!("{}", SyncReporter::generate_summary(&report));
                }
            }
            Err(e) => error!("Synchronization cycle {cycle} failed: {e}"),
        }

        if !cli.forever && cycle >= cli.cycles {
            break;
        }

        info!("Next synchronization in {} seconds", cli.interval);
        thread::sleep(interval);
    }

    info!("Reached maximum number of synchronization cycles, exiting");
    Ok(())
}
