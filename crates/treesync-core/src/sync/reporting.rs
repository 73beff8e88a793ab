//! Sync operation reporting and statistics

use super::SyncReport;

/// Sync operation reporter
pub struct SyncReporter;

impl SyncReporter {
    /// Create a new reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Generate a summary report
    #[must_use]
    pub fn generate_summary(report: &SyncReport) -> String {
        let mut output = String::new();

        output.push_str("\n=== Sync Summary ===\n");
        output.push_str(&format!("Directories created: {}\n", report.dirs_created()));
        output.push_str(&format!("Files copied:        {}\n", report.files_copied()));
        output.push_str(&format!("Files removed:       {}\n", report.files_removed()));
        output.push_str(&format!("Directories removed: {}\n", report.dirs_removed()));
        output.push_str(&format!("Unchanged files:     {}\n", report.skipped));

        if !report.errors.is_empty() {
            output.push_str(&format!("\nErrors ({}):\n", report.errors.len()));
            for error in &report.errors {
                output.push_str(&format!("  - {error}\n"));
            }
        }

        output.push_str(&format!(
            "\nTotal operations: {}\n",
            report.total_operations()
        ));

        if report.is_success() {
            output.push_str("Status: ✓ Success\n");
        } else {
            output.push_str("Status: ✗ Completed with errors\n");
        }

        output
    }
}
