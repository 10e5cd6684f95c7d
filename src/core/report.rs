//! Sort run results

use crate::fs::CopyOutcome;
use std::path::PathBuf;
use std::time::Duration;
use tracing::info;

/// Tally of a walk; child walks' reports are merged into their parent's
#[derive(Debug, Default)]
pub struct SortReport {
    /// Files copied into a bucket
    pub files_copied: u64,
    /// Total bytes copied
    pub bytes_copied: u64,
    /// Directories walked, including the root
    pub directories: u64,
    /// Files that could not be copied, with the error message
    pub failures: Vec<(PathBuf, String)>,
    /// Wall time of the whole run (set by the sorter)
    pub duration: Duration,
}

impl SortReport {
    /// Check if every discovered file was copied
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    /// Count the outcome of one copy
    pub fn record(&mut self, file: PathBuf, outcome: CopyOutcome) {
        match outcome {
            CopyOutcome::Copied { bytes, .. } => {
                self.files_copied += 1;
                self.bytes_copied += bytes;
            }
            CopyOutcome::Failed(e) => self.failures.push((file, e.to_string())),
        }
    }

    /// Fold a finished sub-walk into this report
    pub fn merge(&mut self, other: SortReport) {
        self.files_copied += other.files_copied;
        self.bytes_copied += other.bytes_copied;
        self.directories += other.directories;
        self.failures.extend(other.failures);
    }

    /// Log a one-line summary
    pub fn log_summary(&self) {
        info!(
            "Copied {} files ({}) from {} directories in {:.2?}, {} failed",
            self.files_copied,
            humansize::format_size(self.bytes_copied, humansize::BINARY),
            self.directories,
            self.duration,
            self.failures.len()
        );
    }
}
