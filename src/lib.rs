//! # filesort - Sort files into extension buckets
//!
//! filesort recursively scans a source directory and copies every file it
//! finds into `<destination>/<extension>/<file name>`. Sibling
//! subdirectories are walked concurrently; files inside one directory are
//! copied one after another.
//!
//! ## Quick Start
//!
//! ```no_run
//! use filesort::core::sort_directory;
//! use std::path::Path;
//!
//! # async fn example() -> filesort::Result<()> {
//! let report = sort_directory(Path::new("/downloads"), Path::new("dist")).await?;
//! println!("Copied {} files", report.files_copied);
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! A file that cannot be copied is logged and recorded in
//! [`SortReport::failures`]; the run continues. A directory that cannot be
//! read ends the run with an error. Nothing already copied is rolled back.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod core;
pub mod error;
pub mod fs;
pub mod logging;

// Re-export commonly used types
pub use crate::config::{CliArgs, SortConfig};
pub use crate::core::{sort_directory, walk, SortReport, Sorter};
pub use crate::error::{Result, SortError};
pub use crate::fs::{BucketLayout, CopyOutcome};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
