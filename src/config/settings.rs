//! Configuration settings for filesort
//!
//! Defines the CLI arguments and the runtime configuration derived from them.

use crate::error::{Result, SortError};
use crate::fs::DEFAULT_UNNAMED_BUCKET;
use clap::Parser;
use std::path::{Component, Path, PathBuf};

/// Destination used when `--destination` is not given
pub const DEFAULT_DESTINATION: &str = "dist";

/// filesort - Sort files into folders named after their extensions
#[derive(Parser, Debug, Clone)]
#[command(name = "filesort")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Sort files into folders named after their extensions")]
#[command(long_about = r#"
Recursively scans SOURCE and copies every file into DESTINATION/<ext>/,
where <ext> is the file's extension. Files without an extension go to
DESTINATION/no_extension/. Existing copies with the same name are overwritten.

Examples:
  filesort -S ~/Downloads                  # Sort into ./dist
  filesort -S ~/Downloads -D ~/Sorted      # Sort into ~/Sorted
"#)]
pub struct CliArgs {
    /// Path to the source directory
    #[arg(short = 'S', long, value_name = "PATH")]
    pub source: PathBuf,

    /// Path to the destination directory
    #[arg(short = 'D', long, value_name = "PATH", default_value = DEFAULT_DESTINATION)]
    pub destination: PathBuf,
}

/// Runtime configuration for a sort run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortConfig {
    /// Directory to scan
    pub source: PathBuf,
    /// Root under which buckets are created
    pub destination: PathBuf,
    /// Bucket for files without an extension (None = destination root)
    pub unnamed_bucket: Option<String>,
}

impl Default for SortConfig {
    fn default() -> Self {
        Self {
            source: PathBuf::new(),
            destination: PathBuf::from(DEFAULT_DESTINATION),
            unnamed_bucket: Some(DEFAULT_UNNAMED_BUCKET.to_string()),
        }
    }
}

impl SortConfig {
    /// Create config from CLI arguments
    pub fn from_cli(args: &CliArgs) -> Self {
        Self {
            source: args.source.clone(),
            destination: args.destination.clone(),
            ..Default::default()
        }
    }

    /// Reject settings that would place copies outside their bucket
    pub fn validate(&self) -> Result<()> {
        if self.source.as_os_str().is_empty() {
            return Err(SortError::config("source path is empty"));
        }
        if self.destination.as_os_str().is_empty() {
            return Err(SortError::config("destination path is empty"));
        }
        if let Some(name) = &self.unnamed_bucket {
            let mut components = Path::new(name).components();
            let single_normal = matches!(
                (components.next(), components.next()),
                (Some(Component::Normal(_)), None)
            );
            if !single_normal {
                return Err(SortError::config(format!(
                    "invalid bucket name for files without an extension: '{}'",
                    name
                )));
            }
        }
        Ok(())
    }
}
