//! Bucket copy operations
//!
//! Copies a single file into its extension bucket. Failures here are
//! isolated: they are logged and reported, never propagated to the walk.

use crate::error::{IoResultExt, Result, SortError};
use crate::fs::BucketLayout;
use std::path::{Path, PathBuf};
use tracing::{debug, error};

/// Outcome of copying one file into its bucket
#[derive(Debug)]
pub enum CopyOutcome {
    /// File was written to `target`
    Copied {
        /// Path of the copy
        target: PathBuf,
        /// Bytes written
        bytes: u64,
    },
    /// Bucket creation or copy failed; the file was left uncopied
    Failed(SortError),
}

impl CopyOutcome {
    /// Whether the copy succeeded
    pub fn is_copied(&self) -> bool {
        matches!(self, Self::Copied { .. })
    }
}

/// Copy `file` to `layout.root()/<ext>/<name>`, creating the bucket as needed.
///
/// Bucket creation tolerates the directory already existing or being created
/// concurrently. An existing file with the same name is overwritten, unless
/// it is `file` itself. Only regular files (or links to them) are copied;
/// opening a FIFO would block until a writer shows up.
pub async fn try_copy_to_bucket(file: &Path, layout: &BucketLayout) -> Result<(PathBuf, u64)> {
    let target = layout.target_path(file)?;
    let bucket = layout.bucket_dir(file);

    let metadata = tokio::fs::metadata(file).await.with_path(file)?;
    if !metadata.is_file() {
        return Err(SortError::UnsupportedFileType {
            path: file.to_path_buf(),
            file_type: describe_file_type(&metadata.file_type()).to_string(),
        });
    }

    tokio::fs::create_dir_all(&bucket).await.with_path(&bucket)?;

    if is_same_file(file, &target).await? {
        return Err(SortError::SameFile(target));
    }

    let bytes = tokio::fs::copy(file, &target).await.with_path(file)?;

    Ok((target, bytes))
}

/// Whether `target` already exists and resolves to `source`
async fn is_same_file(source: &Path, target: &Path) -> Result<bool> {
    let target = match tokio::fs::canonicalize(target).await {
        Ok(path) => path,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(false),
        Err(e) => return Err(SortError::io(target, e)),
    };
    let source = tokio::fs::canonicalize(source).await.with_path(source)?;
    Ok(source == target)
}

fn describe_file_type(file_type: &std::fs::FileType) -> &'static str {
    if file_type.is_dir() {
        return "directory";
    }
    #[cfg(unix)]
    {
        use std::os::unix::fs::FileTypeExt;
        if file_type.is_fifo() {
            return "fifo";
        }
        if file_type.is_socket() {
            return "socket";
        }
        if file_type.is_block_device() {
            return "block device";
        }
        if file_type.is_char_device() {
            return "character device";
        }
    }
    "special file"
}

/// Copy `file` into its bucket, logging any failure instead of returning it
pub async fn copy_to_bucket(file: &Path, layout: &BucketLayout) -> CopyOutcome {
    match try_copy_to_bucket(file, layout).await {
        Ok((target, bytes)) => {
            debug!("Copied {} -> {}", file.display(), target.display());
            CopyOutcome::Copied { target, bytes }
        }
        Err(e) => {
            error!("Failed to copy {}: {}", file.display(), e);
            CopyOutcome::Failed(e)
        }
    }
}
