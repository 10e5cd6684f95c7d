//! Error types for filesort
//!
//! Fatal errors abort a sort run; per-file copy failures are reported
//! through the same type but are caught and logged by the copier.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for filesort operations
#[derive(Error, Debug)]
pub enum SortError {
    /// I/O error during directory enumeration or copying
    #[error("I/O error at '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Source directory does not exist
    #[error("Path not found: {0}")]
    NotFound(PathBuf),

    /// Source path exists but is not a directory
    #[error("Not a directory: {0}")]
    NotADirectory(PathBuf),

    /// Source and destination resolve to the same directory
    #[error("Source and destination are the same: {0}")]
    SameSourceAndDestination(PathBuf),

    /// Copy target is the source file itself
    #[error("Source and target are the same file: {0}")]
    SameFile(PathBuf),

    /// Entry that is not a regular file (FIFO, socket, device, directory)
    #[error("Unsupported file type at '{path}': {file_type}")]
    UnsupportedFileType { path: PathBuf, file_type: String },

    /// Path that cannot be used as a copy source or target
    #[error("Invalid path: {0}")]
    InvalidPath(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// A sub-walk panicked or was cancelled
    #[error("Walk task failed: {0}")]
    TaskJoin(String),

    /// Async runtime could not be started
    #[error("Runtime error: {0}")]
    Runtime(String),
}

impl SortError {
    /// Create an I/O error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::ConfigError(message.into())
    }

    /// Check if this error is a permission issue
    pub fn is_permission_error(&self) -> bool {
        match self {
            Self::Io { source, .. } => source.kind() == std::io::ErrorKind::PermissionDenied,
            _ => false,
        }
    }

    /// Get the path associated with this error, if any
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            Self::Io { path, .. }
            | Self::NotFound(path)
            | Self::NotADirectory(path)
            | Self::SameSourceAndDestination(path)
            | Self::SameFile(path)
            | Self::UnsupportedFileType { path, .. } => Some(path),
            _ => None,
        }
    }
}

/// Result type alias for filesort operations
pub type Result<T> = std::result::Result<T, SortError>;

/// Extension trait for adding path context to std::io::Result
pub trait IoResultExt<T> {
    /// Add path context to an I/O error
    fn with_path(self, path: impl Into<PathBuf>) -> Result<T>;
}

impl<T> IoResultExt<T> for std::io::Result<T> {
    fn with_path(self, path: impl Into<PathBuf>) -> Result<T> {
        self.map_err(|e| SortError::io(path, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_with_path() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = SortError::io("/test/path", io_err);
        assert_eq!(err.path(), Some(&PathBuf::from("/test/path")));
        assert!(err.to_string().contains("/test/path"));
    }

    #[test]
    fn test_with_path_maps_io_errors() {
        let result: std::io::Result<()> = Err(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "denied",
        ));
        let err = result.with_path("/locked").unwrap_err();
        assert!(err.is_permission_error());
        assert_eq!(err.path(), Some(&PathBuf::from("/locked")));
    }

    #[test]
    fn test_non_io_errors() {
        let err = SortError::config("bad bucket");
        assert!(!err.is_permission_error());
        assert!(err.path().is_none());
        assert_eq!(err.to_string(), "Configuration error: bad bucket");

        let err = SortError::NotADirectory(PathBuf::from("/etc/hosts"));
        assert_eq!(err.path(), Some(&PathBuf::from("/etc/hosts")));

        let err = SortError::UnsupportedFileType {
            path: PathBuf::from("/src/pipe"),
            file_type: "fifo".to_string(),
        };
        assert_eq!(err.path(), Some(&PathBuf::from("/src/pipe")));
        assert!(err.to_string().contains("fifo"));
    }
}
