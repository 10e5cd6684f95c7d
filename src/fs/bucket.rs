//! Extension buckets
//!
//! Maps a source file to the destination subdirectory named after its
//! extension.

use crate::error::{Result, SortError};
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

/// Bucket used for files whose name carries no extension
pub const DEFAULT_UNNAMED_BUCKET: &str = "no_extension";

/// Extension of `path` without the leading dot, or an empty string.
///
/// Follows [`Path::extension`]: `a.tar.gz` yields `gz`, while `.bashrc`
/// and `Makefile` yield nothing.
pub fn extension_of(path: &Path) -> &OsStr {
    path.extension().unwrap_or_else(|| OsStr::new(""))
}

/// Destination root and bucket naming rules shared by every walk task
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BucketLayout {
    root: PathBuf,
    unnamed_bucket: Option<OsString>,
}

impl BucketLayout {
    /// Layout with the default bucket for extensionless files
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            unnamed_bucket: Some(OsString::from(DEFAULT_UNNAMED_BUCKET)),
        }
    }

    /// Set the bucket for extensionless files.
    ///
    /// `None` keeps the empty bucket name, so those files land directly in
    /// the destination root.
    pub fn with_unnamed_bucket(mut self, name: Option<impl Into<OsString>>) -> Self {
        self.unnamed_bucket = name.map(Into::into);
        self
    }

    /// Destination root
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Bucket name for a file
    pub fn bucket_name<'a>(&'a self, file: &'a Path) -> &'a OsStr {
        let ext = extension_of(file);
        match &self.unnamed_bucket {
            Some(name) if ext.is_empty() => name.as_os_str(),
            _ => ext,
        }
    }

    /// Directory the file is copied into
    pub fn bucket_dir(&self, file: &Path) -> PathBuf {
        self.root.join(self.bucket_name(file))
    }

    /// Full path of the copy: `root/<bucket>/<file name>`
    pub fn target_path(&self, file: &Path) -> Result<PathBuf> {
        let name = file
            .file_name()
            .ok_or_else(|| SortError::InvalidPath(file.display().to_string()))?;
        Ok(self.bucket_dir(file).join(name))
    }
}
