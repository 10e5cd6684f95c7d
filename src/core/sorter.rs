//! Top-level sort run
//!
//! Resolves the source and destination, then walks the source once.

use crate::config::SortConfig;
use crate::core::{walk, SortReport};
use crate::error::{IoResultExt, Result, SortError};
use crate::fs::BucketLayout;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;
use tracing::debug;

/// Sorts a source tree into extension buckets
pub struct Sorter {
    config: SortConfig,
}

impl Sorter {
    /// Create a new sorter
    pub fn new(config: SortConfig) -> Self {
        Self { config }
    }

    /// Configuration this sorter runs with
    pub fn config(&self) -> &SortConfig {
        &self.config
    }

    /// Run the sort.
    ///
    /// The destination root is created before walking so it can be
    /// recognized (and skipped) if it lies inside the source tree.
    pub async fn run(&self) -> Result<SortReport> {
        let start_time = Instant::now();
        self.config.validate()?;

        let source = resolve_source(&self.config.source).await?;
        let destination = resolve_destination(&self.config.destination).await?;

        if source == destination {
            return Err(SortError::SameSourceAndDestination(source));
        }

        debug!(
            "Sorting {} into {}",
            source.display(),
            destination.display()
        );

        let layout = BucketLayout::new(destination)
            .with_unnamed_bucket(self.config.unnamed_bucket.as_deref());
        let mut report = walk(source, Arc::new(layout)).await?;

        report.duration = start_time.elapsed();
        Ok(report)
    }
}

/// Sort `source` into `destination` with default settings
pub async fn sort_directory(source: &Path, destination: &Path) -> Result<SortReport> {
    let config = SortConfig {
        source: source.to_path_buf(),
        destination: destination.to_path_buf(),
        ..Default::default()
    };

    Sorter::new(config).run().await
}

async fn resolve_source(source: &Path) -> Result<PathBuf> {
    let metadata = match tokio::fs::metadata(source).await {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(SortError::NotFound(source.to_path_buf()));
        }
        Err(e) => return Err(SortError::io(source, e)),
    };

    if !metadata.is_dir() {
        return Err(SortError::NotADirectory(source.to_path_buf()));
    }

    tokio::fs::canonicalize(source).await.with_path(source)
}

async fn resolve_destination(destination: &Path) -> Result<PathBuf> {
    tokio::fs::create_dir_all(destination)
        .await
        .with_path(destination)?;
    tokio::fs::canonicalize(destination)
        .await
        .with_path(destination)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_file(path: &Path, contents: &[u8]) {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        File::create(path).unwrap().write_all(contents).unwrap();
    }

    #[tokio::test]
    async fn test_sort_directory() {
        let src = TempDir::new().unwrap();
        let out = TempDir::new().unwrap();
        write_file(&src.path().join("a.txt"), b"a");
        write_file(&src.path().join("b.jpg"), b"b");
        write_file(&src.path().join("sub/c.txt"), b"c");
        write_file(&src.path().join("sub/LICENSE"), b"mit");

        let dist = out.path().join("dist");
        let report = sort_directory(src.path(), &dist).await.unwrap();

        assert!(report.is_success());
        assert_eq!(report.files_copied, 4);
        assert!(dist.join("txt/a.txt").is_file());
        assert!(dist.join("txt/c.txt").is_file());
        assert!(dist.join("jpg/b.jpg").is_file());
        assert!(dist.join("no_extension/LICENSE").is_file());
    }

    #[tokio::test]
    async fn test_legacy_unnamed_bucket() {
        let src = TempDir::new().unwrap();
        let out = TempDir::new().unwrap();
        write_file(&src.path().join("README"), b"r");

        let config = SortConfig {
            source: src.path().to_path_buf(),
            destination: out.path().to_path_buf(),
            unnamed_bucket: None,
        };
        Sorter::new(config).run().await.unwrap();

        assert!(out.path().join("README").is_file());
    }

    #[tokio::test]
    async fn test_empty_source_creates_destination() {
        let src = TempDir::new().unwrap();
        let out = TempDir::new().unwrap();
        let dist = out.path().join("dist");

        let report = sort_directory(src.path(), &dist).await.unwrap();

        assert_eq!(report.files_copied, 0);
        assert_eq!(report.directories, 1);
        assert!(dist.is_dir());
    }

    #[tokio::test]
    async fn test_missing_source() {
        let out = TempDir::new().unwrap();
        let missing = out.path().join("nope");

        let err = sort_directory(&missing, &out.path().join("dist"))
            .await
            .unwrap_err();
        assert!(matches!(err, SortError::NotFound(p) if p == missing));
    }

    #[tokio::test]
    async fn test_source_must_be_directory() {
        let src = TempDir::new().unwrap();
        let file = src.path().join("file.txt");
        write_file(&file, b"x");

        let err = sort_directory(&file, &src.path().join("dist"))
            .await
            .unwrap_err();
        assert!(matches!(err, SortError::NotADirectory(_)));
    }

    #[tokio::test]
    async fn test_same_source_and_destination() {
        let src = TempDir::new().unwrap();
        write_file(&src.path().join("a.txt"), b"a");

        let err = sort_directory(src.path(), src.path()).await.unwrap_err();
        assert!(matches!(err, SortError::SameSourceAndDestination(_)));
        assert!(!src.path().join("txt").exists());
    }

    #[tokio::test]
    async fn test_default_destination_inside_source() {
        let src = TempDir::new().unwrap();
        write_file(&src.path().join("a.txt"), b"a");
        write_file(&src.path().join("docs/b.md"), b"b");

        let first = sort_directory(src.path(), &src.path().join("dist"))
            .await
            .unwrap();
        let second = sort_directory(src.path(), &src.path().join("dist"))
            .await
            .unwrap();

        assert_eq!(first.files_copied, 2);
        assert_eq!(second.files_copied, 2);
        assert!(src.path().join("dist/txt/a.txt").is_file());
        assert!(src.path().join("dist/md/b.md").is_file());
    }

    #[tokio::test]
    async fn test_source_inside_destination_keeps_files() {
        let out = TempDir::new().unwrap();
        let dist = out.path().join("dist");
        write_file(&dist.join("txt/a.txt"), b"precious data");
        write_file(&dist.join("txt/b.md"), b"notes");

        let report = sort_directory(&dist.join("txt"), &dist).await.unwrap();

        assert_eq!(report.files_copied, 1);
        assert_eq!(report.failures.len(), 1);
        assert!(report.failures[0].0.ends_with("txt/a.txt"));
        assert_eq!(std::fs::read(dist.join("txt/a.txt")).unwrap(), b"precious data");
        assert_eq!(std::fs::read(dist.join("md/b.md")).unwrap(), b"notes");
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_named_pipe_in_tree_does_not_hang() {
        let src = TempDir::new().unwrap();
        let out = TempDir::new().unwrap();
        write_file(&src.path().join("a.txt"), b"a");
        nix::unistd::mkfifo(
            &src.path().join("pipe.fifo"),
            nix::sys::stat::Mode::S_IRWXU,
        )
        .unwrap();

        let report = tokio::time::timeout(
            std::time::Duration::from_secs(10),
            sort_directory(src.path(), out.path()),
        )
        .await
        .expect("sorting a tree with a fifo must not block")
        .unwrap();

        assert_eq!(report.files_copied, 1);
        assert_eq!(report.failures.len(), 1);
        assert!(report.failures[0].0.ends_with("pipe.fifo"));
        assert!(out.path().join("txt/a.txt").is_file());
    }

    #[tokio::test]
    async fn test_invalid_config_rejected_before_walking() {
        let src = TempDir::new().unwrap();
        let out = TempDir::new().unwrap();
        let dist = out.path().join("dist");

        let config = SortConfig {
            source: src.path().to_path_buf(),
            destination: dist.clone(),
            unnamed_bucket: Some("../escape".to_string()),
        };
        let err = Sorter::new(config).run().await.unwrap_err();

        assert!(matches!(err, SortError::ConfigError(_)));
        assert!(!dist.exists());
    }
}
