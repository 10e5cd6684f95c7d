//! Recursive directory walk
//!
//! Each directory gets its own task group: subdirectories are walked as
//! concurrently spawned tasks, files are copied in place as they are
//! enumerated, and the group is joined before the directory's walk returns.

use crate::core::SortReport;
use crate::error::{IoResultExt, Result, SortError};
use crate::fs::{copy_to_bucket, BucketLayout};
use futures::future::{BoxFuture, FutureExt};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::task::JoinSet;
use tracing::{debug, info};

type SubWalks = JoinSet<Result<SortReport>>;

/// Walk `dir`, copying every file found into its bucket under `layout`.
///
/// Enumeration errors are fatal: the remaining sub-walks of the directory
/// are cancelled and awaited, then the error is returned. Files already
/// copied stay where they are. Copy errors are logged and counted in the
/// report instead.
///
/// A subdirectory equal to `layout.root()` is not descended into, so the
/// root should be canonical when it lies inside `dir`.
///
/// Symbolic links to directories are not followed: they go to the copier,
/// which reports them as unsupported.
pub fn walk(dir: PathBuf, layout: Arc<BucketLayout>) -> BoxFuture<'static, Result<SortReport>> {
    async move {
        let mut report = SortReport {
            directories: 1,
            ..Default::default()
        };
        let mut subwalks = SubWalks::new();

        if let Err(e) = visit_entries(&dir, &layout, &mut subwalks, &mut report).await {
            subwalks.shutdown().await;
            return Err(e);
        }

        while let Some(joined) = subwalks.join_next().await {
            let walked = joined
                .map_err(|e| SortError::TaskJoin(e.to_string()))
                .and_then(|result| result);
            match walked {
                Ok(child) => report.merge(child),
                Err(e) => {
                    subwalks.shutdown().await;
                    return Err(e);
                }
            }
        }

        info!(
            "Files from {} copied to: {}",
            dir.display(),
            layout.root().display()
        );
        Ok(report)
    }
    .boxed()
}

/// Enumerate `dir` once: spawn sub-walks for directories, copy everything else
async fn visit_entries(
    dir: &Path,
    layout: &Arc<BucketLayout>,
    subwalks: &mut SubWalks,
    report: &mut SortReport,
) -> Result<()> {
    let mut entries = tokio::fs::read_dir(dir).await.with_path(dir)?;

    while let Some(entry) = entries.next_entry().await.with_path(dir)? {
        let path = entry.path();
        // Symlinks are not followed here, so a linked directory is handed
        // to the copier rather than recursed into.
        let file_type = entry.file_type().await.with_path(&path)?;

        if file_type.is_dir() {
            if path.as_path() == layout.root() {
                debug!("Skipping destination directory {}", path.display());
                continue;
            }
            info!("Found folder: {}", path.display());
            subwalks.spawn(walk(path, Arc::clone(layout)));
        } else {
            let outcome = copy_to_bucket(&path, layout).await;
            report.record(path, outcome);
        }
    }

    Ok(())
}
