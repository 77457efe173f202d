use crate::domain::model::{MoveStrategy, Moved};
use crate::domain::ports::FileSystem;
use crate::utils::error::{DeployError, Result};
use async_trait::async_trait;
use std::io;
use std::path::{Path, PathBuf};
use tokio::fs;

#[cfg(unix)]
const CROSS_DEVICE_ERROR: Option<i32> = Some(18); // EXDEV
#[cfg(windows)]
const CROSS_DEVICE_ERROR: Option<i32> = Some(17); // ERROR_NOT_SAME_DEVICE
#[cfg(not(any(unix, windows)))]
const CROSS_DEVICE_ERROR: Option<i32> = None;

#[derive(Debug, Clone, Default)]
pub struct LocalFileSystem;

impl LocalFileSystem {
    pub fn new() -> Self {
        Self
    }
}

fn is_cross_device(err: &io::Error) -> bool {
    CROSS_DEVICE_ERROR.is_some() && err.raw_os_error() == CROSS_DEVICE_ERROR
}

fn move_failure(source: &Path, destination: &Path, err: io::Error) -> DeployError {
    DeployError::MoveFailure {
        source_path: source.to_path_buf(),
        destination: destination.to_path_buf(),
        source: err,
    }
}

/// Sibling of `destination` the cross-device copy is written to first.
fn staging_path(destination: &Path) -> PathBuf {
    let mut name = destination
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".partial");
    destination.with_file_name(name)
}

/// Copies into a staging file next to `destination`, renames it into place,
/// then deletes the source. On failure only the staging file is removed; the
/// source and any existing destination are left as they were.
async fn copy_and_remove(source: &Path, destination: &Path) -> Result<u64> {
    let staging = staging_path(destination);

    let staged = async {
        let bytes = fs::copy(source, &staging).await?;
        fs::rename(&staging, destination).await?;
        Ok::<u64, io::Error>(bytes)
    }
    .await;

    let bytes = match staged {
        Ok(bytes) => bytes,
        Err(e) => {
            if let Err(cleanup) = fs::remove_file(&staging).await {
                tracing::debug!("No staging file to clean up at {:?}: {}", staging, cleanup);
            }
            return Err(move_failure(source, destination, e));
        }
    };

    fs::remove_file(source)
        .await
        .map_err(|e| move_failure(source, destination, e))?;

    Ok(bytes)
}

#[async_trait]
impl FileSystem for LocalFileSystem {
    async fn exists(&self, path: &Path) -> bool {
        fs::try_exists(path).await.unwrap_or(false)
    }

    async fn move_file(&self, source: &Path, destination: &Path) -> Result<Moved> {
        let bytes = fs::metadata(source)
            .await
            .map_err(|e| move_failure(source, destination, e))?
            .len();

        let strategy = match fs::rename(source, destination).await {
            Ok(()) => MoveStrategy::Rename,
            Err(e) if is_cross_device(&e) => {
                tracing::debug!("Rename crosses filesystems, falling back to copy: {}", e);
                copy_and_remove(source, destination).await?;
                MoveStrategy::CopyAndRemove
            }
            Err(e) => return Err(move_failure(source, destination, e)),
        };

        Ok(Moved {
            source: source.to_path_buf(),
            destination: destination.to_path_buf(),
            bytes,
            strategy,
        })
    }
}
