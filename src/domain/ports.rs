use crate::domain::model::{BuildCommand, Moved, ProcessResult};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::path::Path;

/// Runs a build command to completion and captures both output streams.
///
/// A process that starts and exits non-zero is still `Ok`; only a failure to
/// launch the process is an error.
#[async_trait]
pub trait CommandRunner: Send + Sync {
    async fn run(&self, command: &BuildCommand) -> Result<ProcessResult>;
}

/// The filesystem capability the relocation step needs.
#[async_trait]
pub trait FileSystem: Send + Sync {
    async fn exists(&self, path: &Path) -> bool;
    async fn move_file(&self, source: &Path, destination: &Path) -> Result<Moved>;
}

pub trait ConfigProvider: Send + Sync {
    fn build_command(&self) -> BuildCommand;
    fn source_path(&self) -> &Path;
    fn destination_path(&self) -> &Path;
}
