use crate::core::{FileSystem, RelocateOutcome};
use crate::utils::error::Result;
use std::path::Path;

/// Moves the published artifact to its deployment path.
pub struct Relocator<F: FileSystem> {
    fs: F,
}

impl<F: FileSystem> Relocator<F> {
    pub fn new(fs: F) -> Self {
        Self { fs }
    }

    /// Moves `source` to `destination` when the source exists.
    ///
    /// A missing source is reported and returned as
    /// [`RelocateOutcome::SourceMissing`], not as an error.
    pub async fn relocate(&self, source: &Path, destination: &Path) -> Result<RelocateOutcome> {
        if !self.fs.exists(source).await {
            tracing::info!("Source {:?} not found, skipping relocation", source);
            println!("Source file {} does not exist.", source.display());
            return Ok(RelocateOutcome::SourceMissing {
                source: source.to_path_buf(),
            });
        }

        let moved = self.fs.move_file(source, destination).await?;
        tracing::debug!("Moved {} bytes via {:?}", moved.bytes, moved.strategy);
        println!("File moved to {}", destination.display());

        Ok(RelocateOutcome::Relocated(moved))
    }
}
