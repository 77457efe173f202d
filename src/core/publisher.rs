use crate::core::{BuildCommand, CommandRunner, ProcessResult};
use crate::utils::error::{DeployError, Result};

/// Runs the build tool's publish step.
pub struct Publisher<R: CommandRunner> {
    runner: R,
}

impl<R: CommandRunner> Publisher<R> {
    pub fn new(runner: R) -> Self {
        Self { runner }
    }

    /// Runs `command` to completion. A non-zero exit becomes
    /// [`DeployError::BuildFailure`] carrying the captured stderr.
    pub async fn publish(&self, command: &BuildCommand) -> Result<ProcessResult> {
        let display = command.display_line();
        println!("Running {}", display);

        let result = self.runner.run(command).await?;

        if !result.success() {
            tracing::debug!("Build stdout before failure:\n{}", result.stdout);
            return Err(DeployError::BuildFailure {
                command: display,
                status: result.status,
                stderr: result.stderr,
            });
        }

        println!("{} output: {}", display, result.stdout);
        if !result.stderr.trim().is_empty() {
            tracing::warn!("Build succeeded with diagnostics on stderr:\n{}", result.stderr);
        }

        Ok(result)
    }
}
