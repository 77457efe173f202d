use crate::domain::model::{BuildCommand, ProcessResult};
use crate::domain::ports::CommandRunner;
use crate::utils::error::{DeployError, Result};
use async_trait::async_trait;
use std::process::Stdio;
use tokio::process::Command;

/// Runs build commands as child processes of this tool.
#[derive(Debug, Clone, Default)]
pub struct SystemCommandRunner;

impl SystemCommandRunner {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl CommandRunner for SystemCommandRunner {
    async fn run(&self, command: &BuildCommand) -> Result<ProcessResult> {
        let mut process = Command::new(&command.program);
        process
            .args(&command.args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        if let Some(dir) = &command.working_dir {
            process.current_dir(dir);
        }

        tracing::debug!(
            "Spawning `{}` in {:?}",
            command.display_line(),
            command.working_dir
        );

        let output = process
            .output()
            .await
            .map_err(|e| DeployError::CommandLaunch {
                command: command.display_line(),
                source: e,
            })?;

        Ok(ProcessResult {
            status: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}
