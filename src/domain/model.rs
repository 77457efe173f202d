use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::PathBuf;

/// A build invocation: program, arguments and the directory it runs in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildCommand {
    pub program: String,
    pub args: Vec<String>,
    pub working_dir: Option<PathBuf>,
}

impl BuildCommand {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            working_dir: None,
        }
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }

    /// Program and arguments joined for display, e.g. `dotnet publish`.
    pub fn display_line(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Exit status and captured streams of a finished build process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessResult {
    /// `None` when the process was terminated by a signal.
    pub status: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl ProcessResult {
    pub fn success(&self) -> bool {
        self.status == Some(0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MoveStrategy {
    Rename,
    CopyAndRemove,
}

/// A completed relocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Moved {
    pub source: PathBuf,
    pub destination: PathBuf,
    pub bytes: u64,
    pub strategy: MoveStrategy,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RelocateOutcome {
    Relocated(Moved),
    SourceMissing { source: PathBuf },
}

impl RelocateOutcome {
    pub fn state(&self) -> DeployState {
        match self {
            RelocateOutcome::Relocated(_) => DeployState::Relocated,
            RelocateOutcome::SourceMissing { .. } => DeployState::SourceMissing,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DeployState {
    Start,
    Publishing,
    Published,
    PublishFailed,
    Relocating,
    RelocateFailed,
    Relocated,
    SourceMissing,
}

impl DeployState {
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            DeployState::PublishFailed
                | DeployState::RelocateFailed
                | DeployState::Relocated
                | DeployState::SourceMissing
        )
    }

    /// Legal transitions of a single run. No state re-enters an earlier one.
    pub fn can_transition_to(self, next: DeployState) -> bool {
        matches!(
            (self, next),
            (DeployState::Start, DeployState::Publishing)
                | (DeployState::Publishing, DeployState::Published)
                | (DeployState::Publishing, DeployState::PublishFailed)
                | (DeployState::Published, DeployState::Relocating)
                | (DeployState::Relocating, DeployState::RelocateFailed)
                | (DeployState::Relocating, DeployState::Relocated)
                | (DeployState::Relocating, DeployState::SourceMissing)
        )
    }
}

/// What a run would do, shown by `--dry-run`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployPlan {
    pub command: BuildCommand,
    pub source: PathBuf,
    pub destination: PathBuf,
}

/// Summary of a successful run.
#[derive(Debug, Clone, Serialize)]
pub struct DeployReport {
    pub final_state: DeployState,
    pub command: String,
    pub exit_code: Option<i32>,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub publish_ms: u64,
    pub relocate_ms: u64,
    pub moved: Option<Moved>,
    pub missing_source: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_line() {
        let cmd = BuildCommand::new("dotnet").args(["publish", "-c", "Release"]);
        assert_eq!(cmd.display_line(), "dotnet publish -c Release");
        assert_eq!(BuildCommand::new("make").display_line(), "make");
    }

    #[test]
    fn test_process_result_success() {
        let ok = ProcessResult {
            status: Some(0),
            stdout: String::new(),
            stderr: String::new(),
        };
        let killed = ProcessResult {
            status: None,
            ..ok.clone()
        };
        assert!(ok.success());
        assert!(!killed.success());
    }

    #[test]
    fn test_state_machine_is_forward_only() {
        use DeployState::*;
        let all = [
            Start,
            Publishing,
            Published,
            PublishFailed,
            Relocating,
            RelocateFailed,
            Relocated,
            SourceMissing,
        ];

        for state in all.iter().copied().filter(|s| s.is_terminal()) {
            assert!(all.iter().all(|next| !state.can_transition_to(*next)));
        }
        assert!(Start.can_transition_to(Publishing));
        assert!(!Published.can_transition_to(Publishing));
        assert!(!PublishFailed.can_transition_to(Relocating));
    }
}
