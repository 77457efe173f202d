use crate::core::publisher::Publisher;
use crate::core::relocator::Relocator;
use crate::core::{
    CommandRunner, ConfigProvider, DeployPlan, DeployReport, DeployState, FileSystem,
    RelocateOutcome,
};
use crate::utils::error::Result;
use chrono::Utc;
use std::time::Instant;

/// Runs publish then relocate, strictly in that order.
pub struct DeployEngine<R: CommandRunner, F: FileSystem, C: ConfigProvider> {
    publisher: Publisher<R>,
    relocator: Relocator<F>,
    config: C,
}

fn advance(state: &mut DeployState, next: DeployState) {
    debug_assert!(
        state.can_transition_to(next),
        "illegal transition {:?} -> {:?}",
        state,
        next
    );
    tracing::debug!("{:?} -> {:?}", state, next);
    if next.is_terminal() {
        tracing::info!("Deploy reached {:?}", next);
    }
    *state = next;
}

fn elapsed_ms(start: Instant) -> u64 {
    u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX)
}

impl<R: CommandRunner, F: FileSystem, C: ConfigProvider> DeployEngine<R, F, C> {
    pub fn new(runner: R, fs: F, config: C) -> Self {
        Self {
            publisher: Publisher::new(runner),
            relocator: Relocator::new(fs),
            config,
        }
    }

    pub fn plan(&self) -> DeployPlan {
        DeployPlan {
            command: self.config.build_command(),
            source: self.config.source_path().to_path_buf(),
            destination: self.config.destination_path().to_path_buf(),
        }
    }

    pub async fn run(&self) -> Result<DeployReport> {
        let plan = self.plan();
        let started_at = Utc::now();
        let mut state = DeployState::Start;

        tracing::info!("Starting deploy: {}", plan.command.display_line());

        advance(&mut state, DeployState::Publishing);
        let publish_start = Instant::now();
        let result = match self.publisher.publish(&plan.command).await {
            Ok(result) => result,
            Err(e) => {
                advance(&mut state, DeployState::PublishFailed);
                return Err(e);
            }
        };
        let publish_ms = elapsed_ms(publish_start);
        advance(&mut state, DeployState::Published);
        tracing::info!("Publish finished in {}ms", publish_ms);

        advance(&mut state, DeployState::Relocating);
        let relocate_start = Instant::now();
        let outcome = match self
            .relocator
            .relocate(&plan.source, &plan.destination)
            .await
        {
            Ok(outcome) => outcome,
            Err(e) => {
                advance(&mut state, DeployState::RelocateFailed);
                return Err(e);
            }
        };
        let relocate_ms = elapsed_ms(relocate_start);
        advance(&mut state, outcome.state());

        let (moved, missing_source) = match outcome {
            RelocateOutcome::Relocated(moved) => (Some(moved), None),
            RelocateOutcome::SourceMissing { source } => (None, Some(source)),
        };

        Ok(DeployReport {
            final_state: state,
            command: plan.command.display_line(),
            exit_code: result.status,
            started_at,
            finished_at: Utc::now(),
            publish_ms,
            relocate_ms,
            moved,
            missing_source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{BuildCommand, MoveStrategy, Moved, ProcessResult};
    use crate::utils::error::DeployError;
    use async_trait::async_trait;
    use std::path::{Path, PathBuf};
    use std::sync::{Arc, Mutex};

    type CallLog = Arc<Mutex<Vec<String>>>;

    struct MockRunner {
        status: Option<i32>,
        log: CallLog,
    }

    #[async_trait]
    impl CommandRunner for MockRunner {
        async fn run(&self, command: &BuildCommand) -> Result<ProcessResult> {
            self.log
                .lock()
                .unwrap()
                .push(format!("run {}", command.display_line()));
            Ok(ProcessResult {
                status: self.status,
                stdout: "ok".to_string(),
                stderr: "boom".to_string(),
            })
        }
    }

    struct MockFileSystem {
        source_exists: bool,
        log: CallLog,
    }

    #[async_trait]
    impl FileSystem for MockFileSystem {
        async fn exists(&self, path: &Path) -> bool {
            self.log
                .lock()
                .unwrap()
                .push(format!("exists {}", path.display()));
            self.source_exists
        }

        async fn move_file(&self, source: &Path, destination: &Path) -> Result<Moved> {
            self.log.lock().unwrap().push(format!(
                "move {} {}",
                source.display(),
                destination.display()
            ));
            Ok(Moved {
                source: source.to_path_buf(),
                destination: destination.to_path_buf(),
                bytes: 42,
                strategy: MoveStrategy::Rename,
            })
        }
    }

    struct MockConfig {
        source: PathBuf,
        destination: PathBuf,
    }

    impl ConfigProvider for MockConfig {
        fn build_command(&self) -> BuildCommand {
            BuildCommand::new("dotnet").args(["publish"])
        }

        fn source_path(&self) -> &Path {
            &self.source
        }

        fn destination_path(&self) -> &Path {
            &self.destination
        }
    }

    fn engine(
        status: Option<i32>,
        source_exists: bool,
    ) -> (DeployEngine<MockRunner, MockFileSystem, MockConfig>, CallLog) {
        let log: CallLog = Arc::new(Mutex::new(Vec::new()));
        let engine = DeployEngine::new(
            MockRunner {
                status,
                log: log.clone(),
            },
            MockFileSystem {
                source_exists,
                log: log.clone(),
            },
            MockConfig {
                source: PathBuf::from("/tmp/app/out/bin"),
                destination: PathBuf::from("/opt/deploy/app"),
            },
        );
        (engine, log)
    }

    #[tokio::test]
    async fn test_successful_build_relocates_once() {
        let (engine, log) = engine(Some(0), true);

        let report = engine.run().await.unwrap();

        assert_eq!(report.final_state, DeployState::Relocated);
        assert!(report.final_state.is_terminal());
        assert_eq!(report.exit_code, Some(0));
        assert_eq!(report.moved.as_ref().map(|m| m.bytes), Some(42));
        assert_eq!(
            *log.lock().unwrap(),
            vec![
                "run dotnet publish".to_string(),
                "exists /tmp/app/out/bin".to_string(),
                "move /tmp/app/out/bin /opt/deploy/app".to_string(),
            ]
        );
    }

    #[tokio::test]
    async fn test_failed_build_never_relocates() {
        let (engine, log) = engine(Some(1), true);

        let err = engine.run().await.unwrap_err();

        assert!(matches!(err, DeployError::BuildFailure { .. }));
        assert_eq!(err.exit_code(), 1);
        assert_eq!(*log.lock().unwrap(), vec!["run dotnet publish".to_string()]);
    }

    #[tokio::test]
    async fn test_missing_source_completes_normally() {
        let (engine, log) = engine(Some(0), false);

        let report = engine.run().await.unwrap();

        assert_eq!(report.final_state, DeployState::SourceMissing);
        assert!(report.moved.is_none());
        assert_eq!(
            report.missing_source,
            Some(PathBuf::from("/tmp/app/out/bin"))
        );
        assert!(!log.lock().unwrap().iter().any(|entry| entry.starts_with("move")));
    }

    #[test]
    fn test_plan_reflects_config() {
        let (engine, log) = engine(Some(0), true);

        let plan = engine.plan();

        assert_eq!(plan.command.display_line(), "dotnet publish");
        assert_eq!(plan.source, PathBuf::from("/tmp/app/out/bin"));
        assert_eq!(plan.destination, PathBuf::from("/opt/deploy/app"));
        assert!(log.lock().unwrap().is_empty());
    }
}
