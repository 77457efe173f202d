use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DeployError {
    #[error("Build command `{command}` failed with {}", describe_status(.status))]
    BuildFailure {
        command: String,
        status: Option<i32>,
        stderr: String,
    },

    #[error("Could not launch build command `{command}`: {source}")]
    CommandLaunch {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to move {} to {}: {source}", .source_path.display(), .destination.display())]
    MoveFailure {
        source_path: PathBuf,
        destination: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

fn describe_status(status: &Option<i32>) -> String {
    match status {
        Some(code) => format!("exit code {}", code),
        None => "no exit code (terminated by signal)".to_string(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Build,
    Relocation,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    High,
    Critical,
}

impl DeployError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            DeployError::BuildFailure { .. } | DeployError::CommandLaunch { .. } => {
                ErrorCategory::Build
            }
            DeployError::MoveFailure { .. } => ErrorCategory::Relocation,
            DeployError::ConfigError { .. }
            | DeployError::ConfigValidationError { .. }
            | DeployError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            DeployError::IoError(_) | DeployError::SerializationError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Build | ErrorCategory::Relocation => ErrorSeverity::High,
            ErrorCategory::Configuration | ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// Process exit code chosen by the top-level handler.
    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Build => 1,
            ErrorCategory::Relocation => 2,
            ErrorCategory::Configuration => 3,
            ErrorCategory::System => 4,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            DeployError::BuildFailure { command, stderr, .. } => {
                let stderr = stderr.trim();
                if stderr.is_empty() {
                    format!("Error running {}: {}", command, self)
                } else {
                    format!("Error running {}: {}", command, stderr)
                }
            }
            DeployError::CommandLaunch { command, source } => {
                format!("Error running {}: {}", command, source)
            }
            DeployError::MoveFailure { source, .. } => format!("Error moving file: {}", source),
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            DeployError::BuildFailure { .. } => {
                "Fix the build errors reported above and run again"
            }
            DeployError::CommandLaunch { .. } => {
                "Make sure the build tool is installed and on PATH, or set --command"
            }
            DeployError::MoveFailure { .. } => {
                "Check that the destination directory exists and is writable"
            }
            DeployError::ConfigError { .. }
            | DeployError::ConfigValidationError { .. }
            | DeployError::InvalidConfigValueError { .. } => {
                "Review the configuration file and command-line flags"
            }
            DeployError::IoError(_) => "Check file permissions and available disk space",
            DeployError::SerializationError(_) => "Check that the report path is writable",
        }
    }
}

pub type Result<T> = std::result::Result<T, DeployError>;
