pub mod engine;
pub mod publisher;
pub mod relocator;

pub use crate::domain::model::{
    BuildCommand, DeployPlan, DeployReport, DeployState, MoveStrategy, Moved, ProcessResult,
    RelocateOutcome,
};
pub use crate::domain::ports::{CommandRunner, ConfigProvider, FileSystem};
pub use crate::utils::error::Result;
