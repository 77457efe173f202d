pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use adapters::{LocalFileSystem, SystemCommandRunner};
pub use config::DeployConfig;
pub use core::{engine::DeployEngine, publisher::Publisher, relocator::Relocator};
pub use utils::error::{DeployError, Result};
