#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::{BuildCommand, ConfigProvider};
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use std::path::Path;
use toml_config::TomlConfig;

pub const DEFAULT_COMMAND: &str = "dotnet";
pub const DEFAULT_ARGS: &[&str] = &["publish"];
pub const DEFAULT_SOURCE_PATH: &str =
    r"A:\Projects\Apps\Raven\src\bin\Release\net8.0\win-x64\publish\raven.exe";
pub const DEFAULT_DESTINATION_PATH: &str = r"A:\Scripts\Raven.exe";

/// Fully resolved settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployConfig {
    pub command: String,
    pub args: Vec<String>,
    pub working_dir: Option<String>,
    pub source: String,
    pub destination: String,
}

impl Default for DeployConfig {
    fn default() -> Self {
        Self {
            command: DEFAULT_COMMAND.to_string(),
            args: DEFAULT_ARGS.iter().map(|s| s.to_string()).collect(),
            working_dir: None,
            source: DEFAULT_SOURCE_PATH.to_string(),
            destination: DEFAULT_DESTINATION_PATH.to_string(),
        }
    }
}

impl DeployConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut config = Self::default();
        config.merge_toml(TomlConfig::from_file(path)?);
        Ok(config)
    }

    /// Overlays every value the file sets.
    pub fn merge_toml(&mut self, file: TomlConfig) {
        if let Some(command) = file.publish.command {
            self.command = command;
        }
        if let Some(args) = file.publish.args {
            self.args = args;
        }
        if let Some(dir) = file.publish.working_dir {
            self.working_dir = Some(dir);
        }
        if let Some(source) = file.relocate.source {
            self.source = source;
        }
        if let Some(destination) = file.relocate.destination {
            self.destination = destination;
        }
    }
}

impl ConfigProvider for DeployConfig {
    fn build_command(&self) -> BuildCommand {
        let command = BuildCommand::new(self.command.clone()).args(self.args.iter().cloned());
        match &self.working_dir {
            Some(dir) => command.working_dir(dir),
            None => command,
        }
    }

    fn source_path(&self) -> &Path {
        Path::new(&self.source)
    }

    fn destination_path(&self) -> &Path {
        Path::new(&self.destination)
    }
}

impl Validate for DeployConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_non_empty_string("publish.command", &self.command)?;
        validation::validate_path("relocate.source", &self.source)?;
        validation::validate_path("relocate.destination", &self.destination)?;
        validation::validate_distinct_paths("relocate.destination", &self.source, &self.destination)?;

        if let Some(dir) = &self.working_dir {
            validation::validate_existing_dir("publish.working_dir", dir)?;
        }

        Ok(())
    }
}
