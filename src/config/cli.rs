use crate::config::DeployConfig;
use clap::Parser;

#[derive(Debug, Clone, Default, Parser)]
#[command(name = "publish-relocate")]
#[command(about = "Run a build tool's publish step and move the artifact into place")]
pub struct CliConfig {
    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Build program to run
    #[arg(long)]
    pub command: Option<String>,

    /// Comma-separated arguments for the build program
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
    pub args: Option<Vec<String>>,

    /// Directory the build runs in
    #[arg(long)]
    pub working_dir: Option<String>,

    /// Artifact produced by the build
    #[arg(long)]
    pub source: Option<String>,

    /// Where the artifact is moved to
    #[arg(long)]
    pub destination: Option<String>,

    /// Show what would run without executing anything
    #[arg(long)]
    pub dry_run: bool,

    /// Write a JSON run report to this path after a successful run
    #[arg(long)]
    pub report: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit log lines as JSON")]
    pub json_logs: bool,
}

impl CliConfig {
    /// Flags win over anything loaded from the file.
    pub fn apply_to(&self, config: &mut DeployConfig) {
        if let Some(command) = &self.command {
            config.command = command.clone();
        }
        if let Some(args) = &self.args {
            config.args = args.iter().filter(|a| !a.is_empty()).cloned().collect();
        }
        if let Some(dir) = &self.working_dir {
            config.working_dir = Some(dir.clone());
        }
        if let Some(source) = &self.source {
            config.source = source.clone();
        }
        if let Some(destination) = &self.destination {
            config.destination = destination.clone();
        }
    }

    pub fn resolve(&self) -> crate::Result<DeployConfig> {
        let mut config = match &self.config {
            Some(path) => DeployConfig::from_file(path)?,
            None => DeployConfig::default(),
        };
        self.apply_to(&mut config);
        Ok(config)
    }
}
