use crate::config::{LogFormat, ScaffoldSettings, TomlConfig};
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::Parser;

#[derive(Debug, Clone, Default, Parser)]
#[command(name = "restcrud")]
#[command(about = "Scaffold an Express + MongoDB CRUD API for a User resource")]
pub struct CliConfig {
    /// Directory to scaffold into (must already exist) [default: .]
    #[arg(long)]
    pub dir: Option<String>,

    /// Path to an optional TOML settings file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Show what would be written without touching the disk
    #[arg(long)]
    pub dry_run: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Emit log lines as JSON
    #[arg(long)]
    pub json_logs: bool,
}

impl CliConfig {
    /// Merges flags over the settings file, if one was given.
    pub fn resolve(&self) -> Result<ScaffoldSettings> {
        let file = match &self.config {
            Some(path) => {
                let file = TomlConfig::from_file(path)?;
                file.validate()?;
                file
            }
            None => TomlConfig::default(),
        };

        let defaults = ScaffoldSettings::default();
        let log_format = if self.json_logs {
            LogFormat::Json
        } else {
            file.logging.format.unwrap_or(defaults.log_format)
        };

        Ok(ScaffoldSettings {
            root: self
                .dir
                .clone()
                .or(file.scaffold.root)
                .unwrap_or(defaults.root),
            dry_run: self.dry_run || file.scaffold.dry_run.unwrap_or(false),
            verbose: self.verbose || file.logging.verbose.unwrap_or(false),
            log_format,
        })
    }
}
