#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::utils::error::Result;
use crate::utils::validation::{validate_existing_dir, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[cfg(feature = "cli")]
pub use cli::CliConfig;
pub use toml_config::TomlConfig;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

/// Effective settings after merging the config file with command-line flags.
#[derive(Debug, Clone, PartialEq)]
pub struct ScaffoldSettings {
    pub root: String,
    pub dry_run: bool,
    pub verbose: bool,
    pub log_format: LogFormat,
}

impl Default for ScaffoldSettings {
    fn default() -> Self {
        Self {
            root: ".".to_string(),
            dry_run: false,
            verbose: false,
            log_format: LogFormat::Compact,
        }
    }
}

impl ScaffoldSettings {
    pub fn root_path(&self) -> &Path {
        Path::new(&self.root)
    }
}

impl Validate for ScaffoldSettings {
    fn validate(&self) -> Result<()> {
        validate_existing_dir("root", &self.root)
    }
}
