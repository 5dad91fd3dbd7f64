pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::{LogFormat, ScaffoldSettings, TomlConfig};

pub use adapters::{DryRunFilesystem, LocalFilesystem};
pub use crate::core::scaffold::Scaffolder;
pub use domain::model::{ScaffoldEvent, ScaffoldReport};
pub use utils::error::{Result, ScaffoldError};
