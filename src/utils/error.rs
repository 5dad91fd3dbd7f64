use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScaffoldError {
    #[error("File system error at {path:?}: {source}")]
    FileSystemError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    FileSystem,
    Serialization,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    High,
    Critical,
}

impl ScaffoldError {
    pub fn fs(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileSystemError {
            path: path.into(),
            source,
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::FileSystemError { .. } => ErrorCategory::FileSystem,
            Self::SerializationError(_) => ErrorCategory::Serialization,
            Self::ConfigError { .. } | Self::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::FileSystemError { .. } => ErrorSeverity::Critical,
            Self::SerializationError(_) => ErrorSeverity::Critical,
            Self::ConfigError { .. } | Self::InvalidConfigValueError { .. } => ErrorSeverity::High,
        }
    }

    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            Self::FileSystemError { source, .. } => match source.kind() {
                std::io::ErrorKind::PermissionDenied => {
                    "Check write permissions on the target directory".to_string()
                }
                std::io::ErrorKind::NotFound => {
                    "Make sure the target directory exists before scaffolding".to_string()
                }
                _ => "Check free disk space and that the target path is writable".to_string(),
            },
            Self::SerializationError(_) => {
                "This is an internal error, please report it".to_string()
            }
            Self::ConfigError { .. } => {
                "Make sure the config file exists and is valid TOML".to_string()
            }
            Self::InvalidConfigValueError { field, .. } => {
                format!("Fix the value of '{}' and run again", field)
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::FileSystemError { path, source } => {
                format!("File system operation failed on {}: {}", path.display(), source)
            }
            Self::SerializationError(e) => format!("Could not render package.json: {}", e),
            Self::ConfigError { message } => format!("Configuration problem: {}", message),
            Self::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid '{}': {}", field, reason)
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ScaffoldError>;
