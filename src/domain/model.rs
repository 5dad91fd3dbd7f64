use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// A file written verbatim by the scaffolder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Template {
    pub relative_path: &'static str,
    /// Name shown in the "Added content to ..." progress line.
    pub label: &'static str,
    pub contents: &'static str,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PackageManifest {
    pub name: String,
    pub version: String,
    pub description: String,
    pub main: String,
    pub scripts: PackageScripts,
    pub dependencies: PackageDependencies,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PackageScripts {
    pub start: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PackageDependencies {
    pub express: String,
    pub mongoose: String,
    #[serde(rename = "bodyParser")]
    pub body_parser: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScaffoldEvent {
    DirectoryCreated(PathBuf),
    FileCreated(PathBuf),
    ContentWritten(&'static str),
    Completed,
}

impl fmt::Display for ScaffoldEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DirectoryCreated(path) => write!(f, "Created folder: {}", path.display()),
            Self::FileCreated(path) => write!(f, "Created file: {}", path.display()),
            Self::ContentWritten(label) => write!(f, "Added content to {}", label),
            Self::Completed => write!(
                f,
                "\nProject structure with full CRUD API created successfully."
            ),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScaffoldReport {
    pub created_dirs: Vec<PathBuf>,
    pub created_files: Vec<PathBuf>,
    pub written_files: Vec<PathBuf>,
}
