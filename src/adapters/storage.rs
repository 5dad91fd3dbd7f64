use crate::domain::ports::Filesystem;
use crate::utils::error::{Result, ScaffoldError};
use std::cell::RefCell;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    pub fn new() -> Self {
        Self
    }
}

impl Filesystem for LocalFilesystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn create_dir(&self, path: &Path) -> Result<()> {
        tracing::debug!("mkdir {}", path.display());
        fs::create_dir(path).map_err(|e| ScaffoldError::fs(path, e))
    }

    fn create_empty_file(&self, path: &Path) -> Result<()> {
        tracing::debug!("touch {}", path.display());
        fs::write(path, b"").map_err(|e| ScaffoldError::fs(path, e))
    }

    fn write_file(&self, path: &Path, contents: &[u8]) -> Result<()> {
        fs::write(path, contents).map_err(|e| ScaffoldError::fs(path, e))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlannedOperation {
    CreateDir(PathBuf),
    CreateFile(PathBuf),
    Write { path: PathBuf, bytes: usize },
}

/// Reads existence from disk but keeps every mutation in memory.
#[derive(Debug, Default)]
pub struct DryRunFilesystem {
    planned: RefCell<Vec<PlannedOperation>>,
    created: RefCell<HashSet<PathBuf>>,
}

impl DryRunFilesystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn planned(&self) -> Vec<PlannedOperation> {
        self.planned.borrow().clone()
    }
}

impl Filesystem for DryRunFilesystem {
    fn exists(&self, path: &Path) -> bool {
        self.created.borrow().contains(path) || path.exists()
    }

    fn create_dir(&self, path: &Path) -> Result<()> {
        tracing::info!("[dry-run] would create directory {}", path.display());
        self.created.borrow_mut().insert(path.to_path_buf());
        self.planned
            .borrow_mut()
            .push(PlannedOperation::CreateDir(path.to_path_buf()));
        Ok(())
    }

    fn create_empty_file(&self, path: &Path) -> Result<()> {
        tracing::info!("[dry-run] would create file {}", path.display());
        self.created.borrow_mut().insert(path.to_path_buf());
        self.planned
            .borrow_mut()
            .push(PlannedOperation::CreateFile(path.to_path_buf()));
        Ok(())
    }

    fn write_file(&self, path: &Path, contents: &[u8]) -> Result<()> {
        tracing::info!(
            "[dry-run] would write {} bytes to {}",
            contents.len(),
            path.display()
        );
        self.planned.borrow_mut().push(PlannedOperation::Write {
            path: path.to_path_buf(),
            bytes: contents.len(),
        });
        Ok(())
    }
}
