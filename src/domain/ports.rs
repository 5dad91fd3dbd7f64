use crate::utils::error::Result;
use std::path::Path;

pub trait Filesystem {
    fn exists(&self, path: &Path) -> bool;
    /// Non-recursive; the parent must already exist.
    fn create_dir(&self, path: &Path) -> Result<()>;
    fn create_empty_file(&self, path: &Path) -> Result<()>;
    /// Replaces any previous contents.
    fn write_file(&self, path: &Path, contents: &[u8]) -> Result<()>;
}

impl<F: Filesystem + ?Sized> Filesystem for &F {
    fn exists(&self, path: &Path) -> bool {
        (**self).exists(path)
    }

    fn create_dir(&self, path: &Path) -> Result<()> {
        (**self).create_dir(path)
    }

    fn create_empty_file(&self, path: &Path) -> Result<()> {
        (**self).create_empty_file(path)
    }

    fn write_file(&self, path: &Path, contents: &[u8]) -> Result<()> {
        (**self).write_file(path, contents)
    }
}
