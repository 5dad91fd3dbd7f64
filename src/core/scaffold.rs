use crate::core::templates::{
    self, APP_JS_TEMPLATE, ENV_TEMPLATE, PACKAGE_JSON_PATH, SCAFFOLD_DIRECTORIES, SCAFFOLD_FILES,
    SOURCE_TEMPLATES,
};
use crate::domain::model::{ScaffoldEvent, ScaffoldReport};
use crate::domain::ports::Filesystem;
use crate::utils::error::Result;
use std::path::{Path, PathBuf};

pub struct Scaffolder<F: Filesystem> {
    fs: F,
}

impl<F: Filesystem> Scaffolder<F> {
    pub fn new(fs: F) -> Self {
        Self { fs }
    }

    pub fn generate(&self, root: &Path) -> Result<ScaffoldReport> {
        self.generate_with(root, |_| {})
    }

    /// Runs the whole sequence, reporting each step as it completes.
    ///
    /// Nothing is rolled back on failure: steps that already ran stay on disk
    /// and have already been reported.
    pub fn generate_with<E>(&self, root: &Path, mut on_event: E) -> Result<ScaffoldReport>
    where
        E: FnMut(&ScaffoldEvent),
    {
        tracing::info!("Scaffolding CRUD API into {}", root.display());
        let mut report = ScaffoldReport::default();

        for dir in SCAFFOLD_DIRECTORIES {
            let full_path = root.join(dir);
            if self.fs.exists(&full_path) {
                tracing::debug!("Directory already present: {}", full_path.display());
                continue;
            }
            self.fs.create_dir(&full_path)?;
            let relative = PathBuf::from(dir);
            on_event(&ScaffoldEvent::DirectoryCreated(relative.clone()));
            report.created_dirs.push(relative);
        }

        for file in SCAFFOLD_FILES {
            let full_path = root.join(file);
            if self.fs.exists(&full_path) {
                tracing::debug!("File already present: {}", full_path.display());
                continue;
            }
            self.fs.create_empty_file(&full_path)?;
            let relative = PathBuf::from(file);
            on_event(&ScaffoldEvent::FileCreated(relative.clone()));
            report.created_files.push(relative);
        }

        self.write(root, APP_JS_TEMPLATE.relative_path, APP_JS_TEMPLATE.contents, &mut report)?;
        on_event(&ScaffoldEvent::ContentWritten(APP_JS_TEMPLATE.label));

        self.write(root, ENV_TEMPLATE.relative_path, ENV_TEMPLATE.contents, &mut report)?;
        on_event(&ScaffoldEvent::ContentWritten(ENV_TEMPLATE.label));

        let package_json = templates::render_package_json()?;
        self.write(root, PACKAGE_JSON_PATH, &package_json, &mut report)?;
        on_event(&ScaffoldEvent::ContentWritten(PACKAGE_JSON_PATH));

        for template in SOURCE_TEMPLATES {
            self.write(root, template.relative_path, template.contents, &mut report)?;
            on_event(&ScaffoldEvent::ContentWritten(template.label));
        }

        on_event(&ScaffoldEvent::Completed);
        tracing::info!(
            "Scaffold complete: {} directories created, {} files created, {} files written",
            report.created_dirs.len(),
            report.created_files.len(),
            report.written_files.len()
        );

        Ok(report)
    }

    fn write(
        &self,
        root: &Path,
        relative_path: &str,
        contents: &str,
        report: &mut ScaffoldReport,
    ) -> Result<()> {
        let full_path = root.join(relative_path);
        tracing::debug!("Writing {} bytes to {}", contents.len(), full_path.display());
        self.fs.write_file(&full_path, contents.as_bytes())?;
        report.written_files.push(PathBuf::from(relative_path));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::DryRunFilesystem;
    use crate::utils::error::ScaffoldError;
    use std::cell::RefCell;
    use std::collections::HashSet;
    use std::io;

    /// Fails the first write to `fail_on`, records everything else.
    struct FailingFilesystem {
        fail_on: PathBuf,
        writes: RefCell<Vec<PathBuf>>,
    }

    impl Filesystem for FailingFilesystem {
        fn exists(&self, _path: &Path) -> bool {
            false
        }

        fn create_dir(&self, _path: &Path) -> Result<()> {
            Ok(())
        }

        fn create_empty_file(&self, _path: &Path) -> Result<()> {
            Ok(())
        }

        fn write_file(&self, path: &Path, _contents: &[u8]) -> Result<()> {
            if path == self.fail_on {
                return Err(ScaffoldError::fs(path, io::Error::other("disk full")));
            }
            self.writes.borrow_mut().push(path.to_path_buf());
            Ok(())
        }
    }

    #[test]
    fn test_events_follow_write_order() {
        let fs = DryRunFilesystem::new();
        let mut lines = Vec::new();
        let root = Path::new("/nonexistent-root-for-dry-run");
        Scaffolder::new(&fs)
            .generate_with(root, |event| lines.push(event.to_string()))
            .unwrap();

        let expected_tail = [
            "Added content to app.js",
            "Added content to .env",
            "Added content to package.json",
            "Added content to user model",
            "Added content to user controller",
            "Added content to user routes",
            "\nProject structure with full CRUD API created successfully.",
        ];
        assert_eq!(lines.len(), 5 + 3 + expected_tail.len());
        assert_eq!(lines[0], "Created folder: controllers");
        assert_eq!(lines[5], "Created file: app.js");
        assert_eq!(&lines[8..], &expected_tail);
    }

    #[test]
    fn test_failure_stops_sequence() {
        let root = Path::new("/project");
        let fs = FailingFilesystem {
            fail_on: root.join("package.json"),
            writes: RefCell::new(Vec::new()),
        };
        let mut completed = false;
        let err = Scaffolder::new(&fs)
            .generate_with(root, |event| {
                if *event == ScaffoldEvent::Completed {
                    completed = true;
                }
            })
            .unwrap_err();

        assert!(matches!(err, ScaffoldError::FileSystemError { .. }));
        assert!(!completed);
        let written: HashSet<PathBuf> = fs.writes.borrow().iter().cloned().collect();
        assert!(written.contains(&root.join("app.js")));
        assert!(written.contains(&root.join(".env")));
        assert!(!written.contains(&root.join("models/user.js")));
    }
}
