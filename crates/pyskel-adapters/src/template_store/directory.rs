//! Templates read from a user directory.
//!
//! Lets a user replace the built-in bodies without rebuilding. The directory
//! must hold every file the layout asks for; there is no fallback to the
//! built-ins for a missing one.
//!
//! ```text
//! my-templates/
//! ├── setup.py.tmpl
//! ├── README.md.tmpl
//! ├── tests_init.py.tmpl
//! ├── test_file.py.tmpl
//! ├── Makefile.tmpl
//! └── requirements_dev.txt
//! ```

use std::{fs, io, path::PathBuf};

use tracing::{debug, instrument};
use walkdir::WalkDir;

use pyskel_core::{
    application::{ApplicationError, ports::TemplateStore},
    domain::Template,
    error::PyskelResult,
};

/// Template store backed by a flat directory of files.
#[derive(Debug, Clone)]
pub struct DirectoryTemplates {
    dir: PathBuf,
}

impl DirectoryTemplates {
    /// The directory does not need to exist yet; loads fail if it is missing.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl TemplateStore for DirectoryTemplates {
    #[instrument(skip(self), fields(dir = %self.dir.display()))]
    fn load(&self, name: &str) -> PyskelResult<Template> {
        let path = self.dir.join(name);
        let body = fs::read_to_string(&path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => ApplicationError::TemplateNotFound {
                name: name.to_string(),
                reason: format!("no file at {}", path.display()),
            },
            _ => ApplicationError::Filesystem {
                path: path.clone(),
                reason: format!("Failed to read template: {e}"),
            },
        })?;

        debug!(bytes = body.len(), "loaded template");
        Ok(Template::new(name, body))
    }

    fn names(&self) -> PyskelResult<Vec<String>> {
        let mut names = Vec::new();

        for entry in WalkDir::new(&self.dir).min_depth(1).max_depth(1) {
            let entry = entry.map_err(|e| ApplicationError::Filesystem {
                path: self.dir.clone(),
                reason: format!("Failed to list templates: {e}"),
            })?;

            if entry.file_type().is_file() {
                names.push(entry.file_name().to_string_lossy().into_owned());
            }
        }

        names.sort();
        Ok(names)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pyskel_core::error::PyskelError;
    use tempfile::TempDir;

    fn dir_with(files: &[(&str, &str)]) -> TempDir {
        let temp = TempDir::new().unwrap();
        for (name, body) in files {
            fs::write(temp.path().join(name), body).unwrap();
        }
        temp
    }

    #[test]
    fn loads_file_by_name() {
        let temp = dir_with(&[("README.md.tmpl", "# $name\n")]);
        let store = DirectoryTemplates::new(temp.path());

        let template = store.load("README.md.tmpl").unwrap();
        assert_eq!(template.name(), "README.md.tmpl");
        assert_eq!(template.source(), "# $name\n");
    }

    #[test]
    fn missing_file_is_template_not_found() {
        let temp = dir_with(&[]);
        let err = DirectoryTemplates::new(temp.path())
            .load("Makefile.tmpl")
            .unwrap_err();

        assert!(matches!(
            err,
            PyskelError::Application(ApplicationError::TemplateNotFound { ref name, .. })
                if name == "Makefile.tmpl"
        ));
    }

    #[test]
    fn names_lists_files_only_sorted() {
        let temp = dir_with(&[("b.tmpl", ""), ("a.tmpl", "")]);
        fs::create_dir(temp.path().join("nested")).unwrap();
        fs::write(temp.path().join("nested/c.tmpl"), "").unwrap();

        let names = DirectoryTemplates::new(temp.path()).names().unwrap();
        assert_eq!(names, vec!["a.tmpl", "b.tmpl"]);
    }

    #[test]
    fn names_of_missing_directory_fails() {
        let store = DirectoryTemplates::new("/absolutely/does/not/exist");
        assert!(store.names().is_err());
    }
}
