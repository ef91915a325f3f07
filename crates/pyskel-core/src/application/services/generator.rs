//! Project Generator - main application orchestrator.
//!
//! This service coordinates the entire generation workflow:
//! 1. Plan the layout (validates the project and file names)
//! 2. Resolve the target directory (reject, or remove in force mode)
//! 3. Walk the layout in order: render or fetch each file, then write it
//!
//! There is no rollback. A fatal error leaves whatever was written so far.
//! Only remote artifacts (LICENSE, .gitignore) degrade: a failed fetch is
//! logged, recorded in the report, and the run continues.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        ports::{Filesystem, TemplateStore, TextFetcher},
    },
    domain::{
        DomainValidator, FileContent, LayoutEntry, ProjectLayout, ProjectRequest, VariableSet,
    },
    error::PyskelResult,
};

/// A remote artifact that was not written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedArtifact {
    pub path: PathBuf,
    pub reason: String,
}

/// What a generation run did, in the order it did it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GenerationReport {
    pub root: PathBuf,
    pub directories: Vec<PathBuf>,
    /// Relative paths of written files. A duplicated logical name appears twice.
    pub files: Vec<PathBuf>,
    pub skipped: Vec<SkippedArtifact>,
}

impl GenerationReport {
    fn new(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
            ..Self::default()
        }
    }

    pub fn is_complete(&self) -> bool {
        self.skipped.is_empty()
    }
}

/// Main generation service.
pub struct ProjectGenerator {
    store: Box<dyn TemplateStore>,
    fetcher: Box<dyn TextFetcher>,
    filesystem: Box<dyn Filesystem>,
}

impl ProjectGenerator {
    /// Create a new generator with the given adapters.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let generator = ProjectGenerator::new(
    ///     Box::new(EmbeddedTemplates::new()),
    ///     Box::new(HttpFetcher::new()?),
    ///     Box::new(LocalFilesystem::new()),
    /// );
    /// ```
    pub fn new(
        store: Box<dyn TemplateStore>,
        fetcher: Box<dyn TextFetcher>,
        filesystem: Box<dyn Filesystem>,
    ) -> Self {
        Self {
            store,
            fetcher,
            filesystem,
        }
    }

    /// Plan the layout without touching the filesystem.
    pub fn plan(&self, request: &ProjectRequest) -> PyskelResult<ProjectLayout> {
        DomainValidator::validate_request(request)?;
        Ok(ProjectLayout::plan(request)?)
    }

    /// Generate the project skeleton described by `request`.
    ///
    /// In force mode an existing directory is removed *before* it is
    /// recreated; if creation then fails the old content is already gone.
    #[instrument(
        skip_all,
        fields(
            project = %request.name(),
            root = %request.root().display(),
            force = request.force()
        )
    )]
    pub fn generate(&self, request: &ProjectRequest) -> PyskelResult<GenerationReport> {
        let layout = self.plan(request)?;
        debug!(entries = layout.entry_count(), "Layout planned");

        let root = layout.root();
        info!("Creating directory: {}", root.display());
        self.prepare_root(root, request.force())?;

        let mut report = GenerationReport::new(root);

        for entry in layout.entries() {
            match entry {
                LayoutEntry::Directory(dir) => {
                    info!("Creating {} folder", dir.display());
                    self.filesystem.create_dir_all(&root.join(dir))?;
                    report.directories.push(dir.clone());
                }
                LayoutEntry::File(file) => {
                    info!("Creating {}", file.path.display());
                    match self.resolve(&file.content, request.overrides()) {
                        Ok(text) => {
                            self.filesystem.write_file(&root.join(&file.path), &text)?;
                            report.files.push(file.path.clone());
                        }
                        Err(e) if file.content.is_remote() && e.is_recoverable() => {
                            warn!(
                                path = %file.path.display(),
                                error = %e,
                                "Skipping downloaded file"
                            );
                            report.skipped.push(SkippedArtifact {
                                path: file.path.clone(),
                                reason: e.to_string(),
                            });
                        }
                        Err(e) => return Err(e),
                    }
                }
            }
        }

        info!(
            files = report.files.len(),
            skipped = report.skipped.len(),
            "Project generated"
        );
        Ok(report)
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    fn prepare_root(&self, root: &Path, force: bool) -> PyskelResult<()> {
        if self.filesystem.exists(root) {
            if !force {
                return Err(ApplicationError::DirectoryExists {
                    path: root.to_path_buf(),
                }
                .into());
            }
            warn!(path = %root.display(), "Removing existing directory");
            self.filesystem.remove_dir_all(root)?;
        }

        self.filesystem.create_dir_all(root)
    }

    fn resolve(&self, content: &FileContent, overrides: &VariableSet) -> PyskelResult<String> {
        match content {
            FileContent::Empty => Ok(String::new()),
            FileContent::Literal(text) => Ok((*text).to_string()),
            FileContent::Template { template, defaults } => {
                let template = self.store.load(template)?;
                let variables = VariableSet::build(defaults, overrides);
                Ok(template.render(&variables)?)
            }
            FileContent::Copy { template } => Ok(self.store.load(template)?.source().to_string()),
            FileContent::Remote { url } => self.fetcher.fetch(url),
        }
    }
}

#[cfg(test)]
mod tests {
    use mockall::Sequence;

    use super::*;
    use crate::{
        application::ports::{MockFilesystem, MockTemplateStore, MockTextFetcher},
        domain::{DomainError, MIT_LICENSE_URL, Template, templates},
        error::PyskelError,
    };

    fn builtin_like_store() -> MockTemplateStore {
        let mut store = MockTemplateStore::new();
        store.expect_load().returning(|name| {
            let body = match name {
                templates::SETUP => "setup(name='$name', author='$author')",
                templates::README => "# $name",
                templates::TESTS_INIT => "# tests for $name",
                templates::TEST_FILE => "import $file",
                templates::MAKEFILE => "test:\n\t$$(PYTHON) -m pytest # $name",
                templates::REQUIREMENTS_DEV => "pytest\n",
                other => panic!("unexpected template {other}"),
            };
            Ok(Template::new(name, body))
        });
        store
    }

    fn online_fetcher() -> MockTextFetcher {
        let mut fetcher = MockTextFetcher::new();
        fetcher
            .expect_fetch()
            .returning(|url| Ok(format!("text from {url}")));
        fetcher
    }

    fn permissive_fs(exists: bool) -> MockFilesystem {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(exists);
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_write_file().returning(|_, _| Ok(()));
        fs.expect_remove_dir_all().returning(|_| Ok(()));
        fs
    }

    fn request() -> ProjectRequest {
        ProjectRequest::new("demo", "/out/demo").with_files(["a", "b.py"])
    }

    #[test]
    fn generates_every_artifact_in_order() {
        let generator = ProjectGenerator::new(
            Box::new(builtin_like_store()),
            Box::new(online_fetcher()),
            Box::new(permissive_fs(false)),
        );

        let report = generator.generate(&request()).unwrap();

        assert_eq!(report.root, PathBuf::from("/out/demo"));
        assert_eq!(report.files.len(), 13);
        assert_eq!(report.files.first(), Some(&PathBuf::from("setup.py")));
        assert_eq!(
            report.files.last(),
            Some(&PathBuf::from("requirements_dev.txt"))
        );
        assert_eq!(
            report.directories,
            vec![PathBuf::from("src"), PathBuf::from("test")]
        );
        assert!(report.is_complete());
    }

    #[test]
    fn renders_with_overrides_winning() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(false);
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_write_file()
            .withf(|path, content| {
                path == Path::new("/out/demo/setup.py")
                    && content == "setup(name='demo', author='Ada')"
            })
            .times(1)
            .returning(|_, _| Ok(()));
        fs.expect_write_file().returning(|_, _| Ok(()));

        let generator = ProjectGenerator::new(
            Box::new(builtin_like_store()),
            Box::new(online_fetcher()),
            Box::new(fs),
        );

        let request = request().with_overrides(VariableSet::new().with("author", "Ada"));
        generator.generate(&request).unwrap();
    }

    #[test]
    fn existing_directory_without_force_writes_nothing() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(true);
        fs.expect_create_dir_all().never();
        fs.expect_write_file().never();
        fs.expect_remove_dir_all().never();

        let generator = ProjectGenerator::new(
            Box::new(MockTemplateStore::new()),
            Box::new(MockTextFetcher::new()),
            Box::new(fs),
        );

        let err = generator.generate(&request()).unwrap_err();
        assert_eq!(
            err,
            PyskelError::Application(ApplicationError::DirectoryExists {
                path: PathBuf::from("/out/demo"),
            })
        );
    }

    #[test]
    fn force_removes_before_recreating() {
        let mut seq = Sequence::new();
        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(true);
        fs.expect_remove_dir_all()
            .withf(|path| path == Path::new("/out/demo"))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));
        fs.expect_create_dir_all()
            .withf(|path| path == Path::new("/out/demo"))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_write_file().returning(|_, _| Ok(()));

        let generator = ProjectGenerator::new(
            Box::new(builtin_like_store()),
            Box::new(online_fetcher()),
            Box::new(fs),
        );

        generator.generate(&request().with_force(true)).unwrap();
    }

    #[test]
    fn failed_fetch_is_skipped_not_fatal() {
        let mut fetcher = MockTextFetcher::new();
        fetcher
            .expect_fetch()
            .withf(|url| url == MIT_LICENSE_URL)
            .returning(|url| {
                Err(ApplicationError::Fetch {
                    url: url.to_string(),
                    reason: "connection refused".into(),
                }
                .into())
            });
        fetcher.expect_fetch().returning(|_| Ok("*.pyc\n".into()));

        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(false);
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_write_file()
            .withf(|path, _| path == Path::new("/out/demo/LICENSE"))
            .never();
        fs.expect_write_file().returning(|_, _| Ok(()));

        let generator =
            ProjectGenerator::new(Box::new(builtin_like_store()), Box::new(fetcher), Box::new(fs));

        let report = generator.generate(&request()).unwrap();

        assert_eq!(report.skipped.len(), 1);
        assert_eq!(report.skipped[0].path, PathBuf::from("LICENSE"));
        assert!(report.skipped[0].reason.contains("connection refused"));
        assert!(report.files.contains(&PathBuf::from(".gitignore")));
        assert!(report.files.contains(&PathBuf::from("Makefile")));
        assert!(!report.is_complete());
    }

    #[test]
    fn missing_template_aborts_after_earlier_writes() {
        let mut store = MockTemplateStore::new();
        store
            .expect_load()
            .withf(|name| name == templates::SETUP)
            .returning(|name| Ok(Template::new(name, "setup(name='$name')")));
        store.expect_load().returning(|name| {
            Err(ApplicationError::TemplateNotFound {
                name: name.to_string(),
                reason: "no such file".into(),
            }
            .into())
        });

        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(false);
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_write_file()
            .withf(|path, content| {
                path == Path::new("/out/demo/setup.py") && content == "setup(name='demo')"
            })
            .times(1)
            .returning(|_, _| Ok(()));

        let generator =
            ProjectGenerator::new(Box::new(store), Box::new(online_fetcher()), Box::new(fs));

        let err = generator.generate(&request()).unwrap_err();
        assert!(matches!(
            err,
            PyskelError::Application(ApplicationError::TemplateNotFound { ref name, .. })
                if name == templates::README
        ));
    }

    #[test]
    fn missing_variable_is_fatal() {
        let mut store = MockTemplateStore::new();
        store
            .expect_load()
            .returning(|name| Ok(Template::new(name, "$name $license")));

        let generator = ProjectGenerator::new(
            Box::new(store),
            Box::new(online_fetcher()),
            Box::new(permissive_fs(false)),
        );

        let err = generator.generate(&request()).unwrap_err();
        assert_eq!(
            err,
            PyskelError::Domain(DomainError::MissingVariable {
                name: "license".into(),
                template: templates::SETUP.into(),
            })
        );
    }

    #[test]
    fn invalid_file_name_fails_before_touching_disk() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().never();
        fs.expect_create_dir_all().never();
        fs.expect_write_file().never();

        let generator = ProjectGenerator::new(
            Box::new(MockTemplateStore::new()),
            Box::new(MockTextFetcher::new()),
            Box::new(fs),
        );

        let err = generator
            .generate(&ProjectRequest::new("demo", "/out/demo").with_files([""]))
            .unwrap_err();
        assert!(matches!(
            err,
            PyskelError::Domain(DomainError::InvalidName { .. })
        ));
    }

    #[test]
    fn report_serializes_to_json() {
        let report = GenerationReport {
            root: PathBuf::from("/out/demo"),
            directories: vec![PathBuf::from("src")],
            files: vec![PathBuf::from("setup.py")],
            skipped: vec![SkippedArtifact {
                path: PathBuf::from("LICENSE"),
                reason: "offline".into(),
            }],
        };

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["files"][0], "setup.py");
        assert_eq!(json["skipped"][0]["reason"], "offline");
    }
}
