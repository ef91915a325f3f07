//! The ordered plan of a project skeleton.
//!
//! [`ProjectLayout::plan`] turns a [`ProjectRequest`] into the exact sequence
//! of directories and files the generator will create. The plan is pure data:
//! template bodies are not loaded and remote text is not fetched until the
//! generator reaches each entry, so a failure half way leaves everything
//! before it on disk.
//!
//! ```text
//! <root>/
//!   setup.py            Template  setup.py.tmpl      name, author, email, url
//!   README.md           Template  README.md.tmpl     name, url
//!   VERSION             Literal   "0.0.1"
//!   LICENSE             Remote    MIT license text
//!   .gitignore          Remote    Python.gitignore
//!   src/__init__.py     Empty
//!   test/__init__.py    Template  tests_init.py.tmpl name
//!   src/<file>.py       Empty                                 (per file)
//!   test/test_<file>.py Template  test_file.py.tmpl  name, file (per file)
//!   Makefile            Template  Makefile.tmpl      name
//!   requirements_dev.txt Copy     requirements_dev.txt
//! ```

use std::path::{Path, PathBuf};

use crate::domain::{
    entities::{file_name::FileNamePair, request::ProjectRequest, variables::VariableSet},
    error::DomainError,
};

/// Names of the templates a project skeleton is built from.
pub mod templates {
    pub const SETUP: &str = "setup.py.tmpl";
    pub const README: &str = "README.md.tmpl";
    pub const TESTS_INIT: &str = "tests_init.py.tmpl";
    pub const TEST_FILE: &str = "test_file.py.tmpl";
    pub const MAKEFILE: &str = "Makefile.tmpl";
    pub const REQUIREMENTS_DEV: &str = "requirements_dev.txt";

    /// Every template name, in generation order.
    pub const ALL: [&str; 6] = [SETUP, README, TESTS_INIT, TEST_FILE, MAKEFILE, REQUIREMENTS_DEV];

    /// Templates copied byte for byte; `$` in them is not a placeholder.
    pub fn is_verbatim(name: &str) -> bool {
        name == REQUIREMENTS_DEV
    }
}

pub const MIT_LICENSE_URL: &str =
    "https://raw.githubusercontent.com/github/choosealicense.com/gh-pages/_licenses/mit.txt";
pub const PYTHON_GITIGNORE_URL: &str =
    "https://raw.githubusercontent.com/github/gitignore/master/Python.gitignore";

pub const INITIAL_VERSION: &str = "0.0.1";

pub const SOURCE_DIR: &str = "src";
pub const TEST_DIR: &str = "test";

/// Where the bytes of a planned file come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileContent {
    /// Zero-length file.
    Empty,
    /// Fixed text, no template involved.
    Literal(&'static str),
    /// Template rendered with these defaults merged under the user overrides.
    Template {
        template: &'static str,
        defaults: VariableSet,
    },
    /// Template body written verbatim.
    Copy { template: &'static str },
    /// Text fetched from a URL; failure skips the file.
    Remote { url: &'static str },
}

impl FileContent {
    pub fn is_remote(&self) -> bool {
        matches!(self, Self::Remote { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutEntry {
    Directory(PathBuf),
    File(PlannedFile),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedFile {
    /// Path relative to the project root.
    pub path: PathBuf,
    pub content: FileContent,
}

/// Ordered project skeleton. Paths are relative to [`ProjectLayout::root`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    root: PathBuf,
    entries: Vec<LayoutEntry>,
}

impl ProjectLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            entries: Vec::new(),
        }
    }

    /// Plan the full skeleton for `request`.
    ///
    /// Every logical file name is derived up front, so an invalid name is
    /// reported before anything touches the disk. Duplicates are kept; the
    /// later entry overwrites the earlier one when written.
    pub fn plan(request: &ProjectRequest) -> Result<Self, DomainError> {
        request.validate()?;

        let ext = request.extension();
        let name = request.name();
        let identity = request.identity();

        let pairs = request
            .files()
            .iter()
            .map(|f| FileNamePair::derive(f, ext))
            .collect::<Result<Vec<_>, _>>()?;

        let mut layout = Self::new(request.root());

        layout.add_file(
            format!("setup{ext}"),
            FileContent::Template {
                template: templates::SETUP,
                defaults: VariableSet::new()
                    .with("name", name)
                    .with("author", identity.author.as_str())
                    .with("email", identity.email.as_str())
                    .with("url", identity.url.as_str()),
            },
        );
        layout.add_file(
            "README.md",
            FileContent::Template {
                template: templates::README,
                defaults: VariableSet::new()
                    .with("name", name)
                    .with("url", identity.url.as_str()),
            },
        );
        layout.add_file("VERSION", FileContent::Literal(INITIAL_VERSION));
        layout.add_file(
            "LICENSE",
            FileContent::Remote {
                url: MIT_LICENSE_URL,
            },
        );
        layout.add_file(
            ".gitignore",
            FileContent::Remote {
                url: PYTHON_GITIGNORE_URL,
            },
        );

        layout.add_directory(SOURCE_DIR);
        layout.add_file(
            Path::new(SOURCE_DIR).join(format!("__init__{ext}")),
            FileContent::Empty,
        );

        layout.add_directory(TEST_DIR);
        layout.add_file(
            Path::new(TEST_DIR).join(format!("__init__{ext}")),
            FileContent::Template {
                template: templates::TESTS_INIT,
                defaults: VariableSet::new().with("name", name),
            },
        );

        for pair in &pairs {
            layout.add_file(
                Path::new(SOURCE_DIR).join(pair.source_name()),
                FileContent::Empty,
            );
            layout.add_file(
                Path::new(TEST_DIR).join(pair.test_name()),
                FileContent::Template {
                    template: templates::TEST_FILE,
                    defaults: VariableSet::new()
                        .with("name", name)
                        .with("file", pair.stem()),
                },
            );
        }

        layout.add_file(
            "Makefile",
            FileContent::Template {
                template: templates::MAKEFILE,
                defaults: VariableSet::new().with("name", name),
            },
        );
        layout.add_file(
            "requirements_dev.txt",
            FileContent::Copy {
                template: templates::REQUIREMENTS_DEV,
            },
        );

        Ok(layout)
    }

    pub fn add_file(&mut self, path: impl Into<PathBuf>, content: FileContent) {
        self.entries.push(LayoutEntry::File(PlannedFile {
            path: path.into(),
            content,
        }));
    }

    pub fn add_directory(&mut self, path: impl Into<PathBuf>) {
        self.entries.push(LayoutEntry::Directory(path.into()));
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn entries(&self) -> &[LayoutEntry] {
        &self.entries
    }

    pub fn files(&self) -> impl Iterator<Item = &PlannedFile> {
        self.entries.iter().filter_map(|e| match e {
            LayoutEntry::File(f) => Some(f),
            _ => None,
        })
    }

    pub fn directories(&self) -> impl Iterator<Item = &Path> {
        self.entries.iter().filter_map(|e| match e {
            LayoutEntry::Directory(d) => Some(d.as_path()),
            _ => None,
        })
    }

    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }
}
