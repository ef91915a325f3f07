use std::path::{Path, PathBuf};

use crate::domain::{entities::variables::VariableSet, error::DomainError};

/// Extension given to generated source and test files.
pub const DEFAULT_EXTENSION: &str = ".py";

/// Placeholder e-mail written into `setup.py` until the user supplies one.
pub const DEFAULT_EMAIL: &str = "TODO@somemail.com";

/// Author fallback when nothing else is configured.
pub const DEFAULT_AUTHOR: &str = "author";

/// Who the generated project belongs to.
///
/// Resolved once at the process boundary (config, environment) and injected
/// here; the domain never reads the environment itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub author: String,
    pub email: String,
    pub url: String,
}

impl Identity {
    pub fn new(author: impl Into<String>) -> Self {
        Self {
            author: author.into(),
            email: DEFAULT_EMAIL.into(),
            url: String::new(),
        }
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }
}

impl Default for Identity {
    fn default() -> Self {
        Self::new(DEFAULT_AUTHOR)
    }
}

/// Everything one `create` invocation asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectRequest {
    name: String,
    root: PathBuf,
    files: Vec<String>,
    overrides: VariableSet,
    identity: Identity,
    extension: String,
    force: bool,
}

impl ProjectRequest {
    pub fn new(name: impl Into<String>, root: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            root: root.into(),
            files: Vec::new(),
            overrides: VariableSet::new(),
            identity: Identity::default(),
            extension: DEFAULT_EXTENSION.into(),
            force: false,
        }
    }

    /// Logical file names, in the order they will be generated.
    pub fn with_files<I, S>(mut self, files: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.files = files.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_overrides(mut self, overrides: VariableSet) -> Self {
        self.overrides = overrides;
        self
    }

    pub fn with_identity(mut self, identity: Identity) -> Self {
        self.identity = identity;
        self
    }

    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    pub fn with_force(mut self, force: bool) -> Self {
        self.force = force;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn files(&self) -> &[String] {
        &self.files
    }

    pub fn overrides(&self) -> &VariableSet {
        &self.overrides
    }

    pub fn identity(&self) -> &Identity {
        &self.identity
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }

    pub fn force(&self) -> bool {
        self.force
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.name.trim().is_empty() {
            return Err(DomainError::InvalidProjectName {
                name: self.name.clone(),
                reason: "name cannot be empty",
            });
        }
        Ok(())
    }
}
