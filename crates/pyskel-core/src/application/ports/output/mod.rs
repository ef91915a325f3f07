//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `pyskel-adapters` crate provides implementations.

use std::path::Path;

use crate::domain::Template;
use crate::error::PyskelResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `pyskel_adapters::filesystem::LocalFilesystem` (production)
/// - `pyskel_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> PyskelResult<()>;

    /// Write content to a file, replacing any previous content.
    fn write_file(&self, path: &Path, content: &str) -> PyskelResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Remove a directory and all contents.
    fn remove_dir_all(&self, path: &Path) -> PyskelResult<()>;
}

/// Port for template retrieval.
///
/// Implemented by:
/// - `pyskel_adapters::template_store::EmbeddedTemplates` (built-in templates)
/// - `pyskel_adapters::template_store::DirectoryTemplates` (user directory)
/// - `pyskel_adapters::template_store::MemoryTemplates` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait TemplateStore: Send + Sync {
    /// Load a template by name.
    fn load(&self, name: &str) -> PyskelResult<Template>;

    /// Names of all templates the store can load, sorted.
    fn names(&self) -> PyskelResult<Vec<String>>;
}

/// Port for retrieving a text blob by URL.
///
/// Synchronous, no retry. Callers decide whether a failure is fatal.
#[cfg_attr(test, mockall::automock)]
pub trait TextFetcher: Send + Sync {
    fn fetch(&self, url: &str) -> PyskelResult<String>;
}
