//! Application layer errors.
//!
//! These errors represent failures in orchestration and I/O, not bad input.
//! Input and template errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApplicationError {
    /// Target directory exists and force mode is off.
    #[error("directory already exists: {path}")]
    DirectoryExists { path: PathBuf },

    /// Filesystem operation failed.
    #[error("filesystem error at {path}: {reason}")]
    Filesystem { path: PathBuf, reason: String },

    /// A named template could not be found in the store.
    #[error("template '{name}' not found: {reason}")]
    TemplateNotFound { name: String, reason: String },

    /// Remote text could not be retrieved.
    #[error("failed to fetch {url}: {reason}")]
    Fetch { url: String, reason: String },

    /// In-memory adapter lock poisoned.
    #[error("adapter state lock poisoned")]
    LockPoisoned,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::DirectoryExists { path } => vec![
                format!("Directory already exists: {}", path.display()),
                "Use --force to overwrite (destructive)".into(),
                "Or choose a different --dir".into(),
            ],
            Self::Filesystem { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
            ],
            Self::TemplateNotFound { name, .. } => vec![
                format!("Add '{}' to your templates directory", name),
                "Or drop --templates to use the built-in templates".into(),
                "Try: pyskel templates".into(),
            ],
            Self::Fetch { .. } => vec![
                "Check your network connection".into(),
                "Use --offline to skip downloaded files".into(),
            ],
            Self::LockPoisoned => vec!["This is a bug, please report it".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::DirectoryExists { .. } => ErrorCategory::Validation,
            Self::TemplateNotFound { .. } => ErrorCategory::NotFound,
            Self::Fetch { .. } => ErrorCategory::Network,
            Self::Filesystem { .. } | Self::LockPoisoned => ErrorCategory::Internal,
        }
    }
}
