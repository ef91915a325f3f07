//! Unified error handling for pyskel Core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for pyskel Core operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PyskelError {
    /// Errors from the domain layer (bad input, bad templates).
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Errors from the application layer (filesystem, stores, network).
    #[error(transparent)]
    Application(#[from] ApplicationError),
}

impl PyskelError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Input => ErrorCategory::Validation,
                crate::domain::ErrorCategory::Template => ErrorCategory::Template,
            },
            Self::Application(e) => e.category(),
        }
    }

    /// `true` for failures the generator may degrade around instead of aborting.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::Application(ApplicationError::Fetch { .. }))
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Template,
    NotFound,
    Network,
    Internal,
}

/// Convenient result type alias.
pub type PyskelResult<T> = Result<T, PyskelError>;
