// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (reports and retries keep copies)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    // ========================================================================
    // Input Errors
    // ========================================================================
    #[error("malformed override '{token}': {reason}")]
    MalformedOverride { token: String, reason: &'static str },

    #[error("invalid file name '{name}': {reason}")]
    InvalidName { name: String, reason: &'static str },

    #[error("invalid project name '{name}': {reason}")]
    InvalidProjectName { name: String, reason: &'static str },

    // ========================================================================
    // Template Errors
    // ========================================================================
    #[error("template '{template}' references undefined variable '{name}'")]
    MissingVariable { name: String, template: String },

    #[error("invalid placeholder in template '{template}': line {line}, col {column}")]
    InvalidPlaceholder {
        template: String,
        line: usize,
        column: usize,
    },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::MalformedOverride { token, .. } => vec![
                format!("'{}' is not a key=value pair", token),
                "Pass template data as --data key=value".into(),
            ],
            Self::InvalidName { name, .. } => vec![
                format!("File name '{}' cannot be used", name),
                "Use a bare module name such as 'utils' or 'utils.py'".into(),
            ],
            Self::InvalidProjectName { .. } => vec!["Pass a non-empty --name".into()],
            Self::MissingVariable { name, .. } => vec![
                format!("Provide a value with --data {}=<value>", name),
                "Or remove the placeholder from the template".into(),
            ],
            Self::InvalidPlaceholder { .. } => vec![
                "Placeholders look like $name or ${name}".into(),
                "Write a literal dollar sign as $$".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::MalformedOverride { .. }
            | Self::InvalidName { .. }
            | Self::InvalidProjectName { .. } => ErrorCategory::Input,
            Self::MissingVariable { .. } | Self::InvalidPlaceholder { .. } => {
                ErrorCategory::Template
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Template,
}
