// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for pyskel.
//!
//! This module contains pure logic with no I/O. Template bodies, remote text
//! and the filesystem are reached through ports defined in the application
//! layer.
//!
//! - **No I/O**: No filesystem, network, or environment access
//! - **Immutable values**: Templates, variable sets and file name pairs are
//!   never mutated after construction
//!
pub mod entities;
pub mod error;

mod validation;

pub use entities::{
    file_name::FileNamePair,
    layout::{
        FileContent, INITIAL_VERSION, LayoutEntry, MIT_LICENSE_URL, PYTHON_GITIGNORE_URL,
        PlannedFile, ProjectLayout, SOURCE_DIR, TEST_DIR, templates,
    },
    request::{DEFAULT_AUTHOR, DEFAULT_EMAIL, DEFAULT_EXTENSION, Identity, ProjectRequest},
    template::{Template, TemplateSource},
    variables::{Override, VariableSet},
};

pub use error::{DomainError, ErrorCategory};

pub use validation::DomainValidator;
