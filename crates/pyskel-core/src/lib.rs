//! pyskel Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the pyskel
//! Python project generator, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           pyskel-cli (CLI)              │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │ (ProjectGenerator, TemplateService)     │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (Filesystem, TemplateStore, TextFetcher)│
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     pyskel-adapters (Infrastructure)    │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │ (Template, VariableSet, FileNamePair,   │
//! │  ProjectLayout)                         │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use pyskel_core::prelude::*;
//!
//! let request = ProjectRequest::new("demo", "/tmp/demo")
//!     .with_files(["a", "b.py"]);
//!
//! let generator = ProjectGenerator::new(store, fetcher, filesystem);
//! let report = generator.generate(&request)?;
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        GenerationReport, ProjectGenerator, SkippedArtifact, TemplateService,
        ports::{Filesystem, TemplateStore, TextFetcher},
    };
    pub use crate::domain::{
        FileContent, FileNamePair, Identity, LayoutEntry, Override, ProjectLayout,
        ProjectRequest, Template, VariableSet,
    };
    pub use crate::error::{PyskelError, PyskelResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
