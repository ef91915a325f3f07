//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "generate a project" or "list templates".

pub mod generator;
pub mod template_service;

pub use generator::{GenerationReport, ProjectGenerator, SkippedArtifact};
pub use template_service::{TemplateInfo, TemplateService};
