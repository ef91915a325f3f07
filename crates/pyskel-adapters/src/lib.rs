//! Infrastructure adapters for pyskel.
//!
//! This crate implements the ports defined in `pyskel-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod fetcher;
pub mod filesystem;
pub mod template_store;

// Re-export commonly used adapters
pub use fetcher::{HttpFetcher, MemoryFetcher};
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use template_store::{DirectoryTemplates, EmbeddedTemplates, MemoryTemplates};
