//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `pyskel-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Filesystem`: File operations
//!   - `TemplateStore`: Template retrieval
//!   - `TextFetcher`: Remote text retrieval

pub mod output;

pub use output::{Filesystem, TemplateStore, TextFetcher};

#[cfg(test)]
pub use output::{MockFilesystem, MockTemplateStore, MockTextFetcher};
