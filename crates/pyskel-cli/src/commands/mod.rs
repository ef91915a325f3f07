//! Command handlers, one module per subcommand.

use std::path::Path;

use tracing::debug;

use pyskel_adapters::{DirectoryTemplates, EmbeddedTemplates};
use pyskel_core::application::ports::TemplateStore;

use crate::{
    config::AppConfig,
    error::{CliError, CliResult},
};

pub mod completions;
pub mod create;
pub mod init;
pub mod templates;

/// Pick the template source: `--templates` (or its env var), then the
/// config file, then the built-ins.
fn template_store(cli_dir: Option<&Path>, config: &AppConfig) -> CliResult<Box<dyn TemplateStore>> {
    let Some(dir) = cli_dir.or(config.templates.dir.as_deref()) else {
        debug!("Using built-in templates");
        return Ok(Box::new(EmbeddedTemplates::new()));
    };

    if !dir.is_dir() {
        return Err(CliError::InvalidInput {
            message: format!("templates directory not found: {}", dir.display()),
            source: None,
        });
    }

    debug!(dir = %dir.display(), "Using templates directory");
    Ok(Box::new(DirectoryTemplates::new(dir)))
}
