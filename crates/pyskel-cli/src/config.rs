//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables: `PYSKEL_<SECTION>__<KEY>`, e.g.
//!    `PYSKEL_IDENTITY__AUTHOR=Ada`
//! 3. Config file (`--config`, or the platform config dir)
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

use pyskel_core::domain::{DEFAULT_AUTHOR, DEFAULT_EMAIL, Identity};

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Who the generated `setup.py` is attributed to.
    pub identity: IdentityConfig,
    /// Output settings.
    pub output: OutputConfig,
    /// Template settings.
    pub templates: TemplateConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IdentityConfig {
    /// Falls back to `$USER`, then to `"author"`.
    pub author: Option<String>,
    pub email: String,
    pub url: String,
}

impl Default for IdentityConfig {
    fn default() -> Self {
        Self {
            author: None,
            email: DEFAULT_EMAIL.into(),
            url: String::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateConfig {
    /// Replacement template directory; built-ins when unset.
    pub dir: Option<PathBuf>,
}

impl AppConfig {
    /// Load configuration from defaults, the config file and the environment.
    ///
    /// A missing file is fine at the default location but an error when the
    /// user named it with `--config`.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let path = config_file.cloned().unwrap_or_else(Self::config_path);
        Self::load_from(&path, config_file.is_some())
    }

    fn load_from(path: &Path, required: bool) -> anyhow::Result<Self> {
        let settings = Config::builder()
            .add_source(
                Config::try_from(&Self::default()).context("Failed to encode default config")?,
            )
            .add_source(File::new(&path.to_string_lossy(), FileFormat::Toml).required(required))
            .add_source(
                Environment::with_prefix("PYSKEL")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        settings
            .try_deserialize()
            .with_context(|| format!("Invalid config in {}", path.display()))
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.pyskel.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("org", "pyskel", "pyskel")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".pyskel.toml"))
    }

    /// Default `setup.py` identity with the author resolved.
    pub fn identity(&self) -> Identity {
        let user = std::env::var("USER").ok();
        Identity::new(self.resolve_author(user))
            .with_email(&self.identity.email)
            .with_url(&self.identity.url)
    }

    fn resolve_author(&self, user: Option<String>) -> String {
        let non_blank = |s: &String| !s.trim().is_empty();
        self.identity
            .author
            .clone()
            .filter(non_blank)
            .or_else(|| user.filter(non_blank))
            .unwrap_or_else(|| DEFAULT_AUTHOR.into())
    }

    /// Render as TOML, the format `init` writes.
    pub fn to_toml(&self) -> anyhow::Result<String> {
        toml::to_string_pretty(self).context("Failed to serialise config")
    }
}
