//! Built-in templates compiled into the binary.
//!
//! The bodies live under `crates/pyskel-adapters/templates/` and are pulled
//! in with `include_str!`, so a release binary never depends on the working
//! directory the way the original `tmpl/` lookup did.

use pyskel_core::{
    application::{ApplicationError, ports::TemplateStore},
    domain::{Template, templates},
    error::PyskelResult,
};

const BUILTIN: [(&str, &str); 6] = [
    (
        templates::SETUP,
        include_str!("../../templates/setup.py.tmpl"),
    ),
    (
        templates::README,
        include_str!("../../templates/README.md.tmpl"),
    ),
    (
        templates::TESTS_INIT,
        include_str!("../../templates/tests_init.py.tmpl"),
    ),
    (
        templates::TEST_FILE,
        include_str!("../../templates/test_file.py.tmpl"),
    ),
    (
        templates::MAKEFILE,
        include_str!("../../templates/Makefile.tmpl"),
    ),
    (
        templates::REQUIREMENTS_DEV,
        include_str!("../../templates/requirements_dev.txt"),
    ),
];

/// The six templates that ship with pyskel.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedTemplates;

impl EmbeddedTemplates {
    pub fn new() -> Self {
        Self
    }

    /// All built-in templates, in generation order.
    pub fn all() -> Vec<Template> {
        BUILTIN
            .iter()
            .map(|(name, body)| Template::new(*name, *body))
            .collect()
    }
}

impl TemplateStore for EmbeddedTemplates {
    fn load(&self, name: &str) -> PyskelResult<Template> {
        BUILTIN
            .iter()
            .find(|(builtin, _)| *builtin == name)
            .map(|(builtin, body)| Template::new(*builtin, *body))
            .ok_or_else(|| {
                ApplicationError::TemplateNotFound {
                    name: name.to_string(),
                    reason: "not a built-in template".into(),
                }
                .into()
            })
    }

    fn names(&self) -> PyskelResult<Vec<String>> {
        let mut names: Vec<String> = BUILTIN.iter().map(|(n, _)| n.to_string()).collect();
        names.sort();
        Ok(names)
    }
}
