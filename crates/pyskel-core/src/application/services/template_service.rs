//! Template Service - template listing and inspection.
//!
//! Backs the `templates` command. Separated from ProjectGenerator so the
//! listing path never needs a fetcher or a filesystem.

use serde::Serialize;

use crate::{
    application::ports::TemplateStore,
    domain::{DomainValidator, Template, templates},
    error::PyskelResult,
};

/// Summary of one template, as shown by `pyskel templates`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateInfo {
    pub name: String,
    /// Distinct placeholder names in order of first appearance.
    pub placeholders: Vec<String>,
    pub lines: usize,
    /// Copied as-is; placeholders are not parsed.
    pub verbatim: bool,
    /// Why the placeholders could not be parsed, if they could not.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub problem: Option<String>,
}

impl TemplateInfo {
    fn from_template(template: &Template) -> Self {
        let verbatim = templates::is_verbatim(template.name());
        let (placeholders, problem) = if verbatim {
            (Vec::new(), None)
        } else {
            match template.placeholders() {
                Ok(names) => (names.into_iter().map(String::from).collect(), None),
                Err(e) => (Vec::new(), Some(e.to_string())),
            }
        };

        Self {
            name: template.name().to_string(),
            placeholders,
            lines: template.source().lines().count(),
            verbatim,
            problem,
        }
    }
}

/// Service for template operations.
pub struct TemplateService {
    store: Box<dyn TemplateStore>,
}

impl TemplateService {
    /// Create a new template service.
    pub fn new(store: Box<dyn TemplateStore>) -> Self {
        Self { store }
    }

    /// Get a template by name, rejecting malformed placeholders unless the
    /// template is copied verbatim.
    pub fn get(&self, name: &str) -> PyskelResult<Template> {
        let template = self.store.load(name)?;
        if !templates::is_verbatim(template.name()) {
            DomainValidator::validate_template(&template)?;
        }
        Ok(template)
    }

    /// Describe a single template. Only a failed load is an error; a
    /// malformed body is reported in [`TemplateInfo::problem`].
    pub fn describe(&self, name: &str) -> PyskelResult<TemplateInfo> {
        Ok(TemplateInfo::from_template(&self.store.load(name)?))
    }

    /// Describe every template in the store, sorted by name. One malformed
    /// file does not hide the others.
    pub fn list(&self) -> PyskelResult<Vec<TemplateInfo>> {
        self.store
            .names()?
            .iter()
            .map(|name| self.describe(name))
            .collect()
    }
}
