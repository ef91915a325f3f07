//! In-memory template store.

use std::{
    collections::HashMap,
    sync::{Arc, RwLock},
};

use pyskel_core::{
    application::{ApplicationError, ports::TemplateStore},
    domain::{DomainValidator as validator, Template},
    error::PyskelResult,
};

use super::EmbeddedTemplates;

/// Thread-safe in-memory template store.
#[derive(Clone, Default)]
pub struct MemoryTemplates {
    inner: Arc<RwLock<HashMap<String, Template>>>,
}

impl MemoryTemplates {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with the built-in templates.
    pub fn with_builtin() -> PyskelResult<Self> {
        let store = Self::new();
        for template in EmbeddedTemplates::all() {
            store.insert(template)?;
        }
        Ok(store)
    }

    /// Add or replace a template after checking its placeholders parse.
    pub fn insert(&self, template: Template) -> PyskelResult<()> {
        validator::validate_template(&template)?;

        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::LockPoisoned)?;
        inner.insert(template.name().to_string(), template);
        Ok(())
    }

    /// Get the number of templates.
    pub fn len(&self) -> usize {
        self.inner.read().map(|inner| inner.len()).unwrap_or(0)
    }

    /// Check if store is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl TemplateStore for MemoryTemplates {
    fn load(&self, name: &str) -> PyskelResult<Template> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::LockPoisoned)?;

        inner.get(name).cloned().ok_or_else(|| {
            ApplicationError::TemplateNotFound {
                name: name.to_string(),
                reason: "not in store".into(),
            }
            .into()
        })
    }

    fn names(&self) -> PyskelResult<Vec<String>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::LockPoisoned)?;

        let mut names: Vec<String> = inner.keys().cloned().collect();
        names.sort();
        Ok(names)
    }
}
