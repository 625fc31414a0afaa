//! In-memory template source, for tests that should not touch the disk.

use std::{
    collections::HashMap,
    io,
    path::{Path, PathBuf},
    sync::{Arc, PoisonError, RwLock},
};

use confgen_core::{
    application::{ApplicationError, ports::TemplateSource},
    domain::TemplateText,
    error::ConfgenResult,
};

/// Templates keyed by path. Clones share the same map.
#[derive(Debug, Clone, Default)]
pub struct MemoryTemplateSource {
    templates: Arc<RwLock<HashMap<PathBuf, String>>>,
}

impl MemoryTemplateSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace the template stored under `path`.
    pub fn insert(&self, path: impl Into<PathBuf>, text: impl Into<String>) {
        // The map holds plain strings; a panic elsewhere cannot leave it half-updated.
        self.templates
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(path.into(), text.into());
    }

    /// Builder-style [`Self::insert`].
    pub fn with_template(self, path: impl Into<PathBuf>, text: impl Into<String>) -> Self {
        self.insert(path, text);
        self
    }

    pub fn len(&self) -> usize {
        self.templates
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl TemplateSource for MemoryTemplateSource {
    fn read_template(&self, path: &Path) -> ConfgenResult<TemplateText> {
        let templates = self.templates.read().unwrap_or_else(PoisonError::into_inner);

        match templates.get(path) {
            Some(text) => Ok(TemplateText::new(text.as_str())),
            None => {
                let missing = io::Error::new(io::ErrorKind::NotFound, "no such template in memory");
                Err(ApplicationError::template_read(path, &missing).into())
            }
        }
    }
}
