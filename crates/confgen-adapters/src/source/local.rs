//! Local filesystem template source using std::fs.

use std::path::Path;

use confgen_core::{
    application::{ApplicationError, ports::TemplateSource},
    domain::TemplateText,
    error::ConfgenResult,
};
use tracing::trace;

/// Production template source reading from the local filesystem.
#[derive(Debug, Clone, Copy)]
pub struct LocalTemplateSource;

impl LocalTemplateSource {
    /// Create a new local template source.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalTemplateSource {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateSource for LocalTemplateSource {
    fn read_template(&self, path: &Path) -> ConfgenResult<TemplateText> {
        trace!(path = %path.display(), "Reading template");
        // read_to_string closes the handle before returning and rejects
        // non-UTF-8 content with ErrorKind::InvalidData.
        std::fs::read_to_string(path)
            .map(TemplateText::from)
            .map_err(|e| ApplicationError::template_read(path, &e).into())
    }
}
