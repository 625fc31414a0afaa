//! Materialize Service - the template-to-header use case.
//!
//! This service coordinates one linear sequence:
//! 1. Read the template through the `TemplateSource` port
//! 2. Apply the substitution rule
//! 3. Write the result to the `OutputSink`
//! 4. Close the sink
//!
//! Either I/O failure aborts the sequence and propagates. Nothing is written
//! to the sink unless the template was read in full.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info, instrument};

use crate::{
    application::{
        ApplicationError,
        ports::{OutputSink, TemplateSource},
    },
    domain::Substitution,
    error::ConfgenResult,
};

/// Status code returned by a completed materialization.
pub const STATUS_SUCCESS: u8 = 0;

/// What a successful materialization did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MaterializeReport {
    pub template: PathBuf,
    pub marker: String,
    pub replacement: String,
    pub replacements: usize,
    pub bytes_written: usize,
    pub status: u8,
}

impl MaterializeReport {
    pub fn status_code(&self) -> u8 {
        self.status
    }
}

/// Marker occurrences found in a template, without writing anything.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScanReport {
    pub template: PathBuf,
    pub marker: String,
    pub occurrences: usize,
    /// 1-based line numbers containing the marker.
    pub lines: Vec<usize>,
    pub total_lines: usize,
}

/// Header materialization service.
pub struct MaterializeService {
    source: Box<dyn TemplateSource>,
    substitution: Substitution,
}

impl MaterializeService {
    /// Create a service using the default `#cmakedefine` -> `#define` rule.
    pub fn new(source: Box<dyn TemplateSource>) -> Self {
        Self {
            source,
            substitution: Substitution::default(),
        }
    }

    /// Replace the substitution rule.
    pub fn with_substitution(mut self, substitution: Substitution) -> Self {
        self.substitution = substitution;
        self
    }

    pub fn substitution(&self) -> &Substitution {
        &self.substitution
    }

    /// Materialize `template_path` into `sink`, then close the sink.
    ///
    /// The sink is consumed. On a read failure it is dropped untouched; on a
    /// write failure the partial output must be treated as invalid.
    #[instrument(
        skip_all,
        fields(template = %template_path.display(), rule = %self.substitution)
    )]
    pub fn materialize<S: OutputSink>(
        &self,
        mut sink: S,
        template_path: &Path,
    ) -> ConfgenResult<MaterializeReport> {
        let template = self.source.read_template(template_path)?;
        debug!(
            bytes = template.len(),
            lines = template.line_count(),
            "Template read"
        );

        let rendered = self.substitution.apply(&template);
        debug!(replacements = rendered.replacements(), "Substitution applied");

        sink.write_all(rendered.as_bytes())
            .map_err(ApplicationError::sink_write)?;
        sink.close().map_err(ApplicationError::sink_close)?;

        info!(
            replacements = rendered.replacements(),
            bytes = rendered.as_bytes().len(),
            "Header materialized"
        );

        Ok(MaterializeReport {
            template: template_path.to_path_buf(),
            marker: self.substitution.marker().to_owned(),
            replacement: self.substitution.replacement().to_owned(),
            replacements: rendered.replacements(),
            bytes_written: rendered.as_bytes().len(),
            status: STATUS_SUCCESS,
        })
    }

    /// Count marker occurrences in `template_path`.
    #[instrument(skip_all, fields(template = %template_path.display()))]
    pub fn scan(&self, template_path: &Path) -> ConfgenResult<ScanReport> {
        let template = self.source.read_template(template_path)?;
        let text = template.as_str();

        Ok(ScanReport {
            template: template_path.to_path_buf(),
            marker: self.substitution.marker().to_owned(),
            occurrences: self.substitution.count(text),
            lines: self.substitution.marker_lines(text),
            total_lines: template.line_count(),
        })
    }
}
