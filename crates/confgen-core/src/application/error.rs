//! Application layer errors.
//!
//! These are the two I/O failure points of a materialization: reading the
//! template, and writing or closing the output sink. Substitution rule errors
//! are `DomainError` from `crate::domain`.

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur while moving text between the ports.
///
/// The originating `io::Error` is flattened to its kind and message so the
/// error stays `Clone`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApplicationError {
    /// The template is missing, unreadable, or not valid UTF-8 text.
    #[error("Failed to read template {}: {reason}", path.display())]
    TemplateRead {
        path: PathBuf,
        kind: io::ErrorKind,
        reason: String,
    },

    /// The output sink rejected the transformed text.
    #[error("Failed to write output: {reason}")]
    SinkWrite { kind: io::ErrorKind, reason: String },

    /// The output sink could not be flushed or closed.
    #[error("Failed to close output: {reason}")]
    SinkClose { kind: io::ErrorKind, reason: String },
}

impl ApplicationError {
    pub fn template_read(path: &Path, err: &io::Error) -> Self {
        Self::TemplateRead {
            path: path.to_path_buf(),
            kind: err.kind(),
            reason: err.to_string(),
        }
    }

    pub fn sink_write(err: io::Error) -> Self {
        Self::SinkWrite {
            kind: err.kind(),
            reason: err.to_string(),
        }
    }

    pub fn sink_close(err: io::Error) -> Self {
        Self::SinkClose {
            kind: err.kind(),
            reason: err.to_string(),
        }
    }

    /// Kind of the underlying I/O failure.
    pub fn io_kind(&self) -> io::ErrorKind {
        match self {
            Self::TemplateRead { kind, .. }
            | Self::SinkWrite { kind, .. }
            | Self::SinkClose { kind, .. } => *kind,
        }
    }

    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::TemplateRead { path, kind, .. } => match kind {
                io::ErrorKind::NotFound => vec![
                    format!("No template at: {}", path.display()),
                    "Check the path passed by the build system".into(),
                ],
                io::ErrorKind::PermissionDenied => vec![
                    format!("Cannot read: {}", path.display()),
                    "Check the file permissions".into(),
                ],
                io::ErrorKind::InvalidData => vec![
                    format!("{} is not valid UTF-8 text", path.display()),
                    "Templates must be text files".into(),
                ],
                _ => vec![format!("Failed to access: {}", path.display())],
            },
            Self::SinkWrite { .. } | Self::SinkClose { .. } => vec![
                "The generated header is incomplete and must not be used".into(),
                "Check that the output location is writable".into(),
                "Check available disk space".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::TemplateRead {
                kind: io::ErrorKind::NotFound,
                ..
            } => ErrorCategory::NotFound,
            Self::TemplateRead { .. } => ErrorCategory::Validation,
            Self::SinkWrite { .. } | Self::SinkClose { .. } => ErrorCategory::Internal,
        }
    }
}
