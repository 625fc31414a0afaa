//! Unified error handling for confgen core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for confgen core operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfgenError {
    /// Invalid substitution rule.
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    /// Reading the template or writing the output failed.
    #[error("{0}")]
    Application(#[from] ApplicationError),
}

impl ConfgenError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => e.category(),
            Self::Application(e) => e.category(),
        }
    }

    /// `true` when the template could not be read.
    pub fn is_read_failure(&self) -> bool {
        matches!(
            self,
            Self::Application(ApplicationError::TemplateRead { .. })
        )
    }

    /// `true` when the output sink rejected the write or the close.
    pub fn is_write_failure(&self) -> bool {
        matches!(
            self,
            Self::Application(ApplicationError::SinkWrite { .. } | ApplicationError::SinkClose { .. })
        )
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Internal,
}

/// Convenient result type alias.
pub type ConfgenResult<T> = Result<T, ConfgenError>;
