// ============================================================================
// domain/error.rs - SUBSTITUTION RULE ERRORS
// ============================================================================

use thiserror::Error;

use crate::error::ErrorCategory;

/// Root domain error type.
///
/// Only a malformed substitution rule can fail in the domain; applying a
/// valid rule to text is total.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Marker token must not be empty")]
    EmptyMarker,

    #[error("Replacement '{replacement}' contains the marker '{marker}'")]
    ReplacementContainsMarker { marker: String, replacement: String },

    #[error("Replacement '{replacement}' can join surrounding text into the marker '{marker}'")]
    ReplacementFormsMarker { marker: String, replacement: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::EmptyMarker => vec![
                "Pass a non-empty --marker, or drop it to use '#cmakedefine'".into(),
                "Check substitution.marker in your config file".into(),
            ],
            Self::ReplacementContainsMarker {
                marker,
                replacement,
            } => vec![
                format!("'{replacement}' still contains '{marker}'"),
                "A second run would rewrite the output again".into(),
                "Choose a replacement such as '#define'".into(),
            ],
            Self::ReplacementFormsMarker {
                marker,
                replacement,
            } => vec![
                format!("'{replacement}' shares text with '{marker}', or is empty"),
                "Pick tokens that do not overlap, e.g. '#cmakedefine' -> '#define'".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::Validation
    }
}
