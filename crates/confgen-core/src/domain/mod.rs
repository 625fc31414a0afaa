// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for confgen.
//!
//! This module contains pure text logic with no I/O. Reading templates and
//! writing headers are handled via ports (traits) defined in the
//! application layer.
//!
//! - **No I/O**: No filesystem, stdout, or environment access
//! - **Immutable values**: `TemplateText` and `Substitution` never change
//!   after construction
//! - **Total once valid**: a constructed `Substitution` cannot fail to apply

pub mod error;
pub mod substitution;
pub mod template;

pub use error::DomainError;
pub use substitution::{DEFAULT_MARKER, DEFAULT_REPLACEMENT, Substitution};
pub use template::{Rendered, TemplateText};
