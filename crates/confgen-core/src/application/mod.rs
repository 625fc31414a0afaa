//! Application layer for confgen.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (`MaterializeService`)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Read and write failures
//!
//! The application layer coordinates the domain layer but contains no
//! text logic itself. The substitution lives in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{MaterializeReport, MaterializeService, STATUS_SUCCESS, ScanReport};

// Re-export port traits (for adapter implementation)
pub use ports::{OutputSink, TemplateSource};

pub use error::ApplicationError;
