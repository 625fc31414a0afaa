//! confgen Core - Ports and Adapters Implementation
//!
//! This crate provides the domain and application layers for confgen, a
//! build-time helper that turns a CMake-style header template into a
//! configuration header by rewriting every `#cmakedefine` as `#define`.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           confgen-cli (CLI)             │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         MaterializeService              │
//! │   read → substitute → write → close     │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │     (TemplateSource, OutputSink)        │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    confgen-adapters (Infrastructure)    │
//! │  (LocalTemplateSource, FileSink, ...)   │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::path::Path;
//! use confgen_core::prelude::*;
//!
//! # fn run(source: Box<dyn TemplateSource>, sink: impl OutputSink) -> ConfgenResult<()> {
//! let service = MaterializeService::new(source);
//! let report = service.materialize(sink, Path::new("config.h.in"))?;
//! assert_eq!(report.status_code(), 0);
//! # Ok(())
//! # }
//! ```
//!
//! Feature detection is not performed: every guarded definition is enabled.

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        MaterializeReport, MaterializeService, STATUS_SUCCESS, ScanReport,
        ports::{OutputSink, TemplateSource},
    };
    pub use crate::domain::{Rendered, Substitution, TemplateText};
    pub use crate::error::{ConfgenError, ConfgenResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
