//! Infrastructure adapters for confgen.
//!
//! This crate implements the ports defined in `confgen-core::application::ports`.
//! It contains all I/O: reading templates and writing headers.

pub mod sink;
pub mod source;

use std::path::Path;

use confgen_core::{
    application::{MaterializeService, ports::OutputSink},
    error::ConfgenResult,
};

// Re-export commonly used adapters
pub use sink::{FileSink, InjectedFailure, MemorySink, StdoutSink};
pub use source::{LocalTemplateSource, MemoryTemplateSource};

/// Materialize the template at `template_path` into `sink` using the local
/// filesystem and the default `#cmakedefine` -> `#define` rule.
///
/// The sink is closed on success and the returned status code is `0`.
pub fn materialize<S: OutputSink>(sink: S, template_path: impl AsRef<Path>) -> ConfgenResult<u8> {
    let service = MaterializeService::new(Box::new(LocalTemplateSource::new()));
    service
        .materialize(sink, template_path.as_ref())
        .map(|report| report.status_code())
}
