//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `confgen-adapters` crate provides implementations.

use std::io;
use std::path::Path;

use crate::domain::TemplateText;
use crate::error::ConfgenResult;

/// Port for reading header templates.
///
/// Implemented by:
/// - `confgen_adapters::source::LocalTemplateSource` (production)
/// - `confgen_adapters::source::MemoryTemplateSource` (testing)
///
/// Implementations read the whole template before returning and release any
/// handle they opened, so nothing stays open while the output is written.
#[cfg_attr(test, mockall::automock)]
pub trait TemplateSource: Send + Sync {
    /// Read the full template at `path` as text.
    ///
    /// Missing, unreadable, or non-UTF-8 files are reported as
    /// `ApplicationError::TemplateRead`.
    fn read_template(&self, path: &Path) -> ConfgenResult<TemplateText>;
}

/// Port for the destination of a materialized header.
///
/// The sink is already open when handed over and is consumed by
/// [`OutputSink::close`]; once closed it cannot be written to again.
///
/// Implemented by:
/// - `confgen_adapters::sink::FileSink` (production)
/// - `confgen_adapters::sink::StdoutSink` (production, `-o` omitted)
/// - `confgen_adapters::sink::MemorySink` (testing)
pub trait OutputSink: io::Write {
    /// Flush buffered data and release the destination.
    ///
    /// Errors that only surface when the destination is released must be
    /// reported here, not lost on drop.
    fn close(self) -> io::Result<()>
    where
        Self: Sized;
}
