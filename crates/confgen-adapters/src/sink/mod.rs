//! Output sink adapters.

mod file;
mod memory;
mod stdout;

pub use file::FileSink;
pub use memory::{InjectedFailure, MemorySink};
pub use stdout::StdoutSink;
