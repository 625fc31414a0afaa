//! Application ports (traits) for external dependencies.
//!
//! Ports define the interfaces the application needs from the outside world.
//! Adapters in `confgen-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `TemplateSource`: Template reading
//!   - `OutputSink`: Header writing and closing

pub mod output;

pub use output::{OutputSink, TemplateSource};

#[cfg(test)]
pub use output::MockTemplateSource;
