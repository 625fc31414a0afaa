//! Application services (use cases).

mod materialize_service;

pub use materialize_service::{MaterializeReport, MaterializeService, STATUS_SUCCESS, ScanReport};
