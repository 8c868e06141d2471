//! Observability subsystem.
//!
//! Structured logging through `tracing`; every request span carries the
//! `x-request-id` assigned at the edge.

pub mod logging;

pub use logging::init_logging;
