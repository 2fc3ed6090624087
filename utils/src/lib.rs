//! Shared utilities for the stampflow workspace.

pub mod logging;

pub use logging::init_tracing;
