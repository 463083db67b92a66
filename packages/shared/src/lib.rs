//! Shared utilities for Trophy Manager.
//!
//! Logging bootstrap and time helpers used by the binaries in this workspace.

pub mod logger;
pub mod time;

pub use logger::setup_logger;
