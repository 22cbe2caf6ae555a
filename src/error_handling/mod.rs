//! Error handling and run statistics.
//!
//! This module provides:
//! - Error type definitions (setup, validation, per-URL fetch failures)
//! - Transport error categorization and message flattening
//! - Run statistics tracking
//!
//! Only setup errors are fatal. Validation and fetch errors are reported for
//! the line or URL they belong to and the run carries on.

mod categorization;
mod stats;
mod types;

// Re-export public API
pub use categorization::TransportCause;
pub use stats::RunStats;
pub use types::{FetchError, FetchErrorKind, GateClosed, InitializationError, InvalidUrl};
