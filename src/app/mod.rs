//! Main application modules.
//!
//! This module provides URL validation, the printing of results, and run
//! summary logging used by the dispatch pipeline.

pub mod logging;
pub mod output;
pub mod url;

// Re-export public API
pub use logging::log_run_summary;
pub use output::{ConsoleReporter, Reporter};
pub use url::{decode_line, is_skippable, validate_url, ValidatedUrl};
