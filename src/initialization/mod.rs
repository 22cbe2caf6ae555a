//! Application initialization and resource setup.
//!
//! This module provides functions to initialize the shared resources of a run:
//! - Logger
//! - HTTP client (with the run's timeout)
//! - Admission gate (with the run's concurrency limit)

mod client;
mod logger;

use crate::concurrency::AdmissionGate;

// Re-export public API
pub use client::init_client;
pub use logger::init_logger_with;

/// Initializes the admission gate that bounds simultaneous requests.
///
/// # Arguments
///
/// * `capacity` - Maximum number of requests in flight
pub fn init_gate(capacity: usize) -> AdmissionGate {
    AdmissionGate::new(capacity)
}
