//! Concurrency primitives for the dispatch pipeline.
//!
//! - [`AdmissionGate`]: bounds how many fetches run at once
//! - [`WorkTracker`]: lets the main flow wait for every admitted URL

mod gate;
mod join;

pub use gate::{AdmissionGate, GateSlot};
pub use join::{WorkGuard, WorkTracker};
