//! Fixed-capacity admission gate.
//!
//! A unit of work may only start its network call while holding a
//! [`GateSlot`]. Slots are returned when the guard is dropped, so every exit
//! path of a worker (including a panic) gives its slot back.

use std::sync::Arc;

use tokio::sync::{OwnedSemaphorePermit, Semaphore};

use crate::error_handling::GateClosed;

/// Counting gate with a fixed number of slots.
///
/// Cloning shares the same underlying slots.
#[derive(Debug, Clone)]
pub struct AdmissionGate {
    semaphore: Arc<Semaphore>,
    capacity: usize,
}

/// One occupied slot of an [`AdmissionGate`]. Released on drop.
#[derive(Debug)]
#[must_use = "the slot is released as soon as the guard is dropped"]
pub struct GateSlot {
    _permit: OwnedSemaphorePermit,
}

impl AdmissionGate {
    /// Creates a gate with `capacity` slots.
    ///
    /// A capacity of zero would never admit anything; callers validate the
    /// configured limit before getting here.
    pub fn new(capacity: usize) -> Self {
        debug_assert!(capacity > 0, "admission gate needs at least one slot");
        Self {
            semaphore: Arc::new(Semaphore::new(capacity)),
            capacity,
        }
    }

    /// Waits until a slot is free and occupies it.
    ///
    /// # Errors
    ///
    /// Returns `GateClosed` if [`close`](Self::close) has been called.
    pub async fn acquire(&self) -> Result<GateSlot, GateClosed> {
        let permit = Arc::clone(&self.semaphore)
            .acquire_owned()
            .await
            .map_err(|_| GateClosed)?;
        Ok(GateSlot { _permit: permit })
    }

    /// Stops accepting acquisitions. Slots already held stay valid.
    pub fn close(&self) {
        self.semaphore.close();
    }

    /// Whether [`close`](Self::close) has been called.
    pub fn is_closed(&self) -> bool {
        self.semaphore.is_closed()
    }

    /// Total number of slots.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Slots currently free.
    pub fn available(&self) -> usize {
        self.semaphore.available_permits()
    }

    /// Slots currently held.
    pub fn in_use(&self) -> usize {
        self.capacity.saturating_sub(self.available())
    }
}
