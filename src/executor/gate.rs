//! Admission gate
//!
//! Bounds the number of concurrently executing runs.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::{OwnedSemaphorePermit, Semaphore};

/// Counting gate that admits at most a fixed number of holders at once.
///
/// Clones share the underlying capacity. Occupancy is tracked so callers
/// can observe the current and peak number of admitted runs.
#[derive(Clone)]
pub struct AdmissionGate {
    semaphore: Arc<Semaphore>,
    occupancy: Arc<Occupancy>,
}

#[derive(Default)]
struct Occupancy {
    in_flight: AtomicUsize,
    high_water: AtomicUsize,
}

/// One unit of admission capacity, held while a child process executes.
/// Dropping the slot releases the capacity on every exit path, including
/// panics in the execution path.
pub struct AdmissionSlot {
    _permit: OwnedSemaphorePermit,
    occupancy: Arc<Occupancy>,
}

impl Drop for AdmissionSlot {
    fn drop(&mut self) {
        self.occupancy.in_flight.fetch_sub(1, Ordering::SeqCst);
    }
}

impl AdmissionGate {
    pub fn new(capacity: usize) -> Self {
        Self {
            semaphore: Arc::new(Semaphore::new(capacity)),
            occupancy: Arc::new(Occupancy::default()),
        }
    }

    /// Wait until a slot is free and take it.
    pub async fn admit(&self) -> AdmissionSlot {
        let permit = self
            .semaphore
            .clone()
            .acquire_owned()
            .await
            .expect("admission gate semaphore is never closed");

        let now = self.occupancy.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.occupancy.high_water.fetch_max(now, Ordering::SeqCst);

        AdmissionSlot {
            _permit: permit,
            occupancy: self.occupancy.clone(),
        }
    }

    /// Runs currently holding a slot.
    pub fn in_flight(&self) -> usize {
        self.occupancy.in_flight.load(Ordering::SeqCst)
    }

    /// Highest concurrent occupancy observed so far.
    pub fn high_water(&self) -> usize {
        self.occupancy.high_water.load(Ordering::SeqCst)
    }
}
