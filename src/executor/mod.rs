//! Bounded-concurrency execution engine
//!
//! Provides admission gating, single-run execution, and outcome
//! aggregation.

mod engine;
mod gate;
mod task;

pub use engine::{Executor, FailurePolicy};
pub use gate::{AdmissionGate, AdmissionSlot};
pub use task::run_once;
