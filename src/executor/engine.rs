//! Bounded-concurrency execution engine
//!
//! Fans out one task per run, gates admission, and aggregates outcomes
//! into a verdict.

use futures::future::join_all;
use std::time::Instant;
use tokio::sync::mpsc;

use super::gate::AdmissionGate;
use super::task;
use crate::models::{RunOutcome, RunSpec, RunSummary, StressError};

/// What to do with outstanding runs once a failure has been observed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Return as soon as the first failed outcome arrives. Runs that have
    /// already started are left to finish in the background; nothing is
    /// cancelled. If the process exits right after, those children are
    /// orphaned.
    #[default]
    FailFast,
    /// Wait for every run to report before returning the verdict.
    Drain,
}

/// Bounded-concurrency command executor.
///
/// Every run is spawned up front and competes for an admission slot, so a
/// failure in one run never prevents later runs from launching.
pub struct Executor {
    spec: RunSpec,
    policy: FailurePolicy,
    gate: AdmissionGate,
}

impl Executor {
    /// Create an executor for the given spec. Rejects a parallelism of
    /// zero before any task starts.
    pub fn new(spec: RunSpec) -> Result<Self, StressError> {
        if spec.parallelism == 0 {
            return Err(StressError::InvalidParallelism(spec.parallelism));
        }

        let gate = AdmissionGate::new(spec.parallelism);
        Ok(Self {
            spec,
            policy: FailurePolicy::default(),
            gate,
        })
    }

    pub fn with_policy(mut self, policy: FailurePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Execute all runs, invoking `on_outcome` for each completed run in
    /// completion order (not launch order). The callback is presentation
    /// only; the verdict is built here.
    pub async fn run_with<F>(&self, mut on_outcome: F) -> RunSummary
    where
        F: FnMut(&RunOutcome),
    {
        let start = Instant::now();
        let mut summary = RunSummary::new(self.spec.total_runs);

        if self.spec.total_runs == 0 {
            summary.drained = true;
            return summary;
        }

        // Every task holds a sender clone; the channel closes once the
        // last task has reported.
        let (tx, mut rx) = mpsc::channel::<RunOutcome>(self.spec.total_runs);
        let mut handles = Vec::with_capacity(self.spec.total_runs);

        for run_index in 0..self.spec.total_runs {
            let gate = self.gate.clone();
            let tx = tx.clone();
            let command = self.spec.command.clone();

            handles.push(tokio::spawn(async move {
                let _slot = gate.admit().await;
                let outcome = task::run_once(&command, run_index).await;
                // After a fail-fast return the receiver is gone; the late
                // outcome is dropped with the send error.
                let _ = tx.send(outcome).await;
            }));
        }

        drop(tx);
        let completion = tokio::spawn(join_all(handles));

        while let Some(outcome) = rx.recv().await {
            on_outcome(&outcome);
            let failed = !outcome.is_success();
            summary.record(outcome);

            if failed && self.policy == FailurePolicy::FailFast {
                summary.peak_in_flight = self.gate.high_water();
                summary.duration_ms = start.elapsed().as_millis() as u64;
                return summary;
            }
        }

        // Channel closed: every task has reported. Awaiting the handles
        // surfaces panics from the run tasks.
        let _ = completion.await;

        summary.drained = true;
        summary.peak_in_flight = self.gate.high_water();
        summary.duration_ms = start.elapsed().as_millis() as u64;
        summary
    }

    /// Execute all runs without observing individual outcomes.
    pub async fn run(&self) -> RunSummary {
        self.run_with(|_| {}).await
    }
}
