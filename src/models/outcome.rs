//! Run outcome models
//!
//! Defines the run specification, per-run outcomes, and the aggregate
//! summary the executor produces.

#![allow(dead_code)]

use serde::{Deserialize, Serialize};
use std::fmt;

use super::CommandLine;

/// Specification for one stress execution. Immutable once the executor
/// starts.
#[derive(Clone, Debug)]
pub struct RunSpec {
    /// Tokenized command to invoke.
    pub command: CommandLine,
    /// Total number of independent invocations.
    pub total_runs: usize,
    /// Maximum number of invocations running at once.
    pub parallelism: usize,
}

impl RunSpec {
    pub fn new(command: CommandLine, total_runs: usize, parallelism: usize) -> Self {
        Self {
            command,
            total_runs,
            parallelism,
        }
    }
}

/// Status of a single run
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunStatus {
    Pass,
    Fail,
}

impl RunStatus {
    pub fn symbol(&self) -> &'static str {
        match self {
            RunStatus::Pass => "✓",
            RunStatus::Fail => "✗",
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, RunStatus::Pass)
    }
}

impl fmt::Display for RunStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunStatus::Pass => write!(f, "PASS"),
            RunStatus::Fail => write!(f, "FAIL"),
        }
    }
}

/// Recorded result of one run. Created exactly once per task and consumed
/// exactly once by the aggregator.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RunOutcome {
    pub run_index: usize,
    pub status: RunStatus,
    pub duration_ms: u64,
    /// Failure detail: exit status, signal, or spawn error.
    pub error: Option<String>,
    pub stdout: String,
    pub stderr: String,
}

impl RunOutcome {
    pub fn pass(
        run_index: usize,
        duration_ms: u64,
        stdout: impl Into<String>,
        stderr: impl Into<String>,
    ) -> Self {
        Self {
            run_index,
            status: RunStatus::Pass,
            duration_ms,
            error: None,
            stdout: stdout.into(),
            stderr: stderr.into(),
        }
    }

    pub fn fail(
        run_index: usize,
        duration_ms: u64,
        error: impl Into<String>,
        stdout: impl Into<String>,
        stderr: impl Into<String>,
    ) -> Self {
        Self {
            run_index,
            status: RunStatus::Fail,
            duration_ms,
            error: Some(error.into()),
            stdout: stdout.into(),
            stderr: stderr.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }
}

impl fmt::Display for RunOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} run {} [{}ms]",
            self.status.symbol(),
            self.run_index,
            self.duration_ms
        )?;
        if let Some(err) = &self.error {
            write!(f, " - {err}")?;
        }
        Ok(())
    }
}

/// Aggregate verdict across all runs. Built incrementally as outcomes
/// arrive, in completion order.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RunSummary {
    pub total: usize,
    /// Outcomes observed by the aggregator. Less than `total` when a
    /// fail-fast verdict returned early.
    pub completed: usize,
    pub passed: usize,
    pub failed: usize,
    pub duration_ms: u64,
    /// Highest number of runs that held an admission slot at once.
    pub peak_in_flight: usize,
    /// Whether every run was observed before the verdict.
    pub drained: bool,
    pub first_failure: Option<RunOutcome>,
}

impl RunSummary {
    pub fn new(total: usize) -> Self {
        Self {
            total,
            completed: 0,
            passed: 0,
            failed: 0,
            duration_ms: 0,
            peak_in_flight: 0,
            drained: false,
            first_failure: None,
        }
    }

    /// Fold one outcome into the summary.
    pub fn record(&mut self, outcome: RunOutcome) {
        self.completed += 1;
        match outcome.status {
            RunStatus::Pass => self.passed += 1,
            RunStatus::Fail => {
                self.failed += 1;
                if self.first_failure.is_none() {
                    self.first_failure = Some(outcome);
                }
            }
        }
    }

    /// Share of observed runs that passed, as a percentage.
    pub fn pass_rate(&self) -> f64 {
        if self.completed == 0 {
            0.0
        } else {
            (self.passed as f64 / self.completed as f64) * 100.0
        }
    }

    pub fn is_all_passed(&self) -> bool {
        self.first_failure.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_creation() {
        let outcome = RunOutcome::pass(3, 12, "out", "");
        assert!(outcome.is_success());
        assert_eq!(outcome.run_index, 3);
        assert_eq!(outcome.duration_ms, 12);
        assert!(outcome.error.is_none());

        let outcome = RunOutcome::fail(4, 7, "exit status 1", "", "boom");
        assert!(!outcome.is_success());
        assert_eq!(outcome.error.as_deref(), Some("exit status 1"));
        assert_eq!(outcome.stderr, "boom");
    }

    #[test]
    fn test_outcome_display() {
        let outcome = RunOutcome::fail(2, 5, "exit status 1", "", "");
        assert_eq!(outcome.to_string(), "✗ run 2 [5ms] - exit status 1");
    }

    #[test]
    fn test_summary_records_first_failure_only() {
        let mut summary = RunSummary::new(4);
        summary.record(RunOutcome::pass(0, 1, "", ""));
        summary.record(RunOutcome::fail(2, 1, "exit status 1", "", ""));
        summary.record(RunOutcome::fail(1, 1, "exit status 2", "", ""));

        assert_eq!(summary.completed, 3);
        assert_eq!(summary.passed, 1);
        assert_eq!(summary.failed, 2);
        assert!(!summary.is_all_passed());

        let first = summary.first_failure.unwrap();
        assert_eq!(first.run_index, 2);
    }

    #[test]
    fn test_summary_pass_rate() {
        let mut summary = RunSummary::new(2);
        assert_eq!(summary.pass_rate(), 0.0);

        summary.record(RunOutcome::pass(0, 1, "", ""));
        summary.record(RunOutcome::fail(1, 1, "exit status 1", "", ""));
        assert_eq!(summary.pass_rate(), 50.0);
    }

    #[test]
    fn test_summary_serializes() {
        let summary = RunSummary::new(0);
        let json = serde_json::to_string(&summary).unwrap();
        assert!(json.contains("\"total\":0"));
        assert!(json.contains("\"first_failure\":null"));
    }
}
