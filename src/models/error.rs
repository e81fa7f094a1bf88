//! Error types
//!
//! Configuration errors raised before any run is launched.

use thiserror::Error;

/// Errors that reject an invocation up front. Per-run failures are not
/// errors; they are recorded as [`RunOutcome`](super::RunOutcome) values.
#[derive(Debug, Error)]
pub enum StressError {
    /// The `--cmd` string contained no tokens.
    #[error("command is empty")]
    EmptyCommand,

    /// Parallelism must admit at least one run.
    #[error("parallelism must be at least 1 (got {0})")]
    InvalidParallelism(usize),

    /// An environment override did not parse.
    #[error("invalid value for {var}: {value:?}")]
    InvalidEnvValue { var: String, value: String },

    /// Unrecognized output format name.
    #[error("unknown output format: {0}")]
    InvalidFormat(String),
}
