//! Configuration handling
//!
//! Merges CLI arguments, environment overrides, and built-in defaults
//! into the settings for one invocation.

mod env;

pub use env::EnvConfig;

use crate::cli::Args;
use crate::models::{CommandLine, RunSpec, StressError};
use crate::output::OutputFormat;

/// Default run count when neither `--runs` nor STRESS_RUNS is set.
pub const DEFAULT_RUNS: usize = 100;

/// Fully resolved settings for one invocation.
#[derive(Clone, Debug)]
pub struct Settings {
    pub spec: RunSpec,
    pub format: OutputFormat,
    pub drain: bool,
    pub no_progress: bool,
    pub verbose: bool,
}

impl Settings {
    /// Resolve settings: explicit CLI flags win over environment
    /// variables, which win over built-in defaults.
    pub fn resolve(args: &Args, env: &EnvConfig) -> Result<Self, StressError> {
        let command = CommandLine::parse(&args.cmd)?;

        let total_runs = args.runs.or(env.runs).unwrap_or(DEFAULT_RUNS);
        let parallelism = args
            .parallel
            .or(env.parallel)
            .unwrap_or_else(default_parallelism);

        let format_name = args
            .format
            .as_deref()
            .or(env.format.as_deref())
            .unwrap_or("table");
        let format = OutputFormat::from_str(format_name)
            .ok_or_else(|| StressError::InvalidFormat(format_name.to_string()))?;

        Ok(Self {
            spec: RunSpec::new(command, total_runs, parallelism),
            format,
            drain: args.drain || env.drain.unwrap_or(false),
            no_progress: args.no_progress || env.no_progress.unwrap_or(false),
            verbose: args.verbose || env.verbose.unwrap_or(false),
        })
    }
}

/// Default concurrency cap: a quarter of the available processing units,
/// with a minimum of 1.
pub fn default_parallelism() -> usize {
    let cpus = std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1);
    (cpus / 4).max(1)
}
