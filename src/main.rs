//! stress - run a command many times with bounded parallelism
//!
//! Repeatedly executes an external command, admitting at most a fixed
//! number of concurrent invocations, and reports aggregate pass/fail.
//! The first failing run's exit detail and captured stderr become the
//! terminal diagnostic.
//!
//! ## Usage
//!
//! ```bash
//! # 100 runs, parallelism derived from the CPU count
//! stress --cmd "echo hello"
//!
//! # 500 runs, 8 at a time
//! stress --cmd "./flaky-test.sh" --runs 500 --parallel 8
//!
//! # Keep going after a failure and report everything at the end
//! stress --cmd "cargo test --quiet" --runs 50 --drain
//! ```

use anyhow::Result;
use clap::Parser;
use tracing::{debug, error, info};

mod cli;
mod config;
mod executor;
mod models;
mod output;
mod utils;

use cli::Args;
use config::{EnvConfig, Settings};
use executor::{Executor, FailurePolicy};
use output::{ProgressReporter, SummaryFormatter};
use utils::{init_logger, LogLevel};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let env = EnvConfig::load()?;
    let settings = Settings::resolve(&args, &env)?;

    init_logger(if settings.verbose {
        LogLevel::Debug
    } else {
        LogLevel::Info
    });

    if env.has_any() {
        debug!("STRESS_* environment overrides are active");
    }

    info!(
        "Stressing `{}`: {} runs, {} in parallel",
        settings.spec.command, settings.spec.total_runs, settings.spec.parallelism
    );

    let policy = if settings.drain {
        FailurePolicy::Drain
    } else {
        FailurePolicy::FailFast
    };
    let executor = Executor::new(settings.spec.clone())?.with_policy(policy);

    let progress = if settings.no_progress || settings.format.is_machine() {
        ProgressReporter::hidden(settings.spec.total_runs as u64)
    } else {
        ProgressReporter::new(settings.spec.total_runs as u64)
    };

    let summary = executor.run_with(|outcome| progress.observe(outcome)).await;
    progress.finish();

    let formatter = SummaryFormatter::new(settings.format);
    println!("{}", formatter.format_summary(&summary));

    if let Some(failure) = &summary.first_failure {
        error!(
            "run {} failed: {}",
            failure.run_index,
            failure.error.as_deref().unwrap_or("unknown error")
        );
        if !failure.stderr.is_empty() {
            error!("captured stderr:\n{}", failure.stderr.trim_end());
        }
        std::process::exit(1);
    }

    Ok(())
}
