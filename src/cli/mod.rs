//! CLI argument parsing
//!
//! Defines the command-line interface using clap.

use clap::Parser;

/// A tool for stress testing commands
#[derive(Parser, Debug)]
#[command(name = "stress")]
#[command(version = "0.1.0")]
#[command(about = "Run a command many times with bounded parallelism")]
#[command(long_about = None)]
pub struct Args {
    /// Command to run, split on whitespace (shell quoting is not honored)
    #[arg(long)]
    pub cmd: String,

    /// Number of times to run the command [default: 100]
    #[arg(short, long)]
    pub runs: Option<usize>,

    /// Number of parallel executions [default: available CPUs / 4, min 1]
    #[arg(short, long)]
    pub parallel: Option<usize>,

    /// Output format (table, json, json-pretty, summary) [default: table]
    #[arg(short, long)]
    pub format: Option<String>,

    /// Wait for every run to finish instead of stopping at the first failure
    #[arg(long)]
    pub drain: bool,

    /// Disable the progress bar
    #[arg(long)]
    pub no_progress: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
