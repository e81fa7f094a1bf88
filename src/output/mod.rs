//! Output rendering
//!
//! Summary formatting and progress display for the CLI layer. The
//! executor never prints; everything user-visible goes through here.

mod formatter;
mod progress;

pub use formatter::{OutputFormat, SummaryFormatter};
pub use progress::ProgressReporter;
