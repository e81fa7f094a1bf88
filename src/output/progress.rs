//! Progress reporting
//!
//! Renders per-run progress with an indicatif bar plus tracing log lines.

use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, warn};

use crate::models::RunOutcome;

/// Per-run progress renderer for the terminal.
pub struct ProgressReporter {
    bar: ProgressBar,
}

impl ProgressReporter {
    /// Visible bar over `total` runs.
    pub fn new(total: u64) -> Self {
        let bar = ProgressBar::new(total);
        bar.set_style(bar_style());
        Self { bar }
    }

    /// Hidden bar; log lines still flow.
    pub fn hidden(total: u64) -> Self {
        let bar = ProgressBar::hidden();
        bar.set_length(total);
        Self { bar }
    }

    /// Record one completed run. The bar only advances on success;
    /// failures surface through the log and the final diagnostic.
    pub fn observe(&self, outcome: &RunOutcome) {
        if outcome.is_success() {
            debug!("{outcome}");
            self.bar.inc(1);
        } else {
            self.bar.suspend(|| warn!("{outcome}"));
        }
    }

    /// Stop rendering and clear the bar line.
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}

fn bar_style() -> ProgressStyle {
    ProgressStyle::with_template("{bar:40.cyan/blue} {pos}/{len} [{elapsed_precise}]")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
}
