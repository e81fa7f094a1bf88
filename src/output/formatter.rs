//! Output formatters for run summaries
//!
//! Provides table, JSON, and brief summary rendering.

#![allow(dead_code)]

use crate::models::RunSummary;

/// Output format options
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
    JsonPretty,
    Summary,
}

impl OutputFormat {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "table" => Some(OutputFormat::Table),
            "json" => Some(OutputFormat::Json),
            "json-pretty" | "jsonpretty" => Some(OutputFormat::JsonPretty),
            "summary" => Some(OutputFormat::Summary),
            _ => None,
        }
    }

    /// Machine formats suppress the progress bar and per-run chatter.
    pub fn is_machine(&self) -> bool {
        matches!(self, OutputFormat::Json | OutputFormat::JsonPretty)
    }
}

/// Summary formatter
pub struct SummaryFormatter {
    format: OutputFormat,
    colorize: bool,
}

impl SummaryFormatter {
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            colorize: true,
        }
    }

    pub fn no_color(mut self) -> Self {
        self.colorize = false;
        self
    }

    /// Format the aggregate summary of a stress run.
    pub fn format_summary(&self, summary: &RunSummary) -> String {
        match self.format {
            OutputFormat::Table => self.format_table(summary),
            OutputFormat::Json => serde_json::to_string(summary).unwrap_or_default(),
            OutputFormat::JsonPretty => {
                serde_json::to_string_pretty(summary).unwrap_or_default()
            }
            OutputFormat::Summary => self.format_brief(summary),
        }
    }

    fn format_table(&self, summary: &RunSummary) -> String {
        let mut output = String::new();

        let passed_str = if self.colorize && summary.passed > 0 {
            format!("\x1b[32m{}\x1b[0m", summary.passed)
        } else {
            summary.passed.to_string()
        };
        let failed_str = if self.colorize && summary.failed > 0 {
            format!("\x1b[31m{}\x1b[0m", summary.failed)
        } else {
            summary.failed.to_string()
        };

        output.push_str("\n╔════════════════════════════════════════════╗\n");
        output.push_str(&format!("║ {:<42} ║\n", "Stress Results"));
        output.push_str("╠════════════════════════════════════════════╣\n");
        output.push_str(&format!("║ {:<20} {:>21} ║\n", "Total runs", summary.total));
        output.push_str(&format!(
            "║ {:<20} {:>21} ║\n",
            "Completed", summary.completed
        ));
        output.push_str(&row_colored("Passed", &passed_str, summary.passed));
        output.push_str(&row_colored("Failed", &failed_str, summary.failed));
        output.push_str(&format!(
            "║ {:<20} {:>20.1}% ║\n",
            "Pass rate",
            summary.pass_rate()
        ));
        output.push_str(&format!(
            "║ {:<20} {:>21} ║\n",
            "Peak parallel", summary.peak_in_flight
        ));
        output.push_str(&format!(
            "║ {:<20} {:>19}ms ║\n",
            "Duration", summary.duration_ms
        ));
        output.push_str("╚════════════════════════════════════════════╝\n");

        if !summary.drained {
            output.push_str("(stopped at first failure; remaining runs not awaited)\n");
        }

        if let Some(failure) = &summary.first_failure {
            output.push_str(&format!(
                "\nFirst failure: run {} ({})\n",
                failure.run_index,
                failure.error.as_deref().unwrap_or("unknown error")
            ));
            if !failure.stderr.is_empty() {
                output.push_str("--- captured stderr ---\n");
                output.push_str(failure.stderr.trim_end());
                output.push('\n');
            }
        }

        output
    }

    fn format_brief(&self, summary: &RunSummary) -> String {
        let symbol = if summary.is_all_passed() { "✓" } else { "✗" };
        format!(
            "{} {}/{} passed ({:.1}%) in {}ms",
            symbol,
            summary.passed,
            summary.completed,
            summary.pass_rate(),
            summary.duration_ms
        )
    }
}

// ANSI escapes throw off format! width padding; pad against the plain
// value instead.
fn row_colored(label: &str, value: &str, plain: usize) -> String {
    let pad = 21usize.saturating_sub(plain.to_string().len());
    format!("║ {:<20} {}{} ║\n", label, " ".repeat(pad), value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RunOutcome;

    fn sample_summary() -> RunSummary {
        let mut summary = RunSummary::new(3);
        summary.record(RunOutcome::pass(0, 10, "", ""));
        summary.record(RunOutcome::pass(2, 12, "", ""));
        summary.record(RunOutcome::fail(1, 8, "exit status 1", "", "boom"));
        summary.duration_ms = 30;
        summary.peak_in_flight = 2;
        summary.drained = true;
        summary
    }

    #[test]
    fn test_format_from_str() {
        assert_eq!(OutputFormat::from_str("table"), Some(OutputFormat::Table));
        assert_eq!(OutputFormat::from_str("JSON"), Some(OutputFormat::Json));
        assert_eq!(
            OutputFormat::from_str("json-pretty"),
            Some(OutputFormat::JsonPretty)
        );
        assert_eq!(OutputFormat::from_str("xml"), None);
    }

    #[test]
    fn test_machine_formats() {
        assert!(OutputFormat::Json.is_machine());
        assert!(OutputFormat::JsonPretty.is_machine());
        assert!(!OutputFormat::Table.is_machine());
        assert!(!OutputFormat::Summary.is_machine());
    }

    #[test]
    fn test_table_contains_counts_and_failure() {
        let text = SummaryFormatter::new(OutputFormat::Table)
            .no_color()
            .format_summary(&sample_summary());

        assert!(text.contains("Stress Results"));
        assert!(text.contains("Total runs"));
        assert!(text.contains("First failure: run 1 (exit status 1)"));
        assert!(text.contains("boom"));
    }

    #[test]
    fn test_json_is_parseable() {
        let text =
            SummaryFormatter::new(OutputFormat::Json).format_summary(&sample_summary());
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();

        assert_eq!(value["total"], 3);
        assert_eq!(value["failed"], 1);
        assert_eq!(value["first_failure"]["run_index"], 1);
    }

    #[test]
    fn test_brief_line() {
        let text =
            SummaryFormatter::new(OutputFormat::Summary).format_summary(&sample_summary());
        assert_eq!(text, "✗ 2/3 passed (66.7%) in 30ms");
    }
}
