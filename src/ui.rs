//! Formatting for the single line a run reports.

use crate::cli::orchestration::WorkflowResult;

/// Prefix on every line the tool prints.
pub const PREFIX: &str = "[bump_versions]";

/// Format the success summary.
pub fn format_summary(result: &WorkflowResult) -> String {
    format!("{} {}", PREFIX, result)
}

/// Format an error line.
pub fn format_error(message: &str) -> String {
    format!("{} ERROR: {}", PREFIX, message)
}

/// Print the success summary to stdout.
pub fn display_summary(result: &WorkflowResult) {
    println!("{}", format_summary(result));
}

/// Print an error line to stderr.
pub fn display_error(message: &str) {
    eprintln!("{}", format_error(message));
}
