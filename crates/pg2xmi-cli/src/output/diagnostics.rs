//! Diagnostics printed to stderr.

use is_terminal::IsTerminal;
use owo_colors::OwoColorize;
use pg2xmi_core::{Issue, Severity, Summary};
use std::path::Path;

/// Format one issue as `pg2xmi: <level>: <message>`.
pub fn format_issue(issue: &Issue, colored: bool) -> String {
    let level = match issue.severity {
        Severity::Error => "error",
        Severity::Warning => "warning",
        Severity::Info => "info",
    };

    let level = if colored {
        match issue.severity {
            Severity::Error => level.red().bold().to_string(),
            Severity::Warning => level.yellow().to_string(),
            Severity::Info => level.blue().to_string(),
        }
    } else {
        level.to_string()
    };

    format!("pg2xmi: {level}: {}", issue.message)
}

/// Print issues to stderr. `quiet` keeps only errors.
pub fn print_issues(issues: &[Issue], quiet: bool) {
    let colored = std::io::stderr().is_terminal();
    for issue in issues
        .iter()
        .filter(|issue| !quiet || issue.severity == Severity::Error)
    {
        eprintln!("{}", format_issue(issue, colored));
    }
}

/// One-line completion summary. `destination` is the artifact path, or
/// `None` when the artifact went to stdout.
pub fn format_summary(summary: &Summary, destination: Option<&Path>) -> String {
    let counts = format!(
        "{} classes, {} attributes ({} large)",
        summary.class_count, summary.attribute_count, summary.large_column_count
    );
    match destination {
        Some(path) => format!("pg2xmi: wrote {counts} to {}", path.display()),
        None => format!("pg2xmi: wrote {counts}"),
    }
}
