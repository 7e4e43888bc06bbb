//! Output formatting modules.

pub mod diagnostics;

pub use diagnostics::{format_issue, format_summary, print_issues};
