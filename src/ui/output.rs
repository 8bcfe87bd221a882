//! ui::output
//!
//! Output formatting and display.
//!
//! # Design
//!
//! The report goes to stdout and nothing else does: diagnostics and errors
//! go to stderr. Rendering writes to any [`Write`] so it can be tested
//! without capturing the process's stdout.

use std::fmt::Display;
use std::io::{self, Write};

use crate::engine::ComparisonReport;

/// Print an error message (always shown).
pub fn error(message: impl Display) {
    eprintln!("error: {}", message);
}

/// Format a list of items.
pub fn format_list<T: Display>(items: &[T], prefix: &str) -> String {
    items
        .iter()
        .map(|item| format!("{}{}", prefix, item))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Write the human-readable report.
///
/// The skipped block only appears when something was skipped. The unmatched
/// block, followed by both manifest URLs, only appears when something was
/// unmatched.
pub fn write_report<W: Write>(out: &mut W, report: &ComparisonReport) -> io::Result<()> {
    let comparison = &report.comparison;

    writeln!(out, "Comparing versions for {}...", report.distro)?;
    for mismatch in &comparison.mismatches {
        writeln!(
            out,
            " - {} has a version mismatch:\n\t{} (rosdistro)\t!==\t{} (ros2.repos)",
            mismatch.name, mismatch.rosdistro, mismatch.ros2_repos
        )?;
    }

    if !comparison.skipped.is_empty() {
        writeln!(out, "\nSkipped the following repos:")?;
        writeln!(out, "{}", format_list(&comparison.skipped, " - "))?;
    }

    if !comparison.unmatched.is_empty() {
        writeln!(
            out,
            "\nKeys for the following repos could not be matched- they probably don't have \
             the same key in the ros2.repos file and in the rosdistro file:"
        )?;
        writeln!(out, "{}", format_list(&comparison.unmatched, " - "))?;
        writeln!(out, "\nHere are the URLs to the rosdistro and ros2.repos files:")?;
        writeln!(out, " - rosdistro:  {}", report.urls.rosdistro)?;
        writeln!(out, " - ros2.repos: {}", report.urls.ros2_repos)?;
    }

    Ok(())
}
