//! CLI output formatting.

use std::io::{self, Write};
use std::path::Path;

use fibseq_core::{SequenceReport, SequenceStats};

/// Format a number with thousand separators.
#[must_use]
pub fn format_number(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut result = String::new();
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    if n < 0 {
        result.push('-');
    }
    result.chars().rev().collect()
}

/// Label/value lines describing a generated sequence.
#[must_use]
pub fn stats_lines(stats: &SequenceStats, details: bool) -> Vec<(&'static str, String)> {
    let mut lines = vec![
        ("Count", stats.count.to_string()),
        ("Sum", format_number(stats.sum)),
    ];
    if details {
        lines.push(("Even", stats.even_count.to_string()));
        lines.push(("Odd", stats.odd_count.to_string()));
    }
    lines
}

/// Write a JSON report to a file.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be created or written.
pub fn write_report(path: &Path, report: &SequenceReport) -> io::Result<()> {
    let json = report.to_json().map_err(io::Error::other)?;
    let mut file = std::fs::File::create(path)?;
    writeln!(file, "{json}")?;
    tracing::debug!(path = %path.display(), count = report.count, "wrote report");
    Ok(())
}
