// src/core/report.rs
use std::io::{self, Write};

use crate::models::AnalysisResult;

pub const RULE_WIDTH: usize = 40;
pub const STATUS_WIDTH: usize = 15;
pub const TITLE: &str = "       SPRINT STATUS REPORT";

/// Percentage points per `#` in the bar, so 100% draws 20 characters.
pub const PERCENT_PER_BAR_CELL: f64 = 5.0;

/// Writes the fixed-width status report for `result`.
///
/// Rows appear by descending count, ties in first-seen order. Labels longer
/// than the status column are cut to fit.
///
/// # Errors
///
/// Returns any error raised by `out`.
pub fn render_report<W: Write>(result: &AnalysisResult, out: &mut W) -> io::Result<()> {
    let heavy = "=".repeat(RULE_WIDTH);
    let light = "-".repeat(RULE_WIDTH);

    writeln!(out)?;
    writeln!(out, "{heavy}")?;
    writeln!(out, "{TITLE}")?;
    writeln!(out, "{heavy}")?;
    writeln!(out, "Total Tickets: {}", result.total_tickets)?;
    writeln!(out, "{light}")?;
    writeln!(out, "Status Breakdown:")?;
    writeln!(out, "{light}")?;

    for entry in result.status_counts.ranked() {
        let percentage = result.percentage(&entry.status).unwrap_or_default();
        writeln!(
            out,
            "{:<width$.width$} | {:>3} ({:>5.1}%) {}",
            entry.status,
            entry.count,
            percentage,
            bar(percentage),
            width = STATUS_WIDTH,
        )?;
    }

    writeln!(out, "{heavy}")?;
    writeln!(out)?;
    Ok(())
}

/// Renders the report into a string.
#[must_use]
pub fn format_report(result: &AnalysisResult) -> String {
    let mut buffer = Vec::new();
    // Writing into a Vec cannot fail.
    let _ = render_report(result, &mut buffer);
    String::from_utf8_lossy(&buffer).into_owned()
}

#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "percentages lie in 0..=100"
)]
fn bar(percentage: f64) -> String {
    let cells = (percentage / PERCENT_PER_BAR_CELL).floor().max(0.0) as usize;
    "#".repeat(cells)
}
