// src/core/analyzer.rs
use std::env;
use std::io::{self, Write};
use std::path::Path;

use tracing::info;

use crate::core::loader::load_ticket_table;
use crate::core::report::render_report;
use crate::core::tally::tally_statuses;
use crate::core::validate::resolve_input_path;
use crate::error::Result;
use crate::models::AnalysisResult;

/// Analyzes a sprint export and prints the status report to stdout.
///
/// The file must live under the current working directory. See
/// [`analyze_sprint_data_within`] for the full contract.
///
/// # Errors
///
/// Fails if the working directory cannot be determined, or for any reason
/// listed on [`analyze_sprint_data_within`].
pub fn analyze_sprint_data(path: impl AsRef<Path>) -> Result<AnalysisResult> {
    let root = env::current_dir()?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    analyze_sprint_data_within(path.as_ref(), &root, &mut out)
}

/// Validates, loads and tallies `path`, then writes the report to `out`.
///
/// Nothing is written when any step fails, or when the file holds no
/// tickets.
///
/// # Errors
///
/// * [`crate::ReportError::NotFound`] if the file does not exist
/// * [`crate::ReportError::InvalidFormat`] if it is not a `.csv` file
/// * [`crate::ReportError::PathViolation`] if it resolves outside `allowed_root`
/// * [`crate::ReportError::Schema`] if `Status` or `Ticket ID` is missing
/// * [`crate::ReportError::Parse`] if the CSV is malformed
/// * [`crate::ReportError::PermissionDenied`] or [`crate::ReportError::Io`] for
///   read failures, including failures writing to `out`
pub fn analyze_sprint_data_within<W: Write>(
    path: &Path,
    allowed_root: &Path,
    out: &mut W,
) -> Result<AnalysisResult> {
    let result = analyze_file(path, allowed_root)?;
    if !result.is_empty() {
        render_report(&result, out)?;
        out.flush()?;
    }
    Ok(result)
}

/// Same validation and aggregation as [`analyze_sprint_data_within`], without
/// rendering anything.
///
/// # Errors
///
/// See [`analyze_sprint_data_within`].
pub fn analyze_file(path: &Path, allowed_root: &Path) -> Result<AnalysisResult> {
    let resolved = resolve_input_path(path, allowed_root)?;
    let table = load_ticket_table(&resolved)?;
    let result = tally_statuses(&table);
    info!(
        path = %resolved.display(),
        encoding = ?table.encoding,
        tickets = result.total_tickets,
        statuses = result.status_counts.len(),
        "analyzed sprint data"
    );
    Ok(result)
}
