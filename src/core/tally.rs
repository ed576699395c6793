// src/core/tally.rs
use crate::models::{AnalysisResult, StatusTally, TicketTable};

/// Counts tickets per status and derives the percentage breakdown.
///
/// An empty table gives [`AnalysisResult::empty`]; no division happens in that
/// case.
#[must_use]
pub fn tally_statuses(table: &TicketTable) -> AnalysisResult {
    let mut tally = StatusTally::new();
    for status in &table.statuses {
        tally.record(status);
    }
    AnalysisResult::from_tally(tally)
}
