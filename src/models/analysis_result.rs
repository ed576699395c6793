// src/models/analysis_result.rs
use std::collections::BTreeMap;

use serde::Serialize;

use super::StatusTally;

/// Outcome of one sprint analysis.
///
/// `status_counts` always sums to `total_tickets`, and every status in it has a
/// matching entry in `status_percentages`. Both are empty for an empty table.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AnalysisResult {
    pub total_tickets: u64,
    pub status_counts: StatusTally,
    pub status_percentages: BTreeMap<String, f64>,
}

impl AnalysisResult {
    #[inline]
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds the result from a finished tally, deriving full-precision
    /// percentages. An empty tally yields the empty result.
    #[must_use]
    #[allow(clippy::cast_precision_loss, reason = "ticket counts stay far below 2^52")]
    pub fn from_tally(status_counts: StatusTally) -> Self {
        let total_tickets = status_counts.total();
        if total_tickets == 0 {
            return Self::empty();
        }

        let status_percentages = status_counts
            .iter()
            .map(|entry| {
                let share = (entry.count as f64 / total_tickets as f64) * 100.0;
                (entry.status.clone(), share)
            })
            .collect();

        Self {
            total_tickets,
            status_counts,
            status_percentages,
        }
    }

    #[inline]
    #[must_use]
    pub fn percentage(&self, status: &str) -> Option<f64> {
        self.status_percentages.get(status).copied()
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.total_tickets == 0
    }
}
