// src/models.rs
mod analysis_result;
mod status_tally;
mod ticket_table;

pub use analysis_result::AnalysisResult;
pub use status_tally::{StatusCount, StatusTally};
pub use ticket_table::{SourceEncoding, TicketTable};
