// src/lib.rs
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod utils;

pub use cli::{Args, DEFAULT_DATA_FILE, run};
pub use config::{CONFIG_FILE_NAME, Config};
pub use crate::core::analyzer::{analyze_file, analyze_sprint_data, analyze_sprint_data_within};
pub use crate::core::loader::{BLANK_STATUS, load_ticket_table, parse_ticket_table};
pub use crate::core::report::{format_report, render_report};
pub use crate::core::tally::tally_statuses;
pub use crate::core::validate::resolve_input_path;
pub use error::ReportError;
pub use models::{AnalysisResult, SourceEncoding, StatusCount, StatusTally, TicketTable};
