// src/core/loader.rs
use std::fs;
use std::path::Path;

use csv::{Position, ReaderBuilder, StringRecord};
use tracing::{debug, warn};

use crate::error::{ReportError, Result};
use crate::models::{SourceEncoding, TicketTable};
use crate::utils::decode_latin1;

pub const STATUS_COLUMN: &str = "Status";
pub const TICKET_ID_COLUMN: &str = "Ticket ID";
pub const REQUIRED_COLUMNS: [&str; 2] = [STATUS_COLUMN, TICKET_ID_COLUMN];

/// Label used for rows whose `Status` cell is empty.
pub const BLANK_STATUS: &str = "(blank)";

/// Reads the whole file and parses it with [`parse_ticket_table`].
///
/// # Errors
///
/// * [`ReportError::NotFound`], [`ReportError::PermissionDenied`] or
///   [`ReportError::Io`] if the file cannot be read
/// * [`ReportError::Schema`] if a required column is missing
/// * [`ReportError::Parse`] if the CSV content is malformed
pub fn load_ticket_table(path: &Path) -> Result<TicketTable> {
    let bytes = fs::read(path).map_err(|err| ReportError::from_io(path, err))?;
    debug!(path = %path.display(), bytes = bytes.len(), "read ticket file");
    parse_ticket_table(bytes)
}

/// Decodes `bytes` (UTF-8, falling back to Latin-1 once) and extracts the
/// `Status` column.
///
/// # Errors
///
/// * [`ReportError::Schema`] if the header lacks `Status` or `Ticket ID`
/// * [`ReportError::Parse`] if a record has more fields than the header
///
/// Records with fewer fields than the header are accepted; a missing `Status`
/// cell counts as [`BLANK_STATUS`].
pub fn parse_ticket_table(bytes: Vec<u8>) -> Result<TicketTable> {
    let (text, encoding) = decode_text(bytes);
    let body = text.strip_prefix('\u{feff}').unwrap_or(text.as_str());

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(body.as_bytes());

    let headers = reader.headers()?.clone();
    let status_index = require_columns(&headers)?;

    let mut statuses = Vec::new();
    for (index, record) in reader.records().enumerate() {
        let record = record?;
        if record.len() > headers.len() {
            let line = record.position().map_or_else(
                || u64::try_from(index).unwrap_or(u64::MAX).saturating_add(2),
                Position::line,
            );
            return Err(ReportError::Parse(format!(
                "Expected {} fields in line {line}, saw {}",
                headers.len(),
                record.len()
            )));
        }
        let status = match record.get(status_index) {
            Some(value) if !value.is_empty() => value,
            _ => BLANK_STATUS,
        };
        statuses.push(status.to_owned());
    }

    let table = TicketTable::new(statuses, encoding);
    debug!(rows = table.len(), ?encoding, "parsed ticket table");
    Ok(table)
}

fn decode_text(bytes: Vec<u8>) -> (String, SourceEncoding) {
    match String::from_utf8(bytes) {
        Ok(text) => (text, SourceEncoding::Utf8),
        Err(err) => {
            warn!(
                valid_up_to = err.utf8_error().valid_up_to(),
                "ticket file is not valid UTF-8, decoding as Latin-1"
            );
            (decode_latin1(err.as_bytes()), SourceEncoding::Latin1)
        }
    }
}

/// Returns the index of the `Status` column once every required column is
/// known to be present.
fn require_columns(headers: &StringRecord) -> Result<usize> {
    let position = |name: &str| headers.iter().position(|h| h == name);

    let mut missing: Vec<String> = REQUIRED_COLUMNS
        .into_iter()
        .filter(|&name| position(name).is_none())
        .map(str::to_owned)
        .collect();

    match position(STATUS_COLUMN) {
        Some(index) if missing.is_empty() => Ok(index),
        _ => {
            missing.sort();
            Err(ReportError::Schema { missing })
        }
    }
}
