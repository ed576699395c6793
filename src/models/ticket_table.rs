// src/models/ticket_table.rs

/// Text encoding the table was actually decoded with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceEncoding {
    Utf8,
    Latin1,
}

/// The `Status` column of one loaded ticket file, in row order.
///
/// Only the status is retained per row; `Ticket ID` is required to be present
/// in the header but its values are not interpreted.
#[derive(Debug, Clone)]
pub struct TicketTable {
    pub statuses: Vec<String>,
    pub encoding: SourceEncoding,
}

impl TicketTable {
    #[inline]
    #[must_use]
    pub const fn new(statuses: Vec<String>, encoding: SourceEncoding) -> Self {
        Self { statuses, encoding }
    }

    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.statuses.len()
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.statuses.is_empty()
    }
}
