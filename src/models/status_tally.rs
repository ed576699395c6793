// src/models/status_tally.rs
use serde::ser::{Serialize, SerializeMap as _, Serializer};
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusCount {
    pub status: String,
    pub count: u64,
}

/// Occurrence count per distinct status label, kept in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusTally {
    entries: Vec<StatusCount>,
    // Label -> position in `entries`.
    index: HashMap<String, usize>,
}

impl StatusTally {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one occurrence of `status`.
    pub fn record(&mut self, status: &str) {
        if let Some(&position) = self.index.get(status) {
            if let Some(entry) = self.entries.get_mut(position) {
                entry.count = entry.count.saturating_add(1);
            }
        } else {
            self.index.insert(status.to_owned(), self.entries.len());
            self.entries.push(StatusCount {
                status: status.to_owned(),
                count: 1,
            });
        }
    }

    #[inline]
    #[must_use]
    pub fn get(&self, status: &str) -> Option<u64> {
        self.index
            .get(status)
            .and_then(|&position| self.entries.get(position))
            .map(|e| e.count)
    }

    #[inline]
    #[must_use]
    pub fn total(&self) -> u64 {
        self.entries.iter().map(|e| e.count).sum()
    }

    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = &StatusCount> {
        self.entries.iter()
    }

    /// Entries by descending count. The sort is stable, so equal counts keep
    /// first-seen order.
    #[must_use]
    pub fn ranked(&self) -> Vec<&StatusCount> {
        let mut ranked: Vec<&StatusCount> = self.entries.iter().collect();
        ranked.sort_by(|a, b| b.count.cmp(&a.count));
        ranked
    }
}

impl Serialize for StatusTally {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for entry in self.ranked() {
            map.serialize_entry(&entry.status, &entry.count)?;
        }
        map.end()
    }
}
