//! Change journal.
//!
//! An immutable, bounded record of which cursors were written and when.
//! It carries no state values, only addresses and timestamps, so it is an
//! observability aid rather than a way back to earlier states.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// One committed store write.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChangeRecord {
    /// Position of this write among all writes seen by the journal
    pub sequence: u64,
    /// Key of the cursor that was written
    pub cursor: String,
    /// When the write was committed
    pub timestamp: DateTime<Utc>,
}

/// Bounded, ordered journal of committed writes.
///
/// `record` returns a new journal; the receiver is left untouched. Once the
/// journal holds `capacity` records the oldest one is dropped.
///
/// # Example
///
/// ```rust
/// use cursorflux::journal::ChangeJournal;
/// use chrono::Utc;
///
/// let journal = ChangeJournal::new(2)
///     .record("todos", Utc::now())
///     .record("filter", Utc::now())
///     .record("todos", Utc::now());
///
/// assert_eq!(journal.cursors(), vec!["filter", "todos"]);
/// assert_eq!(journal.total_recorded(), 3);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ChangeJournal {
    capacity: usize,
    next_sequence: u64,
    records: Vec<ChangeRecord>,
}

impl ChangeJournal {
    /// Create an empty journal keeping at most `capacity` records.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            next_sequence: 0,
            records: Vec::new(),
        }
    }

    /// Record a write, returning a new journal.
    pub fn record(&self, cursor: &str, timestamp: DateTime<Utc>) -> Self {
        let overflow = (self.records.len() + 1).saturating_sub(self.capacity);
        let mut records: Vec<ChangeRecord> = self.records.iter().skip(overflow).cloned().collect();
        records.push(ChangeRecord {
            sequence: self.next_sequence,
            cursor: cursor.to_string(),
            timestamp,
        });

        Self {
            capacity: self.capacity,
            next_sequence: self.next_sequence + 1,
            records,
        }
    }

    /// Retained records, oldest first.
    pub fn records(&self) -> &[ChangeRecord] {
        &self.records
    }

    /// Cursor keys of the retained records, oldest first.
    pub fn cursors(&self) -> Vec<&str> {
        self.records.iter().map(|r| r.cursor.as_str()).collect()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of writes ever recorded, including dropped ones.
    pub fn total_recorded(&self) -> u64 {
        self.next_sequence
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Time between the oldest and newest retained record.
    pub fn span(&self) -> Option<Duration> {
        let (first, last) = (self.records.first()?, self.records.last()?);
        last.timestamp
            .signed_duration_since(first.timestamp)
            .to_std()
            .ok()
    }
}
