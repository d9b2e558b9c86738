//! # Positional Indexes
//!
//! Records are identified by their zero-based position in the store's current
//! sequence. The index shown next to a record is only valid until the next delete:
//! removing record `i` shifts every record after it down by one.
//!
//! Index text typed at the console is untrusted. [`parse_index`] turns it into
//! either a usable `usize` or a recoverable [`AssetzError`]:
//!
//! - `"abc"`, `""`, `"1.5"` → [`AssetzError::InvalidIndex`] (ask again)
//! - `"-1"` → [`AssetzError::RecordNotFound`] (a number, but never a valid position)

use crate::error::{AssetzError, Result};
use crate::model::Record;

/// A record paired with its position at the time it was listed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexedRecord {
    pub index: usize,
    pub record: Record,
}

impl IndexedRecord {
    pub fn new(index: usize, record: Record) -> Self {
        Self { index, record }
    }
}

/// Pairs every record with its current position, preserving order.
pub fn index_records(records: &[Record]) -> Vec<IndexedRecord> {
    records
        .iter()
        .enumerate()
        .map(|(index, record)| IndexedRecord::new(index, record.clone()))
        .collect()
}

pub fn parse_index(input: &str) -> Result<usize> {
    let trimmed = input.trim();
    let value: i64 = trimmed
        .parse()
        .map_err(|_| AssetzError::InvalidIndex(trimmed.to_string()))?;
    usize::try_from(value).map_err(|_| AssetzError::RecordNotFound(value))
}
