//! # Storage Layer
//!
//! [`AssetStore`] owns the in-memory sequence of records and a [`Backend`] that
//! persists it. The store is the only thing that mutates the sequence, and every
//! mutator writes the full sequence through the backend before returning.
//!
//! ## Implementations
//!
//! - [`fs::FileBackend`]: Production backend
//!   - One comma-separated file, no header row, `category,name,price`
//!   - Each save truncates and rewrites the file in full
//!
//! - [`memory::MemBackend`]: In-memory backend for testing
//!   - Holds the serialized bytes, so it exercises the same format code
//!   - Counts writes, so tests can assert when a save did or did not happen
//!
//! ## Storage Format
//!
//! ```text
//! 001,Red Tilapia,50
//! 002,Catfish,60
//! 003,"Shrimp, large",120
//! ```
//!
//! Standard CSV quoting applies. Rows without exactly three fields are dropped on
//! load; see [`format::read_records`].

use crate::error::Result;
use crate::model::Record;

pub mod asset_store;
pub mod format;
pub mod fs;
pub mod memory;

pub use asset_store::{AssetStore, LoadReport};
pub use format::{DroppedRow, ParsedRows};

/// Abstract persistence for the record sequence.
pub trait Backend {
    /// Reads and parses every row, or returns `None` when nothing has been persisted yet.
    fn read(&self) -> Result<Option<ParsedRows>>;

    /// Replaces the persisted contents with `records`.
    fn write(&mut self, records: &[Record]) -> Result<()>;

    /// Where the data lives, for user-facing messages.
    fn location(&self) -> String;
}
