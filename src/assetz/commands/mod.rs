use crate::index::IndexedRecord;
use crate::store::{AssetStore, Backend};

pub mod add;
pub mod delete;
pub mod filter;
pub mod list;
pub mod open;
pub mod save;
pub mod search;
pub mod update;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// Records as they are after the command ran.
    pub affected_records: Vec<IndexedRecord>,
    /// Records as they were before an update.
    pub previous_records: Vec<IndexedRecord>,
    pub listed_records: Vec<IndexedRecord>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_records(mut self, records: Vec<IndexedRecord>) -> Self {
        self.affected_records = records;
        self
    }

    pub fn with_previous_records(mut self, records: Vec<IndexedRecord>) -> Self {
        self.previous_records = records;
        self
    }

    pub fn with_listed_records(mut self, records: Vec<IndexedRecord>) -> Self {
        self.listed_records = records;
        self
    }
}

/// `"1 record"`, `"3 records"`.
pub fn count_of(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("1 {}", noun)
    } else {
        format!("{} {}s", count, noun)
    }
}

pub(crate) fn saved_message<B: Backend>(store: &AssetStore<B>) -> CmdMessage {
    CmdMessage::info(format!(
        "Saved {} to {}",
        count_of(store.len(), "record"),
        store.location()
    ))
}
