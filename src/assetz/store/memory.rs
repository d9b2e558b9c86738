use super::asset_store::AssetStore;
use super::format::{read_records, write_records};
use super::{Backend, ParsedRows};
use crate::error::{AssetzError, Result};
use crate::model::Record;

/// Keeps the serialized file contents in memory.
#[derive(Debug, Default)]
pub struct MemBackend {
    contents: Option<Vec<u8>>,
    writes: usize,
    fail_writes: bool,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts from pre-existing file contents, as if loaded from disk.
    pub fn with_contents(contents: impl Into<Vec<u8>>) -> Self {
        Self {
            contents: Some(contents.into()),
            ..Self::default()
        }
    }

    /// Every write fails with an IO error, like a full disk.
    pub fn failing() -> Self {
        Self {
            fail_writes: true,
            ..Self::default()
        }
    }

    pub fn contents(&self) -> Option<&str> {
        self.contents
            .as_deref()
            .and_then(|bytes| std::str::from_utf8(bytes).ok())
    }

    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl Backend for MemBackend {
    fn read(&self) -> Result<Option<ParsedRows>> {
        self.contents
            .as_deref()
            .map(read_records)
            .transpose()
    }

    fn write(&mut self, records: &[Record]) -> Result<()> {
        if self.fail_writes {
            return Err(AssetzError::Io(std::io::Error::other(
                "simulated write failure",
            )));
        }
        let mut buf = Vec::new();
        write_records(&mut buf, records)?;
        self.contents = Some(buf);
        self.writes += 1;
        Ok(())
    }

    fn location(&self) -> String {
        "<memory>".to_string()
    }
}

pub type InMemoryStore = AssetStore<MemBackend>;

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryStore {
    pub fn new() -> Self {
        AssetStore::with_backend(MemBackend::new())
    }
}

// --- Test Fixtures ---
