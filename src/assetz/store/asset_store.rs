use super::{Backend, DroppedRow};
use crate::error::{AssetzError, Result};
use crate::model::Record;
use tracing::info;

/// Outcome of [`AssetStore::load`].
#[derive(Debug, Default)]
pub struct LoadReport {
    /// `false` when the backend had nothing persisted (first run).
    pub found: bool,
    pub loaded: usize,
    pub dropped: Vec<DroppedRow>,
}

/// The in-memory record sequence plus the backend it is flushed to.
///
/// Positions in [`records`](Self::records) are the user-facing identifiers.
/// `push`, `replace` and `remove` each rewrite the backend in full before
/// returning. Out-of-range indexes fail before anything is touched.
pub struct AssetStore<B: Backend> {
    backend: B,
    records: Vec<Record>,
}

impl<B: Backend> AssetStore<B> {
    pub fn with_backend(backend: B) -> Self {
        Self {
            backend,
            records: Vec::new(),
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn location(&self) -> String {
        self.backend.location()
    }

    /// Replaces the in-memory sequence with what the backend holds.
    pub fn load(&mut self) -> Result<LoadReport> {
        let Some(parsed) = self.backend.read()? else {
            self.records.clear();
            info!(location = %self.backend.location(), "no data file, starting empty");
            return Ok(LoadReport::default());
        };

        self.records = parsed.records;
        info!(
            location = %self.backend.location(),
            loaded = self.records.len(),
            dropped = parsed.dropped.len(),
            "loaded records"
        );
        Ok(LoadReport {
            found: true,
            loaded: self.records.len(),
            dropped: parsed.dropped,
        })
    }

    /// Writes the full sequence, returning how many records were written.
    pub fn save(&mut self) -> Result<usize> {
        self.backend.write(&self.records)?;
        Ok(self.records.len())
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Record> {
        self.records.get(index)
    }

    /// Appends and saves. Returns the new record's index.
    pub fn push(&mut self, record: Record) -> Result<usize> {
        self.records.push(record);
        self.save()?;
        Ok(self.records.len() - 1)
    }

    /// Overwrites the record at `index` and saves. Returns the previous record.
    pub fn replace(&mut self, index: usize, record: Record) -> Result<Record> {
        let slot = self
            .records
            .get_mut(index)
            .ok_or_else(|| AssetzError::not_found(index))?;
        let previous = std::mem::replace(slot, record);
        self.save()?;
        Ok(previous)
    }

    /// Removes the record at `index` and saves. Later records shift down by one.
    pub fn remove(&mut self, index: usize) -> Result<Record> {
        if index >= self.records.len() {
            return Err(AssetzError::not_found(index));
        }
        let removed = self.records.remove(index);
        self.save()?;
        Ok(removed)
    }
}
