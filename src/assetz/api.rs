//! # API Facade
//!
//! The single entry point for all assetz operations. Each method dispatches to a
//! command module and returns its [`CmdResult`]; nothing here prints or formats.
//!
//! `AssetzApi<B: Backend>` is generic over the storage backend:
//! - Production: `AssetzApi<FileBackend>`
//! - Testing: `AssetzApi<MemBackend>`
//!
//! Tests here only check dispatch. Behaviour is tested in the command modules.

use crate::commands;
use crate::error::Result;
use crate::model::{Record, RecordPatch};
use crate::store::{AssetStore, Backend};

pub struct AssetzApi<B: Backend> {
    store: AssetStore<B>,
}

impl<B: Backend> AssetzApi<B> {
    /// Wraps a backend without loading it. Call [`open`](Self::open) first.
    pub fn new(backend: B) -> Self {
        Self {
            store: AssetStore::with_backend(backend),
        }
    }

    pub fn store(&self) -> &AssetStore<B> {
        &self.store
    }

    pub fn open(&mut self) -> Result<CmdResult> {
        commands::open::run(&mut self.store)
    }

    pub fn save(&mut self) -> Result<CmdResult> {
        commands::save::run(&mut self.store)
    }

    pub fn list_all(&self) -> Result<CmdResult> {
        commands::list::run(&self.store)
    }

    pub fn add(
        &mut self,
        category: impl Into<String>,
        name: impl Into<String>,
        price: impl ToString,
    ) -> Result<CmdResult> {
        commands::add::run(&mut self.store, Record::new(category, name, price))
    }

    pub fn update(&mut self, index: usize, patch: RecordPatch) -> Result<CmdResult> {
        commands::update::run(&mut self.store, index, patch)
    }

    pub fn delete(&mut self, index: usize) -> Result<CmdResult> {
        commands::delete::run(&mut self.store, index)
    }

    pub fn search(&self, keyword: &str) -> Result<CmdResult> {
        commands::search::run(&self.store, keyword)
    }

    pub fn filter_by_category(&self, category: &str) -> Result<CmdResult> {
        commands::filter::run(&self.store, category)
    }
}

pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AssetzError;
    use crate::store::memory::MemBackend;

    fn records(api: &AssetzApi<MemBackend>) -> Vec<Record> {
        api.store().records().to_vec()
    }

    fn reloaded(api: &AssetzApi<MemBackend>) -> Vec<Record> {
        api.store()
            .backend()
            .read()
            .unwrap()
            .unwrap_or_default()
            .records
    }

    #[test]
    fn open_loads_from_backend() {
        let mut api = AssetzApi::new(MemBackend::with_contents("001,Tilapia,45\n"));
        api.open().unwrap();
        assert_eq!(records(&api), vec![Record::new("001", "Tilapia", "45")]);
    }

    #[test]
    fn end_to_end_session() {
        let mut api = AssetzApi::new(MemBackend::new());
        api.open().unwrap();

        api.add("001", "Tilapia", "45").unwrap();
        assert_eq!(records(&api), vec![Record::new("001", "Tilapia", "45")]);
        assert_eq!(reloaded(&api), records(&api));

        api.add("002", "Catfish", "60").unwrap();
        assert_eq!(records(&api).len(), 2);
        assert_eq!(reloaded(&api), records(&api));

        api.update(0, RecordPatch::default().price("50")).unwrap();
        assert_eq!(records(&api)[0], Record::new("001", "Tilapia", "50"));
        assert_eq!(reloaded(&api), records(&api));

        api.delete(0).unwrap();
        assert_eq!(records(&api), vec![Record::new("002", "Catfish", "60")]);
        assert_eq!(reloaded(&api), records(&api));

        let listed = api.list_all().unwrap().listed_records;
        assert_eq!(listed[0].index, 0);
        assert_eq!(listed[0].record.name, "Catfish");
    }

    #[test]
    fn out_of_range_errors_are_recoverable() {
        let mut api = AssetzApi::new(MemBackend::new());
        let err = api.delete(0).unwrap_err();
        assert!(matches!(err, AssetzError::RecordNotFound(0)));
        assert!(err.is_recoverable());
    }

    #[test]
    fn dispatches_queries() {
        let mut api = AssetzApi::new(MemBackend::new());
        api.add("001", "Red Tilapia", 50).unwrap();
        api.add("002", "Catfish", 60).unwrap();

        assert_eq!(api.search("tilapia").unwrap().listed_records.len(), 1);
        assert_eq!(
            api.filter_by_category("002").unwrap().listed_records[0].index,
            1
        );
        assert_eq!(api.save().unwrap().messages.len(), 1);
    }
}
