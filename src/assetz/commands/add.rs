use crate::commands::{saved_message, CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::IndexedRecord;
use crate::model::Record;
use crate::store::{AssetStore, Backend};

/// Appends a record. No duplicate checking.
pub fn run<B: Backend>(store: &mut AssetStore<B>, record: Record) -> Result<CmdResult> {
    let index = store.push(record.clone())?;

    let mut result = CmdResult::default();
    result.add_message(saved_message(store));
    result.add_message(CmdMessage::success(format!("Added #{}: {}", index, record)));
    Ok(result.with_affected_records(vec![IndexedRecord::new(index, record)]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::list;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn new_record_lands_at_last_index() {
        let mut fixture = StoreFixture::new().with_fish();
        let record = Record::new("004", "Snakehead", "80");
        let result = run(&mut fixture.store, record.clone()).unwrap();

        assert_eq!(result.affected_records[0].index, 4);
        let listed = list::run(&fixture.store).unwrap().listed_records;
        assert_eq!(listed.last().unwrap(), &IndexedRecord::new(4, record));
    }

    #[test]
    fn allows_duplicates() {
        let mut store = InMemoryStore::new();
        let record = Record::new("001", "Tilapia", "45");
        run(&mut store, record.clone()).unwrap();
        run(&mut store, record).unwrap();
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn saves_once_per_add() {
        let mut store = InMemoryStore::new();
        run(&mut store, Record::new("001", "Tilapia", 45)).unwrap();
        assert_eq!(store.backend().writes(), 1);
        assert_eq!(store.backend().contents(), Some("001,Tilapia,45\n"));
    }
}
