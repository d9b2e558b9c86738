use crate::commands::{saved_message, CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::IndexedRecord;
use crate::store::{AssetStore, Backend};

pub fn run<B: Backend>(store: &mut AssetStore<B>, index: usize) -> Result<CmdResult> {
    let removed = store.remove(index)?;

    let mut result = CmdResult::default();
    result.add_message(saved_message(store));
    result.add_message(CmdMessage::success(format!(
        "Deleted #{}: {}",
        index, removed
    )));
    Ok(result.with_affected_records(vec![IndexedRecord::new(index, removed)]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AssetzError;
    use crate::model::Record;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn later_records_move_up_one_position() {
        let mut fixture = StoreFixture::new().with_fish();
        let before = fixture.store.records().to_vec();

        let result = run(&mut fixture.store, 1).unwrap();

        assert_eq!(result.affected_records[0].record, before[1]);
        assert!(!fixture.store.records().contains(&before[1]));
        for j in 2..before.len() {
            assert_eq!(fixture.store.get(j - 1).unwrap(), &before[j]);
        }
    }

    #[test]
    fn out_of_range_is_not_found_and_writes_nothing() {
        let mut fixture = StoreFixture::new().with_fish();
        let writes = fixture.store.backend().writes();

        let err = run(&mut fixture.store, 10).unwrap_err();

        assert!(matches!(err, AssetzError::RecordNotFound(10)));
        assert_eq!(fixture.store.len(), 4);
        assert_eq!(fixture.writes_since(writes), 0);
    }

    #[test]
    fn deleting_last_record_leaves_empty_file() {
        let mut fixture = StoreFixture::new().with_record("001", "Tilapia", "45");
        run(&mut fixture.store, 0).unwrap();

        assert!(fixture.store.is_empty());
        assert_eq!(fixture.store.backend().contents(), Some(""));
    }

    #[test]
    fn reports_removed_record() {
        let mut fixture = StoreFixture::new().with_record("002", "Catfish", "60");
        let result = run(&mut fixture.store, 0).unwrap();
        assert!(result
            .messages
            .iter()
            .any(|m| m.content == format!("Deleted #0: {}", Record::new("002", "Catfish", "60"))));
    }
}
