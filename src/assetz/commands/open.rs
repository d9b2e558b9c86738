use crate::commands::{count_of, CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::index_records;
use crate::store::{AssetStore, Backend};

pub fn run<B: Backend>(store: &mut AssetStore<B>) -> Result<CmdResult> {
    let report = store.load()?;
    let mut result = CmdResult::default().with_listed_records(index_records(store.records()));

    if !report.found {
        result.add_message(CmdMessage::info(format!(
            "No data file at {}; starting empty",
            store.location()
        )));
        return Ok(result);
    }

    result.add_message(CmdMessage::success(format!(
        "Loaded {} from {}",
        count_of(report.loaded, "record"),
        store.location()
    )));
    if !report.dropped.is_empty() {
        result.add_message(CmdMessage::warning(format!(
            "Skipped {}",
            count_of(report.dropped.len(), "malformed row")
        )));
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::model::Record;
    use crate::store::memory::{InMemoryStore, MemBackend};

    #[test]
    fn reports_first_run_without_error() {
        let mut store = InMemoryStore::new();
        let result = run(&mut store).unwrap();

        assert!(result.listed_records.is_empty());
        assert_eq!(result.messages.len(), 1);
        assert_eq!(result.messages[0].level, MessageLevel::Info);
        assert!(result.messages[0].content.contains("starting empty"));
    }

    #[test]
    fn reports_loaded_count() {
        let mut store = AssetStore::with_backend(MemBackend::with_contents(
            "001,Tilapia,45\n002,Catfish,60\n",
        ));
        let result = run(&mut store).unwrap();

        assert_eq!(result.listed_records.len(), 2);
        assert!(result.messages[0].content.starts_with("Loaded 2 records"));
    }

    #[test]
    fn reports_only_an_aggregate_for_dropped_rows() {
        let mut store = AssetStore::with_backend(MemBackend::with_contents(
            "001,OnlyTwo\n002,Catfish,60\nbad\n",
        ));
        let result = run(&mut store).unwrap();

        assert_eq!(store.records(), &[Record::new("002", "Catfish", "60")]);
        assert_eq!(result.messages.len(), 2);
        assert_eq!(result.messages[1].level, MessageLevel::Warning);
        assert_eq!(result.messages[1].content, "Skipped 2 malformed rows");
    }

    #[test]
    fn does_not_write_on_load() {
        let mut store = AssetStore::with_backend(MemBackend::with_contents("001,Tilapia,45\n"));
        run(&mut store).unwrap();
        assert_eq!(store.backend().writes(), 0);
    }
}
