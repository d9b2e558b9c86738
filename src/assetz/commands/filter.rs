use crate::commands::{count_of, CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::IndexedRecord;
use crate::store::{AssetStore, Backend};

/// Exact, case-sensitive match on the category field.
pub fn run<B: Backend>(store: &AssetStore<B>, category: &str) -> Result<CmdResult> {
    let matches: Vec<IndexedRecord> = store
        .records()
        .iter()
        .enumerate()
        .filter(|(_, record)| record.category == category)
        .map(|(index, record)| IndexedRecord::new(index, record.clone()))
        .collect();

    let mut result = CmdResult::default();
    if matches.is_empty() {
        result.add_message(CmdMessage::error(format!(
            "No records in category {}",
            category
        )));
    } else {
        result.add_message(CmdMessage::info(format!(
            "Category {}: {}",
            category,
            count_of(matches.len(), "record")
        )));
    }

    Ok(result.with_listed_records(matches))
}
