use crate::commands::{count_of, CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::IndexedRecord;
use crate::store::{AssetStore, Backend};

/// Case-insensitive substring match on the name field only.
///
/// An empty keyword matches every record.
pub fn run<B: Backend>(store: &AssetStore<B>, keyword: &str) -> Result<CmdResult> {
    let keyword_lower = keyword.to_lowercase();

    let matches: Vec<IndexedRecord> = store
        .records()
        .iter()
        .enumerate()
        .filter(|(_, record)| record.name.to_lowercase().contains(&keyword_lower))
        .map(|(index, record)| IndexedRecord::new(index, record.clone()))
        .collect();

    let mut result = CmdResult::default();
    if keyword.is_empty() {
        result.add_message(CmdMessage::info("No keyword given; showing all records"));
    }
    if matches.is_empty() {
        result.add_message(CmdMessage::error(format!(
            "No records match '{}'",
            keyword
        )));
    } else {
        result.add_message(CmdMessage::info(format!(
            "Found {}",
            count_of(matches.len(), "record")
        )));
    }

    Ok(result.with_listed_records(matches))
}
