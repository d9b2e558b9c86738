use crate::commands::{saved_message, CmdMessage, CmdResult};
use crate::error::{AssetzError, Result};
use crate::index::IndexedRecord;
use crate::model::RecordPatch;
use crate::store::{AssetStore, Backend};

/// Applies `patch` to the record at `index`.
///
/// An empty patch leaves the content unchanged but still rewrites the file.
pub fn run<B: Backend>(
    store: &mut AssetStore<B>,
    index: usize,
    patch: RecordPatch,
) -> Result<CmdResult> {
    let current = store
        .get(index)
        .ok_or_else(|| AssetzError::not_found(index))?;
    let updated = patch.apply_to(current);
    let previous = store.replace(index, updated.clone())?;

    let mut result = CmdResult::default();
    result.add_message(saved_message(store));
    result.add_message(CmdMessage::success(format!("Updated #{}:", index)));
    result.add_message(CmdMessage::info(format!("  before: {}", previous)));
    result.add_message(CmdMessage::info(format!("  after:  {}", updated)));

    Ok(result
        .with_previous_records(vec![IndexedRecord::new(index, previous)])
        .with_affected_records(vec![IndexedRecord::new(index, updated)]))
}
