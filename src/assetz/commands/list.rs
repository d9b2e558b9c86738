use crate::commands::CmdResult;
use crate::error::Result;
use crate::index::index_records;
use crate::store::{AssetStore, Backend};

pub fn run<B: Backend>(store: &AssetStore<B>) -> Result<CmdResult> {
    Ok(CmdResult::default().with_listed_records(index_records(store.records())))
}
