use crate::commands::{saved_message, CmdResult};
use crate::error::Result;
use crate::store::{AssetStore, Backend};

pub fn run<B: Backend>(store: &mut AssetStore<B>) -> Result<CmdResult> {
    store.save()?;
    let mut result = CmdResult::default();
    result.add_message(saved_message(store));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn rewrites_current_sequence() {
        let mut fixture = StoreFixture::new().with_fish();
        let writes = fixture.store.backend().writes();

        let result = run(&mut fixture.store).unwrap();
        assert_eq!(fixture.writes_since(writes), 1);
        assert_eq!(result.messages[0].content, "Saved 4 records to <memory>");
    }
}
