use crate::commands::CmdResult;
use crate::error::{MissingOp, Result};
use crate::store::EntryStore;

use super::helpers::resolve_entry;

pub fn run<S: EntryStore>(store: &S, selector: &str) -> Result<CmdResult> {
    let entry = resolve_entry(store, selector, MissingOp::View)?;
    Ok(CmdResult::default().with_listed_entries(vec![entry]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::JournalError;
    use crate::model::EntryType;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn views_entry_by_id() {
        let store = StoreFixture::new()
            .with_trade(EntryType::Sell, "ACME", 12.0, 2.0)
            .build();
        let result = run(&store, "e1").unwrap();
        assert_eq!(result.listed_entries.len(), 1);
        assert_eq!(result.listed_entries[0].title.as_deref(), Some("ACME"));
    }

    #[test]
    fn unknown_id_is_not_found() {
        let store = StoreFixture::new().build();
        assert!(matches!(
            run(&store, "missing").unwrap_err(),
            JournalError::NotFound {
                op: MissingOp::View,
                ..
            }
        ));
    }
}
