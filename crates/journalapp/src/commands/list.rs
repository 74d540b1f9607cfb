use crate::commands::CmdResult;
use crate::error::Result;
use crate::filter::{filter_entries, sort_by_date_desc, FilterCriteria};
use crate::store::EntryStore;

/// The visible journal: every entry matching `criteria`, newest first.
pub fn run<S: EntryStore>(store: &S, criteria: &FilterCriteria) -> Result<CmdResult> {
    let entries = store.load_all()?;
    let mut visible = filter_entries(entries, criteria);
    sort_by_date_desc(&mut visible);
    Ok(CmdResult::default().with_listed_entries(visible))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::EntryType;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    fn ids(result: &CmdResult) -> Vec<&str> {
        result.listed_entries.iter().map(|e| e.id.as_str()).collect()
    }

    fn journal() -> InMemoryStore {
        StoreFixture::new()
            .with_entry(EntryType::Buy, "ACME", Some("2023-01-01"), &["Macro"])
            .with_entry(
                EntryType::MarketStories,
                "Fed day",
                Some("2024-06-01"),
                &["FED", "rates"],
            )
            .with_entry(EntryType::Strategy, "Someday", None, &["equities"])
            .build()
    }

    #[test]
    fn lists_newest_first_with_undated_last() {
        let result = run(&journal(), &FilterCriteria::default()).unwrap();
        assert_eq!(ids(&result), vec!["e2", "e1", "e3"]);
    }

    #[test]
    fn applies_filters_before_sorting() {
        let criteria = FilterCriteria::default().with_tags("macro, fed");
        let result = run(&journal(), &criteria).unwrap();
        assert_eq!(ids(&result), vec!["e2", "e1"]);
    }

    #[test]
    fn empty_journal_lists_nothing() {
        let result = run(&InMemoryStore::new(), &FilterCriteria::default()).unwrap();
        assert!(result.listed_entries.is_empty());
    }

    #[test]
    fn read_errors_propagate() {
        let store = InMemoryStore::read_only("entries: [oops");
        assert!(run(&store, &FilterCriteria::default()).is_err());
    }
}
