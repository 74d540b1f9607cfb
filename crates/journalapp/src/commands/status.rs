use crate::commands::{CmdResult, JournalStatus, TypeCount};
use crate::error::Result;
use crate::model::EntryType;
use crate::store::EntryStore;

pub fn run<S: EntryStore>(store: &S) -> Result<CmdResult> {
    let entries = store.load_all()?;

    let mut by_type: Vec<TypeCount> = EntryType::ALL
        .iter()
        .map(|t| TypeCount {
            entry_type: t.label().to_string(),
            count: entries.iter().filter(|e| e.entry_type == *t).count(),
        })
        .collect();

    // Types written by hand into the document still show up, after the known ones.
    for entry in entries.iter().filter(|e| !e.entry_type.is_known()) {
        let label = entry.entry_type.label();
        match by_type.iter_mut().find(|c| c.entry_type == label) {
            Some(count) => count.count += 1,
            None => by_type.push(TypeCount {
                entry_type: label.to_string(),
                count: 1,
            }),
        }
    }

    let mut dates: Vec<String> = entries
        .iter()
        .filter_map(|e| e.parsed_date())
        .map(|d| d.format(crate::model::DATE_FORMAT).to_string())
        .collect();
    dates.sort();

    let status = JournalStatus {
        location: store.location(),
        mode: store.mode(),
        total: entries.len(),
        by_type,
        newest: dates.last().cloned(),
        oldest: dates.first().cloned(),
    };

    Ok(CmdResult {
        status: Some(status),
        ..Default::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;
    use crate::store::StoreMode;

    #[test]
    fn summarises_counts_and_date_range() {
        let store = StoreFixture::new()
            .with_entry(EntryType::Buy, "A", Some("2023-05-01"), &[])
            .with_entry(EntryType::Buy, "B", Some("2024-02-10"), &[])
            .with_entry(EntryType::Strategy, "C", None, &[])
            .build();

        let status = run(&store).unwrap().status.unwrap();
        assert_eq!(status.total, 3);
        assert_eq!(status.mode, StoreMode::ReadWrite);
        assert_eq!(status.oldest.as_deref(), Some("2023-05-01"));
        assert_eq!(status.newest.as_deref(), Some("2024-02-10"));

        let buy = status.by_type.iter().find(|c| c.entry_type == "Buy").unwrap();
        assert_eq!(buy.count, 2);
        assert_eq!(status.by_type.len(), EntryType::ALL.len());
    }

    #[test]
    fn unknown_types_are_listed_after_known_ones() {
        let store = InMemoryStore::read_only(
            "entries:\n  - id: x\n    type: Dividend\n    tags: []\n",
        );
        let status = run(&store).unwrap().status.unwrap();
        assert_eq!(status.mode, StoreMode::ReadOnly);
        let last = status.by_type.last().unwrap();
        assert_eq!(last.entry_type, "Dividend");
        assert_eq!(last.count, 1);
    }
}
