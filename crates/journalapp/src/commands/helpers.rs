use crate::error::{JournalError, MissingOp, Result};
use crate::model::Entry;
use crate::store::EntryStore;

/// Shortest id prefix accepted in place of a full id.
pub const MIN_PREFIX_LEN: usize = 4;

/// Finds the entry a user-supplied selector refers to.
///
/// The selector is either an exact id or a unique prefix of at least
/// [`MIN_PREFIX_LEN`] characters. An ambiguous prefix is an `Api` error; no
/// match at all is `NotFound` tagged with `op`.
pub fn resolve_entry<S: EntryStore>(store: &S, selector: &str, op: MissingOp) -> Result<Entry> {
    let selector = selector.trim();
    if selector.is_empty() {
        return Err(JournalError::Api("an entry id is required".into()));
    }

    let entries = store.load_all()?;
    if let Some(exact) = entries.iter().find(|e| e.id == selector) {
        return Ok(exact.clone());
    }

    if selector.chars().count() >= MIN_PREFIX_LEN {
        let mut candidates: Vec<Entry> = entries
            .into_iter()
            .filter(|e| e.id.starts_with(selector))
            .collect();
        match candidates.len() {
            0 => {}
            1 => return Ok(candidates.remove(0)),
            n => {
                return Err(JournalError::Api(format!(
                    "id prefix '{}' is ambiguous ({} entries match)",
                    selector, n
                )))
            }
        }
    }

    Err(JournalError::not_found(op, selector))
}

/// The first `len` characters of an id, for compact display.
pub fn short_id(id: &str, len: usize) -> &str {
    match id.char_indices().nth(len) {
        Some((idx, _)) => &id[..idx],
        None => id,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::EntryType;
    use crate::store::memory::InMemoryStore;

    fn store_with_ids(ids: &[&str]) -> InMemoryStore {
        let mut store = InMemoryStore::new();
        for id in ids {
            store
                .create(Entry {
                    id: id.to_string(),
                    entry_type: EntryType::Buy,
                    title: None,
                    price: None,
                    amount: None,
                    note: None,
                    tags: Vec::new(),
                    date: None,
                })
                .unwrap();
        }
        store
    }

    #[test]
    fn exact_id_wins_over_prefix() {
        let store = store_with_ids(&["abcd", "abcdef"]);
        let entry = resolve_entry(&store, "abcd", MissingOp::View).unwrap();
        assert_eq!(entry.id, "abcd");
    }

    #[test]
    fn unique_prefix_resolves() {
        let store = store_with_ids(&["abcd-1111", "ffff-2222"]);
        let entry = resolve_entry(&store, "ffff", MissingOp::View).unwrap();
        assert_eq!(entry.id, "ffff-2222");
    }

    #[test]
    fn ambiguous_prefix_is_an_error() {
        let store = store_with_ids(&["abcd-1111", "abcd-2222"]);
        let err = resolve_entry(&store, "abcd", MissingOp::View).unwrap_err();
        assert!(matches!(err, JournalError::Api(msg) if msg.contains("ambiguous")));
    }

    #[test]
    fn short_prefix_is_not_accepted() {
        let store = store_with_ids(&["abcd-1111"]);
        let err = resolve_entry(&store, "abc", MissingOp::Delete).unwrap_err();
        assert!(matches!(
            err,
            JournalError::NotFound {
                op: MissingOp::Delete,
                ..
            }
        ));
    }

    #[test]
    fn blank_selector_is_rejected() {
        let store = store_with_ids(&["abcd"]);
        assert!(matches!(
            resolve_entry(&store, "  ", MissingOp::View).unwrap_err(),
            JournalError::Api(_)
        ));
    }

    #[test]
    fn short_id_truncates_on_char_boundary() {
        assert_eq!(short_id("0123456789", 8), "01234567");
        assert_eq!(short_id("abc", 8), "abc");
    }
}
