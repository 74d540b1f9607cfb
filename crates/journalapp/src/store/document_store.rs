use super::backend::StorageBackend;
use super::document::JournalDocument;
use super::{EntryStore, StoreMode};
use crate::error::{JournalError, MissingOp, Result};
use crate::model::Entry;
use std::path::PathBuf;
use tracing::{debug, warn};
use uuid::Uuid;

pub struct DocumentStore<B: StorageBackend> {
    /// The underlying storage backend.
    /// Exposed as pub(crate) for testing and internal access only.
    pub(crate) backend: B,
    mode: StoreMode,
}

impl<B: StorageBackend> DocumentStore<B> {
    pub fn with_backend(backend: B, mode: StoreMode) -> Self {
        Self { backend, mode }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    fn load_document(&self) -> Result<JournalDocument> {
        let location = self.backend.location();
        let doc = match self.backend.read_document()? {
            Some(text) => JournalDocument::parse(&text, &location)?,
            None => JournalDocument::default(),
        };
        debug!(path = %location.display(), entries = doc.entries.len(), "journal loaded");
        Ok(doc)
    }

    fn save_document(&self, doc: &JournalDocument) -> Result<()> {
        let location = self.backend.location();
        let text = doc.render(&location)?;
        self.backend.write_document(&text)?;
        debug!(path = %location.display(), entries = doc.entries.len(), "journal written");
        Ok(())
    }

    fn skip_write(&self, op: &str, id: &str) {
        warn!(
            path = %self.backend.location().display(),
            op,
            id,
            "read-only journal, change not saved"
        );
    }
}

impl<B: StorageBackend> EntryStore for DocumentStore<B> {
    fn load_all(&self) -> Result<Vec<Entry>> {
        Ok(self.load_document()?.entries)
    }

    fn create(&mut self, mut entry: Entry) -> Result<Entry> {
        if entry.id.trim().is_empty() {
            entry.id = Uuid::new_v4().to_string();
        }
        if self.is_read_only() {
            self.skip_write("create", &entry.id);
            return Ok(entry);
        }

        let mut doc = self.load_document()?;
        if doc.entries.iter().any(|e| e.id == entry.id) {
            return Err(JournalError::DuplicateId(entry.id));
        }
        doc.entries.push(entry.clone());
        self.save_document(&doc)?;
        Ok(entry)
    }

    fn update(&mut self, entry: &Entry) -> Result<()> {
        if self.is_read_only() {
            self.skip_write("update", &entry.id);
            return Ok(());
        }

        let mut doc = self.load_document()?;
        let slot = doc
            .entries
            .iter_mut()
            .find(|e| e.id == entry.id)
            .ok_or_else(|| JournalError::not_found(MissingOp::Update, entry.id.clone()))?;
        *slot = entry.clone();
        self.save_document(&doc)
    }

    fn delete(&mut self, id: &str) -> Result<bool> {
        if self.is_read_only() {
            self.skip_write("delete", id);
            return Ok(false);
        }

        let mut doc = self.load_document()?;
        let before = doc.entries.len();
        doc.entries.retain(|e| e.id != id);
        if doc.entries.len() == before {
            return Ok(false);
        }
        self.save_document(&doc)?;
        Ok(true)
    }

    fn mode(&self) -> StoreMode {
        self.mode
    }

    fn location(&self) -> PathBuf {
        self.backend.location()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{EntryDraft, EntryType};
    use crate::store::mem_backend::MemBackend;
    use crate::store::memory::InMemoryStore;
    use chrono::NaiveDate;

    fn entry(title: &str) -> Entry {
        EntryDraft::new(EntryType::Buy)
            .with_title(title)
            .with_price(2.0)
            .with_amount(3.0)
            .with_tags("a, b")
            .into_new_entry(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap())
            .unwrap()
    }

    #[test]
    fn create_then_load_contains_exactly_that_entry() {
        let mut store = InMemoryStore::new();
        let e = entry("ACME");
        store.create(e.clone()).unwrap();

        let all = store.load_all().unwrap();
        let matching: Vec<_> = all.iter().filter(|x| x.id == e.id).collect();
        assert_eq!(matching.len(), 1);
        assert_eq!(*matching[0], e);
    }

    #[test]
    fn create_assigns_missing_id() {
        let mut store = InMemoryStore::new();
        let mut e = entry("ACME");
        e.id = String::new();
        let stored = store.create(e).unwrap();
        assert!(!stored.id.is_empty());
        assert_eq!(store.get(&stored.id).unwrap(), Some(stored));
    }

    #[test]
    fn create_rejects_duplicate_id() {
        let mut store = InMemoryStore::new();
        let e = entry("ACME");
        store.create(e.clone()).unwrap();
        let err = store.create(e).unwrap_err();
        assert!(matches!(err, JournalError::DuplicateId(_)));
        assert_eq!(store.load_all().unwrap().len(), 1);
    }

    #[test]
    fn update_replaces_fields_and_keeps_id() {
        let mut store = InMemoryStore::new();
        let e = store.create(entry("Old")).unwrap();
        store.create(entry("Other")).unwrap();

        let mut replacement = e.clone();
        replacement.title = Some("New".into());
        replacement.price = None;
        replacement.tags = vec!["c".into()];
        store.update(&replacement).unwrap();

        let all = store.load_all().unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0], replacement);
        assert_eq!(all[1].title.as_deref(), Some("Other"));
    }

    #[test]
    fn update_of_unknown_id_is_not_found() {
        let mut store = InMemoryStore::new();
        store.create(entry("ACME")).unwrap();
        let stranger = entry("Stranger");
        let err = store.update(&stranger).unwrap_err();
        assert!(matches!(
            err,
            JournalError::NotFound {
                op: MissingOp::Update,
                ..
            }
        ));
        assert_eq!(store.load_all().unwrap().len(), 1);
    }

    #[test]
    fn delete_removes_entry() {
        let mut store = InMemoryStore::new();
        let e = store.create(entry("ACME")).unwrap();
        assert!(store.delete(&e.id).unwrap());
        assert!(store.get(&e.id).unwrap().is_none());
    }

    #[test]
    fn delete_unknown_id_leaves_collection_unchanged() {
        let mut store = InMemoryStore::new();
        store.create(entry("ACME")).unwrap();
        let before = store.load_all().unwrap();
        let writes = store.backend().write_count();

        assert!(!store.delete("no-such-id").unwrap());
        assert_eq!(store.load_all().unwrap(), before);
        assert_eq!(store.backend().write_count(), writes);
    }

    #[test]
    fn read_only_store_accepts_but_discards_mutations() {
        let text = "entries:\n- id: seed\n  type: Strategy\n  title: Plan\n  tags: []\n";
        let mut store =
            DocumentStore::with_backend(MemBackend::with_document(text), StoreMode::ReadOnly);
        assert!(store.is_read_only());
        let before = store.load_all().unwrap();

        let created = store.create(entry("ACME")).unwrap();
        assert!(!created.id.is_empty());
        let mut seed = before[0].clone();
        seed.title = Some("Changed".into());
        store.update(&seed).unwrap();
        assert!(!store.delete("seed").unwrap());

        assert_eq!(store.load_all().unwrap(), before);
        assert_eq!(store.backend().write_count(), 0);
    }

    #[test]
    fn failed_write_keeps_previous_document() {
        let mut store = InMemoryStore::new();
        let e = store.create(entry("ACME")).unwrap();
        store.backend().set_simulate_write_error(true);

        let err = store.create(entry("Lost")).unwrap_err();
        assert!(matches!(err, JournalError::StorageWrite { .. }));
        assert!(store.delete(&e.id).is_err());

        store.backend().set_simulate_write_error(false);
        let all = store.load_all().unwrap();
        assert_eq!(all, vec![e]);
    }

    #[test]
    fn malformed_document_is_a_read_error() {
        let store = DocumentStore::with_backend(
            MemBackend::with_document("entries: {broken"),
            StoreMode::ReadWrite,
        );
        assert!(matches!(
            store.load_all().unwrap_err(),
            JournalError::StorageRead { .. }
        ));
    }

    #[test]
    fn mutations_on_malformed_document_do_not_overwrite_it() {
        let mut store = DocumentStore::with_backend(
            MemBackend::with_document("entries: {broken"),
            StoreMode::ReadWrite,
        );
        assert!(store.create(entry("ACME")).is_err());
        assert_eq!(
            store.backend().document().as_deref(),
            Some("entries: {broken")
        );
    }
}
