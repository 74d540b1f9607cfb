use super::document_store::DocumentStore;
use super::mem_backend::MemBackend;
use super::StoreMode;

pub type InMemoryStore = DocumentStore<MemBackend>;

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryStore {
    pub fn new() -> Self {
        DocumentStore::with_backend(MemBackend::new(), StoreMode::ReadWrite)
    }

    /// A demo store seeded with `text` that discards every mutation.
    pub fn read_only(text: &str) -> Self {
        DocumentStore::with_backend(MemBackend::with_document(text), StoreMode::ReadOnly)
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{Entry, EntryType};
    use crate::store::EntryStore;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        /// Adds an entry with a predictable id (`e1`, `e2`, …).
        pub fn with_entry(
            mut self,
            entry_type: EntryType,
            title: &str,
            date: Option<&str>,
            tags: &[&str],
        ) -> Self {
            let n = self.store.load_all().unwrap().len() + 1;
            let entry = Entry {
                id: format!("e{}", n),
                entry_type,
                title: Some(title.to_string()),
                price: None,
                amount: None,
                note: None,
                tags: tags.iter().map(|t| t.to_string()).collect(),
                date: date.map(|d| d.to_string()),
            };
            self.store.create(entry).unwrap();
            self
        }

        pub fn with_trade(
            mut self,
            entry_type: EntryType,
            asset: &str,
            price: f64,
            amount: f64,
        ) -> Self {
            let n = self.store.load_all().unwrap().len() + 1;
            let entry = Entry {
                id: format!("e{}", n),
                entry_type,
                title: Some(asset.to_string()),
                price: Some(price),
                amount: Some(amount),
                note: None,
                tags: Vec::new(),
                date: Some("2024-01-15".to_string()),
            };
            self.store.create(entry).unwrap();
            self
        }

        pub fn build(self) -> InMemoryStore {
            self.store
        }
    }
}
