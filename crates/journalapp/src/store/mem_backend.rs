use super::backend::StorageBackend;
use crate::error::{JournalError, Result};
use std::cell::{Cell, RefCell};
use std::path::PathBuf;

const VIRTUAL_PATH: &str = "memory://journal.yaml";

/// In-memory storage backend for testing.
///
/// Uses `RefCell` for interior mutability since the journal is single-threaded.
/// This keeps the `StorageBackend` trait on `&self` for all methods.
#[derive(Default)]
pub struct MemBackend {
    document: RefCell<Option<String>>,
    simulate_write_error: Cell<bool>,
    writes: Cell<usize>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts from existing document text.
    pub fn with_document(text: impl Into<String>) -> Self {
        let backend = Self::default();
        *backend.document.borrow_mut() = Some(text.into());
        backend
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        self.simulate_write_error.set(simulate);
    }

    /// Number of successful document writes so far.
    pub fn write_count(&self) -> usize {
        self.writes.get()
    }

    /// Current raw document text.
    pub fn document(&self) -> Option<String> {
        self.document.borrow().clone()
    }
}

impl StorageBackend for MemBackend {
    fn read_document(&self) -> Result<Option<String>> {
        Ok(self.document.borrow().clone())
    }

    fn write_document(&self, content: &str) -> Result<()> {
        if self.simulate_write_error.get() {
            return Err(JournalError::write(VIRTUAL_PATH, "Simulated write error"));
        }
        *self.document.borrow_mut() = Some(content.to_string());
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }

    fn location(&self) -> PathBuf {
        PathBuf::from(VIRTUAL_PATH)
    }
}
