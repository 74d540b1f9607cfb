//! # Storage Layer
//!
//! The journal lives in **one YAML document**:
//!
//! ```yaml
//! entries:
//!   - id: …
//!     type: Buy
//!     …
//! ```
//!
//! The [`EntryStore`] trait is the contract the rest of the library works against. The store
//! owns the document exclusively and keeps no in-memory copy between calls: every read goes
//! back to the document and every mutation is a full **read-modify-write** that has been
//! flushed before the call returns.
//!
//! ## Split Between "What" and "How"
//!
//! - [`backend::StorageBackend`]: raw document I/O (filesystem or memory).
//! - [`document_store::DocumentStore`]: the CRUD rules on top of any backend.
//!
//! ## Atomicity
//!
//! Backends must replace the document atomically (write a temp file, then rename). A failed
//! write therefore leaves the previous document untouched, never a half-written one.
//!
//! ## Read-Only (Demo) Mode
//!
//! A store opened in [`StoreMode::ReadOnly`] accepts `create`, `update` and `delete` but never
//! touches the backend. Callers must check [`EntryStore::is_read_only`] before telling the user
//! that something was saved.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: YAML file on disk.
//! - [`memory::InMemoryStore`]: for testing logic without filesystem I/O.

use crate::error::Result;
use crate::model::Entry;
use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

pub mod backend;
pub mod document;
pub mod document_store;
pub mod fs;
pub mod fs_backend;
pub mod mem_backend;
pub mod memory;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum StoreMode {
    ReadWrite,
    /// Mutations are accepted and discarded.
    ReadOnly,
}

impl fmt::Display for StoreMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreMode::ReadWrite => write!(f, "read-write"),
            StoreMode::ReadOnly => write!(f, "read-only (demo)"),
        }
    }
}

/// Abstract interface for entry storage.
pub trait EntryStore {
    /// All entries, in document order. An absent or empty document is an empty journal.
    fn load_all(&self) -> Result<Vec<Entry>>;

    /// Look up one entry by its exact id.
    fn get(&self, id: &str) -> Result<Option<Entry>> {
        Ok(self.load_all()?.into_iter().find(|e| e.id == id))
    }

    /// Append an entry, assigning a fresh id when it has none. Returns the stored entry.
    fn create(&mut self, entry: Entry) -> Result<Entry>;

    /// Replace the entry with the same id wholesale.
    fn update(&mut self, entry: &Entry) -> Result<()>;

    /// Remove an entry. Returns `false` when no entry had that id.
    fn delete(&mut self, id: &str) -> Result<bool>;

    fn mode(&self) -> StoreMode;

    fn is_read_only(&self) -> bool {
        self.mode() == StoreMode::ReadOnly
    }

    /// Where the document lives (a real path for files, a virtual one for memory).
    fn location(&self) -> PathBuf;
}
