use crate::error::Result;
use std::path::PathBuf;

/// Abstract interface for raw document I/O.
/// This trait handles the "how" of storage (filesystem vs memory),
/// while DocumentStore handles the "what" (CRUD rules, read-only mode).
pub trait StorageBackend {
    /// Read the whole document.
    /// Returns Ok(None) if it does not exist yet.
    /// Returns Err only on actual I/O errors (permissions, disk failure).
    fn read_document(&self) -> Result<Option<String>>;

    /// Replace the whole document.
    /// MUST be atomic (e.g. write to tmp then rename) to avoid partial writes.
    fn write_document(&self, content: &str) -> Result<()>;

    /// The document path. For MemBackend, a virtual path.
    fn location(&self) -> PathBuf;
}
