use super::document_store::DocumentStore;
use super::fs_backend::FsBackend;
use super::StoreMode;
use std::path::PathBuf;

pub type FileStore = DocumentStore<FsBackend>;

impl FileStore {
    pub fn new(path: impl Into<PathBuf>, mode: StoreMode) -> Self {
        DocumentStore::with_backend(FsBackend::new(path), mode)
    }
}
