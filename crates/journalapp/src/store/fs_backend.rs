use super::backend::StorageBackend;
use crate::error::{JournalError, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// A single YAML document on disk.
pub struct FsBackend {
    path: PathBuf,
}

impl FsBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn parent_dir(&self) -> PathBuf {
        match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
            _ => PathBuf::from("."),
        }
    }

    fn tmp_path(&self, dir: &Path) -> PathBuf {
        let name = self
            .path
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("journal");
        dir.join(format!(".{}-{}.tmp", name, Uuid::new_v4()))
    }
}

impl StorageBackend for FsBackend {
    fn read_document(&self) -> Result<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(JournalError::read(&self.path, e)),
        }
    }

    fn write_document(&self, content: &str) -> Result<()> {
        let dir = self.parent_dir();
        if !dir.exists() {
            fs::create_dir_all(&dir).map_err(|e| JournalError::write(&self.path, e))?;
        }

        // Atomic Write
        let tmp_path = self.tmp_path(&dir);
        if let Err(e) = fs::write(&tmp_path, content) {
            let _ = fs::remove_file(&tmp_path);
            return Err(JournalError::write(&self.path, e));
        }
        if let Err(e) = fs::rename(&tmp_path, &self.path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(JournalError::write(&self.path, e));
        }

        Ok(())
    }

    fn location(&self) -> PathBuf {
        self.path.clone()
    }
}
