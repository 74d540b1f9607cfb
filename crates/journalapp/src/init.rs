//! # Choosing the Journal Document
//!
//! A fresh install has no journal yet. Rather than greeting the user with an empty screen, the
//! app shows a bundled **demo journal** if one is present, opened read-only so the sample data
//! is never overwritten.
//!
//! ## Source Resolution
//!
//! [`resolve_source`] picks the document in this order:
//!
//! 1. An explicit override (`--file`) → that path, read-write, whether or not it exists.
//! 2. The configured journal file exists → read-write.
//! 3. The configured demo file exists → read-only.
//! 4. Otherwise → the journal file, read-write. It is created on the first save.
//!
//! Relative paths are resolved against the working directory the process was started in.

use crate::api::JournalApi;
use crate::config::JournalConfig;
use crate::error::Result;
use crate::store::fs::FileStore;
use crate::store::StoreMode;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub struct JournalContext {
    pub api: JournalApi<FileStore>,
    pub config: JournalConfig,
    pub source: DocumentSource,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentSource {
    pub path: PathBuf,
    pub mode: StoreMode,
}

impl DocumentSource {
    pub fn is_demo(&self) -> bool {
        self.mode == StoreMode::ReadOnly
    }
}

pub fn resolve_source(
    config: &JournalConfig,
    cwd: &Path,
    file_override: Option<&Path>,
) -> DocumentSource {
    if let Some(path) = file_override {
        let path = if path.is_absolute() {
            path.to_path_buf()
        } else {
            cwd.join(path)
        };
        return DocumentSource {
            path,
            mode: StoreMode::ReadWrite,
        };
    }

    let journal = config.journal_path(cwd);
    if journal.exists() {
        return DocumentSource {
            path: journal,
            mode: StoreMode::ReadWrite,
        };
    }

    let demo = config.demo_path(cwd);
    if demo.exists() {
        info!(path = %demo.display(), "no journal yet, opening demo journal read-only");
        return DocumentSource {
            path: demo,
            mode: StoreMode::ReadOnly,
        };
    }

    DocumentSource {
        path: journal,
        mode: StoreMode::ReadWrite,
    }
}

/// Loads the configuration, picks the document and opens the store.
pub fn initialize(cwd: &Path, file_override: Option<PathBuf>) -> Result<JournalContext> {
    let config = JournalConfig::load(cwd)?;
    Ok(initialize_with(config, cwd, file_override))
}

/// Same as [`initialize`] with an already loaded configuration.
pub fn initialize_with(
    config: JournalConfig,
    cwd: &Path,
    file_override: Option<PathBuf>,
) -> JournalContext {
    let source = resolve_source(&config, cwd, file_override.as_deref());
    debug!(path = %source.path.display(), mode = %source.mode, "journal document selected");

    let store = FileStore::new(source.path.clone(), source.mode);
    JournalContext {
        api: JournalApi::new(store),
        config,
        source,
    }
}
