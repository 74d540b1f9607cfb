//! # Configuration
//!
//! Journal configuration is managed by [`confique`], layering environment variables over TOML
//! files over compiled defaults.
//!
//! ## Storage Hierarchy
//!
//! Resolved in priority order:
//! 1. **Environment variables**: `JOURNAL_FILE`, `JOURNAL_DEMO_FILE`, `JOURNAL_CURRENCY`.
//! 2. **Local Config**: `journal.toml` in the working directory.
//! 3. **User Config**: `journal.toml` in the OS config directory (via `directories`).
//! 4. **Compiled Defaults**: `#[config(default = ...)]`.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `journal_file` | `journal.yaml` | The real, writable journal document |
//! | `demo_file` | `dummy_journal.yaml` | Sample document shown read-only when there is no journal yet |
//! | `currency` | `€` | Symbol appended to prices and costs |

use crate::error::{JournalError, Result};
use confique::Config;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "journal.toml";

#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct JournalConfig {
    /// Path of the journal document. Relative paths are taken from the working directory.
    #[config(env = "JOURNAL_FILE", default = "journal.yaml")]
    pub journal_file: PathBuf,

    /// Sample document opened read-only when `journal_file` does not exist.
    #[config(env = "JOURNAL_DEMO_FILE", default = "dummy_journal.yaml")]
    pub demo_file: PathBuf,

    #[config(env = "JOURNAL_CURRENCY", default = "€")]
    pub currency: String,
}

impl Default for JournalConfig {
    fn default() -> Self {
        Self {
            journal_file: PathBuf::from("journal.yaml"),
            demo_file: PathBuf::from("dummy_journal.yaml"),
            currency: "€".to_string(),
        }
    }
}

impl JournalConfig {
    /// Loads the layered configuration for a process running in `cwd`.
    pub fn load(cwd: &Path) -> Result<Self> {
        let mut builder = JournalConfig::builder()
            .env()
            .file(cwd.join(CONFIG_FILE_NAME));
        if let Some(user_file) = user_config_file() {
            builder = builder.file(user_file);
        }
        builder
            .load()
            .map_err(|e| JournalError::Config(e.to_string()))
    }

    /// Loads only from one explicit file (plus defaults). Missing files are fine.
    pub fn from_file(path: &Path) -> Result<Self> {
        JournalConfig::builder()
            .file(path)
            .load()
            .map_err(|e| JournalError::Config(e.to_string()))
    }

    pub fn journal_path(&self, cwd: &Path) -> PathBuf {
        absolutize(cwd, &self.journal_file)
    }

    pub fn demo_path(&self, cwd: &Path) -> PathBuf {
        absolutize(cwd, &self.demo_file)
    }
}

/// `journal.toml` in the user's config directory, when the OS has one.
pub fn user_config_file() -> Option<PathBuf> {
    ProjectDirs::from("com", "journal", "journal")
        .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
}

fn absolutize(cwd: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    }
}
