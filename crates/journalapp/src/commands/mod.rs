//! # Command Layer
//!
//! This module contains the **core business logic** of the journal. Each command lives in its
//! own submodule and implements plain Rust functions over an [`EntryStore`](crate::store::EntryStore).
//!
//! ## Role and Responsibilities
//!
//! Commands are where the real work happens:
//! - Turn editor drafts into entries and hand them to the store
//! - Resolve user-supplied id selectors (full ids or short prefixes)
//! - Apply the filter engine and the newest-first ordering
//! - Return structured `CmdResult` with affected entries and messages
//!
//! ## What Commands Do NOT Do
//!
//! - **Any I/O** beyond the store: no stdout, stderr, or terminal concerns
//! - **Argument parsing**: That's the CLI layer's job
//! - **Exit codes**: Return `Result`, let the caller decide
//!
//! ## Read-Only Journals
//!
//! Every mutating command checks the store mode and, for a demo journal, reports a warning
//! instead of a success message. The entry is still returned so the UI can show what *would*
//! have been saved.
//!
//! ## Command Modules
//!
//! - [`create`]: Add a new entry
//! - [`list`]: Filtered, newest-first listing
//! - [`view`]: Fetch one entry (also the edit-load step)
//! - [`update`]: Replace an entry's fields, keeping id and date
//! - [`delete`]: Remove an entry
//! - [`tags`]: Tag usage summary
//! - [`status`]: Where the journal lives and what it holds
//! - [`helpers`]: Id selector resolution

use crate::model::Entry;
use crate::store::StoreMode;
use serde::Serialize;
use std::path::PathBuf;

pub mod create;
pub mod delete;
pub mod helpers;
pub mod list;
pub mod status;
pub mod tags;
pub mod update;
pub mod view;

/// Shown whenever a mutation hits a read-only journal.
pub const DEMO_WARNING: &str = "Demo journal: changes are not saved";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Success,
    Warning,
}

#[derive(Debug, Clone, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

/// How often a tag is used. `name` is the first spelling seen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagCount {
    pub name: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypeCount {
    pub entry_type: String,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct JournalStatus {
    pub location: PathBuf,
    pub mode: StoreMode,
    pub total: usize,
    pub by_type: Vec<TypeCount>,
    pub newest: Option<String>,
    pub oldest: Option<String>,
}

#[derive(Debug, Default, Serialize)]
pub struct CmdResult {
    pub affected_entries: Vec<Entry>,
    pub listed_entries: Vec<Entry>,
    pub messages: Vec<CmdMessage>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<TagCount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<JournalStatus>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_entries(mut self, entries: Vec<Entry>) -> Self {
        self.listed_entries = entries;
        self
    }
}

/// `Buy - ACME`, or just the type when there is no title.
pub(crate) fn describe(entry: &Entry) -> String {
    match entry.title.as_deref() {
        Some(title) if !title.is_empty() => format!("{} - {}", entry.entry_type, title),
        _ => entry.entry_type.to_string(),
    }
}
