//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It is the single entry point
//! for journal operations, whatever UI sits on top.
//!
//! The facade:
//! - **Dispatches** to the matching command function
//! - **Supplies ambient inputs** the commands take as arguments (today's date for `create`)
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! It does not render anything and holds no business rules.
//!
//! ## Generic Over EntryStore
//!
//! `JournalApi<S: EntryStore>`:
//! - Production: `JournalApi<FileStore>`
//! - Testing: `JournalApi<InMemoryStore>`

use crate::commands::{self, CmdResult};
use crate::error::Result;
use crate::filter::FilterCriteria;
use crate::model::EntryDraft;
use crate::store::{EntryStore, StoreMode};
use chrono::{Local, NaiveDate};
use std::path::PathBuf;

pub struct JournalApi<S: EntryStore> {
    store: S,
}

impl<S: EntryStore> JournalApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn list_entries(&self, criteria: &FilterCriteria) -> Result<CmdResult> {
        commands::list::run(&self.store, criteria)
    }

    pub fn view_entry(&self, selector: &str) -> Result<CmdResult> {
        commands::view::run(&self.store, selector)
    }

    /// Creates an entry dated today (local time).
    pub fn create_entry(&mut self, draft: EntryDraft) -> Result<CmdResult> {
        self.create_entry_on(draft, Local::now().date_naive())
    }

    pub fn create_entry_on(&mut self, draft: EntryDraft, today: NaiveDate) -> Result<CmdResult> {
        commands::create::run(&mut self.store, draft, today)
    }

    pub fn update_entry(&mut self, selector: &str, draft: EntryDraft) -> Result<CmdResult> {
        commands::update::run(&mut self.store, selector, draft)
    }

    pub fn delete_entry(&mut self, selector: &str) -> Result<CmdResult> {
        commands::delete::run(&mut self.store, selector)
    }

    pub fn tags(&self) -> Result<CmdResult> {
        commands::tags::run(&self.store)
    }

    pub fn status(&self) -> Result<CmdResult> {
        commands::status::run(&self.store)
    }

    pub fn mode(&self) -> StoreMode {
        self.store.mode()
    }

    pub fn is_read_only(&self) -> bool {
        self.store.is_read_only()
    }

    pub fn location(&self) -> PathBuf {
        self.store.location()
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
