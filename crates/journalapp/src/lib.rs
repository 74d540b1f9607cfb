//! # Journal Architecture
//!
//! `journalapp` is a **UI-agnostic investment journal library**. The `journal` binary is one
//! client of it; nothing in here knows about terminals.
//!
//! A journal is a list of [`model::Entry`] records kept in a single YAML document: buys and
//! sells with a price and amount, plus narrative notes (market stories, lessons learned,
//! success stories, strategy).
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI (journal crate)                                        │
//! │  - Parses arguments, renders cards, owns stdout/exit codes  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs) + Filter Engine (filter.rs)  │
//! │  - Business logic over Rust types                           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - EntryStore trait over one YAML document                  │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes plain arguments and returns `Result<CmdResult>`.
//! It never prints and never exits. Diagnostics go through `tracing`; installing a
//! subscriber is the client's choice.
//!
//! ## Module Overview
//!
//! - [`api`]: Facade, entry point for every client
//! - [`commands`]: One module per operation
//! - [`filter`]: Type / year / tag filtering and newest-first ordering
//! - [`model`]: `Entry`, `EntryType`, `EntryDraft`
//! - [`store`]: Document storage, atomic writes, read-only demo mode
//! - [`config`]: Layered `journal.toml` configuration
//! - [`init`]: Picks the document (journal, demo, or fresh) and wires the API
//! - [`error`]: `JournalError` and `Result`

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod filter;
pub mod init;
pub mod model;
pub mod store;

#[cfg(test)]
pub mod test_utils;
