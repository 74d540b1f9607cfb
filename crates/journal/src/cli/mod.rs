//! # CLI Behavior
//!
//! This is **one possible UI client** for the journal, not the application itself.
//! It is the only place that knows about terminal I/O, exit codes and output formatting.
//!
//! ## Naked Execution (`journal`)
//!
//! Running `journal` with no command lists every entry, newest first.
//!
//! ## Which Journal?
//!
//! `--file PATH` always wins. Without it the configured journal is used when it exists,
//! otherwise the bundled demo journal is shown **read-only**: every listing starts with a
//! notice, and `add` / `edit` / `delete` report that nothing was saved.
//!
//! ## Editing
//!
//! `journal edit <id>` loads the entry, overwrites only the fields given as flags and saves the
//! whole entry back. Ids can be shortened to any unique prefix of four or more characters,
//! as shown in listings.
//!
//! ## Output Modes
//!
//! - `term` (default): colored cards when stdout supports it
//! - `text`: the same layout without ANSI codes
//! - `json`: the raw command result, for scripting
//!
//! ## Module Structure
//!
//! - `commands`: Dispatch and per-command handlers
//! - `logging`: `tracing` subscriber setup
//! - `markdown`: Note bodies, CommonMark to styled lines
//! - `render`: Template rendering and value formatting
//! - `setup`: Argument parsing via clap
//! - `styles`: Terminal theme
//! - `templates`: Embedded templates

mod commands;
mod logging;
mod markdown;
mod render;
pub mod setup;
mod styles;
mod templates;

pub use commands::run;
