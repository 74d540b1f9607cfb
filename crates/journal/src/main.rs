//! # Journal CLI
//!
//! The binary is intentionally thin: the CLI lives in `src/cli/`, while this file only invokes
//! `cli::run()` and handles process termination.
//!
//! ## Workspace Structure
//!
//! - `crates/journalapp/`: Core library, UI-agnostic business logic
//! - `crates/journal/`: This CLI tool, depends on `journalapp`
//!
//! ## Layering
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (crates/journal/src/cli/)                        │
//! │  - clap argument parsing (setup.rs)                         │
//! │  - Context wiring + dispatch (commands.rs)                  │
//! │  - Rendering via minijinja templates (render.rs)            │
//! │  - tracing subscriber (logging.rs)                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (crates/journalapp/src/api.rs)                   │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Everything from `api.rs` inward is UI agnostic. The CLI layer owns argument parsing,
//! context initialization, rendering and exit codes.
//!
//! ## Testing Approach
//!
//! - **Library**: unit tests per command, integration tests against real files.
//! - **CLI**: rendering is tested with canned entries in `render.rs`; end-to-end runs of
//!   the binary live in `tests/`.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
