//! # CLI Templates
//!
//! Terminal output is rendered from minijinja templates kept in `templates/` and embedded at
//! compile time, so layout can be edited and diffed apart from the code.
//!
//! Conventions:
//!
//! 1. Templates only pick styles by semantic name (`{{ x | style("time") }}`); colors live in
//!    `styles.rs`.
//! 2. Anything needing real logic (number formatting, relative dates, column widths) is computed
//!    in `render.rs` and handed over as plain strings. Note lines arrive already styled.
//! 3. The environment runs with `trim_blocks` and `lstrip_blocks`, so block tags on their own
//!    line produce no output.

pub const ENTRIES_TEMPLATE: &str = include_str!("templates/entries.jinja");
pub const MESSAGES_TEMPLATE: &str = include_str!("templates/messages.jinja");
pub const TAGS_TEMPLATE: &str = include_str!("templates/tags.jinja");
pub const STATUS_TEMPLATE: &str = include_str!("templates/status.jinja");

/// Name and source of every template, for registration.
pub const ALL: [(&str, &str); 4] = [
    ("entries", ENTRIES_TEMPLATE),
    ("messages", MESSAGES_TEMPLATE),
    ("tags", TAGS_TEMPLATE),
    ("status", STATUS_TEMPLATE),
];
