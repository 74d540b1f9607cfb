//! # Rendering Module
//!
//! Styled terminal output through minijinja templates and the theme in `styles.rs`.
//!
//! ## Design
//!
//! Formatting that needs real logic stays in Rust:
//! - the cost line (`50€ (4 x 12.5€)`), and `-` when there is nothing to price
//! - relative entry age (`3 months ago`) via `timeago`
//! - column padding, measured with `unicode-width` so tags with wide characters still line up
//! - note bodies, rendered from Markdown by `markdown.rs`
//!
//! Templates receive plain strings plus the style name to use for each piece.

use super::markdown::note_lines;
use super::setup::OutputMode;
use super::styles::{names, type_style, Theme, JOURNAL_THEME};
use super::templates;
use chrono::NaiveDate;
use console::Term;
use journalapp::commands::helpers::short_id;
use journalapp::commands::{CmdMessage, JournalStatus, MessageLevel, TagCount};
use journalapp::model::Entry;
use minijinja::{Environment, Error, Value};
use serde::Serialize;
use unicode_width::UnicodeWidthStr;

/// Characters of the id shown on each card. Any unique prefix of 4+ works as a selector.
pub const SHORT_ID_LEN: usize = 8;
pub const NO_COST: &str = "-";

pub struct Renderer {
    env: Environment<'static>,
    theme: Theme,
    use_color: bool,
}

impl Renderer {
    pub fn for_mode(mode: OutputMode) -> Result<Self, Error> {
        let use_color = match mode {
            OutputMode::Term => Term::stdout().features().colors_supported(),
            OutputMode::Text | OutputMode::Json => false,
        };
        Self::with_color(JOURNAL_THEME.clone(), use_color)
    }

    pub fn with_color(theme: Theme, use_color: bool) -> Result<Self, Error> {
        let mut env = Environment::new();
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);
        register_style_filter(&mut env, theme.clone(), use_color);
        for (name, source) in templates::ALL {
            env.add_template(name, source)?;
        }
        Ok(Self {
            env,
            theme,
            use_color,
        })
    }

    fn render<T: Serialize>(&self, name: &str, data: &T) -> Result<String, Error> {
        let mut out = self.env.get_template(name)?.render(data)?;
        if !out.is_empty() && !out.ends_with('\n') {
            out.push('\n');
        }
        Ok(out)
    }
}

fn register_style_filter(env: &mut Environment<'static>, theme: Theme, use_color: bool) {
    env.add_filter("style", move |value: Value, name: String| -> String {
        theme.apply(&name, &value.to_string(), use_color)
    });
}

/// What the list header should say about the document.
pub struct ListContext<'a> {
    pub currency: &'a str,
    pub today: NaiveDate,
    /// Set when the demo journal is shown; holds the notice text.
    pub demo_notice: Option<String>,
    pub empty_message: &'a str,
}

#[derive(Serialize)]
struct EntryView {
    heading: String,
    accent: &'static str,
    short_id: String,
    date_line: String,
    cost_line: String,
    note_lines: Vec<String>,
    tags: String,
}

#[derive(Serialize)]
struct EntriesData {
    demo_notice: Option<String>,
    empty_message: String,
    entries: Vec<EntryView>,
}

#[derive(Serialize)]
struct MessageView {
    content: String,
    style: &'static str,
}

#[derive(Serialize)]
struct MessagesData {
    messages: Vec<MessageView>,
}

#[derive(Serialize)]
struct TagRow {
    name: String,
    count: usize,
}

#[derive(Serialize)]
struct TagsData {
    tags: Vec<TagRow>,
}

#[derive(Serialize)]
struct StatusRow {
    label: String,
    value: String,
}

#[derive(Serialize)]
struct StatusData {
    demo: bool,
    rows: Vec<StatusRow>,
    types: Vec<StatusRow>,
}

pub fn render_entries(
    renderer: &Renderer,
    entries: &[Entry],
    ctx: &ListContext<'_>,
) -> Result<String, Error> {
    let data = EntriesData {
        demo_notice: ctx.demo_notice.clone(),
        empty_message: ctx.empty_message.to_string(),
        entries: entries
            .iter()
            .map(|e| entry_view(renderer, e, ctx))
            .collect(),
    };
    renderer.render("entries", &data)
}

pub fn render_messages(renderer: &Renderer, messages: &[CmdMessage]) -> Result<String, Error> {
    if messages.is_empty() {
        return Ok(String::new());
    }
    let data = MessagesData {
        messages: messages
            .iter()
            .map(|m| MessageView {
                content: m.content.clone(),
                style: message_style(&m.level),
            })
            .collect(),
    };
    renderer.render("messages", &data)
}

pub fn render_tags(renderer: &Renderer, tags: &[TagCount]) -> Result<String, Error> {
    let width = tags.iter().map(|t| t.name.width()).max().unwrap_or(0);
    let data = TagsData {
        tags: tags
            .iter()
            .map(|t| TagRow {
                name: pad_to_width(&t.name, width),
                count: t.count,
            })
            .collect(),
    };
    renderer.render("tags", &data)
}

pub fn render_status(renderer: &Renderer, status: &JournalStatus) -> Result<String, Error> {
    let rows = vec![
        ("Journal", status.location.display().to_string()),
        ("Mode", status.mode.to_string()),
        ("Entries", status.total.to_string()),
        (
            "Dates",
            match (&status.oldest, &status.newest) {
                (Some(oldest), Some(newest)) => format!("{} .. {}", oldest, newest),
                _ => NO_COST.to_string(),
            },
        ),
    ];
    let label_width = rows.iter().map(|(l, _)| l.width()).max().unwrap_or(0);
    let type_width = status
        .by_type
        .iter()
        .map(|t| t.entry_type.width())
        .max()
        .unwrap_or(0);

    let data = StatusData {
        demo: status.mode == journalapp::store::StoreMode::ReadOnly,
        rows: rows
            .into_iter()
            .map(|(label, value)| StatusRow {
                label: pad_to_width(label, label_width),
                value,
            })
            .collect(),
        types: status
            .by_type
            .iter()
            .map(|t| StatusRow {
                label: pad_to_width(&t.entry_type, type_width),
                value: t.count.to_string(),
            })
            .collect(),
    };
    renderer.render("status", &data)
}

pub fn render_json<T: Serialize>(value: &T) -> serde_json::Result<String> {
    let mut out = serde_json::to_string_pretty(value)?;
    out.push('\n');
    Ok(out)
}

fn entry_view(renderer: &Renderer, entry: &Entry, ctx: &ListContext<'_>) -> EntryView {
    EntryView {
        heading: heading(entry),
        accent: type_style(&entry.entry_type),
        short_id: short_id(&entry.id, SHORT_ID_LEN).to_string(),
        date_line: date_line(entry, ctx.today),
        cost_line: cost_line(entry, ctx.currency),
        note_lines: entry
            .note
            .as_deref()
            .map(|n| note_lines(n, &renderer.theme, renderer.use_color))
            .unwrap_or_default(),
        tags: entry.tags.join(", "),
    }
}

fn message_style(level: &MessageLevel) -> &'static str {
    match level {
        MessageLevel::Success => names::SUCCESS,
        MessageLevel::Warning => names::WARNING,
    }
}

/// `Buy - ACME`. The separator stays even without a title.
pub fn heading(entry: &Entry) -> String {
    format!("{} - {}", entry.entry_type, entry.title_or_empty())
}

/// `50€ (4 x 12.5€)`, or `-` when the entry has no (or a zero) cost.
pub fn cost_line(entry: &Entry, currency: &str) -> String {
    match (entry.cost(), entry.price, entry.amount) {
        (Some(cost), Some(price), Some(amount)) if cost != 0.0 => format!(
            "{}{cur} ({} x {}{cur})",
            format_number(cost),
            format_number(amount),
            format_number(price),
            cur = currency
        ),
        _ => NO_COST.to_string(),
    }
}

/// The stored date followed by its age relative to `today`.
pub fn date_line(entry: &Entry, today: NaiveDate) -> String {
    let raw = match entry.date.as_deref().map(str::trim) {
        Some(raw) if !raw.is_empty() => raw,
        _ => return NO_COST.to_string(),
    };
    let Some(date) = entry.parsed_date() else {
        return raw.to_string();
    };
    let days = (today - date).num_days();
    match days {
        0 => format!("{} (today)", raw),
        d if d > 0 => {
            let elapsed = std::time::Duration::from_secs(d as u64 * 86_400);
            format!("{} ({})", raw, timeago::Formatter::new().convert(elapsed))
        }
        _ => raw.to_string(),
    }
}

/// Shortest faithful rendering: `4`, `12.5`, `0.3` (float noise is rounded away).
pub fn format_number(value: f64) -> String {
    let rounded = (value * 1e8).round() / 1e8;
    if rounded == 0.0 {
        return "0".to_string();
    }
    format!("{}", rounded)
}

fn pad_to_width(s: &str, width: usize) -> String {
    let pad = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(pad))
}
