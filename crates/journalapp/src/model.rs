//! # Domain Model: Journal Entries
//!
//! A journal holds one kind of record, the [`Entry`]. Entries come in two flavours that share
//! the same shape:
//!
//! - **Transactional** (`Buy`, `Sell`): the title names the asset, and `price` / `amount`
//!   describe the trade. The derived [`Entry::cost`] is `price * amount`.
//! - **Narrative** (`Market Stories`, `Lessons Learned`, `Success Stories`, `Strategy`):
//!   the title is a headline and the note carries the body.
//!
//! ## On-Disk Shape
//!
//! ```yaml
//! - id: 3f0c…           # opaque, never reused
//!   type: Buy           # human label, see EntryType
//!   title: ACME         # `asset` is accepted as an alias when reading
//!   price: 12.5
//!   amount: 4
//!   note: "Bought the dip. **Markdown** is kept verbatim."
//!   tags: [dip, tech]
//!   date: '2024-03-01'  # YYYY-MM-DD, set once at creation
//! ```
//!
//! Absent optional fields are omitted on write. Documents produced by older tools write
//! explicit `null`s; those read back as absent.
//!
//! ## Editing
//!
//! The editor works on an [`EntryDraft`]: the form fields as the user typed them.
//! A draft becomes an entry in one of two ways:
//!
//! - [`EntryDraft::into_new_entry`]: fresh id, `date` = today.
//! - [`EntryDraft::into_edited_entry`]: keeps the existing `id` **and** `date`, replaces
//!   every other field wholesale.
//!
//! [`EntryDraft::from_entry`] is the reverse step used to pre-fill the form when an edit starts.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::error::{JournalError, Result};

/// Date format used for the `date` field.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EntryType {
    Buy,
    Sell,
    MarketStories,
    LessonsLearned,
    SuccessStories,
    Strategy,
    /// A label this version does not know. Kept so the document round-trips,
    /// but the editor never produces it.
    Other(String),
}

impl EntryType {
    /// The known types in display order.
    pub const ALL: [EntryType; 6] = [
        EntryType::Buy,
        EntryType::Sell,
        EntryType::MarketStories,
        EntryType::LessonsLearned,
        EntryType::SuccessStories,
        EntryType::Strategy,
    ];

    pub fn label(&self) -> &str {
        match self {
            EntryType::Buy => "Buy",
            EntryType::Sell => "Sell",
            EntryType::MarketStories => "Market Stories",
            EntryType::LessonsLearned => "Lessons Learned",
            EntryType::SuccessStories => "Success Stories",
            EntryType::Strategy => "Strategy",
            EntryType::Other(label) => label,
        }
    }

    pub fn is_transactional(&self) -> bool {
        matches!(self, EntryType::Buy | EntryType::Sell)
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, EntryType::Other(_))
    }
}

impl fmt::Display for EntryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl From<String> for EntryType {
    fn from(label: String) -> Self {
        EntryType::ALL
            .iter()
            .find(|t| t.label() == label)
            .cloned()
            .unwrap_or(EntryType::Other(label))
    }
}

impl From<EntryType> for String {
    fn from(t: EntryType) -> Self {
        t.label().to_string()
    }
}

/// Parses user input leniently: case-insensitive, and `-` / `_` count as spaces,
/// so `market-stories` and `LESSONS_LEARNED` both work.
///
/// Unknown labels are a validation error rather than [`EntryType::Other`].
impl FromStr for EntryType {
    type Err = JournalError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = normalize_label(s);
        EntryType::ALL
            .iter()
            .find(|t| normalize_label(t.label()) == wanted)
            .cloned()
            .ok_or_else(|| {
                let known: Vec<&str> = EntryType::ALL.iter().map(|t| t.label()).collect();
                JournalError::Validation(format!(
                    "unknown entry type '{}' (expected one of: {})",
                    s.trim(),
                    known.join(", ")
                ))
            })
    }
}

fn normalize_label(s: &str) -> String {
    s.trim()
        .to_lowercase()
        .replace(['-', '_'], " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub id: String,
    #[serde(rename = "type")]
    pub entry_type: EntryType,
    #[serde(default, alias = "asset", skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

/// Reads an explicit YAML `null` as the type's default.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl Entry {
    /// `price * amount`, only when both are present.
    pub fn cost(&self) -> Option<f64> {
        match (self.price, self.amount) {
            (Some(price), Some(amount)) => Some(price * amount),
            _ => None,
        }
    }

    /// The `date` field as a calendar date, if present and well formed.
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        let raw = self.date.as_deref()?.trim();
        NaiveDate::parse_from_str(raw, DATE_FORMAT).ok()
    }

    pub fn year(&self) -> Option<i32> {
        self.parsed_date().map(|d| d.year())
    }

    pub fn title_or_empty(&self) -> &str {
        self.title.as_deref().unwrap_or("")
    }

    /// Case-insensitive tag membership, ignoring surrounding whitespace.
    pub fn has_tag(&self, tag: &str) -> bool {
        let wanted = tag.trim().to_lowercase();
        self.tags.iter().any(|t| t.trim().to_lowercase() == wanted)
    }
}

/// The editor form: what the user typed before it becomes an [`Entry`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EntryDraft {
    pub entry_type: Option<EntryType>,
    pub title: Option<String>,
    pub price: Option<f64>,
    pub amount: Option<f64>,
    pub note: Option<String>,
    /// Comma-separated, exactly as typed.
    pub tags: String,
}

impl EntryDraft {
    pub fn new(entry_type: EntryType) -> Self {
        Self {
            entry_type: Some(entry_type),
            ..Default::default()
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }

    pub fn with_amount(mut self, amount: f64) -> Self {
        self.amount = Some(amount);
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    pub fn with_tags(mut self, tags: impl Into<String>) -> Self {
        self.tags = tags.into();
        self
    }

    /// Pre-fills the form from an existing entry.
    pub fn from_entry(entry: &Entry) -> Self {
        Self {
            entry_type: Some(entry.entry_type.clone()),
            title: entry.title.clone(),
            price: entry.price,
            amount: entry.amount,
            note: entry.note.clone(),
            tags: entry.tags.join(", "),
        }
    }

    /// Checks the form. Returns the first problem found.
    pub fn validate(&self) -> Result<()> {
        let entry_type = self
            .entry_type
            .as_ref()
            .ok_or_else(|| JournalError::Validation("entry type is required".into()))?;
        if !entry_type.is_known() {
            return Err(JournalError::Validation(format!(
                "unknown entry type '{}'",
                entry_type
            )));
        }
        if let Some(price) = self.price {
            if !price.is_finite() {
                return Err(JournalError::Validation("price must be a number".into()));
            }
            if price < 0.0 {
                return Err(JournalError::Validation(
                    "price cannot be negative".into(),
                ));
            }
        }
        if let Some(amount) = self.amount {
            if !amount.is_finite() {
                return Err(JournalError::Validation("amount must be a number".into()));
            }
        }
        Ok(())
    }

    /// Builds a brand-new entry: fresh id, dated `today`.
    pub fn into_new_entry(self, today: NaiveDate) -> Result<Entry> {
        let id = Uuid::new_v4().to_string();
        let date = today.format(DATE_FORMAT).to_string();
        self.into_entry(id, Some(date))
    }

    /// Builds the replacement for `existing`. Identity and creation date survive,
    /// everything else comes from the form.
    pub fn into_edited_entry(self, existing: &Entry) -> Result<Entry> {
        self.into_entry(existing.id.clone(), existing.date.clone())
    }

    fn into_entry(self, id: String, date: Option<String>) -> Result<Entry> {
        self.validate()?;
        let tags = parse_tags(&self.tags);
        let entry_type = self
            .entry_type
            .ok_or_else(|| JournalError::Validation("entry type is required".into()))?;
        Ok(Entry {
            id,
            entry_type,
            title: non_blank(self.title).map(|t| t.trim().to_string()),
            price: self.price,
            amount: self.amount,
            note: non_blank(self.note),
            tags,
            date,
        })
    }
}

/// `None` for missing or whitespace-only text. Anything else is kept as typed.
fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Splits a comma-separated tag string.
///
/// Tags are trimmed, empty pieces are dropped and later duplicates (compared
/// case-insensitively) are removed, keeping the first spelling.
pub fn parse_tags(raw: &str) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();
    for piece in raw.split(',') {
        let tag = piece.trim();
        if tag.is_empty() {
            continue;
        }
        let lowered = tag.to_lowercase();
        if tags.iter().any(|t| t.to_lowercase() == lowered) {
            continue;
        }
        tags.push(tag.to_string());
    }
    tags
}
