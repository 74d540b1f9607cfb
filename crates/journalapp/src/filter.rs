//! # Entry Filtering
//!
//! Narrowing the visible entries is a pure function: `(entries, criteria) -> entries`.
//! The criteria are what the user typed into the filter bar; they are compiled into a list of
//! [`EntryFilter`] predicates that are combined with AND.
//!
//! | Criterion | Input | Active when |
//! |-----------|-------|-------------|
//! | type | `ALL` or one type label | not `ALL` |
//! | year | free text | exactly four ASCII digits |
//! | tags | comma-separated list | at least one non-empty tag |
//!
//! Inputs that don't activate a filter are ignored rather than reported: a half-typed year
//! such as `202` simply shows everything until the fourth digit arrives.
//!
//! Entries with a missing or malformed `date` never match an active year filter.
//! Tag matching is whole-tag equality after trimming and lowercasing, so `fed` matches `FED`
//! but not `federal`.
//!
//! Ordering is the caller's business; [`sort_by_date_desc`] gives the journal's newest-first view.

use crate::error::Result;
use crate::model::{Entry, EntryType};
use std::cmp::Ordering;
use std::str::FromStr;

/// Type restriction from the filter bar.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TypeFilter {
    #[default]
    All,
    Only(EntryType),
}

impl FromStr for TypeFilter {
    type Err = crate::error::JournalError;

    fn from_str(s: &str) -> Result<Self> {
        if s.trim().eq_ignore_ascii_case("all") {
            Ok(TypeFilter::All)
        } else {
            Ok(TypeFilter::Only(s.parse()?))
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub entry_type: TypeFilter,
    /// Raw year text, e.g. `"2024"`.
    pub year: Option<String>,
    /// Raw comma-separated tags, e.g. `"macro, fed"`.
    pub tags: Option<String>,
}

impl FilterCriteria {
    pub fn with_type(mut self, entry_type: EntryType) -> Self {
        self.entry_type = TypeFilter::Only(entry_type);
        self
    }

    pub fn with_year(mut self, year: impl Into<String>) -> Self {
        self.year = Some(year.into());
        self
    }

    pub fn with_tags(mut self, tags: impl Into<String>) -> Self {
        self.tags = Some(tags.into());
        self
    }

    /// The predicates these criteria activate. Empty means "match everything".
    pub fn compile(&self) -> Vec<EntryFilter> {
        let mut filters = Vec::new();
        if let TypeFilter::Only(t) = &self.entry_type {
            filters.push(EntryFilter::Type(t.clone()));
        }
        if let Some(year) = self.year.as_deref().and_then(parse_year) {
            filters.push(EntryFilter::Year(year));
        }
        if let Some(tags) = self.tags.as_deref() {
            let wanted = parse_filter_tags(tags);
            if !wanted.is_empty() {
                filters.push(EntryFilter::AnyTag(wanted));
            }
        }
        filters
    }
}

/// A single filter condition on an entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryFilter {
    Type(EntryType),
    Year(i32),
    /// Lowercased, trimmed, non-empty tags. Matches if the entry has any of them.
    AnyTag(Vec<String>),
}

impl EntryFilter {
    pub fn matches(&self, entry: &Entry) -> bool {
        match self {
            EntryFilter::Type(t) => entry.entry_type == *t,
            EntryFilter::Year(year) => entry.year() == Some(*year),
            EntryFilter::AnyTag(wanted) => wanted.iter().any(|tag| entry.has_tag(tag)),
        }
    }
}

/// Keeps the entries matching every active criterion, preserving input order.
pub fn filter_entries(entries: Vec<Entry>, criteria: &FilterCriteria) -> Vec<Entry> {
    let filters = criteria.compile();
    if filters.is_empty() {
        return entries;
    }
    entries
        .into_iter()
        .filter(|e| filters.iter().all(|f| f.matches(e)))
        .collect()
}

/// Newest first. `YYYY-MM-DD` compares correctly as a string; entries without a date go last.
pub fn sort_by_date_desc(entries: &mut [Entry]) {
    entries.sort_by(|a, b| compare_dates_desc(a.date.as_deref(), b.date.as_deref()));
}

fn compare_dates_desc(a: Option<&str>, b: Option<&str>) -> Ordering {
    let a = a.map(str::trim).filter(|d| !d.is_empty());
    let b = b.map(str::trim).filter(|d| !d.is_empty());
    match (a, b) {
        (Some(a), Some(b)) => b.cmp(a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

fn parse_year(raw: &str) -> Option<i32> {
    let raw = raw.trim();
    if raw.len() == 4 && raw.bytes().all(|b| b.is_ascii_digit()) {
        raw.parse().ok()
    } else {
        None
    }
}

fn parse_filter_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|t| t.trim().to_lowercase())
        .filter(|t| !t.is_empty())
        .collect()
}
