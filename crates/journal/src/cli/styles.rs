//! Styles for the journal CLI.
//!
//! Templates never name colors. They use semantic style names (`time`, `cost`, `tags`)
//! through the `style` filter, and this module maps those names to `console::Style` values.
//!
//! Each entry type has its own accent, used for the card heading:
//!
//! | Type | Accent |
//! |------|--------|
//! | Buy | light green |
//! | Sell | wheat |
//! | Market Stories | sky blue |
//! | Lessons Learned | soft red |
//! | Success Stories | yellow |
//! | Strategy | violet |
//! | anything else | light grey |
//!
//! The theme is built once through `once_cell::sync::Lazy`.

use console::Style;
use journalapp::model::EntryType;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Prepended to text styled with a name the theme does not define.
pub const MISSING_STYLE_INDICATOR: &str = "(!?)";

/// Style identifiers shared between templates and renderers.
pub mod names {
    pub const REGULAR: &str = "regular";
    pub const MUTED: &str = "muted";
    pub const TITLE: &str = "title";
    pub const ID: &str = "id";
    pub const TIME: &str = "time";
    pub const COST: &str = "cost";
    pub const NOTE: &str = "note";
    pub const NOTE_HEADING: &str = "note-heading";
    pub const NOTE_STRONG: &str = "note-strong";
    pub const NOTE_EMPHASIS: &str = "note-emphasis";
    pub const NOTE_CODE: &str = "note-code";
    pub const NOTE_LINK: &str = "note-link";
    pub const TAGS: &str = "tags";
    pub const COUNT: &str = "count";
    pub const DEMO: &str = "demo";
    pub const SUCCESS: &str = "success";
    pub const WARNING: &str = "warning";
    // Entry type accents
    pub const TYPE_BUY: &str = "type-buy";
    pub const TYPE_SELL: &str = "type-sell";
    pub const TYPE_MARKET_STORIES: &str = "type-market-stories";
    pub const TYPE_LESSONS_LEARNED: &str = "type-lessons-learned";
    pub const TYPE_SUCCESS_STORIES: &str = "type-success-stories";
    pub const TYPE_STRATEGY: &str = "type-strategy";
    pub const TYPE_OTHER: &str = "type-other";
}

#[derive(Clone, Default)]
pub struct Theme {
    styles: HashMap<String, Style>,
}

impl Theme {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(mut self, name: &str, style: Style) -> Self {
        self.styles.insert(name.to_string(), style);
        self
    }

    pub fn has(&self, name: &str) -> bool {
        self.styles.contains_key(name)
    }

    /// Applies a named style. Unknown names are flagged instead of silently ignored.
    pub fn apply(&self, name: &str, text: &str, use_color: bool) -> String {
        match self.styles.get(name) {
            Some(style) if use_color => style.apply_to(text).force_styling(true).to_string(),
            Some(_) => text.to_string(),
            None => format!("{} {}", MISSING_STYLE_INDICATOR, text),
        }
    }
}

pub static JOURNAL_THEME: Lazy<Theme> = Lazy::new(build_theme);

/// The accent style name for an entry type.
pub fn type_style(entry_type: &EntryType) -> &'static str {
    match entry_type {
        EntryType::Buy => names::TYPE_BUY,
        EntryType::Sell => names::TYPE_SELL,
        EntryType::MarketStories => names::TYPE_MARKET_STORIES,
        EntryType::LessonsLearned => names::TYPE_LESSONS_LEARNED,
        EntryType::SuccessStories => names::TYPE_SUCCESS_STORIES,
        EntryType::Strategy => names::TYPE_STRATEGY,
        EntryType::Other(_) => names::TYPE_OTHER,
    }
}

fn accent(rgb: (u8, u8, u8)) -> Style {
    Style::new().color256(rgb_to_ansi256(rgb)).bold()
}

fn build_theme() -> Theme {
    let regular = Style::new();
    let muted = Style::new().color256(rgb_to_ansi256((150, 150, 150)));

    Theme::new()
        .add(names::REGULAR, regular.clone())
        .add(names::MUTED, muted.clone())
        .add(names::TITLE, regular.clone().bold())
        .add(names::ID, muted.clone())
        .add(names::TIME, muted.italic())
        .add(names::COST, Style::new().cyan())
        .add(names::NOTE, regular.clone())
        .add(names::NOTE_HEADING, regular.clone().bold().underlined())
        .add(names::NOTE_STRONG, regular.clone().bold())
        .add(names::NOTE_EMPHASIS, regular.italic())
        .add(names::NOTE_CODE, Style::new().color256(rgb_to_ansi256((215, 175, 95))))
        .add(names::NOTE_LINK, Style::new().blue().underlined())
        .add(names::TAGS, Style::new().color256(rgb_to_ansi256((95, 135, 215))))
        .add(names::COUNT, Style::new().bold())
        .add(names::DEMO, Style::new().black().on_yellow())
        .add(names::SUCCESS, Style::new().green())
        .add(names::WARNING, Style::new().yellow().bold())
        .add(names::TYPE_BUY, accent((144, 238, 144)))
        .add(names::TYPE_SELL, accent((245, 222, 179)))
        .add(names::TYPE_MARKET_STORIES, accent((135, 206, 235)))
        .add(names::TYPE_LESSONS_LEARNED, accent((255, 102, 102)))
        .add(names::TYPE_SUCCESS_STORIES, accent((255, 241, 102)))
        .add(names::TYPE_STRATEGY, accent((218, 102, 255)))
        .add(names::TYPE_OTHER, accent((233, 236, 239)))
}

/// Nearest ANSI 256-color palette index for an RGB triplet.
pub fn rgb_to_ansi256((r, g, b): (u8, u8, u8)) -> u8 {
    if r == g && g == b {
        if r < 8 {
            16
        } else if r > 248 {
            231
        } else {
            232 + ((r as u16 - 8) * 24 / 247) as u8
        }
    } else {
        let cube = |c: u8| ((c as u16 * 5 + 127) / 255) as u8;
        16 + 36 * cube(r) + 6 * cube(g) + cube(b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_entry_type_has_an_accent() {
        for t in EntryType::ALL.iter() {
            assert!(JOURNAL_THEME.has(type_style(t)));
        }
        assert!(JOURNAL_THEME.has(type_style(&EntryType::Other("X".into()))));
    }

    #[test]
    fn plain_mode_returns_text_unchanged() {
        assert_eq!(JOURNAL_THEME.apply(names::COST, "12€", false), "12€");
    }

    #[test]
    fn color_mode_emits_ansi() {
        let styled = JOURNAL_THEME.apply(names::WARNING, "careful", true);
        assert!(styled.contains("\u{1b}["));
        assert!(styled.contains("careful"));
    }

    #[test]
    fn unknown_style_is_flagged() {
        assert_eq!(
            JOURNAL_THEME.apply("nope", "text", false),
            format!("{} text", MISSING_STYLE_INDICATOR)
        );
    }

    #[test]
    fn ansi256_maps_greys_and_colors() {
        assert_eq!(rgb_to_ansi256((0, 0, 0)), 16);
        assert_eq!(rgb_to_ansi256((255, 255, 255)), 231);
        assert_eq!(rgb_to_ansi256((255, 0, 0)), 196);
    }
}
