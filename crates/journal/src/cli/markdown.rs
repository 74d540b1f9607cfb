//! Terminal rendering of entry notes.
//!
//! Notes are CommonMark. Headings, strong and emphasized text, code and links are mapped onto
//! theme styles and the markup itself is dropped. List items get a bullet or their number.
//!
//! Line breaks inside a paragraph are kept: notes are typed line by line and read better that way
//! in a terminal than reflowed.

use super::styles::{names, Theme};
use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd};

const CODE_INDENT: &str = "    ";
const RULE: &str = "───";

/// Renders a note into display lines, already styled.
pub fn note_lines(note: &str, theme: &Theme, use_color: bool) -> Vec<String> {
    let options = Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TASKLISTS;
    let mut writer = NoteWriter::new(theme, use_color);
    for event in Parser::new_ext(note, options) {
        writer.event(event);
    }
    writer.finish()
}

struct NoteWriter<'t> {
    theme: &'t Theme,
    use_color: bool,
    lines: Vec<String>,
    line: String,
    styles: Vec<&'static str>,
    /// Open lists, innermost last. `Some(n)` is an ordered list at item `n`.
    lists: Vec<Option<u64>>,
    in_code_block: bool,
}

impl<'t> NoteWriter<'t> {
    fn new(theme: &'t Theme, use_color: bool) -> Self {
        Self {
            theme,
            use_color,
            lines: Vec::new(),
            line: String::new(),
            styles: Vec::new(),
            lists: Vec::new(),
            in_code_block: false,
        }
    }

    fn event(&mut self, event: Event<'_>) {
        match event {
            Event::Start(tag) => self.start(tag),
            Event::End(tag) => self.end(tag),
            Event::Text(text) if self.in_code_block => {
                for line in text.lines() {
                    let styled = self.styled(names::NOTE_CODE, line);
                    self.lines.push(format!("{}{}", CODE_INDENT, styled));
                }
            }
            Event::Text(text) => {
                let style = self.current_style();
                self.push(style, &text);
            }
            Event::Code(code) => self.push(names::NOTE_CODE, &code),
            Event::Html(html) | Event::InlineHtml(html) => {
                self.push(names::NOTE, html.trim_end_matches('\n'))
            }
            Event::SoftBreak | Event::HardBreak => self.flush(),
            Event::Rule => {
                self.flush();
                let rule = self.styled(names::MUTED, RULE);
                self.lines.push(rule);
                self.block_done();
            }
            Event::TaskListMarker(done) => self.line.push_str(if done { "[x] " } else { "[ ] " }),
            _ => {}
        }
    }

    fn start(&mut self, tag: Tag<'_>) {
        match tag {
            Tag::Heading { .. } => self.styles.push(names::NOTE_HEADING),
            Tag::Strong => self.styles.push(names::NOTE_STRONG),
            Tag::Emphasis => self.styles.push(names::NOTE_EMPHASIS),
            Tag::Link { .. } => self.styles.push(names::NOTE_LINK),
            Tag::CodeBlock(_) => {
                self.flush();
                self.in_code_block = true;
            }
            Tag::List(start) => {
                self.flush();
                self.lists.push(start);
            }
            Tag::Item => {
                self.flush();
                let depth = self.lists.len().saturating_sub(1);
                let marker = match self.lists.last_mut() {
                    Some(Some(n)) => {
                        let marker = format!("{}.", n);
                        *n += 1;
                        marker
                    }
                    _ => "•".to_string(),
                };
                let marker = self.styled(names::MUTED, &marker);
                self.line = format!("{}{} ", "  ".repeat(depth), marker);
            }
            _ => {}
        }
    }

    fn end(&mut self, tag: TagEnd) {
        match tag {
            TagEnd::Heading(_) => {
                self.styles.pop();
                self.flush();
                self.block_done();
            }
            TagEnd::Strong | TagEnd::Emphasis | TagEnd::Link => {
                self.styles.pop();
            }
            TagEnd::Paragraph => {
                self.flush();
                self.block_done();
            }
            TagEnd::CodeBlock => {
                self.in_code_block = false;
                self.block_done();
            }
            TagEnd::Item => self.flush(),
            TagEnd::List(_) => {
                self.flush();
                self.lists.pop();
                self.block_done();
            }
            _ => {}
        }
    }

    fn current_style(&self) -> &'static str {
        self.styles.last().copied().unwrap_or(names::NOTE)
    }

    fn styled(&self, style: &str, text: &str) -> String {
        self.theme.apply(style, text, self.use_color)
    }

    fn push(&mut self, style: &str, text: &str) {
        let styled = self.styled(style, text);
        self.line.push_str(&styled);
    }

    fn flush(&mut self) {
        if !self.line.is_empty() {
            self.lines.push(std::mem::take(&mut self.line));
        }
    }

    /// Top-level blocks are separated by one blank line.
    fn block_done(&mut self) {
        let after_text = self.lines.last().is_some_and(|l| !l.is_empty());
        if self.lists.is_empty() && after_text {
            self.lines.push(String::new());
        }
    }

    fn finish(mut self) -> Vec<String> {
        self.flush();
        while self.lines.last().is_some_and(|l| l.is_empty()) {
            self.lines.pop();
        }
        self.lines
    }
}
