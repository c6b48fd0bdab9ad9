//! Markdown to ratatui rendering
//!
//! Keeps a small render cache so redraws on every tick do not re-parse an
//! unchanged summary.

use std::cell::RefCell;
use std::collections::hash_map::DefaultHasher;
use std::collections::HashMap;
use std::hash::{Hash, Hasher};

use pulldown_cmark::{Event, HeadingLevel, Options, Parser, Tag, TagEnd};
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};
use unicode_width::UnicodeWidthStr;

use crate::ui::theme::{ACCENT, CODE_TEXT, MUTED_TEXT, TITLE_TEXT};

const CACHE_MAX_ENTRIES: usize = 16;

thread_local! {
    static RENDER_CACHE: RefCell<HashMap<u64, Vec<Line<'static>>>> = RefCell::new(HashMap::new());
}

/// Render markdown content to ratatui Lines.
pub fn render_markdown(content: &str, base_style: Style) -> Vec<Line<'static>> {
    let key = cache_key(content, base_style);

    let cached = RENDER_CACHE.with(|cache| cache.borrow().get(&key).cloned());
    if let Some(lines) = cached {
        return lines;
    }

    let lines = MarkdownRenderer::new(base_style).render(content);

    RENDER_CACHE.with(|cache| {
        let mut cache = cache.borrow_mut();
        if cache.len() >= CACHE_MAX_ENTRIES {
            cache.clear();
        }
        cache.insert(key, lines.clone());
    });

    lines
}

fn cache_key(content: &str, style: Style) -> u64 {
    let mut hasher = DefaultHasher::new();
    content.hash(&mut hasher);
    style.fg.hash(&mut hasher);
    style.bg.hash(&mut hasher);
    style.add_modifier.hash(&mut hasher);
    style.sub_modifier.hash(&mut hasher);
    hasher.finish()
}

struct MarkdownRenderer {
    base_style: Style,
    lines: Vec<Line<'static>>,
    current_spans: Vec<Span<'static>>,

    // Counters so `## Heading with **bold**` stays bold after the inner
    // strong ends.
    bold_count: usize,
    italic_count: usize,
    strike_count: usize,
    heading: Option<HeadingLevel>,
    quote_depth: usize,

    in_code_block: bool,
    code_block_content: Vec<String>,

    in_table: bool,
    table_rows: Vec<Vec<String>>,
    current_row: Vec<String>,
    current_cell: String,

    list_stack: Vec<Option<u64>>,
}

impl MarkdownRenderer {
    fn new(base_style: Style) -> Self {
        Self {
            base_style,
            lines: Vec::new(),
            current_spans: Vec::new(),
            bold_count: 0,
            italic_count: 0,
            strike_count: 0,
            heading: None,
            quote_depth: 0,
            in_code_block: false,
            code_block_content: Vec::new(),
            in_table: false,
            table_rows: Vec::new(),
            current_row: Vec::new(),
            current_cell: String::new(),
            list_stack: Vec::new(),
        }
    }

    fn render(mut self, content: &str) -> Vec<Line<'static>> {
        let options = Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH;
        for event in Parser::new_ext(content, options) {
            self.handle_event(event);
        }
        self.flush_line();

        while self.lines.last().is_some_and(|line| line.width() == 0) {
            self.lines.pop();
        }
        self.lines
    }

    fn handle_event(&mut self, event: Event) {
        match event {
            Event::Start(tag) => self.start_tag(tag),
            Event::End(tag) => self.end_tag(tag),
            Event::Text(text) => self.handle_text(&text),
            Event::Code(code) => self.handle_inline_code(&code),
            Event::SoftBreak => self.handle_soft_break(),
            Event::HardBreak => self.flush_line(),
            Event::Rule => {
                self.flush_line();
                self.lines.push(Line::from(Span::styled(
                    "─".repeat(40),
                    Style::default().fg(MUTED_TEXT),
                )));
                self.push_blank();
            }
            // Models sometimes emit tag-like text; show it rather than drop it.
            Event::Html(html) | Event::InlineHtml(html) => self.handle_text(&html),
            _ => {}
        }
    }

    fn start_tag(&mut self, tag: Tag) {
        match tag {
            Tag::Heading { level, .. } => {
                self.flush_line();
                self.heading = Some(level);
                self.bold_count += 1;
            }
            Tag::Strong => self.bold_count += 1,
            Tag::Emphasis => self.italic_count += 1,
            Tag::Strikethrough => self.strike_count += 1,
            Tag::CodeBlock(_) => {
                self.flush_line();
                self.in_code_block = true;
                self.code_block_content.clear();
            }
            Tag::List(start) => {
                self.flush_line();
                self.list_stack.push(start);
            }
            Tag::Item => {
                self.flush_line();
                let indent = "  ".repeat(self.list_stack.len().saturating_sub(1));
                let marker = match self.list_stack.last_mut() {
                    Some(Some(idx)) => {
                        let m = format!("{}{}. ", indent, idx);
                        *idx += 1;
                        m
                    }
                    _ => format!("{}• ", indent),
                };
                self.current_spans
                    .push(Span::styled(marker, Style::default().fg(MUTED_TEXT)));
            }
            Tag::Table(_) => {
                self.flush_line();
                self.in_table = true;
                self.table_rows.clear();
            }
            Tag::TableHead | Tag::TableRow => self.current_row.clear(),
            Tag::TableCell => self.current_cell.clear(),
            Tag::BlockQuote(_) => {
                self.flush_line();
                self.quote_depth += 1;
            }
            _ => {}
        }
    }

    fn end_tag(&mut self, tag: TagEnd) {
        match tag {
            TagEnd::Heading(_) => {
                self.bold_count = self.bold_count.saturating_sub(1);
                self.flush_line();
                self.heading = None;
                self.push_blank();
            }
            TagEnd::Strong => self.bold_count = self.bold_count.saturating_sub(1),
            TagEnd::Emphasis => self.italic_count = self.italic_count.saturating_sub(1),
            TagEnd::Strikethrough => self.strike_count = self.strike_count.saturating_sub(1),
            TagEnd::CodeBlock => {
                self.in_code_block = false;
                self.render_code_block();
                self.push_blank();
            }
            TagEnd::List(_) => {
                self.flush_line();
                self.list_stack.pop();
                if self.list_stack.is_empty() {
                    self.push_blank();
                }
            }
            TagEnd::Item => self.flush_line(),
            TagEnd::Table => {
                self.in_table = false;
                self.render_table();
                self.push_blank();
            }
            TagEnd::TableHead | TagEnd::TableRow => {
                if !self.current_row.is_empty() {
                    self.table_rows.push(std::mem::take(&mut self.current_row));
                }
            }
            TagEnd::TableCell => {
                self.current_row.push(std::mem::take(&mut self.current_cell));
            }
            TagEnd::Paragraph => {
                self.flush_line();
                if self.list_stack.is_empty() {
                    self.push_blank();
                }
            }
            TagEnd::BlockQuote(_) => {
                self.flush_line();
                self.quote_depth = self.quote_depth.saturating_sub(1);
            }
            _ => {}
        }
    }

    fn handle_text(&mut self, text: &str) {
        if self.in_code_block {
            self.code_block_content
                .extend(text.lines().map(str::to_string));
            return;
        }
        if self.in_table {
            self.current_cell.push_str(text);
            return;
        }
        let style = self.current_style();
        self.current_spans.push(Span::styled(text.to_string(), style));
    }

    fn handle_inline_code(&mut self, code: &str) {
        if self.in_table {
            self.current_cell.push_str(code);
            return;
        }
        self.current_spans
            .push(Span::styled(code.to_string(), Style::default().fg(CODE_TEXT)));
    }

    fn handle_soft_break(&mut self) {
        if !self.in_code_block && !self.in_table {
            self.current_spans.push(Span::raw(" "));
        }
    }

    fn current_style(&self) -> Style {
        let mut style = self.base_style;
        match self.heading {
            Some(HeadingLevel::H1 | HeadingLevel::H2) => style = style.fg(ACCENT),
            Some(_) => style = style.fg(TITLE_TEXT),
            None => {}
        }
        if self.bold_count > 0 {
            style = style.add_modifier(Modifier::BOLD);
        }
        if self.italic_count > 0 {
            style = style.add_modifier(Modifier::ITALIC);
        }
        if self.strike_count > 0 {
            style = style.add_modifier(Modifier::CROSSED_OUT);
        }
        if self.quote_depth > 0 {
            style = style.fg(MUTED_TEXT);
        }
        style
    }

    fn flush_line(&mut self) {
        if self.current_spans.is_empty() {
            return;
        }
        let mut spans = Vec::with_capacity(self.current_spans.len() + 1);
        if self.quote_depth > 0 {
            spans.push(Span::styled(
                "│ ".repeat(self.quote_depth),
                Style::default().fg(MUTED_TEXT),
            ));
        }
        spans.append(&mut self.current_spans);
        self.lines.push(Line::from(spans));
    }

    fn push_blank(&mut self) {
        if self.lines.last().is_some_and(|line| line.width() > 0) {
            self.lines.push(Line::from(""));
        }
    }

    fn render_code_block(&mut self) {
        let style = Style::default().fg(CODE_TEXT);
        for line in self.code_block_content.drain(..) {
            self.lines
                .push(Line::from(vec![Span::raw("  "), Span::styled(line, style)]));
        }
    }

    fn render_table(&mut self) {
        if self.table_rows.is_empty() {
            return;
        }

        let num_cols = self.table_rows.iter().map(Vec::len).max().unwrap_or(0);
        let mut col_widths = vec![3usize; num_cols];
        for row in &self.table_rows {
            for (i, cell) in row.iter().enumerate() {
                col_widths[i] = col_widths[i].max(cell.trim().width());
            }
        }

        let border_style = Style::default().fg(MUTED_TEXT);
        let header_style = self.base_style.add_modifier(Modifier::BOLD);

        self.lines.push(Line::from(Span::styled(
            table_border(&col_widths, '┌', '┬', '┐'),
            border_style,
        )));

        let rows = std::mem::take(&mut self.table_rows);
        for (row_idx, row) in rows.iter().enumerate() {
            let style = if row_idx == 0 {
                header_style
            } else {
                self.base_style
            };

            let mut spans = vec![Span::styled("│", border_style)];
            for (i, width) in col_widths.iter().enumerate() {
                let cell = row.get(i).map(|s| s.trim()).unwrap_or("");
                let padding = width.saturating_sub(cell.width());
                spans.push(Span::styled(
                    format!(" {}{} ", cell, " ".repeat(padding)),
                    style,
                ));
                spans.push(Span::styled("│", border_style));
            }
            self.lines.push(Line::from(spans));

            if row_idx == 0 {
                self.lines.push(Line::from(Span::styled(
                    table_border(&col_widths, '├', '┼', '┤'),
                    border_style,
                )));
            }
        }

        self.lines.push(Line::from(Span::styled(
            table_border(&col_widths, '└', '┴', '┘'),
            border_style,
        )));
    }
}

fn table_border(widths: &[usize], left: char, mid: char, right: char) -> String {
    let mut s = String::new();
    s.push(left);
    for (i, &w) in widths.iter().enumerate() {
        s.extend(std::iter::repeat('─').take(w + 2));
        if i + 1 < widths.len() {
            s.push(mid);
        }
    }
    s.push(right);
    s
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_of(lines: &[Line]) -> Vec<String> {
        lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect()
    }

    #[test]
    fn heading_paragraph_and_list() {
        let lines = render_markdown(
            "## Core Concepts\n\nCells are small.\n\n- one\n- two",
            Style::default(),
        );
        assert_eq!(
            text_of(&lines),
            vec!["Core Concepts", "", "Cells are small.", "", "• one", "• two"]
        );
    }

    #[test]
    fn heading_stays_bold_around_inner_strong() {
        let lines = render_markdown("## Intro **key** point", Style::default());
        for span in lines[0].spans.iter().filter(|s| !s.content.trim().is_empty()) {
            assert!(span.style.add_modifier.contains(Modifier::BOLD));
            assert_eq!(span.style.fg, Some(ACCENT));
        }
    }

    #[test]
    fn ordered_list_keeps_numbers() {
        let lines = render_markdown("3. three\n4. four", Style::default());
        assert_eq!(text_of(&lines), vec!["3. three", "4. four"]);
    }

    #[test]
    fn nested_list_is_indented() {
        let lines = render_markdown("- outer\n  - inner", Style::default());
        assert_eq!(text_of(&lines), vec!["• outer", "  • inner"]);
    }

    #[test]
    fn table_has_borders() {
        let lines = render_markdown("| A | B |\n|---|---|\n| 1 | 2 |", Style::default());
        let text = text_of(&lines);
        assert!(text[0].starts_with('┌'));
        assert!(text.iter().any(|l| l.contains(" 1 ")));
        assert!(text.last().is_some_and(|l| l.starts_with('└')));
    }

    #[test]
    fn html_like_text_is_kept() {
        let lines = render_markdown("<note>important</note>", Style::default());
        let all: String = text_of(&lines).concat();
        assert!(all.contains("important"));
    }

    #[test]
    fn cached_render_matches_fresh_render() {
        let first = render_markdown("# Cached", Style::default());
        let second = render_markdown("# Cached", Style::default());
        assert_eq!(first, second);
    }
}
