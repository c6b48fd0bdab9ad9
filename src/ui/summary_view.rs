//! Scrollable panel holding a rendered summary.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::markdown::render_markdown;
use crate::ui::theme::{ACCENT, HEADER_TEXT, MUTED_TEXT, PANEL_BORDER};

fn base_style() -> Style {
    Style::default().fg(HEADER_TEXT)
}

fn panel(title: &str) -> Block<'static> {
    Block::default()
        .title(Span::styled(format!(" {} ", title), Style::default().fg(ACCENT)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(PANEL_BORDER))
}

/// Rows the summary occupies once wrapped to the panel width.
fn wrapped_height(lines: &[Line], width: u16) -> usize {
    let width = usize::from(width.max(1));
    lines
        .iter()
        .map(|line| line.width().div_ceil(width).max(1))
        .sum()
}

/// Largest useful scroll offset for `text` shown in `area`.
pub fn max_scroll(text: &str, area: Rect) -> u16 {
    let inner = panel("").inner(area);
    let lines = render_markdown(text, base_style());
    let overflow = wrapped_height(&lines, inner.width).saturating_sub(usize::from(inner.height));
    u16::try_from(overflow).unwrap_or(u16::MAX)
}

pub fn render_summary(frame: &mut Frame, area: Rect, title: &str, text: &str, scroll: u16) {
    let scroll = scroll.min(max_scroll(text, area));
    let paragraph = Paragraph::new(render_markdown(text, base_style()))
        .block(panel(title))
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0));
    frame.render_widget(paragraph, area);
}

/// One-line `key action` hint on the last row of `body`.
pub fn render_key_hint(frame: &mut Frame, body: Rect, key: &str, action: &str) {
    let row = Rect {
        y: body.y + body.height.saturating_sub(1),
        height: body.height.min(1),
        ..body
    };
    let line = Line::from(vec![
        Span::styled(
            format!(" {} ", key),
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ),
        Span::styled(action.to_string(), Style::default().fg(MUTED_TEXT)),
    ]);
    frame.render_widget(Paragraph::new(line), row);
}
