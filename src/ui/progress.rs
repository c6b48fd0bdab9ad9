//! Spinner panel shown while a document is being processed.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::ui::layout::centered_rect_by_size;
use crate::ui::theme::{ACCENT, HEADER_TEXT, MUTED_TEXT, PANEL_BORDER, STATUS_OK};

const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

const PANEL_WIDTH: u16 = 52;
const PANEL_HEIGHT: u16 = 7;

pub fn spinner_frame(animation_tick: u8) -> &'static str {
    SPINNER_FRAMES[(animation_tick as usize) % SPINNER_FRAMES.len()]
}

/// Centred panel with a spinner, a message and an optional hint line.
pub fn render_progress(
    frame: &mut Frame,
    area: Rect,
    file_name: &str,
    message: &str,
    hint: Option<&str>,
    animation_tick: u8,
) {
    let area = centered_rect_by_size(area, PANEL_WIDTH, PANEL_HEIGHT);
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", file_name),
            Style::default().fg(ACCENT),
        ))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(PANEL_BORDER));

    let mut lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled(
                format!("{} ", spinner_frame(animation_tick)),
                Style::default().fg(STATUS_OK),
            ),
            Span::styled(
                message.to_string(),
                Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
            ),
        ]),
    ];
    if let Some(hint) = hint {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            hint.to_string(),
            Style::default().fg(MUTED_TEXT),
        )));
    }

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(paragraph, area);
}
