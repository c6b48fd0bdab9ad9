use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::ui::layout::split_top;
use crate::ui::theme::{ACCENT, HEADER_TEXT, MUTED_TEXT, PANEL_BORDER, STATUS_ERROR, STATUS_OK};

use super::state::UploadState;

/// Rows taken by the upload panel, borders included.
const UPLOAD_HEIGHT: u16 = 6;

/// Draws the path input, the current selection and the size hint.
fn render_upload(
    frame: &mut Frame,
    area: Rect,
    state: &UploadState,
    max_file_size_mb: u32,
) {
    let block = Block::default()
        .title(Span::styled(" Upload PDF ", Style::default().fg(ACCENT)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(PANEL_BORDER));

    let input = vec![
        Span::styled(" Path: ", Style::default().fg(MUTED_TEXT)),
        Span::styled(state.input.clone(), Style::default().fg(HEADER_TEXT)),
        Span::styled("█", Style::default().fg(ACCENT)),
    ];

    let selection = match &state.selected {
        Some(file) => Line::from(vec![
            Span::styled(" ✓ ", Style::default().fg(STATUS_OK)),
            Span::styled(
                file.name.clone(),
                Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  {}", file.size_label()),
                Style::default().fg(MUTED_TEXT),
            ),
        ]),
        None => Line::from(Span::styled(
            " No file selected",
            Style::default().fg(MUTED_TEXT),
        )),
    };

    let hint = match &state.rejection {
        Some(message) => Line::from(Span::styled(
            format!(" {}", message),
            Style::default().fg(STATUS_ERROR),
        )),
        None => Line::from(Span::styled(
            format!(" Supports PDF files up to {}MB", max_file_size_mb),
            Style::default().fg(MUTED_TEXT).add_modifier(Modifier::DIM),
        )),
    };

    let lines = vec![Line::from(input), Line::from(""), selection, hint];
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Hint under the upload panel telling what Enter will do.
fn action_hint(has_file: bool, action: &str) -> Line<'static> {
    if has_file {
        Line::from(vec![
            Span::styled(" Enter ", Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)),
            Span::styled(action.to_string(), Style::default().fg(MUTED_TEXT)),
            Span::styled("   Esc ", Style::default().fg(ACCENT)),
            Span::styled("Remove file", Style::default().fg(MUTED_TEXT)),
        ])
    } else {
        Line::from(Span::styled(
            " Type a path to a PDF and press Enter",
            Style::default().fg(MUTED_TEXT),
        ))
    }
}

/// Upload panel plus the page error and what Enter does next.
pub fn render_upload_step(
    frame: &mut Frame,
    body: Rect,
    state: &UploadState,
    error: Option<&str>,
    max_file_size_mb: u32,
    action: &str,
) {
    let (upload_area, rest) = split_top(body, UPLOAD_HEIGHT);
    render_upload(frame, upload_area, state, max_file_size_mb);

    let mut lines = vec![Line::from("")];
    if let Some(error) = error {
        lines.push(Line::from(Span::styled(
            format!(" ✗ {}", error),
            Style::default().fg(STATUS_ERROR),
        )));
        lines.push(Line::from(""));
    }
    lines.push(action_hint(state.has_file(), action));
    frame.render_widget(Paragraph::new(lines), rest);
}
