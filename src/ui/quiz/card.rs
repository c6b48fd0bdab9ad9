use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::markdown::{science_notation, strip_asterisks};
use crate::quiz::{choice_label, Feedback};
use crate::ui::theme::{
    ACCENT, ACTIVE_HIGHLIGHT, HEADER_TEXT, MUTED_TEXT, PANEL_BORDER, STATUS_ERROR, STATUS_OK,
};

use super::state::{CardStatus, QuizCardState, QuizState};

pub fn render_quiz(frame: &mut Frame, area: Rect, quiz: &QuizState) {
    let mut block = Block::default()
        .title(Span::styled(" Quiz ", Style::default().fg(ACCENT)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(PANEL_BORDER));
    if !quiz.is_empty() {
        block = block.title_bottom(Line::from(Span::styled(
            format!(" Answered {} of {} · Correct {} ", quiz.answered(), quiz.len(), quiz.correct()),
            Style::default().fg(MUTED_TEXT),
        )));
    }

    let lines = match quiz.current_card() {
        Some(card) => card_lines(card, quiz.current, quiz.len()),
        None => vec![
            Line::from(""),
            Line::from(Span::styled(
                " No questions were generated for this document.",
                Style::default().fg(MUTED_TEXT),
            )),
        ],
    };

    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: false }),
        area,
    );
}

fn display_text(text: &str) -> String {
    science_notation(&strip_asterisks(text))
}

fn card_lines(card: &QuizCardState, index: usize, total: usize) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled(
            format!(" Question {} of {} ", index + 1, total),
            Style::default()
                .fg(HEADER_TEXT)
                .bg(ACCENT)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            display_text(&card.question.question),
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    for (i, choice) in card.question.choices.iter().enumerate() {
        lines.push(choice_line(card, i, choice));
    }

    lines.push(Line::from(""));
    match &card.status {
        CardStatus::Unanswered => {}
        CardStatus::Checking => lines.push(Line::from(Span::styled(
            "Checking your answer…",
            Style::default().fg(MUTED_TEXT).add_modifier(Modifier::ITALIC),
        ))),
        CardStatus::Answered(feedback) => lines.extend(feedback_lines(feedback)),
    }
    lines
}

fn choice_line(card: &QuizCardState, index: usize, choice: &str) -> Line<'static> {
    let label = format!("{}. ", choice_label(index));
    let text = display_text(choice);

    let Some(selected) = card.selected else {
        let style = if index == card.cursor {
            Style::default()
                .fg(HEADER_TEXT)
                .bg(ACTIVE_HIGHLIGHT)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(HEADER_TEXT)
        };
        let pointer = if index == card.cursor { " › " } else { "   " };
        return Line::from(vec![
            Span::styled(pointer, Style::default().fg(ACCENT)),
            Span::styled(format!("{}{}", label, text), style),
        ]);
    };

    let (marker, style) = if index == card.question.answer_index {
        ("✓", Style::default().fg(STATUS_OK).add_modifier(Modifier::BOLD))
    } else if index == selected {
        ("✗", Style::default().fg(STATUS_ERROR).add_modifier(Modifier::BOLD))
    } else {
        (" ", Style::default().fg(MUTED_TEXT).add_modifier(Modifier::DIM))
    };
    Line::from(vec![
        Span::styled(format!(" {} ", marker), style),
        Span::styled(format!("{}{}", label, text), style),
    ])
}

fn feedback_lines(feedback: &Feedback) -> Vec<Line<'static>> {
    let title_color = if feedback.correct { STATUS_OK } else { STATUS_ERROR };
    let mut lines = vec![
        Line::from(Span::styled(
            feedback.title(),
            Style::default().fg(title_color).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            science_notation(&feedback.explanation),
            Style::default().fg(HEADER_TEXT),
        )),
    ];
    if let Some(guidance) = &feedback.guidance {
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled("Tip: ", Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)),
            Span::styled(science_notation(guidance), Style::default().fg(MUTED_TEXT)),
        ]));
    }
    lines
}
