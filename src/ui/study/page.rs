use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::ui::layout::split_top;
use crate::ui::progress::render_progress;
use crate::ui::quiz::{render_quiz, QuizState};
use crate::ui::summary_view::{render_key_hint, render_summary};
use crate::ui::theme::{ACCENT, ACTIVE_HIGHLIGHT, HEADER_SEPARATOR, MUTED_TEXT};
use crate::ui::upload::render_upload_step;

use super::state::{StudyPageState, StudyPhase, StudyView};

const SUB_TAB_HEIGHT: u16 = 2;

/// Area under the sub-tabs and above the key hint row.
pub fn study_content_area(body: Rect) -> Rect {
    let (_, rest) = split_top(body, SUB_TAB_HEIGHT);
    Rect {
        height: rest.height.saturating_sub(1),
        ..rest
    }
}

pub fn render_study_page(
    frame: &mut Frame,
    body: Rect,
    state: &StudyPageState,
    max_file_size_mb: u32,
) {
    match &state.phase {
        StudyPhase::Selecting => render_upload_step(
            frame,
            body,
            &state.upload,
            state.error.as_deref(),
            max_file_size_mb,
            "Generate Study Materials",
        ),
        StudyPhase::Generating { animation_tick } => {
            let name = state
                .upload
                .selected
                .as_ref()
                .map(|file| file.name.as_str())
                .unwrap_or("document");
            render_progress(
                frame,
                body,
                name,
                "Creating your study materials...",
                Some("This may take up to 30 seconds"),
                *animation_tick,
            );
        }
        StudyPhase::Done {
            summary,
            quiz,
            view,
            scroll,
            ..
        } => {
            let (tabs, _) = split_top(body, SUB_TAB_HEIGHT);
            frame.render_widget(Paragraph::new(sub_tabs(*view, quiz)), tabs);

            let content = study_content_area(body);
            match view {
                StudyView::Summary => render_summary(frame, content, "Summary", summary, *scroll),
                StudyView::Quiz => render_quiz(frame, content, quiz),
            }
            render_key_hint(frame, body, "r", "Study Another Document");
        }
    }
}

fn sub_tabs(view: StudyView, quiz: &QuizState) -> Line<'static> {
    let tab = |label: String, active: bool| {
        let style = if active {
            Style::default()
                .fg(ACCENT)
                .bg(ACTIVE_HIGHLIGHT)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(MUTED_TEXT)
        };
        Span::styled(format!(" {} ", label), style)
    };

    Line::from(vec![
        Span::raw(" "),
        tab("Summary".to_string(), view == StudyView::Summary),
        Span::styled(" │ ", Style::default().fg(HEADER_SEPARATOR)),
        tab(
            format!("Quiz ({} questions)", quiz.len()),
            view == StudyView::Quiz,
        ),
    ])
}
