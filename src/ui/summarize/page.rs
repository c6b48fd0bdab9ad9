use ratatui::{layout::Rect, Frame};

use crate::ui::progress::render_progress;
use crate::ui::summary_view::{render_key_hint, render_summary};
use crate::ui::upload::render_upload_step;

use super::state::{SummarizePageState, SummarizePhase};

/// Where the summary panel goes inside the page body.
pub fn summary_area(body: Rect) -> Rect {
    Rect {
        height: body.height.saturating_sub(1),
        ..body
    }
}

pub fn render_summarize_page(
    frame: &mut Frame,
    body: Rect,
    state: &SummarizePageState,
    max_file_size_mb: u32,
) {
    match &state.phase {
        SummarizePhase::Selecting => render_upload_step(
            frame,
            body,
            &state.upload,
            state.error.as_deref(),
            max_file_size_mb,
            "Generate Summary",
        ),
        SummarizePhase::Generating { animation_tick } => {
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
                "Analyzing your document...",
                None,
                *animation_tick,
            );
        }
        SummarizePhase::Done { summary, scroll } => {
            render_summary(frame, summary_area(body), "Summary", summary, *scroll);
            render_key_hint(frame, body, "r", "Summarize Another Document");
        }
    }
}
