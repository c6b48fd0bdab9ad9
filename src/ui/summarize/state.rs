use crate::ui::mvi::UiState;
use crate::ui::upload::UploadState;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SummarizePhase {
    /// Choosing a file.
    #[default]
    Selecting,

    /// Waiting for `/api/v1/summarize`.
    Generating { animation_tick: u8 },

    /// Summary ready for display, already normalized and cleaned.
    Done { summary: String, scroll: u16 },
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SummarizePageState {
    pub upload: UploadState,
    pub phase: SummarizePhase,
    /// Message from the last failed request.
    pub error: Option<String>,
}

impl UiState for SummarizePageState {}

impl SummarizePageState {
    pub fn is_busy(&self) -> bool {
        matches!(self.phase, SummarizePhase::Generating { .. })
    }

    pub fn can_start(&self) -> bool {
        self.phase == SummarizePhase::Selecting && self.upload.has_file()
    }

    pub fn summary(&self) -> Option<&str> {
        match &self.phase {
            SummarizePhase::Done { summary, .. } => Some(summary),
            _ => None,
        }
    }
}
