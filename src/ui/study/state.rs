use crate::ui::mvi::UiState;
use crate::ui::quiz::QuizState;
use crate::ui::upload::UploadState;

/// Sub-tab shown once materials are ready.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StudyView {
    #[default]
    Summary,
    Quiz,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum StudyPhase {
    #[default]
    Selecting,

    /// Waiting for `/api/v1/study`.
    Generating { animation_tick: u8 },

    Done {
        /// Cleaned summary for display.
        summary: String,
        /// Summary as returned by the service, sent back as feedback context.
        source_summary: String,
        quiz: QuizState,
        view: StudyView,
        scroll: u16,
    },
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct StudyPageState {
    pub upload: UploadState,
    pub phase: StudyPhase,
    pub error: Option<String>,
    /// Bumped for every delivered study result. Feedback tagged with an
    /// older session is dropped.
    pub session: u64,
}

impl UiState for StudyPageState {}

impl StudyPageState {
    pub fn is_busy(&self) -> bool {
        matches!(self.phase, StudyPhase::Generating { .. })
    }

    pub fn can_start(&self) -> bool {
        self.phase == StudyPhase::Selecting && self.upload.has_file()
    }

    pub fn quiz(&self) -> Option<&QuizState> {
        match &self.phase {
            StudyPhase::Done { quiz, .. } => Some(quiz),
            _ => None,
        }
    }

    pub fn view(&self) -> Option<StudyView> {
        match &self.phase {
            StudyPhase::Done { view, .. } => Some(*view),
            _ => None,
        }
    }

    pub fn summary(&self) -> Option<&str> {
        match &self.phase {
            StudyPhase::Done { summary, .. } => Some(summary),
            _ => None,
        }
    }

    pub fn source_summary(&self) -> Option<&str> {
        match &self.phase {
            StudyPhase::Done { source_summary, .. } => Some(source_summary),
            _ => None,
        }
    }
}
