use crate::api::{FeedbackRequest, FeedbackResponse, StudyResponse, SummaryResponse};
use crate::config::{Config, QuizConfig};
use crate::quiz::build_feedback_request;
use crate::ui::layout::body_rect;
use crate::ui::mvi::Reducer;
use crate::ui::quiz::QuizIntent;
use crate::ui::study::{
    study_content_area, StudyIntent, StudyPageState, StudyPhase, StudyReducer, StudyView,
};
use crate::ui::summarize::{
    summary_area, SummarizeIntent, SummarizePageState, SummarizePhase, SummarizeReducer,
};
use crate::ui::summary_view::max_scroll;
use crate::ui::upload::{UploadIntent, UploadState};
use crate::upload::select_pdf;
use ratatui::layout::Rect;
use std::path::PathBuf;
use tokio::sync::mpsc;

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Page {
    #[default]
    Summarize,
    Study,
}

impl Page {
    pub const ALL: [Page; 2] = [Page::Summarize, Page::Study];

    pub fn title(self) -> &'static str {
        match self {
            Page::Summarize => "Summarize",
            Page::Study => "Study Mode",
        }
    }

    fn other(self) -> Self {
        match self {
            Page::Summarize => Page::Study,
            Page::Study => Page::Summarize,
        }
    }
}

/// What the active page is showing, for key routing and footer hints.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Screen {
    Selecting,
    Generating,
    Summary,
    Quiz,
}

#[derive(Debug)]
pub enum UiCommand {
    Summarize { file: PathBuf },
    Study { file: PathBuf },
    Feedback {
        session: u64,
        question: usize,
        request: FeedbackRequest,
    },
}

pub type UiCommandSender = mpsc::Sender<UiCommand>;

/// Outcome of a [`UiCommand`], errors already rendered to text.
#[derive(Debug)]
pub enum ApiEvent {
    Summary(Result<SummaryResponse, String>),
    Study(Result<StudyResponse, String>),
    Feedback {
        session: u64,
        question: usize,
        result: Result<FeedbackResponse, String>,
    },
}

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    page: Page,
    summarize: SummarizePageState,
    study: StudyPageState,
    max_file_size_mb: u32,
    max_file_size_bytes: u64,
    quiz_config: QuizConfig,
    commands: UiCommandSender,
    /// Page body as of the last resize; used to bound scrolling.
    viewport: Rect,
}

impl App {
    pub fn new(config: &Config, commands: UiCommandSender) -> Self {
        Self {
            should_quit: false,
            page: Page::default(),
            summarize: SummarizePageState::default(),
            study: StudyPageState::default(),
            max_file_size_mb: config.upload.max_file_size_mb,
            max_file_size_bytes: config.upload.max_file_size_bytes(),
            quiz_config: config.quiz.clone(),
            commands,
            viewport: Rect::default(),
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn page(&self) -> Page {
        self.page
    }

    pub fn summarize_state(&self) -> &SummarizePageState {
        &self.summarize
    }

    pub fn study_state(&self) -> &StudyPageState {
        &self.study
    }

    pub fn max_file_size_mb(&self) -> u32 {
        self.max_file_size_mb
    }

    /// Pages keep their state while hidden.
    pub fn switch_page(&mut self) {
        self.page = self.page.other();
    }

    pub fn screen(&self) -> Screen {
        match self.page {
            Page::Summarize => match self.summarize.phase {
                SummarizePhase::Selecting => Screen::Selecting,
                SummarizePhase::Generating { .. } => Screen::Generating,
                SummarizePhase::Done { .. } => Screen::Summary,
            },
            Page::Study => match &self.study.phase {
                StudyPhase::Selecting => Screen::Selecting,
                StudyPhase::Generating { .. } => Screen::Generating,
                StudyPhase::Done { view, .. } => match view {
                    StudyView::Summary => Screen::Summary,
                    StudyView::Quiz => Screen::Quiz,
                },
            },
        }
    }

    pub fn on_tick(&mut self) {
        if self.summarize.is_busy() {
            dispatch_mvi!(self, summarize, SummarizeReducer, SummarizeIntent::AnimationTick);
        }
        if self.study.is_busy() {
            dispatch_mvi!(self, study, StudyReducer, StudyIntent::AnimationTick);
        }
    }

    pub fn on_resize(&mut self, cols: u16, rows: u16) {
        self.viewport = body_rect(Rect::new(0, 0, cols, rows));
    }

    // Upload step

    fn upload_state(&self) -> &UploadState {
        match self.page {
            Page::Summarize => &self.summarize.upload,
            Page::Study => &self.study.upload,
        }
    }

    fn dispatch_upload(&mut self, intent: UploadIntent) {
        match self.page {
            Page::Summarize => {
                dispatch_mvi!(self, summarize, SummarizeReducer, SummarizeIntent::Upload(intent));
            }
            Page::Study => {
                dispatch_mvi!(self, study, StudyReducer, StudyIntent::Upload(intent));
            }
        }
    }

    pub fn insert_char(&mut self, ch: char) {
        self.dispatch_upload(UploadIntent::Insert(ch));
    }

    /// Pasted or dropped text; line breaks are not part of a path.
    pub fn insert_text(&mut self, text: &str) {
        for ch in text.chars().filter(|c| !c.is_control()) {
            self.insert_char(ch);
        }
    }

    pub fn backspace(&mut self) {
        self.dispatch_upload(UploadIntent::Backspace);
    }

    pub fn clear_input(&mut self) {
        self.dispatch_upload(UploadIntent::ClearInput);
    }

    pub fn clear_file(&mut self) {
        self.dispatch_upload(UploadIntent::Cleared);
    }

    /// Enter on the upload step: validate typed input, or start the request
    /// when the input is empty and a file is already selected.
    pub fn submit(&mut self) {
        if let Some(raw) = self.upload_state().pending_path() {
            let intent = match select_pdf(raw, self.max_file_size_bytes) {
                Ok(file) => {
                    tracing::debug!(file = %file.path.display(), size = file.size_bytes, "File selected");
                    UploadIntent::Selected(file)
                }
                Err(err) => UploadIntent::Rejected(err.to_string()),
            };
            self.dispatch_upload(intent);
            return;
        }
        self.start();
    }

    fn start(&mut self) {
        match self.page {
            Page::Summarize => {
                let Some(file) = self.summarize.upload.selected.clone() else {
                    return;
                };
                if !self.summarize.can_start() {
                    return;
                }
                dispatch_mvi!(self, summarize, SummarizeReducer, SummarizeIntent::Start);
                if let Err(message) = self.send_command(UiCommand::Summarize { file: file.path }) {
                    dispatch_mvi!(self, summarize, SummarizeReducer, SummarizeIntent::Failed { message });
                }
            }
            Page::Study => {
                let Some(file) = self.study.upload.selected.clone() else {
                    return;
                };
                if !self.study.can_start() {
                    return;
                }
                dispatch_mvi!(self, study, StudyReducer, StudyIntent::Start);
                if let Err(message) = self.send_command(UiCommand::Study { file: file.path }) {
                    dispatch_mvi!(self, study, StudyReducer, StudyIntent::Failed { message });
                }
            }
        }
    }

    fn send_command(&self, command: UiCommand) -> Result<(), String> {
        self.commands.try_send(command).map_err(|err| {
            tracing::error!(error = %err, "Failed to queue request");
            "Could not queue the request; please try again".to_string()
        })
    }

    // Results

    pub fn reset(&mut self) {
        match self.page {
            Page::Summarize => {
                dispatch_mvi!(self, summarize, SummarizeReducer, SummarizeIntent::Reset);
            }
            Page::Study => {
                dispatch_mvi!(self, study, StudyReducer, StudyIntent::Reset);
            }
        }
    }

    pub fn scroll(&mut self, delta: i32) {
        match self.page {
            Page::Summarize => {
                let Some(summary) = self.summarize.summary() else {
                    return;
                };
                let max = max_scroll(summary, summary_area(self.viewport));
                dispatch_mvi!(self, summarize, SummarizeReducer, SummarizeIntent::Scroll { delta, max });
            }
            Page::Study => {
                let Some(summary) = self.study.summary() else {
                    return;
                };
                let max = max_scroll(summary, study_content_area(self.viewport));
                dispatch_mvi!(self, study, StudyReducer, StudyIntent::Scroll { delta, max });
            }
        }
    }

    pub fn show_view(&mut self, view: StudyView) {
        if self.page == Page::Study {
            dispatch_mvi!(self, study, StudyReducer, StudyIntent::ShowView(view));
        }
    }

    // Quiz

    fn dispatch_quiz(&mut self, intent: QuizIntent) {
        dispatch_mvi!(self, study, StudyReducer, StudyIntent::Quiz(intent));
    }

    pub fn next_question(&mut self) {
        self.dispatch_quiz(QuizIntent::NextQuestion);
    }

    pub fn prev_question(&mut self) {
        self.dispatch_quiz(QuizIntent::PrevQuestion);
    }

    pub fn move_cursor(&mut self, delta: i32) {
        self.dispatch_quiz(QuizIntent::MoveCursor { delta });
    }

    /// Answers the current question with the highlighted choice.
    pub fn choose_cursor(&mut self) {
        let cursor = self
            .study
            .quiz()
            .and_then(|quiz| quiz.current_card())
            .map(|card| card.cursor);
        if let Some(cursor) = cursor {
            self.choose(cursor);
        }
    }

    /// Answers the current question and asks the tutor for feedback.
    /// Ignored once the card has an answer.
    pub fn choose(&mut self, index: usize) {
        let StudyPhase::Done {
            quiz,
            source_summary,
            ..
        } = &self.study.phase
        else {
            return;
        };
        let Some(card) = quiz.current_card() else {
            return;
        };
        if !card.can_choose(index) {
            return;
        }

        let question = quiz.current;
        let request = build_feedback_request(&card.question, index, source_summary, &self.quiz_config);
        let session = self.study.session;

        self.dispatch_quiz(QuizIntent::Choose { index });
        if self
            .send_command(UiCommand::Feedback {
                session,
                question,
                request,
            })
            .is_err()
        {
            self.dispatch_quiz(QuizIntent::FeedbackFailed { question });
        }
    }

    pub fn on_api(&mut self, event: ApiEvent) {
        match event {
            ApiEvent::Summary(result) => {
                let intent = match result {
                    Ok(response) => SummarizeIntent::Completed {
                        summary: response.summary,
                    },
                    Err(message) => SummarizeIntent::Failed { message },
                };
                dispatch_mvi!(self, summarize, SummarizeReducer, intent);
            }
            ApiEvent::Study(result) => {
                let intent = match result {
                    Ok(response) => StudyIntent::Completed { response },
                    Err(message) => StudyIntent::Failed { message },
                };
                dispatch_mvi!(self, study, StudyReducer, intent);
            }
            ApiEvent::Feedback {
                session,
                question,
                result,
            } => {
                if session != self.study.session {
                    tracing::debug!(session, current = self.study.session, "Dropping stale feedback");
                    return;
                }
                let intent = match result {
                    Ok(response) => QuizIntent::FeedbackReceived { question, response },
                    Err(message) => {
                        tracing::warn!(question, error = %message, "Feedback unavailable");
                        QuizIntent::FeedbackFailed { question }
                    }
                };
                self.dispatch_quiz(intent);
            }
        }
    }
}
