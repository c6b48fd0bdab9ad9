use crate::api::FeedbackResponse;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum QuizIntent {
    NextQuestion,
    PrevQuestion,
    MoveCursor { delta: i32 },
    /// Pick a choice on the current card.
    Choose { index: usize },
    FeedbackReceived {
        question: usize,
        response: FeedbackResponse,
    },
    /// Transport or HTTP failure; the card falls back to local feedback.
    FeedbackFailed { question: usize },
}

impl Intent for QuizIntent {}
