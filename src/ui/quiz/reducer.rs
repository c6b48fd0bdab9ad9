use crate::quiz::Feedback;
use crate::ui::mvi::Reducer;

use super::intent::QuizIntent;
use super::state::{CardStatus, QuizState};

pub struct QuizReducer;

impl Reducer for QuizReducer {
    type State = QuizState;
    type Intent = QuizIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            QuizIntent::NextQuestion => {
                if state.current + 1 < state.cards.len() {
                    state.current += 1;
                }
            }

            QuizIntent::PrevQuestion => state.current = state.current.saturating_sub(1),

            QuizIntent::MoveCursor { delta } => {
                if let Some(card) = state.cards.get_mut(state.current) {
                    let last = card.question.choices.len().saturating_sub(1);
                    let next = card.cursor as i64 + i64::from(delta);
                    card.cursor = usize::try_from(next.max(0)).unwrap_or(0).min(last);
                }
            }

            QuizIntent::Choose { index } => {
                if let Some(card) = state.cards.get_mut(state.current) {
                    if card.can_choose(index) {
                        card.cursor = index;
                        card.selected = Some(index);
                        card.status = CardStatus::Checking;
                    }
                }
            }

            QuizIntent::FeedbackReceived { question, response } => {
                if let Some(card) = state.cards.get_mut(question) {
                    if let (true, Some(correct)) = (card.is_checking(), card.locally_correct()) {
                        card.status =
                            CardStatus::Answered(Feedback::from_response(correct, &response));
                    }
                }
            }

            QuizIntent::FeedbackFailed { question } => {
                if let Some(card) = state.cards.get_mut(question) {
                    if let (true, Some(correct)) = (card.is_checking(), card.locally_correct()) {
                        card.status = CardStatus::Answered(Feedback::unavailable(correct));
                    }
                }
            }
        }
        state
    }
}
