use crate::markdown::prepare_summary;
use crate::ui::common::{apply_scroll, failure_message};
use crate::ui::mvi::Reducer;
use crate::ui::quiz::{QuizReducer, QuizState};
use crate::ui::upload::UploadReducer;

use super::intent::StudyIntent;
use super::state::{StudyPageState, StudyPhase, StudyView};

pub const STUDY_FAILED: &str = "Failed to generate study materials";

pub struct StudyReducer;

impl Reducer for StudyReducer {
    type State = StudyPageState;
    type Intent = StudyIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            StudyIntent::Upload(upload) => {
                if state.phase == StudyPhase::Selecting {
                    state.upload = UploadReducer::reduce(state.upload, upload);
                }
            }

            StudyIntent::Start => {
                if state.can_start() {
                    state.phase = StudyPhase::Generating { animation_tick: 0 };
                    state.error = None;
                }
            }

            StudyIntent::AnimationTick => {
                if let StudyPhase::Generating { animation_tick } = &mut state.phase {
                    *animation_tick = animation_tick.wrapping_add(1);
                }
            }

            StudyIntent::Completed { response } => {
                if state.is_busy() {
                    state.session += 1;
                    state.phase = StudyPhase::Done {
                        summary: prepare_summary(&response.summary, false),
                        source_summary: response.summary,
                        quiz: QuizState::new(response.quiz),
                        view: StudyView::Summary,
                        scroll: 0,
                    };
                }
            }

            StudyIntent::Failed { message } => {
                if state.is_busy() {
                    state.phase = StudyPhase::Selecting;
                    state.error = Some(failure_message(message, STUDY_FAILED));
                }
            }

            StudyIntent::Reset => {
                if matches!(state.phase, StudyPhase::Done { .. }) {
                    // Keep the counter so late feedback stays stale.
                    state = StudyPageState {
                        session: state.session,
                        ..StudyPageState::default()
                    };
                }
            }

            StudyIntent::ShowView(next) => {
                if let StudyPhase::Done { view, .. } = &mut state.phase {
                    *view = next;
                }
            }

            StudyIntent::Scroll { delta, max } => {
                if let StudyPhase::Done { scroll, .. } = &mut state.phase {
                    *scroll = apply_scroll(*scroll, delta, max);
                }
            }

            StudyIntent::Quiz(quiz_intent) => {
                if let StudyPhase::Done { quiz, .. } = &mut state.phase {
                    *quiz = QuizReducer::reduce(std::mem::take(quiz), quiz_intent);
                }
            }
        }
        state
    }
}
