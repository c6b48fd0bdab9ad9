use crate::markdown::prepare_summary;
use crate::ui::common::{apply_scroll, failure_message};
use crate::ui::mvi::Reducer;
use crate::ui::upload::UploadReducer;

use super::intent::SummarizeIntent;
use super::state::{SummarizePageState, SummarizePhase};

/// Shown when a failed request carries no message of its own.
pub const SUMMARY_FAILED: &str = "Failed to generate summary";

pub struct SummarizeReducer;

impl Reducer for SummarizeReducer {
    type State = SummarizePageState;
    type Intent = SummarizeIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            SummarizeIntent::Upload(upload) => {
                if state.phase == SummarizePhase::Selecting {
                    state.upload = UploadReducer::reduce(state.upload, upload);
                }
                state
            }

            SummarizeIntent::Start => {
                if state.can_start() {
                    state.phase = SummarizePhase::Generating { animation_tick: 0 };
                    state.error = None;
                }
                state
            }

            SummarizeIntent::AnimationTick => {
                if let SummarizePhase::Generating { animation_tick } = &mut state.phase {
                    *animation_tick = animation_tick.wrapping_add(1);
                }
                state
            }

            SummarizeIntent::Completed { summary } => {
                if state.is_busy() {
                    state.phase = SummarizePhase::Done {
                        summary: prepare_summary(&summary, true),
                        scroll: 0,
                    };
                }
                state
            }

            SummarizeIntent::Failed { message } => {
                if state.is_busy() {
                    state.phase = SummarizePhase::Selecting;
                    state.error = Some(failure_message(message, SUMMARY_FAILED));
                }
                state
            }

            SummarizeIntent::Reset => match state.phase {
                SummarizePhase::Done { .. } => SummarizePageState::default(),
                _ => state,
            },

            SummarizeIntent::Scroll { delta, max } => {
                if let SummarizePhase::Done { scroll, .. } = &mut state.phase {
                    *scroll = apply_scroll(*scroll, delta, max);
                }
                state
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::upload::UploadIntent;
    use crate::upload::SelectedFile;
    use std::path::PathBuf;

    fn with_file() -> SummarizePageState {
        SummarizeReducer::reduce(
            SummarizePageState::default(),
            SummarizeIntent::Upload(UploadIntent::Selected(SelectedFile {
                path: PathBuf::from("/tmp/notes.pdf"),
                name: "notes.pdf".into(),
                size_bytes: 2048,
            })),
        )
    }

    fn generating() -> SummarizePageState {
        SummarizeReducer::reduce(with_file(), SummarizeIntent::Start)
    }

    #[test]
    fn start_requires_a_file() {
        let state = SummarizeReducer::reduce(SummarizePageState::default(), SummarizeIntent::Start);
        assert_eq!(state.phase, SummarizePhase::Selecting);
        assert!(generating().is_busy());
    }

    #[test]
    fn animation_tick_increments() {
        let state = SummarizeReducer::reduce(generating(), SummarizeIntent::AnimationTick);
        assert_eq!(state.phase, SummarizePhase::Generating { animation_tick: 1 });
    }

    #[test]
    fn completion_normalizes_summary() {
        let state = SummarizeReducer::reduce(
            generating(),
            SummarizeIntent::Completed {
                summary: "1. Cells\n\n\n\n**Nucleus** : control center".into(),
            },
        );
        assert_eq!(state.summary(), Some("## Cells\n\nNucleus: control center"));
    }

    #[test]
    fn failure_keeps_file_and_shows_error() {
        let state = SummarizeReducer::reduce(
            generating(),
            SummarizeIntent::Failed {
                message: "Invalid PDF".into(),
            },
        );
        assert_eq!(state.phase, SummarizePhase::Selecting);
        assert!(state.upload.has_file());
        assert_eq!(state.error.as_deref(), Some("Invalid PDF"));
    }

    #[test]
    fn blank_failure_uses_fallback() {
        let state = SummarizeReducer::reduce(
            generating(),
            SummarizeIntent::Failed {
                message: " ".into(),
            },
        );
        assert_eq!(state.error.as_deref(), Some(SUMMARY_FAILED));
    }

    #[test]
    fn results_are_ignored_unless_generating() {
        let state = SummarizeReducer::reduce(
            with_file(),
            SummarizeIntent::Completed {
                summary: "late".into(),
            },
        );
        assert_eq!(state.phase, SummarizePhase::Selecting);
        let state = SummarizeReducer::reduce(
            state,
            SummarizeIntent::Failed {
                message: "late".into(),
            },
        );
        assert_eq!(state.error, None);
    }

    #[test]
    fn upload_is_locked_while_generating() {
        let state = SummarizeReducer::reduce(
            generating(),
            SummarizeIntent::Upload(UploadIntent::Cleared),
        );
        assert!(state.upload.has_file());
    }

    #[test]
    fn reset_returns_to_empty_page() {
        let done = SummarizeReducer::reduce(
            generating(),
            SummarizeIntent::Completed {
                summary: "text".into(),
            },
        );
        let state = SummarizeReducer::reduce(done, SummarizeIntent::Reset);
        assert_eq!(state, SummarizePageState::default());
    }

    #[test]
    fn scroll_is_clamped() {
        let done = SummarizeReducer::reduce(
            generating(),
            SummarizeIntent::Completed {
                summary: "text".into(),
            },
        );
        let state = SummarizeReducer::reduce(done, SummarizeIntent::Scroll { delta: 50, max: 7 });
        assert!(matches!(state.phase, SummarizePhase::Done { scroll: 7, .. }));
        let state = SummarizeReducer::reduce(state, SummarizeIntent::Scroll { delta: -10, max: 7 });
        assert!(matches!(state.phase, SummarizePhase::Done { scroll: 0, .. }));
    }
}
