use crate::ui::mvi::Reducer;

use super::intent::UploadIntent;
use super::state::UploadState;

pub struct UploadReducer;

impl Reducer for UploadReducer {
    type State = UploadState;
    type Intent = UploadIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            UploadIntent::Insert(ch) => {
                state.input.push(ch);
                state.rejection = None;
            }
            UploadIntent::Backspace => {
                state.input.pop();
                state.rejection = None;
            }
            UploadIntent::ClearInput => {
                state.input.clear();
                state.rejection = None;
            }
            UploadIntent::Selected(file) => {
                state.input.clear();
                state.selected = Some(file);
                state.rejection = None;
            }
            // The previous selection survives a bad path.
            UploadIntent::Rejected(message) => state.rejection = Some(message),
            UploadIntent::Cleared => {
                state.selected = None;
                state.rejection = None;
            }
        }
        state
    }
}
