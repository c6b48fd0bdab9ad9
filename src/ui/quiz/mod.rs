//! Quiz cards for the Study page.

mod card;
mod intent;
mod reducer;
mod state;

pub use card::render_quiz;
pub use intent::QuizIntent;
pub use reducer::QuizReducer;
pub use state::{CardStatus, QuizCardState, QuizState};
