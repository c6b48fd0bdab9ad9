//! Study page: summary plus an interactive quiz for one PDF.

mod intent;
mod page;
mod reducer;
mod state;

pub use intent::StudyIntent;
pub use page::{render_study_page, study_content_area};
pub use reducer::{StudyReducer, STUDY_FAILED};
pub use state::{StudyPageState, StudyPhase, StudyView};
