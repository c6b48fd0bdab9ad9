use crate::api::StudyResponse;
use crate::ui::mvi::Intent;
use crate::ui::quiz::QuizIntent;
use crate::ui::upload::UploadIntent;

use super::state::StudyView;

#[derive(Debug, Clone)]
pub enum StudyIntent {
    Upload(UploadIntent),
    Start,
    AnimationTick,
    Completed { response: StudyResponse },
    Failed { message: String },
    /// "Study Another Document".
    Reset,
    ShowView(StudyView),
    Scroll { delta: i32, max: u16 },
    Quiz(QuizIntent),
}

impl Intent for StudyIntent {}
