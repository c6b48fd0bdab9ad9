use crate::ui::mvi::Intent;
use crate::ui::upload::UploadIntent;

#[derive(Debug, Clone)]
pub enum SummarizeIntent {
    Upload(UploadIntent),

    /// Send the selected file.
    Start,

    AnimationTick,

    /// Raw summary text from the service.
    Completed { summary: String },

    Failed { message: String },

    /// "Summarize Another Document".
    Reset,

    /// Move the summary viewport by `delta` rows, never past `max`.
    Scroll { delta: i32, max: u16 },
}

impl Intent for SummarizeIntent {}
