use crate::ui::mvi::Intent;
use crate::upload::SelectedFile;

#[derive(Debug, Clone)]
pub enum UploadIntent {
    Insert(char),
    Backspace,
    /// Ctrl+U.
    ClearInput,
    /// The typed path passed validation.
    Selected(SelectedFile),
    /// The typed path failed validation.
    Rejected(String),
    /// Drop the selected file.
    Cleared,
}

impl Intent for UploadIntent {}
