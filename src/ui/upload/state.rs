use crate::ui::mvi::UiState;
use crate::upload::SelectedFile;

/// Text typed so far, the accepted file and the last rejection.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UploadState {
    pub input: String,
    pub selected: Option<SelectedFile>,
    pub rejection: Option<String>,
}

impl UiState for UploadState {}

impl UploadState {
    pub fn has_file(&self) -> bool {
        self.selected.is_some()
    }

    /// Input that should be validated on Enter, if any.
    pub fn pending_path(&self) -> Option<&str> {
        let trimmed = self.input.trim();
        (!trimmed.is_empty()).then_some(trimmed)
    }
}
