//! Path input that selects the PDF to upload.

mod intent;
mod reducer;
mod state;
mod widget;

pub use intent::UploadIntent;
pub use reducer::UploadReducer;
pub use state::UploadState;
pub use widget::render_upload_step;
