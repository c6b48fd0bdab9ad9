//! Study service API client.
//!
//! Three calls back the whole application: `summarize` and `study` upload
//! a PDF as multipart form data, `feedback` posts one answered question as
//! JSON. Non-2xx answers surface as [`ApiError::Status`].

mod client;
mod error;
mod types;

pub use client::{
    join_url, normalize_base_url, ApiClient, FEEDBACK_PATH, HEALTH_PATH, STUDY_PATH,
    SUMMARIZE_PATH,
};
pub use error::ApiError;
pub use types::{
    FeedbackDetail, FeedbackRequest, FeedbackResponse, HealthResponse, QuizQuestion,
    StudyResponse, SummaryResponse,
};
