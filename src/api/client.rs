//! HTTP client for the study service.

use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use std::path::Path;
use std::time::{Duration, Instant};

use crate::config::ApiConfig;

use super::error::ApiError;
use super::types::{
    FeedbackRequest, FeedbackResponse, HealthResponse, StudyResponse, SummaryResponse,
};

pub const SUMMARIZE_PATH: &str = "/api/v1/summarize";
pub const STUDY_PATH: &str = "/api/v1/study";
pub const FEEDBACK_PATH: &str = "/api/v1/feedback";
pub const HEALTH_PATH: &str = "/api/v1/health";

const PDF_MIME: &str = "application/pdf";

/// Client for the summarize, study and feedback endpoints.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(u64::from(config.timeout_seconds)))
            .connect_timeout(Duration::from_secs(u64::from(config.connect_timeout_seconds)))
            .build()
            .map_err(ApiError::ClientBuild)?;

        Ok(Self {
            client,
            base_url: normalize_base_url(&config.base_url),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for an API path.
    pub fn endpoint(&self, path: &str) -> String {
        join_url(&self.base_url, path)
    }

    /// Upload a PDF and return its summary.
    pub async fn summarize(&self, file: &Path) -> Result<SummaryResponse, ApiError> {
        let form = pdf_form(file).await?;
        self.post_multipart(SUMMARIZE_PATH, form).await
    }

    /// Upload a PDF and return its summary plus a quiz.
    ///
    /// Questions without choices or with an out-of-range answer are dropped.
    pub async fn study(&self, file: &Path) -> Result<StudyResponse, ApiError> {
        let form = pdf_form(file).await?;
        let mut response: StudyResponse = self.post_multipart(STUDY_PATH, form).await?;

        let before = response.quiz.len();
        response.quiz.retain(|q| q.is_answerable());
        let dropped = before - response.quiz.len();
        if dropped > 0 {
            tracing::warn!(dropped, kept = response.quiz.len(), "Dropped unanswerable quiz items");
        }

        Ok(response)
    }

    /// Ask the tutor to explain a selected answer.
    pub async fn feedback(&self, request: &FeedbackRequest) -> Result<FeedbackResponse, ApiError> {
        let url = self.endpoint(FEEDBACK_PATH);
        tracing::debug!(
            url = %url,
            selected = request.selected_index,
            answer = request.answer_index,
            "Sending feedback request"
        );

        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|source| ApiError::Transport {
                url: url.clone(),
                source,
            })?;

        read_json(url, response).await
    }

    /// Service liveness probe.
    pub async fn health(&self) -> Result<HealthResponse, ApiError> {
        let url = self.endpoint(HEALTH_PATH);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|source| ApiError::Transport {
                url: url.clone(),
                source,
            })?;

        read_json(url, response).await
    }

    async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: Form,
    ) -> Result<T, ApiError> {
        let url = self.endpoint(path);
        tracing::debug!(url = %url, "Uploading document");

        let start = Instant::now();
        let response = self
            .client
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(|source| ApiError::Transport {
                url: url.clone(),
                source,
            })?;

        tracing::debug!(
            url = %url,
            status = %response.status(),
            latency_ms = start.elapsed().as_millis() as u64,
            "Upload answered"
        );

        read_json(url, response).await
    }
}

/// Builds the single-part `file` form the service expects.
async fn pdf_form(file: &Path) -> Result<Form, ApiError> {
    let bytes = tokio::fs::read(file)
        .await
        .map_err(|source| ApiError::ReadFile {
            path: file.to_path_buf(),
            source,
        })?;

    let file_name = file
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "document.pdf".to_string());

    let part = Part::bytes(bytes)
        .file_name(file_name)
        .mime_str(PDF_MIME)
        .map_err(ApiError::ClientBuild)?;

    Ok(Form::new().part("file", part))
}

/// Turns a response into `T`, mapping non-2xx statuses to [`ApiError::Status`].
async fn read_json<T: DeserializeOwned>(url: String, response: Response) -> Result<T, ApiError> {
    let status = response.status();

    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        let err = ApiError::from_status(status.as_u16(), &body);
        tracing::error!(url = %url, status = %status, error = %err, "Study service error");
        return Err(err);
    }

    let text = response
        .text()
        .await
        .map_err(|source| ApiError::Transport {
            url: url.clone(),
            source,
        })?;

    serde_json::from_str(&text).map_err(|source| ApiError::Decode { url, source })
}

/// Trims whitespace and trailing slashes from a configured base URL.
pub fn normalize_base_url(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_string()
}

/// Joins a base URL and an API path with exactly one `/` between them.
pub fn join_url(base: &str, path: &str) -> String {
    if base.is_empty() {
        return path.to_string();
    }
    if path.starts_with('/') {
        format!("{}{}", base, path)
    } else {
        format!("{}/{}", base, path)
    }
}
