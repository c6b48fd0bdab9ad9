//! Request and response bodies of the study service.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// `POST /api/v1/summarize` response.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SummaryResponse {
    pub summary: String,
}

/// One multiple-choice question as returned by `POST /api/v1/study`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizQuestion {
    #[serde(default, deserialize_with = "lenient_u32")]
    pub id: Option<u32>,
    pub question: String,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub choices: Vec<String>,
    /// 0-based index of the correct choice. Negative indices decode as out
    /// of range so the item is dropped instead of failing the response.
    #[serde(deserialize_with = "index_or_out_of_range")]
    pub answer_index: usize,
    /// Resolved text of the correct choice, when the service sends it.
    #[serde(default)]
    pub answer: Option<String>,
}

impl QuizQuestion {
    /// A question is usable when it has choices and its answer points at one.
    pub fn is_answerable(&self) -> bool {
        !self.choices.is_empty() && self.answer_index < self.choices.len()
    }

    pub fn is_correct(&self, selected: usize) -> bool {
        selected == self.answer_index
    }
}

/// `POST /api/v1/study` response.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StudyResponse {
    pub summary: String,
    #[serde(default)]
    pub quiz: Vec<QuizQuestion>,
}

/// Explanation length requested from the tutor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FeedbackDetail {
    #[default]
    Short,
    Full,
}

/// `POST /api/v1/feedback` request body.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeedbackRequest {
    pub question: String,
    pub choices: Vec<String>,
    pub selected_index: usize,
    pub answer_index: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    pub explain_if_correct: bool,
    pub detail: FeedbackDetail,
}

/// `POST /api/v1/feedback` response.
///
/// Every field is optional on the wire; the quiz card substitutes local
/// values for anything missing. A field of the wrong type counts as
/// missing.
#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
pub struct FeedbackResponse {
    #[serde(default, deserialize_with = "lenient_bool")]
    pub correct: Option<bool>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub explanation: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub guidance: Option<String>,
}

/// `GET /api/v1/health` response.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

fn index_or_out_of_range<'de, D: Deserializer<'de>>(deserializer: D) -> Result<usize, D::Error> {
    let index = i64::deserialize(deserializer)?;
    Ok(usize::try_from(index).unwrap_or(usize::MAX))
}

fn lenient_u32<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<u32>, D::Error> {
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value
        .and_then(|v| v.as_u64())
        .and_then(|v| u32::try_from(v).ok()))
}

fn lenient_bool<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<bool>, D::Error> {
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| v.as_bool()))
}

fn lenient_string<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<String>, D::Error> {
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(text)) => Some(text),
        _ => None,
    })
}
