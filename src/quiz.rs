//! Answer feedback: request building and local fallbacks.

use crate::api::{FeedbackRequest, FeedbackResponse, QuizQuestion};
use crate::config::QuizConfig;

const CORRECT_FALLBACK: &str = "Nice work, your choice matches the key idea in the summary.";
const INCORRECT_FALLBACK: &str =
    "Review the key term/definition in the summary and compare it to each option.";
const CORRECT_UNAVAILABLE: &str =
    "Correct. We could not fetch tutor notes, but your answer aligns with the summary.";
const INCORRECT_UNAVAILABLE: &str =
    "We could not fetch tutor notes. Check the summary line that defines this concept and retry.";

/// Feedback shown under an answered question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    /// Decided locally so the title never flips after the response lands.
    pub correct: bool,
    pub explanation: String,
    pub guidance: Option<String>,
}

impl Feedback {
    /// Merges a tutor response with the locally known outcome.
    ///
    /// The tutor's own verdict is only used to pick the fallback text when
    /// the explanation is blank.
    pub fn from_response(local_correct: bool, response: &FeedbackResponse) -> Self {
        let verdict = response.correct.unwrap_or(local_correct);
        let explanation = response
            .explanation
            .as_deref()
            .map(str::trim)
            .filter(|text| !text.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| fallback_explanation(verdict).to_string());
        let guidance = response
            .guidance
            .as_deref()
            .map(str::trim)
            .filter(|text| !text.is_empty())
            .map(str::to_string);

        Self {
            correct: local_correct,
            explanation,
            guidance,
        }
    }

    /// Feedback for when the tutor could not be reached.
    pub fn unavailable(local_correct: bool) -> Self {
        let explanation = if local_correct {
            CORRECT_UNAVAILABLE
        } else {
            INCORRECT_UNAVAILABLE
        };
        Self {
            correct: local_correct,
            explanation: explanation.to_string(),
            guidance: None,
        }
    }

    pub fn title(&self) -> &'static str {
        if self.correct {
            "Correct!"
        } else {
            "Not quite right"
        }
    }
}

fn fallback_explanation(correct: bool) -> &'static str {
    if correct {
        CORRECT_FALLBACK
    } else {
        INCORRECT_FALLBACK
    }
}

/// Body for `POST /api/v1/feedback` after `selected` was chosen.
pub fn build_feedback_request(
    question: &QuizQuestion,
    selected: usize,
    summary: &str,
    config: &QuizConfig,
) -> FeedbackRequest {
    let summary = (config.send_summary_context && !summary.trim().is_empty())
        .then(|| summary.to_string());

    FeedbackRequest {
        question: question.question.clone(),
        choices: question.choices.clone(),
        selected_index: selected,
        answer_index: question.answer_index,
        summary,
        explain_if_correct: config.explain_if_correct,
        detail: config.detail,
    }
}

/// `A`, `B`, … for choice lists; past `Z` the index is shown instead.
pub fn choice_label(index: usize) -> String {
    u8::try_from(index)
        .ok()
        .filter(|i| *i < 26)
        .map(|i| char::from(b'A' + i).to_string())
        .unwrap_or_else(|| (index + 1).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::FeedbackDetail;

    fn question() -> QuizQuestion {
        QuizQuestion {
            id: Some(1),
            question: "Which organelle makes ATP?".into(),
            kind: Some("mcq".into()),
            choices: vec!["Nucleus".into(), "Mitochondria".into()],
            answer_index: 1,
            answer: Some("Mitochondria".into()),
        }
    }

    #[test]
    fn blank_explanation_falls_back() {
        let response = FeedbackResponse {
            correct: Some(true),
            explanation: Some("   ".into()),
            guidance: None,
        };
        let feedback = Feedback::from_response(true, &response);
        assert_eq!(feedback.explanation, CORRECT_FALLBACK);
        assert_eq!(feedback.title(), "Correct!");
    }

    #[test]
    fn missing_verdict_uses_local_outcome() {
        let feedback = Feedback::from_response(false, &FeedbackResponse::default());
        assert!(!feedback.correct);
        assert_eq!(feedback.explanation, INCORRECT_FALLBACK);
        assert_eq!(feedback.title(), "Not quite right");
    }

    #[test]
    fn title_follows_local_outcome_even_if_tutor_disagrees() {
        let response = FeedbackResponse {
            correct: Some(true),
            explanation: Some("Because.".into()),
            guidance: Some("Re-read section 2.".into()),
        };
        let feedback = Feedback::from_response(false, &response);
        assert_eq!(feedback.title(), "Not quite right");
        assert_eq!(feedback.explanation, "Because.");
        assert_eq!(feedback.guidance.as_deref(), Some("Re-read section 2."));
    }

    #[test]
    fn unavailable_messages_depend_on_outcome() {
        assert_eq!(Feedback::unavailable(true).explanation, CORRECT_UNAVAILABLE);
        assert_eq!(Feedback::unavailable(false).explanation, INCORRECT_UNAVAILABLE);
    }

    #[test]
    fn request_carries_config_and_summary() {
        let config = QuizConfig::default();
        let request = build_feedback_request(&question(), 0, "## Cells", &config);
        assert_eq!(request.selected_index, 0);
        assert_eq!(request.answer_index, 1);
        assert_eq!(request.summary.as_deref(), Some("## Cells"));
        assert!(request.explain_if_correct);
        assert_eq!(request.detail, FeedbackDetail::Full);
    }

    #[test]
    fn summary_context_can_be_disabled() {
        let config = QuizConfig {
            send_summary_context: false,
            ..QuizConfig::default()
        };
        let request = build_feedback_request(&question(), 1, "## Cells", &config);
        assert_eq!(request.summary, None);
    }

    #[test]
    fn choice_labels() {
        assert_eq!(choice_label(0), "A");
        assert_eq!(choice_label(3), "D");
        assert_eq!(choice_label(26), "27");
    }
}
