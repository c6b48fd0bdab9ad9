use crate::api::QuizQuestion;
use crate::quiz::Feedback;
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CardStatus {
    #[default]
    Unanswered,
    /// Choice made, waiting for the tutor.
    Checking,
    Answered(Feedback),
}

#[derive(Debug, Clone, PartialEq)]
pub struct QuizCardState {
    pub question: QuizQuestion,
    /// Highlighted choice before one is picked.
    pub cursor: usize,
    pub selected: Option<usize>,
    pub status: CardStatus,
}

impl QuizCardState {
    pub fn new(question: QuizQuestion) -> Self {
        Self {
            question,
            cursor: 0,
            selected: None,
            status: CardStatus::Unanswered,
        }
    }

    /// A card takes exactly one answer.
    pub fn can_choose(&self, index: usize) -> bool {
        self.status == CardStatus::Unanswered
            && self.selected.is_none()
            && index < self.question.choices.len()
    }

    pub fn is_checking(&self) -> bool {
        self.status == CardStatus::Checking
    }

    pub fn feedback(&self) -> Option<&Feedback> {
        match &self.status {
            CardStatus::Answered(feedback) => Some(feedback),
            _ => None,
        }
    }

    /// `selected == answer_index`, known before the tutor answers.
    pub fn locally_correct(&self) -> Option<bool> {
        self.selected.map(|index| self.question.is_correct(index))
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct QuizState {
    pub cards: Vec<QuizCardState>,
    pub current: usize,
}

impl UiState for QuizState {}

impl QuizState {
    pub fn new(questions: Vec<QuizQuestion>) -> Self {
        Self {
            cards: questions.into_iter().map(QuizCardState::new).collect(),
            current: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn current_card(&self) -> Option<&QuizCardState> {
        self.cards.get(self.current)
    }

    pub fn answered(&self) -> usize {
        self.cards.iter().filter(|c| c.feedback().is_some()).count()
    }

    pub fn correct(&self) -> usize {
        self.cards
            .iter()
            .filter(|c| c.feedback().is_some_and(|f| f.correct))
            .count()
    }
}
