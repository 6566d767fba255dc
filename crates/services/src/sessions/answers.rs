use std::collections::HashMap;

use interview_core::model::Question;

/// Sparse map of selected options; absent entries mean unanswered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerSheet {
    selections: HashMap<usize, usize>,
}

impl AnswerSheet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a selection, overwriting any prior choice for the question.
    pub fn select(&mut self, question: usize, option: usize) {
        self.selections.insert(question, option);
    }

    #[must_use]
    pub fn selected(&self, question: usize) -> Option<usize> {
        self.selections.get(&question).copied()
    }

    #[must_use]
    pub fn answered_count(&self) -> usize {
        self.selections.len()
    }

    /// Count selections matching the question's correct option.
    ///
    /// Unanswered questions never count; selections beyond the question
    /// list are ignored.
    #[must_use]
    pub fn correct_count(&self, questions: &[Question]) -> usize {
        questions
            .iter()
            .enumerate()
            .filter(|(index, question)| {
                self.selected(*index)
                    .is_some_and(|option| question.is_correct(option))
            })
            .count()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
