use thiserror::Error;

/// Number of answer options every interview question carries.
pub const OPTION_COUNT: usize = 4;

//
// ─── ERRORS ───────────────────────────────────────────────────────────────────
//

/// Errors raised while validating a generated question.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question text is empty")]
    EmptyText,

    #[error("expected {OPTION_COUNT} options, got {0}")]
    WrongOptionCount(usize),

    #[error("correct option index {0} is out of range")]
    CorrectOutOfRange(usize),
}

//
// ─── QUESTION ─────────────────────────────────────────────────────────────────
//

/// Immutable multiple-choice question.
///
/// Produced entirely by the question-generation collaborator; the engine
/// validates the shape once and echoes the content back unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    text: String,
    options: Vec<String>,
    correct: usize,
}

impl Question {
    /// Build a question from generated parts.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError` when the text is blank, the option count is
    /// not exactly [`OPTION_COUNT`], or the correct index is out of range.
    pub fn new(
        text: impl Into<String>,
        options: Vec<String>,
        correct: usize,
    ) -> Result<Self, QuestionError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(QuestionError::EmptyText);
        }
        if options.len() != OPTION_COUNT {
            return Err(QuestionError::WrongOptionCount(options.len()));
        }
        if correct >= OPTION_COUNT {
            return Err(QuestionError::CorrectOutOfRange(correct));
        }

        Ok(Self {
            text,
            options,
            correct,
        })
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// Zero-based index of the correct option.
    #[must_use]
    pub fn correct(&self) -> usize {
        self.correct
    }

    #[must_use]
    pub fn is_correct(&self, option: usize) -> bool {
        option == self.correct
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
