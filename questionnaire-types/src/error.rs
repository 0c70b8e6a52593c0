use crate::QuestionId;

/// A response rejected by a question's validation rule.
///
/// The question's stored answer is left unchanged when this is returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AnswerError {
    #[error("Answer must be 'yes' or 'no', got '{response}'")]
    NotYesOrNo { response: String },

    #[error("Answer exceeds {max} characters (got {length})")]
    TooLong { length: usize, max: usize },

    #[error("Invalid Likert response: '{response}'")]
    NotLikertOption { response: String },
}

/// Error type for questionnaire operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QuestionnaireError {
    /// An empty identifier was supplied to `add_question`.
    #[error("Identifier must not be empty")]
    InvalidIdentifier,

    #[error("Identifier must be unique: '{0}' is already present")]
    DuplicateIdentifier(QuestionId),

    #[error("Identifier not found: '{0}'")]
    NotFound(QuestionId),

    /// Positions are 1-based.
    #[error("Invalid question number {position} (questionnaire has {len} questions)")]
    OutOfRange { position: usize, len: usize },

    #[error(transparent)]
    InvalidAnswer(#[from] AnswerError),
}

/// Error type for `Questionnaire::administer`.
#[derive(Debug, thiserror::Error)]
pub enum AdministerError {
    /// The respondent finished, but some required questions are still unanswered.
    #[error("Questionnaire incomplete, unanswered required questions: {}", join_ids(.missing))]
    Incomplete { missing: Vec<QuestionId> },

    /// Respondent-specific failure (bad scripted input, I/O, cancelled prompt, etc.)
    #[error("Respondent error: {0}")]
    Respondent(#[from] anyhow::Error),
}

impl AdministerError {
    /// Create a respondent error from any error type.
    pub fn respondent(err: impl Into<anyhow::Error>) -> Self {
        Self::Respondent(err.into())
    }

    /// Check if this error means required questions were left unanswered.
    pub fn is_incomplete(&self) -> bool {
        matches!(self, Self::Incomplete { .. })
    }
}

fn join_ids(ids: &[QuestionId]) -> String {
    ids.iter()
        .map(QuestionId::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}
