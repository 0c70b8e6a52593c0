//! Respondent that answers a questionnaire from prepared responses.
//!
//! `ScriptedRespondent` lets you fill in questionnaires programmatically, keyed by
//! question identifier. This is useful for tests and for importing answers
//! collected elsewhere.
//!
//! # Example
//!
//! ```rust
//! use questionnaire::{Question, Questionnaire, ScriptedRespondent};
//!
//! let mut questionnaire = Questionnaire::new();
//! questionnaire.add_question("coffee", Question::yes_no("Do you like coffee?", true)).unwrap();
//! questionnaire.add_question("mood", Question::likert("I feel productive today.", true)).unwrap();
//!
//! questionnaire
//!     .administer(
//!         &ScriptedRespondent::new()
//!             .with_response("coffee", "Yes")
//!             .with_response("mood", "agree"),
//!     )
//!     .unwrap();
//!
//! assert_eq!(questionnaire.responses(), vec!["Yes", "Agree"]);
//! ```

use std::collections::HashMap;

use crate::{AnswerError, QuestionId, Questionnaire, Respondent};

/// A respondent that answers with pre-configured responses.
///
/// Questions are answered in the questionnaire's current order. Required questions
/// without a prepared response are an error; optional ones are left as they are.
/// Responses for identifiers the questionnaire does not contain are ignored.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRespondent {
    responses: HashMap<QuestionId, String>,
}

/// Error type for ScriptedRespondent.
#[derive(Debug, thiserror::Error)]
pub enum ScriptedRespondentError {
    #[error("Missing response for required question: {0}")]
    MissingResponse(QuestionId),

    #[error("Invalid response for '{id}': {source}")]
    InvalidAnswer {
        id: QuestionId,
        #[source]
        source: AnswerError,
    },
}

impl ScriptedRespondent {
    /// Create a new respondent with no prepared responses.
    pub fn new() -> Self {
        Self {
            responses: HashMap::new(),
        }
    }

    /// Add a response for the question with the given identifier.
    ///
    /// A later response for the same identifier replaces the earlier one.
    pub fn with_response(mut self, id: impl Into<QuestionId>, response: impl Into<String>) -> Self {
        self.responses.insert(id.into(), response.into());
        self
    }

    /// Get the prepared response for an identifier, if any.
    pub fn response(&self, id: &str) -> Option<&str> {
        self.responses.get(id).map(String::as_str)
    }

    /// Get the number of prepared responses.
    pub fn len(&self) -> usize {
        self.responses.len()
    }

    /// Check if there are no prepared responses.
    pub fn is_empty(&self) -> bool {
        self.responses.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for ScriptedRespondent
where
    K: Into<QuestionId>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::new(), |respondent, (id, response)| {
                respondent.with_response(id, response)
            })
    }
}

impl Respondent for ScriptedRespondent {
    type Error = ScriptedRespondentError;

    fn respond(&self, questionnaire: &mut Questionnaire) -> Result<(), Self::Error> {
        let ids: Vec<QuestionId> = questionnaire.ids().cloned().collect();

        for id in ids {
            let Ok(question) = questionnaire.question_mut(id.as_str()) else {
                continue;
            };

            match self.responses.get(&id) {
                Some(response) => {
                    question
                        .set_answer(response)
                        .map_err(|source| ScriptedRespondentError::InvalidAnswer {
                            id: id.clone(),
                            source,
                        })?;
                    tracing::trace!(%id, "scripted response applied");
                }
                None if question.is_required() => {
                    return Err(ScriptedRespondentError::MissingResponse(id));
                }
                None => {
                    tracing::trace!(%id, "optional question skipped");
                }
            }
        }

        Ok(())
    }
}
