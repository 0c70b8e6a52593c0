use crate::{AnswerError, LikertResponseOption};

/// Longest response, in characters, a `ShortAnswer` question accepts.
pub const MAX_SHORT_ANSWER_CHARS: usize = 280;

/// A single question in a questionnaire.
///
/// The prompt and required flag are fixed at construction. The answer starts out
/// empty and only changes through `set_answer`, which validates the response
/// according to the question's kind. `Clone` produces a fully independent copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    /// The prompt text shown to the respondent.
    prompt: String,

    /// Whether an empty answer makes the questionnaire incomplete.
    required: bool,

    /// The kind of question (determines which responses are valid).
    kind: QuestionKind,

    /// The stored answer, empty if never answered.
    answer: String,
}

impl Question {
    /// Create a new, unanswered question.
    pub fn new(prompt: impl Into<String>, required: bool, kind: QuestionKind) -> Self {
        Self {
            prompt: prompt.into(),
            required,
            kind,
            answer: String::new(),
        }
    }

    /// Create a yes/no question.
    pub fn yes_no(prompt: impl Into<String>, required: bool) -> Self {
        Self::new(prompt, required, QuestionKind::YesNo)
    }

    /// Create a free-text question limited to `MAX_SHORT_ANSWER_CHARS`.
    pub fn short_answer(prompt: impl Into<String>, required: bool) -> Self {
        Self::new(prompt, required, QuestionKind::ShortAnswer)
    }

    /// Create a five-point agreement scale question.
    pub fn likert(prompt: impl Into<String>, required: bool) -> Self {
        Self::new(prompt, required, QuestionKind::Likert)
    }

    /// Get the prompt text.
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// Check if this question must be answered for the questionnaire to be complete.
    pub fn is_required(&self) -> bool {
        self.required
    }

    /// Get the question kind.
    pub fn kind(&self) -> QuestionKind {
        self.kind
    }

    /// Get the stored answer, or `""` if the question was never answered.
    pub fn answer(&self) -> &str {
        &self.answer
    }

    /// Check if the stored answer is non-empty.
    pub fn is_answered(&self) -> bool {
        !self.answer.is_empty()
    }

    /// Validate `response` and store it as the answer.
    ///
    /// On error the previous answer is kept.
    pub fn set_answer(&mut self, response: &str) -> Result<(), AnswerError> {
        match self.kind.accept(response) {
            Ok(answer) => {
                tracing::trace!(kind = ?self.kind, length = answer.len(), "answer accepted");
                self.answer = answer;
                Ok(())
            }
            Err(err) => {
                tracing::debug!(kind = ?self.kind, error = %err, "answer rejected");
                Err(err)
            }
        }
    }
}

/// The kind of question, determining which responses are valid and how they are stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuestionKind {
    /// "yes" or "no" in any case, stored as typed.
    YesNo,

    /// Any text of at most `MAX_SHORT_ANSWER_CHARS` characters, stored verbatim.
    ShortAnswer,

    /// One of the `LikertResponseOption` labels in any case, stored as the canonical label.
    Likert,
}

impl QuestionKind {
    /// Validate `response`, returning the text to store as the answer.
    pub fn accept(self, response: &str) -> Result<String, AnswerError> {
        match self {
            Self::YesNo => {
                if response.eq_ignore_ascii_case("yes") || response.eq_ignore_ascii_case("no") {
                    Ok(response.to_string())
                } else {
                    Err(AnswerError::NotYesOrNo {
                        response: response.to_string(),
                    })
                }
            }
            Self::ShortAnswer => {
                let length = response.chars().count();
                if length <= MAX_SHORT_ANSWER_CHARS {
                    Ok(response.to_string())
                } else {
                    Err(AnswerError::TooLong {
                        length,
                        max: MAX_SHORT_ANSWER_CHARS,
                    })
                }
            }
            Self::Likert => LikertResponseOption::from_label(response)
                .map(|option| option.label().to_string())
                .ok_or_else(|| AnswerError::NotLikertOption {
                    response: response.to_string(),
                }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_question_is_unanswered() {
        let question = Question::yes_no("Do you like coffee?", true);
        assert_eq!(question.prompt(), "Do you like coffee?");
        assert!(question.is_required());
        assert_eq!(question.kind(), QuestionKind::YesNo);
        assert_eq!(question.answer(), "");
        assert!(!question.is_answered());
    }

    #[test]
    fn yes_no_keeps_original_case() {
        let mut question = Question::yes_no("Do you like coffee?", true);
        question.set_answer("YES").unwrap();
        assert_eq!(question.answer(), "YES");

        question.set_answer("No").unwrap();
        assert_eq!(question.answer(), "No");
    }

    #[test]
    fn yes_no_rejects_other_words() {
        let mut question = Question::yes_no("Do you like coffee?", true);
        question.set_answer("yes").unwrap();

        let err = question.set_answer("maybe").unwrap_err();
        assert_eq!(
            err,
            AnswerError::NotYesOrNo {
                response: "maybe".to_string()
            }
        );
        assert_eq!(question.answer(), "yes");

        assert!(question.set_answer("").is_err());
        assert!(question.set_answer("yes ").is_err());
    }

    #[test]
    fn short_answer_accepts_up_to_limit() {
        let mut question = Question::short_answer("Describe your morning routine", false);
        let at_limit = "a".repeat(MAX_SHORT_ANSWER_CHARS);
        question.set_answer(&at_limit).unwrap();
        assert_eq!(question.answer(), at_limit);
    }

    #[test]
    fn short_answer_rejects_over_limit() {
        let mut question = Question::short_answer("Describe your morning routine", false);
        question.set_answer("Wake up and run.").unwrap();

        let err = question
            .set_answer(&"a".repeat(MAX_SHORT_ANSWER_CHARS + 1))
            .unwrap_err();
        assert_eq!(
            err,
            AnswerError::TooLong {
                length: 281,
                max: 280
            }
        );
        assert_eq!(question.answer(), "Wake up and run.");
    }

    #[test]
    fn short_answer_counts_characters_not_bytes() {
        let mut question = Question::short_answer("Favourite word?", false);
        let accented = "é".repeat(MAX_SHORT_ANSWER_CHARS);
        assert!(accented.len() > MAX_SHORT_ANSWER_CHARS);
        question.set_answer(&accented).unwrap();
        assert_eq!(question.answer(), accented);
    }

    #[test]
    fn short_answer_accepts_empty() {
        let mut question = Question::short_answer("Anything else?", false);
        question.set_answer("").unwrap();
        assert_eq!(question.answer(), "");
        assert!(!question.is_answered());
    }

    #[test]
    fn likert_stores_canonical_label() {
        let mut question = Question::likert("I feel productive today.", true);
        question.set_answer("strongly disagree").unwrap();
        assert_eq!(question.answer(), "Strongly Disagree");

        question.set_answer("AGREE").unwrap();
        assert_eq!(question.answer(), "Agree");
    }

    #[test]
    fn likert_rejects_unknown_label() {
        let mut question = Question::likert("I feel productive today.", true);
        question.set_answer("Agree").unwrap();

        assert!(matches!(
            question.set_answer("sort of"),
            Err(AnswerError::NotLikertOption { .. })
        ));
        assert!(question.set_answer("Neutral").is_err());
        assert_eq!(question.answer(), "Agree");
    }

    #[test]
    fn clone_is_independent() {
        for mut original in [
            Question::yes_no("Do you like coffee?", true),
            Question::short_answer("Describe your morning routine", false),
            Question::likert("I feel productive today.", true),
        ] {
            let first = match original.kind() {
                QuestionKind::YesNo => "yes",
                QuestionKind::ShortAnswer => "first",
                QuestionKind::Likert => "Agree",
            };
            let second = match original.kind() {
                QuestionKind::YesNo => "no",
                QuestionKind::ShortAnswer => "second",
                QuestionKind::Likert => "Disagree",
            };

            original.set_answer(first).unwrap();
            let mut copy = original.clone();
            assert_eq!(copy, original);

            copy.set_answer(second).unwrap();
            assert_eq!(original.answer(), first);

            original.set_answer(second).unwrap();
            original.set_answer(first).unwrap();
            assert_eq!(copy.answer(), second);
        }
    }
}
