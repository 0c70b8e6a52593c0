//! # questionnaire
//!
//! Typed questionnaires with validated answers.
//!
//! A `Questionnaire` is an ordered collection of questions, each addressed by a
//! unique identifier and by its 1-based position. Every question has a prompt,
//! a required flag and an answer that can only be set through the question's
//! own validation rule.
//!
//! ## Usage
//!
//! ```rust
//! use questionnaire::{Question, Questionnaire, QuestionnaireError};
//!
//! # fn main() -> Result<(), QuestionnaireError> {
//! let mut questionnaire = Questionnaire::new();
//! questionnaire.add_question("coffee", Question::yes_no("Do you like coffee?", true))?;
//! questionnaire.add_question("routine", Question::short_answer("Describe your morning routine", false))?;
//! questionnaire.add_question("mood", Question::likert("I feel productive today.", true))?;
//!
//! questionnaire.question_mut("coffee")?.set_answer("yes")?;
//! questionnaire.question_at_mut(3)?.set_answer("strongly agree")?;
//!
//! assert!(questionnaire.is_complete());
//! assert_eq!(questionnaire.responses(), vec!["yes", "", "Strongly Agree"]);
//! # Ok(())
//! # }
//! ```
//!
//! ## Question kinds
//!
//! - `YesNo` - accepts "yes" or "no" in any case, stored as typed
//! - `ShortAnswer` - accepts up to 280 characters, stored verbatim
//! - `Likert` - accepts one of the five agreement labels in any case, stored as the canonical label
//!
//! ## Respondents
//!
//! Anything implementing `Respondent` can fill in a questionnaire through
//! `Questionnaire::administer`. `ScriptedRespondent` answers from prepared
//! responses, which is useful for tests and batch imports.

// Re-export all types from questionnaire-types
pub use questionnaire_types::*;

// Respondent that answers from prepared responses
mod scripted;
pub use scripted::{ScriptedRespondent, ScriptedRespondentError};
