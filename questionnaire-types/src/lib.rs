//! Core types for the questionnaire crate.
//!
//! This crate provides the foundational types for building questionnaires:
//! - `Question` and `QuestionKind` - Individual questions and their answer rules
//! - `LikertResponseOption` - The five-point agreement scale
//! - `Questionnaire` and `QuestionId` - The ordered, identifier-addressed collection
//! - `Respondent` trait - For anything that fills in a questionnaire

mod identifier;
pub use identifier::QuestionId;

mod likert;
pub use likert::LikertResponseOption;

mod question;
pub use question::{MAX_SHORT_ANSWER_CHARS, Question, QuestionKind};

mod questionnaire;
pub use questionnaire::Questionnaire;

mod error;
pub use error::{AdministerError, AnswerError, QuestionnaireError};

mod traits;
pub use traits::Respondent;
