use crate::Questionnaire;

/// Trait for anything that fills in a questionnaire: a scripted answer sheet,
/// an interactive prompt, a web form handler.
///
/// Respondents answer through the questions themselves (`Question::set_answer`),
/// so every response goes through the question's own validation.
pub trait Respondent {
    /// The error type for this respondent.
    type Error: Into<anyhow::Error>;

    /// Answer the questions of `questionnaire`.
    ///
    /// Implementations may leave optional questions unanswered. Whether the
    /// result is complete is checked by `Questionnaire::administer`, not here.
    fn respond(&self, questionnaire: &mut Questionnaire) -> Result<(), Self::Error>;
}
