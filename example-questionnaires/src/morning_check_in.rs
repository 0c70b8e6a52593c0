use questionnaire::{Question, Questionnaire, QuestionnaireError};

/// Three-question daily check-in: one of each question kind, the routine question optional.
pub fn morning_check_in() -> Result<Questionnaire, QuestionnaireError> {
    let mut questionnaire = Questionnaire::new();
    questionnaire.add_question("q1", Question::yes_no("Do you like coffee?", true))?;
    questionnaire.add_question(
        "q2",
        Question::short_answer("Describe your morning routine", false),
    )?;
    questionnaire.add_question("q3", Question::likert("I feel productive today.", true))?;
    Ok(questionnaire)
}
