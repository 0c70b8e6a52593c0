use questionnaire::{Question, Questionnaire, QuestionnaireError};

/// End-of-sprint retrospective. Only the first two questions are required.
pub fn team_retrospective() -> Result<Questionnaire, QuestionnaireError> {
    let mut questionnaire = Questionnaire::new();
    questionnaire.add_question("goal_met", Question::yes_no("Did we meet the sprint goal?", true))?;
    questionnaire.add_question(
        "workload",
        Question::likert("The workload was sustainable.", true),
    )?;
    questionnaire.add_question("went_well", Question::short_answer("What went well?", false))?;
    questionnaire.add_question(
        "improve",
        Question::short_answer("What should we improve?", false),
    )?;
    questionnaire.add_question(
        "blocked",
        Question::yes_no("Were you blocked for more than a day?", false),
    )?;
    Ok(questionnaire)
}
