use questionnaire::{
    LikertResponseOption, Question, QuestionKind, Questionnaire, QuestionnaireError,
};

/// Post-visit feedback form for a coffee shop.
pub fn customer_feedback() -> Result<Questionnaire, QuestionnaireError> {
    let mut questionnaire = Questionnaire::new();
    questionnaire.add_question(
        "visited_before",
        Question::yes_no("Have you visited us before?", true),
    )?;
    questionnaire.add_question(
        "service",
        Question::likert("The staff were friendly.", true),
    )?;
    questionnaire.add_question(
        "speed",
        Question::likert("My order arrived quickly.", true),
    )?;
    questionnaire.add_question("value", Question::likert("The prices are fair.", false))?;
    questionnaire.add_question(
        "comments",
        Question::short_answer("Anything else you would like to tell us?", false),
    )?;
    questionnaire.add_question(
        "recommend",
        Question::yes_no("Would you recommend us to a friend?", false),
    )?;
    Ok(questionnaire)
}

/// Sum of the Likert ordinals of every answered scale question.
///
/// Unanswered scale questions count as zero.
pub fn satisfaction_score(questionnaire: &Questionnaire) -> i32 {
    questionnaire.fold(0, |score, question| match question.kind() {
        QuestionKind::Likert => {
            score
                + LikertResponseOption::from_label(question.answer())
                    .map_or(0, |option| i32::from(option.value()))
        }
        QuestionKind::YesNo | QuestionKind::ShortAnswer => score,
    })
}
