//! Property tests for questionnaire ordering and filtering.

use proptest::prelude::*;
use questionnaire_types::{Question, QuestionId, Questionnaire};

#[derive(Debug, Clone)]
enum Op {
    Add(String, bool),
    Remove(String),
    SortByPrompt,
    SortByRequired,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => ("[a-e]{0,2}", any::<bool>()).prop_map(|(id, required)| Op::Add(id, required)),
        2 => "[a-e]{0,2}".prop_map(Op::Remove),
        1 => Just(Op::SortByPrompt),
        1 => Just(Op::SortByRequired),
    ]
}

/// Replays `ops` against a questionnaire and a plain `Vec` model of its order.
fn replay(ops: &[Op]) -> (Questionnaire, Vec<String>) {
    let mut questionnaire = Questionnaire::new();
    let mut model: Vec<(String, String, bool)> = Vec::new();

    for op in ops {
        match op {
            Op::Add(id, required) => {
                let prompt = format!("prompt {}", id.chars().rev().collect::<String>());
                let accepted = questionnaire
                    .add_question(id.as_str(), Question::short_answer(&prompt, *required))
                    .is_ok();
                let expected = !id.is_empty() && !model.iter().any(|(key, _, _)| key == id);
                assert_eq!(accepted, expected);
                if expected {
                    model.push((id.clone(), prompt, *required));
                }
            }
            Op::Remove(id) => {
                let removed = questionnaire.remove_question(id).is_ok();
                let before = model.len();
                model.retain(|(key, _, _)| key != id);
                assert_eq!(removed, model.len() < before);
            }
            Op::SortByPrompt => {
                questionnaire.sort_by(|a, b| a.prompt().cmp(b.prompt()));
                model.sort_by(|a, b| a.1.cmp(&b.1));
            }
            Op::SortByRequired => {
                questionnaire.sort_by_key(|q| q.is_required());
                model.sort_by_key(|entry| entry.2);
            }
        }
    }

    let ids = model.into_iter().map(|(id, _, _)| id).collect();
    (questionnaire, ids)
}

proptest! {
    /// Positions, identifiers and views always agree with a simple ordered model.
    #[test]
    fn order_matches_model(ops in prop::collection::vec(op(), 0..40)) {
        let (questionnaire, expected) = replay(&ops);

        let ids: Vec<String> = questionnaire.ids().map(|id| id.to_string()).collect();
        prop_assert_eq!(&ids, &expected);
        prop_assert_eq!(questionnaire.len(), expected.len());
        prop_assert_eq!(questionnaire.responses().len(), expected.len());

        for (index, id) in expected.iter().enumerate() {
            let by_position = questionnaire.question_at(index + 1).unwrap();
            let by_id = questionnaire.question(id).unwrap();
            prop_assert!(std::ptr::eq(by_position, by_id));
            prop_assert_eq!(questionnaire.position_of(id), Some(index + 1));
        }
        prop_assert!(questionnaire.question_at(expected.len() + 1).is_err());
        prop_assert_eq!(
            questionnaire.required_questions().len() + questionnaire.optional_questions().len(),
            expected.len()
        );
    }

    /// Filtering never changes the source and yields an ordered subsequence of it.
    #[test]
    fn filter_leaves_source_untouched(ops in prop::collection::vec(op(), 0..40)) {
        let (mut questionnaire, _) = replay(&ops);
        let before: Vec<QuestionId> = questionnaire.ids().cloned().collect();

        let mut filtered = questionnaire.filter(|q| q.is_required());
        for position in 1..=filtered.len() {
            filtered.question_at_mut(position).unwrap().set_answer("changed").unwrap();
        }

        let after: Vec<QuestionId> = questionnaire.ids().cloned().collect();
        prop_assert_eq!(&before, &after);
        prop_assert!(questionnaire.responses().iter().all(String::is_empty));

        let kept: Vec<QuestionId> = before
            .iter()
            .filter(|id| questionnaire.question(id.as_str()).unwrap().is_required())
            .cloned()
            .collect();
        let filtered_ids: Vec<QuestionId> = filtered.ids().cloned().collect();
        prop_assert_eq!(filtered_ids, kept);

        if let Some(id) = before.first() {
            questionnaire.question_mut(id.as_str()).unwrap().set_answer("source").unwrap();
            if let Ok(copy) = filtered.question(id.as_str()) {
                prop_assert_eq!(copy.answer(), "changed");
            }
        }
    }
}
