use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;

use crate::{AdministerError, Question, QuestionId, QuestionnaireError, Respondent};

/// An ordered collection of questions, each addressed by a unique `QuestionId`.
///
/// Questions can be reached by 1-based position (in current order) or by identifier.
/// The current order starts as insertion order and changes only through `sort_by`
/// and `sort_by_key`. Every sequence-derived view (required/optional lists, responses,
/// folding, rendering) follows the current order.
///
/// # Example
/// ```
/// use questionnaire_types::{Question, Questionnaire};
///
/// let mut questionnaire = Questionnaire::new();
/// questionnaire.add_question("q1", Question::yes_no("Do you like coffee?", true)).unwrap();
/// questionnaire.add_question("q2", Question::short_answer("Why?", false)).unwrap();
///
/// assert!(!questionnaire.is_complete());
/// questionnaire.question_mut("q1").unwrap().set_answer("yes").unwrap();
/// assert!(questionnaire.is_complete());
///
/// assert_eq!(questionnaire.question_at(2).unwrap().prompt(), "Why?");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Questionnaire {
    questions: HashMap<QuestionId, Question>,

    /// Current order. Always holds exactly the keys of `questions`, each once.
    order: Vec<QuestionId>,
}

impl Questionnaire {
    /// Create a new empty questionnaire.
    pub fn new() -> Self {
        Self {
            questions: HashMap::new(),
            order: Vec::new(),
        }
    }

    /// Append a question at the end of the current order.
    ///
    /// Fails if `id` is empty or already present.
    pub fn add_question(
        &mut self,
        id: impl Into<QuestionId>,
        question: Question,
    ) -> Result<(), QuestionnaireError> {
        let id = id.into();
        if id.is_empty() {
            tracing::debug!("rejected question with empty identifier");
            return Err(QuestionnaireError::InvalidIdentifier);
        }
        if self.questions.contains_key(&id) {
            tracing::debug!(%id, "rejected duplicate question identifier");
            return Err(QuestionnaireError::DuplicateIdentifier(id));
        }
        tracing::debug!(%id, len = self.len() + 1, "question added");
        self.questions.insert(id.clone(), question);
        self.order.push(id);
        Ok(())
    }

    /// Remove the question with the given identifier and return it.
    ///
    /// The relative order of the remaining questions is preserved.
    pub fn remove_question(&mut self, id: &str) -> Result<Question, QuestionnaireError> {
        let Some(question) = self.questions.remove(id) else {
            tracing::debug!(id, "cannot remove unknown question");
            return Err(QuestionnaireError::NotFound(QuestionId::new(id)));
        };
        self.order.retain(|key| key.as_str() != id);
        tracing::debug!(id, len = self.len(), "question removed");
        Ok(question)
    }

    /// Get the question at a 1-based position in the current order.
    pub fn question_at(&self, position: usize) -> Result<&Question, QuestionnaireError> {
        let id = self.id_at(position)?;
        self.question(id.as_str())
    }

    /// Get a mutable reference to the question at a 1-based position.
    ///
    /// Changes made through the reference (e.g. answering) apply to the stored question.
    pub fn question_at_mut(
        &mut self,
        position: usize,
    ) -> Result<&mut Question, QuestionnaireError> {
        let id = self.id_at(position)?.clone();
        self.question_mut(id.as_str())
    }

    /// Get the question with the given identifier.
    pub fn question(&self, id: &str) -> Result<&Question, QuestionnaireError> {
        self.questions
            .get(id)
            .ok_or_else(|| QuestionnaireError::NotFound(QuestionId::new(id)))
    }

    /// Get a mutable reference to the question with the given identifier.
    pub fn question_mut(&mut self, id: &str) -> Result<&mut Question, QuestionnaireError> {
        self.questions
            .get_mut(id)
            .ok_or_else(|| QuestionnaireError::NotFound(QuestionId::new(id)))
    }

    /// Get the identifier at a 1-based position in the current order.
    pub fn id_at(&self, position: usize) -> Result<&QuestionId, QuestionnaireError> {
        position
            .checked_sub(1)
            .and_then(|index| self.order.get(index))
            .ok_or(QuestionnaireError::OutOfRange {
                position,
                len: self.len(),
            })
    }

    /// Get the 1-based position of the question with the given identifier.
    pub fn position_of(&self, id: &str) -> Option<usize> {
        self.order
            .iter()
            .position(|key| key.as_str() == id)
            .map(|index| index + 1)
    }

    /// Check if a question with the given identifier exists.
    pub fn contains(&self, id: &str) -> bool {
        self.questions.contains_key(id)
    }

    /// Get the number of questions.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Check if there are no questions.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Iterate over identifiers in current order.
    pub fn ids(&self) -> impl Iterator<Item = &QuestionId> {
        self.order.iter()
    }

    /// Iterate over identifier-question pairs in current order.
    pub fn iter(&self) -> impl Iterator<Item = (&QuestionId, &Question)> {
        self.order
            .iter()
            .filter_map(|id| self.questions.get(id).map(|question| (id, question)))
    }

    /// Iterate over questions in current order.
    pub fn questions(&self) -> impl Iterator<Item = &Question> {
        self.iter().map(|(_, question)| question)
    }

    /// The required questions, in current order.
    pub fn required_questions(&self) -> Vec<&Question> {
        self.questions().filter(|q| q.is_required()).collect()
    }

    /// The optional questions, in current order.
    pub fn optional_questions(&self) -> Vec<&Question> {
        self.questions().filter(|q| !q.is_required()).collect()
    }

    /// Identifiers of required questions that have no answer yet, in current order.
    pub fn unanswered_required(&self) -> Vec<&QuestionId> {
        self.iter()
            .filter(|(_, q)| q.is_required() && !q.is_answered())
            .map(|(id, _)| id)
            .collect()
    }

    /// Check if every required question has a non-empty answer.
    ///
    /// A questionnaire without required questions is always complete.
    pub fn is_complete(&self) -> bool {
        self.questions()
            .filter(|q| q.is_required())
            .all(Question::is_answered)
    }

    /// Every question's current answer, in current order (`""` where unanswered).
    pub fn responses(&self) -> Vec<String> {
        self.questions().map(|q| q.answer().to_string()).collect()
    }

    /// Build a new questionnaire holding copies of the questions matching `predicate`.
    ///
    /// Identifiers and relative order are preserved. The result shares nothing with
    /// `self`: answering a question in one never affects the other.
    pub fn filter(&self, mut predicate: impl FnMut(&Question) -> bool) -> Questionnaire {
        let mut filtered = Questionnaire::new();
        for (id, question) in self.iter() {
            if predicate(question) {
                filtered.order.push(id.clone());
                filtered.questions.insert(id.clone(), question.clone());
            }
        }
        tracing::debug!(
            source_len = self.len(),
            len = filtered.len(),
            "questionnaire filtered"
        );
        filtered
    }

    /// Reorder the questions with a comparator over questions.
    ///
    /// The sort is stable. Identifiers keep addressing the same questions; only
    /// positions change.
    pub fn sort_by(&mut self, mut compare: impl FnMut(&Question, &Question) -> Ordering) {
        let questions = &self.questions;
        self.order.sort_by(|a, b| match (questions.get(a), questions.get(b)) {
            (Some(a), Some(b)) => compare(a, b),
            _ => Ordering::Equal,
        });
        tracing::debug!(len = self.len(), "questionnaire reordered");
    }

    /// Reorder the questions by a key extracted from each question. Stable.
    pub fn sort_by_key<K: Ord>(&mut self, mut key: impl FnMut(&Question) -> K) {
        self.sort_by(|a, b| key(a).cmp(&key(b)));
    }

    /// Fold every question into an accumulator, left to right in current order.
    pub fn fold<B>(&self, init: B, combine: impl FnMut(B, &Question) -> B) -> B {
        self.questions().fold(init, combine)
    }

    /// Let `respondent` answer this questionnaire, then check it is complete.
    ///
    /// Answers accepted before a failure are kept.
    pub fn administer<R: Respondent>(&mut self, respondent: &R) -> Result<(), AdministerError> {
        respondent.respond(self).map_err(AdministerError::respondent)?;

        let missing: Vec<QuestionId> = self.unanswered_required().into_iter().cloned().collect();
        if missing.is_empty() {
            Ok(())
        } else {
            tracing::debug!(missing = missing.len(), "questionnaire incomplete after respondent");
            Err(AdministerError::Incomplete { missing })
        }
    }
}

/// Renders each question as `Question: <prompt>\n\nAnswer: <answer>`, separated by a
/// blank line. An empty questionnaire renders as an empty string.
impl fmt::Display for Questionnaire {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, question) in self.questions().enumerate() {
            if index > 0 {
                f.write_str("\n\n")?;
            }
            write!(
                f,
                "Question: {}\n\nAnswer: {}",
                question.prompt(),
                question.answer()
            )?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a Questionnaire {
    type Item = (&'a QuestionId, &'a Question);
    type IntoIter = Box<dyn Iterator<Item = Self::Item> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}
