//! Ordered question catalogs.
//!
//! A catalog holds the full question list for one flow and answers the
//! navigation queries the session state machine needs: which question
//! starts the flow, which question owns a field, and which question
//! follows a given answer.

use crate::domain::foundation::ValidationError;

use super::question::QuestionDefinition;

/// The ordered question list for a single flow.
#[derive(Debug, Clone, PartialEq)]
pub struct QuestionCatalog {
    questions: Vec<QuestionDefinition>,
}

impl QuestionCatalog {
    /// Builds a catalog, checking flow-level invariants.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if:
    /// - The question list is empty
    /// - Two questions share a field identifier
    /// - A successor routes to a field no question owns
    pub fn try_new(questions: Vec<QuestionDefinition>) -> Result<Self, ValidationError> {
        if questions.is_empty() {
            return Err(ValidationError::empty_field("questions"));
        }

        for (i, question) in questions.iter().enumerate() {
            if questions[..i].iter().any(|q| q.field() == question.field()) {
                return Err(ValidationError::invalid_format(
                    "questions",
                    format!("duplicate field '{}'", question.field()),
                ));
            }
        }

        for question in &questions {
            for target in question.successor().targets() {
                if !questions.iter().any(|q| q.field() == target) {
                    return Err(ValidationError::invalid_format(
                        "questions",
                        format!(
                            "successor of '{}' routes to unknown field '{}'",
                            question.field(),
                            target
                        ),
                    ));
                }
            }
        }

        Ok(Self { questions })
    }

    /// Number of questions in the catalog.
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// True when the catalog holds no questions (never constructible
    /// through `try_new`).
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// The question that opens the flow.
    pub fn first(&self) -> &QuestionDefinition {
        &self.questions[0]
    }

    /// The question at a position, if in range.
    pub fn get(&self, index: usize) -> Option<&QuestionDefinition> {
        self.questions.get(index)
    }

    /// Position and definition of the question owning a field.
    pub fn by_field(&self, field: &str) -> Option<(usize, &QuestionDefinition)> {
        self.questions
            .iter()
            .enumerate()
            .find(|(_, q)| q.field() == field)
    }

    /// Position and definition of the question that follows once the
    /// question at `index` is answered with `answer`. `None` when that
    /// answer completes the flow.
    pub fn next_after(&self, index: usize, answer: &str) -> Option<(usize, &QuestionDefinition)> {
        let current = self.questions.get(index)?;
        let next_field = current.next_field(answer)?;
        self.by_field(next_field)
    }

    /// All field identifiers in catalog order.
    pub fn fields(&self) -> Vec<&str> {
        self.questions.iter().map(|q| q.field()).collect()
    }

    /// Iterates the questions in order.
    pub fn iter(&self) -> impl Iterator<Item = &QuestionDefinition> {
        self.questions.iter()
    }
}
