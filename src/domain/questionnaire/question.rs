//! Question definitions for guided questionnaire flows.
//!
//! A flow is an ordered list of [`QuestionDefinition`]s walked one at a
//! time. Every shipped flow is strictly linear, but the successor of a
//! question is resolved as a function of (field, answer) so a flow may
//! branch on answer content without changing this model.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;

/// How a question collects its answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputKind {
    /// Any non-empty text is accepted.
    FreeText,
    /// The answer must match one of the offered choices.
    SingleChoice,
}

/// Resolves which question follows once the current one is answered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Successor {
    /// No further questions; answering completes the flow.
    Terminal,
    /// The same next field regardless of the answer.
    Always(String),
    /// Next field selected by answer text, with a default route for
    /// answers that match no entry.
    ByAnswer {
        routes: Vec<(String, String)>,
        otherwise: String,
    },
}

impl Successor {
    /// Returns the field that follows for the given answer, or `None`
    /// when the flow completes.
    pub fn resolve(&self, answer: &str) -> Option<&str> {
        match self {
            Successor::Terminal => None,
            Successor::Always(field) => Some(field),
            Successor::ByAnswer { routes, otherwise } => Some(
                routes
                    .iter()
                    .find(|(candidate, _)| candidate == answer)
                    .map(|(_, next)| next.as_str())
                    .unwrap_or(otherwise),
            ),
        }
    }

    /// Every field this successor can route to.
    pub fn targets(&self) -> Vec<&str> {
        match self {
            Successor::Terminal => Vec::new(),
            Successor::Always(field) => vec![field.as_str()],
            Successor::ByAnswer { routes, otherwise } => {
                let mut targets: Vec<&str> =
                    routes.iter().map(|(_, next)| next.as_str()).collect();
                targets.push(otherwise.as_str());
                targets
            }
        }
    }
}

/// A single question in a flow.
///
/// Immutable once constructed; flows are static configuration loaded at
/// startup.
#[derive(Debug, Clone, PartialEq)]
pub struct QuestionDefinition {
    field: String,
    prompt: String,
    kind: InputKind,
    choices: Vec<String>,
    successor: Successor,
}

impl QuestionDefinition {
    /// Creates a free-text question.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if the field or prompt is empty after
    /// trimming.
    pub fn free_text(
        field: impl Into<String>,
        prompt: impl Into<String>,
        successor: Successor,
    ) -> Result<Self, ValidationError> {
        let field = field.into();
        let prompt = prompt.into();
        Self::validate_identity(&field, &prompt)?;

        Ok(Self {
            field,
            prompt,
            kind: InputKind::FreeText,
            choices: Vec::new(),
            successor,
        })
    }

    /// Creates a single-choice question.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if the field or prompt is empty, the
    /// choice list is empty, any choice is blank, or a choice repeats.
    pub fn single_choice(
        field: impl Into<String>,
        prompt: impl Into<String>,
        choices: Vec<impl Into<String>>,
        successor: Successor,
    ) -> Result<Self, ValidationError> {
        let field = field.into();
        let prompt = prompt.into();
        Self::validate_identity(&field, &prompt)?;

        let choices: Vec<String> = choices.into_iter().map(Into::into).collect();
        if choices.is_empty() {
            return Err(ValidationError::empty_field("choices"));
        }
        for choice in &choices {
            if choice.trim().is_empty() {
                return Err(ValidationError::empty_field("choice"));
            }
        }
        for (i, choice) in choices.iter().enumerate() {
            if choices[..i].contains(choice) {
                return Err(ValidationError::invalid_format(
                    "choices",
                    format!("duplicate choice '{}'", choice),
                ));
            }
        }

        Ok(Self {
            field,
            prompt,
            kind: InputKind::SingleChoice,
            choices,
            successor,
        })
    }

    fn validate_identity(field: &str, prompt: &str) -> Result<(), ValidationError> {
        if field.trim().is_empty() {
            return Err(ValidationError::empty_field("field"));
        }
        if prompt.trim().is_empty() {
            return Err(ValidationError::empty_field("prompt"));
        }
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────

    /// The field identifier the answer is recorded under.
    pub fn field(&self) -> &str {
        &self.field
    }

    /// The prompt presented to the user.
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// How the question collects its answer.
    pub fn kind(&self) -> InputKind {
        self.kind
    }

    /// The offered choices (empty for free-text questions).
    pub fn choices(&self) -> &[String] {
        &self.choices
    }

    /// The successor resolution rule.
    pub fn successor(&self) -> &Successor {
        &self.successor
    }

    // ─────────────────────────────────────────────────────────────────
    // Behavior
    // ─────────────────────────────────────────────────────────────────

    /// Validates a raw answer and returns the normalized (trimmed) form.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if the answer is empty after trimming,
    /// or for single-choice questions, if it matches no offered choice.
    pub fn validate_answer(&self, raw: &str) -> Result<String, ValidationError> {
        let answer = raw.trim();
        if answer.is_empty() {
            return Err(ValidationError::empty_field(self.field.clone()));
        }
        if self.kind == InputKind::SingleChoice
            && !self.choices.iter().any(|choice| choice == answer)
        {
            return Err(ValidationError::invalid_format(
                self.field.clone(),
                format!("'{}' is not one of the offered choices", answer),
            ));
        }
        Ok(answer.to_string())
    }

    /// The field that follows for the given answer, or `None` when this
    /// question completes the flow.
    pub fn next_field(&self, answer: &str) -> Option<&str> {
        self.successor.resolve(answer)
    }
}
