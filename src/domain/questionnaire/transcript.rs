//! Conversation transcript for questionnaire sessions.
//!
//! The transcript is the rendered history of a session: assistant
//! prompts, user answers, and the terminal turns produced when a flow
//! completes or fails. Turns are immutable once created and the
//! transcript itself is append-only.

use serde::Serialize;

use crate::domain::foundation::{Timestamp, ValidationError};

/// Who produced a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Speaker {
    Assistant,
    User,
}

/// Classification of terminal assistant turns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TurnTag {
    /// The recommendation text returned by the service.
    Recommendation,
    /// A numeric score summary (complexity/value/classification).
    MetricsSummary,
    /// The single error turn shown when the terminal call fails.
    Error,
}

/// One entry in a session transcript.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConversationTurn {
    speaker: Speaker,
    text: String,
    choices: Vec<String>,
    tag: Option<TurnTag>,
    timestamp: Timestamp,
}

impl ConversationTurn {
    /// Creates a plain assistant turn.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if the text is empty after trimming.
    pub fn assistant(text: impl Into<String>) -> Result<Self, ValidationError> {
        Self::build(Speaker::Assistant, text, Vec::new(), None)
    }

    /// Creates an assistant turn presenting a question, carrying the
    /// offered choices (empty for free-text questions).
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if the prompt is empty after trimming.
    pub fn question(
        prompt: impl Into<String>,
        choices: Vec<String>,
    ) -> Result<Self, ValidationError> {
        Self::build(Speaker::Assistant, prompt, choices, None)
    }

    /// Creates a user turn.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if the text is empty after trimming.
    pub fn user(text: impl Into<String>) -> Result<Self, ValidationError> {
        Self::build(Speaker::User, text, Vec::new(), None)
    }

    /// Creates a tagged terminal assistant turn.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if the text is empty after trimming.
    pub fn assistant_tagged(
        text: impl Into<String>,
        tag: TurnTag,
    ) -> Result<Self, ValidationError> {
        Self::build(Speaker::Assistant, text, Vec::new(), Some(tag))
    }

    fn build(
        speaker: Speaker,
        text: impl Into<String>,
        choices: Vec<String>,
        tag: Option<TurnTag>,
    ) -> Result<Self, ValidationError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(ValidationError::empty_field("text"));
        }
        Ok(Self {
            speaker,
            text,
            choices,
            tag,
            timestamp: Timestamp::now(),
        })
    }

    // ─────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────

    pub fn speaker(&self) -> Speaker {
        self.speaker
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Choices attached to a question turn (empty otherwise).
    pub fn choices(&self) -> &[String] {
        &self.choices
    }

    pub fn tag(&self) -> Option<TurnTag> {
        self.tag
    }

    pub fn timestamp(&self) -> Timestamp {
        self.timestamp
    }
}

/// Append-only ordered sequence of turns.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Transcript {
    turns: Vec<ConversationTurn>,
}

impl Transcript {
    /// Creates an empty transcript.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a turn.
    pub fn append(&mut self, turn: ConversationTurn) {
        self.turns.push(turn);
    }

    /// All turns in order.
    pub fn turns(&self) -> &[ConversationTurn] {
        &self.turns
    }

    /// Number of turns.
    pub fn len(&self) -> usize {
        self.turns.len()
    }

    /// True when no turns have been appended.
    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    /// The most recent turn, if any.
    pub fn last(&self) -> Option<&ConversationTurn> {
        self.turns.last()
    }
}
