//! Questionnaire Session Entity
//!
//! Tracks one user's walk through a flow: the transcript, the answers
//! collected so far, and where the session sits in its lifecycle.
//!
//! A freshly created (or reset) session already carries the two seed
//! turns (welcome plus first question) and awaits the first answer.
//! Answering the last question moves the session to `Submitting`; the
//! terminal outcome is applied only when the caller presents the
//! submission token captured at that moment, so a response that raced a
//! reset is recognized as stale and dropped.

use std::sync::Arc;

use crate::domain::foundation::{
    DomainError, ErrorCode, SessionId, SubmissionToken, Timestamp, ValidationError,
};

use super::flows::FlowScript;
use super::outcome::AdvisorOutcome;
use super::question::QuestionDefinition;
use super::response_map::ResponseMap;
use super::transcript::{ConversationTurn, Transcript, TurnTag};

/// Where a session sits in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// Waiting for the user to answer the question at `index`.
    AwaitingAnswer { index: usize },
    /// Answer recorded; the successor question is queued for display.
    PresentingNext { next_index: usize },
    /// Every question answered; the terminal call is in flight.
    Submitting,
    /// Terminal display state after a successful outcome.
    Completed,
    /// Terminal display state after a failed terminal call.
    Failed,
}

impl SessionPhase {
    /// True for the display states a session ends in.
    pub fn is_terminal(&self) -> bool {
        matches!(self, SessionPhase::Completed | SessionPhase::Failed)
    }
}

/// What recording an answer led to.
#[derive(Debug, Clone)]
pub enum AnswerDisposition {
    /// More questions remain; the successor is queued for presentation.
    Advanced,
    /// Every question is answered. The terminal call should be made with
    /// this snapshot and its result applied under this token.
    SequenceComplete {
        token: SubmissionToken,
        responses: ResponseMap,
    },
}

/// Whether a terminal result was applied or recognized as stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminalApply {
    Applied,
    StaleIgnored,
}

/// One user's in-memory walk through a flow.
#[derive(Debug, Clone)]
pub struct QuestionnaireSession {
    id: SessionId,
    script: Arc<FlowScript>,
    token: SubmissionToken,
    phase: SessionPhase,
    responses: ResponseMap,
    transcript: Transcript,
    started_at: Timestamp,
    updated_at: Timestamp,
}

impl QuestionnaireSession {
    /// Creates a session with the seed turns appended, awaiting the
    /// first answer.
    pub fn new(id: SessionId, script: Arc<FlowScript>) -> Self {
        let transcript = Self::seed_transcript(&script);
        let now = Timestamp::now();
        Self {
            id,
            script,
            token: SubmissionToken::new(),
            phase: SessionPhase::AwaitingAnswer { index: 0 },
            responses: ResponseMap::new(),
            transcript,
            started_at: now,
            updated_at: now,
        }
    }

    /// Records the answer for the currently active question.
    ///
    /// Appends the user turn and, when this was the last question, the
    /// processing interstitial.
    ///
    /// # Errors
    ///
    /// Returns `DomainError` if the session is not awaiting an answer,
    /// the field is not the active question, or the answer fails the
    /// question's validation.
    pub fn record_answer(
        &mut self,
        field: &str,
        raw_answer: &str,
    ) -> Result<AnswerDisposition, DomainError> {
        let index = match self.phase {
            SessionPhase::AwaitingAnswer { index } => index,
            SessionPhase::PresentingNext { .. } => {
                return Err(DomainError::new(
                    ErrorCode::InvalidStateTransition,
                    "next question has not been presented yet",
                ))
            }
            SessionPhase::Submitting => {
                return Err(DomainError::new(
                    ErrorCode::InvalidStateTransition,
                    "submission already in progress",
                ))
            }
            SessionPhase::Completed | SessionPhase::Failed => {
                return Err(DomainError::new(
                    ErrorCode::SessionAlreadyTerminal,
                    "session has already finished",
                ))
            }
        };

        let catalog = self.script.catalog();
        let question = catalog.get(index).ok_or_else(|| {
            DomainError::new(ErrorCode::InternalError, "active question index out of range")
        })?;

        if question.field() != field {
            return Err(self.wrong_field_error(field));
        }

        let answer = question.validate_answer(raw_answer).map_err(|e| {
            DomainError::from(e).with_detail("field", field)
        })?;

        self.transcript.append(ConversationTurn::user(&answer)?);
        self.responses.insert(field, answer.clone())?;

        let disposition = match catalog.next_after(index, &answer) {
            Some((next_index, _)) => {
                self.phase = SessionPhase::PresentingNext { next_index };
                AnswerDisposition::Advanced
            }
            None => {
                self.phase = SessionPhase::Submitting;
                self.transcript
                    .append(ConversationTurn::assistant(self.script.processing())?);
                AnswerDisposition::SequenceComplete {
                    token: self.token,
                    responses: self.responses.clone(),
                }
            }
        };

        self.touch();
        Ok(disposition)
    }

    /// Appends the queued successor question and starts awaiting its
    /// answer. Called after the display pacing delay. The newly active
    /// question is available through [`Self::active_question`].
    ///
    /// # Errors
    ///
    /// Returns `DomainError` unless an answer was just recorded with
    /// more questions remaining.
    pub fn present_next_question(&mut self) -> Result<(), DomainError> {
        let next_index = match self.phase {
            SessionPhase::PresentingNext { next_index } => next_index,
            _ => {
                return Err(DomainError::new(
                    ErrorCode::InvalidStateTransition,
                    "no question is queued for presentation",
                ))
            }
        };

        let question = self.script.catalog().get(next_index).ok_or_else(|| {
            DomainError::new(ErrorCode::InternalError, "queued question index out of range")
        })?;
        let turn = ConversationTurn::question(question.prompt(), question.choices().to_vec())?;

        self.transcript.append(turn);
        self.phase = SessionPhase::AwaitingAnswer { index: next_index };
        self.touch();
        Ok(())
    }

    /// Applies a successful terminal outcome: the metrics summary turn
    /// when the outcome carries scores, then the recommendation turn.
    ///
    /// A token minted before the latest reset no longer matches and the
    /// outcome is ignored.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if the outcome's recommendation text is
    /// blank (the adapter rejects such responses before this point).
    pub fn complete(
        &mut self,
        token: SubmissionToken,
        outcome: &AdvisorOutcome,
    ) -> Result<TerminalApply, ValidationError> {
        if !self.accepts_terminal(token) {
            return Ok(TerminalApply::StaleIgnored);
        }

        if let Some(summary) = outcome.metrics_summary() {
            self.transcript
                .append(ConversationTurn::assistant_tagged(summary, TurnTag::MetricsSummary)?);
        }
        self.transcript.append(ConversationTurn::assistant_tagged(
            outcome.recommendation(),
            TurnTag::Recommendation,
        )?);

        self.phase = SessionPhase::Completed;
        self.touch();
        Ok(TerminalApply::Applied)
    }

    /// Applies a failed terminal call: appends the flow's error turn.
    ///
    /// Stale tokens are ignored, exactly as in [`Self::complete`].
    pub fn fail(&mut self, token: SubmissionToken) -> TerminalApply {
        if !self.accepts_terminal(token) {
            return TerminalApply::StaleIgnored;
        }

        let turn = ConversationTurn::assistant_tagged(self.script.failure(), TurnTag::Error)
            .expect("flow failure copy is validated non-empty");
        self.transcript.append(turn);
        self.phase = SessionPhase::Failed;
        self.touch();
        TerminalApply::Applied
    }

    /// Returns the session to its initial state: seed turns, empty
    /// responses, fresh submission token. Valid from any phase.
    pub fn reset(&mut self) {
        self.token = SubmissionToken::new();
        self.responses = ResponseMap::new();
        self.transcript = Self::seed_transcript(&self.script);
        self.phase = SessionPhase::AwaitingAnswer { index: 0 };
        self.touch();
    }

    // ─────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn script(&self) -> &FlowScript {
        &self.script
    }

    pub fn token(&self) -> SubmissionToken {
        self.token
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn responses(&self) -> &ResponseMap {
        &self.responses
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn started_at(&self) -> Timestamp {
        self.started_at
    }

    pub fn updated_at(&self) -> Timestamp {
        self.updated_at
    }

    /// The question currently awaiting an answer, if any.
    pub fn active_question(&self) -> Option<&QuestionDefinition> {
        match self.phase {
            SessionPhase::AwaitingAnswer { index } => self.script.catalog().get(index),
            _ => None,
        }
    }

    // ─────────────────────────────────────────────────────────────────
    // Internals
    // ─────────────────────────────────────────────────────────────────

    fn seed_transcript(script: &FlowScript) -> Transcript {
        let mut transcript = Transcript::new();
        transcript.append(
            ConversationTurn::assistant(script.welcome())
                .expect("flow welcome copy is validated non-empty"),
        );
        let first = script.catalog().first();
        transcript.append(
            ConversationTurn::question(first.prompt(), first.choices().to_vec())
                .expect("flow question prompts are validated non-empty"),
        );
        transcript
    }

    fn accepts_terminal(&self, token: SubmissionToken) -> bool {
        self.token == token && self.phase == SessionPhase::Submitting
    }

    fn wrong_field_error(&self, field: &str) -> DomainError {
        if self.responses.contains(field) {
            DomainError::new(
                ErrorCode::QuestionAlreadyAnswered,
                format!("'{}' has already been answered", field),
            )
        } else if self.script.catalog().by_field(field).is_none() {
            DomainError::new(
                ErrorCode::QuestionNotFound,
                format!("no question owns field '{}'", field),
            )
        } else {
            DomainError::new(
                ErrorCode::InvalidStateTransition,
                format!("'{}' is not the active question", field),
            )
        }
    }

    fn touch(&mut self) {
        self.updated_at = Timestamp::now();
    }
}
