//! SubmitAnswerHandler - Record an answer and drive the flow forward
//!
//! An intermediate answer queues the successor question, which is
//! appended after a short display pacing delay. The final answer
//! triggers the flow's terminal advisory call under the session's
//! submission token: the outcome is applied only if the token still
//! matches after the call returns, so a reset issued mid-flight wins.
//!
//! Advisory failures are not handler errors. The session lands in the
//! Failed phase with the flow's error copy appended, and the caller
//! renders the transcript exactly as it would for a success.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, warn};

use crate::domain::foundation::{DomainError, SessionId, SubmissionToken};
use crate::domain::questionnaire::{
    AdvisorKind, AdvisorOutcome, AnswerDisposition, QuestionnaireSession, ResponseMap,
    TerminalApply,
};
use crate::ports::{RecommendationClient, RecommendationError, SessionStore, SessionStoreError};

/// Command to answer the active question of a session
#[derive(Debug, Clone)]
pub struct SubmitAnswerCommand {
    pub session_id: SessionId,
    pub field: String,
    pub answer: String,
}

/// Result of submitting an answer
#[derive(Debug, Clone)]
pub struct SubmitAnswerResult {
    pub session: QuestionnaireSession,
}

/// Timing knobs for answer handling.
#[derive(Debug, Clone)]
pub struct SubmitAnswerConfig {
    /// Delay before the successor question is appended, matching the
    /// interactive display cadence.
    pub question_pacing: Duration,
    /// Ceiling on the terminal advisory call.
    pub submit_timeout: Duration,
}

impl Default for SubmitAnswerConfig {
    fn default() -> Self {
        Self {
            question_pacing: Duration::from_millis(500),
            submit_timeout: Duration::from_secs(30),
        }
    }
}

/// Error type for submitting answers
#[derive(Debug, Clone)]
pub enum SubmitAnswerError {
    /// Session not found
    NotFound(SessionId),
    /// Storage error
    Storage(String),
    /// Domain error
    Domain(DomainError),
}

impl std::fmt::Display for SubmitAnswerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SubmitAnswerError::NotFound(id) => write!(f, "Session not found: {}", id),
            SubmitAnswerError::Storage(err) => write!(f, "Storage error: {}", err),
            SubmitAnswerError::Domain(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for SubmitAnswerError {}

impl From<DomainError> for SubmitAnswerError {
    fn from(err: DomainError) -> Self {
        SubmitAnswerError::Domain(err)
    }
}

impl From<SessionStoreError> for SubmitAnswerError {
    fn from(err: SessionStoreError) -> Self {
        match err {
            SessionStoreError::NotFound(session_id) => SubmitAnswerError::NotFound(session_id),
            other => SubmitAnswerError::Storage(other.to_string()),
        }
    }
}

/// Handler for submitting answers
pub struct SubmitAnswerHandler<C: ?Sized + RecommendationClient> {
    store: Arc<dyn SessionStore>,
    advisor: Arc<C>,
    config: SubmitAnswerConfig,
}

impl<C: ?Sized + RecommendationClient> SubmitAnswerHandler<C> {
    pub fn new(store: Arc<dyn SessionStore>, advisor: Arc<C>) -> Self {
        Self {
            store,
            advisor,
            config: SubmitAnswerConfig::default(),
        }
    }

    /// Creates a handler with custom timing configuration.
    pub fn with_config(
        store: Arc<dyn SessionStore>,
        advisor: Arc<C>,
        config: SubmitAnswerConfig,
    ) -> Self {
        Self {
            store,
            advisor,
            config,
        }
    }

    pub async fn handle(
        &self,
        cmd: SubmitAnswerCommand,
    ) -> Result<SubmitAnswerResult, SubmitAnswerError> {
        // 1. Load the session
        let mut session = self.store.load(cmd.session_id).await?;

        // 2. Record the answer against the active question
        let disposition = session.record_answer(&cmd.field, &cmd.answer)?;

        match disposition {
            // 3a. More questions remain: pace, present the successor, put back
            AnswerDisposition::Advanced => {
                tokio::time::sleep(self.config.question_pacing).await;
                session.present_next_question()?;
                self.store.save(&session).await?;
                Ok(SubmitAnswerResult { session })
            }
            // 3b. Flow complete: persist the interstitial state, then run
            //     the advisory call and apply its outcome under the token
            AnswerDisposition::SequenceComplete { token, responses } => {
                let advisor_kind = session.script().advisor();
                self.store.save(&session).await?;
                self.finish_flow(cmd.session_id, advisor_kind, token, &responses)
                    .await
            }
        }
    }

    /// Runs the terminal advisory call and lands the session in a
    /// displayable phase.
    ///
    /// The session is reloaded after the call: a reset issued while the
    /// call was in flight rotated the token, and the stale outcome must
    /// not clobber the fresh state.
    async fn finish_flow(
        &self,
        session_id: SessionId,
        advisor_kind: AdvisorKind,
        token: SubmissionToken,
        responses: &ResponseMap,
    ) -> Result<SubmitAnswerResult, SubmitAnswerError> {
        // 1. Run the advisory call with a hard timeout
        let call = self.request_outcome(advisor_kind, responses);
        let outcome = match tokio::time::timeout(self.config.submit_timeout, call).await {
            Ok(Ok(outcome)) => Some(outcome),
            Ok(Err(err)) => {
                warn!(
                    session_id = %session_id,
                    error = %err,
                    retryable = err.is_retryable(),
                    "Advisory call failed"
                );
                None
            }
            Err(_) => {
                warn!(
                    session_id = %session_id,
                    timeout_secs = self.config.submit_timeout.as_secs(),
                    "Advisory call timed out"
                );
                None
            }
        };

        // 2. Reload and apply under the token captured at submission
        let mut session = self.store.load(session_id).await?;
        let applied = match &outcome {
            Some(outcome) => match session.complete(token, outcome) {
                Ok(applied) => applied,
                Err(err) => {
                    warn!(session_id = %session_id, error = %err, "Advisory outcome rejected");
                    session.fail(token)
                }
            },
            None => session.fail(token),
        };

        // 3. Persist only when the outcome actually landed
        match applied {
            TerminalApply::Applied => {
                debug!(session_id = %session_id, phase = ?session.phase(), "Terminal outcome applied");
                self.store.save(&session).await?;
            }
            TerminalApply::StaleIgnored => {
                warn!(session_id = %session_id, "Stale terminal outcome ignored");
            }
        }

        Ok(SubmitAnswerResult { session })
    }

    async fn request_outcome(
        &self,
        advisor_kind: AdvisorKind,
        responses: &ResponseMap,
    ) -> Result<AdvisorOutcome, RecommendationError> {
        match advisor_kind {
            AdvisorKind::Roi => self
                .advisor
                .advise_roi(responses)
                .await
                .map(AdvisorOutcome::Roi),
            AdvisorKind::Complexity => self
                .advisor
                .analyze_complexity(responses)
                .await
                .map(AdvisorOutcome::Complexity),
        }
    }
}
