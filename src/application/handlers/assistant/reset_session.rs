//! ResetSessionHandler - Restart a questionnaire from its first question

use std::sync::Arc;

use crate::domain::foundation::SessionId;
use crate::domain::questionnaire::QuestionnaireSession;
use crate::ports::{SessionStore, SessionStoreError};

/// Command to reset a session
#[derive(Debug, Clone)]
pub struct ResetSessionCommand {
    pub session_id: SessionId,
}

/// Result of resetting a session
#[derive(Debug, Clone)]
pub struct ResetSessionResult {
    pub session: QuestionnaireSession,
}

/// Error type for resetting sessions
#[derive(Debug, Clone)]
pub enum ResetSessionError {
    /// Session not found
    NotFound(SessionId),
    /// Storage error
    Storage(String),
}

impl std::fmt::Display for ResetSessionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResetSessionError::NotFound(id) => write!(f, "Session not found: {}", id),
            ResetSessionError::Storage(err) => write!(f, "Storage error: {}", err),
        }
    }
}

impl std::error::Error for ResetSessionError {}

impl From<SessionStoreError> for ResetSessionError {
    fn from(err: SessionStoreError) -> Self {
        match err {
            SessionStoreError::NotFound(session_id) => ResetSessionError::NotFound(session_id),
            other => ResetSessionError::Storage(other.to_string()),
        }
    }
}

/// Handler for resetting questionnaire sessions
pub struct ResetSessionHandler {
    store: Arc<dyn SessionStore>,
}

impl ResetSessionHandler {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        cmd: ResetSessionCommand,
    ) -> Result<ResetSessionResult, ResetSessionError> {
        // 1. Load the session
        let mut session = self.store.load(cmd.session_id).await?;

        // 2. Back to the seed turns with a fresh submission token, so any
        //    in-flight advisory result is recognized as stale
        session.reset();

        // 3. Put it back
        self.store.save(&session).await?;

        Ok(ResetSessionResult { session })
    }
}
