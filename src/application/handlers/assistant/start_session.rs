//! StartSessionHandler - Open a questionnaire session for a flow

use std::sync::Arc;

use crate::domain::foundation::SessionId;
use crate::domain::questionnaire::{FlowScript, QuestionnaireSession};
use crate::ports::{SessionStore, SessionStoreError};

/// Command to start a session for one advisory flow
#[derive(Debug, Clone)]
pub struct StartSessionCommand {
    pub script: Arc<FlowScript>,
}

/// Result of starting a session
#[derive(Debug, Clone)]
pub struct StartSessionResult {
    pub session: QuestionnaireSession,
}

/// Error type for starting sessions
#[derive(Debug, Clone)]
pub enum StartSessionError {
    /// Storage error
    Storage(String),
}

impl std::fmt::Display for StartSessionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StartSessionError::Storage(err) => write!(f, "Storage error: {}", err),
        }
    }
}

impl std::error::Error for StartSessionError {}

impl From<SessionStoreError> for StartSessionError {
    fn from(err: SessionStoreError) -> Self {
        StartSessionError::Storage(err.to_string())
    }
}

/// Handler for starting questionnaire sessions
pub struct StartSessionHandler {
    store: Arc<dyn SessionStore>,
}

impl StartSessionHandler {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        cmd: StartSessionCommand,
    ) -> Result<StartSessionResult, StartSessionError> {
        // 1. Create the session; the seed turns are appended on construction
        let session = QuestionnaireSession::new(SessionId::new(), cmd.script);

        // 2. Persist it
        self.store.save(&session).await?;

        Ok(StartSessionResult { session })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemorySessionStore;
    use crate::domain::questionnaire::{complexity_analyzer, roi_assistant, SessionPhase};

    #[tokio::test]
    async fn test_start_session_seeds_the_transcript() {
        let store = Arc::new(InMemorySessionStore::new());
        let handler = StartSessionHandler::new(store);

        let result = handler
            .handle(StartSessionCommand {
                script: roi_assistant(),
            })
            .await
            .unwrap();

        let session = result.session;
        assert_eq!(session.transcript().len(), 2);
        assert_eq!(session.phase(), SessionPhase::AwaitingAnswer { index: 0 });
        assert_eq!(session.active_question().unwrap().field(), "initiative_type");
    }

    #[tokio::test]
    async fn test_start_session_persists_the_session() {
        let store = Arc::new(InMemorySessionStore::new());
        let handler = StartSessionHandler::new(store.clone());

        let result = handler
            .handle(StartSessionCommand {
                script: complexity_analyzer(),
            })
            .await
            .unwrap();

        let loaded = store.load(result.session.id()).await.unwrap();
        assert_eq!(loaded.script().name(), "Complexity Analyzer");
        assert_eq!(loaded.transcript().len(), 2);
    }

    #[tokio::test]
    async fn test_each_start_gets_a_distinct_session() {
        let store = Arc::new(InMemorySessionStore::new());
        let handler = StartSessionHandler::new(store.clone());

        let first = handler
            .handle(StartSessionCommand {
                script: roi_assistant(),
            })
            .await
            .unwrap();
        let second = handler
            .handle(StartSessionCommand {
                script: roi_assistant(),
            })
            .await
            .unwrap();

        assert_ne!(first.session.id(), second.session.id());
        assert_eq!(store.session_count().await, 2);
    }
}
