//! GetTranscriptHandler - Query handler for a session's conversation view

use std::sync::Arc;

use crate::domain::foundation::SessionId;
use crate::domain::questionnaire::QuestionnaireSession;
use crate::ports::{SessionStore, SessionStoreError};

/// Query to fetch one session for display.
#[derive(Debug, Clone)]
pub struct GetTranscriptQuery {
    pub session_id: SessionId,
}

/// The full session: transcript, phase, and collected responses.
pub type GetTranscriptResult = QuestionnaireSession;

/// Handler for reading a session back out of the store.
pub struct GetTranscriptHandler {
    store: Arc<dyn SessionStore>,
}

impl GetTranscriptHandler {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        query: GetTranscriptQuery,
    ) -> Result<GetTranscriptResult, SessionStoreError> {
        self.store.load(query.session_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemorySessionStore;
    use crate::domain::questionnaire::roi_assistant;

    #[tokio::test]
    async fn test_get_transcript_returns_the_stored_session() {
        let store = Arc::new(InMemorySessionStore::new());
        let mut session = QuestionnaireSession::new(SessionId::new(), roi_assistant());
        session
            .record_answer("initiative_type", "AI Initiative")
            .unwrap();
        let session_id = session.id();
        store.save(&session).await.unwrap();

        let handler = GetTranscriptHandler::new(store);
        let loaded = handler
            .handle(GetTranscriptQuery { session_id })
            .await
            .unwrap();

        assert_eq!(loaded.id(), session_id);
        assert_eq!(loaded.transcript().len(), 3);
        assert_eq!(loaded.responses().get("initiative_type"), Some("AI Initiative"));
    }

    #[tokio::test]
    async fn test_get_transcript_fails_if_session_not_found() {
        let store = Arc::new(InMemorySessionStore::new());
        let handler = GetTranscriptHandler::new(store);

        let result = handler
            .handle(GetTranscriptQuery {
                session_id: SessionId::new(),
            })
            .await;

        assert!(matches!(result, Err(SessionStoreError::NotFound(_))));
    }
}
