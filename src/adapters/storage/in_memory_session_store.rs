//! In-Memory Session Store Adapter
//!
//! Keeps questionnaire sessions in memory, keyed by session id.
//! Sessions are client state: they live for the duration of a
//! conversation and are never persisted across restarts.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::SessionId;
use crate::domain::questionnaire::QuestionnaireSession;
use crate::ports::{SessionStore, SessionStoreError};

/// In-memory storage for questionnaire sessions
#[derive(Debug, Clone, Default)]
pub struct InMemorySessionStore {
    sessions: Arc<RwLock<HashMap<SessionId, QuestionnaireSession>>>,
}

impl InMemorySessionStore {
    /// Create a new in-memory store
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear all stored sessions (useful for tests)
    pub async fn clear(&self) {
        self.sessions.write().await.clear();
    }

    /// Get the number of stored sessions
    pub async fn session_count(&self) -> usize {
        self.sessions.read().await.len()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn save(&self, session: &QuestionnaireSession) -> Result<(), SessionStoreError> {
        let mut sessions = self.sessions.write().await;
        sessions.insert(session.id(), session.clone());
        Ok(())
    }

    async fn load(&self, id: SessionId) -> Result<QuestionnaireSession, SessionStoreError> {
        let sessions = self.sessions.read().await;
        sessions
            .get(&id)
            .cloned()
            .ok_or(SessionStoreError::NotFound(id))
    }

    async fn delete(&self, id: SessionId) -> Result<(), SessionStoreError> {
        let mut sessions = self.sessions.write().await;
        sessions.remove(&id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::questionnaire::roi_assistant;

    fn sample_session() -> QuestionnaireSession {
        QuestionnaireSession::new(SessionId::new(), roi_assistant())
    }

    #[tokio::test]
    async fn save_and_load_round_trips() {
        let store = InMemorySessionStore::new();
        let session = sample_session();

        store.save(&session).await.unwrap();
        let loaded = store.load(session.id()).await.unwrap();

        assert_eq!(loaded.id(), session.id());
        assert_eq!(loaded.token(), session.token());
    }

    #[tokio::test]
    async fn load_missing_session_is_not_found() {
        let store = InMemorySessionStore::new();

        let result = store.load(SessionId::new()).await;
        assert!(matches!(result, Err(SessionStoreError::NotFound(_))));
    }

    #[tokio::test]
    async fn save_overwrites_existing_session() {
        let store = InMemorySessionStore::new();
        let mut session = sample_session();

        store.save(&session).await.unwrap();
        session.reset();
        store.save(&session).await.unwrap();

        let loaded = store.load(session.id()).await.unwrap();
        assert_eq!(loaded.token(), session.token());
        assert_eq!(store.session_count().await, 1);
    }

    #[tokio::test]
    async fn delete_removes_the_session() {
        let store = InMemorySessionStore::new();
        let session = sample_session();

        store.save(&session).await.unwrap();
        store.delete(session.id()).await.unwrap();

        assert!(store.load(session.id()).await.is_err());
    }

    #[tokio::test]
    async fn delete_missing_session_is_not_an_error() {
        let store = InMemorySessionStore::new();

        assert!(store.delete(SessionId::new()).await.is_ok());
    }

    #[tokio::test]
    async fn clear_empties_the_store() {
        let store = InMemorySessionStore::new();
        store.save(&sample_session()).await.unwrap();
        store.save(&sample_session()).await.unwrap();

        store.clear().await;
        assert_eq!(store.session_count().await, 0);
    }
}
