//! Session Store Port - Interface for keeping questionnaire sessions.
//!
//! Sessions are interactive client state: they live for one user's walk
//! through a flow and are never durably persisted. The store exists so
//! handlers can load, mutate, and put back a session between awaits
//! without holding a lock across them.

use async_trait::async_trait;

use crate::domain::foundation::SessionId;
use crate::domain::questionnaire::QuestionnaireSession;

/// Errors that can occur during session store operations
#[derive(Debug, thiserror::Error)]
pub enum SessionStoreError {
    #[error("Session not found: {0}")]
    NotFound(SessionId),

    #[error("Storage error: {0}")]
    StorageFailed(String),
}

/// Port for keeping active questionnaire sessions
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Save a session, replacing any previous copy
    ///
    /// # Arguments
    /// * `session` - The session to save
    ///
    /// # Errors
    /// Returns `SessionStoreError` if save fails
    async fn save(&self, session: &QuestionnaireSession) -> Result<(), SessionStoreError>;

    /// Load a session by id
    ///
    /// # Arguments
    /// * `id` - The session ID
    ///
    /// # Errors
    /// Returns `SessionStoreError::NotFound` if no session exists
    async fn load(&self, id: SessionId) -> Result<QuestionnaireSession, SessionStoreError>;

    /// Delete a session; deleting a missing session is not an error
    ///
    /// # Arguments
    /// * `id` - The session ID
    ///
    /// # Errors
    /// Returns `SessionStoreError` if deletion fails
    async fn delete(&self, id: SessionId) -> Result<(), SessionStoreError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_names_the_session() {
        let id = SessionId::new();
        let err = SessionStoreError::NotFound(id);
        assert!(err.to_string().contains("Session not found"));
        assert!(err.to_string().contains(&id.to_string()));
    }
}
