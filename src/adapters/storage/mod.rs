//! Storage Adapters
//!
//! Implementations of the SessionStore port for holding questionnaire
//! sessions.
//!
//! ## Available Adapters
//!
//! - **InMemorySessionStore** - Keeps sessions in memory for the
//!   lifetime of the process

mod in_memory_session_store;

pub use in_memory_session_store::InMemorySessionStore;
