//! Assistant flow command and query handlers.

mod get_transcript;
mod reset_session;
mod start_session;
mod submit_answer;

pub use get_transcript::{GetTranscriptHandler, GetTranscriptQuery, GetTranscriptResult};
pub use reset_session::{
    ResetSessionCommand, ResetSessionError, ResetSessionHandler, ResetSessionResult,
};
pub use start_session::{
    StartSessionCommand, StartSessionError, StartSessionHandler, StartSessionResult,
};
pub use submit_answer::{
    SubmitAnswerCommand, SubmitAnswerConfig, SubmitAnswerError, SubmitAnswerHandler,
    SubmitAnswerResult,
};
