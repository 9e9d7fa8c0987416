//! Questionnaire module - Guided advisory flows.
//!
//! This module defines:
//! - Question definitions, successor routing, and flow catalogs
//! - The built-in ROI Assistant and Complexity Analyzer scripts
//! - The conversation transcript and the collected response map
//! - Terminal outcomes (ROI advice, complexity assessments)
//! - The session entity driving a user's walk through a flow

mod catalog;
mod flows;
mod outcome;
mod question;
mod response_map;
mod session;
mod transcript;

pub use catalog::QuestionCatalog;
pub use flows::{complexity_analyzer, roi_assistant, AdvisorKind, FlowScript};
pub use outcome::{AdvisorOutcome, ComplexityAssessment, RoiAdvice, ScoreBand};
pub use question::{InputKind, QuestionDefinition, Successor};
pub use response_map::ResponseMap;
pub use session::{
    AnswerDisposition, QuestionnaireSession, SessionPhase, TerminalApply,
};
pub use transcript::{ConversationTurn, Speaker, Transcript, TurnTag};
