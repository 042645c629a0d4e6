//! AI coaching layer for LearnMate.
//!
//! Free-text coaching is produced by an external text-generation service
//! behind the [`TextGenerator`] trait. This crate provides:
//! - The `TextGenerator` capability and its error type
//! - Prompt construction from a student summary
//! - A deterministic `OfflineResponder` keyed on simple keywords
//! - `CoachService`, which uses the generator when present and the
//!   offline responder otherwise
//! - A bounded chat `Conversation`

pub mod conversation;
pub mod offline;
pub mod prompts;
pub mod service;

pub use conversation::{ChatMessage, Conversation, DEFAULT_MAX_HISTORY, Sender};
pub use offline::{ChatTopic, OfflineResponder};
pub use prompts::StudentSummary;
pub use service::{CoachService, UnavailableGenerator};

use thiserror::Error;

/// Errors a text-generation backend can report
#[derive(Error, Debug)]
pub enum CoachError {
    #[error("Text generation service is unavailable")]
    Unavailable,

    #[error("Text generation failed: {0}")]
    Generation(String),

    #[error("Text generation returned an empty response")]
    EmptyResponse,
}

/// An opaque text-generation capability.
///
/// `prompt` is the full request text; `history` is the prior conversation,
/// oldest first. The returned text is shown to the learner verbatim.
pub trait TextGenerator: Send + Sync {
    fn generate(&self, prompt: &str, history: &[ChatMessage]) -> Result<String, CoachError>;
}
