//! Coaching operations with offline fallback.

use crate::conversation::ChatMessage;
use crate::offline::OfflineResponder;
use crate::prompts::{self, StudentSummary};
use crate::{CoachError, TextGenerator};
use std::sync::Arc;
use tracing::{debug, warn};

/// Front door for every coaching request.
///
/// Each operation builds a prompt, asks the configured generator, and falls
/// back to the [`OfflineResponder`] when no generator is configured or the
/// generator fails. None of the operations fail.
#[derive(Clone, Default)]
pub struct CoachService {
    generator: Option<Arc<dyn TextGenerator>>,
    offline: OfflineResponder,
}

impl CoachService {
    /// A coach that only ever answers from the offline responder.
    pub fn offline() -> Self {
        Self::default()
    }

    pub fn with_generator(generator: Arc<dyn TextGenerator>) -> Self {
        Self {
            generator: Some(generator),
            offline: OfflineResponder,
        }
    }

    pub fn is_online(&self) -> bool {
        self.generator.is_some()
    }

    /// Welcome text for a student who just completed intake.
    pub fn start_session(&self, student: &StudentSummary) -> String {
        let prompt = prompts::coaching_session(student);
        self.generate_or(&prompt, &[], || self.offline.coaching(student))
    }

    /// Evaluation of free-text assessment answers for one skill area.
    pub fn assess_skill(&self, skill_area: &str, answers: &str) -> String {
        let prompt = prompts::skill_assessment(skill_area, answers);
        self.generate_or(&prompt, &[], || self.offline.assessment(skill_area))
    }

    pub fn study_guidance(&self, topic: &str, student: &StudentSummary) -> String {
        let prompt = prompts::study_guidance(topic, student);
        self.generate_or(&prompt, &[], || self.offline.study_guidance(topic))
    }

    /// Reply to `message` given the conversation so far (oldest first,
    /// not including `message`).
    pub fn chat(&self, message: &str, history: &[ChatMessage]) -> String {
        self.generate_or(message, history, || self.offline.chat(message))
    }

    fn generate_or(
        &self,
        prompt: &str,
        history: &[ChatMessage],
        fallback: impl FnOnce() -> String,
    ) -> String {
        let Some(generator) = &self.generator else {
            debug!("No text generator configured; using offline response");
            return fallback();
        };

        let reply = generator.generate(prompt, history).and_then(|text| {
            if text.trim().is_empty() {
                Err(CoachError::EmptyResponse)
            } else {
                Ok(text)
            }
        });

        match reply {
            Ok(text) => text,
            Err(err) => {
                warn!("Text generation failed: {}; using offline response", err);
                fallback()
            }
        }
    }
}

impl std::fmt::Debug for CoachService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CoachService")
            .field("online", &self.is_online())
            .finish()
    }
}

/// Generator that always fails, for wiring tests and demos.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnavailableGenerator;

impl TextGenerator for UnavailableGenerator {
    fn generate(&self, _prompt: &str, _history: &[ChatMessage]) -> Result<String, CoachError> {
        Err(CoachError::Unavailable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Records every call and replies with a canned answer.
    struct ScriptedGenerator {
        reply: String,
        calls: Mutex<Vec<(String, usize)>>,
    }

    impl ScriptedGenerator {
        fn new(reply: &str) -> Self {
            Self {
                reply: reply.to_string(),
                calls: Mutex::new(Vec::new()),
            }
        }
    }

    impl TextGenerator for ScriptedGenerator {
        fn generate(&self, prompt: &str, history: &[ChatMessage]) -> Result<String, CoachError> {
            self.calls
                .lock()
                .unwrap()
                .push((prompt.to_string(), history.len()));
            Ok(self.reply.clone())
        }
    }

    #[test]
    fn test_offline_service_uses_fallback() {
        let coach = CoachService::offline();
        assert!(!coach.is_online());
        assert_eq!(coach.chat("hello", &[]), OfflineResponder.chat("hello"));
    }

    #[test]
    fn test_generator_reply_is_returned_verbatim() {
        let generator = Arc::new(ScriptedGenerator::new("Focus on closures next."));
        let coach = CoachService::with_generator(generator.clone());

        let history = vec![ChatMessage::user("hi"), ChatMessage::coach("hello")];
        let reply = coach.chat("what next?", &history);

        assert_eq!(reply, "Focus on closures next.");
        let calls = generator.calls.lock().unwrap();
        assert_eq!(calls.as_slice(), &[("what next?".to_string(), 2)]);
    }

    #[test]
    fn test_failing_generator_falls_back() {
        let coach = CoachService::with_generator(Arc::new(UnavailableGenerator));
        assert!(coach.is_online());
        assert_eq!(
            coach.study_guidance("lifetimes", &StudentSummary::default()),
            OfflineResponder.study_guidance("lifetimes")
        );
    }

    #[test]
    fn test_blank_reply_falls_back() {
        let coach = CoachService::with_generator(Arc::new(ScriptedGenerator::new("   ")));
        assert_eq!(
            coach.assess_skill("Data Science", "{}"),
            OfflineResponder.assessment("Data Science")
        );
    }

    #[test]
    fn test_session_prompt_goes_to_generator() {
        let generator = Arc::new(ScriptedGenerator::new("Welcome!"));
        let coach = CoachService::with_generator(generator.clone());
        let student = StudentSummary {
            name: "Lin".to_string(),
            ..StudentSummary::default()
        };

        assert_eq!(coach.start_session(&student), "Welcome!");
        let calls = generator.calls.lock().unwrap();
        assert!(calls[0].0.contains("- Name: Lin"));
    }
}
