//! Application state for the guided LearnMate flow.
//!
//! `AppState` is a plain value. Transitions consume the current state and
//! return the next one; nothing here performs I/O or holds global state.

use crate::config::AppConfig;
use crate::intake::StudentProfile;
use crate::learning_path::LearningPath;
use coach::{ChatMessage, Conversation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Screens of the guided flow, in the order a new student visits them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Step {
    #[default]
    Welcome,
    StudentInfo,
    Assessment,
    LearningPath,
    Chat,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiState {
    pub step: Step,
    pub error: Option<String>,
    pub success_message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppState {
    pub student: StudentProfile,
    pub learning_path: Option<LearningPath>,
    pub conversation: Conversation,
    pub ui: UiState,
    progress_step: u8,
}

impl AppState {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            student: StudentProfile::default(),
            learning_path: None,
            conversation: Conversation::new(config.chat.max_history_length),
            ui: UiState::default(),
            progress_step: config.path.progress_per_course,
        }
    }

    /// Store the student, assigning an id on first save.
    pub fn with_student(mut self, mut student: StudentProfile) -> Self {
        student.id = student.id.or(self.student.id).or_else(|| Some(Uuid::new_v4()));
        self.student = student;
        self
    }

    pub fn with_learning_path(mut self, path: LearningPath) -> Self {
        self.learning_path = Some(path);
        self
    }

    pub fn with_message(mut self, message: ChatMessage) -> Self {
        self.conversation.push(message);
        self
    }

    pub fn clear_conversation(mut self) -> Self {
        self.conversation.clear();
        self
    }

    /// Mark a course of the current path as completed.
    ///
    /// Without a learning path this is a no-op.
    pub fn complete_course(mut self, course_id: &str) -> Self {
        let step = self.progress_step;
        self.learning_path = self
            .learning_path
            .map(|path| path.complete_course(course_id, step));
        self
    }

    pub fn go_to(mut self, step: Step) -> Self {
        self.ui.step = step;
        self
    }

    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.ui.error = Some(error.into());
        self
    }

    pub fn clear_error(mut self) -> Self {
        self.ui.error = None;
        self
    }

    pub fn with_success(mut self, message: impl Into<String>) -> Self {
        self.ui.success_message = Some(message.into());
        self
    }

    /// Back to a blank welcome screen, keeping configured bounds.
    pub fn reset(self) -> Self {
        let max_history = self.conversation.max_len();
        Self {
            student: StudentProfile::default(),
            learning_path: None,
            conversation: Conversation::new(max_history),
            ui: UiState::default(),
            progress_step: self.progress_step,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(&AppConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::complete_profile;
    use catalog::Catalog;

    #[test]
    fn test_initial_state() {
        let state = AppState::default();
        assert_eq!(state.ui.step, Step::Welcome);
        assert!(state.learning_path.is_none());
        assert!(state.conversation.is_empty());
    }

    #[test]
    fn test_with_student_assigns_stable_id() {
        let state = AppState::default().with_student(complete_profile());
        let id = state.student.id.unwrap();

        let mut edited = state.student.clone();
        edited.id = None;
        edited.goals = "New goals".to_string();
        let state = state.with_student(edited);
        assert_eq!(state.student.id, Some(id));
        assert_eq!(state.student.goals, "New goals");
    }

    #[test]
    fn test_complete_course_without_path_is_noop() {
        let state = AppState::default().complete_course("react-101");
        assert!(state.learning_path.is_none());
    }

    #[test]
    fn test_complete_course_uses_configured_step() {
        let mut config = AppConfig::default();
        config.path.progress_per_course = 25;
        let path = LearningPath::build(
            "Frontend Development",
            Catalog::builtin().courses()[..5].to_vec(),
            &config.path,
        );

        let state = AppState::new(&config)
            .with_learning_path(path)
            .complete_course("react-101");
        assert_eq!(state.learning_path.unwrap().progress_percentage, 25);
    }

    #[test]
    fn test_errors_and_reset() {
        let state = AppState::default()
            .with_student(complete_profile())
            .with_message(ChatMessage::user("hi"))
            .go_to(Step::Chat)
            .with_error("boom");
        assert_eq!(state.ui.error.as_deref(), Some("boom"));

        let state = state.clear_error();
        assert!(state.ui.error.is_none());

        let state = state.reset();
        assert_eq!(state, AppState::default());
    }
}
