//! Application layer for LearnMate.
//!
//! Holds the guided-flow state, the intake form, learning paths, and the
//! orchestrator that drives the recommendation engine and the coach.

pub mod config;
pub mod intake;
pub mod learning_path;
pub mod orchestrator;
pub mod state;

pub use config::{AppConfig, ChatConfig, ConfigError, PathConfig};
pub use intake::{AssessmentAnswers, INTEREST_AREAS, IntakeError, StudentProfile};
pub use learning_path::{CompletedCourse, LearningPath, Milestone, MilestoneStatus};
pub use orchestrator::{AssessmentReport, ChatTurn, LearnMateOrchestrator, WorkflowError};
pub use state::{AppState, Step, UiState};

#[cfg(test)]
pub(crate) mod test_support {
    use crate::intake::StudentProfile;

    pub fn complete_profile() -> StudentProfile {
        StudentProfile {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            interests: vec!["Frontend Development".to_string()],
            goals: "Build a portfolio site".to_string(),
            ..StudentProfile::default()
        }
    }
}
